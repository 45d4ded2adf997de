use model::{Record, Value};
use predicate_engine::Filter;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// In-memory record collection: the query-execution collaborator that
/// accepts a compiled [`Filter`] as its criterion. No persistence, no sync;
/// records live and die with the collection.
#[derive(Debug, Default)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    pub fn new() -> Self {
        Collection::default()
    }

    /// Inserts a record, assigning a fresh `itemId` when the record does not
    /// carry one. Returns the id.
    pub fn insert(&mut self, mut record: Record) -> String {
        let id = match record.get("itemId").and_then(|v| v.as_str()) {
            Some(id) => id.to_string(),
            None => {
                let id = Uuid::new_v4().to_string();
                record.set("itemId", Value::String(id.clone()));
                id
            }
        };
        debug!(item_id = %id, "inserted record");
        self.records.push(record);
        id
    }

    /// Removes the record with the given `itemId`. Returns whether anything
    /// was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records
            .retain(|r| r.get("itemId").and_then(|v| v.as_str()) != Some(id));
        before != self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_all(&self, filter: &Filter) -> Vec<&Record> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    pub fn find_first(&self, filter: &Filter) -> Option<&Record> {
        self.records.iter().find(|r| filter.matches(r))
    }
}

/// Orders query results by one field. Records missing the field (or holding
/// an incomparable value) sort last regardless of direction.
pub fn sort_records(records: &mut [&Record], field: &str, direction: Direction) {
    records.sort_by(|a, b| {
        let ordering = match (a.get(field), b.get(field)) {
            (Some(left), Some(right)) => left.compare(right),
            _ => None,
        };
        match ordering {
            Some(ordering) => match direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            },
            None => {
                // incomparable pairs keep missing-field records at the end
                match (a.contains(field), b.contains(field)) {
                    (true, false) => std::cmp::Ordering::Less,
                    (false, true) => std::cmp::Ordering::Greater,
                    _ => std::cmp::Ordering::Equal,
                }
            }
        }
    });
}
