use crate::{
    capabilities::TargetCapabilities,
    compile::QueryTarget,
    error::CompileError,
};
use serde::{Deserialize, Serialize};
use sift_syntax::{ComparisonOp, Identifier, Literal};

/// Identifier quoting and placeholder style for the rendered WHERE clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlDialect {
    MySql,
    Postgres,
}

impl SqlDialect {
    pub fn quote_identifier(&self, ident: &str) -> String {
        match self {
            SqlDialect::MySql => format!("`{ident}`"),
            SqlDialect::Postgres => format!(r#""{ident}""#),
        }
    }
}

/// A parameterized WHERE clause plus its bind values, in placeholder order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlQuery {
    sql: String,
    params: Vec<Literal>,
    dialect: SqlDialect,
}

impl SqlQuery {
    /// The clause with dialect-appropriate parameter markers: `?` for MySQL,
    /// `$1`, `$2`, … for Postgres. Markers are renumbered here because
    /// fragments are composed bottom-up and only the finished clause knows
    /// the final parameter positions.
    pub fn where_clause(&self) -> String {
        match self.dialect {
            SqlDialect::MySql => self.sql.clone(),
            SqlDialect::Postgres => {
                let mut out = String::with_capacity(self.sql.len());
                let mut index = 0;
                for ch in self.sql.chars() {
                    if ch == '?' {
                        index += 1;
                        out.push_str(&format!("${index}"));
                    } else {
                        out.push(ch);
                    }
                }
                out
            }
        }
    }

    pub fn params(&self) -> &[Literal] {
        &self.params
    }
}

/// Lowers predicates into parameterized SQL text for an external store.
#[derive(Debug, Clone, Copy)]
pub struct SqlTarget {
    dialect: SqlDialect,
}

impl SqlTarget {
    pub fn new(dialect: SqlDialect) -> Self {
        Self { dialect }
    }
}

fn sql_op(op: ComparisonOp) -> &'static str {
    match op {
        ComparisonOp::Equal => "=",
        ComparisonOp::NotEqual => "<>",
        ComparisonOp::GreaterThan => ">",
        ComparisonOp::LessThan => "<",
        ComparisonOp::GreaterOrEqual => ">=",
        ComparisonOp::LessOrEqual => "<=",
    }
}

impl QueryTarget for SqlTarget {
    type Query = SqlQuery;

    fn name(&self) -> &str {
        match self.dialect {
            SqlDialect::MySql => "sql-mysql",
            SqlDialect::Postgres => "sql-postgres",
        }
    }

    fn capabilities(&self) -> TargetCapabilities {
        TargetCapabilities::full()
    }

    fn term(
        &self,
        field: &Identifier,
        op: ComparisonOp,
        value: &Literal,
    ) -> Result<SqlQuery, CompileError> {
        Ok(SqlQuery {
            sql: format!(
                "{} {} ?",
                self.dialect.quote_identifier(&field.name),
                sql_op(op)
            ),
            params: vec![value.clone()],
            dialect: self.dialect,
        })
    }

    fn conjunction(&self, left: SqlQuery, right: SqlQuery) -> SqlQuery {
        let mut params = left.params;
        params.extend(right.params);
        SqlQuery {
            sql: format!("({} AND {})", left.sql, right.sql),
            params,
            dialect: self.dialect,
        }
    }

    fn disjunction(&self, left: SqlQuery, right: SqlQuery) -> SqlQuery {
        let mut params = left.params;
        params.extend(right.params);
        SqlQuery {
            sql: format!("({} OR {})", left.sql, right.sql),
            params,
            dialect: self.dialect,
        }
    }

    fn negation(&self, inner: SqlQuery) -> Result<SqlQuery, CompileError> {
        Ok(SqlQuery {
            sql: format!("(NOT {})", inner.sql),
            params: inner.params,
            dialect: self.dialect,
        })
    }
}
