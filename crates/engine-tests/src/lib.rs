#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use model::{Record, Value};
use store::Collection;


fn ts(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

fn task(body: &str, done: bool, timestamp: DateTime<Utc>) -> Record {
    Record::new()
        .with_value("body", Value::String(body.into()))
        .with_value("isDone", Value::Boolean(done))
        .with_value("timestamp", Value::Timestamp(timestamp))
}

/// Task list the scenarios query against.
fn sample_tasks() -> Collection {
    let mut collection = Collection::new();
    collection.insert(task("jonah", false, ts(2018, 4, 27, 9)));
    collection.insert(task("jonah", true, ts(2018, 4, 20, 9)));
    collection.insert(task("zach", false, ts(2018, 4, 25, 9)));
    collection.insert(task("emily", true, ts(2018, 4, 28, 9)));
    collection
}

fn bodies(rows: &[&Record]) -> Vec<String> {
    rows.iter()
        .map(|r| r.get("body").unwrap().as_str().unwrap().to_string())
        .collect()
}
