use std::io::Read;
use std::path::Path;

use anyhow::Context;

use crate::models::WorkRecord;

pub fn load_records(path: &Path) -> anyhow::Result<Vec<WorkRecord>> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    read_records(reader)
}

pub fn read_records<R: Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Vec<WorkRecord>> {
    let mut records = Vec::new();

    for row in reader.deserialize::<WorkRecord>() {
        records.push(row.context("malformed row in work session export")?);
    }

    Ok(records)
}
