//! Results of single store write operations, returned to clients verbatim.

use serde::Serialize;

/// Outcome of an insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    /// `None` when the insert was skipped (e.g. duplicate email)
    pub inserted_id: Option<String>,
}

impl InsertResult {
    pub fn inserted(id: impl ToString) -> Self {
        Self {
            acknowledged: true,
            inserted_id: Some(id.to_string()),
        }
    }

    pub fn skipped() -> Self {
        Self {
            acknowledged: true,
            inserted_id: None,
        }
    }
}

/// Outcome of an update by filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateResult {
    pub fn new(rows_affected: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count: rows_affected,
            modified_count: rows_affected,
        }
    }
}

/// Outcome of a delete by filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn new(rows_affected: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count: rows_affected,
        }
    }
}
