//! The homework-status feed and its validation.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ContractError;

/// One homework record from the status feed.
#[derive(Debug, Clone, Deserialize)]
pub struct HomeworkEntry {
    /// Display name of the homework; the API may omit it.
    pub homework_name: Option<String>,
    /// Raw review status code.
    pub status: String,
}

/// A parsed homework-status API response.
///
/// Keeps the raw JSON so that contract violations (missing key, wrong type)
/// stay distinguishable from a body that failed to decode at all.
#[derive(Debug, Clone)]
pub struct StatusFeed {
    body: Value,
}

impl StatusFeed {
    #[must_use]
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// Validated list of homework entries, most recent first.
    ///
    /// An empty list is a valid outcome (nothing recorded yet), not an error.
    pub fn homeworks(&self) -> Result<Vec<HomeworkEntry>, ContractError> {
        let value = self
            .body
            .get("homeworks")
            .ok_or(ContractError::MissingField { field: "homeworks" })?;
        let items = value.as_array().ok_or(ContractError::WrongType {
            field: "homeworks",
            expected: "array",
        })?;
        items
            .iter()
            .map(|item| {
                serde_json::from_value(item.clone()).map_err(|_| ContractError::WrongType {
                    field: "homeworks",
                    expected: "array of objects with a string `status`",
                })
            })
            .collect()
    }

    /// Server-reported timestamp of this poll, when present and integral.
    #[must_use]
    pub fn current_date(&self) -> Option<i64> {
        self.body.get("current_date").and_then(Value::as_i64)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn entries_come_back_in_feed_order() {
        let feed = StatusFeed::new(json!({
            "homeworks": [
                { "homework_name": "hw2", "status": "reviewing" },
                { "homework_name": "hw1", "status": "approved" },
            ],
            "current_date": 1000,
        }));
        let homeworks = feed.homeworks().expect("extract");
        assert_eq!(homeworks.len(), 2);
        assert_eq!(homeworks[0].homework_name.as_deref(), Some("hw2"));
        assert_eq!(homeworks[1].status, "approved");
        assert_eq!(feed.current_date(), Some(1000));
    }

    #[test]
    fn empty_list_is_not_an_error() {
        let feed = StatusFeed::new(json!({ "homeworks": [] }));
        assert!(feed.homeworks().expect("extract").is_empty());
        assert_eq!(feed.current_date(), None);
    }

    #[test]
    fn missing_homeworks_key_fails() {
        let feed = StatusFeed::new(json!({ "current_date": 1000 }));
        match feed.homeworks().unwrap_err() {
            ContractError::MissingField { field } => assert_eq!(field, "homeworks"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn non_array_homeworks_fails() {
        let feed = StatusFeed::new(json!({ "homeworks": "approved" }));
        match feed.homeworks().unwrap_err() {
            ContractError::WrongType { field, .. } => assert_eq!(field, "homeworks"),
            other => panic!("expected WrongType, got {other:?}"),
        }
    }

    #[test]
    fn entry_without_status_fails() {
        let feed = StatusFeed::new(json!({ "homeworks": [ { "homework_name": "hw1" } ] }));
        assert!(matches!(
            feed.homeworks().unwrap_err(),
            ContractError::WrongType { .. }
        ));
    }

    #[test]
    fn non_integer_current_date_reads_as_absent() {
        let feed = StatusFeed::new(json!({ "homeworks": [], "current_date": "soon" }));
        assert_eq!(feed.current_date(), None);
    }
}
