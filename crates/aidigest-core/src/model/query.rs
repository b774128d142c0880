use serde_json::Value;

use crate::error::CoreError;

/// One matched item reference returned by the query engine.
///
/// Rows are semi-structured; the only field this tool reads is `path`.
/// A missing or non-string `path` leaves the row in place but marks it
/// unresolvable, and the digest writer skips it silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub path: Option<String>,
}

impl Row {
    fn from_value(value: &Value) -> Self {
        let path = value.get("path").and_then(Value::as_str).map(String::from);
        Self { path }
    }
}

/// Outcome of one engine evaluation, ingested from the JSON wire form
/// `{"successful": bool, "value": {"values": [...]}, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Failure { message: String },
    Success { rows: Vec<Row> },
}

impl QueryResult {
    /// Validate an engine reply exactly once, at ingestion.
    ///
    /// A falsy or absent `successful` flag is a structured failure carrying
    /// the engine's own `error` message. A truthy flag without a well-formed
    /// `value.values` array is a malformed result.
    pub fn from_value(value: &Value) -> Result<Self, CoreError> {
        let successful = value
            .get("successful")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        if !successful {
            let message = value
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Ok(QueryResult::Failure { message });
        }

        let values = value
            .get("value")
            .and_then(|v| v.get("values"))
            .and_then(Value::as_array)
            .ok_or_else(|| {
                CoreError::MalformedResult("expected a value.values array".to_string())
            })?;

        let rows = values.iter().map(Row::from_value).collect();
        Ok(QueryResult::Success { rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_carries_engine_message() {
        let reply = json!({"successful": false, "error": "unknown source"});
        let result = QueryResult::from_value(&reply).unwrap();
        assert_eq!(
            result,
            QueryResult::Failure {
                message: "unknown source".into()
            }
        );
    }

    #[test]
    fn test_missing_flag_is_failure() {
        let reply = json!({"value": {"values": []}});
        match QueryResult::from_value(&reply).unwrap() {
            QueryResult::Failure { message } => assert_eq!(message, "unknown error"),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_non_object_reply_is_failure() {
        let reply = json!("not a result");
        assert!(matches!(
            QueryResult::from_value(&reply).unwrap(),
            QueryResult::Failure { .. }
        ));
    }

    #[test]
    fn test_success_extracts_rows_in_order() {
        let reply = json!({
            "successful": true,
            "value": {"values": [{"path": "a.md"}, {"path": "b.md"}]}
        });
        let result = QueryResult::from_value(&reply).unwrap();
        assert_eq!(
            result,
            QueryResult::Success {
                rows: vec![
                    Row {
                        path: Some("a.md".into())
                    },
                    Row {
                        path: Some("b.md".into())
                    },
                ]
            }
        );
    }

    #[test]
    fn test_successful_without_values_is_malformed() {
        for reply in [
            json!({"successful": true}),
            json!({"successful": true, "value": {}}),
            json!({"successful": true, "value": {"values": "nope"}}),
        ] {
            assert!(matches!(
                QueryResult::from_value(&reply),
                Err(CoreError::MalformedResult(_))
            ));
        }
    }

    #[test]
    fn test_unusable_paths_survive_ingestion() {
        let reply = json!({
            "successful": true,
            "value": {"values": [{"path": 42}, {"name": "no path"}, "bare string"]}
        });
        match QueryResult::from_value(&reply).unwrap() {
            QueryResult::Success { rows } => {
                assert_eq!(rows.len(), 3);
                assert!(rows.iter().all(|r| r.path.is_none()));
            }
            other => panic!("expected success, got {other:?}"),
        }
    }
}
