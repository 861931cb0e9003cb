use serde::Deserialize;

/// Response body of a list endpoint. The API serves either an enveloped
/// page (`{"results": [...]}`, extra keys ignored) or a bare array; both
/// normalize to the same record vector.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Enveloped { results: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListPayload<T> {
    pub fn into_records(self) -> Vec<T> {
        match self {
            ListPayload::Enveloped { results } => results,
            ListPayload::Bare(records) => records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Activity;

    #[test]
    fn bare_array() {
        let payload: ListPayload<Activity> =
            serde_json::from_str(r#"[{"id": "1"}, {"id": "2"}]"#).unwrap();
        assert_eq!(payload.into_records().len(), 2);
    }

    #[test]
    fn enveloped_results() {
        let payload: ListPayload<Activity> = serde_json::from_str(
            r#"{"count": 3, "next": null, "results": [{"id": "1"}, {"id": "2"}, {"id": "3"}]}"#,
        )
        .unwrap();
        assert_eq!(payload.into_records().len(), 3);
    }

    #[test]
    fn empty_collections() {
        let bare: ListPayload<Activity> = serde_json::from_str("[]").unwrap();
        assert!(bare.into_records().is_empty());
        let enveloped: ListPayload<Activity> =
            serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(enveloped.into_records().is_empty());
    }

    #[test]
    fn malformed_body_is_an_error() {
        let payload: Result<ListPayload<Activity>, _> = serde_json::from_str("\"nope\"");
        assert!(payload.is_err());
    }
}
