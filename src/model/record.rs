use crate::model::{Identifiable, Named};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record fetched from one of the dashboard's REST collections.
///
/// `PATH` names the resource segment of the endpoint, e.g. `activities`
/// for `<base>/api/activities/`.
pub trait ResourceRecord:
    Identifiable + Named + Clone + PartialEq + Serialize + DeserializeOwned + 'static
{
    const PATH: &'static str;
}

/// Display fallback for loosely-shaped records: absent or empty fields
/// render as "N/A" instead of failing.
pub fn display_or_na(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => "N/A",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_field_renders_placeholder() {
        assert_eq!(display_or_na(None), "N/A");
        assert_eq!(display_or_na(Some("")), "N/A");
        assert_eq!(display_or_na(Some("Flying")), "Flying");
    }
}
