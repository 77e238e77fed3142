//! Module records as served by the backend feed

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::core::ModuleKind;

/// One clinical-operations module as returned by `GET /api/modules`.
///
/// Records are externally supplied and never mutated; each successful
/// fetch replaces the whole list. `id` is assumed unique within one load
/// but is not validated here; lookups take the first match.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleRecord {
    pub id: String,
    pub title: String,
    pub description: String,

    /// Metric name -> displayable value. Absent or empty means no pills.
    #[serde(default)]
    pub kpis: BTreeMap<String, serde_json::Value>,

    /// Shown only in the active module's detail panel.
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl ModuleRecord {
    pub fn kind(&self) -> ModuleKind {
        ModuleKind::from_id(&self.id)
    }

    /// KPI pairs in mapping iteration order, values formatted for display.
    pub fn kpi_pairs(&self) -> Vec<(String, String)> {
        self.kpis
            .iter()
            .map(|(label, value)| (label.clone(), display_value(value)))
            .collect()
    }
}

/// Render a KPI value as plain text. Strings drop their JSON quotes;
/// numbers and booleans use their canonical form.
pub fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_value_strips_string_quotes() {
        assert_eq!(display_value(&serde_json::json!("12 today")), "12 today");
        assert_eq!(display_value(&serde_json::json!(120)), "120");
        assert_eq!(display_value(&serde_json::json!(3.5)), "3.5");
    }

    #[test]
    fn kpi_pairs_follow_mapping_order() {
        let record: ModuleRecord = serde_json::from_value(serde_json::json!({
            "id": "exam-scheduling",
            "title": "Scheduling",
            "description": "Exam slots",
            "kpis": {"booked": 42, "waitlist": "7"}
        }))
        .unwrap();

        let pairs = record.kpi_pairs();
        assert_eq!(
            pairs,
            vec![
                ("booked".to_string(), "42".to_string()),
                ("waitlist".to_string(), "7".to_string()),
            ]
        );
    }
}
