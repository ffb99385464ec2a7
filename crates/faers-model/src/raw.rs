//! Total accessors over raw FAERS records.
//!
//! Raw reports arrive as untyped `serde_json::Value` trees in whatever
//! shape the source API produced. Every accessor here is total: malformed
//! shapes yield `None`, an empty slice, or `false`, never a panic.

use serde_json::{Map, Value};

static EMPTY: [Value; 0] = [];

/// The report identifier, stringified from a string or numeric scalar.
///
/// Returns `None` for missing/null/non-scalar ids; blank-after-trim ids
/// are left to the validator to classify.
pub fn report_id(record: &Value) -> Option<String> {
    scalar_string(record.get("safetyreportid")?)
}

/// The nested patient object, when present and actually an object.
pub fn patient(record: &Value) -> Option<&Map<String, Value>> {
    record.get("patient")?.as_object()
}

/// The patient's drug entries, or an empty slice.
pub fn drug_entries(record: &Value) -> &[Value] {
    nested_list(record, "drug")
}

/// The patient's reaction entries, or an empty slice.
pub fn reaction_entries(record: &Value) -> &[Value] {
    nested_list(record, "reaction")
}

fn nested_list<'a>(record: &'a Value, key: &str) -> &'a [Value] {
    patient(record)
        .and_then(|p| p.get(key))
        .and_then(Value::as_array)
        .map_or(&EMPTY[..], Vec::as_slice)
}

/// Stringify a scalar JSON value; `None` for null, arrays, and objects.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Look up `key` on an object and stringify the scalar found there.
pub fn scalar_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(scalar_string)
}

/// Look up `key` on a record that may not be an object.
pub fn record_field(record: &Value, key: &str) -> Option<String> {
    record.get(key).and_then(scalar_string)
}

/// Source-style truthiness for seriousness flags.
///
/// Null and absent are false, numbers are compared against zero, strings
/// and collections are true when non-empty. FAERS encodes these flags as
/// `"1"`/`"2"` strings, so any populated value counts as set.
pub fn bool_flag(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Whether a top-level field value counts toward the completeness score.
///
/// Mirrors the dedup rule: only null, empty string, empty array, and
/// empty object are "missing"; zero and false are populated values.
pub fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(_) | Value::Bool(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn report_id_handles_scalar_shapes() {
        assert_eq!(
            report_id(&json!({"safetyreportid": "A1"})),
            Some("A1".to_string())
        );
        assert_eq!(
            report_id(&json!({"safetyreportid": 42})),
            Some("42".to_string())
        );
        assert_eq!(report_id(&json!({"safetyreportid": null})), None);
        assert_eq!(report_id(&json!({})), None);
        assert_eq!(report_id(&json!("not an object")), None);
    }

    #[test]
    fn nested_lists_degrade_to_empty() {
        let rec = json!({"patient": {"drug": [{"medicinalproduct": "x"}]}});
        assert_eq!(drug_entries(&rec).len(), 1);
        assert!(reaction_entries(&rec).is_empty());
        assert!(drug_entries(&json!({"patient": "bogus"})).is_empty());
        assert!(drug_entries(&json!(null)).is_empty());
    }

    #[test]
    fn truthiness_matches_source_rules() {
        assert!(bool_flag(Some(&json!("1"))));
        assert!(bool_flag(Some(&json!("0"))), "non-empty string is set");
        assert!(!bool_flag(Some(&json!(""))));
        assert!(!bool_flag(Some(&json!(null))));
        assert!(!bool_flag(None));
        assert!(bool_flag(Some(&json!(2))));
        assert!(!bool_flag(Some(&json!(0))));
    }

    #[test]
    fn populated_counts_zero_but_not_empty() {
        assert!(is_populated(&json!(0)));
        assert!(is_populated(&json!(false)));
        assert!(!is_populated(&json!("")));
        assert!(!is_populated(&json!([])));
        assert!(!is_populated(&json!({})));
        assert!(!is_populated(&json!(null)));
    }
}
