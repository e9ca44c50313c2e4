use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

static NULL: Value = Value::Null;

/// One row of a dataset: an ordered mapping from field name to scalar value
///
/// Field order follows insertion order, both when built in code and when
/// deserialized from a JSON object.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Value of a field, with a missing field read as `null`
    pub fn get_or_null(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&NULL)
    }

    /// Set a field, keeping its original position if it was already present
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(field.into(), value)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<IndexMap<String, Value>> for Record {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Text used when a value becomes a field name
///
/// Strings are used verbatim. Numbers use their shortest decimal text, so
/// `2024` and `2024.0` both become `"2024"`. Every other value uses its JSON
/// text, so `null` becomes `"null"`.
pub fn field_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

/// Identity of a value for deduplication
///
/// Unlike [`field_key`] this keeps the JSON type, so `"1"` and `1` differ.
/// Numbers compare by value, so `1` and `1.0` are the same.
pub(crate) fn identity_key(value: &Value) -> String {
    match value {
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        match n.as_f64() {
            // `-0.0` and `0.0` are the same key
            Some(f) if f == 0.0 => "0".to_string(),
            // f64 Display drops the fraction of integral values
            Some(f) => f.to_string(),
            None => n.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_preserves_field_order() {
        let record: Record =
            serde_json::from_value(json!({"zeta": 1, "alpha": 2, "mid": 3})).unwrap();
        let names: Vec<_> = record.field_names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_missing_field_reads_as_null() {
        let record = Record::from_iter([("a", json!(1))]);
        assert_eq!(record.get_or_null("a"), &json!(1));
        assert_eq!(record.get_or_null("b"), &Value::Null);
        assert_eq!(record.get("b"), None);
    }

    #[test]
    fn test_field_key() {
        assert_eq!(field_key(&json!("East")), "East");
        assert_eq!(field_key(&json!(2024)), "2024");
        assert_eq!(field_key(&json!(1.5)), "1.5");
        assert_eq!(field_key(&json!(2024.0)), "2024");
        assert_eq!(field_key(&json!(-0.0)), "0");
        assert_eq!(field_key(&json!(true)), "true");
        assert_eq!(field_key(&Value::Null), "null");
    }

    #[test]
    fn test_identity_key_distinguishes_types() {
        assert_ne!(identity_key(&json!("1")), identity_key(&json!(1)));
        assert_eq!(identity_key(&json!("a")), identity_key(&json!("a")));
        assert_ne!(identity_key(&json!("2024")), identity_key(&json!(2024.0)));
    }

    #[test]
    fn test_identity_key_compares_numbers_by_value() {
        assert_eq!(identity_key(&json!(1)), identity_key(&json!(1.0)));
        assert_eq!(identity_key(&json!(-3)), identity_key(&json!(-3.0)));
        assert_ne!(identity_key(&json!(1)), identity_key(&json!(1.5)));
    }
}
