//! Conversions from external data representations into [`Context`]
//!
//! Objects map to `Object`, arrays to `Array`, everything else to `Scalar`.

use super::{Context, Scalar};

impl From<serde_json::Value> for Context {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Context::null(),
            Value::Bool(b) => Context::Scalar(Scalar::Bool(b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Context::Scalar(Scalar::Integer(i)),
                // u64 beyond i64::MAX and real numbers
                None => Context::Scalar(Scalar::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            Value::String(s) => Context::Scalar(Scalar::String(s)),
            Value::Array(items) => Context::Array(items.into_iter().map(Context::from).collect()),
            Value::Object(map) => Context::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Context::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<toml::Value> for Context {
    fn from(value: toml::Value) -> Self {
        use toml::Value;

        match value {
            Value::String(s) => Context::Scalar(Scalar::String(s)),
            Value::Integer(i) => Context::Scalar(Scalar::Integer(i)),
            Value::Float(f) => Context::Scalar(Scalar::Float(f)),
            Value::Boolean(b) => Context::Scalar(Scalar::Bool(b)),
            Value::Datetime(dt) => Context::Scalar(Scalar::String(dt.to_string())),
            Value::Array(items) => Context::Array(items.into_iter().map(Context::from).collect()),
            Value::Table(table) => Context::Object(
                table
                    .into_iter()
                    .map(|(key, value)| (key, Context::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<toml::Table> for Context {
    fn from(table: toml::Table) -> Self {
        Context::from(toml::Value::Table(table))
    }
}

impl From<Scalar> for Context {
    fn from(scalar: Scalar) -> Self {
        Context::Scalar(scalar)
    }
}

impl From<&str> for Context {
    fn from(s: &str) -> Self {
        Context::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Context {
    fn from(s: String) -> Self {
        Context::Scalar(Scalar::String(s))
    }
}

impl From<bool> for Context {
    fn from(b: bool) -> Self {
        Context::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Context {
    fn from(i: i64) -> Self {
        Context::Scalar(Scalar::Integer(i))
    }
}

impl From<f64> for Context {
    fn from(f: f64) -> Self {
        Context::Scalar(Scalar::Float(f))
    }
}

impl From<Vec<Context>> for Context {
    fn from(items: Vec<Context>) -> Self {
        Context::Array(items)
    }
}

impl<K: Into<String>> FromIterator<(K, Context)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, Context)>>(iter: I) -> Self {
        Context::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use toml::toml;

    #[test]
    fn test_from_json_kinds() {
        let ctx = Context::from(json!({
            "name": "Ada",
            "age": 36,
            "ratio": 0.5,
            "active": true,
            "nothing": null,
            "tags": ["x", "y"]
        }));

        assert_eq!(ctx.get("name"), Some(&Context::from("Ada")));
        assert_eq!(ctx.get("age"), Some(&Context::from(36i64)));
        assert_eq!(ctx.get("ratio"), Some(&Context::from(0.5)));
        assert_eq!(ctx.get("active"), Some(&Context::from(true)));
        assert_eq!(ctx.get("nothing"), Some(&Context::null()));
        assert_eq!(ctx.get("tags").and_then(Context::len), Some(2));
    }

    #[test]
    fn test_from_json_large_unsigned_becomes_float() {
        let ctx = Context::from(json!(u64::MAX));
        assert!(matches!(ctx, Context::Scalar(Scalar::Float(_))));
    }

    #[test]
    fn test_from_toml_table() {
        let data = toml! {
            title = "Paper"
            date = 2026-01-15

            [[authors]]
            name = "Alice"
        };
        let ctx = Context::from(data);

        assert_eq!(ctx.get("title").and_then(Context::as_str), Some("Paper"));
        assert_eq!(ctx.get("date").and_then(Context::as_str), Some("2026-01-15"));
        let authors = ctx.get("authors").and_then(Context::as_array).unwrap();
        assert_eq!(authors[0].get("name").and_then(Context::as_str), Some("Alice"));
    }

    #[test]
    fn test_collect_into_object() {
        let ctx: Context = [("a", Context::from(1i64)), ("b", Context::from("two"))]
            .into_iter()
            .collect();
        assert_eq!(ctx.len(), Some(2));
        assert_eq!(ctx.get("b").and_then(Context::as_str), Some("two"));
    }
}
