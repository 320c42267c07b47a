//! Ordered candidate-key resolution and lenient value coercion
//!
//! The API has shipped the same attribute under different keys across versions
//! and mirrors. Each target attribute gets an explicit [`Candidates`] list; the
//! first key whose value coerces successfully wins.

use serde_json::Value;

/// Ordered list of raw keys that may carry one attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidates(&'static [&'static str]);

impl Candidates {
    /// Create a candidate list; earlier keys take priority
    pub const fn new(keys: &'static [&'static str]) -> Self {
        Self(keys)
    }

    /// Keys in priority order
    pub fn keys(&self) -> &'static [&'static str] {
        self.0
    }

    /// First candidate value that is present and not null
    pub fn first_present<'a>(&self, raw: &'a Value) -> Option<&'a Value> {
        self.0.iter().filter_map(|key| raw.get(*key)).find(|value| !value.is_null())
    }

    /// First candidate value that `coerce` accepts
    ///
    /// A present but unusable value (e.g. `"abc"` for a number) falls through
    /// to the next candidate instead of short-circuiting.
    pub fn resolve<T>(&self, raw: &Value, coerce: impl Fn(&Value) -> Option<T>) -> Option<T> {
        self.0.iter().filter_map(|key| raw.get(*key)).find_map(coerce)
    }

    /// First candidate that holds a JSON object
    pub fn object<'a>(&self, raw: &'a Value) -> Option<&'a Value> {
        self.0.iter().filter_map(|key| raw.get(*key)).find(|value| value.is_object())
    }

    /// Resolve a string attribute
    pub fn text(&self, raw: &Value) -> Option<String> {
        self.resolve(raw, text)
    }

    /// Resolve a required string attribute, defaulting to the empty string
    pub fn text_or_empty(&self, raw: &Value) -> String {
        self.text(raw).unwrap_or_default()
    }
}

/// Non-blank strings as-is, numbers rendered (some mirrors send numeric ids)
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Finite number from a JSON number or a numeric string
pub fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// Integer from a JSON integer, an integral float, or an integer string
pub fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

/// Non-negative count (titles, wins, positions)
pub fn count(value: &Value) -> Option<u32> {
    integer(value).and_then(|n| u32::try_from(n).ok())
}

fn integral(n: f64) -> Option<i64> {
    (n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64).then_some(n as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NAME: Candidates = Candidates::new(&["teamName", "team_name", "name"]);

    #[test]
    fn priority_order_is_respected() {
        let raw = json!({"name": "third", "team_name": "second", "teamName": "first"});
        assert_eq!(NAME.text(&raw).as_deref(), Some("first"));

        let raw = json!({"name": "third", "team_name": "second"});
        assert_eq!(NAME.text(&raw).as_deref(), Some("second"));
    }

    #[test]
    fn null_and_blank_fall_through() {
        let raw = json!({"teamName": null, "team_name": "  ", "name": "Williams"});
        assert_eq!(NAME.text(&raw).as_deref(), Some("Williams"));
        assert_eq!(NAME.first_present(&raw), Some(&json!("  ")));
    }

    #[test]
    fn missing_everywhere_is_none() {
        assert_eq!(NAME.text(&json!({})), None);
        assert_eq!(NAME.text_or_empty(&json!({})), "");
        assert_eq!(NAME.text_or_empty(&json!("not an object")), "");
    }

    #[test]
    fn integer_coercion() {
        assert_eq!(integer(&json!(44)), Some(44));
        assert_eq!(integer(&json!("44")), Some(44));
        assert_eq!(integer(&json!(" 7 ")), Some(7));
        assert_eq!(integer(&json!(33.0)), Some(33));
        assert_eq!(integer(&json!(33.5)), None);
        assert_eq!(integer(&json!("abc")), None);
        assert_eq!(integer(&json!("NaN")), None);
        assert_eq!(integer(&json!(true)), None);
        assert_eq!(integer(&Value::Null), None);
    }

    #[test]
    fn number_coercion_rejects_non_finite() {
        assert_eq!(number(&json!("25.5")), Some(25.5));
        assert_eq!(number(&json!(18)), Some(18.0));
        assert_eq!(number(&json!("inf")), None);
        assert_eq!(number(&json!("")), None);
    }

    #[test]
    fn count_rejects_negative() {
        assert_eq!(count(&json!(-1)), None);
        assert_eq!(count(&json!("3")), Some(3));
    }

    #[test]
    fn object_skips_scalars() {
        let keys = Candidates::new(&["driver", "Driver"]);
        let raw = json!({"driver": "ver", "Driver": {"driverId": "max_verstappen"}});
        assert_eq!(keys.object(&raw), Some(&json!({"driverId": "max_verstappen"})));
    }
}
