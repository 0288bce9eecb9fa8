//! Parse `--set-value` entries into a nested override mapping.
//!
//! Each flag occurrence may carry several comma-separated `key=value` pairs,
//! and dotted keys denote nesting, so `replicas=3,env.tier=canary` expands to
//! `{replicas: 3, env: {tier: canary}}` — the shape [`deep_merge`](crate::merge::deep_merge)
//! expects for its overlay.

use serde_yaml::{Mapping, Value};

use crate::error::Error;

/// Parse one `--set-value` occurrence into `overrides`.
///
/// Pairs are applied left to right; if several entries target the same key,
/// the last one wins. A dotted entry that collides with an earlier scalar
/// (`a=1,a.b=2`) replaces it with a nested mapping.
pub fn parse_into(entry: &str, overrides: &mut Mapping) -> Result<(), Error> {
    for pair in entry.split(',') {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(Error::InvalidOverride {
                entry: pair.to_string(),
                reason: "expected KEY=VALUE".into(),
            });
        };
        if key.is_empty() {
            return Err(Error::InvalidOverride {
                entry: pair.to_string(),
                reason: "empty key".into(),
            });
        }
        set_nested(overrides, key, parse_scalar(value));
    }
    Ok(())
}

fn set_nested(mapping: &mut Mapping, dotted_key: &str, value: Value) {
    match dotted_key.split_once('.') {
        None => {
            mapping.insert(Value::String(dotted_key.to_string()), value);
        }
        Some((head, rest)) => {
            let slot = mapping
                .entry(Value::String(head.to_string()))
                .or_insert_with(|| Value::Mapping(Mapping::new()));
            if !slot.is_mapping() {
                *slot = Value::Mapping(Mapping::new());
            }
            if let Value::Mapping(sub) = slot {
                set_nested(sub, rest, value);
            }
        }
    }
}

/// Parse an override value into a typed YAML scalar.
/// Tries: bool → null → integer → float → string.
fn parse_scalar(s: &str) -> Value {
    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if s == "null" {
        return Value::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::Number(i.into());
    }
    if let Ok(f) = s.parse::<f64>() {
        // Only use float if the string actually contains a dot,
        // to avoid "NaN" / "inf" being parsed as float.
        if s.contains('.') {
            return Value::Number(f.into());
        }
    }
    Value::String(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(entries: &[&str]) -> Mapping {
        let mut overrides = Mapping::new();
        for entry in entries {
            parse_into(entry, &mut overrides).unwrap();
        }
        overrides
    }

    #[test]
    fn flat_key() {
        let overrides = parse(&["host=0.0.0.0"]);
        assert_eq!(overrides["host"].as_str().unwrap(), "0.0.0.0");
    }

    #[test]
    fn dotted_key_nests() {
        let overrides = parse(&["env.tier=canary"]);
        let env = overrides["env"].as_mapping().unwrap();
        assert_eq!(env["tier"].as_str().unwrap(), "canary");
    }

    #[test]
    fn deep_nesting() {
        let overrides = parse(&["a.b.c.d=42"]);
        assert_eq!(overrides["a"]["b"]["c"]["d"].as_i64().unwrap(), 42);
    }

    #[test]
    fn comma_separates_pairs() {
        let overrides = parse(&["replicas=3,env.tier=canary"]);
        assert_eq!(overrides["replicas"].as_i64().unwrap(), 3);
        let env = overrides["env"].as_mapping().unwrap();
        assert_eq!(env["tier"].as_str().unwrap(), "canary");
    }

    #[test]
    fn repeated_occurrences_accumulate() {
        let overrides = parse(&["replicas=3", "env.tier=canary", "env.region=us-east"]);
        assert_eq!(overrides["replicas"].as_i64().unwrap(), 3);
        let env = overrides["env"].as_mapping().unwrap();
        assert_eq!(env["tier"].as_str().unwrap(), "canary");
        assert_eq!(env["region"].as_str().unwrap(), "us-east");
    }

    #[test]
    fn last_entry_wins_for_same_key() {
        let overrides = parse(&["port=3000,port=5000"]);
        assert_eq!(overrides["port"].as_i64().unwrap(), 5000);
    }

    #[test]
    fn dotted_entry_replaces_earlier_scalar() {
        let overrides = parse(&["a=1,a.b=2"]);
        assert_eq!(overrides["a"]["b"].as_i64().unwrap(), 2);
    }

    #[test]
    fn parse_bool() {
        let overrides = parse(&["enabled=true,verbose=FALSE"]);
        assert!(overrides["enabled"].as_bool().unwrap());
        assert!(!overrides["verbose"].as_bool().unwrap());
    }

    #[test]
    fn parse_null() {
        let overrides = parse(&["legacy=null"]);
        assert!(overrides["legacy"].is_null());
    }

    #[test]
    fn parse_integer() {
        let overrides = parse(&["replicas=3"]);
        assert_eq!(overrides["replicas"].as_i64().unwrap(), 3);
    }

    #[test]
    fn parse_float() {
        let overrides = parse(&["rate=1.5"]);
        assert_eq!(overrides["rate"].as_f64().unwrap(), 1.5);
    }

    #[test]
    fn parse_string_fallback() {
        let overrides = parse(&["tag=v1.2.3"]);
        assert_eq!(overrides["tag"].as_str().unwrap(), "v1.2.3");
    }

    #[test]
    fn empty_value_is_empty_string() {
        let overrides = parse(&["note="]);
        assert_eq!(overrides["note"].as_str().unwrap(), "");
    }

    #[test]
    fn missing_equals_rejected() {
        let mut overrides = Mapping::new();
        let err = parse_into("oops", &mut overrides).unwrap_err();
        assert!(matches!(err, Error::InvalidOverride { .. }));
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn empty_key_rejected() {
        let mut overrides = Mapping::new();
        let err = parse_into("=5", &mut overrides).unwrap_err();
        assert!(matches!(err, Error::InvalidOverride { .. }));
    }
}
