use serde_yaml::{Mapping, Value};

/// Deep-merge `overlay` on top of `base`.
/// If both sides have a mapping for the same key, recurse.
/// Otherwise, `overlay`'s value wins — a scalar or sequence replaces a
/// nested mapping outright, and vice versa.
pub fn deep_merge(mut base: Mapping, overlay: Mapping) -> Mapping {
    for (key, overlay_val) in overlay {
        match (base.remove(&key), overlay_val) {
            (Some(Value::Mapping(base_map)), Value::Mapping(overlay_map)) => {
                base.insert(key, Value::Mapping(deep_merge(base_map, overlay_map)));
            }
            (_, overlay_val) => {
                base.insert(key, overlay_val);
            }
        }
    }
    base
}
