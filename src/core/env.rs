/*!
 * Environment Overrides
 */

use std::str::FromStr;
use tracing::warn;

/// Parse an environment variable
///
/// Missing variables yield `None` silently. Unparseable values are logged
/// and also yield `None`, so callers fall back to their defaults.
pub fn env_value<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    parse_override(key, &raw)
}

fn parse_override<T: FromStr>(key: &str, raw: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparseable environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_override() {
        assert_eq!(parse_override::<u64>("K", " 42 "), Some(42));
        assert_eq!(parse_override::<u64>("K", "forty-two"), None);
        assert_eq!(parse_override::<usize>("K", "-1"), None);
    }

    #[test]
    fn test_missing_variable() {
        assert_eq!(env_value::<u64>("SYNC_PRIMITIVES_SURELY_UNSET_VARIABLE"), None);
    }
}
