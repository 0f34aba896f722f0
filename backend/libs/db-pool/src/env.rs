//! Environment variable helpers shared by services that build their
//! configuration from the process environment.

use std::str::FromStr;

/// Parse `key`, falling back to `default` when the variable is unset or unparsable.
pub fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Read `key` as a string, falling back to `default` when unset.
pub fn string_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read `key` as a string, treating an unset variable as empty.
pub fn string_or_empty(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

/// Parse `key` strictly: unset falls back to `default`, but a present value
/// that does not parse is an error.
pub fn parse_strict<T: FromStr>(key: &str, default: T) -> Result<T, String> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| format!("Invalid value for {}: {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn parse_or_uses_default_for_missing_and_garbage() {
        std::env::remove_var("DB_POOL_TEST_VALUE");
        assert_eq!(parse_or("DB_POOL_TEST_VALUE", 7u32), 7);

        std::env::set_var("DB_POOL_TEST_VALUE", "nope");
        assert_eq!(parse_or("DB_POOL_TEST_VALUE", 7u32), 7);

        std::env::set_var("DB_POOL_TEST_VALUE", " 12 ");
        assert_eq!(parse_or("DB_POOL_TEST_VALUE", 7u32), 12);
        std::env::remove_var("DB_POOL_TEST_VALUE");
    }

    #[test]
    #[serial_test::serial]
    fn parse_strict_rejects_garbage() {
        std::env::remove_var("DB_POOL_TEST_PORT");
        assert_eq!(parse_strict("DB_POOL_TEST_PORT", 8000u16), Ok(8000));

        std::env::set_var("DB_POOL_TEST_PORT", "eighty");
        let err = parse_strict::<u16>("DB_POOL_TEST_PORT", 8000).unwrap_err();
        assert!(err.contains("DB_POOL_TEST_PORT"));
        std::env::remove_var("DB_POOL_TEST_PORT");
    }

    #[test]
    #[serial_test::serial]
    fn string_helpers() {
        std::env::remove_var("DB_POOL_TEST_STR");
        assert_eq!(string_or("DB_POOL_TEST_STR", "fallback"), "fallback");
        assert_eq!(string_or_empty("DB_POOL_TEST_STR"), "");

        std::env::set_var("DB_POOL_TEST_STR", "set");
        assert_eq!(string_or("DB_POOL_TEST_STR", "fallback"), "set");
        assert_eq!(string_or_empty("DB_POOL_TEST_STR"), "set");
        std::env::remove_var("DB_POOL_TEST_STR");
    }
}
