//! Property-based tests for configuration parsing and validation

use proptest::prelude::*;
use mock_gateway::config::{parse_delay_ms, GatewayConfig, DEFAULT_RESPONSE_DELAY_MS, MAX_DELAY_MS};

fn env(vars: Vec<(&'static str, String)>) -> impl Fn(&str) -> Option<String> {
    move |key: &str| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone())
    }
}

proptest! {
    /// Any non-negative integer is taken verbatim
    #[test]
    fn test_numeric_delay_parses(ms in 0u64..1_000_000_000) {
        prop_assert_eq!(parse_delay_ms(Some(&ms.to_string())), ms);
    }

    /// Trailing garbage after the digits is ignored
    #[test]
    fn test_delay_suffix_ignored(ms in 0u64..100_000, suffix in "[a-zA-Z. ]{0,8}") {
        let raw = format!("{}{}", ms, suffix);
        prop_assert_eq!(parse_delay_ms(Some(&raw)), ms);
    }

    /// Values without leading digits fall back to the default
    #[test]
    fn test_non_numeric_delay_defaults(raw in "[a-zA-Z_\\-][a-zA-Z0-9]{0,10}") {
        prop_assert_eq!(parse_delay_ms(Some(&raw)), DEFAULT_RESPONSE_DELAY_MS);
    }

    /// Valid port numbers pass validation
    #[test]
    fn test_valid_port_passes(port in 1u16..=65535) {
        let mut config = GatewayConfig::default();
        config.server.port = port;
        prop_assert!(config.validate().is_ok(), "Port {} should be valid", port);
    }

    /// Delays up to the cap validate, beyond it they don't
    #[test]
    fn test_delay_cap(ms in 0u64..=2 * MAX_DELAY_MS) {
        let mut config = GatewayConfig::default();
        config.latency.response_delay_ms = ms;
        prop_assert_eq!(config.validate().is_ok(), ms <= MAX_DELAY_MS);
    }

    /// Environment overrides land in the right fields
    #[test]
    fn test_env_overrides(port in 1u16..=65535, ms in 0u64..10_000, seed in any::<u64>()) {
        let lookup = env(vec![
            ("PORT", port.to_string()),
            ("RESPONSE_DELAY_MS", ms.to_string()),
            ("MOCK_GATEWAY_SEED", seed.to_string()),
        ]);
        let config = GatewayConfig::default().with_overrides(lookup).unwrap();

        prop_assert_eq!(config.server.port, port);
        prop_assert_eq!(config.latency.response_delay_ms, ms);
        prop_assert_eq!(config.seed, Some(seed));
    }
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn test_zero_port_fails() {
        let mut config = GatewayConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err(), "Port 0 should fail validation");
    }

    #[test]
    fn test_default_config_valid() {
        let config = GatewayConfig::default();
        let result = config.validate();
        assert!(result.is_ok(), "Default config should be valid: {:?}", result);
    }

    #[test]
    fn test_invalid_port_env_fails() {
        let lookup = env(vec![("PORT", "eighty".to_string())]);
        assert!(GatewayConfig::default().with_overrides(lookup).is_err());
    }
}
