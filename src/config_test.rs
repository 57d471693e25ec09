use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_broker_env() {
    unsafe {
        std::env::remove_var("BROKER_HOST");
        std::env::remove_var("BROKER_PORT");
        std::env::remove_var("PATROL_TOPIC");
        std::env::remove_var("PUBLISH_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_defaults_when_unset() {
    unsafe { clear_broker_env() };

    let cfg = BrokerConfig::from_env();
    assert_eq!(cfg, BrokerConfig::default());
    assert_eq!(cfg.host, "localhost");
    assert_eq!(cfg.port, 1883);
    assert_eq!(cfg.topic, "BotPatrol");
    assert_eq!(cfg.publish_timeout_secs, DEFAULT_PUBLISH_TIMEOUT_SECS);
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_broker_env();
        std::env::set_var("BROKER_HOST", "broker.internal");
        std::env::set_var("BROKER_PORT", "8883");
        std::env::set_var("PATROL_TOPIC", "BotPatrol/test");
        std::env::set_var("PUBLISH_TIMEOUT_SECS", "3");
    }

    let cfg = BrokerConfig::from_env();
    assert_eq!(cfg.host, "broker.internal");
    assert_eq!(cfg.port, 8883);
    assert_eq!(cfg.topic, "BotPatrol/test");
    assert_eq!(cfg.publish_timeout_secs, 3);

    unsafe { clear_broker_env() };
}

#[test]
fn from_env_falls_back_on_unparseable_numbers() {
    unsafe {
        clear_broker_env();
        std::env::set_var("BROKER_PORT", "not-a-port");
        std::env::set_var("PUBLISH_TIMEOUT_SECS", "-1");
    }

    let cfg = BrokerConfig::from_env();
    assert_eq!(cfg.port, DEFAULT_BROKER_PORT);
    assert_eq!(cfg.publish_timeout_secs, DEFAULT_PUBLISH_TIMEOUT_SECS);

    unsafe { clear_broker_env() };
}
