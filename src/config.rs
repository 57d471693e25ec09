//! Broker configuration parsed from environment variables.

pub const DEFAULT_BROKER_HOST: &str = "localhost";
pub const DEFAULT_BROKER_PORT: u16 = 1883;
pub const DEFAULT_PATROL_TOPIC: &str = "BotPatrol";
pub const DEFAULT_PUBLISH_TIMEOUT_SECS: u64 = 10;

/// Where patrol commands are published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerConfig {
    pub host: String,
    pub port: u16,
    pub topic: String,
    pub publish_timeout_secs: u64,
}

impl BrokerConfig {
    /// Build broker config from environment variables. Every variable has a
    /// default, so construction never fails:
    ///
    /// - `BROKER_HOST`: default `localhost`
    /// - `BROKER_PORT`: default 1883
    /// - `PATROL_TOPIC`: default `BotPatrol`
    /// - `PUBLISH_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("BROKER_HOST").unwrap_or_else(|_| DEFAULT_BROKER_HOST.to_string()),
            port: env_parse_u16("BROKER_PORT", DEFAULT_BROKER_PORT),
            topic: std::env::var("PATROL_TOPIC").unwrap_or_else(|_| DEFAULT_PATROL_TOPIC.to_string()),
            publish_timeout_secs: env_parse_u64("PUBLISH_TIMEOUT_SECS", DEFAULT_PUBLISH_TIMEOUT_SECS),
        }
    }
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_BROKER_HOST.to_string(),
            port: DEFAULT_BROKER_PORT,
            topic: DEFAULT_PATROL_TOPIC.to_string(),
            publish_timeout_secs: DEFAULT_PUBLISH_TIMEOUT_SECS,
        }
    }
}

fn env_parse_u16(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(default)
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
