//! Broker publishing.
//!
//! DESIGN
//! ======
//! The submit handler talks to the broker through the `PatrolPublisher` trait
//! so tests can substitute a recording double. The real implementation opens
//! a fresh MQTT client per publish — connect, publish, disconnect — rather
//! than holding one client at process scope. Delivery is QoS 0 fire-and-
//! forget: nothing is awaited beyond the disconnect leaving the socket, and
//! the whole cycle is bounded by a timeout.

use std::time::Duration;

use async_trait::async_trait;
use rumqttc::{AsyncClient, Event, MqttOptions, Outgoing, QoS};
use uuid::Uuid;

use crate::config::BrokerConfig;

// =============================================================================
// ERROR
// =============================================================================

/// Errors raised by a publish attempt.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The broker could not be reached or dropped the connection mid-cycle.
    #[error("broker connection failed: {0}")]
    Connection(String),

    /// The client accepted the request but the publish could not be queued.
    #[error("publish rejected: {0}")]
    Rejected(String),

    /// The connect/publish/disconnect cycle did not finish in time.
    #[error("publish timed out after {secs}s")]
    Timeout { secs: u64 },
}

// =============================================================================
// TRAIT
// =============================================================================

/// Seam between the submit handler and the transport.
#[async_trait]
pub trait PatrolPublisher: Send + Sync {
    /// Publish one payload to the given topic. Fire-and-forget: a success
    /// means the message left this process, not that anyone received it.
    async fn publish(&self, topic: &str, payload: String) -> Result<(), PublishError>;
}

// =============================================================================
// MQTT IMPLEMENTATION
// =============================================================================

/// MQTT publisher. Holds only configuration; every publish builds its own
/// request-scoped client so no connection state is shared across submits.
pub struct MqttPublisher {
    broker: BrokerConfig,
}

impl MqttPublisher {
    #[must_use]
    pub fn new(broker: BrokerConfig) -> Self {
        Self { broker }
    }

    async fn publish_once(&self, topic: &str, payload: String) -> Result<(), PublishError> {
        let client_id = format!("botpatrol-{}", Uuid::new_v4());
        let mut options = MqttOptions::new(client_id, &self.broker.host, self.broker.port);
        options.set_keep_alive(Duration::from_secs(5));

        let (client, mut event_loop) = AsyncClient::new(options, 8);
        client
            .publish(topic, QoS::AtMostOnce, false, payload)
            .await
            .map_err(|e| PublishError::Rejected(e.to_string()))?;
        client
            .disconnect()
            .await
            .map_err(|e| PublishError::Rejected(e.to_string()))?;

        // Drive the event loop until the disconnect goes out on the wire;
        // that is the point where the queued publish has been flushed.
        loop {
            match event_loop.poll().await {
                Ok(Event::Outgoing(Outgoing::Disconnect)) => return Ok(()),
                Ok(_) => {}
                Err(e) => return Err(PublishError::Connection(e.to_string())),
            }
        }
    }
}

#[async_trait]
impl PatrolPublisher for MqttPublisher {
    async fn publish(&self, topic: &str, payload: String) -> Result<(), PublishError> {
        let secs = self.broker.publish_timeout_secs;
        match tokio::time::timeout(Duration::from_secs(secs), self.publish_once(topic, payload)).await {
            Ok(result) => result,
            Err(_) => Err(PublishError::Timeout { secs }),
        }
    }
}

#[cfg(test)]
#[path = "publish_test.rs"]
mod tests;
