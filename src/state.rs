//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries the broker configuration and the publisher seam. There is no other
//! shared mutable state: every submit is an independent request/response
//! cycle and nothing is retained between them.

use std::sync::Arc;

use crate::config::BrokerConfig;
use crate::publish::PatrolPublisher;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub broker: BrokerConfig,
    pub publisher: Arc<dyn PatrolPublisher>,
}

impl AppState {
    #[must_use]
    pub fn new(broker: BrokerConfig, publisher: Arc<dyn PatrolPublisher>) -> Self {
        Self { broker, publisher }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
