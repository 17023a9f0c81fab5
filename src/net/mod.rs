//! External service boundaries and their simulated implementations.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` signs users in, `assistant` answers prompts, and `assets`
//! resolves creative-library downloads. None of them talk to a real service;
//! each trait returns a future so a networked implementation can replace the
//! simulated one without touching callers. `types` holds the shared DTOs.

pub mod assets;
pub mod assistant;
pub mod identity;
pub mod types;

use std::sync::Arc;

use crate::config::ClientConfig;

/// Service handles injected into the view tree through context.
#[derive(Clone)]
pub struct Backends {
    pub identity: Arc<dyn identity::IdentityProvider + Send + Sync>,
    pub assistant: Arc<dyn assistant::AssistantBackend + Send + Sync>,
    pub assets: Arc<dyn assets::AssetStore + Send + Sync>,
}

impl Backends {
    /// Simulated backends with latencies taken from `config`.
    pub fn simulated(config: &ClientConfig) -> Self {
        Self {
            identity: Arc::new(identity::SimulatedIdentityProvider::new(config.delays)),
            assistant: Arc::new(assistant::ScriptedAssistant::new(config.delays)),
            assets: Arc::new(assets::SimulatedAssetStore::new(config.delays)),
        }
    }
}
