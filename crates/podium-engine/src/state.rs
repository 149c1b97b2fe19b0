//! Degraded-mode wrapper around the engine context.
//!
//! Normalization runs once before any query is served. If it fails, the
//! process still starts; every query that needs the missing tables then
//! reports a clear not-initialized condition instead of crashing.

use podium_model::{PodiumError, Result};

use crate::context::EngineContext;

#[derive(Debug)]
pub struct DashboardState {
    context: Option<EngineContext>,
    failure: Option<String>,
}

impl DashboardState {
    pub fn ready(context: EngineContext) -> Self {
        Self {
            context: Some(context),
            failure: None,
        }
    }

    pub fn degraded(reason: impl Into<String>) -> Self {
        Self {
            context: None,
            failure: Some(reason.into()),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.context.is_some()
    }

    pub fn context(&self) -> Result<&EngineContext> {
        self.context.as_ref().ok_or_else(|| {
            PodiumError::NotInitialized(
                self.failure
                    .clone()
                    .unwrap_or_else(|| "normalized tables unavailable".to_string()),
            )
        })
    }
}
