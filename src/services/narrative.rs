//! Seam for the external narrative (verdict) generator

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::models::verdict::{NarrativeRequest, Verdict};

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("narrative generator unavailable: {0}")]
    Unavailable(String),
    #[error("invalid narrative response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, request: &NarrativeRequest) -> Result<Verdict, NarrativeError>;
}

/// Parse a generator's raw JSON reply into a [`Verdict`]
pub fn parse_verdict(raw: &str) -> Result<Verdict, NarrativeError> {
    if raw.trim().is_empty() {
        return Err(NarrativeError::InvalidResponse("empty response".to_string()));
    }
    serde_json::from_str(raw).map_err(|e| NarrativeError::InvalidResponse(e.to_string()))
}

/// Tries each generator in order and returns the first verdict
pub struct FallbackNarrator {
    chain: Vec<Arc<dyn NarrativeGenerator>>,
}

impl FallbackNarrator {
    pub fn new(chain: Vec<Arc<dyn NarrativeGenerator>>) -> Self {
        Self { chain }
    }
}

#[async_trait]
impl NarrativeGenerator for FallbackNarrator {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn generate(&self, request: &NarrativeRequest) -> Result<Verdict, NarrativeError> {
        for generator in &self.chain {
            match generator.generate(request).await {
                Ok(verdict) => return Ok(verdict),
                Err(e) => warn!(
                    generator = generator.name(),
                    error = %e,
                    "Narrative generator failed, trying next"
                ),
            }
        }
        Err(NarrativeError::Unavailable(
            "all narrative generators failed".to_string(),
        ))
    }
}
