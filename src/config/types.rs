//! Configuration types for the Groove Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::ScoreWeights;

/// Metadata about the engine deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// The human-readable name of the deployment.
    pub name: String,
    /// The version of the configuration set.
    pub version: String,
}

/// Scoring configuration from scoring.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Category weights applied when a request does not supply its own.
    pub default_weights: ScoreWeights,
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct GrooveConfig {
    metadata: EngineMetadata,
    scoring: ScoringConfig,
}

impl GrooveConfig {
    /// Creates a new GrooveConfig from its component parts.
    pub fn new(metadata: EngineMetadata, scoring: ScoringConfig) -> Self {
        Self { metadata, scoring }
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the scoring configuration.
    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }
}
