//! Configuration types for agent creation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default exploration rate for a freshly created agent
pub const DEFAULT_EPSILON: f64 = 0.9;

/// Default learning rate for a freshly created agent
pub const DEFAULT_ALPHA: f64 = 0.1;

/// Configuration for creating a learning agent.
///
/// # Examples
///
/// ```
/// use ttt_learner::AgentConfig;
///
/// let config = AgentConfig::new()
///     .with_epsilon(0.2)
///     .with_alpha(0.3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Exploration rate ε
    pub epsilon: f64,
    /// Learning rate α
    pub alpha: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Create a configuration with ε = 0.9, α = 0.1 and no seed.
    pub fn new() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            alpha: DEFAULT_ALPHA,
            seed: None,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that ε lies in [0, 1] and α in (0, 1].
    pub fn validate(&self) -> Result<()> {
        validate_rate("epsilon", self.epsilon)?;
        validate_learning_rate(self.alpha)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_rate(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration {
            message: format!("{name} must be within [0, 1], got {value}"),
        })
    }
}

pub(crate) fn validate_learning_rate(value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration {
            message: format!("alpha must be within (0, 1], got {value}"),
        })
    }
}
