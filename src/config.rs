//! Training configuration
//!
//! [`TrainingConfig`] bundles the arguments of [`Network::train`] with an
//! optional optimizer description and a progress-bar switch, so a whole
//! training run can be described in a JSON file:
//!
//! ```json
//! {
//!   "epochs": 500,
//!   "learning_rate": 0.5,
//!   "optimizer": { "type": "adam", "learning_rate": 0.01 },
//!   "show_progress": true
//! }
//! ```
//!
//! [`Network::train`]: crate::neural_network::Network::train

use crate::error::{IoError, ModelError};
use crate::neural_network::neural_network_trait::Optimizer;
use crate::neural_network::optimizer::input_validation_function::validate_learning_rate;
use crate::neural_network::optimizer::{Adam, SGD};
use serde::{Deserialize, Serialize};

fn default_beta1() -> f64 {
    0.9
}

fn default_beta2() -> f64 {
    0.999
}

fn default_epsilon() -> f64 {
    1e-8
}

/// Optimizer selection for a training run
///
/// Serialized with a `"type"` tag of `"sgd"` or `"adam"`. Missing Adam
/// hyperparameters fall back to `beta1 = 0.9`, `beta2 = 0.999` and
/// `epsilon = 1e-8`; a missing SGD momentum means plain gradient descent.
///
/// # Variants
///
/// - `Sgd` - Stochastic gradient descent with momentum
/// - `Adam` - Adaptive moment estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OptimizerConfig {
    Sgd {
        learning_rate: f64,
        #[serde(default)]
        momentum: f64,
    },
    Adam {
        learning_rate: f64,
        #[serde(default = "default_beta1")]
        beta1: f64,
        #[serde(default = "default_beta2")]
        beta2: f64,
        #[serde(default = "default_epsilon")]
        epsilon: f64,
    },
}

impl OptimizerConfig {
    /// Builds a fresh optimizer with zeroed state.
    ///
    /// # Returns
    ///
    /// - `Ok(Box<dyn Optimizer>)` - The configured optimizer
    /// - `Err(ModelError::InputValidationError)` - If a hyperparameter is out of range
    pub fn build(&self) -> Result<Box<dyn Optimizer>, ModelError> {
        match *self {
            OptimizerConfig::Sgd {
                learning_rate,
                momentum,
            } => Ok(Box::new(SGD::new(learning_rate, momentum)?)),
            OptimizerConfig::Adam {
                learning_rate,
                beta1,
                beta2,
                epsilon,
            } => Ok(Box::new(Adam::new(learning_rate, beta1, beta2, epsilon)?)),
        }
    }
}

/// Parameters of a training run
///
/// # Fields
///
/// - `epochs` - Number of passes over the dataset
/// - `learning_rate` - Step size for layers without an attached optimizer
/// - `optimizer` - Optimizer attached to every trainable layer before training
/// - `show_progress` - Whether to draw a progress bar over the epochs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub epochs: u32,
    pub learning_rate: f64,
    #[serde(default)]
    pub optimizer: Option<OptimizerConfig>,
    #[serde(default)]
    pub show_progress: bool,
}

impl TrainingConfig {
    /// Creates a configuration for plain gradient descent without a progress bar.
    pub fn new(epochs: u32, learning_rate: f64) -> Self {
        Self {
            epochs,
            learning_rate,
            optimizer: None,
            show_progress: false,
        }
    }

    /// Sets the optimizer attached to every trainable layer before training.
    pub fn with_optimizer(mut self, optimizer: OptimizerConfig) -> Self {
        self.optimizer = Some(optimizer);
        self
    }

    /// Enables or disables the epoch progress bar.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Returns
    ///
    /// - `Ok(TrainingConfig)` - The parsed configuration
    /// - `Err(IoError::JsonError)` - If the JSON is malformed or misses required fields
    /// - `Err(IoError::StdIoError)` - If a value is out of range (`InvalidData`)
    pub fn from_json_str(json: &str) -> Result<Self, IoError> {
        let config: TrainingConfig = serde_json::from_str(json).map_err(IoError::JsonError)?;
        config
            .validate()
            .map_err(|e| IoError::invalid_data(e.to_string()))?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Parameters
    ///
    /// * `path` - Path of the JSON file
    ///
    /// # Returns
    ///
    /// - `Ok(TrainingConfig)` - The parsed configuration
    /// - `Err(IoError::StdIoError)` - If the file cannot be read or a value is out of range
    /// - `Err(IoError::JsonError)` - If the JSON is malformed
    pub fn from_json_file(path: &str) -> Result<Self, IoError> {
        let reader = IoError::load_in_buf_reader(path)?;
        let config: TrainingConfig = serde_json::from_reader(reader).map_err(IoError::JsonError)?;
        config
            .validate()
            .map_err(|e| IoError::invalid_data(e.to_string()))?;
        Ok(config)
    }

    /// Checks that the run has at least one epoch, a usable learning rate
    /// and, if present, a buildable optimizer.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.epochs == 0 {
            return Err(ModelError::InputValidationError(
                "epochs must be greater than 0".to_string(),
            ));
        }
        validate_learning_rate(self.learning_rate)?;
        if let Some(optimizer) = &self.optimizer {
            optimizer.build()?;
        }
        Ok(())
    }
}
