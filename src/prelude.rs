pub use crate::config::{OptimizerConfig, TrainingConfig};
pub use crate::error::{IoError, ModelError};
pub use crate::math::*;
pub use crate::neural_network::activation::Activation;
pub use crate::neural_network::layer::{ActivationLayer, Dense, LayerWeight, TrainingParameters};
pub use crate::neural_network::loss_function::*;
pub use crate::neural_network::network::{Network, TrainingHistory};
pub use crate::neural_network::neural_network_trait::{Layer, LossFunction, Optimizer};
pub use crate::neural_network::optimizer::*;
pub use crate::replay_buffer::{Experience, ReplayBuffer};
