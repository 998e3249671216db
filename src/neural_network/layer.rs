/// Element-wise activation layer
pub mod activation_layer;
/// Dense (fully connected) layer
pub mod dense;
/// Borrowed views over layer weights
pub mod layer_weight;
/// Serializable mirrors of layer weights used for saving and loading networks
pub mod serialize_weight;

pub use activation_layer::ActivationLayer;
pub use dense::Dense;
pub use layer_weight::*;
pub use serialize_weight::*;

/// Number of parameters held by a layer, split by whether training updates them
///
/// # Variants
///
/// - `Trainable` - Parameters updated by backpropagation
/// - `NonTrainable` - Parameters that are stored but never updated
/// - `NoTrainable` - The layer holds no parameters at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingParameters {
    Trainable(usize),
    NonTrainable(usize),
    NoTrainable,
}
