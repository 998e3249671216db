use ndarray::{Array1, Array2};

/// Container for the weights of a neural network layer
///
/// # Variants
///
/// - `Dense` - Contains weights for dense (fully connected) layers
/// - `Empty` - Represents a layer with no trainable parameters
pub enum LayerWeight<'a> {
    Dense(DenseLayerWeight<'a>),
    Empty,
}

/// Weights for a dense (fully connected) neural network layer
///
/// # Fields
///
/// - `weight` - Weight matrix with shape (output_size, input_size)
/// - `bias` - Bias vector with length output_size
pub struct DenseLayerWeight<'a> {
    pub weight: &'a Array2<f64>,
    pub bias: &'a Array1<f64>,
}
