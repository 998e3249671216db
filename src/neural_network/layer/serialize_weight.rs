use crate::error::IoError;
use crate::neural_network::layer::layer_weight::LayerWeight;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Serializable weight container for all supported layer types.
///
/// # Variants
///
/// - `Dense` - Weights for a Dense layer
/// - `Empty` - No weights for layers without parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SerializableLayerWeight {
    Dense(SerializableDenseWeight),
    Empty,
}

impl SerializableLayerWeight {
    /// Converts a `LayerWeight` reference into an owned serializable weight.
    ///
    /// # Parameters
    ///
    /// - `weight` - Layer weights to convert into a serializable form
    ///
    /// # Returns
    ///
    /// - `SerializableLayerWeight` - Serializable representation of the provided weights
    pub fn from_layer_weight(weight: &LayerWeight) -> Self {
        match weight {
            LayerWeight::Empty => SerializableLayerWeight::Empty,
            LayerWeight::Dense(w) => SerializableLayerWeight::Dense(SerializableDenseWeight {
                weight: w.weight.outer_iter().map(|row| row.to_vec()).collect(),
                bias: w.bias.to_vec(),
            }),
        }
    }
}

/// Serializable representation of Dense layer weights.
///
/// # Fields
///
/// - `weight` - Weight matrix stored row by row, one row per output
/// - `bias` - Bias vector, one entry per output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableDenseWeight {
    pub weight: Vec<Vec<f64>>,
    pub bias: Vec<f64>,
}

impl SerializableDenseWeight {
    /// Rebuilds the weight matrix and bias vector.
    ///
    /// # Returns
    ///
    /// - `Ok((Array2<f64>, Array1<f64>))` - Weight matrix and bias vector
    /// - `Err(IoError::StdIoError)` - If the rows are ragged
    pub fn to_arrays(&self) -> Result<(Array2<f64>, Array1<f64>), IoError> {
        Ok((vec2_to_array2(&self.weight)?, Array1::from(self.bias.clone())))
    }
}

/// Serializable layer metadata.
///
/// # Fields
///
/// - `layer_type` - Layer type name
/// - `output_shape` - Layer output shape description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerInfo {
    pub layer_type: String,
    pub output_shape: String,
}

/// Serializable layer with metadata and weights.
///
/// # Fields
///
/// - `info` - Layer metadata describing type and output shape
/// - `weights` - Layer weights in a serializable format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableLayer {
    pub info: LayerInfo,
    pub weights: SerializableLayerWeight,
}

/// Serializable representation of a Network.
///
/// # Fields
///
/// - `layers` - Ordered list of layers with metadata and weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableNetwork {
    pub layers: Vec<SerializableLayer>,
}

fn vec2_to_array2(vec: &[Vec<f64>]) -> Result<Array2<f64>, IoError> {
    let rows = vec.len();
    let cols = if rows > 0 { vec[0].len() } else { 0 };
    if vec.iter().any(|row| row.len() != cols) {
        return Err(IoError::invalid_data("Weight matrix rows have different lengths"));
    }
    let flat: Vec<f64> = vec.iter().flat_map(|row| row.iter().cloned()).collect();
    Array2::from_shape_vec((rows, cols), flat).map_err(|e| IoError::invalid_data(e.to_string()))
}
