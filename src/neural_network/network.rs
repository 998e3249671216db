use crate::config::TrainingConfig;
use crate::error::{IoError, ModelError};
use crate::neural_network::layer::TrainingParameters;
use crate::neural_network::layer::layer_weight::LayerWeight;
use crate::neural_network::layer::serialize_weight::{
    LayerInfo, SerializableLayer, SerializableLayerWeight, SerializableNetwork,
};
use crate::neural_network::neural_network_trait::{Layer, LossFunction, Optimizer};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{from_reader, to_writer_pretty};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::{debug, info};

/// Per-epoch record of a training run
///
/// Each entry is the mean loss over all samples seen in that epoch, measured
/// on the forward pass that preceded each sample's update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingHistory {
    epoch_losses: Vec<f64>,
}

impl TrainingHistory {
    /// Mean loss of every epoch, in training order
    pub fn losses(&self) -> &[f64] {
        &self.epoch_losses
    }

    /// Average loss of the first epoch, `None` if no epoch ran.
    pub fn first_loss(&self) -> Option<f64> {
        self.epoch_losses.first().copied()
    }

    /// Average loss of the last epoch, `None` if no epoch ran.
    pub fn final_loss(&self) -> Option<f64> {
        self.epoch_losses.last().copied()
    }

    /// Number of recorded epochs
    pub fn len(&self) -> usize {
        self.epoch_losses.len()
    }

    /// Returns `true` if no epoch ran
    pub fn is_empty(&self) -> bool {
        self.epoch_losses.is_empty()
    }
}

/// An ordered stack of layers trained one sample at a time
///
/// `predict` folds the input through the layers in insertion order. `train`
/// runs forward, computes the loss and its gradient, then sends the gradient
/// back through the layers in reverse order, letting every layer update its
/// own parameters. Samples are visited in the order given, with no shuffling
/// or batching.
///
/// Cloning a network deep-copies every layer (weights, caches and optimizer
/// state) and the loss function; the copy shares nothing with the original.
///
/// # Example
/// ```rust
/// use neuralnet::neural_network::*;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut network = Network::new();
/// network
///     .add_layer(Dense::with_rng(2, 3, &mut rng).unwrap())
///     .add_layer(ActivationLayer::sigmoid())
///     .add_layer(Dense::with_rng(3, 1, &mut rng).unwrap())
///     .add_layer(ActivationLayer::sigmoid())
///     .set_loss(MeanSquaredError::new());
///
/// let inputs = vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]];
/// let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
///
/// let history = network.train(&inputs, &targets, 100, 0.5).unwrap();
/// assert_eq!(history.len(), 100);
///
/// let output = network.predict(&[1.0, 0.0]).unwrap();
/// assert_eq!(output.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct Network {
    layers: Vec<Box<dyn Layer>>,
    loss: Option<Box<dyn LossFunction>>,
}

impl Network {
    /// Creates an empty network with no layers and no loss function.
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            loss: None,
        }
    }

    /// Appends a layer to the end of the stack.
    ///
    /// # Parameters
    ///
    /// * `layer` - The layer to add; the network takes ownership of it
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The network, for chaining
    pub fn add_layer<L: 'static + Layer>(&mut self, layer: L) -> &mut Self {
        self.layers.push(Box::new(layer));
        self
    }

    /// Sets the loss function, replacing any previous one.
    pub fn set_loss<LFunc: 'static + LossFunction>(&mut self, loss: LFunc) -> &mut Self {
        self.loss = Some(Box::new(loss));
        self
    }

    /// Attaches a copy of `optimizer` to every layer that has parameters.
    ///
    /// Each Dense layer receives two fresh duplicates (weights and bias), so
    /// no optimizer state is shared between layers.
    pub fn set_optimizer(&mut self, optimizer: &dyn Optimizer) -> &mut Self {
        for layer in self.layers.iter_mut() {
            layer.set_optimizer(optimizer);
        }
        self
    }

    /// Number of layers in the stack
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if no layer has been added
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Input length required by the first layer that fixes one.
    pub fn input_size(&self) -> Option<usize> {
        self.layers.iter().find_map(|layer| layer.input_size())
    }

    /// Output length produced by the last layer that fixes one.
    pub fn output_size(&self) -> Option<usize> {
        self.layers.iter().rev().find_map(|layer| layer.output_size())
    }

    /// Name of the configured loss function, if any
    pub fn loss_type(&self) -> Option<&str> {
        self.loss.as_ref().map(|loss| loss.loss_type())
    }

    /// Runs `input` through every layer in order.
    ///
    /// # Parameters
    ///
    /// * `input` - A single sample
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<f64>)` - Output of the last layer
    /// - `Err(ModelError::NotConfigured)` - If the network has no layers
    /// - `Err(ModelError::InputValidationError)` - If `input` does not fit the first layer
    pub fn predict(&mut self, input: &[f64]) -> Result<Vec<f64>, ModelError> {
        if self.layers.is_empty() {
            return Err(ModelError::NotConfigured("layers"));
        }
        forward_all(&mut self.layers, input)
    }

    /// Trains the network with per-sample backpropagation.
    ///
    /// Layers with an attached optimizer use the optimizer's own learning
    /// rate; `learning_rate` only drives layers without one.
    ///
    /// # Parameters
    ///
    /// - `inputs` - Training samples
    /// - `targets` - Expected outputs, one per sample
    /// - `epochs` - Number of passes over the dataset
    /// - `learning_rate` - Step size for plain gradient descent
    ///
    /// # Returns
    ///
    /// - `Ok(TrainingHistory)` - Mean loss of every epoch
    /// - `Err(ModelError::NotConfigured)` - If layers or the loss function are missing
    /// - `Err(ModelError::InputValidationError)` - If the dataset is empty or a sample does not
    ///   fit the network; nothing is updated in that case
    pub fn train(
        &mut self,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
        epochs: u32,
        learning_rate: f64,
    ) -> Result<TrainingHistory, ModelError> {
        self.fit(inputs, targets, epochs, learning_rate, ProgressBar::hidden())
    }

    /// Trains the network as described by `config`.
    ///
    /// If the configuration names an optimizer, a fresh instance is attached
    /// to every trainable layer first, replacing any previous optimizer state.
    ///
    /// # Returns
    ///
    /// - `Ok(TrainingHistory)` - Mean loss of every epoch
    /// - `Err(ModelError)` - If the configuration is invalid or training fails
    pub fn train_with_config(
        &mut self,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
        config: &TrainingConfig,
    ) -> Result<TrainingHistory, ModelError> {
        config.validate()?;
        self.check_configured()?;
        validate_dataset(self, inputs, targets)?;

        if let Some(optimizer_config) = &config.optimizer {
            let optimizer = optimizer_config.build()?;
            self.set_optimizer(optimizer.as_ref());
        }

        let progress_bar = if config.show_progress {
            epoch_progress_bar(config.epochs)
        } else {
            ProgressBar::hidden()
        };

        self.fit(
            inputs,
            targets,
            config.epochs,
            config.learning_rate,
            progress_bar,
        )
    }

    /// Mean loss over a dataset without updating any parameter.
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - The mean per-sample loss
    /// - `Err(ModelError)` - Under the same conditions as [`Network::train`]
    pub fn evaluate(&mut self, inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<f64, ModelError> {
        self.check_configured()?;
        validate_dataset(self, inputs, targets)?;

        let Some(loss_fn) = self.loss.as_ref() else {
            return Err(ModelError::NotConfigured("loss function"));
        };

        let mut total = 0.0;
        for (input, target) in inputs.iter().zip(targets) {
            let output = forward_all(&mut self.layers, input)?;
            total += loss_fn.compute_loss(&output, target)?;
        }

        Ok(total / inputs.len() as f64)
    }

    fn fit(
        &mut self,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
        epochs: u32,
        learning_rate: f64,
        progress_bar: ProgressBar,
    ) -> Result<TrainingHistory, ModelError> {
        self.check_configured()?;
        validate_dataset(self, inputs, targets)?;

        let Some(loss_fn) = self.loss.as_ref() else {
            return Err(ModelError::NotConfigured("loss function"));
        };

        let mut history = TrainingHistory {
            epoch_losses: Vec::with_capacity(epochs as usize),
        };

        for epoch in 0..epochs {
            let mut epoch_loss = 0.0;

            for (input, target) in inputs.iter().zip(targets) {
                let output = forward_all(&mut self.layers, input)?;
                epoch_loss += loss_fn.compute_loss(&output, target)?;

                let mut grad = loss_fn.compute_grad(&output, target)?;
                for layer in self.layers.iter_mut().rev() {
                    grad = layer.backward(&grad, learning_rate)?;
                }
            }

            let average_loss = epoch_loss / inputs.len() as f64;
            debug!(epoch = epoch + 1, loss = average_loss, "epoch finished");
            history.epoch_losses.push(average_loss);

            progress_bar.set_message(format!("{:.6}", average_loss));
            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("Training completed");

        info!(
            samples = inputs.len(),
            epochs,
            final_loss = history.final_loss(),
            "network training completed"
        );

        Ok(history)
    }

    fn check_configured(&self) -> Result<(), ModelError> {
        if self.layers.is_empty() {
            return Err(ModelError::NotConfigured("layers"));
        }
        if self.loss.is_none() {
            return Err(ModelError::NotConfigured("loss function"));
        }
        Ok(())
    }

    /// Returns the weights of every layer, in layer order.
    ///
    /// # Returns
    ///
    /// * `Vec<LayerWeight>` - `LayerWeight::Dense` for dense layers, `LayerWeight::Empty` otherwise
    pub fn get_weights(&self) -> Vec<LayerWeight<'_>> {
        self.layers.iter().map(|layer| layer.get_weights()).collect()
    }

    /// Prints the layer table produced by the `Display` implementation.
    pub fn summary(&self) {
        println!("{}", self);
    }

    /// Saves the layer types and weights to a JSON file.
    ///
    /// The optimizer and loss function are not saved and must be
    /// reconfigured after loading.
    ///
    /// # Parameters
    ///
    /// * `path` - File path where the network will be saved (e.g., "network.json")
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Network successfully saved to file
    /// - `Err(IoError::StdIoError)` - File creation or write operation failed
    /// - `Err(IoError::JsonError)` - Serialization to JSON failed
    pub fn save_to_path(&self, path: &str) -> Result<(), IoError> {
        let layers = self
            .layers
            .iter()
            .map(|layer| SerializableLayer {
                info: LayerInfo {
                    layer_type: layer.layer_type().to_string(),
                    output_shape: layer.output_shape(),
                },
                weights: SerializableLayerWeight::from_layer_weight(&layer.get_weights()),
            })
            .collect();

        let serializable_network = SerializableNetwork { layers };

        let file = File::create(path).map_err(IoError::StdIoError)?;
        let mut writer = BufWriter::new(file);
        to_writer_pretty(&mut writer, &serializable_network).map_err(IoError::JsonError)?;
        writer.flush().map_err(IoError::StdIoError)?;

        debug!(path, layers = self.layers.len(), "network saved");
        Ok(())
    }

    /// Loads weights from a JSON file into this network.
    ///
    /// The network must already have the architecture that was saved: the
    /// same number of layers, the same layer types in the same order and the
    /// same Dense shapes. Layers are checked in order and weights are written
    /// as each layer passes, so a mismatch in a later layer leaves earlier
    /// layers already loaded.
    ///
    /// # Parameters
    ///
    /// * `path` - File path from which to load the weights
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Weights loaded
    /// - `Err(IoError::StdIoError)` - File not found, or the file does not match the architecture
    /// - `Err(IoError::JsonError)` - Deserialization from JSON failed
    pub fn load_from_path(&mut self, path: &str) -> Result<(), IoError> {
        let reader = IoError::load_in_buf_reader(path)?;
        let serializable_network: SerializableNetwork =
            from_reader(reader).map_err(IoError::JsonError)?;

        if serializable_network.layers.len() != self.layers.len() {
            return Err(IoError::invalid_data(format!(
                "Layer count mismatch: network has {} layers, file has {} layers",
                self.layers.len(),
                serializable_network.layers.len()
            )));
        }

        for (i, (layer, saved)) in self
            .layers
            .iter_mut()
            .zip(&serializable_network.layers)
            .enumerate()
        {
            if layer.layer_type() != saved.info.layer_type {
                return Err(IoError::invalid_data(format!(
                    "Layer {} type mismatch: network has '{}', file has '{}'",
                    i,
                    layer.layer_type(),
                    saved.info.layer_type
                )));
            }
            layer.apply_weights(&saved.weights)?;
        }

        debug!(path, layers = self.layers.len(), "network loaded");
        Ok(())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col1_width = 33;
        let col2_width = 24;
        let col3_width = 15;
        writeln!(f, "Model: \"network\"")?;
        writeln!(
            f,
            "┏{}┳{}┳{}┓",
            "━".repeat(col1_width),
            "━".repeat(col2_width),
            "━".repeat(col3_width)
        )?;
        writeln!(
            f,
            "┃ {:<31} ┃ {:<22} ┃ {:>13} ┃",
            "Layer (type)", "Output Shape", "Param #"
        )?;
        writeln!(
            f,
            "┡{}╇{}╇{}┩",
            "━".repeat(col1_width),
            "━".repeat(col2_width),
            "━".repeat(col3_width)
        )?;

        let mut trainable_param_count: usize = 0;
        let mut non_trainable_param_count: usize = 0;

        for (i, layer) in self.layers.iter().enumerate() {
            // first layer is "Layer", then "Layer_1", "Layer_2", ...
            let layer_name = if i == 0 {
                "Layer".to_string()
            } else {
                format!("Layer_{}", i)
            };
            let param_count_num = match layer.param_count() {
                TrainingParameters::Trainable(count) => {
                    trainable_param_count += count;
                    count
                }
                TrainingParameters::NonTrainable(count) => {
                    non_trainable_param_count += count;
                    count
                }
                TrainingParameters::NoTrainable => 0,
            };

            writeln!(
                f,
                "│ {:<31} │ {:<22} │ {:>13} │",
                format!("{} ({})", layer_name, layer.layer_type()),
                layer.output_shape(),
                param_count_num
            )?;
        }
        writeln!(
            f,
            "└{}┴{}┴{}┘",
            "─".repeat(col1_width),
            "─".repeat(col2_width),
            "─".repeat(col3_width)
        )?;

        let total_params = trainable_param_count + non_trainable_param_count;
        let param_bytes = std::mem::size_of::<f64>();
        writeln!(
            f,
            " Total params: {} ({} B)",
            total_params,
            total_params * param_bytes
        )?;
        writeln!(
            f,
            " Trainable params: {} ({} B)",
            trainable_param_count,
            trainable_param_count * param_bytes
        )?;
        write!(
            f,
            " Non-trainable params: {} ({} B)",
            non_trainable_param_count,
            non_trainable_param_count * param_bytes
        )
    }
}

fn forward_all(layers: &mut [Box<dyn Layer>], input: &[f64]) -> Result<Vec<f64>, ModelError> {
    let mut output = input.to_vec();
    for layer in layers.iter_mut() {
        output = layer.forward(&output)?;
    }
    Ok(output)
}

/// Checks the whole dataset against the network's declared sizes so that a
/// bad sample is rejected before any parameter changes.
fn validate_dataset(
    network: &Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
) -> Result<(), ModelError> {
    if inputs.is_empty() {
        return Err(ModelError::InputValidationError(
            "Training data cannot be empty".to_string(),
        ));
    }
    if inputs.len() != targets.len() {
        return Err(ModelError::InputValidationError(format!(
            "Got {} input samples but {} targets",
            inputs.len(),
            targets.len()
        )));
    }

    if let Some(expected) = network.input_size() {
        if let Some((i, input)) = inputs
            .iter()
            .enumerate()
            .find(|(_, input)| input.len() != expected)
        {
            return Err(ModelError::InputValidationError(format!(
                "Sample {} has {} features, network expects {}",
                i,
                input.len(),
                expected
            )));
        }
    }

    if let Some(expected) = network.output_size() {
        if let Some((i, target)) = targets
            .iter()
            .enumerate()
            .find(|(_, target)| target.len() != expected)
        {
            return Err(ModelError::InputValidationError(format!(
                "Target {} has {} values, network produces {}",
                i,
                target.len(),
                expected
            )));
        }
    }

    Ok(())
}

fn epoch_progress_bar(epochs: u32) -> ProgressBar {
    let progress_bar = ProgressBar::new(epochs as u64);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} | Loss: {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓░");
    progress_bar.set_style(style);
    progress_bar
}
