/// Adam (Adaptive Moment Estimation) optimizer
pub mod adam;
/// Shared validation of optimizer hyperparameters
pub(crate) mod input_validation_function;
/// SGD (Stochastic Gradient Descent) optimizer with momentum
pub mod sgd;

pub use adam::Adam;
pub use sgd::SGD;
