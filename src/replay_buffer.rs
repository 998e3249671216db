//! Experience replay for reinforcement learning agents
//!
//! A [`ReplayBuffer`] keeps the most recent transitions an agent has observed
//! and hands out uniformly drawn batches of them, breaking the correlation
//! between consecutive steps when the transitions are fed to a network.

use crate::error::ModelError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;

/// A single transition observed by an agent
///
/// # Fields
///
/// - `state` - Observation before the action
/// - `action` - Index of the action taken
/// - `reward` - Reward received for the action
/// - `next_state` - Observation after the action
/// - `done` - Whether the episode ended with this transition
#[derive(Debug, Clone, PartialEq)]
pub struct Experience {
    pub state: Vec<f64>,
    pub action: usize,
    pub reward: f64,
    pub next_state: Vec<f64>,
    pub done: bool,
}

impl Experience {
    /// Creates a transition from its parts.
    ///
    /// # Parameters
    ///
    /// - `state` - Observation before the action
    /// - `action` - Index of the action taken
    /// - `reward` - Reward received for the action
    /// - `next_state` - Observation after the action
    /// - `done` - Whether the episode ended with this transition
    pub fn new(
        state: Vec<f64>,
        action: usize,
        reward: f64,
        next_state: Vec<f64>,
        done: bool,
    ) -> Self {
        Self {
            state,
            action,
            reward,
            next_state,
            done,
        }
    }
}

/// Fixed-capacity ring of experiences with uniform sampling
///
/// Entries are appended until `capacity` is reached. After that every push
/// overwrites the slot under a cursor that advances modulo `capacity`, so the
/// buffer always holds the `capacity` most recent experiences.
///
/// The buffer owns its random generator. [`ReplayBuffer::with_seed`] makes
/// the sequence of sampled batches reproducible.
///
/// # Example
/// ```rust
/// use neuralnet::replay_buffer::{Experience, ReplayBuffer};
///
/// let mut buffer = ReplayBuffer::with_seed(100, 7).unwrap();
/// for step in 0..10 {
///     buffer.push(Experience::new(vec![step as f64], 0, 1.0, vec![step as f64 + 1.0], false));
/// }
///
/// assert!(buffer.is_ready(4));
/// let batch = buffer.sample(4).unwrap();
/// assert_eq!(batch.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ReplayBuffer {
    memory: Vec<Experience>,
    capacity: usize,
    position: usize,
    rng: StdRng,
}

impl ReplayBuffer {
    /// Creates an empty buffer seeded from the operating system.
    ///
    /// # Parameters
    ///
    /// * `capacity` - Maximum number of stored experiences
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - An empty buffer
    /// - `Err(ModelError::InputValidationError)` - If `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self, ModelError> {
        Self::with_rng(capacity, StdRng::from_os_rng())
    }

    /// Creates an empty buffer whose sampling is driven by `seed`.
    pub fn with_seed(capacity: usize, seed: u64) -> Result<Self, ModelError> {
        Self::with_rng(capacity, StdRng::seed_from_u64(seed))
    }

    fn with_rng(capacity: usize, rng: StdRng) -> Result<Self, ModelError> {
        if capacity == 0 {
            return Err(ModelError::InputValidationError(
                "Replay buffer capacity must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            memory: Vec::with_capacity(capacity),
            capacity,
            position: 0,
            rng,
        })
    }

    /// Stores an experience, overwriting the oldest one when full.
    pub fn push(&mut self, experience: Experience) {
        if self.memory.len() < self.capacity {
            self.memory.push(experience);
        } else {
            self.memory[self.position] = experience;
        }
        self.position = (self.position + 1) % self.capacity;
    }

    /// Draws `batch_size` distinct experiences uniformly at random.
    ///
    /// # Parameters
    ///
    /// * `batch_size` - Number of experiences to return
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Experience>)` - Copies of the sampled experiences
    /// - `Err(ModelError::InsufficientData)` - If fewer than `batch_size` experiences are stored
    pub fn sample(&mut self, batch_size: usize) -> Result<Vec<Experience>, ModelError> {
        if self.memory.len() < batch_size {
            return Err(ModelError::InsufficientData {
                requested: batch_size,
                available: self.memory.len(),
            });
        }

        Ok(index::sample(&mut self.rng, self.memory.len(), batch_size)
            .into_iter()
            .map(|i| self.memory[i].clone())
            .collect())
    }

    /// Number of stored experiences
    pub fn size(&self) -> usize {
        self.memory.len()
    }

    /// Whether a batch of `batch_size` can be sampled.
    pub fn is_ready(&self, batch_size: usize) -> bool {
        self.memory.len() >= batch_size
    }

    /// Maximum number of stored experiences
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if nothing has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }
}
