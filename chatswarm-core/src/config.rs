use crate::constants::*;
use crate::data::{ChatMessage, ChatRequest};
use std::time::Duration;

/// Immutable parameters for a single simulation run.
///
/// Built once at startup via the chained setters and shared read-only by
/// every actor task for the lifetime of the run.
///
/// # Example
/// ```
/// use chatswarm_core::SimulationConfig;
/// use std::time::Duration;
///
/// let config = SimulationConfig::new("http://localhost:8000/v1/chat/completions")
///     .user_count(10)
///     .duration(Duration::from_secs(60))
///     .seed(7);
/// ```
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub user_count: usize,
    /// Upper bound on sampled arrival delays, not an enforced run deadline.
    pub duration: Duration,
    pub model: String,
    pub prompt: String,
    pub cycles_per_actor: u32,
    /// Inclusive bounds of the uniform inter-cycle wait, in seconds.
    pub wait_range: (f64, f64),
    pub arrival_mean: f64,
    pub arrival_std_dev: f64,
    pub seed: u64,
}

impl SimulationConfig {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            user_count: DEFAULT_USER_COUNT,
            duration: DEFAULT_SIMULATION_DURATION,
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            cycles_per_actor: DEFAULT_CYCLES_PER_ACTOR,
            wait_range: DEFAULT_WAIT_RANGE,
            arrival_mean: DEFAULT_ARRIVAL_MEAN,
            arrival_std_dev: DEFAULT_ARRIVAL_STD_DEV,
            seed: DEFAULT_SEED,
        }
    }

    pub fn user_count(mut self, user_count: usize) -> Self {
        self.user_count = user_count;
        self
    }

    /// Bound the arrival window. Sampled delays are clamped to this value.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn prompt(mut self, prompt: &str) -> Self {
        self.prompt = prompt.to_string();
        self
    }

    pub fn cycles_per_actor(mut self, cycles: u32) -> Self {
        self.cycles_per_actor = cycles;
        self
    }

    /// Inter-cycle think time, sampled uniformly from `[lo, hi]` seconds.
    pub fn wait_range(mut self, lo: f64, hi: f64) -> Self {
        self.wait_range = (lo, hi);
        self
    }

    /// Arrival-delay distribution parameters (seconds).
    pub fn arrival(mut self, mean: f64, std_dev: f64) -> Self {
        self.arrival_mean = mean;
        self.arrival_std_dev = std_dev;
        self
    }

    /// Master seed. Runs sharing a seed sample identical delays and waits.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// The fixed POST body sent on every cycle.
    pub fn request_template(&self) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: self.prompt.clone(),
            }],
        }
    }
}
