use std::time::Duration;

/// Default number of simulated users per run.
pub const DEFAULT_USER_COUNT: usize = 5;

/// Default simulation window; also the hard ceiling on arrival delays.
pub const DEFAULT_SIMULATION_DURATION: Duration = Duration::from_secs(180);

/// Default arrival-delay distribution: Normal(60, 40), clamped to the window.
pub const DEFAULT_ARRIVAL_MEAN: f64 = 60.0;
pub const DEFAULT_ARRIVAL_STD_DEV: f64 = 40.0;

/// Default think time between cycles, sampled uniformly (seconds).
pub const DEFAULT_WAIT_RANGE: (f64, f64) = (5.0, 10.0);

/// Request/wait cycles each actor runs before terminating.
pub const DEFAULT_CYCLES_PER_ACTOR: u32 = 5;

pub const DEFAULT_SEED: u64 = 42;

pub const DEFAULT_MODEL: &str = "phi-4";
pub const DEFAULT_PROMPT: &str = "What is the capital of Japan?";
