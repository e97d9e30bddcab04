#![doc = include_str!("../README.md")]

pub mod delay;
pub mod driver;
pub mod report;
pub mod runner;

pub(crate) mod actor;

pub use report::SimulationReport;
pub use runner::{run_simulation, RunError};

pub mod prelude {
    pub use crate::report::SimulationReport;
    pub use crate::runner::{run_simulation, RunError};
    pub use chatswarm_core::{ActorRecord, ActorSummary, SimulationConfig};
}
