pub mod config;
pub mod constants;
pub mod error;
pub mod state;
pub mod types;

pub use config::{InitialConditions, SimulationConfig};
pub use constants::*;
pub use error::{LabError, LabResult};
pub use state::SimulationState;
pub use types::*;
