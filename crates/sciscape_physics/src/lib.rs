pub mod collision;
pub mod energy;
pub mod forces;
pub mod integrator;

pub use integrator::{step, step_n};
