pub mod history;
pub mod pipeline;
pub mod session;

pub use history::History;
pub use session::LabSession;
