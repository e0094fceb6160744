mod engine;
mod progress_reporter;

pub use engine::{EngineOutcome, SbomEngine};
pub use progress_reporter::ProgressReporter;
