pub mod envelope;

pub use envelope::{NO_RESULTS_MESSAGE, ReadingEnvelope};
