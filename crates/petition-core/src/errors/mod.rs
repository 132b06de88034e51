//! Error types (thiserror).

mod error_chain;
mod petition_error;

pub use error_chain::ErrorChain;
pub use petition_error::{PetitionError, PetitionResult};
