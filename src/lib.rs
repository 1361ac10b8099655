pub mod config;
pub mod error;
pub mod report;
pub mod scorer;
pub mod suggestions;
// cmd and reports are binary modules (declared in main.rs).

pub use scorer::{Grade, KrScoreResult, Scorer};
