pub mod batch;
pub mod report;
pub mod score;
