pub mod reward;
pub mod scoring;
pub mod types;
