pub mod completeness;
pub mod engine;
pub mod format;
pub mod handlers;
pub mod scoring;
pub mod strategies;
