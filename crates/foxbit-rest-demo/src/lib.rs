/*
[INPUT]:  Public API exports for foxbit-rest-demo crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod flow;
pub mod pricing;

// Re-export main types for convenience
pub use config::DemoConfig;
pub use flow::{DemoReport, run_demo};
pub use pricing::target_price;
