//! Command implementations.

pub mod config;
pub mod placeholder;
pub mod values;

pub use config::run_config;
pub use placeholder::run_placeholder;
pub use values::run_values;
