pub mod args;
pub mod date;
pub mod tracing;
