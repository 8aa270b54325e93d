//! Lifecycle management.
//!
//! Pipe mode runs until stdin closes or a termination signal arrives.
//! One-shot mode has no lifecycle beyond a single call.

pub mod signals;

pub use signals::shutdown_signal;
