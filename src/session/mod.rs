//! Options, per-invocation state, and the run loop

/// Resolved options and the small value types they are built from
pub mod options;
/// Instance loop tying selection, rendering, and output together
pub mod runner;
/// Cross-instance session and per-instance run state
pub mod state;

pub use options::{ImageEntry, MontageOptions};
pub use runner::create_montages;
pub use state::{RunState, Session};
