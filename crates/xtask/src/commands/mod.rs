//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check;
mod invoke;
mod types;

pub use check::Check;
pub use invoke::Invoke;
pub use types::Types;
