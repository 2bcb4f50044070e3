//! CLI command handlers, one file per command.

mod change;
mod completions;
mod get;
mod inspect;
mod set;

pub use change::run_change;
pub use completions::run_completions;
pub use get::run_get;
pub use inspect::run_inspect;
pub use set::run_set;
