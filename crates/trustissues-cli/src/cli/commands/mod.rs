//! CLI command handlers. Each command is in its own file.

mod check;
mod register;
mod resolve;
mod watch;

pub use check::run_check;
pub use register::run_register;
pub use resolve::run_resolve;
pub use watch::run_watch;
