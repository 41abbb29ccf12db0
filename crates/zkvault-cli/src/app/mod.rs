//! Application context and session setup for the zkvault CLI.

mod context;
mod session;

pub use context::AppContext;
pub use session::open_session;
