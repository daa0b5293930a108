//! Authentication: login flow state, session context and server functions

mod context;
mod flow;
mod jwt;
mod server_fns;

pub use context::*;
pub use flow::*;
pub use jwt::*;
pub use server_fns::*;
