//! HTTP listener lifecycle.
//!
//! Plain HTTP only. The lifecycle has two phases:
//! - **starting**: [`Listener::bind`] resolves and binds the address. Failure
//!   here is terminal.
//! - **serving**: [`Listener::serve`] consumes the listener and runs until the
//!   process is killed.

mod server;

pub use server::Listener;
