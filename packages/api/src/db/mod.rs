//! PostgreSQL access for the server side of the `api` crate.
//!
//! Everything here is gated behind `#[cfg(feature = "server")]` so client
//! (WASM) builds never pull in sqlx or tokio networking code. The pool itself
//! is a lazy process-wide singleton; see [`get_pool`].

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
