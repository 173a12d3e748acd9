//! Dynamically configure HAProxy ACLs over the Unix admin socket.
//!
//! HAProxy holds ACL tables in memory and lets them be edited at runtime
//! through its admin socket, without a configuration reload. This crate
//! speaks the ACL subset of that protocol: add, remove, query, and clear
//! entries in a named table.
//!
//! Each operation opens a fresh connection, sends one command, and reads the
//! reply until HAProxy closes the socket; there is no pooling or pipelining.
//!
//! # Examples
//! ```no_run
//! use dynacl::{AclClient, AclHandle, SocketConfig};
//!
//! let client = AclClient::connect(AclHandle::Id(0), SocketConfig::default())
//!     .expect("ACL lookup failed");
//! client.update("10.0.0.1").expect("Failed to add entry");
//! assert!(client.entry_exists("10.0.0.1").expect("Failed to query entry"));
//! ```

mod client;
mod commands;
pub mod config;
pub mod connection;
pub mod errors;
pub mod requests;
pub mod responses;

pub use client::AclClient;
pub use config::SocketConfig;
pub use connection::{Transport, UnixSocketTransport};
pub use errors::Error;
pub use requests::AclHandle;
