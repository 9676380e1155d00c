//! Slate: Storage Controller Command-Line Client
//!
//! A client for a cluster storage controller that interprets the controller's
//! coded replies, manages snapshots, and edits namespaced object properties.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod object;
pub mod props;
pub mod reply;
pub mod size;
pub mod snapshot;
pub mod transport;
