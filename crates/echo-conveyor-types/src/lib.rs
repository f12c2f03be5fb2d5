//! # Echo Conveyor Types
//!
//! Core types and error definitions for the Echo Conveyor relay plugin.
//!
//! - **`error`** - Configuration error taxonomy
//! - **`models`** - Plugin identity, configuration record, wire envelope
//!
//! ## Architecture Role
//!
//! `echo-conveyor-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!      echo-conveyor-types (this crate)
//!                │
//!                ▼
//!      echo-conveyor-core
//!                │
//!                ▼
//!      echo-conveyor-cli
//! ```
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod models;

pub use error::{ConfigError, ConfigResult};

pub use models::{
    ConveyorConfig, DispatchOutcome, Envelope, PluginInfo, PLUGIN_INFO, PUBLISHER_CHANNEL_KEY,
    PUBLISHER_URL_KEY,
};
