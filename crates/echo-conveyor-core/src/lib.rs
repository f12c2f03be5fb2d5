//! # Echo Conveyor Core
//!
//! Relay plugin: takes an opaque payload plus an untyped configuration map
//! from the host, wraps the payload in a `{"channel", "payload"}` envelope
//! and POSTs it to `<publisher_url>/put`.
//!
//! ```text
//! host ──► config::resolve ──► relay::Dispatcher ──► upstream receiver
//!   ▲                                   │
//!   └──────── payload (unchanged) ──────┘
//! ```
//!
//! - [`config`] - untyped map → [`ConveyorConfig`]
//! - [`relay`] - target URL, envelope, one outbound POST
//! - [`client`] - shared `reqwest` client construction
//! - [`plugin`] - host-facing [`Plugin`] trait and [`EchoConveyor`]

// Test-only lints: allow panic!, unwrap, etc. in test code
#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

pub mod client;
pub mod config;
pub mod error;
pub mod plugin;
pub mod relay;

pub use client::{build_http_client, ClientSettings};
pub use config::resolve;
pub use error::{ConveyorError, ConveyorResult, TransportError};
pub use plugin::{EchoConveyor, Plugin};
pub use relay::Dispatcher;

pub use echo_conveyor_types::{
    ConfigError, ConveyorConfig, DispatchOutcome, Envelope, PluginInfo, PLUGIN_INFO,
};
