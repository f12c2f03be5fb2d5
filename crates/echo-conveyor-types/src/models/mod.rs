//! Domain models for Echo Conveyor.

mod config;
mod envelope;
mod plugin;

pub use config::{ConveyorConfig, DispatchOutcome, PUBLISHER_CHANNEL_KEY, PUBLISHER_URL_KEY};
pub use envelope::Envelope;
pub use plugin::{PluginInfo, PLUGIN_INFO};
