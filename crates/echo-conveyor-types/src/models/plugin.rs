//! Plugin identity as reported to the host.

/// Static identity of a plugin build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    /// Short name, attached to every log event as `plugin`.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Build version.
    pub version: &'static str,
}

/// Identity of this build. Read-only for the life of the process.
pub const PLUGIN_INFO: PluginInfo = PluginInfo {
    name: "EchoConveyor",
    description: "Echo Conveyor plugin for TaskQ Subscriber",
    version: env!("CARGO_PKG_VERSION"),
};

impl PluginInfo {
    /// `User-Agent` value for outbound requests, e.g. `EchoConveyor/0.1.0`.
    pub fn user_agent(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }
}
