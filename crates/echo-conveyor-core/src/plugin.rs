//! Host-facing plugin entry points.

use async_trait::async_trait;
use bytes::Bytes;
use echo_conveyor_types::{ConveyorConfig, PluginInfo, PLUGIN_INFO};
use serde_json::Value;
use tokio::runtime::{Handle, RuntimeFlavor};

use crate::client::ClientSettings;
use crate::config::resolve;
use crate::error::{ConveyorError, ConveyorResult};
use crate::relay::Dispatcher;

/// Contract between the host runtime and a loaded plugin.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Static identity of the plugin.
    fn info(&self) -> &'static PluginInfo;

    /// Process one payload with the host-supplied configuration map.
    ///
    /// On success the returned bytes are handed on by the host.
    async fn execute(&self, payload: Bytes, config: &Value) -> ConveyorResult<Bytes>;
}

/// Relays each payload to an upstream receiver and echoes it back.
#[derive(Debug, Clone)]
pub struct EchoConveyor {
    dispatcher: Dispatcher,
}

impl EchoConveyor {
    pub fn new(settings: ClientSettings) -> ConveyorResult<Self> {
        Ok(Self { dispatcher: Dispatcher::from_settings(&settings)? })
    }

    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Same as [`Plugin::execute`] for a host that already holds a typed record.
    pub async fn execute_typed(
        &self,
        payload: Bytes,
        config: &ConveyorConfig,
    ) -> ConveyorResult<Bytes> {
        let outcome = match self.dispatcher.dispatch(&payload, config).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(
                    plugin = PLUGIN_INFO.name,
                    channel = %config.upstream_channel,
                    error = %e,
                    "Couldn't publish message to upstream"
                );
                return Err(e.into());
            }
        };

        tracing::info!(
            plugin = PLUGIN_INFO.name,
            publish_result = outcome.published,
            "Published"
        );

        Ok(payload)
    }

    /// Synchronous entry point for hosts that do not drive futures themselves.
    ///
    /// Outside a runtime a private current-thread runtime is started. On a
    /// multi-thread runtime worker the call runs on the ambient handle via
    /// `block_in_place`. A current-thread runtime cannot be blocked on, so
    /// that case returns [`ConveyorError::CurrentThreadRuntime`].
    pub fn execute_blocking(&self, payload: Bytes, config: &Value) -> ConveyorResult<Bytes> {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(self.execute(payload, config)))
            }
            Ok(_) => {
                let err = ConveyorError::CurrentThreadRuntime;
                tracing::warn!(
                    plugin = PLUGIN_INFO.name,
                    error = %err,
                    "Blocking execution refused"
                );
                Err(err)
            }
            Err(_) => {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .map_err(|e| {
                        tracing::warn!(
                            plugin = PLUGIN_INFO.name,
                            error = %e,
                            "Runtime start failed"
                        );
                        ConveyorError::Runtime(e)
                    })?;
                runtime.block_on(self.execute(payload, config))
            }
        }
    }
}

#[async_trait]
impl Plugin for EchoConveyor {
    fn info(&self) -> &'static PluginInfo {
        &PLUGIN_INFO
    }

    async fn execute(&self, payload: Bytes, config: &Value) -> ConveyorResult<Bytes> {
        let config = resolve(config).map_err(|e| {
            tracing::warn!(plugin = PLUGIN_INFO.name, error = %e, "Configuration rejected");
            e
        })?;
        self.execute_typed(payload, &config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echo_conveyor_types::ConfigError;
    use serde_json::json;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Log sink shared between a test and its fmt subscriber.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.contents())
    }

    fn plugin() -> EchoConveyor {
        EchoConveyor::new(ClientSettings::default()).unwrap()
    }

    #[test]
    fn test_info() {
        let plugin = plugin();
        assert_eq!(plugin.info().name, "EchoConveyor");
        assert_eq!(plugin.info().description, "Echo Conveyor plugin for TaskQ Subscriber");
    }

    #[test]
    fn test_blocking_rejects_unknown_key() {
        let err = plugin()
            .execute_blocking(Bytes::from_static(b"beep-boop"), &json!({ "colour": "red" }))
            .unwrap_err();

        assert!(matches!(
            err,
            ConveyorError::Config(ConfigError::UnknownKey { ref key }) if key == "colour"
        ));
    }

    #[test]
    fn test_config_failure_is_logged() {
        let plugin = plugin();
        let (result, logs) = capture(|| {
            plugin.execute_blocking(Bytes::from_static(b"beep-boop"), &json!({ "colour": "red" }))
        });

        assert!(result.is_err());
        assert!(logs.contains("WARN"), "logs: {logs}");
        assert!(logs.contains("Configuration rejected"), "logs: {logs}");
        assert!(logs.contains("colour"), "logs: {logs}");
    }

    #[test]
    fn test_transport_failure_is_logged() {
        let plugin = plugin();
        let (result, logs) = capture(|| {
            plugin.execute_blocking(
                Bytes::from_static(b"beep-boop"),
                &json!({ "publisher_channel": "junk" }),
            )
        });

        assert!(matches!(result, Err(ConveyorError::Transport(_))));
        assert!(logs.contains("Couldn't publish message to upstream"), "logs: {logs}");
        assert!(logs.contains("no upstream publisher URL configured"), "logs: {logs}");
    }

    #[tokio::test]
    async fn test_missing_url_is_transport_error() {
        let err = plugin()
            .execute(Bytes::from_static(b"beep-boop"), &json!({ "publisher_channel": "junk" }))
            .await
            .unwrap_err();

        assert!(matches!(err, ConveyorError::Transport(crate::TransportError::MissingUrl)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_blocking_inside_multi_thread_runtime() {
        let err = plugin()
            .execute_blocking(Bytes::from_static(b"beep-boop"), &json!({ "colour": "red" }))
            .unwrap_err();

        assert!(matches!(err, ConveyorError::Config(ConfigError::UnknownKey { .. })));
    }

    #[tokio::test]
    async fn test_blocking_inside_current_thread_runtime_is_refused() {
        let err = plugin()
            .execute_blocking(
                Bytes::from_static(b"beep-boop"),
                &json!({ "publisher_channel": "junk" }),
            )
            .unwrap_err();

        assert!(matches!(err, ConveyorError::CurrentThreadRuntime), "got {err:?}");
    }
}
