//! Configuration resolution.
//!
//! The host hands over whatever it deserialized from its own config source.
//! [`resolve`] accepts only a flat map of known keys to string values and
//! rejects everything else outright.

use echo_conveyor_types::{
    ConfigError, ConfigResult, ConveyorConfig, PLUGIN_INFO, PUBLISHER_CHANNEL_KEY,
    PUBLISHER_URL_KEY,
};
use serde_json::Value;
use url::Url;

/// Convert an untyped configuration map into a [`ConveyorConfig`].
///
/// Each entry's value type is checked before its key, so a non-string value
/// is reported as [`ConfigError::Type`] even under an unknown key. A map that
/// omits `publisher_url` still resolves; see [`crate::relay::Dispatcher::dispatch`].
pub fn resolve(raw: &Value) -> ConfigResult<ConveyorConfig> {
    let Value::Object(entries) = raw else {
        return Err(ConfigError::Structure);
    };

    let mut config = ConveyorConfig::default();

    for (key, value) in entries {
        let Value::String(value) = value else {
            return Err(ConfigError::Type { key: key.clone() });
        };

        match key.as_str() {
            PUBLISHER_URL_KEY => {
                let url =
                    Url::parse(value).map_err(|e| ConfigError::from_url_error(PUBLISHER_URL_KEY, &e))?;
                config.upstream_url = Some(url);
            }
            PUBLISHER_CHANNEL_KEY => config.upstream_channel.clone_from(value),
            _ => return Err(ConfigError::UnknownKey { key: key.clone() }),
        }
    }

    tracing::info!(
        plugin = PLUGIN_INFO.name,
        channel = %config.upstream_channel,
        "Configuration read"
    );

    Ok(config)
}
