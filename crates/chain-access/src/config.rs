//! Network configuration for the data-access layer.

use std::fs;
use std::path::{Path, PathBuf};

use serde_derive::{Deserialize, Serialize};
use tendermint_rpc::Url;

use crate::error::Error;

/// Configuration of one indexed network.
///
/// The endpoint list is consumed by the external pool manager; this crate
/// only ever receives one already-established connection at a time. Custom
/// module declarations feed the message registry at initialization.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    pub chain_id: String,
    pub endpoints: Vec<Url>,
    #[serde(default)]
    pub custom_modules: Vec<CustomModule>,
}

/// A project-declared proto module whose message types must be decodable by
/// the registry. Unresolvable message names fail the registry build, not the
/// first decode.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomModule {
    /// Proto package name, e.g. `osmosis.gamm.v1beta1`.
    pub package: String,
    /// Message names inside the package to register.
    pub messages: Vec<String>,
    /// Path to the encoded `FileDescriptorSet` holding the package's proto
    /// definitions.
    pub descriptor_set: PathBuf,
}

/// Read and parse a TOML configuration file.
pub fn load(path: impl AsRef<Path>) -> Result<ChainConfig, Error> {
    let raw = fs::read_to_string(path.as_ref())
        .map_err(|e| Error::io(path.as_ref().to_path_buf(), e))?;
    toml::from_str(&raw).map_err(Error::config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let config: ChainConfig = toml::from_str(
            r#"
            chain_id = "juno-1"
            endpoints = ["http://localhost:26657"]
            "#,
        )
        .expect("valid config");

        assert_eq!(config.chain_id, "juno-1");
        assert_eq!(config.endpoints.len(), 1);
        assert!(config.custom_modules.is_empty());
    }

    #[test]
    fn parse_custom_modules() {
        let config: ChainConfig = toml::from_str(
            r#"
            chain_id = "osmosis-1"
            endpoints = ["https://rpc.osmosis.zone:443", "http://localhost:26657"]

            [[custom_modules]]
            package = "osmosis.gamm.v1beta1"
            messages = ["MsgSwapExactAmountIn", "MsgSwapExactAmountOut"]
            descriptor_set = "proto/osmosis.pb"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.custom_modules.len(), 1);
        let module = &config.custom_modules[0];
        assert_eq!(module.package, "osmosis.gamm.v1beta1");
        assert_eq!(module.messages.len(), 2);
        assert_eq!(module.descriptor_set, PathBuf::from("proto/osmosis.pb"));
    }

    #[test]
    fn unknown_fields_rejected() {
        let result = toml::from_str::<ChainConfig>(
            r#"
            chain_id = "juno-1"
            endpoints = []
            retries = 3
            "#,
        );
        assert!(result.is_err());
    }
}
