//! Typed decode registry mapping message type URLs to codecs.
//!
//! The registry is built once per chain configuration and is read-only
//! afterwards; clients share it behind an `Arc` without copying. Unresolvable
//! custom type names fail the build immediately so configuration mistakes
//! surface at initialization, never at first decode.

use core::fmt;
use std::collections::HashMap;
use std::fs;
use std::sync::Arc;

use ibc_proto::cosmos::bank::v1beta1::{MsgMultiSend, MsgSend};
use ibc_proto::google::protobuf::Any;
use ibc_proto::ibc::applications::transfer::v1::MsgTransfer;
use prost::Message;
use prost_reflect::{DescriptorPool, DynamicMessage, MessageDescriptor};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::ChainConfig;
use crate::error::Error;
use crate::proto::{distribution, gov, staking, wasm};

pub const EXECUTE_CONTRACT_TYPE_URL: &str = "/cosmwasm.wasm.v1.MsgExecuteContract";
pub const MIGRATE_CONTRACT_TYPE_URL: &str = "/cosmwasm.wasm.v1.MsgMigrateContract";
pub const INSTANTIATE_CONTRACT_TYPE_URL: &str = "/cosmwasm.wasm.v1.MsgInstantiateContract";

/// Contract-lifecycle message kinds whose `msg` bytes field carries a UTF-8
/// JSON payload. Deliberately narrow: other message kinds keep their bytes
/// untouched.
const EMBEDDED_JSON_TYPE_URLS: [&str; 3] = [
    EXECUTE_CONTRACT_TYPE_URL,
    MIGRATE_CONTRACT_TYPE_URL,
    INSTANTIATE_CONTRACT_TYPE_URL,
];

/// A message decoded through the registry. For the contract-lifecycle kinds
/// in the allowlist, `value.msg` holds the parsed JSON payload instead of
/// the raw bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedMessage {
    pub type_url: String,
    pub value: Value,
}

type DecodeFn = Arc<dyn Fn(&[u8]) -> Result<Value, Error> + Send + Sync>;

pub struct MessageRegistry {
    codecs: HashMap<String, DecodeFn>,
}

impl MessageRegistry {
    /// An empty registry; only useful as a base for custom registrations.
    pub fn empty() -> Self {
        Self {
            codecs: HashMap::new(),
        }
    }

    /// A registry seeded with the standard chain message types and the
    /// contract-execution message types.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();

        registry.register::<MsgSend>("/cosmos.bank.v1beta1.MsgSend");
        registry.register::<MsgMultiSend>("/cosmos.bank.v1beta1.MsgMultiSend");
        registry.register::<MsgTransfer>("/ibc.applications.transfer.v1.MsgTransfer");

        registry.register::<staking::MsgDelegate>("/cosmos.staking.v1beta1.MsgDelegate");
        registry.register::<staking::MsgUndelegate>("/cosmos.staking.v1beta1.MsgUndelegate");
        registry
            .register::<staking::MsgBeginRedelegate>("/cosmos.staking.v1beta1.MsgBeginRedelegate");
        registry
            .register::<staking::MsgCreateValidator>("/cosmos.staking.v1beta1.MsgCreateValidator");
        registry.register::<staking::MsgEditValidator>("/cosmos.staking.v1beta1.MsgEditValidator");

        registry.register::<gov::MsgSubmitProposal>("/cosmos.gov.v1beta1.MsgSubmitProposal");
        registry.register::<gov::MsgVote>("/cosmos.gov.v1beta1.MsgVote");
        registry.register::<gov::MsgDeposit>("/cosmos.gov.v1beta1.MsgDeposit");

        registry.register::<distribution::MsgSetWithdrawAddress>(
            "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress",
        );
        registry.register::<distribution::MsgWithdrawDelegatorReward>(
            "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward",
        );
        registry.register::<distribution::MsgWithdrawValidatorCommission>(
            "/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission",
        );
        registry.register::<distribution::MsgFundCommunityPool>(
            "/cosmos.distribution.v1beta1.MsgFundCommunityPool",
        );

        registry.register::<wasm::MsgStoreCode>("/cosmwasm.wasm.v1.MsgStoreCode");
        registry.register::<wasm::MsgInstantiateContract>(INSTANTIATE_CONTRACT_TYPE_URL);
        registry.register::<wasm::MsgExecuteContract>(EXECUTE_CONTRACT_TYPE_URL);
        registry.register::<wasm::MsgMigrateContract>(MIGRATE_CONTRACT_TYPE_URL);
        registry.register::<wasm::MsgUpdateAdmin>("/cosmwasm.wasm.v1.MsgUpdateAdmin");
        registry.register::<wasm::MsgClearAdmin>("/cosmwasm.wasm.v1.MsgClearAdmin");

        registry
    }

    /// Build the full registry for a chain: defaults plus every custom
    /// module the project declares. Fails fast on an unreadable descriptor
    /// set or an unresolvable message name.
    pub fn build(config: &ChainConfig) -> Result<Self, Error> {
        let mut registry = Self::with_defaults();

        for module in &config.custom_modules {
            let bytes = fs::read(&module.descriptor_set)
                .map_err(|e| Error::io(module.descriptor_set.clone(), e))?;
            let pool = DescriptorPool::decode(bytes.as_slice())
                .map_err(|e| Error::descriptor_set(module.package.clone(), e))?;
            registry.register_module(&pool, &module.package, &module.messages)?;
        }

        Ok(registry)
    }

    /// Register a compiled message type under `type_url`.
    pub fn register<T>(&mut self, type_url: impl Into<String>)
    where
        T: Message + Default + Serialize + 'static,
    {
        let type_url = type_url.into();
        let url = type_url.clone();
        let decode: DecodeFn = Arc::new(move |bytes: &[u8]| {
            let msg = T::decode(bytes).map_err(|e| Error::protobuf(url.clone(), e))?;
            serde_json::to_value(&msg).map_err(|e| Error::json(url.clone(), e))
        });
        self.codecs.insert(type_url, decode);
    }

    /// Register a dynamic message type resolved from a descriptor pool.
    pub fn register_dynamic(&mut self, type_url: impl Into<String>, descriptor: MessageDescriptor) {
        let type_url = type_url.into();
        let url = type_url.clone();
        let decode: DecodeFn = Arc::new(move |bytes: &[u8]| {
            let msg = DynamicMessage::decode(descriptor.clone(), bytes)
                .map_err(|e| Error::protobuf(url.clone(), e))?;
            serde_json::to_value(&msg).map_err(|e| Error::json(url.clone(), e))
        });
        self.codecs.insert(type_url, decode);
    }

    /// Register every named message of a custom proto module. A declared
    /// name missing from the pool fails the whole registration.
    pub fn register_module(
        &mut self,
        pool: &DescriptorPool,
        package: &str,
        messages: &[String],
    ) -> Result<(), Error> {
        for message in messages {
            let full_name = format!("{package}.{message}");
            let descriptor = pool.get_message_by_name(&full_name).ok_or_else(|| {
                Error::unresolved_message_type(package.to_string(), message.to_string())
            })?;
            debug!(%full_name, "registered custom message type");
            self.register_dynamic(format!("/{full_name}"), descriptor);
        }
        Ok(())
    }

    pub fn contains(&self, type_url: &str) -> bool {
        self.codecs.contains_key(type_url)
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// Decode a message by its type URL. Failures are logged here, at the
    /// point of failure, before being returned.
    pub fn decode(&self, msg: &Any) -> Result<DecodedMessage, Error> {
        let decode = self.codecs.get(&msg.type_url).ok_or_else(|| {
            error!(type_url = %msg.type_url, "cannot decode message: type is not registered");
            Error::unregistered_type(msg.type_url.clone())
        })?;

        let mut value = decode(&msg.value).map_err(|e| {
            error!(type_url = %msg.type_url, "failed to decode message: {}", e);
            e
        })?;

        if EMBEDDED_JSON_TYPE_URLS.contains(&msg.type_url.as_str()) {
            parse_embedded_msg(&msg.type_url, &mut value)?;
        }

        Ok(DecodedMessage {
            type_url: msg.type_url.clone(),
            value,
        })
    }
}

impl fmt::Debug for MessageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageRegistry")
            .field("types", &self.codecs.len())
            .finish()
    }
}

/// Replace the `msg` bytes field of a decoded contract-lifecycle message
/// with its parsed JSON payload.
fn parse_embedded_msg(type_url: &str, value: &mut Value) -> Result<(), Error> {
    let Some(field) = value.get_mut("msg") else {
        return Ok(());
    };
    let Some(items) = field.as_array() else {
        return Ok(());
    };

    let bytes: Vec<u8> = items
        .iter()
        .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
        .collect::<Option<Vec<u8>>>()
        .unwrap_or_default();

    let embedded: Value = serde_json::from_slice(&bytes).map_err(|e| {
        error!(type_url, "embedded msg field is not valid JSON: {}", e);
        Error::embedded_json(type_url.to_string(), e)
    })?;

    *field = embedded;
    Ok(())
}

#[cfg(test)]
mod tests {
    use prost_types::{
        field_descriptor_proto, DescriptorProto, FieldDescriptorProto, FileDescriptorProto,
        FileDescriptorSet,
    };
    use serde_json::json;

    use super::*;
    use crate::error::ErrorDetail;

    fn any(type_url: &str, value: Vec<u8>) -> Any {
        Any {
            type_url: type_url.to_string(),
            value,
        }
    }

    /// A single-message descriptor pool for `osmosis.gamm.v1beta1.MsgSwap`
    /// with one string field `sender`.
    fn test_pool() -> DescriptorPool {
        let file = FileDescriptorProto {
            name: Some("gamm.proto".to_string()),
            package: Some("osmosis.gamm.v1beta1".to_string()),
            syntax: Some("proto3".to_string()),
            message_type: vec![DescriptorProto {
                name: Some("MsgSwap".to_string()),
                field: vec![FieldDescriptorProto {
                    name: Some("sender".to_string()),
                    number: Some(1),
                    label: Some(field_descriptor_proto::Label::Optional as i32),
                    r#type: Some(field_descriptor_proto::Type::String as i32),
                    json_name: Some("sender".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        };
        let set = FileDescriptorSet { file: vec![file] };
        DescriptorPool::decode(set.encode_to_vec().as_slice()).expect("valid descriptor set")
    }

    #[test]
    fn defaults_cover_standard_and_wasm_types() {
        let registry = MessageRegistry::with_defaults();
        assert!(registry.contains("/cosmos.bank.v1beta1.MsgSend"));
        assert!(registry.contains("/cosmos.staking.v1beta1.MsgDelegate"));
        assert!(registry.contains("/cosmos.gov.v1beta1.MsgVote"));
        assert!(registry.contains("/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward"));
        assert!(registry.contains("/ibc.applications.transfer.v1.MsgTransfer"));
        assert!(registry.contains(EXECUTE_CONTRACT_TYPE_URL));
        assert!(registry.contains(MIGRATE_CONTRACT_TYPE_URL));
        assert!(registry.contains(INSTANTIATE_CONTRACT_TYPE_URL));
    }

    #[test]
    fn decode_staking_delegate() {
        let registry = MessageRegistry::with_defaults();
        let msg = staking::MsgDelegate {
            delegator_address: "cosmos1delegator".to_string(),
            validator_address: "cosmosvaloper1validator".to_string(),
            amount: Some(ibc_proto::cosmos::base::v1beta1::Coin {
                denom: "uatom".to_string(),
                amount: "1000".to_string(),
            }),
        };
        let decoded = registry
            .decode(&any("/cosmos.staking.v1beta1.MsgDelegate", msg.encode_to_vec()))
            .expect("decodes");
        assert_eq!(decoded.value["delegator_address"], json!("cosmos1delegator"));
        assert_eq!(decoded.value["amount"]["denom"], json!("uatom"));
    }

    #[test]
    fn decode_execute_contract_parses_embedded_json() {
        let registry = MessageRegistry::with_defaults();
        let msg = wasm::MsgExecuteContract {
            sender: "cosmos1sender".to_string(),
            contract: "cosmos1contract".to_string(),
            msg: br#"{"a":1}"#.to_vec(),
            funds: vec![],
        };
        let decoded = registry
            .decode(&any(EXECUTE_CONTRACT_TYPE_URL, msg.encode_to_vec()))
            .expect("decodes");

        assert_eq!(decoded.type_url, EXECUTE_CONTRACT_TYPE_URL);
        assert_eq!(decoded.value["sender"], json!("cosmos1sender"));
        assert_eq!(decoded.value["msg"], json!({"a": 1}));
    }

    #[test]
    fn decode_bank_send_keeps_bytes_untouched() {
        let registry = MessageRegistry::with_defaults();
        let msg = MsgSend {
            from_address: "cosmos1from".to_string(),
            to_address: "cosmos1to".to_string(),
            amount: vec![],
        };
        let decoded = registry
            .decode(&any("/cosmos.bank.v1beta1.MsgSend", msg.encode_to_vec()))
            .expect("decodes");
        assert_eq!(decoded.value["from_address"], json!("cosmos1from"));
    }

    #[test]
    fn decode_invalid_embedded_json_fails() {
        let registry = MessageRegistry::with_defaults();
        let msg = wasm::MsgMigrateContract {
            sender: "cosmos1sender".to_string(),
            contract: "cosmos1contract".to_string(),
            code_id: 7,
            msg: b"not json".to_vec(),
        };
        let err = registry
            .decode(&any(MIGRATE_CONTRACT_TYPE_URL, msg.encode_to_vec()))
            .expect_err("embedded payload is not JSON");
        assert!(matches!(err.detail(), ErrorDetail::EmbeddedJson(_)));
    }

    #[test]
    fn decode_unregistered_type_fails() {
        let registry = MessageRegistry::with_defaults();
        let err = registry
            .decode(&any("/cosmos.authz.v1beta1.MsgGrant", vec![]))
            .expect_err("type is not registered");
        assert!(matches!(err.detail(), ErrorDetail::UnregisteredType(_)));
    }

    #[test]
    fn register_module_resolves_declared_names() {
        let mut registry = MessageRegistry::empty();
        registry
            .register_module(
                &test_pool(),
                "osmosis.gamm.v1beta1",
                &["MsgSwap".to_string()],
            )
            .expect("name resolves");
        assert!(registry.contains("/osmosis.gamm.v1beta1.MsgSwap"));

        // Field 1, wire type 2 (LEN), "alice".
        let bytes = vec![0x0a, 0x05, b'a', b'l', b'i', b'c', b'e'];
        let decoded = registry
            .decode(&any("/osmosis.gamm.v1beta1.MsgSwap", bytes))
            .expect("decodes dynamically");
        assert_eq!(decoded.value["sender"], json!("alice"));
    }

    #[test]
    fn register_module_fails_fast_on_unknown_name() {
        let mut registry = MessageRegistry::empty();
        let err = registry
            .register_module(
                &test_pool(),
                "osmosis.gamm.v1beta1",
                &["MsgDoesNotExist".to_string()],
            )
            .expect_err("name cannot resolve");
        match err.detail() {
            ErrorDetail::UnresolvedMessageType(detail) => {
                assert_eq!(detail.message, "MsgDoesNotExist");
                assert_eq!(detail.package, "osmosis.gamm.v1beta1");
            }
            other => panic!("expected UnresolvedMessageType, got {other:?}"),
        }
    }
}
