//! Error taxonomy for the data-access layer, and the classification of raw
//! transport failures into the kinds the endpoint pool pattern-matches on.

use core::str::Utf8Error;
use std::path::PathBuf;

use flex_error::{define_error, TraceError};
use serde_json::Value;
use tendermint_rpc::Url;

/// Exact message produced by rate-limiting gateways in front of public RPC
/// endpoints. Observed behavior, not documented anywhere; keep verbatim.
pub const RATE_LIMIT_MESSAGE: &str = "Request failed with status code 429";

/// Exact message produced by gateways rejecting the caller outright.
pub const FORBIDDEN_MESSAGE: &str = "Request failed with status code 403";

/// Substring a pruned node puts in the `data` field of its JSON error body
/// when asked for a height below its retained window.
pub const PRUNED_NODE_MARKER: &str = "is not available, lowest height is";

/// Substring wasmd puts in the query log when no contract code lives at the
/// queried address.
pub const CONTRACT_NOT_FOUND_MARKER: &str = "contract: not found";

define_error! {
    Error {
        InvalidEndpoint
            { endpoint: String }
            [ TraceError<tendermint_rpc::Error> ]
            |e| { format_args!("invalid RPC endpoint {}", e.endpoint) },

        Rpc
            { url: Url }
            [ TraceError<tendermint_rpc::Error> ]
            |e| { format_args!("RPC error to endpoint {}", e.url) },

        RateLimit
            { message: String }
            |e| { e.message.clone() },

        Forbidden
            { message: String }
            |e| { e.message.clone() },

        PrunedNode
            { message: String }
            |e| {
                format_args!(
                    "{}\nthe endpoint is likely a pruned node and lacks historical data for the requested height",
                    e.message
                )
            },

        AbciQuery
            { path: String, code: u32, log: String }
            |e| { format_args!("ABCI query {} failed with code {}: {}", e.path, e.code, e.log) },

        InvalidHeight
            { height: u64 }
            |e| { format_args!("invalid block height {}", e.height) },

        UnregisteredType
            { type_url: String }
            |e| { format_args!("no codec registered for message type {}", e.type_url) },

        Protobuf
            { type_url: String }
            [ TraceError<prost::DecodeError> ]
            |e| { format_args!("failed to decode protobuf message {}", e.type_url) },

        UnresolvedMessageType
            { package: String, message: String }
            |e| {
                format_args!(
                    "message type {}.{} was not found in the supplied proto definitions",
                    e.package, e.message
                )
            },

        DescriptorSet
            { package: String }
            [ TraceError<prost_reflect::DescriptorError> ]
            |e| { format_args!("invalid proto descriptor set for package {}", e.package) },

        EmbeddedJson
            { type_url: String }
            [ TraceError<serde_json::Error> ]
            |e| { format_args!("embedded msg field of {} is not valid JSON", e.type_url) },

        SmartQueryUtf8
            [ TraceError<Utf8Error> ]
            |_| { "smart query response is not valid UTF-8" },

        SmartQueryJson
            [ TraceError<serde_json::Error> ]
            |_| { "smart query response is not valid JSON" },

        Json
            { context: String }
            [ TraceError<serde_json::Error> ]
            |e| { format_args!("failed to serialize {} as JSON", e.context) },

        ContractNotFound
            { address: String }
            |e| { format_args!("No contract found at address \"{}\"", e.address) },

        Io
            { path: PathBuf }
            [ TraceError<std::io::Error> ]
            |e| { format_args!("failed to read {}", e.path.display()) },

        Config
            [ TraceError<toml::de::Error> ]
            |_| { "invalid configuration file" },
    }
}

/// Classify a raw transport error message.
///
/// Returns `Some` only when the message matches one of the externally
/// observed failure shapes: a JSON error body whose `data` field carries the
/// pruned-node marker, or the exact 429/403 gateway strings. Everything else
/// returns `None` and must pass through unchanged. The taxonomy is fixed;
/// the pool's failover logic pattern-matches on the resulting kinds.
pub fn classify_error_message(message: &str) -> Option<Error> {
    match serde_json::from_str::<Value>(message) {
        Ok(body) => body
            .get("data")
            .and_then(Value::as_str)
            .filter(|data| data.contains(PRUNED_NODE_MARKER))
            .map(|_| Error::pruned_node(message.to_string())),
        Err(_) => match message {
            RATE_LIMIT_MESSAGE => Some(Error::rate_limit(message.to_string())),
            FORBIDDEN_MESSAGE => Some(Error::forbidden(message.to_string())),
            _ => None,
        },
    }
}

/// Map an RPC failure into the crate taxonomy. Applied exactly once, at the
/// transport boundary; unmatched errors keep their source attached.
pub fn classify_rpc_error(url: &Url, e: tendermint_rpc::Error) -> Error {
    classify_error_message(&e.to_string()).unwrap_or_else(|| Error::rpc(url.clone(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_renamed_message_unchanged() {
        let err = classify_error_message(RATE_LIMIT_MESSAGE).expect("classified");
        match err.detail() {
            ErrorDetail::RateLimit(detail) => assert_eq!(detail.message, RATE_LIMIT_MESSAGE),
            other => panic!("expected RateLimit, got {other:?}"),
        }
    }

    #[test]
    fn forbidden_renamed_message_unchanged() {
        let err = classify_error_message(FORBIDDEN_MESSAGE).expect("classified");
        match err.detail() {
            ErrorDetail::Forbidden(detail) => assert_eq!(detail.message, FORBIDDEN_MESSAGE),
            other => panic!("expected Forbidden, got {other:?}"),
        }
    }

    #[test]
    fn pruned_node_note_appended() {
        let message = r#"{"code":-32603,"message":"Internal error","data":"height 12 is not available, lowest height is 1000"}"#;
        let err = classify_error_message(message).expect("classified");
        match err.detail() {
            ErrorDetail::PrunedNode(detail) => {
                assert_eq!(detail.message, message);
                let rendered = err.detail().to_string();
                assert!(rendered.starts_with(message));
                assert!(rendered.contains("pruned node"));
            }
            other => panic!("expected PrunedNode, got {other:?}"),
        }
    }

    #[test]
    fn json_body_without_marker_passes_through() {
        let message = r#"{"code":-32602,"message":"Invalid params","data":"wrong format"}"#;
        assert!(classify_error_message(message).is_none());
    }

    #[test]
    fn other_messages_pass_through() {
        assert!(classify_error_message("connection refused").is_none());
        assert!(classify_error_message("Request failed with status code 500").is_none());
    }

    #[test]
    fn contract_not_found_names_address() {
        let err = Error::contract_not_found("cosmos1xxx".to_string());
        assert!(err
            .detail()
            .to_string()
            .contains(r#"No contract found at address "cosmos1xxx""#));
    }
}
