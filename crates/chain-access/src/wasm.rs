//! Contract-state queries over the query bridge.
//!
//! This is the one place where "evaluate contract state as of block N" is
//! made precise: the smart query is serialized to JSON bytes, executed at
//! the given height through [`abci_query`], and the response is required to
//! decode back to JSON. A contract answering anything else is in violation
//! of the query convention and surfaces as a decode error, never as an
//! empty result.

use core::str;

use prost::Message;
use serde_json::Value;
use tendermint::block::Height;
use tendermint_rpc::{HttpClient, Url};
use tracing::error;

use crate::error::Error;
use crate::proto::wasm::{QuerySmartContractStateRequest, QuerySmartContractStateResponse};
use crate::query::{abci_query, query_path};

pub const WASM_QUERY_SERVICE: &str = "cosmwasm.wasm.v1.Query";
const SMART_CONTRACT_STATE: &str = "SmartContractState";

/// Invoke a contract's query entry point with `query`, evaluated at
/// `height`, and parse the JSON it returns.
pub async fn query_contract_smart(
    rpc_client: &HttpClient,
    rpc_address: &Url,
    address: &str,
    query: &Value,
    height: Option<Height>,
) -> Result<Value, Error> {
    let request = QuerySmartContractStateRequest {
        address: address.to_string(),
        query_data: serde_json::to_vec(query)
            .map_err(|e| Error::json("contract query message".to_string(), e))?,
    };

    let value = abci_query(
        rpc_client,
        rpc_address,
        query_path(WASM_QUERY_SERVICE, SMART_CONTRACT_STATE),
        request.encode_to_vec(),
        height,
    )
    .await?;

    let response = QuerySmartContractStateResponse::decode(value.as_slice()).map_err(|e| {
        Error::protobuf(
            "cosmwasm.wasm.v1.QuerySmartContractStateResponse".to_string(),
            e,
        )
    })?;

    decode_smart_query_response(&response.data)
}

/// Decode the raw contract answer: UTF-8 text first, JSON second. The two
/// failure points are reported as distinct errors.
pub(crate) fn decode_smart_query_response(data: &[u8]) -> Result<Value, Error> {
    let text = str::from_utf8(data).map_err(|e| {
        error!("smart query response is not valid UTF-8");
        Error::smart_query_utf8(e)
    })?;

    serde_json::from_str(text).map_err(|e| {
        error!("smart query response is not valid JSON");
        Error::smart_query_json(e)
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ErrorDetail;

    #[test]
    fn valid_json_response() {
        let value = decode_smart_query_response(br#"{"balance":"42"}"#).expect("valid response");
        assert_eq!(value, json!({"balance": "42"}));
    }

    #[test]
    fn non_utf8_response_is_a_decode_error() {
        let err = decode_smart_query_response(&[0xff, 0xfe]).expect_err("invalid UTF-8");
        assert!(matches!(err.detail(), ErrorDetail::SmartQueryUtf8(_)));
        assert!(err
            .detail()
            .to_string()
            .contains("smart query response is not valid UTF-8"));
    }

    #[test]
    fn non_json_response_is_a_decode_error() {
        let err = decode_smart_query_response(b"stack overflow").expect_err("invalid JSON");
        assert!(matches!(err.detail(), ErrorDetail::SmartQueryJson(_)));
        assert!(err
            .detail()
            .to_string()
            .contains("smart query response is not valid JSON"));
    }
}
