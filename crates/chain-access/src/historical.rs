//! Historical (safe) client: every read is pinned to one block height.
//!
//! The pinned height is fixed at construction and no operation accepts a
//! height argument, which is what makes results reproducible across repeated
//! passes over the same block. Instances are cheap and disposable; any
//! number may coexist, each pinned to its own height.

use serde_derive::{Deserialize, Serialize};
use serde_json::Value;
use tendermint::block::Height;
use tendermint_rpc::endpoint::{block, tx};
use tendermint_rpc::{Client, HttpClient, Paging, Url};
use tracing::warn;

use crate::error::{classify_rpc_error, Error, CONTRACT_NOT_FOUND_MARKER};
use crate::head::{height_query, search_txs, try_height};
use crate::wasm;

/// Block header normalized for the indexing pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedBlockHeader {
    /// Block hash as uppercase hex.
    pub hash: String,
    pub version: ProtocolVersion,
    pub height: u64,
    pub chain_id: String,
    /// RFC 3339 timestamp with nanosecond precision.
    pub time: String,
    /// Raw transaction bytes, in block order.
    pub txs: Vec<Vec<u8>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolVersion {
    pub block: u64,
    pub app: u64,
}

/// Transaction normalized for the indexing pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTx {
    pub index: u32,
    pub height: u64,
    /// Transaction hash as uppercase hex.
    pub hash: String,
    pub code: u32,
    pub log: String,
    /// Raw transaction bytes.
    pub tx: Vec<u8>,
    pub gas_used: i64,
    pub gas_wanted: i64,
    pub events: Vec<TxEvent>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxEvent {
    pub kind: String,
    pub attributes: Vec<TxAttribute>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxAttribute {
    pub key: String,
    pub value: String,
}

/// Client for deterministic reads while reprocessing one historical block.
#[derive(Clone, Debug)]
pub struct HistoricalClient {
    rpc_client: HttpClient,
    rpc_address: Url,
    height: Height,
}

impl HistoricalClient {
    /// Pin `height` for the lifetime of the client.
    pub fn new(rpc_client: HttpClient, rpc_address: Url, height: u64) -> Result<Self, Error> {
        Ok(Self {
            rpc_client,
            rpc_address,
            height: try_height(height)?,
        })
    }

    pub fn height(&self) -> u64 {
        self.height.value()
    }

    /// The normalized header of the pinned block.
    pub async fn get_block(&self) -> Result<NormalizedBlockHeader, Error> {
        let response = self
            .rpc_client
            .block(self.height)
            .await
            .map_err(|e| classify_rpc_error(&self.rpc_address, e))?;
        Ok(normalize_header(response))
    }

    /// The validator set as of the pinned height.
    pub async fn validators(&self) -> Result<Vec<tendermint::validator::Info>, Error> {
        let response = self
            .rpc_client
            .validators(self.height, Paging::All)
            .await
            .map_err(|e| classify_rpc_error(&self.rpc_address, e))?;
        Ok(response.validators)
    }

    /// Every transaction of the pinned block, normalized. Results at any
    /// other height are dropped even if the transport returns them.
    pub async fn search_tx(&self) -> Result<Vec<NormalizedTx>, Error> {
        let height = self.height.value();
        let raw = search_txs(&self.rpc_client, &self.rpc_address, height_query(height)).await?;
        Ok(normalize_at_height(raw, height))
    }

    /// Contract smart query evaluated at the pinned height.
    pub async fn query_contract_smart(&self, address: &str, query: &Value) -> Result<Value, Error> {
        wasm::query_contract_smart(
            &self.rpc_client,
            &self.rpc_address,
            address,
            query,
            Some(self.height),
        )
        .await
        .map_err(|e| contract_not_found(address, e))
    }
}

/// Re-raise a missing-contract query failure with the queried address
/// embedded; every other error propagates unchanged.
fn contract_not_found(address: &str, e: Error) -> Error {
    if e.to_string().contains(CONTRACT_NOT_FOUND_MARKER) {
        warn!(address, "contract query failed: no contract at address");
        Error::contract_not_found(address.to_string())
    } else {
        e
    }
}

fn normalize_header(response: block::Response) -> NormalizedBlockHeader {
    let block::Response {
        block_id, block, ..
    } = response;
    let header = block.header;

    NormalizedBlockHeader {
        hash: upper_hex(block_id.hash.as_bytes()),
        version: ProtocolVersion {
            block: header.version.block,
            app: header.version.app,
        },
        height: header.height.value(),
        chain_id: header.chain_id.to_string(),
        time: header.time.to_rfc3339(),
        txs: block.data,
    }
}

fn normalize_at_height(raw: Vec<tx::Response>, height: u64) -> Vec<NormalizedTx> {
    raw.into_iter()
        .filter(|tx| tx.height.value() == height)
        .map(normalize_tx)
        .collect()
}

fn normalize_tx(response: tx::Response) -> NormalizedTx {
    let result = response.tx_result;

    NormalizedTx {
        index: response.index,
        height: response.height.value(),
        hash: upper_hex(response.hash.as_bytes()),
        code: result.code.value(),
        log: result.log,
        tx: response.tx,
        gas_used: result.gas_used,
        gas_wanted: result.gas_wanted,
        events: result
            .events
            .into_iter()
            .map(|event| TxEvent {
                kind: event.kind,
                attributes: event
                    .attributes
                    .into_iter()
                    .map(|attribute| TxAttribute {
                        key: attribute.key,
                        value: attribute.value,
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub(crate) fn upper_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

#[cfg(test)]
mod tests {
    use tendermint::abci::response::DeliverTx;
    use tendermint::abci::Event;
    use tendermint::Hash;

    use super::*;
    use crate::error::ErrorDetail;

    fn tx_at(height: u64, index: u32) -> tx::Response {
        tx::Response {
            hash: Hash::Sha256([0xAB; 32]),
            height: Height::try_from(height).unwrap(),
            index,
            tx_result: DeliverTx {
                log: "ok".to_string(),
                gas_wanted: 200_000,
                gas_used: 151_034,
                events: vec![Event::new(
                    "wasm",
                    [("_contract_address", "cosmos1contract")],
                )],
                ..Default::default()
            },
            tx: vec![1, 2, 3],
            proof: None,
        }
    }

    #[test]
    fn hash_rendering_is_uppercase_hex() {
        assert_eq!(upper_hex(&[0xAB, 0xCD]), "ABCD");
    }

    #[test]
    fn normalize_tx_shape() {
        let normalized = normalize_tx(tx_at(100, 2));

        assert_eq!(normalized.height, 100);
        assert_eq!(normalized.index, 2);
        assert_eq!(normalized.hash, "AB".repeat(32));
        assert_eq!(normalized.code, 0);
        assert_eq!(normalized.gas_wanted, 200_000);
        assert_eq!(normalized.tx, vec![1, 2, 3]);
        assert_eq!(normalized.events.len(), 1);
        assert_eq!(normalized.events[0].kind, "wasm");
        assert_eq!(normalized.events[0].attributes[0].key, "_contract_address");
        assert_eq!(normalized.events[0].attributes[0].value, "cosmos1contract");
    }

    #[test]
    fn results_outside_the_pinned_height_are_dropped() {
        let raw = vec![tx_at(100, 0), tx_at(101, 0), tx_at(100, 1)];
        let normalized = normalize_at_height(raw, 100);

        assert_eq!(normalized.len(), 2);
        assert!(normalized.iter().all(|tx| tx.height == 100));
    }

    #[test]
    fn missing_contract_is_reraised_with_address() {
        let underlying = Error::abci_query(
            "/cosmwasm.wasm.v1.Query/SmartContractState".to_string(),
            18,
            "contract: not found: invalid request".to_string(),
        );
        let err = contract_not_found("cosmos1xxx", underlying);

        match err.detail() {
            ErrorDetail::ContractNotFound(detail) => assert_eq!(detail.address, "cosmos1xxx"),
            other => panic!("expected ContractNotFound, got {other:?}"),
        }
        assert!(err
            .detail()
            .to_string()
            .contains(r#"No contract found at address "cosmos1xxx""#));
    }

    #[test]
    fn other_query_errors_propagate_unchanged() {
        let underlying = Error::abci_query("/some/path".to_string(), 1, "panic".to_string());
        let err = contract_not_found("cosmos1xxx", underlying);
        assert!(matches!(err.detail(), ErrorDetail::AbciQuery(_)));
    }
}
