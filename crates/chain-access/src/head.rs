//! Head (unsafe) client: pass-through reads at the live chain tip.

use std::sync::Arc;

use ibc_proto::google::protobuf::Any;
use tendermint::block::Height;
use tendermint_rpc::endpoint::{block, block_results, tx};
use tendermint_rpc::query::Query;
use tendermint_rpc::{Client, HttpClient, Order, Url};
use tracing::trace;

use crate::error::{classify_rpc_error, Error};
use crate::registry::{DecodedMessage, MessageRegistry};

/// Transactions fetched per `tx_search` page.
pub(crate) const TX_SEARCH_PAGE_SIZE: u8 = 100;

/// Single equality predicate selecting every transaction of one block.
pub(crate) fn height_query(height: u64) -> Query {
    Query::eq("tx.height", height)
}

pub(crate) fn try_height(height: u64) -> Result<Height, Error> {
    Height::try_from(height).map_err(|_| Error::invalid_height(height))
}

/// Client used for live block ingestion. Reads are returned in
/// transport-native shape; callers consume the raw responses. Holds no
/// mutable state and may be shared freely across concurrent callers.
#[derive(Clone, Debug)]
pub struct HeadClient {
    rpc_client: HttpClient,
    rpc_address: Url,
    registry: Arc<MessageRegistry>,
}

impl HeadClient {
    pub fn new(rpc_client: HttpClient, rpc_address: Url, registry: Arc<MessageRegistry>) -> Self {
        Self {
            rpc_client,
            rpc_address,
            registry,
        }
    }

    /// The block at `height`, or the current head when `None`.
    pub async fn block_info(&self, height: Option<u64>) -> Result<block::Response, Error> {
        let response = match height {
            Some(height) => self.rpc_client.block(try_height(height)?).await,
            None => self.rpc_client.latest_block().await,
        };
        response.map_err(|e| classify_rpc_error(&self.rpc_address, e))
    }

    /// Execution results of the block at `height`.
    pub async fn block_results(&self, height: u64) -> Result<block_results::Response, Error> {
        self.rpc_client
            .block_results(try_height(height)?)
            .await
            .map_err(|e| classify_rpc_error(&self.rpc_address, e))
    }

    /// Every transaction committed in the block at `height`.
    pub async fn tx_info_by_height(&self, height: u64) -> Result<Vec<tx::Response>, Error> {
        search_txs(&self.rpc_client, &self.rpc_address, height_query(height)).await
    }

    /// Decode a message through the shared registry.
    pub fn decode_msg(&self, msg: &Any) -> Result<DecodedMessage, Error> {
        self.registry.decode(msg)
    }

    pub fn registry(&self) -> &MessageRegistry {
        &self.registry
    }
}

/// Pages through `tx_search` results for `query` in ascending order until
/// the reported total is reached.
pub(crate) async fn search_txs(
    rpc_client: &HttpClient,
    rpc_address: &Url,
    query: Query,
) -> Result<Vec<tx::Response>, Error> {
    let mut txs: Vec<tx::Response> = Vec::new();
    let mut page = 1u32;

    loop {
        let response = rpc_client
            .tx_search(
                query.clone(),
                false,
                page,
                TX_SEARCH_PAGE_SIZE,
                Order::Ascending,
            )
            .await
            .map_err(|e| classify_rpc_error(rpc_address, e))?;

        let total = response.total_count as usize;
        let empty_page = response.txs.is_empty();
        txs.extend(response.txs);

        if empty_page || txs.len() >= total {
            break;
        }
        page += 1;
    }

    trace!(%query, count = txs.len(), "tx search complete");
    Ok(txs)
}
