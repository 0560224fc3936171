//! Generic height-pinned ABCI queries: the bridge every remote procedure of
//! this crate goes through.

use tendermint::block::Height;
use tendermint_rpc::{Client, HttpClient, Url};
use tracing::trace;

use crate::error::{classify_rpc_error, Error};

/// Builds the ABCI query path for a gRPC service method: `/<service>/<method>`.
pub fn query_path(service: &str, method: &str) -> String {
    format!("/{service}/{method}")
}

/// Perform a generic ABCI query and return the raw response bytes.
///
/// With `height: Some(h)` the query is evaluated against the application
/// state as of block `h`; repeated identical calls then return byte-identical
/// responses, which is what lets the indexing pipeline replay historical
/// blocks. `None` targets the current head and is non-deterministic by
/// design; only the head client uses it.
pub async fn abci_query(
    rpc_client: &HttpClient,
    rpc_address: &Url,
    path: String,
    data: Vec<u8>,
    height: Option<Height>,
) -> Result<Vec<u8>, Error> {
    trace!(%path, height = ?height.map(|h| h.value()), "abci query");

    let response = rpc_client
        .abci_query(Some(path.clone()), data, height, false)
        .await
        .map_err(|e| classify_rpc_error(rpc_address, e))?;

    if !response.code.is_ok() {
        return Err(Error::abci_query(
            path,
            response.code.value(),
            response.log,
        ));
    }

    Ok(response.value)
}
