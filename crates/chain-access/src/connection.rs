//! Connection factory consumed by the endpoint pool manager.
//!
//! The pool manager owns endpoint lifecycle: it decides when to open a
//! connection, when to probe it, and when to fail over. This module only
//! turns an endpoint address into a head client and derives height-pinned
//! clients from it; no retry or timeout logic lives here, and transport
//! cancellation propagates unmodified.

use std::sync::Arc;

use tendermint::chain;
use tendermint_rpc::{Client, HttpClient, Url};
use tracing::debug;

use crate::error::{classify_rpc_error, Error};
use crate::head::HeadClient;
use crate::historical::HistoricalClient;
use crate::registry::MessageRegistry;

/// An established RPC connection and the clients built on top of it.
#[derive(Clone, Debug)]
pub struct Connection {
    rpc_client: HttpClient,
    rpc_address: Url,
    head: HeadClient,
    registry: Arc<MessageRegistry>,
}

impl Connection {
    /// Build a connection to `endpoint` sharing the read-only `registry`.
    pub fn connect(endpoint: &str, registry: Arc<MessageRegistry>) -> Result<Self, Error> {
        let rpc_address: Url = endpoint
            .parse()
            .map_err(|e| Error::invalid_endpoint(endpoint.to_string(), e))?;
        let rpc_client = HttpClient::new(rpc_address.clone())
            .map_err(|e| Error::invalid_endpoint(endpoint.to_string(), e))?;
        debug!(%rpc_address, "opened RPC connection");

        Ok(Self {
            head: HeadClient::new(rpc_client.clone(), rpc_address.clone(), registry.clone()),
            rpc_client,
            rpc_address,
            registry,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.rpc_address
    }

    /// The unsafe client reading at the live chain head.
    pub fn head(&self) -> &HeadClient {
        &self.head
    }

    /// Derive a safe client pinned to `height`. Cheap; any number of pinned
    /// clients may coexist on one connection.
    pub fn historical(&self, height: u64) -> Result<HistoricalClient, Error> {
        HistoricalClient::new(self.rpc_client.clone(), self.rpc_address.clone(), height)
    }

    pub fn registry(&self) -> &Arc<MessageRegistry> {
        &self.registry
    }
}

/// Read the chain identity of the connected node. The pool manager uses
/// this both as a liveness probe and to check that pooled endpoints agree
/// on the network they serve.
pub async fn probe_chain_identity(connection: &Connection) -> Result<chain::Id, Error> {
    let status = connection
        .rpc_client
        .status()
        .await
        .map_err(|e| classify_rpc_error(&connection.rpc_address, e))?;
    Ok(status.node_info.network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_endpoints() {
        let registry = Arc::new(MessageRegistry::with_defaults());
        assert!(Connection::connect("not a url", registry).is_err());
    }

    #[test]
    fn derives_pinned_clients() {
        let registry = Arc::new(MessageRegistry::with_defaults());
        let connection =
            Connection::connect("http://localhost:26657", registry).expect("valid endpoint");

        let historical = connection.historical(100).expect("valid height");
        assert_eq!(historical.height(), 100);

        // Each derived client carries its own pin.
        let other = connection.historical(200).expect("valid height");
        assert_eq!(other.height(), 200);
        assert_eq!(historical.height(), 100);
    }
}
