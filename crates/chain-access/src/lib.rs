//! Blockchain data-access layer for a Cosmos-SDK indexing node.
//!
//! Two client personalities are built over a pool of RPC endpoints:
//!
//! - [`HeadClient`], an unsafe client reading at the live chain head, used
//!   for block ingestion and message decoding;
//! - [`HistoricalClient`], a safe client pinned to a single block height at
//!   construction, used to re-execute smart-contract queries
//!   deterministically while reprocessing historical blocks.
//!
//! Endpoint lifecycle (failover, health polling, retry) belongs to the
//! external pool manager: it builds connections through
//! [`Connection::connect`], derives pinned clients with
//! [`Connection::historical`] and checks endpoint consistency with
//! [`connection::probe_chain_identity`]. This crate never retries; transport
//! failures are classified exactly once at the boundary
//! ([`error::classify_rpc_error`]) and re-raised with enough context for the
//! pool to decide.

#![forbid(unsafe_code)]

pub mod config;
pub mod connection;
pub mod error;
pub mod head;
pub mod historical;
pub mod proto;
pub mod query;
pub mod registry;
pub mod wasm;

pub use config::ChainConfig;
pub use connection::Connection;
pub use error::Error;
pub use head::HeadClient;
pub use historical::HistoricalClient;
pub use registry::{DecodedMessage, MessageRegistry};
