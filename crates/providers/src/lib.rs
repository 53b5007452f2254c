//! xlend Providers
//!
//! Live data sources backing the ranking layer. The default provider
//! reads borrow rates straight from vault contracts over JSON-RPC.

pub mod rpc;

pub use rpc::RpcRateProvider;
