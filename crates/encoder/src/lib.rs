//! xlend Encoder
//!
//! Serializes a planned action bundle into the exact calldata the on-chain
//! router executes. The byte layout is a fixed contract ABI; identical
//! inputs always produce identical bytes.

pub mod abi;
pub mod errors;

pub use abi::{encode_bundle, ROUTER_ENTRY_SELECTOR};
pub use errors::EncodeError;
