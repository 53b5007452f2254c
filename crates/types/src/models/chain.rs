//! Chain identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// EIP-155 chain identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

/// Well-known chains
impl ChainId {
	pub const ETHEREUM: ChainId = ChainId(1);
	pub const GOERLI: ChainId = ChainId(5);
	pub const OPTIMISM: ChainId = ChainId(10);
	pub const GNOSIS: ChainId = ChainId(100);
	pub const POLYGON: ChainId = ChainId(137);
	pub const FANTOM: ChainId = ChainId(250);
	pub const OPTIMISM_GOERLI: ChainId = ChainId(420);
	pub const ARBITRUM: ChainId = ChainId(42161);
	pub const MUMBAI: ChainId = ChainId(80001);
}

impl From<u64> for ChainId {
	fn from(id: u64) -> Self {
		ChainId(id)
	}
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
