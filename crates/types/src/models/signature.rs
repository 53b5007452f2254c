//! Permit signature components

use alloy::primitives::B256;
use serde::{Deserialize, Serialize};

/// Secp256k1 signature split into the components the router ABI consumes.
///
/// `v` carries the Ethereum-style recovery id, 27 or 28.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitSignature {
	pub v: u8,
	pub r: B256,
	pub s: B256,
}

impl PermitSignature {
	pub fn new(v: u8, r: B256, s: B256) -> Self {
		Self { v, r, s }
	}

	/// Build from a raw y-parity bit, normalizing to the 27/28 convention.
	pub fn from_parity(parity: bool, r: B256, s: B256) -> Self {
		Self {
			v: 27 + parity as u8,
			r,
			s,
		}
	}
}
