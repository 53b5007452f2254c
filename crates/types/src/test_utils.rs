//! Test utilities for creating common test objects
//!
//! Helpers for building the currencies and vaults that unit tests across
//! the workspace share. Addresses are synthetic repeating-byte patterns so
//! failures read clearly in assertions.

use alloy::primitives::Address;

use crate::models::{ChainId, Currency, NativeCurrency, Token, Vault};

/// Synthetic address with every byte set to `byte`.
pub fn address(byte: u8) -> Address {
	Address::repeat_byte(byte)
}

/// WETH-shaped token on `chain_id`, at address `0xaaaa..aa`.
pub fn weth(chain_id: ChainId) -> Currency {
	token(chain_id, 0xAA, "WETH", 18)
}

/// USDC-shaped token on `chain_id`, at address `0xbbbb..bb`.
pub fn usdc(chain_id: ChainId) -> Currency {
	token(chain_id, 0xBB, "USDC", 6)
}

/// DAI-shaped token on `chain_id`, at address `0xcccc..cc`.
pub fn dai(chain_id: ChainId) -> Currency {
	token(chain_id, 0xCC, "DAI", 18)
}

/// Native currency of `chain_id` under the given symbol.
pub fn native(chain_id: ChainId, symbol: &str) -> Currency {
	Currency::Native(NativeCurrency::new(chain_id, 18, symbol))
}

/// Token on `chain_id` at a repeating-byte address.
pub fn token(chain_id: ChainId, byte: u8, symbol: &str, decimals: u8) -> Currency {
	Currency::Token(Token::new(chain_id, address(byte), decimals, symbol))
}

/// WETH-collateral, USDC-debt vault at a repeating-byte address.
pub fn weth_usdc_vault(byte: u8, chain_id: ChainId) -> Vault {
	Vault::new(address(byte), weth(chain_id), usdc(chain_id))
		.expect("same-chain currencies")
}
