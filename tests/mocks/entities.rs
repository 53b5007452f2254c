//! Domain entity fixtures for testing
//!
//! Mirrors the Goerli rollout the router calldata vectors were recorded
//! against: real router deployments, the recorded signer wallet and its
//! permit signatures.

use xlend_sdk::alloy::primitives::{address, Address, B256, U256};
use xlend_sdk::{
	ChainEntry, ChainId, Currency, PermitSignature, Registry, RegistryBuilder, Token, TokenEntry,
	Vault, VaultEntry,
};

#[allow(dead_code)]
pub const GOERLI_ROUTER: Address = address!("0x58ec012028925e0a9eb8136e1037a1be683558b6");
#[allow(dead_code)]
pub const OPT_GOERLI_ROUTER: Address = address!("0xda1a42056bcbdd35b8e1c4f55773f0f11c171634");

#[allow(dead_code)]
pub const GOERLI_DOMAIN: u64 = 1735353714;
#[allow(dead_code)]
pub const OPT_GOERLI_DOMAIN: u64 = 1735356532;

/// Wallet the fixture signatures were produced with.
#[allow(dead_code)]
pub fn owner() -> Address {
	address!("0x7f45cd7792c32bacf461d02d110d9025655fb6b7")
}

/// Registry over the two Goerli networks, routers included.
#[allow(dead_code)]
pub fn goerli_registry() -> Registry {
	RegistryBuilder::new()
		.chain(ChainEntry {
			chain_id: ChainId::GOERLI,
			key: "goerli".to_string(),
			name: "Goerli".to_string(),
			bridge_domain: Some(GOERLI_DOMAIN),
			router: Some(GOERLI_ROUTER),
			rpc_url: None,
			native_symbol: "ETH".to_string(),
			is_testnet: true,
		})
		.chain(ChainEntry {
			chain_id: ChainId::OPTIMISM_GOERLI,
			key: "optimism-goerli".to_string(),
			name: "Optimism Goerli".to_string(),
			bridge_domain: Some(OPT_GOERLI_DOMAIN),
			router: Some(OPT_GOERLI_ROUTER),
			rpc_url: None,
			native_symbol: "ETH".to_string(),
			is_testnet: true,
		})
		.token(token_entry(goerli_weth()))
		.token(token_entry(goerli_usdc()))
		.token(token_entry(opt_goerli_weth()))
		.token(token_entry(opt_goerli_usdc()))
		.vault(VaultEntry {
			chain_id: ChainId::GOERLI,
			address: goerli_vault().address(),
			collateral: "WETH".to_string(),
			debt: "USDC".to_string(),
		})
		.vault(VaultEntry {
			chain_id: ChainId::OPTIMISM_GOERLI,
			address: opt_goerli_vault().address(),
			collateral: "WETH".to_string(),
			debt: "USDC".to_string(),
		})
		.build()
		.expect("goerli fixture catalog is valid")
}

#[allow(dead_code)]
pub fn goerli_weth() -> Token {
	Token::new(
		ChainId::GOERLI,
		address!("0x7ea6ea49b0b0ae9c5db7907d139d9cd3439862a1"),
		18,
		"WETH",
	)
}

#[allow(dead_code)]
pub fn goerli_usdc() -> Token {
	Token::new(
		ChainId::GOERLI,
		address!("0x5ffbac75efc9547fbc822166fed19b05cd5890bb"),
		6,
		"USDC",
	)
}

// The optimism-goerli token addresses never reach calldata, so synthetic
// ones keep the fixture short.
#[allow(dead_code)]
pub fn opt_goerli_weth() -> Token {
	Token::new(
		ChainId::OPTIMISM_GOERLI,
		Address::repeat_byte(0xE1),
		18,
		"WETH",
	)
}

#[allow(dead_code)]
pub fn opt_goerli_usdc() -> Token {
	Token::new(
		ChainId::OPTIMISM_GOERLI,
		Address::repeat_byte(0xE2),
		6,
		"USDC",
	)
}

/// WETH/USDC market on Goerli.
#[allow(dead_code)]
pub fn goerli_vault() -> Vault {
	Vault::new(
		address!("0xff4606aa93e576e61b473f4b11d3e32bb9ec63bb"),
		Currency::Token(goerli_weth()),
		Currency::Token(goerli_usdc()),
	)
	.expect("same-chain currencies")
}

/// WETH/USDC market on Optimism Goerli.
#[allow(dead_code)]
pub fn opt_goerli_vault() -> Vault {
	Vault::new(
		address!("0x62fd5c9a82991cdc522e4e748a9188e7b3dc7872"),
		Currency::Token(opt_goerli_weth()),
		Currency::Token(opt_goerli_usdc()),
	)
	.expect("same-chain currencies")
}

/// 1.0 with 18 decimals.
#[allow(dead_code)]
pub fn one_unit() -> U256 {
	U256::from(10).pow(U256::from(18))
}

#[allow(dead_code)]
pub fn deadline() -> U256 {
	U256::from(123456789u64)
}

/// Signature the fixture wallet produced for the Goerli vault permit.
#[allow(dead_code)]
pub fn goerli_permit_signature() -> PermitSignature {
	PermitSignature::new(
		27,
		b256("5091206e89486e62a1eed71d6e78ac4893312a810e4d0121c3d31ea066fb867a"),
		b256("5a3805980914e66378393b2341fe69566016af580563fafaada9ed70f5bbfd0b"),
	)
}

/// Signature the fixture wallet produced for the Optimism Goerli vault permit.
#[allow(dead_code)]
pub fn opt_goerli_permit_signature() -> PermitSignature {
	PermitSignature::new(
		28,
		b256("fc63ce47f4816ade4fbf0392946c36caae7644ef8f6e78a0b468f96cfc622381"),
		b256("0fa0ec450a8632734615602520d9d8d39e595f27645dbec4aab71ae0f1906680"),
	)
}

fn token_entry(token: Token) -> TokenEntry {
	TokenEntry {
		chain_id: token.chain_id,
		address: token.address,
		symbol: token.symbol.clone(),
		decimals: token.decimals,
		name: token.name.clone(),
	}
}

fn b256(hex: &str) -> B256 {
	hex.parse().expect("valid 32-byte hex")
}
