//! Plan-and-encode walkthrough
//!
//! Builds a registry with two demo networks, ranks the vaults that serve
//! a WETH/USDC position, plans a cross-chain borrow and encodes it into
//! router calldata. Run with `cargo run --example plan_and_encode`.

use std::sync::Arc;

use xlend_sdk::alloy::primitives::{Address, B256, U256};
use xlend_sdk::mocks::MockRateProvider;
use xlend_sdk::{
	ChainEntry, ChainId, PermitSignature, Registry, RegistryBuilder, Sdk, TokenEntry, VaultEntry,
};

const CHAIN_HOME: ChainId = ChainId(3001);
const CHAIN_AWAY: ChainId = ChainId(3002);

fn demo_registry() -> Registry {
	RegistryBuilder::new()
		.chain(ChainEntry {
			chain_id: CHAIN_HOME,
			key: "home".to_string(),
			name: "Demo Home".to_string(),
			bridge_domain: Some(31),
			router: Some(Address::repeat_byte(0xA1)),
			rpc_url: None,
			native_symbol: "ETH".to_string(),
			is_testnet: true,
		})
		.chain(ChainEntry {
			chain_id: CHAIN_AWAY,
			key: "away".to_string(),
			name: "Demo Away".to_string(),
			bridge_domain: Some(32),
			router: Some(Address::repeat_byte(0xA2)),
			rpc_url: None,
			native_symbol: "ETH".to_string(),
			is_testnet: true,
		})
		.token(token(CHAIN_HOME, 0xB1, "WETH", 18))
		.token(token(CHAIN_HOME, 0xB2, "USDC", 6))
		.token(token(CHAIN_AWAY, 0xB3, "WETH", 18))
		.token(token(CHAIN_AWAY, 0xB4, "USDC", 6))
		.vault(VaultEntry {
			chain_id: CHAIN_HOME,
			address: Address::repeat_byte(0xC1),
			collateral: "WETH".to_string(),
			debt: "USDC".to_string(),
		})
		.vault(VaultEntry {
			chain_id: CHAIN_AWAY,
			address: Address::repeat_byte(0xC2),
			collateral: "WETH".to_string(),
			debt: "USDC".to_string(),
		})
		.build()
		.expect("demo catalog is valid")
}

fn token(chain_id: ChainId, byte: u8, symbol: &str, decimals: u8) -> TokenEntry {
	TokenEntry {
		chain_id,
		address: Address::repeat_byte(byte),
		symbol: symbol.to_string(),
		decimals,
		name: None,
	}
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(env_filter).init();

	println!("🏦 xlend Plan-and-Encode Demo");
	println!("=============================");

	let registry = demo_registry();
	let vaults: Vec<_> = registry.vaults().to_vec();

	// Rates come from a mock provider; swap in RpcRateProvider against a
	// registry with rpc_urls to query live vaults instead.
	let provider = MockRateProvider::new()
		.with_rate(&vaults[0], 920)
		.with_rate(&vaults[1], 870);

	let sdk = Sdk::builder()
		.with_registry(registry)
		.with_rate_provider(Arc::new(provider))
		.build();

	println!("\n1. Rank the vaults serving the position");
	let collateral = sdk
		.registry()
		.token(CHAIN_HOME, "WETH")
		.expect("demo token registered")
		.clone();
	let debt = sdk
		.registry()
		.token(CHAIN_AWAY, "USDC")
		.expect("demo token registered")
		.clone();

	let ranked = sdk.borrowing_vaults_for(&collateral, &debt).await?;
	for entry in &ranked {
		println!(
			"   📊 vault {} on chain {} rate {}",
			entry.vault.address(),
			entry.vault.chain_id(),
			entry.rate
		);
	}
	let best = ranked.first().expect("both demo vaults serve the pair");

	println!("\n2. Plan the borrow against the best vault");
	let owner = Address::repeat_byte(0xD1);
	let actions = sdk.preview_deposit_and_borrow(
		&best.vault,
		U256::from(2_000_000_000_000_000_000u128),
		&collateral,
		U256::from(1_500_000_000u64),
		&debt,
		owner,
		U256::from(1_700_000_000u64),
	)?;
	for action in &actions {
		println!("   ▶ {:?}", action.action());
	}

	println!("\n3. Check the signature requirement");
	if sdk.needs_signature(&actions)? {
		let permit = sdk.find_permit(&actions).expect("permit present");
		println!("   ✍️  permit approves router {}", permit.spender);
	}

	println!("\n4. Encode into router calldata");
	let signature = PermitSignature::new(27, B256::repeat_byte(0x11), B256::repeat_byte(0x22));
	let tx = sdk.transaction_request(&actions, collateral.chain_id(), owner, Some(&signature))?;
	println!("   📦 to {} on chain {}", tx.to, tx.chain_id);
	println!("   📦 {} bytes of calldata", tx.data.len());

	println!("\n✅ Demo completed!");
	Ok(())
}
