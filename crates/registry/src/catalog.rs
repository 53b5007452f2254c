//! Catalog document shapes
//!
//! A registry is loaded from a flat catalog listing chains, tokens and
//! vaults. Tokens are referenced from vault entries by symbol, scoped to
//! the vault's chain. [`CatalogDoc::bundled`] ships the known mainnet
//! deployments.

use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};
use xlend_types::ChainId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDoc {
	pub chains: Vec<ChainEntry>,
	pub tokens: Vec<TokenEntry>,
	pub vaults: Vec<VaultEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainEntry {
	pub chain_id: ChainId,
	/// Short lowercase key, e.g. "optimism".
	pub key: String,
	pub name: String,
	/// Bridge domain id. Absent on chains the bridge does not serve.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub bridge_domain: Option<u64>,
	/// Router deployment on this chain, if one exists.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub router: Option<Address>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub rpc_url: Option<String>,
	#[serde(default = "default_native_symbol")]
	pub native_symbol: String,
	#[serde(default)]
	pub is_testnet: bool,
}

fn default_native_symbol() -> String {
	"ETH".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenEntry {
	pub chain_id: ChainId,
	pub address: Address,
	pub symbol: String,
	pub decimals: u8,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultEntry {
	pub chain_id: ChainId,
	pub address: Address,
	/// Collateral token symbol, resolved against `tokens` on the same chain.
	pub collateral: String,
	/// Debt token symbol, resolved against `tokens` on the same chain.
	pub debt: String,
}

impl CatalogDoc {
	/// Catalog of known mainnet deployments.
	///
	/// Router addresses are deployment-specific and not part of the bundled
	/// data; register them through [`crate::RegistryBuilder`] or a custom
	/// catalog when building transactions.
	pub fn bundled() -> Self {
		Self {
			chains: vec![
				chain(
					ChainId::ETHEREUM,
					"ethereum",
					"Ethereum",
					"ETH",
					Some(6648936),
					"https://eth.llamarpc.com",
				),
				chain(
					ChainId::OPTIMISM,
					"optimism",
					"Optimism",
					"ETH",
					Some(1869640809),
					"https://mainnet.optimism.io",
				),
				chain(
					ChainId::ARBITRUM,
					"arbitrum",
					"Arbitrum One",
					"ETH",
					Some(1634886255),
					"https://arb1.arbitrum.io/rpc",
				),
				chain(
					ChainId::POLYGON,
					"polygon",
					"Polygon",
					"MATIC",
					Some(1886350457),
					"https://polygon-rpc.com",
				),
				chain(
					ChainId::GNOSIS,
					"gnosis",
					"Gnosis Chain",
					"XDAI",
					Some(6778479),
					"https://rpc.gnosischain.com",
				),
				// No bridge domain: Fantom vaults are reachable only as a
				// same-chain market.
				chain(
					ChainId::FANTOM,
					"fantom",
					"Fantom Opera",
					"FTM",
					None,
					"https://rpc.ftm.tools",
				),
			],
			tokens: vec![
				// Ethereum
				token(
					ChainId::ETHEREUM,
					address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
					"WETH",
					18,
					"Wrapped Ether",
				),
				token(
					ChainId::ETHEREUM,
					address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
					"USDC",
					6,
					"USD Coin",
				),
				token(
					ChainId::ETHEREUM,
					address!("0x6B175474E89094C44Da98b954EedeAC495271d0F"),
					"DAI",
					18,
					"Dai Stablecoin",
				),
				token(
					ChainId::ETHEREUM,
					address!("0xdAC17F958D2ee523a2206206994597C13D831ec7"),
					"USDT",
					6,
					"Tether USD",
				),
				// Optimism
				token(
					ChainId::OPTIMISM,
					address!("0x4200000000000000000000000000000000000006"),
					"WETH",
					18,
					"Wrapped Ether",
				),
				token(
					ChainId::OPTIMISM,
					address!("0x7F5c764cBc14f9669B88837ca1490cCa17c31607"),
					"USDC",
					6,
					"USD Coin",
				),
				token(
					ChainId::OPTIMISM,
					address!("0xDA10009cBd5D07dd0CeCc66161FC93D7c9000da1"),
					"DAI",
					18,
					"Dai Stablecoin",
				),
				token(
					ChainId::OPTIMISM,
					address!("0x94b008aA00579c1307B0EF2c499aD98a8ce58e58"),
					"USDT",
					6,
					"Tether USD",
				),
				// Arbitrum
				token(
					ChainId::ARBITRUM,
					address!("0x82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
					"WETH",
					18,
					"Wrapped Ether",
				),
				token(
					ChainId::ARBITRUM,
					address!("0xFF970A61A04b1cA14834A43f5dE4533eBDDB5CC8"),
					"USDC",
					6,
					"USD Coin",
				),
				token(
					ChainId::ARBITRUM,
					address!("0xDA10009cBd5D07dd0CeCc66161FC93D7c9000da1"),
					"DAI",
					18,
					"Dai Stablecoin",
				),
				token(
					ChainId::ARBITRUM,
					address!("0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9"),
					"USDT",
					6,
					"Tether USD",
				),
				// Polygon
				token(
					ChainId::POLYGON,
					address!("0x7ceB23fD6bC0adD59E62ac25578270cFf1b9f619"),
					"WETH",
					18,
					"Wrapped Ether",
				),
				token(
					ChainId::POLYGON,
					address!("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"),
					"WMATIC",
					18,
					"Wrapped Matic",
				),
				token(
					ChainId::POLYGON,
					address!("0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174"),
					"USDC",
					6,
					"USD Coin",
				),
				token(
					ChainId::POLYGON,
					address!("0x8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063"),
					"DAI",
					18,
					"Dai Stablecoin",
				),
				token(
					ChainId::POLYGON,
					address!("0xc2132D05D31c914a87C6611C10748AEb04B58e8F"),
					"USDT",
					6,
					"Tether USD",
				),
				// Gnosis
				token(
					ChainId::GNOSIS,
					address!("0x6A023CCd1ff6F2045C3309768eAd9E68F978f6e1"),
					"WETH",
					18,
					"Wrapped Ether",
				),
				token(
					ChainId::GNOSIS,
					address!("0xe91D153E0b41518A2Ce8Dd3D7944Fa863463a97d"),
					"WXDAI",
					18,
					"Wrapped XDAI",
				),
				token(
					ChainId::GNOSIS,
					address!("0xDDAfbb505ad214D7b80b1f830fcCc89B60fb7A83"),
					"USDC",
					6,
					"USD Coin",
				),
				token(
					ChainId::GNOSIS,
					address!("0x4ECaBa5870353805a9F068101A40E0f32ed605C6"),
					"USDT",
					6,
					"Tether USD",
				),
				// Fantom
				token(
					ChainId::FANTOM,
					address!("0x21be370D5312f44cB42ce377BC9b8a0cEF1A4C83"),
					"WFTM",
					18,
					"Wrapped Fantom",
				),
				token(
					ChainId::FANTOM,
					address!("0x74b23882a30290451A17c44f4F05243b6b58C76d"),
					"WETH",
					18,
					"Wrapped Ether",
				),
				token(
					ChainId::FANTOM,
					address!("0x04068DA6C83AFCFA0e13ba15A6696662335D5B75"),
					"USDC",
					6,
					"USD Coin",
				),
				token(
					ChainId::FANTOM,
					address!("0x8D11eC38a3EB5E956B052f67Da8Bdc9bef8Abf3E"),
					"DAI",
					18,
					"Dai Stablecoin",
				),
				token(
					ChainId::FANTOM,
					address!("0x049d68029688eAbF473097a2fC38ef61633A3C7A"),
					"USDT",
					6,
					"Tether USD",
				),
			],
			vaults: vec![
				vault(
					ChainId::OPTIMISM,
					address!("0xDa917380247b48382674Bd159d75D75314Cb21fB"),
					"WETH",
					"USDC",
				),
				vault(
					ChainId::OPTIMISM,
					address!("0x7C9631346D39a3b10519711F7507ebd5D7D850E0"),
					"WETH",
					"DAI",
				),
				vault(
					ChainId::ARBITRUM,
					address!("0xCc790B043A60a0F1cfB2b638C74ea0E4a28FD745"),
					"WETH",
					"USDC",
				),
				vault(
					ChainId::POLYGON,
					address!("0x2D932f0adEC52d3213DA5e129dafdD428068DD73"),
					"WETH",
					"USDC",
				),
				vault(
					ChainId::POLYGON,
					address!("0x9fafDa0f9400856b89f6777629C0c765331B1877"),
					"WETH",
					"DAI",
				),
				vault(
					ChainId::GNOSIS,
					address!("0x4AeF47117628EbC3ae78A9EdBE558794f1500de6"),
					"WETH",
					"USDC",
				),
			],
		}
	}
}

fn chain(
	chain_id: ChainId,
	key: &str,
	name: &str,
	native_symbol: &str,
	bridge_domain: Option<u64>,
	rpc_url: &str,
) -> ChainEntry {
	ChainEntry {
		chain_id,
		key: key.to_string(),
		name: name.to_string(),
		bridge_domain,
		router: None,
		rpc_url: Some(rpc_url.to_string()),
		native_symbol: native_symbol.to_string(),
		is_testnet: false,
	}
}

fn token(chain_id: ChainId, address: Address, symbol: &str, decimals: u8, name: &str) -> TokenEntry {
	TokenEntry {
		chain_id,
		address,
		symbol: symbol.to_string(),
		decimals,
		name: Some(name.to_string()),
	}
}

fn vault(chain_id: ChainId, address: Address, collateral: &str, debt: &str) -> VaultEntry {
	VaultEntry {
		chain_id,
		address,
		collateral: collateral.to_string(),
		debt: debt.to_string(),
	}
}
