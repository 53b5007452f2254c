//! Registry construction and lookups

use std::collections::BTreeMap;
use std::path::Path;

use alloy::primitives::Address;
use tracing::debug;
use xlend_types::{ChainId, Currency, NativeCurrency, Token, Vault};

use crate::catalog::{CatalogDoc, ChainEntry, TokenEntry, VaultEntry};
use crate::errors::RegistryError;

/// Chain-level metadata resolved from a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainMeta {
	pub chain_id: ChainId,
	pub key: String,
	pub name: String,
	pub bridge_domain: Option<u64>,
	pub router: Option<Address>,
	pub rpc_url: Option<String>,
	pub native_symbol: String,
	pub is_testnet: bool,
}

impl From<ChainEntry> for ChainMeta {
	fn from(entry: ChainEntry) -> Self {
		Self {
			chain_id: entry.chain_id,
			key: entry.key,
			name: entry.name,
			bridge_domain: entry.bridge_domain,
			router: entry.router,
			rpc_url: entry.rpc_url,
			native_symbol: entry.native_symbol,
			is_testnet: entry.is_testnet,
		}
	}
}

/// Validated, immutable lookup tables over a catalog.
///
/// Construction checks referential integrity (vault tokens must exist on
/// the vault's chain, chains must be unique); after that all queries are
/// infallible lookups.
#[derive(Debug, Clone)]
pub struct Registry {
	chains: BTreeMap<ChainId, ChainMeta>,
	tokens: BTreeMap<(ChainId, String), Currency>,
	vaults: Vec<Vault>,
}

impl Registry {
	/// Registry over the catalog shipped with this crate.
	pub fn bundled() -> Self {
		Self::from_catalog(CatalogDoc::bundled()).expect("bundled catalog is valid")
	}

	/// Build from a catalog document, validating cross-references.
	pub fn from_catalog(doc: CatalogDoc) -> Result<Self, RegistryError> {
		let mut chains = BTreeMap::new();
		for entry in doc.chains {
			let chain_id = entry.chain_id;
			if chains.insert(chain_id, ChainMeta::from(entry)).is_some() {
				return Err(RegistryError::InvalidCatalog {
					reason: format!("duplicate chain {chain_id}"),
				});
			}
		}

		let mut tokens = BTreeMap::new();
		for entry in &doc.tokens {
			if !chains.contains_key(&entry.chain_id) {
				return Err(RegistryError::InvalidCatalog {
					reason: format!(
						"token {} references unknown chain {}",
						entry.symbol, entry.chain_id
					),
				});
			}
			let key = (entry.chain_id, entry.symbol.clone());
			if tokens.insert(key, token_currency(entry)).is_some() {
				return Err(RegistryError::InvalidCatalog {
					reason: format!(
						"duplicate token {} on chain {}",
						entry.symbol, entry.chain_id
					),
				});
			}
		}

		let mut vaults = Vec::with_capacity(doc.vaults.len());
		for entry in &doc.vaults {
			let collateral = resolve_token(&tokens, entry, &entry.collateral)?;
			let debt = resolve_token(&tokens, entry, &entry.debt)?;
			vaults.push(Vault::new(entry.address, collateral, debt)?);
		}

		debug!(
			chains = chains.len(),
			tokens = tokens.len(),
			vaults = vaults.len(),
			"registry loaded"
		);

		Ok(Self {
			chains,
			tokens,
			vaults,
		})
	}

	/// Parse a catalog from a JSON string.
	pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
		Self::from_catalog(serde_json::from_str(json)?)
	}

	/// Load a catalog from a JSON file.
	pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
		let raw = std::fs::read_to_string(path)?;
		Self::from_json_str(&raw)
	}

	pub fn chain(&self, chain_id: ChainId) -> Result<&ChainMeta, RegistryError> {
		self.chains
			.get(&chain_id)
			.ok_or(RegistryError::UnknownChain { chain_id })
	}

	pub fn chains(&self) -> impl Iterator<Item = &ChainMeta> {
		self.chains.values()
	}

	/// Token registered on `chain_id` under `symbol`, if any.
	pub fn token(&self, chain_id: ChainId, symbol: &str) -> Option<&Currency> {
		self.tokens.get(&(chain_id, symbol.to_string()))
	}

	pub fn tokens_on(&self, chain_id: ChainId) -> impl Iterator<Item = &Currency> {
		self.tokens
			.iter()
			.filter(move |((chain, _), _)| *chain == chain_id)
			.map(|(_, currency)| currency)
	}

	/// Native currency of `chain_id`, 18 decimals by convention.
	pub fn native(&self, chain_id: ChainId) -> Result<Currency, RegistryError> {
		let meta = self.chain(chain_id)?;
		Ok(Currency::Native(NativeCurrency::new(
			chain_id,
			18,
			meta.native_symbol.clone(),
		)))
	}

	pub fn vaults(&self) -> &[Vault] {
		&self.vaults
	}

	pub fn vaults_on(&self, chain_id: ChainId) -> impl Iterator<Item = &Vault> {
		self.vaults.iter().filter(move |v| v.chain_id() == chain_id)
	}

	/// Vaults whose market matches the given collateral/debt pair.
	///
	/// Matching is by token symbol, and a vault qualifies only when it
	/// lives on the collateral's or the debt's chain. The result may be
	/// empty; that is not an error.
	pub fn vaults_for_pair(&self, collateral: &Currency, debt: &Currency) -> Vec<Vault> {
		self.vaults
			.iter()
			.filter(|v| {
				let chain = v.chain_id();
				(chain == collateral.chain_id() || chain == debt.chain_id())
					&& v.collateral().symbol() == collateral.symbol()
					&& v.debt().symbol() == debt.symbol()
			})
			.cloned()
			.collect()
	}
}

fn token_currency(entry: &TokenEntry) -> Currency {
	let token = Token::new(entry.chain_id, entry.address, entry.decimals, &entry.symbol);
	match &entry.name {
		Some(name) => Currency::Token(token.with_name(name)),
		None => Currency::Token(token),
	}
}

fn resolve_token(
	tokens: &BTreeMap<(ChainId, String), Currency>,
	vault: &VaultEntry,
	symbol: &str,
) -> Result<Currency, RegistryError> {
	tokens
		.get(&(vault.chain_id, symbol.to_string()))
		.cloned()
		.ok_or_else(|| RegistryError::InvalidCatalog {
			reason: format!(
				"vault {} references unknown token {} on chain {}",
				vault.address, symbol, vault.chain_id
			),
		})
}

/// Incremental construction of small registries, mainly for tests and
/// custom deployments.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
	doc: CatalogDoc,
}

impl RegistryBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn chain(mut self, entry: ChainEntry) -> Self {
		self.doc.chains.push(entry);
		self
	}

	pub fn token(mut self, entry: TokenEntry) -> Self {
		self.doc.tokens.push(entry);
		self
	}

	pub fn vault(mut self, entry: VaultEntry) -> Self {
		self.doc.vaults.push(entry);
		self
	}

	pub fn build(self) -> Result<Registry, RegistryError> {
		Registry::from_catalog(self.doc)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(chain_id: ChainId, key: &str) -> ChainEntry {
		ChainEntry {
			chain_id,
			key: key.to_string(),
			name: key.to_string(),
			bridge_domain: None,
			router: None,
			rpc_url: None,
			native_symbol: "ETH".to_string(),
			is_testnet: true,
		}
	}

	fn token_entry(chain_id: ChainId, symbol: &str, byte: u8) -> TokenEntry {
		TokenEntry {
			chain_id,
			address: Address::repeat_byte(byte),
			symbol: symbol.to_string(),
			decimals: 18,
			name: None,
		}
	}

	#[test]
	fn test_bundled_catalog_loads() {
		let registry = Registry::bundled();
		assert!(registry.chain(ChainId::OPTIMISM).is_ok());
		assert!(registry.vaults_on(ChainId::OPTIMISM).count() >= 1);
		assert!(registry.token(ChainId::ETHEREUM, "WETH").is_some());
	}

	#[test]
	fn test_unknown_chain_is_an_error() {
		let registry = Registry::bundled();
		let err = registry.chain(ChainId(999_999)).unwrap_err();
		assert!(matches!(err, RegistryError::UnknownChain { .. }));
	}

	#[test]
	fn test_pair_lookup_matches_by_symbol_on_either_chain() {
		let registry = Registry::bundled();
		let weth_eth = registry.token(ChainId::ETHEREUM, "WETH").unwrap().clone();
		let usdc_opt = registry.token(ChainId::OPTIMISM, "USDC").unwrap().clone();

		// Optimism hosts a WETH/USDC vault; Ethereum does not.
		let vaults = registry.vaults_for_pair(&weth_eth, &usdc_opt);
		assert!(!vaults.is_empty());
		assert!(vaults.iter().all(|v| v.chain_id() == ChainId::OPTIMISM));
	}

	#[test]
	fn test_pair_lookup_can_be_empty() {
		let registry = Registry::bundled();
		let usdt = registry.token(ChainId::ETHEREUM, "USDT").unwrap().clone();
		let dai = registry.token(ChainId::ETHEREUM, "DAI").unwrap().clone();
		assert!(registry.vaults_for_pair(&usdt, &dai).is_empty());
	}

	#[test]
	fn test_duplicate_chain_is_rejected() {
		let err = RegistryBuilder::new()
			.chain(entry(ChainId(31337), "local"))
			.chain(entry(ChainId(31337), "local-again"))
			.build()
			.unwrap_err();
		assert!(matches!(err, RegistryError::InvalidCatalog { .. }));
	}

	#[test]
	fn test_vault_with_unregistered_token_is_rejected() {
		let err = RegistryBuilder::new()
			.chain(entry(ChainId(31337), "local"))
			.token(token_entry(ChainId(31337), "WETH", 0xAA))
			.vault(VaultEntry {
				chain_id: ChainId(31337),
				address: Address::repeat_byte(0x01),
				collateral: "WETH".to_string(),
				debt: "USDC".to_string(),
			})
			.build()
			.unwrap_err();
		assert!(matches!(err, RegistryError::InvalidCatalog { .. }));
	}

	#[test]
	fn test_from_json_str_round_trips_bundled() {
		let json = serde_json::to_string(&CatalogDoc::bundled()).unwrap();
		let registry = Registry::from_json_str(&json).unwrap();
		assert_eq!(registry.vaults().len(), Registry::bundled().vaults().len());
	}

	#[test]
	fn test_native_currency_uses_chain_symbol() {
		let registry = Registry::bundled();
		let native = registry.native(ChainId::POLYGON).unwrap();
		assert_eq!(native.symbol(), "MATIC");
		assert!(native.is_native());
	}
}
