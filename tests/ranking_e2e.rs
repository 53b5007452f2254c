//! Vault ranking end-to-end tests
//!
//! Runs the facade's vault discovery over the Goerli fixture registry
//! with mock rate providers standing in for the chain RPCs.

mod mocks;

use std::sync::Arc;
use std::time::Duration;

use mocks::entities;
use xlend_sdk::alloy::primitives::U256;
use xlend_sdk::mocks::MockRateProvider;
use xlend_sdk::{Currency, RankError, Sdk, SdkError};

fn sdk_with(provider: MockRateProvider) -> Sdk {
	Sdk::builder()
		.with_registry(entities::goerli_registry())
		.with_rate_provider(Arc::new(provider))
		.build()
}

fn cross_chain_pair() -> (Currency, Currency) {
	(
		Currency::Token(entities::goerli_weth()),
		Currency::Token(entities::opt_goerli_usdc()),
	)
}

#[tokio::test]
async fn test_vaults_come_back_cheapest_first() {
	let provider = MockRateProvider::new()
		.with_rate(&entities::goerli_vault(), 2)
		.with_rate(&entities::opt_goerli_vault(), 5);
	let sdk = sdk_with(provider.clone());

	let (collateral, debt) = cross_chain_pair();
	let ranked = sdk.borrowing_vaults_for(&collateral, &debt).await.unwrap();

	assert_eq!(ranked.len(), 2);
	assert_eq!(ranked[0].vault, entities::goerli_vault());
	assert_eq!(ranked[0].rate, U256::from(2));
	assert_eq!(ranked[1].vault, entities::opt_goerli_vault());
	assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn test_cheaper_remote_vault_wins_for_cross_chain_pairs() {
	let provider = MockRateProvider::new()
		.with_rate(&entities::goerli_vault(), 5)
		.with_rate(&entities::opt_goerli_vault(), 2);
	let sdk = sdk_with(provider);

	let (collateral, debt) = cross_chain_pair();
	let ranked = sdk.borrowing_vaults_for(&collateral, &debt).await.unwrap();

	assert_eq!(ranked[0].vault, entities::opt_goerli_vault());
}

#[tokio::test]
async fn test_unserved_pair_yields_no_vaults() {
	let sdk = sdk_with(MockRateProvider::new().with_default_rate(1));

	// No vault lends WETH against WETH collateral.
	let collateral = Currency::Token(entities::goerli_weth());
	let debt = Currency::Token(entities::opt_goerli_weth());
	let ranked = sdk.borrowing_vaults_for(&collateral, &debt).await.unwrap();

	assert!(ranked.is_empty());
}

#[tokio::test]
async fn test_one_failing_rate_query_fails_the_ranking() {
	let sdk = sdk_with(MockRateProvider::failing());

	let (collateral, debt) = cross_chain_pair();
	let err = sdk
		.borrowing_vaults_for(&collateral, &debt)
		.await
		.unwrap_err();

	assert!(matches!(
		err,
		SdkError::Rank(RankError::RateQuery { .. })
	));
}

#[tokio::test]
async fn test_stalled_rate_query_times_out() {
	let provider = MockRateProvider::new()
		.with_default_rate(1)
		.with_response_delay(Duration::from_secs(60));
	let sdk = Sdk::builder()
		.with_registry(entities::goerli_registry())
		.with_rate_provider(Arc::new(provider))
		.with_rate_timeout(Duration::from_millis(20))
		.build();

	let (collateral, debt) = cross_chain_pair();
	let err = sdk
		.borrowing_vaults_for(&collateral, &debt)
		.await
		.unwrap_err();

	assert!(matches!(
		err,
		SdkError::Rank(RankError::RateQueryTimeout { .. })
	));
}
