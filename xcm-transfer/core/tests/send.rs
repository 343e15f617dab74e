// Copyright (C) Parity Technologies (UK) Ltd.
// This file is part of Polkadot.

// Polkadot is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// Polkadot is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with Polkadot.  If not, see <http://www.gnu.org/licenses/>.

//! End to end transfers through `send` with a scripted client.

mod common;

use common::{registry, MockClient, ALICE, EVM_ADDRESS};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use xcm_transfer_core::{
	send, BridgeStatus, Currency, DryRunOutcome, Error, Result, Scenario, SerializedCall,
	TransferOptions,
};
use xcm_transfer_primitives::Chain;

const ONE_DOT: u128 = 10_000_000_000;

async fn run(client: &MockClient, options: &TransferOptions) -> Result<SerializedCall> {
	send(client, registry(), options).await
}

fn options(origin: Chain, destination: Chain, symbol: &str, amount: u128) -> TransferOptions {
	TransferOptions::new(origin, destination, Currency::symbol(symbol), amount, ALICE)
}

#[tokio::test]
async fn native_token_to_an_evm_sibling() {
	// given
	let options = TransferOptions::new(
		Chain::Astar,
		Chain::Moonbeam,
		Currency::symbol("ASTR"),
		1_000_000_000_000_000_000,
		EVM_ADDRESS,
	);

	// when
	let call = run(&MockClient::default(), &options).await.unwrap();

	// then
	assert_eq!(call.module, "XTokens");
	assert_eq!(call.method, "transfer_multiasset");
	assert_eq!(
		call.parameter("dest"),
		Some(&json!({ "V3": {
			"parents": 1,
			"interior": {
				"X2": [{ "Parachain": 2004 }, { "AccountKey20": { "key": EVM_ADDRESS } }]
			}
		} }))
	);
	assert_eq!(
		call.parameter("asset"),
		Some(&json!({ "V3": {
			"id": { "Concrete": { "parents": 1, "interior": { "X1": { "Parachain": 2006 } } } },
			"fun": { "Fungible": "1000000000000000000" }
		} }))
	);
	assert_eq!(call.parameter("dest_weight_limit"), Some(&json!("Unlimited")));
}

#[tokio::test]
async fn dot_crosses_the_hub_bridge() {
	let call = run(
		&MockClient::default(),
		&options(Chain::AssetHubPolkadot, Chain::AssetHubKusama, "DOT", ONE_DOT),
	)
	.await
	.unwrap();

	assert_eq!(call.method, "transfer_assets");
	assert_eq!(call.parameter("weight_limit"), Some(&json!("Unlimited")));
	assert_eq!(
		call.parameter("dest"),
		Some(&json!({ "V5": { "parents": 2, "interior": { "X2": [
			{ "GlobalConsensus": "Kusama" },
			{ "Parachain": 1000 }
		] } } }))
	);
}

#[tokio::test]
async fn relay_chain_delegates_to_the_destination() {
	let request = options(Chain::Polkadot, Chain::Hydration, "DOT", ONE_DOT);

	let call = run(&MockClient::default(), &request).await.unwrap();

	assert_eq!(call.module, "XcmPallet");
	assert_eq!(call.method, "limited_reserve_transfer_assets");
	assert_eq!(
		call.parameter("dest"),
		Some(&json!({ "V4": { "parents": 0, "interior": { "X1": [{ "Parachain": 2034 }] } } }))
	);
}

#[tokio::test]
async fn generic_token_pallet_is_preferred() {
	let request = options(Chain::Hydration, Chain::Acala, "DOT", ONE_DOT);

	let call = run(&MockClient::default(), &request).await.unwrap();

	assert_eq!(call.module, "XTokens");
	assert_eq!(call.method, "transfer");
	assert_eq!(call.parameter("currency_id"), Some(&json!(5)));
}

#[tokio::test]
async fn hub_dot_to_a_sibling_needs_the_relay() {
	let options = options(Chain::AssetHubPolkadot, Chain::Acala, "DOT", ONE_DOT);

	let result = run(&MockClient::default(), &options).await;

	assert!(
		matches!(
			result,
			Err(Error::ScenarioNotSupported {
				chain: Chain::AssetHubPolkadot,
				scenario: Scenario::ChainToChain,
				..
			})
		),
		"unexpected result {result:?}"
	);
}

#[tokio::test]
async fn chains_of_different_ecosystems_are_incompatible() {
	let options = options(Chain::Hydration, Chain::Karura, "DOT", ONE_DOT);

	let result = run(&MockClient::default(), &options).await;

	assert!(matches!(result, Err(Error::IncompatibleNodes(_))), "unexpected result {result:?}");
}

#[tokio::test]
async fn relay_to_relay_is_incompatible() {
	let result =
		run(&MockClient::default(), &options(Chain::Polkadot, Chain::Kusama, "DOT", ONE_DOT)).await;

	assert!(matches!(result, Err(Error::IncompatibleNodes(_))));
}

#[tokio::test]
async fn substrate_address_to_an_evm_chain() {
	let result =
		run(&MockClient::default(), &options(Chain::Hydration, Chain::Moonbeam, "GLMR", ONE_DOT))
			.await;

	assert!(matches!(result, Err(Error::InvalidAddress(_))));
}

#[tokio::test]
async fn same_request_same_call() {
	let client = MockClient::default();
	let request = options(Chain::Hydration, Chain::Acala, "USDT", 1_000_000);

	let first = run(&client, &request).await.unwrap();
	let second = run(&client, &request).await.unwrap();

	assert_eq!(first, second);
	assert!(client.queries().is_empty());
}

fn execute_request() -> TransferOptions {
	let mut request = options(Chain::AssetHubPolkadot, Chain::Hydration, "USDT", 10_000_000);
	request.fee_asset = Some(Currency::symbol("DOT"));
	request.sender_address = Some(ALICE.into());
	request
}

#[tokio::test]
async fn fee_asset_is_paid_through_execute() {
	// given
	let client = MockClient::default()
		.with_dry_run(DryRunOutcome::Success { fee: 1_000_000, destination_fee: Some(500_000) });

	// when
	let call = run(&client, &execute_request()).await.unwrap();

	// then
	assert_eq!(call.module, "PolkadotXcm");
	assert_eq!(call.method, "execute");
	assert!(call.parameter("message").is_some());
	assert!(call.parameter("max_weight").is_some());
	assert_eq!(client.queries(), vec!["dry_run:AssetHubPolkadot".to_string()]);
}

#[tokio::test]
async fn failed_dry_run_is_reported() {
	let client = MockClient::default()
		.with_dry_run(DryRunOutcome::Failure { reason: "FailedToTransactAsset".into() });

	let result = run(&client, &execute_request()).await;

	assert!(matches!(
		result,
		Err(Error::DryRunFailed(reason)) if reason == "FailedToTransactAsset"
	));
}

#[tokio::test]
async fn fee_asset_needs_a_capable_origin() {
	let mut request = options(Chain::Acala, Chain::Hydration, "DOT", ONE_DOT);
	request.fee_asset = Some(Currency::symbol("ACA"));

	let result = run(&MockClient::default(), &request).await;

	assert!(matches!(result, Err(Error::InvalidParameter(_))));
}

#[tokio::test]
async fn halted_bridge_stops_ethereum_transfers() {
	// given
	let client = MockClient::default().with_bridge_status(BridgeStatus::Halted);
	let request = TransferOptions::new(
		Chain::AssetHubPolkadot,
		Chain::Ethereum,
		Currency::symbol("WETH"),
		1_000_000_000_000_000_000,
		EVM_ADDRESS,
	);

	// then
	assert!(matches!(run(&client, &request).await, Err(Error::BridgeHalted)));
	assert_eq!(client.queries(), vec!["bridge_status".to_string()]);
}

#[tokio::test]
async fn hub_sends_ethereum_assets_home() {
	let request = TransferOptions::new(
		Chain::AssetHubPolkadot,
		Chain::Ethereum,
		Currency::symbol("WETH"),
		1_000_000_000_000_000_000,
		EVM_ADDRESS,
	);

	let call = run(&MockClient::default(), &request).await.unwrap();

	assert_eq!(call.method, "transfer_assets");
	assert_eq!(
		call.parameter("dest"),
		Some(&json!({ "V5": { "parents": 2, "interior": { "X1": [
			{ "GlobalConsensus": { "Ethereum": { "chain_id": 1 } } }
		] } } }))
	);
}

#[tokio::test]
async fn parachain_waits_for_bridge_fees() {
	// given
	let client = MockClient::default().with_bridge_fee(2_000_000_000);
	let mut request = TransferOptions::new(
		Chain::Hydration,
		Chain::Ethereum,
		Currency::symbol("WETH"),
		1_000_000_000_000_000_000,
		EVM_ADDRESS,
	);
	request.sender_address = Some(ALICE.into());

	// when
	let call = run(&client, &request).await.unwrap();

	// then
	assert_eq!(call.method, "transfer_assets_using_type_and_then");
	let assets = serde_json::to_string(call.parameter("assets").unwrap()).unwrap();
	assert!(assets.contains("\"2000000000\""), "bridge fee missing from {assets}");
	assert_eq!(
		client.queries(),
		vec!["bridge_status".to_string(), "bridge_fees:AssetHubPolkadot".to_string()]
	);
}

fn keep_alive_request(amount: u128) -> TransferOptions {
	let mut request = options(Chain::Hydration, Chain::Polkadot, "DOT", amount);
	request.sender_address = Some(ALICE.into());
	request.keep_alive = true;
	request
}

#[tokio::test]
async fn keep_alive_passes_with_enough_funds() {
	let client = MockClient::default()
		.with_fee(1_000_000)
		.with_balance(Chain::Hydration, 20 * ONE_DOT);

	assert!(run(&client, &keep_alive_request(10 * ONE_DOT)).await.is_ok());
}

#[rstest]
#[case::below_the_destination_deposit(ONE_DOT / 2, 20 * ONE_DOT)]
#[case::sender_reaped(10 * ONE_DOT, 10 * ONE_DOT)]
#[tokio::test]
async fn keep_alive_refuses(#[case] amount: u128, #[case] origin_balance: u128) {
	let client =
		MockClient::default().with_fee(1_000_000).with_balance(Chain::Hydration, origin_balance);

	let result = run(&client, &keep_alive_request(amount)).await;

	assert!(matches!(result, Err(Error::KeepAlive(_))), "unexpected result {result:?}");
}

#[tokio::test]
async fn keep_alive_charges_the_fee_of_sending_back() {
	// given a cheap send from Hydration and an expensive one back from Polkadot
	let client = MockClient::default()
		.with_chain_fee(Chain::Hydration, 1_000_000)
		.with_chain_fee(Chain::Polkadot, 3 * ONE_DOT / 2)
		.with_balance(Chain::Hydration, 20 * ONE_DOT);

	// when
	let result = run(&client, &keep_alive_request(2 * ONE_DOT)).await;

	// then
	assert!(matches!(result, Err(Error::KeepAlive(_))), "unexpected result {result:?}");
	assert!(client.queries().contains(&"fee:Polkadot:XcmPallet".to_string()));
	assert!(!client.queries().iter().any(|query| query.starts_with("fee:Hydration")));

	let cheap_return = MockClient::default()
		.with_chain_fee(Chain::Hydration, 3 * ONE_DOT / 2)
		.with_chain_fee(Chain::Polkadot, 1_000_000)
		.with_balance(Chain::Hydration, 20 * ONE_DOT);
	assert!(run(&cheap_return, &keep_alive_request(2 * ONE_DOT)).await.is_ok());
}

#[tokio::test]
async fn keep_alive_needs_a_sender() {
	let mut request = keep_alive_request(10 * ONE_DOT);
	request.sender_address = None;

	let result = run(&MockClient::default().with_fee(1_000_000), &request).await;

	assert!(matches!(result, Err(Error::KeepAlive(_))));
}
