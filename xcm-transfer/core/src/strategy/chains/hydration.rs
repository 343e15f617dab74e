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

//! Hydration and Basilisk.
//!
//! Everything numeric goes through `XTokens`. `PolkadotXcm` is reserved for the routes the
//! generic pallet cannot express: DOT back to AssetHub, Snowbridge assets and transfers paying
//! with a separate fee asset.

use crate::{
	call::{numeric_id, SerializedCall},
	error::Result,
	ethereum,
	execute,
	local::is_native_asset,
	pallets::{polkadot_xcm, xtokens},
	strategy::{defaults, ChainStrategy, Context, CrossConsensusInput, Prepared, TransferInput},
	type_and_then,
};
use serde_json::Value;
use xcm_transfer_primitives::{
	create_versioned_multi_assets, Chain, MultiAsset, Version, Versioned,
};

const NATIVE_CURRENCY_ID: u64 = 0;

pub fn strategies() -> Vec<ChainStrategy> {
	let basilisk = ChainStrategy::new(Chain::Basilisk, Version::V3).generic_token(transfer);
	let hydration = ChainStrategy::new(Chain::Hydration, Version::V4)
		.generic_token(transfer)
		.cross_consensus(cross_consensus)
		.can_use_generic_token_when(can_use_generic_token)
		.currency_spec_with(asset_spec)
		.local_transfer_with(local_transfer);

	vec![hydration, basilisk]
}

fn currency_id(ctx: &Context<'_>, input: &TransferInput) -> Result<Value> {
	if is_native_asset(ctx, input)? {
		return Ok(Value::from(NATIVE_CURRENCY_ID))
	}
	Ok(numeric_id(input.asset_id()?))
}

fn transfer(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	xtokens::transfer(ctx, input, currency_id(ctx, input)?)
}

fn can_use_generic_token(ctx: &Context<'_>, input: &TransferInput) -> bool {
	let dot_to_hub = input.is_destination(Chain::AssetHubPolkadot) && input.is_symbol("DOT");
	!input.is_destination(Chain::Ethereum) &&
		!dot_to_hub &&
		input.fee_asset.is_none() &&
		defaults::can_use_generic_token(ctx, input)
}

fn cross_consensus(ctx: &Context<'_>, input: &CrossConsensusInput) -> Result<Prepared> {
	let transfer = &input.transfer;
	if transfer.is_destination(Chain::Ethereum) {
		return ethereum::transfer_to_ethereum(ctx, input, false)
	}
	if transfer.fee_asset.is_some() {
		return execute::transfer(ctx, input)
	}

	let bridged = transfer
		.asset
		.location
		.as_ref()
		.map_or(false, |location| ctx.registry.is_ethereum_asset(location));
	if bridged {
		return match transfer.to_asset_hub() {
			true => ethereum::transfer_to_ethereum(ctx, input, true),
			false => ethereum::transfer_via_asset_hub(ctx, input),
		}
	}

	if transfer.is_destination(Chain::AssetHubPolkadot) && transfer.is_symbol("DOT") {
		return Ok(type_and_then::destination_reserve(input)?.into())
	}
	polkadot_xcm::limited_reserve_transfer(input)
}

/// The asset's own location, seen from inside Hydration when it is a local asset.
fn asset_spec(ctx: &Context<'_>, input: &TransferInput) -> Result<Versioned<Vec<MultiAsset>>> {
	match (&input.overridden, &input.asset.location) {
		(None, Some(location)) => {
			let location = location.localize(Some(ctx.registry.para_id(input.origin)?));
			Ok(create_versioned_multi_assets(input.version, input.amount, location))
		},
		_ => defaults::currency_spec(ctx, input),
	}
}

fn local_transfer(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	let address = input.account()?;
	if is_native_asset(ctx, input)? {
		return SerializedCall::new("Balances", "transfer_keep_alive")
			.with("dest", address)?
			.with("value", input.amount.to_string())
	}
	SerializedCall::new("Tokens", "transfer")
		.with("dest", address)?
		.with("currency_id", numeric_id(input.asset_id()?))?
		.with("amount", input.amount.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::{context, cross_input, input, ALICE};
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn currency_ids() {
		let ctx = context();

		let hdx = input(Chain::Hydration, Chain::Acala.into(), "HDX");
		assert_eq!(currency_id(&ctx, &hdx).unwrap(), json!(0));
		let usdt = input(Chain::Hydration, Chain::Acala.into(), "USDT");
		assert_eq!(currency_id(&ctx, &usdt).unwrap(), json!(10));
	}

	#[test]
	fn dot_to_asset_hub_leaves_generic_pallet() {
		let ctx = context();
		let dot = input(Chain::Hydration, Chain::AssetHubPolkadot.into(), "DOT");
		assert!(!can_use_generic_token(&ctx, &dot));
		assert!(can_use_generic_token(&ctx, &input(Chain::Hydration, Chain::Acala.into(), "DOT")));

		let Prepared::Ready(call) = cross_consensus(&ctx, &cross_input(dot)).unwrap() else {
			panic!("expected a finished call")
		};
		assert_eq!(call.method, "transfer_assets_using_type_and_then");
		assert_eq!(call.parameter("assets_transfer_type"), Some(&json!("DestinationReserve")));
	}

	#[test]
	fn snowbridge_assets_hop_through_asset_hub() {
		// given
		let ctx = context();
		let mut weth = input(Chain::Hydration, Chain::Acala.into(), "WETH");
		weth.sender_address = Some(ALICE.into());

		// then
		assert!(!can_use_generic_token(&ctx, &weth));
		let Prepared::Ready(call) = cross_consensus(&ctx, &cross_input(weth)).unwrap() else {
			panic!("expected a finished call")
		};
		assert_eq!(
			call.parameter("dest"),
			Some(&json!({ "V4": { "parents": 1, "interior": { "X1": [{ "Parachain": 1000 }] } } }))
		);
	}

	#[test]
	fn local_transfers_use_bare_addresses() {
		let ctx = context();

		let call = local_transfer(&ctx, &input(Chain::Hydration, Chain::Hydration.into(), "USDT"))
			.unwrap();
		assert_eq!(call.module, "Tokens");
		assert_eq!(call.parameter("dest"), Some(&json!(ALICE)));
		assert_eq!(call.parameter("currency_id"), Some(&json!(10)));
	}
}
