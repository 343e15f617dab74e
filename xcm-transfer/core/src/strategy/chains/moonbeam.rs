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

//! Moonbeam and Moonriver send everything with `transfer_assets`.

use crate::{
	currency::currency_spec,
	error::Result,
	local::is_native_asset,
	pallets::polkadot_xcm,
	scenario::Scenario,
	strategy::{defaults, ChainStrategy, Context, CrossConsensusInput, Prepared, TransferInput},
};
use xcm_transfer_primitives::{
	create_versioned_multi_assets, create_x1_payload, Chain, Junction, MultiAsset, MultiLocation,
	Parents, Version, Versioned,
};

const BALANCES_PALLET: u8 = 10;

pub fn strategies() -> Vec<ChainStrategy> {
	let moonbeam = ChainStrategy::new(Chain::Moonbeam, Version::V4)
		.cross_consensus(transfer)
		.currency_spec_with(asset_spec);

	vec![moonbeam, moonbeam.variant(Chain::Moonriver, Version::V4)]
}

fn transfer(_: &Context<'_>, input: &CrossConsensusInput) -> Result<Prepared> {
	let transfer = &input.transfer;
	if transfer.is_destination(Chain::Ethereum) {
		return Err(transfer.scenario_error("Snowbridge is temporarily disabled."))
	}
	polkadot_xcm::transfer_assets(input)
}

fn asset_spec(ctx: &Context<'_>, input: &TransferInput) -> Result<Versioned<Vec<MultiAsset>>> {
	let version = input.version;
	if input.overridden.is_some() {
		return defaults::currency_spec(ctx, input)
	}
	if input.scenario == Scenario::ChainToRelay {
		return Ok(create_versioned_multi_assets(version, input.amount, MultiLocation::parent()))
	}
	if is_native_asset(ctx, input)? {
		let interior = create_x1_payload(version, Junction::PalletInstance(BALANCES_PALLET));
		return Ok(currency_spec(input.amount, version, Parents::ZERO, None, Some(interior)))
	}
	let location = input.asset_location()?.clone().for_version(version);
	Ok(create_versioned_multi_assets(version, input.amount, location))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		error::Error,
		tests::{context, cross_input, input},
	};
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn native_token_by_pallet_instance() {
		let spec = asset_spec(&context(), &input(Chain::Moonbeam, Chain::Hydration.into(), "GLMR"))
			.unwrap();

		assert_eq!(
			serde_json::to_value(spec).unwrap(),
			json!({ "V4": [{
				"id": { "parents": 0, "interior": { "X1": [{ "PalletInstance": 10 }] } },
				"fun": { "Fungible": "1000000000000" }
			}] })
		);
	}

	#[test]
	fn foreign_assets_by_location() {
		let ctx = context();

		let to_relay = asset_spec(&ctx, &input(Chain::Moonbeam, Chain::Polkadot.into(), "xcDOT"))
			.unwrap();
		assert_eq!(to_relay.into_inner()[0].location(), &MultiLocation::parent());

		let usdt =
			asset_spec(&ctx, &input(Chain::Moonbeam, Chain::Hydration.into(), "xcUSDT")).unwrap();
		assert_eq!(usdt.into_inner()[0].location().parachain(), Some(1000));
	}

	#[test]
	fn ethereum_is_refused() {
		let input = cross_input(input(Chain::Moonbeam, Chain::Ethereum.into(), "xcUSDT"));

		assert!(matches!(
			transfer(&context(), &input),
			Err(Error::ScenarioNotSupported { chain: Chain::Moonbeam, .. })
		));
	}
}
