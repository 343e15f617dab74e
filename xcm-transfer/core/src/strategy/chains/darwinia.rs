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

//! Darwinia and Crab, EVM chains whose native token lives in the balances pallet at index 5.

use crate::{
	currency::currency_spec,
	error::Result,
	local::is_native_asset,
	pallets::polkadot_xcm,
	scenario::Scenario,
	strategy::{defaults, ChainStrategy, Context, CrossConsensusInput, Prepared, TransferInput},
};
use xcm_transfer_primitives::{
	create_x1_payload, Chain, Junction, MultiAsset, Parents, Version, Versioned,
};

const BALANCES_PALLET: u8 = 5;

pub fn strategies() -> Vec<ChainStrategy> {
	let darwinia = ChainStrategy::new(Chain::Darwinia, Version::V3)
		.cross_consensus(reserve_transfer)
		.currency_spec_with(native_spec);

	vec![darwinia, darwinia.variant(Chain::Crab, Version::V3)]
}

fn reserve_transfer(_: &Context<'_>, input: &CrossConsensusInput) -> Result<Prepared> {
	polkadot_xcm::limited_reserve_transfer(input)
}

fn native_spec(ctx: &Context<'_>, input: &TransferInput) -> Result<Versioned<Vec<MultiAsset>>> {
	if input.scenario != Scenario::ChainToChain || !is_native_asset(ctx, input)? {
		return defaults::currency_spec(ctx, input)
	}
	let interior = create_x1_payload(input.version, Junction::PalletInstance(BALANCES_PALLET));
	Ok(currency_spec(
		input.amount,
		input.version,
		Parents::ZERO,
		input.overridden.as_ref(),
		Some(interior),
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::{context, input};
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn native_token_by_pallet_instance() {
		let spec =
			native_spec(&context(), &input(Chain::Darwinia, Chain::Hydration.into(), "RING")).unwrap();

		assert_eq!(
			serde_json::to_value(spec).unwrap(),
			json!({ "V3": [{
				"id": { "Concrete": { "parents": 0, "interior": { "X1": { "PalletInstance": 5 } } } },
				"fun": { "Fungible": "1000000000000" }
			}] })
		);
	}
}
