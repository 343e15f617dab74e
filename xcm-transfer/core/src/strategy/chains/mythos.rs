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

//! Mythos only moves MYTH, teleporting it to AssetHub and reserve transferring it elsewhere.

use super::ensure_native;
use crate::{
	error::{Error, Result},
	ethereum::{forward_to_ethereum, message_id, require_account, require_sender},
	location::{chain_location, ASSET_HUB_PARA_ID},
	pallets::{polkadot_xcm, xcm_pallet},
	scenario::Scenario,
	strategy::{ChainStrategy, Context, CrossConsensusInput, FeeEstimate, Pending, Prepared, Query},
	type_and_then::{TransferType, TypeAndThen},
};
use tracing::debug;
use xcm_transfer_primitives::{create_multi_asset, Chain, MultiLocation, Version};

const LOG_TARGET: &str = "xcm::transfer::mythos";

pub fn strategies() -> Vec<ChainStrategy> {
	vec![ChainStrategy::new(Chain::Mythos, Version::V5)
		.cross_consensus(transfer)
		.relay_to_chain_with(xcm_pallet::refuse_node)]
}

fn transfer(ctx: &Context<'_>, input: &CrossConsensusInput) -> Result<Prepared> {
	let transfer = &input.transfer;
	if transfer.scenario != Scenario::ChainToChain {
		return Err(transfer.scenario_error("Mythos only sends to other parachains"))
	}
	ensure_native(ctx, transfer)?;

	if transfer.is_destination(Chain::Ethereum) {
		return to_ethereum(ctx, input)
	}
	if transfer.is_destination(Chain::AssetHubPolkadot) {
		return polkadot_xcm::limited_teleport(input)
	}
	polkadot_xcm::limited_reserve_transfer(input)
}

/// Type-and-then to AssetHub: MYTH pays the bridge by teleport, the token follows to its reserve.
fn to_ethereum(ctx: &Context<'_>, input: &CrossConsensusInput) -> Result<Prepared> {
	let transfer = input.transfer.clone();
	let version = transfer.version;
	let location = transfer.asset_location()?.clone();
	let sender = require_sender(&transfer)?;
	let address = require_account(&transfer)?;
	let token = match (&transfer.asset.asset_id, transfer.asset.is_foreign()) {
		(Some(id), true) => id.clone(),
		_ =>
			return Err(Error::InvalidCurrency(format!(
				"asset {} is not a foreign asset",
				transfer.asset.symbol
			))),
	};

	let topic = message_id(
		&ctx.client.account_to_hex(sender)?,
		ctx.registry.para_id(transfer.origin)?,
		&token,
		address,
		transfer.amount,
	);
	let custom_xcm = forward_to_ethereum(ctx, &transfer, &token, topic)?;

	debug!(target: LOG_TARGET, amount = transfer.amount, "Waiting for bridge fees in MYTH");
	let query = Query::EthereumBridgeFees { payer: Chain::Mythos };
	Ok(Prepared::Pending(Pending::new(query, move |estimate: FeeEstimate| {
		let call = TypeAndThen {
			dest: chain_location(version, ASSET_HUB_PARA_ID),
			assets: vec![
				create_multi_asset(version, estimate.fee, MultiLocation::here()),
				create_multi_asset(version, transfer.amount, location),
			],
			assets_transfer_type: TransferType::DestinationReserve,
			remote_fees_id: MultiLocation::here(),
			fees_transfer_type: TransferType::Teleport,
			custom_xcm_on_dest: custom_xcm,
		};
		Ok(call.into_call(&transfer, version)?.into())
	})))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::{context, cross_input, input};

	#[test]
	fn teleports_to_asset_hub() {
		let input = cross_input(input(Chain::Mythos, Chain::AssetHubPolkadot.into(), "MYTH"));

		let Prepared::Ready(call) = transfer(&context(), &input).unwrap() else {
			panic!("expected a finished call")
		};
		assert_eq!(call.method, "limited_teleport_assets");
	}

	#[test]
	fn reserve_transfers_elsewhere() {
		let input = cross_input(input(Chain::Mythos, Chain::Hydration.into(), "MYTH"));

		let Prepared::Ready(call) = transfer(&context(), &input).unwrap() else {
			panic!("expected a finished call")
		};
		assert_eq!(call.method, "limited_reserve_transfer_assets");
	}

	#[test]
	fn only_parachain_destinations() {
		let input = cross_input(input(Chain::Mythos, Chain::Polkadot.into(), "MYTH"));

		assert!(matches!(
			transfer(&context(), &input),
			Err(Error::ScenarioNotSupported { chain: Chain::Mythos, .. })
		));
	}
}
