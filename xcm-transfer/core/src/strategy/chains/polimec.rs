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

//! Polimec.
//!
//! DOT never moves directly between Polimec and the relay. It is teleported to AssetHub, which
//! forwards it with a `DepositReserveAsset`; DOT to Hydration takes the same path with the
//! reserve on AssetHub.

use crate::{
	call::SerializedCall,
	error::{Error, Result},
	local,
	location::{beneficiary, chain_location, ASSET_HUB_PARA_ID},
	pallets::{polkadot_xcm, xcm_pallet, PolkadotXcmMethod},
	scenario::Scenario,
	strategy::{ChainStrategy, Context, CrossConsensusInput, Prepared, TransferInput},
	type_and_then::{deposit_all_counted, TransferType, TypeAndThen},
};
use serde_json::json;
use tracing::trace;
use xcm_transfer_primitives::{
	create_multi_asset, create_versioned_multi_assets, create_x1_payload, AssetFilter, Chain,
	Destination, Instruction, Junction, Junctions, MultiLocation, Parents, Version, WeightLimit,
};

const LOG_TARGET: &str = "xcm::transfer::polimec";

/// DOT bought for execution on the final hop.
const EXECUTION_FEE: u128 = 1_000_000_000;

pub fn strategies() -> Vec<ChainStrategy> {
	vec![ChainStrategy::new(Chain::Polimec, Version::V5)
		.cross_consensus(transfer)
		.relay_to_chain_with(relay_to_chain)
		.local_transfer_with(local_transfer)]
}

fn transfer(ctx: &Context<'_>, input: &CrossConsensusInput) -> Result<Prepared> {
	let transfer = &input.transfer;
	let to = |chain| transfer.is_destination(chain);

	match transfer.scenario {
		Scenario::ChainToChain if to(Chain::Hydration) && transfer.is_symbol("DOT") =>
			Ok(via_asset_hub(ctx, transfer, TransferType::DestinationReserve)?
				.into_call(transfer, transfer.version)?
				.into()),
		Scenario::ChainToChain if to(Chain::AssetHubPolkadot) || to(Chain::Hydration) => {
			let location = asset_location(ctx, transfer)?;
			let input = CrossConsensusInput {
				assets: create_versioned_multi_assets(transfer.version, transfer.amount, location),
				..input.clone()
			};
			polkadot_xcm::transfer_assets(&input)
		},
		Scenario::ChainToRelay => Ok(via_asset_hub(ctx, transfer, TransferType::Teleport)?
			.into_call(transfer, transfer.version)?
			.into()),
		_ => Err(transfer.scenario_error(format!(
			"Polimec does not support transfers to {}",
			transfer.destination
		))),
	}
}

/// PLMC as `Here`, foreign assets by their registered location.
fn asset_location(ctx: &Context<'_>, input: &TransferInput) -> Result<MultiLocation> {
	if local::is_native_asset(ctx, input)? {
		return Ok(MultiLocation::here())
	}
	match (&input.asset.location, input.asset.is_foreign()) {
		(Some(location), true) => Ok(location.clone()),
		_ => Err(Error::InvalidCurrency(format!(
			"transfer of asset {} is not supported yet",
			input.asset.symbol
		))),
	}
}

/// DOT to AssetHub, continuing from there with a `DepositReserveAsset` to the destination.
fn via_asset_hub(
	ctx: &Context<'_>,
	input: &TransferInput,
	transfer_type: TransferType,
) -> Result<TypeAndThen> {
	let version = input.version;
	let (parents, fee_parents) = match input.scenario {
		Scenario::RelayToChain => (Parents::ZERO, Parents::ZERO),
		Scenario::ChainToRelay => (Parents::ONE, Parents::ZERO),
		Scenario::ChainToChain => (Parents::ONE, Parents::ONE),
	};

	let dest = match &input.destination {
		Destination::Location(location) => location.clone(),
		Destination::Chain(_) => MultiLocation::new(
			parents,
			create_x1_payload(version, Junction::Parachain(ASSET_HUB_PARA_ID)),
		),
	};
	let forward_to = match input.scenario {
		Scenario::ChainToRelay => MultiLocation::parent(),
		_ => chain_location(version, input.para_id()?),
	};
	let recipient = beneficiary(ctx.client, &input.address, input.scenario, None, version, None)?;

	trace!(target: LOG_TARGET, ?dest, ?forward_to, "Routing DOT through AssetHub");
	let custom_xcm = vec![Instruction::DepositReserveAsset {
		assets: AssetFilter::all_counted(1),
		dest: forward_to,
		xcm: vec![
			Instruction::BuyExecution {
				fees: create_multi_asset(version, EXECUTION_FEE, MultiLocation::parent()),
				weight_limit: WeightLimit::Unlimited,
			},
			deposit_all_counted(1, recipient),
		],
	}];

	let dot = MultiLocation::new(parents, Junctions::Here);
	Ok(TypeAndThen::new(
		dest,
		vec![create_multi_asset(version, input.amount, dot)],
		transfer_type,
		MultiLocation::new(fee_parents, Junctions::Here),
		custom_xcm,
	))
}

/// DOT from the relay, teleported to AssetHub first.
fn relay_to_chain(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	let method = PolkadotXcmMethod::TransferAssetsUsingTypeAndThen;
	via_asset_hub(ctx, input, TransferType::Teleport)?.into_pallet_call(
		input.module(xcm_pallet::MODULE),
		input.method(method.name()),
		input.version,
	)
}

/// Foreign assets live in the `ForeignAssets` pallet, keyed by location.
fn local_transfer(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	if local::is_native_asset(ctx, input)? {
		return local::native_transfer(ctx, input)
	}
	let location = asset_location(ctx, input)?;
	SerializedCall::new("ForeignAssets", "transfer")
		.with("id", location)?
		.with("target", json!({ "Id": input.account()? }))?
		.with("amount", input.amount.to_string())
}
