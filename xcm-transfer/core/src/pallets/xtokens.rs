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

//! `XTokens` calls.
//!
//! The generic token pallet takes a chain specific currency selector and an amount, or a
//! versioned asset for the `multiasset` variants. The destination is the beneficiary itself,
//! addressed relative to the sending chain.

use crate::{
	call::SerializedCall,
	currency::{fee_asset_index, OverriddenAsset},
	error::{Error, Result},
	location::{chain_location, versioned_beneficiary},
	scenario::Scenario,
	strategy::{Context, TransferInput},
};
use serde::Serialize;
use xcm_transfer_primitives::{
	create_multi_asset, Chain, Destination, Junction, MultiAsset, MultiLocation, PalletFamily,
	Parents, Versioned, WeightLimit,
};

pub const MODULE: &str = "XTokens";

/// Destination weight of pre-V3 transfers to the relay chain.
pub const CHAIN_TO_RELAY_FEE: u128 = 4_600_000_000;
/// Destination weight of pre-V3 transfers to a sibling.
pub const CHAIN_TO_CHAIN_FEE: u128 = 399_600_000_000;

const ASSET_HUB_ASSETS_PALLET: u8 = 50;

fn scenario_fee(scenario: Scenario) -> u128 {
	match scenario {
		Scenario::ChainToRelay => CHAIN_TO_RELAY_FEE,
		_ => CHAIN_TO_CHAIN_FEE,
	}
}

fn with_weight(call: SerializedCall, input: &TransferInput) -> Result<SerializedCall> {
	if input.version.supports_weight_limit() {
		call.with("dest_weight_limit", WeightLimit::Unlimited)
	} else {
		call.with("dest_weight", scenario_fee(input.scenario).to_string())
	}
}

/// The `dest` parameter: beneficiary relative to the sender, or the raw destination location.
pub fn destination(ctx: &Context<'_>, input: &TransferInput) -> Result<Versioned<MultiLocation>> {
	match &input.destination {
		Destination::Location(location) =>
			Ok(Versioned::new(input.version, location.clone().for_version(input.version))),
		Destination::Chain(_) => versioned_beneficiary(
			ctx.client,
			&input.address,
			input.scenario,
			Some(PalletFamily::GenericToken),
			input.version,
			input.para_id_to,
		),
	}
}

/// `transfer` with a chain specific currency selector.
///
/// Overridden assets switch to the multiasset calls, and so do Astar and Shiden when sending to
/// their relay chain.
pub fn transfer(
	ctx: &Context<'_>,
	input: &TransferInput,
	currency_id: impl Serialize,
) -> Result<SerializedCall> {
	match input.overridden {
		Some(OverriddenAsset::Assets(_)) => return transfer_multiassets(ctx, input),
		Some(OverriddenAsset::Location(_)) => return transfer_multiasset(ctx, input),
		None => {},
	}

	let astar = matches!(input.origin, Chain::Astar | Chain::Shiden);
	if astar && input.scenario == Scenario::ChainToRelay {
		return transfer_multiasset(ctx, input)
	}

	let call = SerializedCall::new(input.module(MODULE), input.method("transfer"))
		.with("currency_id", currency_id)?
		.with("amount", input.amount.to_string())?
		.with("dest", destination(ctx, input)?)?;
	with_weight(call, input)
}

pub fn transfer_multiasset(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	if let Some(OverriddenAsset::Assets(_)) = input.overridden {
		return transfer_multiassets(ctx, input)
	}

	let asset = Versioned::new(input.version, currency_selection(ctx, input)?);
	let call = SerializedCall::new(input.module(MODULE), input.method("transfer_multiasset"))
		.with("asset", asset)?
		.with("dest", destination(ctx, input)?)?;
	with_weight(call, input)
}

pub fn transfer_multiassets(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	let Some(OverriddenAsset::Assets(assets)) = &input.overridden else {
		return transfer_multiasset(ctx, input)
	};

	let fee_item = fee_asset_index(input.overridden.as_ref())?;
	let assets: Vec<MultiAsset> = assets.iter().map(|entry| entry.asset.clone()).collect();
	let call = SerializedCall::new(input.module(MODULE), input.method("transfer_multiassets"))
		.with("assets", Versioned::new(input.version, assets))?
		.with("fee_item", fee_item)?
		.with("dest", destination(ctx, input)?)?;
	with_weight(call, input)
}

/// The asset of a `transfer_multiasset` call.
///
/// Relay destinations get the relay native asset. AssetHub destinations get the asset as
/// registered on the hub. Otherwise the asset's own location is used, falling back to an
/// AssetHub style `PalletInstance`/`GeneralIndex` path for foreign assets and to the origin
/// itself for native ones.
pub fn currency_selection(ctx: &Context<'_>, input: &TransferInput) -> Result<MultiAsset> {
	let version = input.version;
	let amount = input.amount;

	if let Some(OverriddenAsset::Location(location)) = &input.overridden {
		return Ok(create_multi_asset(version, amount, location.clone()))
	}

	if input.destination.is_relay_chain() {
		return Ok(create_multi_asset(version, amount, MultiLocation::parent()))
	}

	if let Some(hub) = input.destination_chain().filter(|chain| chain.is_asset_hub()) {
		let location = ctx
			.registry
			.find_asset_on_destination(&input.asset, hub)?
			.and_then(|asset| asset.location.clone())
			.ok_or_else(|| {
				Error::InvalidCurrency(format!("asset {} not found on {hub}", input.asset.symbol))
			})?;
		return Ok(create_multi_asset(version, amount, location.for_version(version)))
	}

	let location = match (&input.asset.location, input.asset.is_foreign()) {
		(Some(location), _) => location.clone(),
		(None, true) => MultiLocation::from_junctions(
			Parents::ONE,
			vec![
				Junction::Parachain(input.para_id()?),
				Junction::PalletInstance(ASSET_HUB_ASSETS_PALLET),
				Junction::GeneralIndex(parse_index(input.asset_id()?)?),
			],
		)?,
		(None, false) => chain_location(version, ctx.registry.para_id(input.origin)?),
	};
	Ok(create_multi_asset(version, amount, location.for_version(version)))
}

fn parse_index(id: &str) -> Result<u128> {
	id.parse().map_err(|_| Error::InvalidCurrency(format!("asset id {id} is not numeric")))
}
