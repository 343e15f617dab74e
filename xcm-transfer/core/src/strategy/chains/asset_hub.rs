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

//! AssetHub.
//!
//! The hub holds the reserve of most assets in its ecosystem, so its routes are the most varied:
//! teleports to other system chains, reserve transfers to parachains, the Polkadot <-> Kusama
//! bridge, Snowbridge towards Ethereum, and `execute` programs when fees are paid in a different
//! asset.

use crate::{
	call::{numeric_id, SerializedCall},
	currency::currency_spec,
	error::{Error, Result},
	ethereum, execute,
	local::{self, is_native_asset},
	pallets::{
		polkadot_xcm::{self, PolkadotXcmMethod},
		xcm_pallet,
	},
	scenario::Scenario,
	strategy::{defaults, ChainStrategy, Context, CrossConsensusInput, Prepared, TransferInput},
	type_and_then,
};
use serde_json::json;
use tracing::debug;
use xcm_transfer_assets::normalize_symbol;
use xcm_transfer_primitives::{
	create_versioned_multi_assets, Chain, MultiAsset, MultiLocation, Parents, Version, Versioned,
	WeightLimit,
};

const LOG_TARGET: &str = "xcm::transfer::asset_hub";

/// Chains that keep a DOT reserve on AssetHub.
const DOT_RESERVE_CHAINS: &[Chain] = &[
	Chain::Hydration,
	Chain::Polimec,
	Chain::Moonbeam,
	Chain::BifrostPolkadot,
	Chain::PeoplePolkadot,
	Chain::Ajuna,
];

const NO_DOT_RESERVE: &str = "Some parachains do not have a reserve for DOT on AssetHub. This \
	also covers multihop transfers passing through AssetHub with DOT in the call. Chains without \
	a DOT reserve on AssetHub cannot receive DOT from it or through it, the transfer would lose \
	the asset.";

const BRIDGED_KSM: &str = "bridged KSM cannot currently be transferred from AssetHubPolkadot, \
	to send a different KSM asset specify it by id";

pub fn strategies() -> Vec<ChainStrategy> {
	let polkadot = ChainStrategy::new(Chain::AssetHubPolkadot, Version::V5)
		.cross_consensus(transfer)
		.currency_spec_with(asset_spec)
		.relay_to_chain_with(xcm_pallet::teleport)
		.local_transfer_with(local_transfer);

	vec![
		polkadot,
		polkadot.variant(Chain::AssetHubKusama, Version::V5),
		polkadot.variant(Chain::AssetHubWestend, Version::V5),
		polkadot.variant(Chain::AssetHubPaseo, Version::V5),
	]
}

fn symbols_match(a: &str, b: &str) -> bool {
	normalize_symbol(a) == normalize_symbol(b)
}

fn transfer(ctx: &Context<'_>, input: &CrossConsensusInput) -> Result<Prepared> {
	let transfer = &input.transfer;
	let native = ctx.registry.native_asset_symbol(transfer.origin)?;

	if let Some(fee_asset) = &transfer.fee_asset {
		if transfer.overridden.is_some() {
			return Err(Error::InvalidCurrency(
				"cannot use overridden multi-assets with XCM execute".into(),
			))
		}
		if transfer.is_symbol("KSM") {
			return Ok(type_and_then::local_reserve(ctx, input)?.into())
		}
		if !transfer.is_symbol(native) || !symbols_match(&fee_asset.symbol, native) {
			debug!(target: LOG_TARGET, fee_asset = %fee_asset.symbol, "Paying fees with execute");
			return execute::transfer(ctx, input)
		}
	}

	match transfer.destination_chain() {
		Some(chain) if chain.is_asset_hub() && !transfer.origin.shares_consensus_with(chain) =>
			return bridge(ctx, input),
		Some(Chain::Ethereum) => return ethereum::from_asset_hub(ctx, input),
		Some(Chain::Mythos) => return polkadot_xcm::limited_teleport(input),
		_ => {},
	}

	let external = transfer.asset.location.as_ref().map_or(false, |l| l.parents == Parents::TWO);
	if external {
		return Ok(type_and_then::local_reserve(ctx, input)?.into())
	}

	if transfer.origin == Chain::AssetHubPolkadot && transfer.scenario == Scenario::ChainToChain {
		let destination = transfer.destination_chain();
		let trusted = destination.map_or(false, Chain::is_system_chain);
		let dot_reserve = destination.map_or(false, |chain| DOT_RESERVE_CHAINS.contains(&chain));

		if is_native_asset(ctx, transfer)? && !dot_reserve && !trusted {
			return Err(transfer.scenario_error(NO_DOT_RESERVE))
		}
		if transfer.is_symbol("KSM") && transfer.asset.is_native {
			return Err(transfer.scenario_error(BRIDGED_KSM))
		}
	}

	let method = method(transfer);
	debug!(
		target: LOG_TARGET,
		method = method.name(),
		destination = %transfer.destination,
		"Selected method"
	);

	let relay_symbol = ctx.registry.relay_chain_symbol(transfer.origin)?;
	if method == PolkadotXcmMethod::TransferAssets && transfer.is_symbol(relay_symbol) {
		return Ok(type_and_then::local_reserve(ctx, input)?.into())
	}

	Ok(polkadot_xcm::transfer(input, method, Some(WeightLimit::Unlimited))?.into())
}

fn method(input: &TransferInput) -> PolkadotXcmMethod {
	let destination = input.destination_chain();
	if matches!(destination, Some(Chain::Polimec | Chain::Moonbeam)) {
		return PolkadotXcmMethod::TransferAssets
	}
	let trusted = destination.map_or(false, Chain::is_system_chain);
	if input.scenario == Scenario::ChainToChain && !trusted {
		PolkadotXcmMethod::LimitedReserveTransferAssets
	} else {
		PolkadotXcmMethod::LimitedTeleportAssets
	}
}

/// Polkadot <-> Kusama bridge between the two hubs, always with `transfer_assets`.
///
/// The other side's native asset returns home under its own location; the own native asset
/// travels as the relay asset.
fn bridge(ctx: &Context<'_>, input: &CrossConsensusInput) -> Result<Prepared> {
	let transfer = &input.transfer;
	let version = transfer.version;
	let target = transfer.destination_chain().unwrap_or(transfer.origin);
	let own = ctx.registry.native_asset_symbol(transfer.origin)?;
	let foreign = ctx.registry.native_asset_symbol(target)?;

	let location = if transfer.is_symbol(foreign) {
		transfer.asset_location()?.clone()
	} else if transfer.is_symbol(own) {
		MultiLocation::parent()
	} else {
		return Err(Error::InvalidCurrency(format!(
			"Polkadot <-> Kusama bridge does not support currency {}",
			transfer.asset.symbol
		)))
	};

	debug!(target: LOG_TARGET, %target, symbol = %transfer.asset.symbol, "Crossing the hub bridge");
	let assets = create_versioned_multi_assets(version, transfer.amount, location);
	let input = CrossConsensusInput { assets, ..input.clone() };
	polkadot_xcm::transfer_assets(&input)
}

/// Sibling transfers carry the asset's own location, without the hub's parachain junction.
fn asset_spec(ctx: &Context<'_>, input: &TransferInput) -> Result<Versioned<Vec<MultiAsset>>> {
	if input.scenario != Scenario::ChainToChain {
		return defaults::currency_spec(ctx, input)
	}

	let location = match &input.overridden {
		Some(_) => MultiLocation::here(),
		None => {
			let location = input.asset_location()?;
			let para_id = ctx.registry.para_id(input.origin)?;
			if location.parachain() == Some(para_id) {
				location.localize(Some(para_id))
			} else {
				location.clone()
			}
		},
	};
	let location = location.for_version(input.version);
	Ok(currency_spec(
		input.amount,
		input.version,
		location.parents,
		input.overridden.as_ref(),
		Some(location.interior),
	))
}

/// `Balances` for the native asset, `Assets` for assets with an id, `ForeignAssets` for the rest.
fn local_transfer(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	if is_native_asset(ctx, input)? {
		return local::native_transfer(ctx, input)
	}

	let target = json!({ "Id": input.account()? });
	let amount = input.amount.to_string();
	match &input.asset.asset_id {
		Some(id) => SerializedCall::new("Assets", "transfer")
			.with("id", numeric_id(id))?
			.with("target", target)?
			.with("amount", amount),
		None => SerializedCall::new("ForeignAssets", "transfer")
			.with("id", input.asset_location()?)?
			.with("target", target)?
			.with("amount", amount),
	}
}
