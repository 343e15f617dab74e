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

//! Relay chain `XcmPallet` calls, issued when a relay chain sends to one of its parachains.

use super::PolkadotXcmMethod;
use crate::{
	call::SerializedCall,
	currency::{currency_spec, fee_asset_index},
	error::{Error, Result},
	location::{versioned_beneficiary, versioned_destination},
	scenario::Scenario,
	strategy::{Context, TransferInput},
};
use xcm_transfer_primitives::{Parents, WeightLimit};

pub const MODULE: &str = "XcmPallet";

/// `{dest: {0, X1 Parachain}, beneficiary, assets: {0, Here}, fee_asset_item, weight_limit}`.
pub fn relay_to_chain(
	ctx: &Context<'_>,
	input: &TransferInput,
	method: PolkadotXcmMethod,
) -> Result<SerializedCall> {
	let version = input.version;
	let dest = versioned_destination(
		input.origin,
		&input.destination,
		Scenario::RelayToChain,
		version,
		input.para_id_to,
	)?;
	let beneficiary = versioned_beneficiary(
		ctx.client,
		&input.address,
		Scenario::RelayToChain,
		None,
		version,
		input.para_id_to,
	)?;
	let assets = currency_spec(input.amount, version, Parents::ZERO, input.overridden.as_ref(), None);

	SerializedCall::new(input.module(MODULE), input.method(method.name()))
		.with("dest", dest)?
		.with("beneficiary", beneficiary)?
		.with("assets", assets)?
		.with("fee_asset_item", fee_asset_index(input.overridden.as_ref())?)?
		.with("weight_limit", WeightLimit::Unlimited)
}

pub fn reserve_transfer(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	relay_to_chain(ctx, input, PolkadotXcmMethod::LimitedReserveTransferAssets)
}

pub fn teleport(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	relay_to_chain(ctx, input, PolkadotXcmMethod::LimitedTeleportAssets)
}

/// For chains that cannot receive from their relay at all.
pub fn refuse_node(_: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	Err(Error::NodeNotSupported(input.destination_chain().unwrap_or(input.origin)))
}

/// For chains that refuse relay transfers under the current runtime.
pub fn refuse_scenario(_: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	let chain = input.destination_chain().unwrap_or(input.origin);
	Err(Error::scenario(
		chain,
		Scenario::RelayToChain,
		format!("{chain} does not accept transfers from its relay chain"),
	))
}
