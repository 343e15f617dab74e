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

//! Hooks shared by most chains.

use super::{Context, TransferInput};
use crate::{
	call::SerializedCall,
	currency::currency_spec as build_currency_spec,
	error::Result,
	local,
	pallets::xcm_pallet,
	scenario::Scenario,
};
use xcm_transfer_primitives::{MultiAsset, Parents, Versioned};

/// The generic token pallet cannot carry assets bridged in from Ethereum.
pub fn can_use_generic_token(ctx: &Context<'_>, input: &TransferInput) -> bool {
	!input
		.asset
		.location
		.as_ref()
		.map_or(false, |location| ctx.registry.is_ethereum_asset(location))
}

/// `Here`, seen through the relay for `ChainToRelay`.
pub fn currency_spec(_: &Context<'_>, input: &TransferInput) -> Result<Versioned<Vec<MultiAsset>>> {
	let parents = match input.scenario {
		Scenario::ChainToRelay => Parents::ONE,
		_ => Parents::ZERO,
	};
	Ok(build_currency_spec(input.amount, input.version, parents, input.overridden.as_ref(), None))
}

/// `limited_reserve_transfer_assets` from the relay.
pub fn relay_to_chain(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	xcm_pallet::reserve_transfer(ctx, input)
}

pub fn local_transfer(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	local::transfer(ctx, input)
}
