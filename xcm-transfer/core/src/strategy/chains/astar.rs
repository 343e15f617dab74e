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

//! Astar and Shiden.
//!
//! Foreign assets go through `XTokens` by numeric id. The native token has no id in the token
//! pallet and is sent as a multiasset located at the chain itself. Routes the token pallet
//! cannot carry fall back to `PolkadotXcm` reserve transfers.

use super::foreign_id;
use crate::{
	call::SerializedCall,
	error::Result,
	local::is_native_asset,
	pallets::{polkadot_xcm, xtokens},
	strategy::{defaults, ChainStrategy, Context, CrossConsensusInput, Prepared, TransferInput},
};
use xcm_transfer_primitives::{Chain, Version};

pub fn strategies() -> Vec<ChainStrategy> {
	let astar = ChainStrategy::new(Chain::Astar, Version::V3)
		.generic_token(transfer)
		.cross_consensus(reserve_transfer)
		.can_use_generic_token_when(defaults::can_use_generic_token);

	vec![astar, astar.variant(Chain::Shiden, Version::V3)]
}

fn transfer(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	if input.overridden.is_none() && is_native_asset(ctx, input)? {
		return xtokens::transfer_multiasset(ctx, input)
	}
	xtokens::transfer(ctx, input, foreign_id(input)?)
}

fn reserve_transfer(_: &Context<'_>, input: &CrossConsensusInput) -> Result<Prepared> {
	polkadot_xcm::limited_reserve_transfer(input)
}
