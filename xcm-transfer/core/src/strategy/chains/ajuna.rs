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

//! Ajuna only sends its native token to siblings.

use super::ensure_native;
use crate::{
	call::SerializedCall,
	error::Result,
	pallets::{xcm_pallet, xtokens},
	scenario::Scenario,
	strategy::{ChainStrategy, Context, TransferInput},
};
use xcm_transfer_primitives::{Chain, Version};

pub fn strategies() -> Vec<ChainStrategy> {
	vec![ChainStrategy::new(Chain::Ajuna, Version::V4)
		.generic_token(transfer)
		.relay_to_chain_with(xcm_pallet::refuse_node)]
}

fn transfer(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	if input.scenario != Scenario::ChainToChain {
		return Err(input.scenario_error("Ajuna only transfers to other parachains"))
	}
	ensure_native(ctx, input)?;
	xtokens::transfer(ctx, input, ctx.registry.native_asset_symbol(input.origin)?)
}
