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

//! Acala and Karura: `{Token: symbol}` for the chain's own tokens, `{ForeignAsset: id}` otherwise.

use super::foreign_id;
use crate::{
	call::SerializedCall,
	error::Result,
	pallets::{polkadot_xcm, xtokens},
	strategy::{ChainStrategy, Context, CrossConsensusInput, Prepared, TransferInput},
};
use serde_json::{json, Value};
use xcm_transfer_primitives::{Chain, Version};

pub fn strategies() -> Vec<ChainStrategy> {
	let acala = ChainStrategy::new(Chain::Acala, Version::V4)
		.generic_token(transfer)
		.cross_consensus(reserve_transfer);

	vec![acala, acala.variant(Chain::Karura, Version::V4)]
}

pub fn currency_id(input: &TransferInput) -> Result<Value> {
	if input.asset.is_native {
		Ok(json!({ "Token": input.asset.symbol }))
	} else {
		Ok(json!({ "ForeignAsset": foreign_id(input)? }))
	}
}

fn transfer(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	xtokens::transfer(ctx, input, currency_id(input)?)
}

fn reserve_transfer(_: &Context<'_>, input: &CrossConsensusInput) -> Result<Prepared> {
	polkadot_xcm::limited_reserve_transfer(input)
}
