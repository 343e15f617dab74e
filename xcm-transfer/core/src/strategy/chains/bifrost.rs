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

//! Bifrost on Polkadot and Kusama.

use crate::{
	call::SerializedCall,
	error::Result,
	ethereum,
	local::is_native_asset,
	pallets::{polkadot_xcm, xtokens},
	strategy::{defaults, ChainStrategy, Context, CrossConsensusInput, Prepared, TransferInput},
};
use serde_json::{json, Value};
use xcm_transfer_primitives::{Chain, Version};

pub fn strategies() -> Vec<ChainStrategy> {
	let polkadot = ChainStrategy::new(Chain::BifrostPolkadot, Version::V4)
		.generic_token(transfer)
		.cross_consensus(cross_consensus)
		.can_use_generic_token_when(can_use_generic_token);

	vec![polkadot, polkadot.variant(Chain::BifrostKusama, Version::V3)]
}

/// `{Native: "BNC"}`, liquid staking derivatives as `VToken2`/`VSToken2`, the rest as `Token2`.
pub fn currency_id(ctx: &Context<'_>, input: &TransferInput) -> Result<Value> {
	if is_native_asset(ctx, input)? {
		return Ok(json!({ "Native": input.asset.symbol }))
	}

	let id = super::foreign_id(input)?;
	let symbol = input.asset.symbol.as_str();
	Ok(if symbol.starts_with("vs") {
		json!({ "VSToken2": id })
	} else if symbol.starts_with('v') {
		json!({ "VToken2": id })
	} else {
		json!({ "Token2": id })
	})
}

fn transfer(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	xtokens::transfer(ctx, input, currency_id(ctx, input)?)
}

fn can_use_generic_token(ctx: &Context<'_>, input: &TransferInput) -> bool {
	!input.is_destination(Chain::Ethereum) && defaults::can_use_generic_token(ctx, input)
}

fn cross_consensus(ctx: &Context<'_>, input: &CrossConsensusInput) -> Result<Prepared> {
	if input.transfer.is_destination(Chain::Ethereum) {
		return ethereum::transfer_to_ethereum(ctx, input, false)
	}
	polkadot_xcm::limited_reserve_transfer(input)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::{context, input};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case("BNC", json!({ "Native": "BNC" }))]
	#[case("vDOT", json!({ "VToken2": 0 }))]
	#[case("vsDOT", json!({ "VSToken2": 0 }))]
	#[case("USDT", json!({ "Token2": 2 }))]
	fn currency_ids(#[case] symbol: &str, #[case] expected: Value) {
		let input = input(Chain::BifrostPolkadot, Chain::Hydration.into(), symbol);

		assert_eq!(currency_id(&context(), &input).unwrap(), expected);
	}
}
