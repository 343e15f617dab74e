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

//! Parachains whose only quirk is the shape of their `XTokens` currency selector, plus the
//! `PolkadotXcm` chains that use plain reserve transfers.

use super::{ensure_native, foreign_id};
use crate::{
	call::SerializedCall,
	error::Result,
	local::is_native_asset,
	pallets::{polkadot_xcm, xtokens},
	strategy::{
		ChainStrategy, Context, CrossConsensusInput, GenericTokenFn, Prepared, TransferInput,
	},
};
use serde_json::{json, Value};
use xcm_transfer_primitives::{Chain, Version};

/// Currency id of Manta's native token.
const MANTA_NATIVE_ID: u64 = 1;

pub fn strategies() -> Vec<ChainStrategy> {
	let xtokens = |chain, version, transfer: GenericTokenFn| {
		ChainStrategy::new(chain, version).generic_token(transfer).cross_consensus(reserve_transfer)
	};
	let reserve =
		|chain, version| ChainStrategy::new(chain, version).cross_consensus(reserve_transfer);

	vec![
		xtokens(Chain::Centrifuge, Version::V4, centrifuge),
		xtokens(Chain::Altair, Version::V4, centrifuge),
		xtokens(Chain::Crust, Version::V3, crust),
		xtokens(Chain::CrustShadow, Version::V3, crust),
		xtokens(Chain::Manta, Version::V3, manta),
		xtokens(Chain::Nodle, Version::V4, nodle),
		xtokens(Chain::Pendulum, Version::V3, pendulum),
		xtokens(Chain::Unique, Version::V5, unique),
		xtokens(Chain::Quartz, Version::V5, unique),
		xtokens(Chain::Peaq, Version::V4, peaq),
		reserve(Chain::KiltSpiritnet, Version::V4),
		reserve(Chain::NeuroWeb, Version::V4),
		reserve(Chain::Laos, Version::V4),
	]
}

fn reserve_transfer(_: &Context<'_>, input: &CrossConsensusInput) -> Result<Prepared> {
	polkadot_xcm::limited_reserve_transfer(input)
}

/// `native` for the chain's own token, `foreign(id)` for registered assets.
fn select(
	ctx: &Context<'_>,
	input: &TransferInput,
	native: Value,
	foreign: impl FnOnce(Value) -> Value,
) -> Result<Value> {
	if is_native_asset(ctx, input)? {
		Ok(native)
	} else {
		Ok(foreign(foreign_id(input)?))
	}
}

pub fn centrifuge(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	let currency = select(ctx, input, json!("Native"), |id| json!({ "ForeignAsset": id }))?;
	xtokens::transfer(ctx, input, currency)
}

pub fn crust(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	let currency = select(ctx, input, json!("SelfReserve"), |id| json!({ "OtherReserve": id }))?;
	xtokens::transfer(ctx, input, currency)
}

pub fn manta(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	let native = json!({ "MantaCurrency": MANTA_NATIVE_ID });
	let currency = select(ctx, input, native, |id| json!({ "MantaCurrency": id }))?;
	xtokens::transfer(ctx, input, currency)
}

pub fn nodle(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	ensure_native(ctx, input)?;
	xtokens::transfer(ctx, input, "NodleNative")
}

pub fn pendulum(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	let currency = select(ctx, input, json!("Native"), |id| json!({ "XCM": id }))?;
	xtokens::transfer(ctx, input, currency)
}

pub fn unique(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	let native = json!({ "NativeAssetId": "Here" });
	let currency = select(ctx, input, native, |id| json!({ "ForeignAssetId": id }))?;
	xtokens::transfer(ctx, input, currency)
}

/// Peaq addresses every asset, its own token included, by numeric id.
pub fn peaq(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	xtokens::transfer(ctx, input, foreign_id(input)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		error::Error,
		tests::{context, input},
	};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case(Chain::Centrifuge, "CFG", centrifuge as GenericTokenFn, json!("Native"))]
	#[case(Chain::Centrifuge, "USDT", centrifuge as GenericTokenFn, json!({ "ForeignAsset": 1 }))]
	#[case(Chain::Crust, "CRU", crust as GenericTokenFn, json!("SelfReserve"))]
	#[case(
		Chain::Crust,
		"USDT",
		crust as GenericTokenFn,
		json!({ "OtherReserve": "311091173110107856861649819128533077277" })
	)]
	#[case(Chain::Manta, "MANTA", manta as GenericTokenFn, json!({ "MantaCurrency": 1 }))]
	#[case(Chain::Pendulum, "USDT", pendulum as GenericTokenFn, json!({ "XCM": 1 }))]
	#[case(Chain::Unique, "UNQ", unique as GenericTokenFn, json!({ "NativeAssetId": "Here" }))]
	#[case(Chain::Nodle, "NODL", nodle as GenericTokenFn, json!("NodleNative"))]
	fn currency_selectors(
		#[case] chain: Chain,
		#[case] symbol: &str,
		#[case] transfer: GenericTokenFn,
		#[case] expected: Value,
	) {
		let call = transfer(&context(), &input(chain, Chain::Hydration.into(), symbol)).unwrap();

		assert_eq!(call.parameter("currency_id"), Some(&expected));
	}

	#[test]
	fn nodle_only_sends_its_own_token() {
		let mut input = input(Chain::Nodle, Chain::Hydration.into(), "NODL");
		input.asset.is_native = false;

		assert!(matches!(nodle(&context(), &input), Err(Error::InvalidCurrency(_))));
	}
}
