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

//! Strategy records of the supported parachains.
//!
//! Chains sharing a runtime family share a module; the Kusama or testnet sibling is usually the
//! same record under another name and version.

pub mod acala;
pub mod ajuna;
pub mod asset_hub;
pub mod astar;
pub mod bifrost;
pub mod darwinia;
pub mod generic;
pub mod hydration;
pub mod interlay;
pub mod moonbeam;
pub mod mythos;
pub mod phala;
pub mod polimec;
pub mod system;

use super::{Context, TransferInput};
use crate::{
	call::numeric_id,
	error::{Error, Result},
	local::is_native_asset,
};
use serde_json::Value;

/// Numeric currency id of a registered foreign asset.
pub(crate) fn foreign_id(input: &TransferInput) -> Result<Value> {
	Ok(numeric_id(input.asset_id()?))
}

/// Chains that can only move their own native asset.
pub(crate) fn ensure_native(ctx: &Context<'_>, input: &TransferInput) -> Result<()> {
	if is_native_asset(ctx, input)? {
		return Ok(())
	}
	Err(Error::InvalidCurrency(format!(
		"{} does not support currency {}",
		input.origin, input.asset.symbol
	)))
}
