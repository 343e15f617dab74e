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

//! Phala's `XTransfer` pallet.

use crate::{
	call::SerializedCall,
	error::{Error, Result},
	location::beneficiary,
	strategy::{Context, TransferInput},
};
use serde_json::Value;
use xcm_transfer_primitives::{create_multi_asset, MultiLocation, PalletFamily, Version};

pub const MODULE: &str = "XTransfer";

/// `XTransfer.transfer` of the origin's native asset. Encoded with V1 shapes and no version
/// header.
pub fn transfer(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	if input.destination.is_location() {
		return Err(Error::InvalidParameter(format!(
			"{} does not support location destinations",
			input.module(MODULE)
		)))
	}

	let asset = create_multi_asset(Version::V1, input.amount, MultiLocation::here());
	let dest = beneficiary(
		ctx.client,
		&input.address,
		input.scenario,
		Some(PalletFamily::GenericToken),
		Version::V1,
		input.para_id_to,
	)?
	.for_version(Version::V1);

	SerializedCall::new(input.module(MODULE), input.method("transfer"))
		.with("asset", asset)?
		.with("dest", dest)?
		.with("dest_weight", Value::Null)
}
