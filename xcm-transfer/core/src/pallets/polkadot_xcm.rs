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

//! `PolkadotXcm` calls.

use crate::{
	call::SerializedCall,
	currency::fee_asset_index,
	error::Result,
	strategy::{CrossConsensusInput, Prepared},
};
use strum::{Display, EnumString, IntoStaticStr};
use xcm_transfer_primitives::WeightLimit;

pub const MODULE: &str = "PolkadotXcm";

/// Transfer extrinsics of the cross-consensus pallets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum PolkadotXcmMethod {
	LimitedReserveTransferAssets,
	LimitedTeleportAssets,
	ReserveTransferAssets,
	TransferAssets,
	TransferAssetsUsingTypeAndThen,
	Execute,
}

impl PolkadotXcmMethod {
	pub fn name(self) -> &'static str {
		self.into()
	}
}

/// `{dest, beneficiary, assets, fee_asset_item, weight_limit?}` from the prepared locations.
pub fn transfer(
	input: &CrossConsensusInput,
	method: PolkadotXcmMethod,
	weight_limit: Option<WeightLimit>,
) -> Result<SerializedCall> {
	let transfer = &input.transfer;
	let call = SerializedCall::new(transfer.module(MODULE), transfer.method(method.name()))
		.with("dest", &input.destination)?
		.with("beneficiary", &input.beneficiary)?
		.with("assets", &input.assets)?
		.with("fee_asset_item", fee_asset_index(transfer.overridden.as_ref())?)?;

	match weight_limit {
		Some(limit) => call.with("weight_limit", limit),
		None => Ok(call),
	}
}

const UNLIMITED: Option<WeightLimit> = Some(WeightLimit::Unlimited);

pub fn limited_reserve_transfer(input: &CrossConsensusInput) -> Result<Prepared> {
	Ok(transfer(input, PolkadotXcmMethod::LimitedReserveTransferAssets, UNLIMITED)?.into())
}

pub fn limited_teleport(input: &CrossConsensusInput) -> Result<Prepared> {
	Ok(transfer(input, PolkadotXcmMethod::LimitedTeleportAssets, UNLIMITED)?.into())
}

pub fn transfer_assets(input: &CrossConsensusInput) -> Result<Prepared> {
	Ok(transfer(input, PolkadotXcmMethod::TransferAssets, UNLIMITED)?.into())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(PolkadotXcmMethod::LimitedReserveTransferAssets, "limited_reserve_transfer_assets")]
	#[case(PolkadotXcmMethod::LimitedTeleportAssets, "limited_teleport_assets")]
	#[case(PolkadotXcmMethod::TransferAssets, "transfer_assets")]
	#[case(PolkadotXcmMethod::TransferAssetsUsingTypeAndThen, "transfer_assets_using_type_and_then")]
	#[case(PolkadotXcmMethod::Execute, "execute")]
	fn method_names(#[case] method: PolkadotXcmMethod, #[case] name: &str) {
		assert_eq!(method.name(), name);
		assert_eq!(name.parse::<PolkadotXcmMethod>().unwrap(), method);
	}
}
