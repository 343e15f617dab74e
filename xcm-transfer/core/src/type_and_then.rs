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

//! `transfer_assets_using_type_and_then` calls.

use crate::{
	call::SerializedCall,
	error::Result,
	pallets::{polkadot_xcm::MODULE, PolkadotXcmMethod},
	strategy::{Context, CrossConsensusInput, TransferInput},
};
use serde::{Deserialize, Serialize};
use xcm_transfer_primitives::{
	create_multi_asset, sort_multi_assets, AssetFilter, Chain, Instruction, MultiAsset,
	MultiLocation, Version, Versioned, WeightLimit,
};

/// Relay native asset sent along to pay for the remote execution, 0.5 DOT.
pub const DOT_HOP_FEE: u128 = 5_000_000_000;

/// Who holds the reserve of the assets moved by a type-and-then call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferType {
	Teleport,
	LocalReserve,
	DestinationReserve,
}

/// Parameters of a type-and-then call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeAndThen {
	pub dest: MultiLocation,
	pub assets: Vec<MultiAsset>,
	pub assets_transfer_type: TransferType,
	pub remote_fees_id: MultiLocation,
	pub fees_transfer_type: TransferType,
	pub custom_xcm_on_dest: Vec<Instruction>,
}

impl TypeAndThen {
	/// Both the assets and the fees use `transfer_type`.
	pub fn new(
		dest: MultiLocation,
		assets: Vec<MultiAsset>,
		transfer_type: TransferType,
		remote_fees_id: MultiLocation,
		custom_xcm_on_dest: Vec<Instruction>,
	) -> Self {
		Self {
			dest,
			assets,
			assets_transfer_type: transfer_type,
			remote_fees_id,
			fees_transfer_type: transfer_type,
			custom_xcm_on_dest,
		}
	}

	pub fn into_call(self, input: &TransferInput, version: Version) -> Result<SerializedCall> {
		let method = PolkadotXcmMethod::TransferAssetsUsingTypeAndThen;
		self.into_pallet_call(input.module(MODULE), input.method(method.name()), version)
	}

	/// Same call on another pallet, e.g. `XcmPallet` on a relay chain.
	pub fn into_pallet_call(
		self,
		module: String,
		method: String,
		version: Version,
	) -> Result<SerializedCall> {
		SerializedCall::new(module, method)
			.with("dest", Versioned::new(version, self.dest.for_version(version)))?
			.with("assets", Versioned::new(version, self.assets))?
			.with("assets_transfer_type", self.assets_transfer_type)?
			.with("remote_fees_id", Versioned::new(version, self.remote_fees_id))?
			.with("fees_transfer_type", self.fees_transfer_type)?
			.with("custom_xcm_on_dest", Versioned::new(version, self.custom_xcm_on_dest))?
			.with("weight_limit", WeightLimit::Unlimited)
	}
}

/// `DepositAsset` of everything left in holding, up to `count` assets.
pub fn deposit_all_counted(count: u32, beneficiary: MultiLocation) -> Instruction {
	Instruction::DepositAsset { assets: AssetFilter::all_counted(count), beneficiary }
}

/// An AssetHub asset leaving its local reserve.
///
/// Anything but the relay asset travels together with [`DOT_HOP_FEE`] to pay on the
/// destination, except towards Bifrost which buys execution with the asset itself.
pub fn local_reserve(ctx: &Context<'_>, input: &CrossConsensusInput) -> Result<SerializedCall> {
	let transfer = &input.transfer;
	let version = transfer.version;
	let para_id = ctx.registry.para_id(transfer.origin)?;
	let location = transfer.asset_location()?.localize(Some(para_id));
	let is_relay_asset = location == MultiLocation::parent();
	let to_bifrost = transfer.destination_chain().map_or(false, Chain::is_bifrost);

	let mut assets = vec![create_multi_asset(version, transfer.amount, location.clone())];
	let remote_fees_id = if is_relay_asset || !to_bifrost {
		if !is_relay_asset {
			assets.push(create_multi_asset(version, DOT_HOP_FEE, MultiLocation::parent()));
			sort_multi_assets(&mut assets);
		}
		MultiLocation::parent()
	} else {
		location
	};

	let deposit = Instruction::DepositAsset {
		assets: AssetFilter::all(),
		beneficiary: input.beneficiary.value().clone(),
	};
	TypeAndThen::new(
		input.destination.value().clone(),
		assets,
		TransferType::LocalReserve,
		remote_fees_id,
		vec![deposit],
	)
	.into_call(transfer, version)
}

/// The relay native asset sent to the chain holding its reserve, e.g. DOT back to AssetHub.
pub fn destination_reserve(input: &CrossConsensusInput) -> Result<SerializedCall> {
	let transfer = &input.transfer;
	let version = transfer.version;
	TypeAndThen::new(
		input.destination.value().clone(),
		vec![create_multi_asset(version, transfer.amount, MultiLocation::parent())],
		TransferType::DestinationReserve,
		MultiLocation::parent(),
		vec![deposit_all_counted(1, input.beneficiary.value().clone())],
	)
	.into_call(transfer, version)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{options::Address, scenario::Scenario};
	use pretty_assertions::assert_eq;
	use serde_json::json;
	use xcm_transfer_assets::AssetInfo;
	use xcm_transfer_primitives::{create_multi_asset, Chain, Junction};

	fn input() -> TransferInput {
		TransferInput {
			origin: Chain::Hydration,
			destination: Chain::AssetHubPolkadot.into(),
			scenario: Scenario::ChainToChain,
			asset: AssetInfo {
				symbol: "DOT".into(),
				asset_id: Some("5".into()),
				decimals: Some(10),
				location: Some(MultiLocation::parent()),
				existential_deposit: None,
				alias: None,
				is_native: false,
			},
			amount: 10_000_000_000,
			address: Address::Account("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY".into()),
			sender_address: None,
			ah_address: None,
			fee_asset: None,
			overridden: None,
			version: Version::V4,
			para_id_to: Some(1000),
			pallet: None,
			method: None,
		}
	}

	#[test]
	fn encodes_all_parameters() {
		// given
		let beneficiary = MultiLocation::from_junctions(
			0,
			vec![Junction::AccountId32 { network: None, id: "0x01".into() }],
		)
		.unwrap();
		let call = TypeAndThen::new(
			MultiLocation::from_junctions(1, vec![Junction::Parachain(1000)]).unwrap(),
			vec![create_multi_asset(Version::V4, 10_000_000_000, MultiLocation::parent())],
			TransferType::DestinationReserve,
			MultiLocation::parent(),
			vec![deposit_all_counted(1, beneficiary)],
		);

		// then
		let call = call.into_call(&input(), Version::V4).unwrap();
		assert_eq!(call.module, "PolkadotXcm");
		assert_eq!(call.method, "transfer_assets_using_type_and_then");
		assert_eq!(
			serde_json::to_value(&call.parameters).unwrap(),
			json!({
				"dest": { "V4": { "parents": 1, "interior": { "X1": [{ "Parachain": 1000 }] } } },
				"assets": { "V4": [{
					"id": { "parents": 1, "interior": "Here" },
					"fun": { "Fungible": "10000000000" }
				}] },
				"assets_transfer_type": "DestinationReserve",
				"remote_fees_id": { "V4": { "parents": 1, "interior": "Here" } },
				"fees_transfer_type": "DestinationReserve",
				"custom_xcm_on_dest": { "V4": [{ "DepositAsset": {
					"assets": { "Wild": { "AllCounted": 1 } },
					"beneficiary": {
						"parents": 0,
						"interior": { "X1": [{ "AccountId32": { "id": "0x01" } }] }
					}
				} }] },
				"weight_limit": "Unlimited"
			})
		);
	}
}
