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

use serde::{Deserialize, Serialize};
use xcm_transfer_primitives::{amount, MultiLocation, Pallet};

/// One asset as registered on a chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
	pub symbol: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub asset_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub decimals: Option<u8>,
	/// Location of the asset as seen from a sibling parachain.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub location: Option<MultiLocation>,
	#[serde(default, with = "amount::option", skip_serializing_if = "Option::is_none")]
	pub existential_deposit: Option<u128>,
	/// Disambiguates foreign assets sharing a symbol.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub alias: Option<String>,
	/// Set for entries of [`ChainAssets::native_assets`].
	#[serde(skip)]
	pub is_native: bool,
}

impl AssetInfo {
	/// Anything that is not in the chain's native asset list.
	pub fn is_foreign(&self) -> bool {
		!self.is_native
	}
}

/// Everything known about one chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainAssets {
	pub para_id: u32,
	pub relay_chain_asset_symbol: String,
	pub native_asset_symbol: String,
	#[serde(default, rename = "isEVM")]
	pub is_evm: bool,
	#[serde(default)]
	pub default_pallet: Option<Pallet>,
	#[serde(default)]
	pub supported_pallets: Vec<Pallet>,
	#[serde(default, with = "amount::option", skip_serializing_if = "Option::is_none")]
	pub existential_deposit: Option<u128>,
	pub native_assets: Vec<AssetInfo>,
	#[serde(default)]
	pub other_assets: Vec<AssetInfo>,
}

impl ChainAssets {
	/// Native assets followed by foreign ones.
	pub fn all_assets(&self) -> impl Iterator<Item = &AssetInfo> {
		self.native_assets.iter().chain(self.other_assets.iter())
	}
}
