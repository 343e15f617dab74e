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

//! Fungible asset descriptions.

use crate::{
	location::MultiLocation,
	version::{Version, Versioned},
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Pre-V4 asset identifier, `{"Concrete": location}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegacyAssetId {
	Concrete(MultiLocation),
}

/// Identifier of an asset class.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetId {
	Legacy(LegacyAssetId),
	Location(MultiLocation),
}

impl AssetId {
	pub fn location(&self) -> &MultiLocation {
		match self {
			AssetId::Legacy(LegacyAssetId::Concrete(location)) | AssetId::Location(location) =>
				location,
		}
	}
}

/// Quantity of a fungible asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fungibility {
	Fungible(#[serde(with = "crate::amount")] u128),
}

/// A location and an amount.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MultiAsset {
	pub id: AssetId,
	pub fun: Fungibility,
}

impl MultiAsset {
	pub fn location(&self) -> &MultiLocation {
		self.id.location()
	}

	pub fn amount(&self) -> u128 {
		let Fungibility::Fungible(amount) = self.fun;
		amount
	}

	/// Same asset with a different amount.
	pub fn with_amount(&self, amount: u128) -> MultiAsset {
		MultiAsset { id: self.id.clone(), fun: Fungibility::Fungible(amount) }
	}
}

/// Build a fungible asset in the shape `version` expects.
pub fn create_multi_asset(version: Version, amount: u128, location: MultiLocation) -> MultiAsset {
	let id = if version.uses_bare_asset_ids() {
		AssetId::Location(location)
	} else {
		AssetId::Legacy(LegacyAssetId::Concrete(location))
	};

	MultiAsset { id, fun: Fungibility::Fungible(amount) }
}

/// A single element asset list wrapped in the version header.
pub fn create_versioned_multi_assets(
	version: Version,
	amount: u128,
	location: MultiLocation,
) -> Versioned<Vec<MultiAsset>> {
	Versioned::new(version, vec![create_multi_asset(version, amount, location)])
}

/// Sort assets the way runtimes expect inside `WithdrawAsset`.
///
/// Ordered by `parents`, then `Here` before plain paths before `GlobalConsensus` paths, then by
/// `GeneralIndex` with indexed assets first.
pub fn sort_multi_assets(assets: &mut [MultiAsset]) {
	fn priority(location: &MultiLocation) -> u8 {
		if location.is_here() {
			0
		} else if location.global_consensus().is_some() {
			2
		} else {
			1
		}
	}

	assets.sort_by(|a, b| {
		let (a, b) = (a.location(), b.location());
		a.parents
			.cmp(&b.parents)
			.then_with(|| priority(a).cmp(&priority(b)))
			.then_with(|| match (a.general_index(), b.general_index()) {
				(Some(a), Some(b)) => a.cmp(&b),
				(Some(_), None) => Ordering::Less,
				(None, Some(_)) => Ordering::Greater,
				(None, None) => Ordering::Equal,
			})
	});
}
