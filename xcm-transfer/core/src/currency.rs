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

//! Currency specifiers and the asset list builder.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use xcm_transfer_assets::{AssetQuery, SymbolSpecifier};
use xcm_transfer_primitives::{
	create_multi_asset, Junctions, MultiAsset, MultiLocation, Version, Versioned,
};

/// Index of the fee paying asset when nothing else is specified.
pub const DEFAULT_FEE_ASSET: u32 = 0;

/// How a caller names the asset to transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Currency {
	Symbol(SymbolSpecifier),
	Id(String),
	Location(MultiLocation),
	/// Several assets moving together, one of them flagged as the fee asset.
	MultiAsset(Vec<OverrideAsset>),
}

impl Currency {
	pub fn symbol(symbol: impl Into<String>) -> Self {
		Currency::Symbol(SymbolSpecifier::Plain(symbol.into()))
	}

	pub fn id(id: impl Into<String>) -> Self {
		Currency::Id(id.into())
	}

	/// The table lookup this currency stands for, `None` for override lists.
	pub fn query(&self) -> Option<AssetQuery> {
		match self {
			Currency::Symbol(symbol) => Some(AssetQuery::Symbol(symbol.clone())),
			Currency::Id(id) => Some(AssetQuery::Id(id.clone())),
			Currency::Location(location) => Some(AssetQuery::Location(location.clone())),
			Currency::MultiAsset(_) => None,
		}
	}
}

impl fmt::Display for Currency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Currency::Symbol(symbol) => f.write_str(symbol.symbol()),
			Currency::Id(id) => write!(f, "id {id}"),
			Currency::Location(location) => write!(f, "{location:?}"),
			Currency::MultiAsset(assets) => write!(f, "{} override assets", assets.len()),
		}
	}
}

/// One entry of a caller supplied asset list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideAsset {
	#[serde(flatten)]
	pub asset: MultiAsset,
	#[serde(default, rename = "isFeeAsset")]
	pub is_fee_asset: bool,
}

impl OverrideAsset {
	pub fn new(asset: MultiAsset) -> Self {
		Self { asset, is_fee_asset: false }
	}

	pub fn fee(asset: MultiAsset) -> Self {
		Self { asset, is_fee_asset: true }
	}
}

/// Caller supplied replacement for the asset part of a transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverriddenAsset {
	Location(MultiLocation),
	Assets(Vec<OverrideAsset>),
}

/// Check an override list: more than one entry and exactly one fee asset.
pub fn validate_override_assets(assets: &[OverrideAsset]) -> Result<()> {
	if assets.len() < 2 {
		return Err(Error::InvalidCurrency(
			"an asset override list must contain more than one asset".into(),
		))
	}
	match assets.iter().filter(|asset| asset.is_fee_asset).count() {
		1 => Ok(()),
		0 => Err(Error::InvalidCurrency(
			"an asset override list must flag one of its assets as the fee asset".into(),
		)),
		n => Err(Error::InvalidCurrency(format!(
			"an asset override list may flag only one fee asset, {n} are flagged"
		))),
	}
}

/// Position of the fee paying asset in the assets parameter.
pub fn fee_asset_index(overridden: Option<&OverriddenAsset>) -> Result<u32> {
	match overridden {
		None | Some(OverriddenAsset::Location(_)) => Ok(DEFAULT_FEE_ASSET),
		Some(OverriddenAsset::Assets(assets)) => {
			validate_override_assets(assets)?;
			let index = assets.iter().position(|asset| asset.is_fee_asset).unwrap_or_default();
			u32::try_from(index)
				.map_err(|_| Error::InvalidCurrency("too many override assets".into()))
		},
	}
}

/// The versioned asset list of a transfer.
///
/// Without an override the single asset is `{parents, interior}` with `Here` as the default
/// interior. A location override replaces that location; an asset list is used as given.
pub fn currency_spec(
	amount: u128,
	version: Version,
	parents: u8,
	overridden: Option<&OverriddenAsset>,
	interior: Option<Junctions>,
) -> Versioned<Vec<MultiAsset>> {
	let assets = match overridden {
		Some(OverriddenAsset::Location(location)) =>
			vec![create_multi_asset(version, amount, location.clone())],
		Some(OverriddenAsset::Assets(assets)) =>
			assets.iter().map(|entry| entry.asset.clone()).collect(),
		None => vec![create_multi_asset(
			version,
			amount,
			MultiLocation::new(parents, interior.unwrap_or(Junctions::Here)),
		)],
	};
	Versioned::new(version, assets)
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use serde_json::json;
	use xcm_transfer_primitives::{Junction, Parents};

	fn asset(index: u128) -> MultiAsset {
		create_multi_asset(
			Version::V4,
			1_000,
			MultiLocation::from_junctions(
				0,
				vec![Junction::PalletInstance(50), Junction::GeneralIndex(index)],
			)
			.unwrap(),
		)
	}

	#[test]
	fn default_spec_is_here() {
		let spec = currency_spec(500, Version::V3, Parents::ONE, None, None);

		assert_eq!(
			serde_json::to_value(&spec).unwrap(),
			json!({ "V3": [{
				"id": { "Concrete": { "parents": 1, "interior": "Here" } },
				"fun": { "Fungible": "500" }
			}] })
		);
	}

	#[test]
	fn location_override_replaces_default() {
		// given
		let location = MultiLocation::from_junctions(
			1,
			vec![Junction::Parachain(1000), Junction::PalletInstance(50), Junction::GeneralIndex(1984)],
		)
		.unwrap();
		let overridden = OverriddenAsset::Location(location.clone());

		// then
		let spec = currency_spec(7, Version::V4, Parents::ZERO, Some(&overridden), None);
		assert_eq!(spec.into_inner(), vec![create_multi_asset(Version::V4, 7, location)]);
		assert_eq!(fee_asset_index(Some(&overridden)).unwrap(), DEFAULT_FEE_ASSET);
	}

	#[rstest]
	#[case(vec![OverrideAsset::fee(asset(1)), OverrideAsset::new(asset(2))], 0)]
	#[case(vec![OverrideAsset::new(asset(1)), OverrideAsset::new(asset(2)), OverrideAsset::fee(asset(3))], 2)]
	fn fee_index_points_at_flagged_asset(#[case] assets: Vec<OverrideAsset>, #[case] expected: u32) {
		let overridden = OverriddenAsset::Assets(assets.clone());

		assert_eq!(fee_asset_index(Some(&overridden)).unwrap(), expected);
		assert_eq!(
			currency_spec(1, Version::V4, 0, Some(&overridden), None).into_inner(),
			assets.into_iter().map(|entry| entry.asset).collect::<Vec<_>>()
		);
	}

	#[rstest]
	#[case(vec![])]
	#[case(vec![OverrideAsset::fee(asset(1))])]
	#[case(vec![OverrideAsset::new(asset(1)), OverrideAsset::new(asset(2))])]
	#[case(vec![OverrideAsset::fee(asset(1)), OverrideAsset::fee(asset(2))])]
	fn malformed_override_lists(#[case] assets: Vec<OverrideAsset>) {
		let overridden = OverriddenAsset::Assets(assets);

		assert!(matches!(fee_asset_index(Some(&overridden)), Err(Error::InvalidCurrency(_))));
	}

	#[test]
	fn currency_json_shapes() {
		let currency: Currency = serde_json::from_value(json!({ "symbol": "DOT" })).unwrap();
		assert_eq!(currency, Currency::symbol("DOT"));

		let currency: Currency =
			serde_json::from_value(json!({ "symbol": { "Native": "DOT" } })).unwrap();
		assert_eq!(currency, Currency::Symbol(SymbolSpecifier::Native { symbol: "DOT".into() }));

		let currency: Currency = serde_json::from_value(json!({ "multiAsset": [
			{ "id": { "parents": 1, "interior": "Here" }, "fun": { "Fungible": "10" }, "isFeeAsset": true },
			{ "id": { "parents": 0, "interior": "Here" }, "fun": { "Fungible": "20" } }
		] }))
		.unwrap();
		let Currency::MultiAsset(assets) = currency else { panic!("expected an override list") };
		assert!(assets[0].is_fee_asset);
		assert!(!assets[1].is_fee_asset);
		assert_eq!(assets[1].asset.amount(), 20);
	}
}
