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

//! Metadata table shipped with the crate.

use crate::{error::Error, registry::AssetRegistry, types::ChainAssets, LOG_TARGET};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use xcm_transfer_primitives::Chain;

static BUNDLED: Lazy<Result<StaticAssetRegistry, String>> = Lazy::new(|| {
	StaticAssetRegistry::from_json(include_str!("../res/assets.json")).map_err(|e| e.to_string())
});

/// An in-memory [`AssetRegistry`] keyed by chain.
#[derive(Clone, Debug, Default)]
pub struct StaticAssetRegistry {
	chains: BTreeMap<Chain, ChainAssets>,
}

impl StaticAssetRegistry {
	/// Parse a table of the form `{"<Chain>": ChainAssets, ..}`.
	pub fn from_json(json: &str) -> Result<Self, Error> {
		let chains: BTreeMap<Chain, ChainAssets> =
			serde_json::from_str(json).map_err(|e| Error::InvalidTable(e.to_string()))?;
		let registry = Self::from_chains(chains);

		log::debug!(
			target: LOG_TARGET,
			"Loaded asset metadata of {} chains",
			registry.chains.len(),
		);

		Ok(registry)
	}

	pub fn from_chains(chains: impl IntoIterator<Item = (Chain, ChainAssets)>) -> Self {
		let chains = chains
			.into_iter()
			.map(|(chain, mut assets)| {
				for asset in assets.native_assets.iter_mut() {
					asset.is_native = true;
				}
				for asset in assets.other_assets.iter_mut() {
					asset.is_native = false;
				}
				(chain, assets)
			})
			.collect();
		Self { chains }
	}

	/// The table bundled in `res/assets.json`, parsed once.
	pub fn bundled() -> Result<&'static StaticAssetRegistry, Error> {
		BUNDLED.as_ref().map_err(|e| Error::InvalidTable(e.clone()))
	}

	pub fn chains(&self) -> impl Iterator<Item = Chain> + '_ {
		self.chains.keys().copied()
	}
}

impl AssetRegistry for StaticAssetRegistry {
	fn chain_assets(&self, chain: Chain) -> Result<&ChainAssets, Error> {
		self.chains.get(&chain).ok_or(Error::UnknownChain(chain))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{AssetQuery, SymbolSpecifier};
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use xcm_transfer_primitives::{Junction, MultiLocation, Pallet, Parents};

	fn registry() -> &'static StaticAssetRegistry {
		StaticAssetRegistry::bundled().unwrap()
	}

	fn plain(symbol: &str) -> AssetQuery {
		AssetQuery::Symbol(SymbolSpecifier::Plain(symbol.into()))
	}

	#[test]
	fn bundled_table_covers_every_chain() {
		let known: Vec<_> = registry().chains().collect();
		assert_eq!(known, Chain::all().collect::<Vec<_>>());
	}

	#[test]
	fn native_flag_is_set_on_load() {
		let hydration = registry().chain_assets(Chain::Hydration).unwrap();
		assert!(hydration.native_assets.iter().all(|asset| asset.is_native));
		assert!(hydration.other_assets.iter().all(|asset| asset.is_foreign()));
	}

	#[rstest]
	#[case(Chain::Polkadot, 0)]
	#[case(Chain::AssetHubPolkadot, 1000)]
	#[case(Chain::Hydration, 2034)]
	#[case(Chain::Moonbeam, 2004)]
	fn para_ids(#[case] chain: Chain, #[case] para_id: u32) {
		assert_eq!(registry().para_id(chain).unwrap(), para_id);
	}

	#[test]
	fn pallets_and_evm_flags() {
		assert_eq!(registry().default_pallet(Chain::Hydration).unwrap(), Some(Pallet::XTokens));
		assert!(registry().supported_pallets(Chain::Polkadot).unwrap().contains(&Pallet::XcmPallet));
		assert!(registry().is_evm(Chain::Moonbeam));
		assert!(!registry().is_evm(Chain::Astar));
	}

	#[test]
	fn finds_assets_by_symbol_id_and_location() {
		// given
		let usdt = MultiLocation::from_junctions(
			Parents::ONE,
			vec![Junction::Parachain(1000), Junction::PalletInstance(50), Junction::GeneralIndex(1984)],
		)
		.unwrap();

		// then
		let by_symbol = registry().find_asset(Chain::Hydration, &plain("usdt")).unwrap().unwrap();
		assert_eq!(by_symbol.asset_id.as_deref(), Some("10"));

		let by_id =
			registry().find_asset(Chain::Hydration, &AssetQuery::Id("10".into())).unwrap().unwrap();
		assert_eq!(by_id, by_symbol);

		let by_location = registry()
			.find_asset(Chain::Hydration, &AssetQuery::Location(usdt))
			.unwrap()
			.unwrap();
		assert_eq!(by_location, by_symbol);
	}

	#[test]
	fn xc_prefix_is_ignored() {
		let dot = registry().find_asset(Chain::Moonbeam, &plain("DOT")).unwrap().unwrap();
		assert_eq!(dot.symbol, "xcDOT");
		assert!(registry().has_support_for_asset(Chain::Moonbeam, "DOT"));
	}

	#[test]
	fn duplicated_symbols_need_an_alias() {
		// given
		let usdc = plain("USDC");
		let bridged = AssetQuery::Symbol(SymbolSpecifier::ForeignAbstract { alias: "usdc2".into() });

		// then
		assert!(matches!(
			registry().find_asset(Chain::AssetHubPolkadot, &usdc),
			Err(Error::AmbiguousAsset { .. })
		));
		let found = registry().find_asset(Chain::AssetHubPolkadot, &bridged).unwrap().unwrap();
		assert_eq!(found.location.as_ref().and_then(|l| l.global_consensus()).is_some(), true);
	}

	#[test]
	fn native_and_foreign_specifiers_filter() {
		let native = AssetQuery::Symbol(SymbolSpecifier::Native { symbol: "DOT".into() });
		let foreign = AssetQuery::Symbol(SymbolSpecifier::Foreign { symbol: "DOT".into() });

		assert!(registry().find_asset(Chain::Hydration, &native).unwrap().is_none());
		assert!(registry().find_asset(Chain::Hydration, &foreign).unwrap().is_some());
		assert!(registry().find_asset(Chain::Polkadot, &native).unwrap().is_some());
	}

	#[test]
	fn destination_counterpart_is_found_by_location() {
		// given
		let origin = registry().find_asset(Chain::Hydration, &plain("WETH")).unwrap().unwrap();

		// when
		let on_ah = registry().find_asset_on_destination(origin, Chain::AssetHubPolkadot).unwrap();

		// then
		assert_eq!(on_ah.map(|asset| asset.alias.as_deref()), Some(Some("WETH1")));
		assert!(registry().is_ethereum_asset(origin.location.as_ref().unwrap()));
	}

	#[test]
	fn chain_lookup_by_para_id() {
		assert_eq!(registry().chain_by_para_id(2034, Chain::Polkadot), Some(Chain::Hydration));
		assert_eq!(registry().chain_by_para_id(1000, Chain::Kusama), Some(Chain::AssetHubKusama));
		assert_eq!(registry().chain_by_para_id(424242, Chain::Polkadot), None);
	}

	#[test]
	fn unknown_chains_are_reported() {
		let empty = StaticAssetRegistry::default();
		assert!(matches!(empty.para_id(Chain::Acala), Err(Error::UnknownChain(Chain::Acala))));
		assert!(!empty.is_evm(Chain::Moonbeam));
	}

	#[test]
	fn malformed_tables_are_rejected() {
		assert!(matches!(
			StaticAssetRegistry::from_json(r#"{ "Atlantis": {} }"#),
			Err(Error::InvalidTable(_))
		));
	}

	#[rstest]
	#[case("xcDOT", "dot")]
	#[case(" USDT ", "usdt")]
	#[case("xc", "xc")]
	#[case("vDOT", "vdot")]
	fn symbols_normalize(#[case] raw: &str, #[case] normalized: &str) {
		assert_eq!(crate::normalize_symbol(raw), normalized);
	}
}
