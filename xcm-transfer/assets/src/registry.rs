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

//! The metadata lookup interface.

use crate::{
	error::Error,
	types::{AssetInfo, ChainAssets},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use xcm_transfer_primitives::{Chain, MultiLocation, Pallet};

/// How a caller named an asset by symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SymbolSpecifier {
	/// Any asset with this symbol, native or foreign.
	Plain(String),
	/// Only the chain's native assets.
	Native {
		#[serde(rename = "Native")]
		symbol: String,
	},
	/// Only foreign assets.
	Foreign {
		#[serde(rename = "Foreign")]
		symbol: String,
	},
	/// A foreign asset by its alias, for symbols registered more than once.
	ForeignAbstract {
		#[serde(rename = "ForeignAbstract")]
		alias: String,
	},
}

impl SymbolSpecifier {
	pub fn symbol(&self) -> &str {
		match self {
			SymbolSpecifier::Plain(symbol) |
			SymbolSpecifier::Native { symbol } |
			SymbolSpecifier::Foreign { symbol } => symbol,
			SymbolSpecifier::ForeignAbstract { alias } => alias,
		}
	}

	pub fn is_plain(&self) -> bool {
		matches!(self, SymbolSpecifier::Plain(_))
	}
}

/// An asset lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetQuery {
	Symbol(SymbolSpecifier),
	Id(String),
	Location(MultiLocation),
}

impl fmt::Display for AssetQuery {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AssetQuery::Symbol(SymbolSpecifier::Plain(symbol)) => write!(f, "symbol {symbol}"),
			AssetQuery::Symbol(SymbolSpecifier::Native { symbol }) => write!(f, "native {symbol}"),
			AssetQuery::Symbol(SymbolSpecifier::Foreign { symbol }) =>
				write!(f, "foreign {symbol}"),
			AssetQuery::Symbol(SymbolSpecifier::ForeignAbstract { alias }) =>
				write!(f, "foreign alias {alias}"),
			AssetQuery::Id(id) => write!(f, "id {id}"),
			AssetQuery::Location(location) => write!(f, "location {location:?}"),
		}
	}
}

/// Lower-case a symbol and drop the `xc` prefix Moonbeam style chains put on foreign assets.
pub fn normalize_symbol(symbol: &str) -> String {
	let lower = symbol.trim().to_lowercase();
	match lower.strip_prefix("xc") {
		Some(rest) if !rest.is_empty() => rest.to_string(),
		_ => lower,
	}
}

fn symbol_matches(asset: &AssetInfo, symbol: &str) -> bool {
	normalize_symbol(&asset.symbol) == normalize_symbol(symbol)
}

fn single<'a>(
	chain: Chain,
	query: &AssetQuery,
	mut matches: impl Iterator<Item = &'a AssetInfo>,
) -> Result<Option<&'a AssetInfo>, Error> {
	match (matches.next(), matches.next()) {
		(Some(_), Some(_)) => Err(Error::AmbiguousAsset { chain, query: query.to_string() }),
		(first, _) => Ok(first),
	}
}

/// Read-only access to chain and asset metadata.
///
/// Only [`AssetRegistry::chain_assets`] has to be provided; every other lookup is derived from it.
pub trait AssetRegistry: Send + Sync {
	/// Complete metadata of `chain`.
	fn chain_assets(&self, chain: Chain) -> Result<&ChainAssets, Error>;

	fn para_id(&self, chain: Chain) -> Result<u32, Error> {
		Ok(self.chain_assets(chain)?.para_id)
	}

	fn native_asset_symbol(&self, chain: Chain) -> Result<&str, Error> {
		Ok(&self.chain_assets(chain)?.native_asset_symbol)
	}

	fn relay_chain_symbol(&self, chain: Chain) -> Result<&str, Error> {
		Ok(&self.chain_assets(chain)?.relay_chain_asset_symbol)
	}

	/// Chains with Ethereum style 20 byte accounts.
	fn is_evm(&self, chain: Chain) -> bool {
		self.chain_assets(chain).map_or(false, |assets| assets.is_evm)
	}

	fn default_pallet(&self, chain: Chain) -> Result<Option<Pallet>, Error> {
		Ok(self.chain_assets(chain)?.default_pallet)
	}

	fn supported_pallets(&self, chain: Chain) -> Result<&[Pallet], Error> {
		Ok(&self.chain_assets(chain)?.supported_pallets)
	}

	/// Existential deposit of `asset` on `chain`, falling back to the chain's native deposit for
	/// native assets.
	fn existential_deposit(&self, chain: Chain, asset: &AssetInfo) -> Option<u128> {
		if asset.existential_deposit.is_some() {
			return asset.existential_deposit
		}
		let assets = self.chain_assets(chain).ok()?;
		asset.is_native.then_some(assets.existential_deposit).flatten()
	}

	/// Id of the first foreign asset with `symbol`.
	fn asset_id(&self, chain: Chain, symbol: &str) -> Result<Option<&str>, Error> {
		Ok(self
			.chain_assets(chain)?
			.other_assets
			.iter()
			.find(|asset| symbol_matches(asset, symbol))
			.and_then(|asset| asset.asset_id.as_deref()))
	}

	fn has_support_for_asset(&self, chain: Chain, symbol: &str) -> bool {
		self.chain_assets(chain)
			.map_or(false, |assets| assets.all_assets().any(|asset| symbol_matches(asset, symbol)))
	}

	/// Resolve `query` on `chain`. Symbols matching both a native and a foreign asset, or more
	/// than one foreign asset, are ambiguous.
	fn find_asset(&self, chain: Chain, query: &AssetQuery) -> Result<Option<&AssetInfo>, Error> {
		let assets = self.chain_assets(chain)?;
		let natives = || assets.native_assets.iter();
		let others = || assets.other_assets.iter();

		match query {
			AssetQuery::Symbol(SymbolSpecifier::Plain(symbol)) => {
				let native = single(chain, query, natives().filter(|a| symbol_matches(a, symbol)))?;
				let foreign = single(chain, query, others().filter(|a| symbol_matches(a, symbol)))?;
				match (native, foreign) {
					(Some(_), Some(_)) =>
						Err(Error::AmbiguousAsset { chain, query: query.to_string() }),
					(native, foreign) => Ok(native.or(foreign)),
				}
			},
			AssetQuery::Symbol(SymbolSpecifier::Native { symbol }) =>
				single(chain, query, natives().filter(|a| symbol_matches(a, symbol))),
			AssetQuery::Symbol(SymbolSpecifier::Foreign { symbol }) =>
				single(chain, query, others().filter(|a| symbol_matches(a, symbol))),
			AssetQuery::Symbol(SymbolSpecifier::ForeignAbstract { alias }) => single(
				chain,
				query,
				others().filter(|a| {
					a.alias.as_deref().map_or(false, |x| x.eq_ignore_ascii_case(alias))
				}),
			),
			AssetQuery::Id(id) => Ok(others()
				.chain(natives())
				.find(|asset| asset.asset_id.as_deref() == Some(id.as_str()))),
			AssetQuery::Location(location) => self.find_asset_by_location(chain, location),
		}
	}

	fn find_asset_by_location(
		&self,
		chain: Chain,
		location: &MultiLocation,
	) -> Result<Option<&AssetInfo>, Error> {
		Ok(self
			.chain_assets(chain)?
			.all_assets()
			.find(|asset| asset.location.as_ref() == Some(location)))
	}

	/// The counterpart of an origin asset on `destination`, by location when known.
	fn find_asset_on_destination(
		&self,
		asset: &AssetInfo,
		destination: Chain,
	) -> Result<Option<&AssetInfo>, Error> {
		if let Some(location) = &asset.location {
			if let Some(found) = self.find_asset_by_location(destination, location)? {
				return Ok(Some(found))
			}
		}
		let query = AssetQuery::Symbol(SymbolSpecifier::Plain(asset.symbol.clone()));
		match self.find_asset(destination, &query) {
			Err(Error::AmbiguousAsset { .. }) => Ok(None),
			other => other,
		}
	}

	/// An asset registered in the Ethereum table, i.e. bridged in over Snowbridge.
	fn is_ethereum_asset(&self, location: &MultiLocation) -> bool {
		self.find_asset_by_location(Chain::Ethereum, location).ok().flatten().is_some()
	}

	/// The chain with `para_id` under `relay`.
	fn chain_by_para_id(&self, para_id: u32, relay: Chain) -> Option<Chain> {
		Chain::all().find(|chain| {
			chain.relay_chain() == Some(relay) &&
				!chain.is_relay_chain() &&
				self.para_id(*chain).ok() == Some(para_id)
		})
	}
}
