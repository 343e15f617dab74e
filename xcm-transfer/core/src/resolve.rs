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


//! Turns caller options into a [`TransferInput`].

use crate::{
	currency::{Currency, OverriddenAsset},
	error::{Error, Result},
	options::TransferOptions,
	scenario::Scenario,
	strategy::{strategy, Context, TransferInput},
	validation::{self, describe},
};
use tracing::{debug, trace};
use xcm_transfer_assets::{AssetInfo, AssetRegistry, SymbolSpecifier};
use xcm_transfer_primitives::{Chain, MultiLocation, Version};

const LOG_TARGET: &str = "xcm::transfer::resolve";

/// Validates `options` and resolves the asset and fee asset on the origin.
pub fn resolve(ctx: &Context<'_>, options: &TransferOptions) -> Result<TransferInput> {
	let origin = options.origin;
	validation::validate_currency(&options.currency, options.fee_asset.as_ref())?;
	validation::validate_destination(ctx.registry, origin, &options.destination)?;
	validation::validate_address(ctx.client, ctx.registry, &options.address, &options.destination)?;

	let asset_check = validation::asset_check_enabled(ctx.registry, options);
	validation::validate_asset_specifiers(asset_check, &options.currency)?;

	let (asset, overridden) = resolve_asset(ctx.registry, options, asset_check)?;
	validation::validate_asset_support(ctx.registry, options, asset_check, &asset)?;
	let fee_asset = resolve_fee_asset(ctx.registry, options, &asset)?;

	if fee_asset.is_some() && overridden.is_some() && origin == Chain::Hydration {
		return Err(Error::InvalidCurrency("cannot use overridden assets with XCM execute".into()))
	}

	let target = options.destination.chain();
	let para_id_to = options
		.para_id_to
		.or_else(|| target.and_then(|chain| ctx.registry.para_id(chain).ok()));
	let input = TransferInput {
		origin,
		destination: options.destination.clone(),
		scenario: Scenario::resolve(origin, &options.destination),
		asset,
		amount: options.amount,
		address: options.address.clone(),
		sender_address: options.sender_address.clone(),
		ah_address: options.ah_address.clone(),
		fee_asset,
		overridden,
		version: options.version.unwrap_or_else(|| default_version(origin, target)),
		para_id_to,
		pallet: options.pallet.clone(),
		method: options.method.clone(),
	};
	debug!(
		target: LOG_TARGET,
		%origin,
		destination = %input.destination,
		symbol = %input.asset.symbol,
		version = ?input.version,
		"Resolved transfer input"
	);
	Ok(input)
}

/// Version spoken by the chain that builds the call: the destination for relay chain origins.
pub fn default_version(origin: Chain, target: Option<Chain>) -> Version {
	let builder = match target {
		Some(target) if origin.is_relay_chain() => target,
		_ => origin,
	};
	strategy(builder).map_or(Version::V4, |strategy| strategy.version)
}

fn unlisted(symbol: String, location: Option<MultiLocation>) -> AssetInfo {
	AssetInfo {
		symbol,
		asset_id: None,
		decimals: None,
		location,
		existential_deposit: None,
		alias: None,
		is_native: false,
	}
}

fn resolve_asset(
	registry: &dyn AssetRegistry,
	options: &TransferOptions,
	asset_check: bool,
) -> Result<(AssetInfo, Option<OverriddenAsset>)> {
	let origin = options.origin;
	let query = match &options.currency {
		Currency::MultiAsset(assets) => {
			let overridden = OverriddenAsset::Assets(assets.clone());
			return Ok((unlisted(String::new(), None), Some(overridden)))
		},
		currency => currency.query(),
	};

	if let Some(query) = query {
		if let Some(asset) = registry.find_asset(origin, &query)? {
			return Ok((asset.clone(), None))
		}
	}

	match &options.currency {
		Currency::Location(location) => {
			trace!(target: LOG_TARGET, %origin, ?location, "Unlisted location used as override");
			Ok((
				unlisted(String::new(), Some(location.clone())),
				Some(OverriddenAsset::Location(location.clone())),
			))
		},
		Currency::Symbol(SymbolSpecifier::Plain(symbol)) if !asset_check =>
			Ok((unlisted(symbol.clone(), None), None)),
		currency => Err(Error::InvalidCurrency(format!(
			"{} is not available on {origin}",
			describe(currency)
		))),
	}
}

/// A separate fee asset is paid through `transfer_assets_using_type_and_then` or XCM execute,
/// which only AssetHub, Hydration and Ethereum asset routes build.
fn resolve_fee_asset(
	registry: &dyn AssetRegistry,
	options: &TransferOptions,
	asset: &AssetInfo,
) -> Result<Option<AssetInfo>> {
	let Some(currency) = &options.fee_asset else { return Ok(None) };
	let origin = options.origin;

	let bridged =
		asset.location.as_ref().map_or(false, |location| registry.is_ethereum_asset(location));
	if !(origin.is_asset_hub() || origin == Chain::Hydration || bridged) {
		return Err(Error::InvalidParameter(format!(
			"a fee asset is not supported for transfers from {origin}"
		)))
	}

	let query = currency
		.query()
		.ok_or_else(|| Error::InvalidCurrency("a fee asset cannot be an asset list".into()))?;
	let fee_asset = registry.find_asset(origin, &query)?.ok_or_else(|| {
		let currency = describe(currency);
		Error::InvalidCurrency(format!("fee asset {currency} is not available on {origin}"))
	})?;
	Ok(Some(fee_asset.clone()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::{OfflineClient, ALICE};
	use pretty_assertions::assert_eq;
	use xcm_transfer_assets::StaticAssetRegistry;
	use xcm_transfer_primitives::{create_x1_payload, Destination, Junction, Parents};

	fn run(options: &TransferOptions) -> Result<TransferInput> {
		let registry = StaticAssetRegistry::bundled().unwrap();
		resolve(&Context::new(&OfflineClient, registry), options)
	}

	#[test]
	fn symbol_resolves_on_the_origin() {
		let options =
			TransferOptions::new(Chain::Hydration, Chain::Acala, Currency::symbol("DOT"), 10, ALICE);

		let input = run(&options).unwrap();

		assert_eq!(input.asset.symbol, "DOT");
		assert_eq!(input.scenario, Scenario::ChainToChain);
		assert_eq!(input.para_id_to, Some(2000));
		assert_eq!(input.version, strategy(Chain::Hydration).unwrap().version);
		assert!(input.overridden.is_none());
	}

	#[test]
	fn relay_origins_speak_the_destination_version() {
		assert_eq!(
			default_version(Chain::Polkadot, Some(Chain::Hydration)),
			strategy(Chain::Hydration).unwrap().version
		);
		assert_eq!(default_version(Chain::Polkadot, None), Version::V4);
	}

	#[test]
	fn unknown_symbols_are_refused() {
		let options =
			TransferOptions::new(Chain::Hydration, Chain::Acala, Currency::symbol("NOPE"), 10, ALICE);

		assert!(matches!(run(&options), Err(Error::InvalidCurrency(_))));
	}

	#[test]
	fn unchecked_symbols_pass_through() {
		// given
		let mut options =
			TransferOptions::new(Chain::Hydration, Chain::Acala, Currency::symbol("NOPE"), 10, ALICE);
		options.disable_asset_check = true;

		// then
		let input = run(&options).unwrap();
		assert_eq!(input.asset.symbol, "NOPE");
		assert_eq!(input.asset.location, None);
	}

	#[test]
	fn unlisted_locations_become_overrides() {
		let location =
			MultiLocation::new(Parents::ONE, create_x1_payload(Version::V4, Junction::Parachain(4242)));
		let options = TransferOptions::new(
			Chain::Hydration,
			Destination::Chain(Chain::Acala),
			Currency::Location(location.clone()),
			10,
			ALICE,
		);

		let input = run(&options).unwrap();

		assert_eq!(input.overridden, Some(OverriddenAsset::Location(location)));
	}

	#[test]
	fn fee_assets_need_a_route_that_pays_them() {
		let mut options =
			TransferOptions::new(Chain::Acala, Chain::Hydration, Currency::symbol("DOT"), 10, ALICE);
		options.fee_asset = Some(Currency::symbol("ACA"));
		assert!(matches!(run(&options), Err(Error::InvalidParameter(_))));

		let mut options = TransferOptions::new(
			Chain::AssetHubPolkadot,
			Chain::Hydration,
			Currency::symbol("USDT"),
			10,
			ALICE,
		);
		options.fee_asset = Some(Currency::symbol("DOT"));
		assert_eq!(run(&options).unwrap().fee_asset.unwrap().symbol, "DOT");
	}
}
