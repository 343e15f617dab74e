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

//! Pre-flight checks run before any call is built.
//!
//! Each check stands alone and fails with its own error kind. None of them touch the network.

use crate::{
	client::ChainClient,
	currency::{validate_override_assets, Currency},
	error::{Error, Result},
	options::{Address, TransferOptions},
};
use tracing::debug;
use xcm_transfer_assets::{AssetInfo, AssetRegistry, SymbolSpecifier};
use xcm_transfer_primitives::{Chain, Destination, Pallet};

const LOG_TARGET: &str = "xcm::transfer::validation";

/// Chains with a route into the Ethereum bridge.
pub const ETHEREUM_ORIGINS: [Chain; 5] = [
	Chain::AssetHubPolkadot,
	Chain::Hydration,
	Chain::BifrostPolkadot,
	Chain::Moonbeam,
	Chain::Mythos,
];

/// The Polkadot and Kusama AssetHubs talking over their bridge.
pub fn is_bridge_transfer(origin: Chain, destination: &Destination) -> bool {
	match destination.chain() {
		Some(target) => matches!(
			(origin, target),
			(Chain::AssetHubPolkadot, Chain::AssetHubKusama) |
				(Chain::AssetHubKusama, Chain::AssetHubPolkadot)
		),
		None => false,
	}
}

/// Override lists need more than one entry and exactly one fee asset, which makes a separate
/// fee asset redundant.
pub fn validate_currency(currency: &Currency, fee_asset: Option<&Currency>) -> Result<()> {
	let Currency::MultiAsset(assets) = currency else { return Ok(()) };
	if assets.is_empty() {
		return Err(Error::InvalidCurrency("overridden multi assets cannot be empty".into()))
	}
	validate_override_assets(assets)?;
	if fee_asset.is_some() {
		return Err(Error::InvalidCurrency(
			"a fee asset cannot be given next to an overridden asset list".into(),
		))
	}
	Ok(())
}

pub fn validate_destination(
	registry: &dyn AssetRegistry,
	origin: Chain,
	destination: &Destination,
) -> Result<()> {
	let Some(target) = destination.chain() else { return Ok(()) };

	if origin.is_relay_chain() && target.is_relay_chain() && origin != target {
		return Err(Error::IncompatibleNodes(
			"direct relay chain to relay chain transfers are not supported, use the Polkadot <-> \
			 Kusama bridge through AssetHub"
				.into(),
		))
	}

	if target == Chain::Ethereum {
		if ETHEREUM_ORIGINS.contains(&origin) {
			return Ok(())
		}
		return Err(Error::IncompatibleNodes(format!(
			"transfers to Ethereum are not supported from {origin}"
		)))
	}

	if target.is_relay_chain() || is_bridge_transfer(origin, destination) {
		return Ok(())
	}

	let origin_relay = registry.relay_chain_symbol(origin)?;
	let target_relay = registry.relay_chain_symbol(target)?;
	if origin_relay != target_relay {
		return Err(Error::IncompatibleNodes(format!(
			"{origin} ({origin_relay}) and {target} ({target_relay}) do not share a relay chain"
		)))
	}
	Ok(())
}

/// EVM chains take Ethereum addresses and nothing else, every other chain the opposite.
pub fn validate_address(
	client: &dyn ChainClient,
	registry: &dyn AssetRegistry,
	address: &Address,
	destination: &Destination,
) -> Result<()> {
	let (Address::Account(account), Some(target)) = (address, destination.chain()) else {
		return Ok(())
	};

	let is_evm = target.is_external() || registry.is_evm(target);
	let is_ethereum = client.is_ethereum_address(account);
	match (is_evm, is_ethereum) {
		(true, false) => Err(Error::InvalidAddress(format!(
			"{target} is an EVM chain and requires an Ethereum address, got {account}"
		))),
		(false, true) => Err(Error::InvalidAddress(format!(
			"{target} is not an EVM chain and does not accept the Ethereum address {account}"
		))),
		_ => Ok(()),
	}
}

/// Whether the asset has to be found in the origin's table.
///
/// The check is switched off by the caller, or automatically for symbols the origin does not
/// list when sending to AssetHub, which may hold assets the origin table does not know.
pub fn asset_check_enabled(registry: &dyn AssetRegistry, options: &TransferOptions) -> bool {
	if options.disable_asset_check {
		return false
	}
	match (&options.currency, options.destination.chain()) {
		(Currency::Symbol(symbol), Some(target)) if target.is_asset_hub() =>
			registry.has_support_for_asset(options.origin, symbol.symbol()),
		_ => true,
	}
}

/// Only plain symbols can be used verbatim without the table.
pub fn validate_asset_specifiers(asset_check: bool, currency: &Currency) -> Result<()> {
	if asset_check {
		return Ok(())
	}
	match currency {
		Currency::Symbol(symbol) if !symbol.is_plain() => Err(Error::InvalidCurrency(
			"symbol specifiers are not supported when the asset check is disabled, use a plain \
			 symbol instead"
				.into(),
		)),
		Currency::Id(_) => Err(Error::InvalidCurrency(
			"asset ids are not supported when the asset check is disabled, use a plain symbol \
			 instead"
				.into(),
		)),
		_ => Ok(()),
	}
}

/// The destination must list the asset.
///
/// Chains transferring with the generic token pallet cannot deliver an AssetHub native asset
/// back to AssetHub; Bifrost, and DOT from Hydration, are the exceptions.
pub fn validate_asset_support(
	registry: &dyn AssetRegistry,
	options: &TransferOptions,
	asset_check: bool,
	asset: &AssetInfo,
) -> Result<()> {
	let origin = options.origin;
	let Some(target) = options.destination.chain() else { return Ok(()) };
	if is_bridge_transfer(origin, &options.destination) {
		return Ok(())
	}

	let by_symbol = matches!(options.currency, Currency::Symbol(_));
	let generic_origin = registry.default_pallet(origin).ok().flatten() == Some(Pallet::XTokens);
	if target.is_asset_hub() && generic_origin && !origin.is_bifrost() && by_symbol {
		let hub_native = registry.chain_assets(target)?.native_assets.iter().any(|native| {
			native.symbol.eq_ignore_ascii_case(&asset.symbol) &&
				!(origin == Chain::Hydration && native.symbol == "DOT")
		});
		if hub_native {
			return Err(Error::InvalidCurrency(format!(
				"{} is not supported for transfers to {target}",
				asset.symbol
			)))
		}
	}

	let skip = target.is_relay_chain() ||
		target.is_external() ||
		!asset_check ||
		matches!(options.currency, Currency::Id(_) | Currency::MultiAsset(_));
	if !skip && !asset.symbol.is_empty() && !registry.has_support_for_asset(target, &asset.symbol)
	{
		debug!(target: LOG_TARGET, %target, symbol = %asset.symbol, "Asset missing on destination");
		return Err(Error::InvalidCurrency(format!(
			"destination chain {target} does not support currency {}",
			asset.symbol
		)))
	}
	Ok(())
}

/// Human readable name of the currency for error messages.
pub(crate) fn describe(currency: &Currency) -> String {
	match currency {
		Currency::Symbol(SymbolSpecifier::Plain(symbol)) => symbol.clone(),
		other => other.to_string(),
	}
}
