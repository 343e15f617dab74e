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

//! Checks that neither account is reaped by a transfer.
//!
//! Only the native asset of the destination is checked. The fee is that of sending the same
//! amount back from the destination, paid by the receiving account. The receiving account must
//! end above the destination's existential deposit after that fee, and for DOT and KSM the
//! sending account must keep its own.

use crate::{
	error::{Error, Result},
	fees::return_transfer,
	strategy::{Context, TransferInput},
};
use tracing::{debug, info};
use xcm_transfer_assets::{AssetQuery, SymbolSpecifier};

const LOG_TARGET: &str = "xcm::transfer::keep_alive";

/// Relay chain assets whose existential deposit also binds the sender.
const RELAY_SYMBOLS: [&str; 2] = ["DOT", "KSM"];

fn missing(what: &str, chain: impl std::fmt::Display) -> Error {
	Error::KeepAlive(format!("cannot obtain the {what} on {chain}"))
}

pub async fn check(ctx: &Context<'_>, input: &TransferInput) -> Result<()> {
	let Some(target) = input.destination_chain() else {
		debug!(target: LOG_TARGET, "Skipping the check for a location destination");
		return Ok(())
	};
	let sender = input.sender_address.as_deref().ok_or_else(|| {
		Error::KeepAlive("a sender address is required for the keep alive check".into())
	})?;
	let address = input.account()?;

	let native = ctx.registry.native_asset_symbol(target)?;
	if !input.is_symbol(native) {
		return Err(Error::KeepAlive(format!(
			"only the native asset {native} of {target} can be checked, got {}",
			input.asset.symbol
		)))
	}
	let query = AssetQuery::Symbol(SymbolSpecifier::Plain(native.to_string()));
	let destination_asset =
		ctx.registry.find_asset(target, &query)?.ok_or_else(|| missing("native asset", target))?;

	let fee_call = return_transfer(ctx, input, target, sender).map_err(|e| {
		Error::KeepAlive(format!("cannot build the fee transfer from {target}: {e}"))
	})?;

	let (destination_balance, origin_balance, fee) = futures::try_join!(
		ctx.client.balance(target, address, destination_asset),
		ctx.client.balance(input.origin, sender, &input.asset),
		ctx.client.estimate_fee(target, &fee_call, address),
	)?;
	let fee = fee.ok_or_else(|| missing("transfer fee", target))?;
	let destination_ed = ctx
		.registry
		.existential_deposit(target, destination_asset)
		.ok_or_else(|| missing("existential deposit", target))?;

	let received = input.amount.checked_sub(fee).ok_or_else(|| {
		Error::KeepAlive(format!("amount {} does not cover the fee {fee}", input.amount))
	})?;
	debug!(target: LOG_TARGET, %target, fee, received, destination_ed, "Checking destination");

	if destination_balance.unwrap_or_default().saturating_add(received) < destination_ed {
		return Err(Error::KeepAlive(format!(
			"the transfer would leave the account on {target} below the existential deposit \
			 {destination_ed} {native}"
		)))
	}

	if RELAY_SYMBOLS.iter().any(|symbol| input.is_symbol(symbol)) {
		let origin_ed = ctx
			.registry
			.existential_deposit(input.origin, &input.asset)
			.ok_or_else(|| missing("existential deposit", input.origin))?;
		let remaining = origin_balance.unwrap_or_default().checked_sub(received);
		if remaining.map_or(true, |remaining| remaining < origin_ed) {
			return Err(Error::KeepAlive(format!(
				"the transfer would leave the sender on {} below the existential deposit \
				 {origin_ed} {}",
				input.origin, input.asset.symbol
			)))
		}
	}

	info!(target: LOG_TARGET, origin = %input.origin, %target, "Keep alive check passed");
	Ok(())
}
