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

//! Fee and balance figures of a transfer, for sizing an amount before it is sent.
//!
//! Origin fees are the fee of the transfer itself. Destination fees are approximated by the fee
//! of sending the same amount back from the destination, paid by the receiving account.

use crate::{
	call::SerializedCall,
	client::ChainClient,
	currency::Currency,
	dispatch::{build, prepare},
	error::{Error, Result},
	local::is_native_asset,
	options::TransferOptions,
	resolve::resolve,
	strategy::{Context, Prepared, TransferInput},
};
use serde::Serialize;
use tracing::debug;
use xcm_transfer_assets::{AssetInfo, AssetQuery, AssetRegistry, SymbolSpecifier};
use xcm_transfer_primitives::{amount, Chain};

const LOG_TARGET: &str = "xcm::transfer::fees";

/// Fee paid on the origin and whether the sender's native balance covers it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginFee {
	#[serde(with = "amount")]
	pub fee: u128,
	/// Native balance minus the existential deposit covers the fee.
	pub sufficient: bool,
}

/// Fee charged on the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationFee {
	#[serde(with = "amount")]
	pub fee: u128,
	/// Whether the receiving account ends above the existential deposit. `None` when the
	/// destination does not list the asset.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sufficient: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferFees {
	pub origin: OriginFee,
	/// `None` for location destinations.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub destination: Option<DestinationFee>,
}

fn sender(input: &TransferInput) -> Result<&str> {
	input.sender_address.as_deref().ok_or_else(|| {
		Error::InvalidParameter("a sender address is required to query fees and balances".into())
	})
}

fn native_asset<'a>(registry: &'a dyn AssetRegistry, chain: Chain) -> Result<&'a AssetInfo> {
	let symbol = registry.native_asset_symbol(chain)?.to_string();
	let query = AssetQuery::Symbol(SymbolSpecifier::Native { symbol: symbol.clone() });
	registry.find_asset(chain, &query)?.ok_or_else(|| {
		Error::InvalidCurrency(format!("native asset {symbol} is not listed on {chain}"))
	})
}

async fn estimate_fee(
	client: &dyn ChainClient,
	chain: Chain,
	call: &SerializedCall,
	signer: &str,
) -> Result<u128> {
	client.estimate_fee(chain, call, signer).await?.ok_or(Error::FeeUnavailable(chain))
}

/// The same transfer sent from `target` back to the origin, into `beneficiary`.
pub(crate) fn return_transfer(
	ctx: &Context<'_>,
	input: &TransferInput,
	target: Chain,
	beneficiary: &str,
) -> Result<SerializedCall> {
	let options = TransferOptions::new(
		target,
		input.origin,
		Currency::symbol(input.asset.symbol.as_str()),
		input.amount,
		beneficiary,
	);

	match build(ctx, &resolve(ctx, &options)?)? {
		Prepared::Ready(call) => Ok(call),
		Prepared::Pending(_) => Err(Error::InvalidParameter(format!(
			"the transfer back from {target} cannot be built without querying the chain"
		))),
	}
}

async fn origin_fee(
	ctx: &Context<'_>,
	input: &TransferInput,
	call: &SerializedCall,
) -> Result<OriginFee> {
	let origin = input.origin;
	let sender = sender(input)?;
	let native = native_asset(ctx.registry, origin)?;

	let (balance, fee) = futures::try_join!(
		ctx.client.balance(origin, sender, native),
		estimate_fee(ctx.client, origin, call, sender),
	)?;
	let ed = ctx.registry.existential_deposit(origin, native).unwrap_or_default();
	let sufficient = balance.unwrap_or_default() >= ed.saturating_add(fee);

	debug!(target: LOG_TARGET, %origin, fee, sufficient, "Origin fee");
	Ok(OriginFee { fee, sufficient })
}

async fn destination_fee(
	ctx: &Context<'_>,
	input: &TransferInput,
) -> Result<Option<DestinationFee>> {
	let Some(target) = input.destination_chain() else { return Ok(None) };
	if target.is_external() {
		return Ok(Some(DestinationFee { fee: 0, sufficient: None }))
	}

	let address = input.account()?;
	let call = return_transfer(ctx, input, target, sender(input)?)?;
	let received = ctx.registry.find_asset_on_destination(&input.asset, target)?;

	let fee = estimate_fee(ctx.client, target, &call, address).await?;
	let sufficient = match received {
		Some(asset) => {
			let balance = ctx.client.balance(target, address, asset).await?.unwrap_or_default();
			let ed = ctx.registry.existential_deposit(target, asset).unwrap_or_default();
			Some(balance.saturating_add(input.amount) >= ed.saturating_add(fee))
		},
		None => None,
	};

	debug!(target: LOG_TARGET, %target, fee, ?sufficient, "Destination fee");
	Ok(Some(DestinationFee { fee, sufficient }))
}

/// Fees of the transfer on both ends.
pub async fn xcm_fee(
	client: &dyn ChainClient,
	registry: &dyn AssetRegistry,
	options: &TransferOptions,
) -> Result<TransferFees> {
	let ctx = Context::new(client, registry);
	let (input, call) = prepare(&ctx, options).await?;

	let (origin, destination) =
		futures::try_join!(origin_fee(&ctx, &input, &call), destination_fee(&ctx, &input))?;
	Ok(TransferFees { origin, destination })
}

/// Fee of the transfer on the origin only.
pub async fn origin_fee_details(
	client: &dyn ChainClient,
	registry: &dyn AssetRegistry,
	options: &TransferOptions,
) -> Result<OriginFee> {
	let ctx = Context::new(client, registry);
	let (input, call) = prepare(&ctx, options).await?;
	origin_fee(&ctx, &input, &call).await
}

/// Most the sender can send of the asset without reaping the account.
///
/// The balance less the existential deposit, less the transfer fee when the asset is the one fees
/// are paid in. Never below zero.
pub async fn transferable_amount(
	client: &dyn ChainClient,
	registry: &dyn AssetRegistry,
	options: &TransferOptions,
) -> Result<u128> {
	let ctx = Context::new(client, registry);
	let (input, call) = prepare(&ctx, options).await?;
	let origin = input.origin;
	let sender = sender(&input)?;

	let ed = registry.existential_deposit(origin, &input.asset).ok_or_else(|| {
		Error::InvalidCurrency(format!(
			"no existential deposit is known for {} on {origin}",
			input.asset.symbol
		))
	})?;
	let balance = client.balance(origin, sender, &input.asset).await?.unwrap_or_default();
	let fee = match is_native_asset(&ctx, &input)? {
		true => estimate_fee(client, origin, &call, sender).await?,
		false => 0,
	};

	debug!(target: LOG_TARGET, %origin, balance, ed, fee, "Transferable amount");
	Ok(balance.saturating_sub(ed).saturating_sub(fee))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::{context, input, ALICE};
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn return_transfer_runs_from_the_destination() {
		let ctx = context();
		let forward = input(Chain::Hydration, Chain::Polkadot.into(), "DOT");

		let call = return_transfer(&ctx, &forward, Chain::Polkadot, ALICE).unwrap();

		assert_eq!(call.module, "XcmPallet");
		assert_eq!(
			call.parameter("dest"),
			Some(&json!({ "V4": { "parents": 0, "interior": { "X1": [{ "Parachain": 2034 }] } } }))
		);
	}

	#[test]
	fn fees_serialize_amounts_as_strings() {
		let fees = TransferFees {
			origin: OriginFee { fee: 1_000, sufficient: true },
			destination: Some(DestinationFee { fee: 20, sufficient: None }),
		};

		assert_eq!(
			serde_json::to_value(fees).unwrap(),
			json!({
				"origin": { "fee": "1000", "sufficient": true },
				"destination": { "fee": "20" }
			}),
		);
	}
}
