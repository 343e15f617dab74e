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

//! Picks the pallet that carries a transfer and drives the builder to a finished call.
//!
//! The order is fixed: relay chain origins delegate to the destination, same chain transfers stay
//! local, then the generic token pallet is tried, then a bridge specific pallet, and finally the
//! cross-consensus pallet. Builders that need chain data return a [`Query`], answered here
//! through the [`ChainClient`].

use crate::{
	call::SerializedCall,
	client::{BridgeStatus, ChainClient, DryRunOutcome},
	error::{Error, Result},
	ethereum, keep_alive,
	location::{versioned_beneficiary, versioned_destination},
	options::TransferOptions,
	pallets::xtokens,
	resolve::resolve,
	strategy::{
		defaults, strategy, ChainStrategy, Context, CrossConsensusInput, FeeEstimate, Prepared,
		Query, TransferInput,
	},
};
use tracing::{debug, info, warn};
use xcm_transfer_assets::AssetRegistry;
use xcm_transfer_primitives::{Chain, PalletFamily};

const LOG_TARGET: &str = "xcm::transfer::dispatch";

/// Builds the call that moves `options.amount` of the currency from origin to destination.
pub async fn send(
	client: &dyn ChainClient,
	registry: &dyn AssetRegistry,
	options: &TransferOptions,
) -> Result<SerializedCall> {
	let ctx = Context::new(client, registry);
	let (input, call) = prepare(&ctx, options).await?;

	if options.keep_alive {
		keep_alive::check(&ctx, &input).await?;
	}
	info!(target: LOG_TARGET, module = %call.module, method = %call.method, "Transfer built");
	Ok(call)
}

/// Builds the transfer and simulates it on the origin as `options.sender_address`.
///
/// A failing simulation is reported in the outcome, not as an error.
pub async fn dry_run(
	client: &dyn ChainClient,
	registry: &dyn AssetRegistry,
	options: &TransferOptions,
) -> Result<DryRunOutcome> {
	let ctx = Context::new(client, registry);
	let (input, call) = prepare(&ctx, options).await?;
	let sender = input.sender_address.as_deref().ok_or_else(|| {
		Error::InvalidParameter("a sender address is required for a dry run".into())
	})?;

	let outcome = client.dry_run(input.origin, &call, sender).await?;
	if let DryRunOutcome::Failure { reason } = &outcome {
		warn!(target: LOG_TARGET, origin = %input.origin, %reason, "Dry run failed");
	}
	Ok(outcome)
}

/// Resolves `options` and builds its call, answering the builder's chain queries on the way.
pub async fn prepare(
	ctx: &Context<'_>,
	options: &TransferOptions,
) -> Result<(TransferInput, SerializedCall)> {
	let input = resolve(ctx, options)?;
	info!(
		target: LOG_TARGET,
		origin = %input.origin,
		destination = %input.destination,
		scenario = %input.scenario,
		symbol = %input.asset.symbol,
		"Building transfer"
	);

	if crosses_ethereum_bridge(ctx, &input) {
		ensure_bridge_running(ctx.client).await?;
	}

	let mut prepared = build(ctx, &input)?;
	let call = loop {
		match prepared {
			Prepared::Ready(call) => break call,
			Prepared::Pending(pending) => {
				debug!(target: LOG_TARGET, query = ?pending.query, "Answering builder query");
				let estimate = answer(ctx.client, &pending.query).await?;
				prepared = pending.resume(estimate)?;
			},
		}
	};
	Ok((input, call))
}

/// Builds the call for an already resolved input, without talking to the chain.
pub fn build(ctx: &Context<'_>, input: &TransferInput) -> Result<Prepared> {
	let origin = input.origin;
	if origin.is_relay_chain() {
		return relay_to_chain(ctx, input).map(Into::into)
	}

	let strategy = strategy(origin).ok_or(Error::NoXcmSupportImplemented(origin))?;

	if input.is_destination(Chain::Polimec) &&
		!matches!(origin, Chain::AssetHubPolkadot | Chain::Hydration)
	{
		return Err(Error::InvalidParameter(format!(
			"Polimec only accepts transfers from AssetHubPolkadot and Hydration, not {origin}"
		)))
	}

	if input.is_destination(origin) {
		debug!(target: LOG_TARGET, %origin, "Local transfer");
		return (strategy.local_transfer)(ctx, input).map(Into::into)
	}

	if let Some(transfer) = strategy.generic_token {
		if (strategy.can_use_generic_token)(ctx, input) {
			debug!(target: LOG_TARGET, %origin, "Using the generic token pallet");
			let call = if input.to_asset_hub() && !origin.is_bifrost() {
				xtokens::transfer_multiasset(ctx, input)?
			} else {
				transfer(ctx, input)?
			};
			return Ok(call.into())
		}
	}

	if let Some(transfer) = strategy.bridge_protocol {
		debug!(target: LOG_TARGET, %origin, "Using the bridge protocol pallet");
		return transfer(ctx, input).map(Into::into)
	}

	let Some(transfer) = strategy.cross_consensus else {
		warn!(target: LOG_TARGET, %origin, "No pallet can carry the transfer");
		return Err(Error::NoXcmSupportImplemented(origin))
	};
	let cross = cross_consensus_input(ctx, input, strategy)?;

	if is_ethereum_asset(ctx, input) &&
		input.fee_asset.is_none() &&
		!origin.is_asset_hub() &&
		!input.is_destination(Chain::Ethereum)
	{
		debug!(target: LOG_TARGET, %origin, "Routing an Ethereum asset through AssetHub");
		return if input.to_asset_hub() {
			ethereum::transfer_to_ethereum(ctx, &cross, true)
		} else {
			ethereum::transfer_via_asset_hub(ctx, &cross)
		}
	}

	debug!(target: LOG_TARGET, %origin, "Using the cross-consensus pallet");
	transfer(ctx, &cross)
}

/// Relay chains delegate to the destination's strategy, which knows whether it takes reserve
/// transfers or teleports from its relay.
fn relay_to_chain(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	let origin = input.origin;
	let Some(target) = input.destination_chain() else {
		return defaults::relay_to_chain(ctx, input)
	};
	if target == origin {
		return defaults::local_transfer(ctx, input)
	}
	let strategy = strategy(target).ok_or(Error::NodeNotSupported(target))?;
	(strategy.relay_to_chain)(ctx, input)
}

/// Default destination, beneficiary and assets of a cross-consensus call.
pub(crate) fn cross_consensus_input(
	ctx: &Context<'_>,
	input: &TransferInput,
	strategy: &ChainStrategy,
) -> Result<CrossConsensusInput> {
	let version = input.version;
	Ok(CrossConsensusInput {
		destination: versioned_destination(
			input.origin,
			&input.destination,
			input.scenario,
			version,
			input.para_id_to,
		)?,
		beneficiary: versioned_beneficiary(
			ctx.client,
			&input.address,
			input.scenario,
			Some(PalletFamily::CrossConsensusMessage),
			version,
			input.para_id_to,
		)?,
		assets: (strategy.currency_spec)(ctx, input)?,
		transfer: input.clone(),
	})
}

fn is_ethereum_asset(ctx: &Context<'_>, input: &TransferInput) -> bool {
	input.asset.location.as_ref().map_or(false, |location| ctx.registry.is_ethereum_asset(location))
}

/// Transfers to Ethereum, and Ethereum assets arriving on AssetHub from elsewhere.
fn crosses_ethereum_bridge(ctx: &Context<'_>, input: &TransferInput) -> bool {
	input.is_destination(Chain::Ethereum) ||
		(input.to_asset_hub() && !input.origin.is_asset_hub() && is_ethereum_asset(ctx, input))
}

async fn ensure_bridge_running(client: &dyn ChainClient) -> Result<()> {
	match client.bridge_status().await? {
		BridgeStatus::Normal => Ok(()),
		BridgeStatus::Halted => {
			warn!(target: LOG_TARGET, "Ethereum bridge is halted");
			Err(Error::BridgeHalted)
		},
	}
}

async fn answer(client: &dyn ChainClient, query: &Query) -> Result<FeeEstimate> {
	match query {
		Query::DryRun { chain, call, sender } => match client.dry_run(*chain, call, sender).await? {
			DryRunOutcome::Success { fee, destination_fee } =>
				Ok(FeeEstimate { fee, destination_fee }),
			DryRunOutcome::Failure { reason } => Err(Error::DryRunFailed(reason)),
		},
		Query::EthereumBridgeFees { payer } => {
			let fee = client.ethereum_bridge_fees(*payer).await?;
			Ok(FeeEstimate { fee, destination_fee: None })
		},
	}
}
