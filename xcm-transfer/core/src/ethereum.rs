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

//! Routes over the Snowbridge Ethereum bridge.
//!
//! Assets bridged in from Ethereum are held in reserve on AssetHub. Sending them anywhere means
//! a `DestinationReserve` hop to AssetHub first; sending them back to Ethereum adds a reserve
//! withdraw towards the bridge with a topic identifying the message.

use crate::{
	call::SerializedCall,
	error::{Error, Result},
	location::{
		chain_location, ethereum_destination, ethereum_junction, local_beneficiary,
		ASSET_HUB_PARA_ID,
	},
	options::Address,
	pallets::polkadot_xcm::{self, PolkadotXcmMethod},
	strategy::{Context, CrossConsensusInput, FeeEstimate, Pending, Prepared, Query, TransferInput},
	type_and_then::{deposit_all_counted, TransferType, TypeAndThen, DOT_HOP_FEE},
};
use blake2::{digest::consts::U32, Blake2b, Digest};
use tracing::debug;
use xcm_transfer_primitives::{
	create_multi_asset, create_versioned_multi_assets, create_x1_payload, AssetFilter, Chain,
	Instruction, Junction, MultiAsset, MultiLocation, Parents, Version, Versioned, WeightLimit,
	WildAsset, WildFungibility,
};

const LOG_TARGET: &str = "xcm::transfer::ethereum";

/// Execution fee of forwarding a message from AssetHub to a sibling, in DOT.
pub const ASSET_HUB_EXECUTION_FEE: u128 = 2_200_000_000;

/// Para id of Mythos, whose leftovers are sent back home instead of deposited on AssetHub.
const MYTHOS_PARA_ID: u32 = 3369;

type Blake2b256 = Blake2b<U32>;

/// Topic of a bridge message: blake2b-256 over the sender, origin, token, recipient and amount.
pub fn message_id(
	sender_hex: &str,
	para_id: u32,
	token: &str,
	recipient: &str,
	amount: u128,
) -> String {
	let hash = Blake2b256::new()
		.chain_update(sender_hex.as_bytes())
		.chain_update(para_id.to_string().as_bytes())
		.chain_update(token.as_bytes())
		.chain_update(recipient.as_bytes())
		.chain_update(amount.to_string().as_bytes())
		.finalize();
	format!("0x{}", hex::encode(hash))
}

pub(crate) fn require_account(input: &TransferInput) -> Result<&str> {
	input.address.as_account().ok_or_else(|| {
		Error::InvalidParameter("a location address is not supported for Ethereum transfers".into())
	})
}

pub(crate) fn require_sender(input: &TransferInput) -> Result<&str> {
	input.sender_address.as_deref().ok_or_else(|| {
		Error::InvalidParameter("a sender address is required for transfers to Ethereum".into())
	})
}

fn account_location(ctx: &Context<'_>, address: &str, version: Version) -> Result<MultiLocation> {
	local_beneficiary(ctx.client, &Address::Account(address.to_string()), version)
}

/// Fee asset list prefix and remote fee location shared by the AssetHub bound routes.
fn hop_fees(input: &TransferInput, fee: u128) -> Result<(Vec<MultiAsset>, MultiLocation)> {
	match &input.fee_asset {
		Some(fee_asset) => {
			let location = fee_asset.location.clone().ok_or_else(|| {
				Error::InvalidCurrency(format!("fee asset {} has no location", fee_asset.symbol))
			})?;
			Ok((Vec::new(), location))
		},
		None => Ok((
			vec![create_multi_asset(input.version, fee, MultiLocation::parent())],
			MultiLocation::parent(),
		)),
	}
}

/// AssetHub to Ethereum.
///
/// DOT and KSM leave through a type-and-then call with a local reserve; Ethereum native assets
/// use a plain `transfer_assets`.
pub fn from_asset_hub(ctx: &Context<'_>, input: &CrossConsensusInput) -> Result<Prepared> {
	let transfer = &input.transfer;
	let version = transfer.version;
	let location = transfer.asset_location()?.clone();
	let destination = Versioned::new(version, ethereum_destination(version));

	let native = ctx.registry.native_asset_symbol(transfer.origin)?;
	if transfer.is_symbol(native) || transfer.is_symbol("KSM") {
		let sender = require_sender(transfer)?;
		let address = require_account(transfer)?;
		let location = if transfer.is_symbol(native) { MultiLocation::parent() } else { location };
		let token = serde_json::to_string(&location)?;
		let id = message_id(
			&ctx.client.account_to_hex(sender)?,
			ctx.registry.para_id(transfer.origin)?,
			&token,
			address,
			transfer.amount,
		);
		debug!(
			target: LOG_TARGET,
			symbol = %transfer.asset.symbol,
			%id,
			"Bridging relay asset to Ethereum"
		);

		let call = TypeAndThen::new(
			destination.into_inner(),
			vec![create_multi_asset(version, transfer.amount, location.clone())],
			TransferType::LocalReserve,
			location,
			vec![
				deposit_all_counted(1, account_location(ctx, address, version)?),
				Instruction::SetTopic(id),
			],
		);
		return Ok(call.into_call(transfer, version)?.into())
	}

	let beneficiary = local_beneficiary(ctx.client, &transfer.address, version)?;
	let input = CrossConsensusInput {
		destination,
		beneficiary: Versioned::new(version, beneficiary),
		assets: create_versioned_multi_assets(version, transfer.amount, location),
		transfer: transfer.clone(),
	};
	let method = PolkadotXcmMethod::TransferAssets;
	Ok(polkadot_xcm::transfer(&input, method, Some(WeightLimit::Unlimited))?.into())
}

/// Everything [`transfer_to_ethereum`] needs once the bridge fee is known.
struct EthereumTransfer {
	input: TransferInput,
	asset: MultiAsset,
	custom_xcm: Vec<Instruction>,
}

impl EthereumTransfer {
	fn call(self, fee: u128) -> Result<SerializedCall> {
		let version = self.input.version;
		let (mut assets, remote_fees_id) = hop_fees(&self.input, fee)?;
		assets.push(self.asset);
		TypeAndThen::new(
			chain_location(version, ASSET_HUB_PARA_ID),
			assets,
			TransferType::DestinationReserve,
			remote_fees_id,
			self.custom_xcm,
		)
		.into_call(&self.input, version)
	}
}

/// Program run on AssetHub when forwarding to Ethereum.
///
/// Leftovers are returned to the sender on AssetHub (or, from Mythos, back to Mythos); the
/// token is withdrawn towards the bridge and deposited to the Ethereum recipient.
pub(crate) fn forward_to_ethereum(
	ctx: &Context<'_>,
	input: &TransferInput,
	token: &str,
	topic: String,
) -> Result<Vec<Instruction>> {
	let version = input.version;
	let sender = require_sender(input)?;
	let address = require_account(input)?;
	let location = input.asset_location()?.clone();

	let refund = if input.origin == Chain::Mythos {
		Instruction::DepositReserveAsset {
			assets: AssetFilter::all(),
			dest: chain_location(version, MYTHOS_PARA_ID),
			xcm: vec![Instruction::DepositAsset {
				assets: AssetFilter::all(),
				beneficiary: account_location(ctx, sender, version)?,
			}],
		}
	} else {
		let refund_account = match ctx.registry.is_evm(input.origin) {
			true => input.ah_address.as_deref().ok_or_else(|| {
				Error::InvalidParameter(format!(
					"an AssetHub address is required for Ethereum transfers from {}",
					input.origin
				))
			})?,
			false => sender,
		};
		Instruction::DepositAsset {
			assets: AssetFilter::all(),
			beneficiary: account_location(ctx, refund_account, version)?,
		}
	};

	let key20 = |key: &str| {
		MultiLocation::new(
			Parents::ZERO,
			create_x1_payload(version, Junction::AccountKey20 { network: None, key: key.into() }),
		)
	};

	Ok(vec![
		Instruction::SetAppendix(vec![refund]),
		Instruction::InitiateReserveWithdraw {
			assets: AssetFilter::Wild(WildAsset::AllOf {
				id: location,
				fun: WildFungibility::Fungible,
			}),
			reserve: MultiLocation::new(
				Parents::TWO,
				create_x1_payload(version, ethereum_junction()),
			),
			xcm: vec![
				Instruction::BuyExecution {
					fees: create_multi_asset(version, 1, key20(token)),
					weight_limit: WeightLimit::Unlimited,
				},
				deposit_all_counted(1, key20(address)),
				Instruction::SetTopic(topic.clone()),
			],
		},
		Instruction::SetTopic(topic),
	])
}

/// A parachain sending an Ethereum asset to AssetHub (`deposit_only`) or on to Ethereum.
///
/// The Ethereum route waits for the current bridge fees before the call can be finished.
pub fn transfer_to_ethereum(
	ctx: &Context<'_>,
	input: &CrossConsensusInput,
	deposit_only: bool,
) -> Result<Prepared> {
	let transfer = &input.transfer;
	let version = transfer.version;
	let location = transfer.asset_location()?.clone();
	require_sender(transfer)?;
	let address = require_account(transfer)?;

	let eth_asset =
		ctx.registry.find_asset_by_location(Chain::Ethereum, &location)?.ok_or_else(|| {
			Error::InvalidCurrency(format!(
				"could not obtain the Ethereum address of asset {}",
				transfer.asset.symbol
			))
		})?;

	let custom_xcm = if deposit_only {
		vec![deposit_all_counted(2, account_location(ctx, address, version)?)]
	} else {
		let token = eth_asset.asset_id.as_deref().ok_or_else(|| {
			Error::InvalidCurrency(format!("Ethereum asset {} has no id", eth_asset.symbol))
		})?;
		let topic = message_id(
			&ctx.client.account_to_hex(require_sender(transfer)?)?,
			ctx.registry.para_id(transfer.origin)?,
			token,
			address,
			transfer.amount,
		);
		forward_to_ethereum(ctx, transfer, token, topic)?
	};

	let plan = EthereumTransfer {
		asset: create_multi_asset(version, transfer.amount, location),
		input: transfer.clone(),
		custom_xcm,
	};

	if deposit_only {
		return Ok(plan.call(DOT_HOP_FEE)?.into())
	}

	debug!(target: LOG_TARGET, origin = %transfer.origin, "Waiting for Ethereum bridge fees");
	let query = Query::EthereumBridgeFees { payer: Chain::AssetHubPolkadot };
	Ok(Prepared::Pending(Pending::new(query, move |estimate: FeeEstimate| {
		Ok(plan.call(estimate.fee)?.into())
	})))
}

/// An Ethereum asset between two chains other than AssetHub, reserve hopping through AssetHub.
///
/// Leftovers on AssetHub go back to the sender; the forwarded part buys execution on the
/// destination with DOT.
pub fn transfer_via_asset_hub(ctx: &Context<'_>, input: &CrossConsensusInput) -> Result<Prepared> {
	let transfer = &input.transfer;
	let version = transfer.version;
	let location = transfer.asset_location()?.clone();
	let sender = require_sender(transfer)?;
	let address = require_account(transfer)?;
	let execution_fee = ASSET_HUB_EXECUTION_FEE * 125 / 100;

	let (mut assets, remote_fees_id) = hop_fees(transfer, DOT_HOP_FEE)?;
	assets.push(create_multi_asset(version, transfer.amount, location));

	let custom_xcm = vec![
		Instruction::SetAppendix(vec![Instruction::DepositAsset {
			assets: AssetFilter::all(),
			beneficiary: account_location(ctx, sender, version)?,
		}]),
		Instruction::DepositReserveAsset {
			assets: AssetFilter::all(),
			dest: chain_location(version, transfer.para_id()?),
			xcm: vec![
				Instruction::BuyExecution {
					fees: create_multi_asset(version, execution_fee, MultiLocation::parent()),
					weight_limit: WeightLimit::Unlimited,
				},
				Instruction::DepositAsset {
					assets: AssetFilter::all(),
					beneficiary: account_location(ctx, address, version)?,
				},
			],
		},
	];

	debug!(
		target: LOG_TARGET,
		origin = %transfer.origin,
		destination = %transfer.destination,
		"Routing Ethereum asset through AssetHub"
	);
	let call = TypeAndThen::new(
		chain_location(version, ASSET_HUB_PARA_ID),
		assets,
		TransferType::DestinationReserve,
		remote_fees_id,
		custom_xcm,
	);
	Ok(call.into_call(transfer, version)?.into())
}
