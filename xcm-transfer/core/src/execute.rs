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

//! `PolkadotXcm.execute` programs for transfers that pay fees in a different asset.
//!
//! The program withdraws the asset and the fee asset, buys execution locally and then either
//! teleports (between system chains), withdraws to the asset's reserve, or deposits on the
//! destination. It is built twice: first with a minimum fee so that it can be dry run, then with
//! the dry run fee padded by a fifth.

use crate::{
	call::SerializedCall,
	error::{Error, Result},
	location::{chain_location, ASSET_HUB_PARA_ID},
	pallets::{polkadot_xcm::MODULE, PolkadotXcmMethod},
	strategy::{Context, CrossConsensusInput, FeeEstimate, Pending, Prepared, Query},
};
use tracing::debug;
use xcm_transfer_primitives::{
	create_multi_asset, sort_multi_assets, AssetFilter, Chain, Instruction, MultiAsset,
	MultiLocation, Version, Versioned, Weight, WeightLimit,
};

const LOG_TARGET: &str = "xcm::transfer::execute";

/// Weight limit attached to every execute call.
pub const MAX_WEIGHT: Weight = Weight::from_parts(100_000_000_000, 1_000_000);

/// Weight bought by the first `BuyExecution` of the program.
const LOCAL_EXECUTION_WEIGHT: Weight = Weight::from_parts(450, 0);

/// `InitiateReserveWithdraw` ends up with this many units less than requested.
pub const RESERVE_WITHDRAW_SHORTFALL: u128 = 2;

/// Dry run fees are padded by this percentage.
const FEE_PADDING_PERCENT: u128 = 120;

/// Everything needed to (re)build the program, detached from the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutePlan {
	pub origin: Chain,
	pub origin_para_id: u32,
	pub destination: Chain,
	pub destination_para_id: u32,
	pub dest: MultiLocation,
	pub beneficiary: MultiLocation,
	pub asset_location: MultiLocation,
	/// `None` when the fee is paid in the transferred asset itself.
	pub fee_location: Option<MultiLocation>,
	pub amount: u128,
	pub version: Version,
	pub module: String,
	pub method: String,
}

/// Para id of the chain holding the reserve of `location`.
///
/// A `Parachain` junction names it; bridged assets are kept on AssetHub; the relay native asset
/// is reserved on the relay chain, id `0`.
pub fn reserve_para_id(location: &MultiLocation) -> Option<u32> {
	if let Some(para_id) = location.parachain() {
		return Some(para_id)
	}
	if location.global_consensus().is_some() {
		return Some(ASSET_HUB_PARA_ID)
	}
	(location == &MultiLocation::parent()).then_some(0)
}

fn localize(location: &MultiLocation, para_id: u32) -> MultiLocation {
	location.localize((para_id != 0).then_some(para_id))
}

/// Smallest fee the program is first built with: 0.4 units for assets with more than 10
/// decimals, 0.15 units otherwise.
pub fn minimum_fee(decimals: u8) -> u128 {
	let unit = 10u128.saturating_pow(decimals.into());
	if decimals > 10 {
		unit * 4 / 10
	} else {
		unit * 15 / 100
	}
}

fn assets_filter(asset: &MultiAsset, has_fee_asset: bool) -> AssetFilter {
	if has_fee_asset {
		AssetFilter::Definite(vec![asset.clone()])
	} else {
		AssetFilter::all_counted(1)
	}
}

impl ExecutePlan {
	fn asset(&self, amount: u128, location: MultiLocation) -> MultiAsset {
		create_multi_asset(self.version, amount, location)
	}

	/// The XCM program for the given local `execution_fee` and the fee of the next hop.
	pub fn program(&self, execution_fee: u128, hop_fee: u128) -> Result<Vec<Instruction>> {
		let amount = self.amount;
		let reserve = reserve_para_id(&self.asset_location);
		let on_asset_hub = self.origin.is_asset_hub();

		if !on_asset_hub && reserve.is_none() {
			return Err(Error::InvalidParameter(format!(
				"sending local reserve assets with a separate fee asset is not supported from {}",
				self.origin
			)))
		}

		let reserve_or_origin = reserve.unwrap_or(self.origin_para_id);
		let asset = self.asset(amount, self.asset_location.clone());
		let localized = self.asset(amount, localize(&self.asset_location, self.origin_para_id));
		let to_reserve = self.asset(amount, localize(&self.asset_location, reserve_or_origin));
		let to_dest = self.asset(amount, localize(&self.asset_location, self.destination_para_id));

		let fee =
			self.fee_location.as_ref().map(|location| self.asset(execution_fee, location.clone()));
		let fee_localized = self
			.fee_location
			.as_ref()
			.map(|location| self.asset(execution_fee, localize(location, self.origin_para_id)));
		let has_fee_asset = fee.is_some();

		let mut withdraw = if on_asset_hub {
			[Some(localized.clone()), fee_localized.clone()]
		} else {
			[Some(asset.clone()), fee.clone()]
		}
		.into_iter()
		.flatten()
		.collect::<Vec<_>>();
		sort_multi_assets(&mut withdraw);

		let deposit_all = Instruction::DepositAsset {
			assets: AssetFilter::all_counted(1),
			beneficiary: self.beneficiary.clone(),
		};

		let trusted = self.origin.is_system_chain() && self.destination.is_system_chain();
		let reserve_is_destination = reserve == Some(self.destination_para_id);

		let deposit = if reserve_is_destination || trusted {
			Instruction::DepositAsset {
				assets: assets_filter(&to_reserve, has_fee_asset),
				beneficiary: self.beneficiary.clone(),
			}
		} else {
			let spent = if has_fee_asset { hop_fee } else { execution_fee.saturating_add(hop_fee) };
			Instruction::DepositReserveAsset {
				assets: assets_filter(&localized, has_fee_asset),
				dest: self.dest.clone(),
				xcm: vec![
					Instruction::BuyExecution {
						fees: asset.with_amount(amount.saturating_sub(spent)),
						weight_limit: WeightLimit::Unlimited,
					},
					deposit_all.clone(),
				],
			}
		};

		let needs_intermediary_reserve = reserve.map_or(false, |id| id != self.origin_para_id);

		let last = if trusted {
			let fees = if has_fee_asset { amount } else { amount.saturating_sub(execution_fee) };
			Instruction::InitiateTeleport {
				assets: assets_filter(&asset, has_fee_asset),
				dest: self.dest.clone(),
				xcm: vec![
					Instruction::BuyExecution {
						fees: to_dest.with_amount(fees),
						weight_limit: WeightLimit::Unlimited,
					},
					deposit_all,
				],
			}
		} else if needs_intermediary_reserve {
			Instruction::InitiateReserveWithdraw {
				assets: assets_filter(&asset, has_fee_asset),
				reserve: chain_location(self.version, reserve_or_origin),
				xcm: vec![
					Instruction::BuyExecution {
						fees: to_reserve
							.with_amount(amount.saturating_sub(RESERVE_WITHDRAW_SHORTFALL)),
						weight_limit: WeightLimit::Unlimited,
					},
					deposit,
				],
			}
		} else {
			deposit
		};

		let local_fees =
			if on_asset_hub { fee_localized.unwrap_or(localized) } else { fee.unwrap_or(asset) };

		Ok(vec![
			Instruction::WithdrawAsset(withdraw),
			Instruction::BuyExecution {
				fees: local_fees,
				weight_limit: WeightLimit::Limited(LOCAL_EXECUTION_WEIGHT),
			},
			last,
		])
	}

	pub fn call(&self, execution_fee: u128, hop_fee: u128) -> Result<SerializedCall> {
		let message = Versioned::new(self.version, self.program(execution_fee, hop_fee)?);
		SerializedCall::new(self.module.clone(), self.method.clone())
			.with("message", message)?
			.with("max_weight", MAX_WEIGHT)
	}

	fn check_amount(&self, fee: u128) -> Result<()> {
		if self.fee_location.is_none() && self.amount <= fee.saturating_mul(2) {
			return Err(Error::InvalidParameter(format!(
				"asset amount {} is too low to cover a fee of {fee}, increase the amount or use a \
				 different fee asset",
				self.amount
			)))
		}
		Ok(())
	}
}

/// Build the plan from a prepared request and return the dry run to perform.
pub fn transfer(ctx: &Context<'_>, input: &CrossConsensusInput) -> Result<Prepared> {
	let transfer = &input.transfer;
	let fee_asset = transfer.fee_asset.as_ref().ok_or_else(|| {
		Error::InvalidParameter("an execute transfer requires a fee asset".into())
	})?;
	let destination = transfer.destination_chain().ok_or_else(|| {
		Error::InvalidParameter("an execute transfer requires a chain destination".into())
	})?;
	let sender = transfer.sender()?.to_string();
	let asset_location = transfer.asset_location()?.clone();
	let fee_location = fee_asset.location.clone().ok_or_else(|| {
		Error::InvalidCurrency(format!("fee asset {} has no location", fee_asset.symbol))
	})?;
	let decimals = transfer.asset.decimals.ok_or_else(|| {
		Error::InvalidCurrency(format!("asset {} has no decimals", transfer.asset.symbol))
	})?;

	let plan = ExecutePlan {
		origin: transfer.origin,
		origin_para_id: ctx.registry.para_id(transfer.origin)?,
		destination,
		destination_para_id: transfer.para_id()?,
		dest: input.destination.value().clone(),
		beneficiary: input.beneficiary.value().clone(),
		fee_location: (fee_location != asset_location).then_some(fee_location),
		asset_location,
		amount: transfer.amount,
		version: transfer.version,
		module: transfer.module(MODULE),
		method: transfer.method(PolkadotXcmMethod::Execute.name()),
	};

	let fee = minimum_fee(decimals);
	plan.check_amount(fee)?;
	let estimate_call = plan.call(fee, 0)?;
	debug!(
		target: LOG_TARGET,
		origin = %plan.origin,
		destination = %plan.destination,
		fee,
		"Dry running execute program"
	);

	Ok(Prepared::Pending(Pending::new(
		Query::DryRun { chain: plan.origin, call: estimate_call, sender },
		move |estimate: FeeEstimate| {
			let fee = estimate.fee.saturating_mul(FEE_PADDING_PERCENT) / 100;
			let hop_fee = estimate.destination_fee.unwrap_or_default();
			plan.check_amount(fee)?;
			debug!(target: LOG_TARGET, fee, hop_fee, "Rebuilding execute call with dry run fees");
			Ok(Prepared::Ready(plan.call(fee, hop_fee)?))
		},
	)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use xcm_transfer_primitives::{Junction, NetworkId, Parents};

	fn location(parents: u8, junctions: Vec<Junction>) -> MultiLocation {
		MultiLocation::from_junctions(parents, junctions).unwrap()
	}

	fn usdt() -> MultiLocation {
		location(
			1,
			vec![Junction::Parachain(1000), Junction::PalletInstance(50), Junction::GeneralIndex(1984)],
		)
	}

	fn beneficiary() -> MultiLocation {
		location(0, vec![Junction::AccountId32 { network: None, id: "0x01".into() }])
	}

	fn plan(asset_location: MultiLocation, fee_location: Option<MultiLocation>) -> ExecutePlan {
		ExecutePlan {
			origin: Chain::AssetHubPolkadot,
			origin_para_id: 1000,
			destination: Chain::Hydration,
			destination_para_id: 2034,
			dest: location(1, vec![Junction::Parachain(2034)]),
			beneficiary: beneficiary(),
			asset_location,
			fee_location,
			amount: 1_000_000,
			version: Version::V4,
			module: "PolkadotXcm".into(),
			method: "execute".into(),
		}
	}

	#[rstest]
	#[case(usdt(), Some(1000))]
	#[case(location(2, vec![Junction::GlobalConsensus(NetworkId::Kusama)]), Some(1000))]
	#[case(MultiLocation::parent(), Some(0))]
	#[case(location(0, vec![Junction::PalletInstance(10)]), None)]
	fn reserves(#[case] location: MultiLocation, #[case] expected: Option<u32>) {
		assert_eq!(reserve_para_id(&location), expected);
	}

	#[rstest]
	#[case(18, 400_000_000_000_000_000)]
	#[case(12, 400_000_000_000)]
	#[case(10, 1_500_000_000)]
	#[case(6, 150_000)]
	fn minimum_fees(#[case] decimals: u8, #[case] expected: u128) {
		assert_eq!(minimum_fee(decimals), expected);
	}

	#[test]
	fn program_pays_with_fee_asset_on_asset_hub() {
		// given
		let plan = plan(usdt(), Some(MultiLocation::parent()));

		// then
		let program = plan.program(300, 0).unwrap();
		let localized_usdt =
			location(0, vec![Junction::PalletInstance(50), Junction::GeneralIndex(1984)]);

		assert_eq!(
			program[0],
			Instruction::WithdrawAsset(vec![
				create_multi_asset(Version::V4, 1_000_000, localized_usdt.clone()),
				create_multi_asset(Version::V4, 300, MultiLocation::parent()),
			])
		);
		assert_eq!(
			program[1],
			Instruction::BuyExecution {
				fees: create_multi_asset(Version::V4, 300, MultiLocation::parent()),
				weight_limit: WeightLimit::Limited(Weight::from_parts(450, 0)),
			}
		);
		// the asset lives on the origin, so it is deposited straight onto the destination
		let Instruction::DepositReserveAsset { assets, dest, .. } = &program[2] else {
			panic!("expected a reserve deposit, got {:?}", program[2])
		};
		assert_eq!(
			assets,
			&AssetFilter::Definite(vec![create_multi_asset(Version::V4, 1_000_000, localized_usdt)])
		);
		assert_eq!(dest, &plan.dest);
	}

	#[test]
	fn reserve_withdraw_buys_two_units_less() {
		// given
		let mut plan = plan(MultiLocation::parent(), Some(usdt()));
		plan.origin = Chain::AssetHubPolkadot;
		plan.destination = Chain::Acala;
		plan.destination_para_id = 2000;

		// then
		let program = plan.program(300, 0).unwrap();
		let Instruction::InitiateReserveWithdraw { reserve, xcm, .. } = &program[2] else {
			panic!("expected a reserve withdraw, got {:?}", program[2])
		};
		assert_eq!(reserve, &MultiLocation::parent());
		assert_eq!(
			xcm[0],
			Instruction::BuyExecution {
				fees: create_multi_asset(Version::V4, 1_000_000 - 2, MultiLocation::here()),
				weight_limit: WeightLimit::Unlimited,
			}
		);
	}

	#[test]
	fn system_chains_teleport() {
		// given
		let mut plan = plan(MultiLocation::parent(), None);
		plan.destination = Chain::PeoplePolkadot;
		plan.destination_para_id = 1004;

		// then
		let program = plan.program(300, 0).unwrap();
		let Instruction::InitiateTeleport { assets, xcm, .. } = &program[2] else {
			panic!("expected a teleport, got {:?}", program[2])
		};
		assert_eq!(assets, &AssetFilter::all_counted(1));
		assert_eq!(
			xcm[0],
			Instruction::BuyExecution {
				fees: create_multi_asset(Version::V4, 1_000_000 - 300, MultiLocation::parent()),
				weight_limit: WeightLimit::Unlimited,
			}
		);
	}

	#[test]
	fn same_fee_asset_requires_amount_above_twice_the_fee() {
		let plan = plan(usdt(), None);

		assert!(plan.check_amount(400_000).is_ok());
		assert!(matches!(plan.check_amount(500_000), Err(Error::InvalidParameter(_))));
	}

	#[test]
	fn local_reserve_assets_need_asset_hub() {
		let mut plan = plan(location(0, vec![Junction::PalletInstance(10)]), Some(usdt()));
		plan.origin = Chain::Moonbeam;

		assert!(matches!(plan.program(1, 0), Err(Error::InvalidParameter(_))));
	}

	#[test]
	fn call_shape() {
		let call = plan(usdt(), Some(MultiLocation::parent())).call(300, 0).unwrap();

		assert_eq!(call.module, "PolkadotXcm");
		assert_eq!(call.method, "execute");
		assert_eq!(
			call.parameter("max_weight"),
			Some(&serde_json::json!({ "ref_time": 100_000_000_000u64, "proof_size": 1_000_000 }))
		);
		assert!(call.parameter("message").and_then(|m| m.get("V4")).is_some());
	}

	#[test]
	fn parents_are_kept_for_bridged_fee_assets() {
		let kusama = location(2, vec![Junction::GlobalConsensus(NetworkId::Kusama)]);
		let plan = plan(usdt(), Some(kusama));

		let program = plan.program(300, 0).unwrap();
		let Instruction::WithdrawAsset(assets) = &program[0] else { panic!("expected a withdraw") };
		assert_eq!(assets[1].location().parents, Parents::TWO);
	}
}
