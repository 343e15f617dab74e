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

//! The subset of XCM instructions that transfer programs are assembled from.

use crate::{asset::MultiAsset, location::MultiLocation};
use serde::{Deserialize, Serialize};

/// Two dimensional weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weight {
	pub ref_time: u64,
	pub proof_size: u64,
}

impl Weight {
	pub const fn from_parts(ref_time: u64, proof_size: u64) -> Self {
		Self { ref_time, proof_size }
	}
}

/// Upper bound of the weight a remote chain may charge, `"Unlimited"` or `{"Limited": weight}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightLimit {
	Unlimited,
	Limited(Weight),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WildFungibility {
	Fungible,
}

/// A wildcard over the holding register.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WildAsset {
	All,
	AllOf { id: MultiLocation, fun: WildFungibility },
	AllCounted(u32),
}

/// Selects assets out of the holding register.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetFilter {
	Definite(Vec<MultiAsset>),
	Wild(WildAsset),
}

impl AssetFilter {
	/// `{"Wild": "All"}`.
	pub fn all() -> Self {
		AssetFilter::Wild(WildAsset::All)
	}

	/// `{"Wild": {"AllCounted": count}}`.
	pub fn all_counted(count: u32) -> Self {
		AssetFilter::Wild(WildAsset::AllCounted(count))
	}
}

/// One step of an XCM program.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
	WithdrawAsset(Vec<MultiAsset>),
	BuyExecution {
		fees: MultiAsset,
		weight_limit: WeightLimit,
	},
	DepositAsset {
		assets: AssetFilter,
		beneficiary: MultiLocation,
	},
	DepositReserveAsset {
		assets: AssetFilter,
		dest: MultiLocation,
		xcm: Vec<Instruction>,
	},
	InitiateReserveWithdraw {
		assets: AssetFilter,
		reserve: MultiLocation,
		xcm: Vec<Instruction>,
	},
	InitiateTeleport {
		assets: AssetFilter,
		dest: MultiLocation,
		xcm: Vec<Instruction>,
	},
	SetAppendix(Vec<Instruction>),
	SetTopic(String),
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{create_multi_asset, Version};
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn buy_execution_with_limited_weight() {
		let instruction = Instruction::BuyExecution {
			fees: create_multi_asset(Version::V4, 10, MultiLocation::parent()),
			weight_limit: WeightLimit::Limited(Weight::from_parts(450, 0)),
		};

		assert_eq!(
			serde_json::to_value(instruction).unwrap(),
			json!({
				"BuyExecution": {
					"fees": { "id": { "parents": 1, "interior": "Here" }, "fun": { "Fungible": "10" } },
					"weight_limit": { "Limited": { "ref_time": 450, "proof_size": 0 } }
				}
			}),
		);
	}

	#[test]
	fn wildcard_filters() {
		assert_eq!(serde_json::to_value(AssetFilter::all()).unwrap(), json!({ "Wild": "All" }));
		assert_eq!(
			serde_json::to_value(AssetFilter::all_counted(1)).unwrap(),
			json!({ "Wild": { "AllCounted": 1 } }),
		);
		assert_eq!(
			serde_json::to_value(AssetFilter::Wild(WildAsset::AllOf {
				id: MultiLocation::here(),
				fun: WildFungibility::Fungible,
			}))
			.unwrap(),
			json!({ "Wild": { "AllOf": { "id": { "parents": 0, "interior": "Here" }, "fun": "Fungible" } } }),
		);
		assert_eq!(serde_json::to_value(WeightLimit::Unlimited).unwrap(), json!("Unlimited"));
	}

	#[test]
	fn nested_programs_keep_their_order() {
		let program = Instruction::SetAppendix(vec![
			Instruction::SetTopic("0x01".into()),
			Instruction::DepositAsset {
				assets: AssetFilter::all(),
				beneficiary: MultiLocation::here(),
			},
		]);

		let encoded = serde_json::to_value(program).unwrap();
		let inner = encoded["SetAppendix"].as_array().unwrap();
		assert_eq!(inner[0], json!({ "SetTopic": "0x01" }));
		assert!(inner[1].get("DepositAsset").is_some());
	}
}
