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

use crate::currency::Currency;
use serde::{Deserialize, Serialize};
use std::fmt;
use xcm_transfer_primitives::{amount, Chain, Destination, MultiLocation, Version};

/// Recipient of a transfer: an account string or a raw location.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Address {
	Account(String),
	Location(MultiLocation),
}

impl Address {
	pub fn as_account(&self) -> Option<&str> {
		match self {
			Address::Account(account) => Some(account),
			Address::Location(_) => None,
		}
	}

	pub fn is_location(&self) -> bool {
		matches!(self, Address::Location(_))
	}
}

impl From<&str> for Address {
	fn from(account: &str) -> Self {
		Address::Account(account.into())
	}
}

impl fmt::Display for Address {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Address::Account(account) => f.write_str(account),
			Address::Location(location) => write!(f, "{location:?}"),
		}
	}
}

/// A transfer request as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOptions {
	pub origin: Chain,
	pub destination: Destination,
	pub currency: Currency,
	#[serde(with = "amount")]
	pub amount: u128,
	pub address: Address,
	/// Signer of the call. Required by keep-alive checks, dry runs and Ethereum routes.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sender_address: Option<String>,
	/// Substrate account on AssetHub receiving leftovers of routes that pass through it.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ah_address: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fee_asset: Option<Currency>,
	/// XCM version to encode for instead of the origin's default.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub version: Option<Version>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub para_id_to: Option<u32>,
	#[serde(default)]
	pub disable_asset_check: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pallet: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub method: Option<String>,
	#[serde(default)]
	pub keep_alive: bool,
}

impl TransferOptions {
	pub fn new(
		origin: Chain,
		destination: impl Into<Destination>,
		currency: Currency,
		amount: u128,
		address: impl Into<Address>,
	) -> Self {
		Self {
			origin,
			destination: destination.into(),
			currency,
			amount,
			address: address.into(),
			sender_address: None,
			ah_address: None,
			fee_asset: None,
			version: None,
			para_id_to: None,
			disable_asset_check: false,
			pallet: None,
			method: None,
			keep_alive: false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn request_file_shape() {
		let options: TransferOptions = serde_json::from_value(json!({
			"origin": "Astar",
			"destination": "Moonbeam",
			"currency": { "symbol": "ASTR" },
			"amount": "1000000000000000000",
			"address": "0x1501C1413e4178c38567Ada8945A80351F7B8496",
			"keepAlive": true
		}))
		.unwrap();

		let mut expected = TransferOptions::new(
			Chain::Astar,
			Chain::Moonbeam,
			Currency::symbol("ASTR"),
			1_000_000_000_000_000_000,
			"0x1501C1413e4178c38567Ada8945A80351F7B8496",
		);
		expected.keep_alive = true;
		assert_eq!(options, expected);
	}

	#[test]
	fn location_destination_and_address() {
		let options: TransferOptions = serde_json::from_value(json!({
			"origin": "Hydration",
			"destination": { "parents": 1, "interior": { "X1": [{ "Parachain": 2000 }] } },
			"currency": { "id": "5" },
			"amount": 10,
			"address": { "parents": 0, "interior": "Here" }
		}))
		.unwrap();

		assert!(options.destination.is_location());
		assert!(options.address.is_location());
		assert_eq!(options.amount, 10);
	}
}
