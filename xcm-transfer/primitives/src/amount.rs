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

//! Serde helpers for balances.
//!
//! Balances are `u128` but are emitted as decimal strings, because JSON consumers commonly lose
//! precision above 2^53. Both strings and plain numbers are accepted when reading.

use serde::{de, Deserializer, Serializer};
use std::fmt;

/// Serialize a balance as a decimal string.
pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
	serializer.collect_str(value)
}

/// Deserialize a balance from a decimal string or an unsigned integer.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
	deserializer.deserialize_any(AmountVisitor)
}

/// Same as [`serialize`]/[`deserialize`], for optional balances.
pub mod option {
	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<S: Serializer>(
		value: &Option<u128>,
		serializer: S,
	) -> Result<S::Ok, S::Error> {
		match value {
			Some(value) => super::serialize(value, serializer),
			None => serializer.serialize_none(),
		}
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(
		deserializer: D,
	) -> Result<Option<u128>, D::Error> {
		#[derive(Deserialize)]
		struct Wrapper(#[serde(with = "super")] u128);

		Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(value)| value))
	}
}

struct AmountVisitor;

impl<'de> de::Visitor<'de> for AmountVisitor {
	type Value = u128;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("an unsigned integer or a decimal string")
	}

	fn visit_u64<E: de::Error>(self, value: u64) -> Result<u128, E> {
		Ok(value.into())
	}

	fn visit_u128<E: de::Error>(self, value: u128) -> Result<u128, E> {
		Ok(value)
	}

	fn visit_i64<E: de::Error>(self, value: i64) -> Result<u128, E> {
		u128::try_from(value).map_err(|_| E::custom("balance can not be negative"))
	}

	fn visit_str<E: de::Error>(self, value: &str) -> Result<u128, E> {
		value.trim().parse().map_err(|_| E::custom(format!("invalid balance: {value}")))
	}
}

#[cfg(test)]
mod tests {
	use serde::{Deserialize, Serialize};

	#[derive(Serialize, Deserialize, Debug, PartialEq)]
	struct Transfer {
		#[serde(with = "super")]
		amount: u128,
		#[serde(with = "super::option", default)]
		fee: Option<u128>,
	}

	#[test]
	fn balances_are_written_as_strings() {
		let transfer = Transfer { amount: u128::MAX, fee: Some(10) };

		assert_eq!(
			serde_json::to_value(&transfer).unwrap(),
			serde_json::json!({ "amount": u128::MAX.to_string(), "fee": "10" }),
		);
	}

	#[test]
	fn balances_are_read_from_numbers_and_strings() {
		let transfer: Transfer =
			serde_json::from_str(r#"{ "amount": 1000000000000, "fee": "25" }"#).unwrap();
		assert_eq!(transfer, Transfer { amount: 1_000_000_000_000, fee: Some(25) });

		let transfer: Transfer = serde_json::from_str(r#"{ "amount": "7" }"#).unwrap();
		assert_eq!(transfer, Transfer { amount: 7, fee: None });

		assert!(serde_json::from_str::<Transfer>(r#"{ "amount": "-1" }"#).is_err());
	}
}
