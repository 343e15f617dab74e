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

//! The serialized call descriptor handed to the chain client.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `{module, method, parameters}`: a pallet call ready to be turned into an extrinsic.
///
/// Parameter names are the ones the runtime expects and are kept in insertion order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SerializedCall {
	pub module: String,
	pub method: String,
	pub parameters: Map<String, Value>,
}

impl SerializedCall {
	pub fn new(module: impl Into<String>, method: impl Into<String>) -> Self {
		Self { module: module.into(), method: method.into(), parameters: Map::new() }
	}

	/// Append a parameter.
	pub fn with(mut self, name: &str, value: impl Serialize) -> Result<Self> {
		self.parameters.insert(name.into(), serde_json::to_value(value)?);
		Ok(self)
	}

	pub fn parameter(&self, name: &str) -> Option<&Value> {
		self.parameters.get(name)
	}

	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}

/// A numeric asset id as a JSON value.
///
/// Ids that fit into a `u64` become numbers, larger ones stay decimal strings. Anything that does
/// not parse as a number is kept verbatim.
pub fn numeric_id(id: &str) -> Value {
	match id.parse::<u128>() {
		Ok(value) => match u64::try_from(value) {
			Ok(small) => Value::from(small),
			Err(_) => Value::String(value.to_string()),
		},
		Err(_) => Value::String(id.to_string()),
	}
}
