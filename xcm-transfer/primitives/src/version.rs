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

//! XCM versions and the single-key versioned wrapper.

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// An XCM protocol version.
#[derive(
	Clone,
	Copy,
	Debug,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	Serialize,
	Deserialize,
	Display,
	EnumString,
	EnumIter,
	IntoStaticStr,
)]
pub enum Version {
	V1,
	V2,
	V3,
	V4,
	V5,
}

impl Version {
	/// Newest version known to the builders.
	pub const LATEST: Version = Version::V5;

	/// From V4 onwards asset ids are plain locations instead of `{"Concrete": location}`.
	pub fn uses_bare_asset_ids(self) -> bool {
		self >= Version::V4
	}

	/// From V4 onwards a single junction is still encoded as a one element array.
	pub fn uses_junction_arrays(self) -> bool {
		self >= Version::V4
	}

	/// V1 and V2 require an explicit `"any"` network on account junctions.
	pub fn requires_any_network(self) -> bool {
		self <= Version::V2
	}

	/// V3 replaced weight values with `WeightLimit`.
	pub fn supports_weight_limit(self) -> bool {
		self >= Version::V3
	}
}

/// A value tagged with the XCM version it is encoded for.
///
/// Serializes as a map with exactly one key, e.g. `{"V4": value}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Versioned<T> {
	version: Version,
	value: T,
}

impl<T> Versioned<T> {
	pub fn new(version: Version, value: T) -> Self {
		Self { version, value }
	}

	pub fn version(&self) -> Version {
		self.version
	}

	pub fn value(&self) -> &T {
		&self.value
	}

	pub fn into_inner(self) -> T {
		self.value
	}

	/// Apply `f` to the wrapped value, keeping the version.
	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Versioned<U> {
		Versioned { version: self.version, value: f(self.value) }
	}
}

impl<T: Serialize> Serialize for Versioned<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(1))?;
		map.serialize_entry(<&'static str>::from(self.version), &self.value)?;
		map.end()
	}
}

/// Wrap `value` into `{[version]: value}`.
pub fn add_version_header<T>(value: T, version: Version) -> Versioned<T> {
	Versioned::new(version, value)
}
