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

//! Locations and their junctions.
//!
//! A [`MultiLocation`] is `parents` hops up the consensus hierarchy followed by a path of up to
//! eight [`Junction`]s down. The interior is written as `"Here"` or as `{"X<n>": [..]}`; versions
//! before V4 write a single junction without the enclosing array, which is kept as a separate
//! [`Junctions::Single`] variant so the encoding survives a round trip.

use crate::version::Version;
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Maximum number of junctions in an interior location.
pub const MAX_JUNCTIONS: usize = 8;

/// Well known `parents` values.
pub struct Parents;

impl Parents {
	/// Inside the current consensus system.
	pub const ZERO: u8 = 0;
	/// Through the relay chain.
	pub const ONE: u8 = 1;
	/// Out of the relay consensus, over a bridge.
	pub const TWO: u8 = 2;
}

/// Errors raised when building or decoding a location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
	#[error("a location can hold at most {MAX_JUNCTIONS} junctions, got {0}")]
	TooManyJunctions(usize),
	#[error("interior tag `{tag}` does not match the {count} junctions it holds")]
	MismatchedTag { tag: String, count: usize },
	#[error("unknown interior tag `{0}`")]
	UnknownTag(String),
}

/// A global identifier of a consensus system.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkId {
	/// Wildcard used by V1 and V2 account junctions.
	#[serde(rename = "any")]
	Any,
	ByGenesis(String),
	Polkadot,
	Kusama,
	Westend,
	Rococo,
	Ethereum {
		chain_id: u64,
	},
}

/// A single step of an interior location.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Junction {
	Parachain(u32),
	AccountId32 {
		#[serde(default, skip_serializing_if = "Option::is_none")]
		network: Option<NetworkId>,
		id: String,
	},
	AccountIndex64 {
		#[serde(default, skip_serializing_if = "Option::is_none")]
		network: Option<NetworkId>,
		index: u64,
	},
	AccountKey20 {
		#[serde(default, skip_serializing_if = "Option::is_none")]
		network: Option<NetworkId>,
		key: String,
	},
	PalletInstance(u8),
	/// Decoded from a number or a decimal string, also when buffered by an untagged parent.
	GeneralIndex(#[serde(deserialize_with = "crate::amount::deserialize")] u128),
	GeneralKey {
		length: u8,
		data: String,
	},
	OnlyChild,
	GlobalConsensus(NetworkId),
}

/// The interior part of a location.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "JunctionsRepr")]
pub enum Junctions {
	/// The consensus system itself.
	Here,
	/// One junction in the pre-V4 encoding, `{"X1": junction}`.
	Single(Junction),
	/// One to eight junctions, `{"X<n>": [..]}`.
	Path(Vec<Junction>),
}

impl Junctions {
	/// Build an interior from an ordered list of junctions.
	///
	/// An empty list is `Here`; a list is always encoded with the array form.
	pub fn from_path(junctions: Vec<Junction>) -> Result<Self, LocationError> {
		match junctions.len() {
			0 => Ok(Junctions::Here),
			n if n > MAX_JUNCTIONS => Err(LocationError::TooManyJunctions(n)),
			_ => Ok(Junctions::Path(junctions)),
		}
	}

	pub fn as_slice(&self) -> &[Junction] {
		match self {
			Junctions::Here => &[],
			Junctions::Single(junction) => std::slice::from_ref(junction),
			Junctions::Path(junctions) => junctions,
		}
	}

	pub fn len(&self) -> usize {
		self.as_slice().len()
	}

	pub fn is_empty(&self) -> bool {
		self.as_slice().is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Junction> {
		self.as_slice().iter()
	}

	pub fn first(&self) -> Option<&Junction> {
		self.as_slice().first()
	}

	pub fn last(&self) -> Option<&Junction> {
		self.as_slice().last()
	}

	/// Same junctions, re-encoded for `version`.
	pub fn for_version(self, version: Version) -> Self {
		match self {
			Junctions::Path(mut junctions)
				if junctions.len() == 1 && !version.uses_junction_arrays() =>
				junctions.pop().map(Junctions::Single).unwrap_or(Junctions::Here),
			Junctions::Single(junction) if version.uses_junction_arrays() =>
				Junctions::Path(vec![junction]),
			other => other,
		}
	}
}

impl Serialize for Junctions {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Junctions::Here => serializer.serialize_str("Here"),
			Junctions::Single(junction) => {
				let mut map = serializer.serialize_map(Some(1))?;
				map.serialize_entry("X1", junction)?;
				map.end()
			},
			Junctions::Path(junctions) => {
				let mut map = serializer.serialize_map(Some(1))?;
				map.serialize_entry(&format!("X{}", junctions.len()), junctions)?;
				map.end()
			},
		}
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JunctionsRepr {
	Tag(String),
	Tagged(BTreeMap<String, JunctionsBody>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JunctionsBody {
	Path(Vec<Junction>),
	Single(Junction),
	Empty(Option<()>),
}

impl TryFrom<JunctionsRepr> for Junctions {
	type Error = LocationError;

	fn try_from(repr: JunctionsRepr) -> Result<Self, Self::Error> {
		let (tag, body) = match repr {
			JunctionsRepr::Tag(tag) if tag == "Here" => return Ok(Junctions::Here),
			JunctionsRepr::Tag(tag) => return Err(LocationError::UnknownTag(tag)),
			JunctionsRepr::Tagged(map) => {
				let mut entries = map.into_iter();
				match (entries.next(), entries.next()) {
					(Some(entry), None) => entry,
					_ => return Err(LocationError::UnknownTag("<map>".into())),
				}
			},
		};

		if tag == "Here" {
			return match body {
				JunctionsBody::Empty(_) => Ok(Junctions::Here),
				_ => Err(LocationError::MismatchedTag { tag, count: 1 }),
			}
		}

		let expected: usize = tag
			.strip_prefix('X')
			.and_then(|n| n.parse().ok())
			.filter(|n| (1..=MAX_JUNCTIONS).contains(n))
			.ok_or_else(|| LocationError::UnknownTag(tag.clone()))?;

		match body {
			JunctionsBody::Single(junction) if expected == 1 => Ok(Junctions::Single(junction)),
			JunctionsBody::Path(junctions) if junctions.len() == expected =>
				Ok(Junctions::Path(junctions)),
			JunctionsBody::Path(junctions) =>
				Err(LocationError::MismatchedTag { tag, count: junctions.len() }),
			JunctionsBody::Single(_) => Err(LocationError::MismatchedTag { tag, count: 1 }),
			JunctionsBody::Empty(_) => Err(LocationError::MismatchedTag { tag, count: 0 }),
		}
	}
}

/// A relative location in the consensus hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MultiLocation {
	pub parents: u8,
	pub interior: Junctions,
}

impl MultiLocation {
	pub fn new(parents: u8, interior: Junctions) -> Self {
		Self { parents, interior }
	}

	/// `{parents: 0, interior: Here}`.
	pub fn here() -> Self {
		Self::new(Parents::ZERO, Junctions::Here)
	}

	/// `{parents: 1, interior: Here}`, the relay chain and its native asset.
	pub fn parent() -> Self {
		Self::new(Parents::ONE, Junctions::Here)
	}

	pub fn from_junctions(parents: u8, junctions: Vec<Junction>) -> Result<Self, LocationError> {
		Ok(Self::new(parents, Junctions::from_path(junctions)?))
	}

	pub fn junctions(&self) -> &[Junction] {
		self.interior.as_slice()
	}

	pub fn is_here(&self) -> bool {
		matches!(self.interior, Junctions::Here)
	}

	pub fn has_junction(&self, predicate: impl Fn(&Junction) -> bool) -> bool {
		self.junctions().iter().any(predicate)
	}

	pub fn parachain(&self) -> Option<u32> {
		self.junctions().iter().find_map(|junction| match junction {
			Junction::Parachain(id) => Some(*id),
			_ => None,
		})
	}

	pub fn general_index(&self) -> Option<u128> {
		self.junctions().iter().find_map(|junction| match junction {
			Junction::GeneralIndex(index) => Some(*index),
			_ => None,
		})
	}

	pub fn has_pallet_instance(&self, instance: u8) -> bool {
		self.has_junction(|junction| junction == &Junction::PalletInstance(instance))
	}

	pub fn global_consensus(&self) -> Option<&NetworkId> {
		self.junctions().iter().find_map(|junction| match junction {
			Junction::GlobalConsensus(network) => Some(network),
			_ => None,
		})
	}

	/// Express this location as seen from inside the chain with `para_id`.
	///
	/// `None` stands for a relay chain. A `Parachain(para_id)` junction is dropped together with
	/// the parents count; everything else is returned untouched.
	pub fn localize(&self, para_id: Option<u32>) -> MultiLocation {
		if self.is_here() {
			return match para_id {
				None => MultiLocation::here(),
				Some(_) => self.clone(),
			}
		}

		let Some(para_id) = para_id else { return self.clone() };

		let junctions = self.junctions();
		let remaining: Vec<Junction> =
			junctions.iter().filter(|j| **j != Junction::Parachain(para_id)).cloned().collect();

		if remaining.len() == junctions.len() {
			return self.clone()
		}

		MultiLocation {
			parents: Parents::ZERO,
			interior: Junctions::from_path(remaining).unwrap_or(Junctions::Here),
		}
	}

	/// Re-encode single junction interiors for `version`.
	pub fn for_version(self, version: Version) -> Self {
		Self { parents: self.parents, interior: self.interior.for_version(version) }
	}
}

/// Wrap one junction as an `X1` interior: `[junction]` from V4 on, bare before.
pub fn create_x1_payload(version: Version, junction: Junction) -> Junctions {
	if version.uses_junction_arrays() {
		Junctions::Path(vec![junction])
	} else {
		Junctions::Single(junction)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	fn account(id: &str) -> Junction {
		Junction::AccountId32 { network: None, id: id.into() }
	}

	#[test]
	fn x1_payload_depends_on_version() {
		let junction = Junction::Parachain(2000);

		assert_eq!(
			serde_json::to_value(create_x1_payload(Version::V4, junction.clone())).unwrap(),
			json!({ "X1": [{ "Parachain": 2000 }] }),
		);
		assert_eq!(
			serde_json::to_value(create_x1_payload(Version::V3, junction)).unwrap(),
			json!({ "X1": { "Parachain": 2000 } }),
		);
	}

	#[test]
	fn location_serializes_to_wire_shape() {
		let location = MultiLocation::from_junctions(
			Parents::ONE,
			vec![
				Junction::Parachain(2004),
				Junction::AccountKey20 { network: None, key: "0xabc".into() },
			],
		)
		.unwrap();

		assert_eq!(
			serde_json::to_value(&location).unwrap(),
			json!({
				"parents": 1,
				"interior": { "X2": [{ "Parachain": 2004 }, { "AccountKey20": { "key": "0xabc" } }] }
			}),
		);
		assert_eq!(serde_json::to_value(MultiLocation::parent()).unwrap(), json!({ "parents": 1, "interior": "Here" }));
	}

	#[test]
	fn any_network_is_lowercase() {
		let junction = Junction::AccountId32 { network: Some(NetworkId::Any), id: "0x01".into() };
		assert_eq!(
			serde_json::to_value(junction).unwrap(),
			json!({ "AccountId32": { "network": "any", "id": "0x01" } }),
		);
	}

	#[test]
	fn decodes_both_interior_forms() {
		let legacy: MultiLocation =
			serde_json::from_value(json!({ "parents": 0, "interior": { "X1": { "Parachain": 1000 } } }))
				.unwrap();
		assert_eq!(legacy.interior, Junctions::Single(Junction::Parachain(1000)));

		let modern: MultiLocation = serde_json::from_value(
			json!({ "parents": 1, "interior": { "X2": [{ "PalletInstance": 50 }, { "GeneralIndex": 1984 }] } }),
		)
		.unwrap();
		assert_eq!(modern.general_index(), Some(1984));

		let here: MultiLocation =
			serde_json::from_value(json!({ "parents": 1, "interior": { "Here": null } })).unwrap();
		assert!(here.is_here());
	}

	#[test]
	fn general_index_survives_untagged_interiors() {
		let expected = MultiLocation::from_junctions(
			Parents::ONE,
			vec![Junction::Parachain(1000), Junction::PalletInstance(50), Junction::GeneralIndex(1984)],
		)
		.unwrap();

		// given the number and string spellings an asset table may use
		let number: MultiLocation = serde_json::from_str(
			r#"{"parents":1,"interior":{"X3":[{"Parachain":1000},{"PalletInstance":50},{"GeneralIndex":1984}]}}"#,
		)
		.unwrap();
		let string: MultiLocation = serde_json::from_str(
			r#"{"parents":1,"interior":{"X3":[{"Parachain":1000},{"PalletInstance":50},{"GeneralIndex":"1984"}]}}"#,
		)
		.unwrap();
		let single: MultiLocation =
			serde_json::from_str(r#"{"parents":0,"interior":{"X1":{"GeneralIndex":7}}}"#).unwrap();

		// then
		assert_eq!(number, expected);
		assert_eq!(string, expected);
		assert_eq!(single.interior, Junctions::Single(Junction::GeneralIndex(7)));
		assert_eq!(
			serde_json::to_value(&expected).unwrap()["interior"]["X3"][2],
			json!({ "GeneralIndex": 1984 }),
		);
	}

	#[test]
	fn rejects_mismatched_interior_tag() {
		let result = serde_json::from_value::<MultiLocation>(
			json!({ "parents": 1, "interior": { "X3": [{ "Parachain": 1 }] } }),
		);
		assert!(result.is_err());

		assert_eq!(
			Junctions::from_path(vec![Junction::OnlyChild; 9]),
			Err(LocationError::TooManyJunctions(9)),
		);
	}

	#[test]
	fn localize_strips_own_parachain() {
		let asset = MultiLocation::from_junctions(
			Parents::ONE,
			vec![Junction::Parachain(2000), Junction::PalletInstance(50), Junction::GeneralIndex(28)],
		)
		.unwrap();

		// given a chain with the matching para id
		let local = asset.localize(Some(2000));

		// then
		assert_eq!(
			local,
			MultiLocation::from_junctions(
				Parents::ZERO,
				vec![Junction::PalletInstance(50), Junction::GeneralIndex(28)]
			)
			.unwrap()
		);
		assert_eq!(asset.localize(Some(3000)), asset);
	}

	#[test]
	fn localize_here() {
		let relay_native = MultiLocation::new(5, Junctions::Here);
		assert_eq!(relay_native.localize(None), MultiLocation::here());
		assert_eq!(relay_native.localize(Some(2000)), relay_native);

		let only_para =
			MultiLocation::from_junctions(Parents::TWO, vec![Junction::Parachain(2000)]).unwrap();
		assert_eq!(only_para.localize(Some(2000)), MultiLocation::here());
	}

	#[test]
	fn version_reencoding() {
		let location = MultiLocation::new(Parents::ZERO, Junctions::Path(vec![account("0x01")]));
		assert_eq!(
			location.clone().for_version(Version::V3).interior,
			Junctions::Single(account("0x01"))
		);
		assert_eq!(location.clone().for_version(Version::V3).for_version(Version::V4), location);
	}
}
