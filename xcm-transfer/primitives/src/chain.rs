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

//! Identifiers of the chains transfers can start from or end on.

use crate::location::{MultiLocation, NetworkId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// A name did not match any known chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chain `{0}`")]
pub struct ParseChainError(pub String);

/// A chain known to the transfer builders.
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
	EnumIter,
	IntoStaticStr,
)]
pub enum Chain {
	// Relay chains.
	Polkadot,
	Kusama,
	Westend,
	Paseo,

	// Polkadot parachains.
	AssetHubPolkadot,
	Acala,
	Ajuna,
	Astar,
	BifrostPolkadot,
	BridgeHubPolkadot,
	Centrifuge,
	Collectives,
	CoretimePolkadot,
	Crust,
	Darwinia,
	Hydration,
	Interlay,
	KiltSpiritnet,
	Manta,
	Moonbeam,
	Mythos,
	NeuroWeb,
	Nodle,
	Peaq,
	Pendulum,
	PeoplePolkadot,
	Phala,
	Polimec,
	Unique,

	// Kusama parachains.
	AssetHubKusama,
	Altair,
	Basilisk,
	BifrostKusama,
	BridgeHubKusama,
	CoretimeKusama,
	Crab,
	CrustShadow,
	Encointer,
	Karura,
	Kintsugi,
	Laos,
	Moonriver,
	PeopleKusama,
	Quartz,
	Shiden,

	// Test networks.
	AssetHubWestend,
	AssetHubPaseo,

	// External consensus reachable over the Snowbridge bridge.
	Ethereum,
}

impl Chain {
	pub fn name(self) -> &'static str {
		self.into()
	}

	pub fn is_relay_chain(self) -> bool {
		matches!(self, Chain::Polkadot | Chain::Kusama | Chain::Westend | Chain::Paseo)
	}

	pub fn is_external(self) -> bool {
		self == Chain::Ethereum
	}

	/// The relay chain whose consensus this chain shares. `None` for external ecosystems.
	pub fn relay_chain(self) -> Option<Chain> {
		use Chain::*;
		Some(match self {
			Polkadot | AssetHubPolkadot | Acala | Ajuna | Astar | BifrostPolkadot |
			BridgeHubPolkadot | Centrifuge | Collectives | CoretimePolkadot | Crust | Darwinia |
			Hydration | Interlay | KiltSpiritnet | Manta | Moonbeam | Mythos | NeuroWeb | Nodle |
			Peaq | Pendulum | PeoplePolkadot | Phala | Polimec | Unique => Polkadot,
			Kusama | AssetHubKusama | Altair | Basilisk | BifrostKusama | BridgeHubKusama |
			CoretimeKusama | Crab | CrustShadow | Encointer | Karura | Kintsugi | Laos | Moonriver |
			PeopleKusama | Quartz | Shiden => Kusama,
			Westend | AssetHubWestend => Westend,
			Paseo | AssetHubPaseo => Paseo,
			Ethereum => return None,
		})
	}

	/// System parachains are trusted by their relay and may teleport to each other.
	pub fn is_system_chain(self) -> bool {
		use Chain::*;
		matches!(
			self,
			AssetHubPolkadot |
				BridgeHubPolkadot |
				Collectives | CoretimePolkadot |
				PeoplePolkadot | AssetHubKusama |
				BridgeHubKusama | CoretimeKusama |
				PeopleKusama | Encointer |
				AssetHubWestend | AssetHubPaseo
		)
	}

	pub fn is_asset_hub(self) -> bool {
		matches!(
			self,
			Chain::AssetHubPolkadot |
				Chain::AssetHubKusama |
				Chain::AssetHubWestend |
				Chain::AssetHubPaseo
		)
	}

	pub fn is_bifrost(self) -> bool {
		matches!(self, Chain::BifrostPolkadot | Chain::BifrostKusama)
	}

	/// The AssetHub of this chain's ecosystem.
	pub fn asset_hub(self) -> Option<Chain> {
		Some(match self.relay_chain()? {
			Chain::Polkadot => Chain::AssetHubPolkadot,
			Chain::Kusama => Chain::AssetHubKusama,
			Chain::Westend => Chain::AssetHubWestend,
			_ => Chain::AssetHubPaseo,
		})
	}

	/// Network id used in `GlobalConsensus` junctions pointing at this chain's ecosystem.
	pub fn global_consensus(self) -> Option<NetworkId> {
		match self {
			Chain::Ethereum => Some(NetworkId::Ethereum { chain_id: 1 }),
			chain => match chain.relay_chain()? {
				Chain::Polkadot => Some(NetworkId::Polkadot),
				Chain::Kusama => Some(NetworkId::Kusama),
				Chain::Westend => Some(NetworkId::Westend),
				_ => None,
			},
		}
	}

	/// Both chains run under the same relay chain.
	pub fn shares_consensus_with(self, other: Chain) -> bool {
		matches!((self.relay_chain(), other.relay_chain()), (Some(a), Some(b)) if a == b)
	}

	pub fn all() -> impl Iterator<Item = Chain> {
		Chain::iter()
	}
}

impl FromStr for Chain {
	type Err = ParseChainError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		Chain::iter()
			.find(|chain| chain.name().eq_ignore_ascii_case(name))
			.ok_or_else(|| ParseChainError(name.into()))
	}
}

/// Where a transfer goes: a named chain or a caller supplied location.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Destination {
	Chain(Chain),
	Location(MultiLocation),
}

impl Destination {
	pub fn chain(&self) -> Option<Chain> {
		match self {
			Destination::Chain(chain) => Some(*chain),
			Destination::Location(_) => None,
		}
	}

	pub fn is_location(&self) -> bool {
		matches!(self, Destination::Location(_))
	}

	pub fn is_chain(&self, chain: Chain) -> bool {
		self.chain() == Some(chain)
	}

	pub fn is_relay_chain(&self) -> bool {
		self.chain().map_or(false, Chain::is_relay_chain)
	}
}

impl From<Chain> for Destination {
	fn from(chain: Chain) -> Self {
		Destination::Chain(chain)
	}
}

impl std::fmt::Display for Destination {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Destination::Chain(chain) => write!(f, "{chain}"),
			Destination::Location(location) => write!(f, "{location:?}"),
		}
	}
}
