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

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use xcm_transfer_primitives::{Chain, Destination};

/// Direction of a transfer relative to the relay chain.
#[derive(
	Clone,
	Copy,
	Debug,
	PartialEq,
	Eq,
	Hash,
	Serialize,
	Deserialize,
	Display,
	EnumString,
	IntoStaticStr,
)]
pub enum Scenario {
	/// From a parachain to its relay chain.
	ChainToRelay,
	/// From a relay chain down to one of its parachains.
	RelayToChain,
	/// Between two parachains, or from a parachain to a raw location.
	ChainToChain,
}

impl Scenario {
	pub fn resolve(origin: Chain, destination: &Destination) -> Self {
		if origin.is_relay_chain() {
			Scenario::RelayToChain
		} else if destination.is_relay_chain() {
			Scenario::ChainToRelay
		} else {
			Scenario::ChainToChain
		}
	}
}
