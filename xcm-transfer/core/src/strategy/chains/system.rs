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

//! System parachains other than AssetHub: BridgeHub, People, Coretime, Collectives, Encointer.
//!
//! They trust the relay chain and each other, so everything moves by teleport. Sending to a
//! non-system parachain has to go through AssetHub instead.

use crate::{
	error::Result,
	pallets::{polkadot_xcm, xcm_pallet},
	scenario::Scenario,
	strategy::{ChainStrategy, Context, CrossConsensusInput, Prepared},
};
use xcm_transfer_primitives::{Chain, Version};

pub fn strategies() -> Vec<ChainStrategy> {
	let system = ChainStrategy::new(Chain::BridgeHubPolkadot, Version::V5)
		.cross_consensus(transfer)
		.relay_to_chain_with(xcm_pallet::teleport);

	vec![
		system,
		system.variant(Chain::BridgeHubKusama, Version::V5),
		system.variant(Chain::PeoplePolkadot, Version::V5),
		system.variant(Chain::PeopleKusama, Version::V5),
		system.variant(Chain::CoretimePolkadot, Version::V5),
		system.variant(Chain::CoretimeKusama, Version::V5),
		system.variant(Chain::Collectives, Version::V5),
		system.variant(Chain::Encointer, Version::V5),
	]
}

fn transfer(_: &Context<'_>, input: &CrossConsensusInput) -> Result<Prepared> {
	let transfer = &input.transfer;
	let trusted = transfer.destination_chain().map_or(false, Chain::is_system_chain);
	if transfer.scenario == Scenario::ChainToChain && !trusted {
		return Err(transfer.scenario_error(format!(
			"{} can only teleport to the relay chain and system chains, move the currency to \
			 AssetHub to reach other parachains",
			transfer.origin
		)))
	}
	polkadot_xcm::limited_teleport(input)
}
