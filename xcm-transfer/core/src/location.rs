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

//! Destination and beneficiary locations.

use crate::{
	client::ChainClient,
	error::{Error, Result},
	options::Address,
	scenario::Scenario,
};
use xcm_transfer_primitives::{
	create_x1_payload, Chain, Destination, Junction, MultiLocation, NetworkId, PalletFamily,
	Parents, Version, Versioned,
};

/// Para id of the AssetHub system chains.
pub const ASSET_HUB_PARA_ID: u32 = 1000;

/// Network id of Ethereum mainnet as used by Snowbridge.
pub fn ethereum_junction() -> Junction {
	Junction::GlobalConsensus(NetworkId::Ethereum { chain_id: 1 })
}

/// `"any"` for V1 and V2, omitted otherwise.
pub fn account_network(version: Version) -> Option<NetworkId> {
	version.requires_any_network().then_some(NetworkId::Any)
}

/// `AccountKey20` for Ethereum style addresses, `AccountId32` for everything else.
pub fn account_junction(
	client: &dyn ChainClient,
	address: &str,
	version: Version,
) -> Result<Junction> {
	let network = account_network(version);
	if client.is_ethereum_address(address) {
		Ok(Junction::AccountKey20 { network, key: address.to_string() })
	} else {
		Ok(Junction::AccountId32 { network, id: client.account_to_hex(address)? })
	}
}

/// `{parents: 0, X1 account}`, or the raw location when one was given.
pub fn local_beneficiary(
	client: &dyn ChainClient,
	address: &Address,
	version: Version,
) -> Result<MultiLocation> {
	match address {
		Address::Location(location) => Ok(location.clone()),
		Address::Account(account) => Ok(MultiLocation::new(
			Parents::ZERO,
			create_x1_payload(version, account_junction(client, account, version)?),
		)),
	}
}

/// Location of the receiving account as seen by the message on the destination.
///
/// Generic token pallets address the account relative to the sender: through the relay for
/// `ChainToRelay`, through the relay and the destination parachain for `ChainToChain`. Every
/// other combination addresses the account from inside the destination.
pub fn beneficiary(
	client: &dyn ChainClient,
	address: &Address,
	scenario: Scenario,
	family: Option<PalletFamily>,
	version: Version,
	para_id: Option<u32>,
) -> Result<MultiLocation> {
	let Address::Account(account) = address else {
		return local_beneficiary(client, address, version)
	};

	match (scenario, family) {
		(Scenario::ChainToRelay, Some(PalletFamily::GenericToken)) => Ok(MultiLocation::new(
			Parents::ONE,
			create_x1_payload(
				version,
				Junction::AccountId32 {
					network: account_network(version),
					id: client.account_to_hex(account)?,
				},
			),
		)),
		(Scenario::ChainToChain, Some(PalletFamily::GenericToken)) => {
			let para_id = para_id.ok_or_else(|| {
				Error::InvalidParameter("a destination parachain id is required".into())
			})?;
			Ok(MultiLocation::from_junctions(
				Parents::ONE,
				vec![Junction::Parachain(para_id), account_junction(client, account, version)?],
			)?)
		},
		_ => local_beneficiary(client, address, version),
	}
}

pub fn versioned_beneficiary(
	client: &dyn ChainClient,
	address: &Address,
	scenario: Scenario,
	family: Option<PalletFamily>,
	version: Version,
	para_id: Option<u32>,
) -> Result<Versioned<MultiLocation>> {
	let location = beneficiary(client, address, scenario, family, version, para_id)?;
	Ok(Versioned::new(version, location.for_version(version)))
}

/// `{parents: 2, X1 GlobalConsensus(Ethereum)}`.
pub fn ethereum_destination(version: Version) -> MultiLocation {
	MultiLocation::new(Parents::TWO, create_x1_payload(version, ethereum_junction()))
}

/// A parachain of another relay consensus, reached over a bridge.
pub fn bridge_destination(network: NetworkId, para_id: u32) -> Result<MultiLocation> {
	Ok(MultiLocation::from_junctions(
		Parents::TWO,
		vec![Junction::GlobalConsensus(network), Junction::Parachain(para_id)],
	)?)
}

/// A sibling seen from a parachain: the relay for id `0`, `{1, X1 Parachain}` otherwise.
pub fn chain_location(version: Version, para_id: u32) -> MultiLocation {
	if para_id == 0 {
		return MultiLocation::parent()
	}
	MultiLocation::new(Parents::ONE, create_x1_payload(version, Junction::Parachain(para_id)))
}

/// Location of the destination chain as seen from `origin`.
pub fn destination(
	origin: Chain,
	destination: &Destination,
	scenario: Scenario,
	version: Version,
	para_id: Option<u32>,
) -> Result<MultiLocation> {
	let chain = match destination {
		Destination::Location(location) => return Ok(location.clone()),
		Destination::Chain(chain) => *chain,
	};

	if chain.is_external() {
		return Ok(ethereum_destination(version))
	}

	let require_para_id = || {
		para_id
			.ok_or_else(|| Error::InvalidParameter(format!("no parachain id is known for {chain}")))
	};

	if !origin.shares_consensus_with(chain) {
		let network = chain.global_consensus().ok_or_else(|| {
			Error::IncompatibleNodes(format!("{chain} is not reachable from {origin}"))
		})?;
		return bridge_destination(network, require_para_id()?)
	}

	let parents = match scenario {
		Scenario::ChainToRelay => return Ok(MultiLocation::parent()),
		Scenario::ChainToChain => Parents::ONE,
		Scenario::RelayToChain => Parents::ZERO,
	};
	let para_id = require_para_id()?;
	Ok(MultiLocation::new(parents, create_x1_payload(version, Junction::Parachain(para_id))))
}

pub fn versioned_destination(
	origin: Chain,
	target: &Destination,
	scenario: Scenario,
	version: Version,
	para_id: Option<u32>,
) -> Result<Versioned<MultiLocation>> {
	let location = destination(origin, target, scenario, version, para_id)?;
	Ok(Versioned::new(version, location.for_version(version)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::OfflineClient;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	const ALICE: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
	const ALICE_HEX: &str = "0xd43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d";
	const EVM: &str = "0x1501C1413e4178c38567Ada8945A80351F7B8496";

	fn encode(location: Versioned<MultiLocation>) -> serde_json::Value {
		serde_json::to_value(location).unwrap()
	}

	#[test]
	fn generic_token_to_relay() {
		let location = versioned_beneficiary(
			&OfflineClient,
			&ALICE.into(),
			Scenario::ChainToRelay,
			Some(PalletFamily::GenericToken),
			Version::V1,
			None,
		)
		.unwrap();

		assert_eq!(
			encode(location),
			json!({ "V1": { "parents": 1, "interior": { "X1": {
				"AccountId32": { "network": "any", "id": ALICE_HEX }
			} } } })
		);
	}

	#[test]
	fn generic_token_to_sibling_evm_account() {
		let location = versioned_beneficiary(
			&OfflineClient,
			&EVM.into(),
			Scenario::ChainToChain,
			Some(PalletFamily::GenericToken),
			Version::V3,
			Some(2004),
		)
		.unwrap();

		assert_eq!(
			encode(location),
			json!({ "V3": { "parents": 1, "interior": { "X2": [
				{ "Parachain": 2004 },
				{ "AccountKey20": { "key": EVM } }
			] } } })
		);
	}

	#[test]
	fn generic_token_to_sibling_requires_para_id() {
		let result = beneficiary(
			&OfflineClient,
			&ALICE.into(),
			Scenario::ChainToChain,
			Some(PalletFamily::GenericToken),
			Version::V3,
			None,
		);

		assert!(matches!(result, Err(Error::InvalidParameter(_))));
	}

	#[test]
	fn cross_consensus_beneficiary_is_local() {
		let location = versioned_beneficiary(
			&OfflineClient,
			&ALICE.into(),
			Scenario::ChainToChain,
			Some(PalletFamily::CrossConsensusMessage),
			Version::V4,
			Some(2034),
		)
		.unwrap();

		assert_eq!(
			encode(location),
			json!({ "V4": { "parents": 0, "interior": { "X1": [{ "AccountId32": { "id": ALICE_HEX } }] } } })
		);
	}

	#[test]
	fn raw_location_address_is_kept() {
		let raw = MultiLocation::from_junctions(0, vec![Junction::OnlyChild]).unwrap();

		let location = beneficiary(
			&OfflineClient,
			&Address::Location(raw.clone()),
			Scenario::ChainToRelay,
			Some(PalletFamily::GenericToken),
			Version::V3,
			None,
		)
		.unwrap();

		assert_eq!(location, raw);
	}

	#[test]
	fn destinations_per_scenario() {
		let relay = destination(
			Chain::Hydration,
			&Chain::Polkadot.into(),
			Scenario::ChainToRelay,
			Version::V4,
			None,
		)
		.unwrap();
		assert_eq!(relay, MultiLocation::parent());

		let sibling = versioned_destination(
			Chain::Hydration,
			&Chain::Acala.into(),
			Scenario::ChainToChain,
			Version::V3,
			Some(2000),
		)
		.unwrap();
		assert_eq!(
			encode(sibling),
			json!({ "V3": { "parents": 1, "interior": { "X1": { "Parachain": 2000 } } } })
		);

		let child = versioned_destination(
			Chain::Polkadot,
			&Chain::Acala.into(),
			Scenario::RelayToChain,
			Version::V4,
			Some(2000),
		)
		.unwrap();
		assert_eq!(
			encode(child),
			json!({ "V4": { "parents": 0, "interior": { "X1": [{ "Parachain": 2000 }] } } })
		);
	}

	#[test]
	fn bridged_and_ethereum_destinations() {
		let kusama_hub = versioned_destination(
			Chain::AssetHubPolkadot,
			&Chain::AssetHubKusama.into(),
			Scenario::ChainToChain,
			Version::V4,
			Some(1000),
		)
		.unwrap();
		assert_eq!(
			encode(kusama_hub),
			json!({ "V4": { "parents": 2, "interior": { "X2": [
				{ "GlobalConsensus": "Kusama" },
				{ "Parachain": 1000 }
			] } } })
		);

		let ethereum = versioned_destination(
			Chain::AssetHubPolkadot,
			&Chain::Ethereum.into(),
			Scenario::ChainToChain,
			Version::V4,
			None,
		)
		.unwrap();
		assert_eq!(
			encode(ethereum),
			json!({ "V4": { "parents": 2, "interior": { "X1": [
				{ "GlobalConsensus": { "Ethereum": { "chain_id": 1 } } }
			] } } })
		);
	}

	#[test]
	fn relay_as_chain_location() {
		assert_eq!(chain_location(Version::V4, 0), MultiLocation::parent());
		assert_eq!(chain_location(Version::V4, 1000).parachain(), Some(1000));
	}
}
