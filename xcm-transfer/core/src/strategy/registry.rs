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

//! Process wide table of chain strategies.

use super::{chains, ChainStrategy};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use xcm_transfer_primitives::Chain;

static REGISTRY: Lazy<HashMap<Chain, ChainStrategy>> = Lazy::new(|| {
	[
		chains::asset_hub::strategies(),
		chains::system::strategies(),
		chains::acala::strategies(),
		chains::ajuna::strategies(),
		chains::astar::strategies(),
		chains::bifrost::strategies(),
		chains::darwinia::strategies(),
		chains::generic::strategies(),
		chains::hydration::strategies(),
		chains::interlay::strategies(),
		chains::moonbeam::strategies(),
		chains::mythos::strategies(),
		chains::phala::strategies(),
		chains::polimec::strategies(),
	]
	.into_iter()
	.flatten()
	.map(|strategy| (strategy.chain, strategy))
	.collect()
});

/// Every registered strategy, keyed by chain.
pub fn registry() -> &'static HashMap<Chain, ChainStrategy> {
	&REGISTRY
}

/// Strategy of `chain`. Relay chains and Ethereum have none.
pub fn strategy(chain: Chain) -> Option<&'static ChainStrategy> {
	REGISTRY.get(&chain)
}
