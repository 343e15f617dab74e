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

//! The chain client collaborator.

use crate::{call::SerializedCall, error::Result, ss58};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use xcm_transfer_assets::AssetInfo;
use xcm_transfer_primitives::Chain;

/// Outcome of simulating a call on a live chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DryRunOutcome {
	Success {
		/// Execution fee charged on the chain the call was simulated on.
		fee: u128,
		/// Fee charged by the next hop, when the simulation could follow the message there.
		destination_fee: Option<u128>,
	},
	Failure {
		reason: String,
	},
}

/// Operating mode reported by the Ethereum bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeStatus {
	Normal,
	Halted,
}

/// Everything the builders need from a live chain.
///
/// The builders never manage connections, retries or subscriptions. Address helpers have
/// offline defaults; the remaining queries are only issued for dry runs, keep-alive checks and
/// Ethereum bridge routes.
#[async_trait]
pub trait ChainClient: Send + Sync {
	fn account_to_hex(&self, address: &str) -> Result<String> {
		ss58::account_to_hex(address)
	}

	fn is_ethereum_address(&self, address: &str) -> bool {
		ss58::is_ethereum_address(address)
	}

	/// Free balance of `address` in `asset` on `chain`, `None` if the account does not exist.
	async fn balance(&self, chain: Chain, address: &str, asset: &AssetInfo) -> Result<Option<u128>>;

	/// Fee `sender` would pay for submitting `call` on `chain`.
	async fn estimate_fee(
		&self,
		chain: Chain,
		call: &SerializedCall,
		sender: &str,
	) -> Result<Option<u128>>;

	async fn dry_run(&self, chain: Chain, call: &SerializedCall, sender: &str)
		-> Result<DryRunOutcome>;

	async fn bridge_status(&self) -> Result<BridgeStatus>;

	/// Bridge plus execution fee of delivering a message to Ethereum, denominated in the native
	/// asset of `payer`.
	async fn ethereum_bridge_fees(&self, payer: Chain) -> Result<u128>;
}
