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

//! A chain client without network access.
//!
//! Builders only query the chain for dry runs, fees, balances and Ethereum bridge fees. The
//! figures those queries need can be given on the command line; anything else fails.

use async_trait::async_trait;
use tracing::debug;
use xcm_transfer_assets::AssetInfo;
use xcm_transfer_core::{BridgeStatus, ChainClient, DryRunOutcome, Error, Result, SerializedCall};
use xcm_transfer_primitives::Chain;

const LOG_TARGET: &str = "xcm::cli";

#[derive(Clone, Debug, Default)]
pub struct OfflineClient {
	/// Execution fee reported for every dry run.
	pub dry_run_fee: Option<u128>,
	/// Fee of the next hop reported for every dry run.
	pub destination_fee: Option<u128>,
	pub bridge_fee: Option<u128>,
	pub bridge_halted: bool,
	/// Fee reported for every call estimate.
	pub fee: Option<u128>,
	/// Balance reported for every account and asset.
	pub balance: Option<u128>,
}

fn unavailable(what: &str, flag: &str) -> Error {
	Error::Client(format!("no network access to obtain the {what}, pass it with {flag}"))
}

#[async_trait]
impl ChainClient for OfflineClient {
	async fn balance(&self, chain: Chain, _: &str, asset: &AssetInfo) -> Result<Option<u128>> {
		debug!(target: LOG_TARGET, %chain, symbol = %asset.symbol, "Balance requested");
		self.balance.map(Some).ok_or_else(|| {
			Error::Client(format!(
				"no network access to read {} balances on {chain}, pass one with --balance",
				asset.symbol
			))
		})
	}

	async fn estimate_fee(
		&self,
		chain: Chain,
		call: &SerializedCall,
		_: &str,
	) -> Result<Option<u128>> {
		debug!(target: LOG_TARGET, %chain, method = %call.method, "Fee estimate requested");
		self.fee.map(Some).ok_or_else(|| unavailable("fee estimate", "--fee"))
	}

	async fn dry_run(&self, chain: Chain, call: &SerializedCall, _: &str) -> Result<DryRunOutcome> {
		debug!(target: LOG_TARGET, %chain, method = %call.method, "Dry run requested");
		let fee = self.dry_run_fee.ok_or_else(|| unavailable("dry run fee", "--dry-run-fee"))?;
		Ok(DryRunOutcome::Success { fee, destination_fee: self.destination_fee })
	}

	async fn bridge_status(&self) -> Result<BridgeStatus> {
		Ok(match self.bridge_halted {
			true => BridgeStatus::Halted,
			false => BridgeStatus::Normal,
		})
	}

	async fn ethereum_bridge_fees(&self, payer: Chain) -> Result<u128> {
		debug!(target: LOG_TARGET, %payer, "Bridge fee requested");
		self.bridge_fee.ok_or_else(|| unavailable("Ethereum bridge fee", "--bridge-fee"))
	}
}
