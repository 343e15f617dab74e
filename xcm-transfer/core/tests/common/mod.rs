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

//! A scripted chain client for the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::{collections::HashMap, sync::Mutex};
use xcm_transfer_assets::{AssetInfo, StaticAssetRegistry};
use xcm_transfer_core::{BridgeStatus, ChainClient, DryRunOutcome, Error, Result, SerializedCall};
use xcm_transfer_primitives::Chain;

pub const ALICE: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
pub const EVM_ADDRESS: &str = "0x1501C1413e4178c38567Ada8945A80351F7B8496";

pub fn registry() -> &'static StaticAssetRegistry {
	StaticAssetRegistry::bundled().unwrap()
}

/// Answers every query from fixed values and records which queries were made.
pub struct MockClient {
	balances: HashMap<Chain, u128>,
	fee: Option<u128>,
	chain_fees: HashMap<Chain, u128>,
	dry_run: DryRunOutcome,
	bridge_status: BridgeStatus,
	bridge_fee: u128,
	queries: Mutex<Vec<String>>,
}

impl Default for MockClient {
	fn default() -> Self {
		Self {
			balances: HashMap::new(),
			fee: None,
			chain_fees: HashMap::new(),
			dry_run: DryRunOutcome::Success { fee: 0, destination_fee: None },
			bridge_status: BridgeStatus::Normal,
			bridge_fee: 0,
			queries: Mutex::new(Vec::new()),
		}
	}
}

impl MockClient {
	pub fn with_balance(mut self, chain: Chain, balance: u128) -> Self {
		self.balances.insert(chain, balance);
		self
	}

	pub fn with_fee(mut self, fee: u128) -> Self {
		self.fee = Some(fee);
		self
	}

	/// Fee on `chain` only, overriding [`Self::with_fee`].
	pub fn with_chain_fee(mut self, chain: Chain, fee: u128) -> Self {
		self.chain_fees.insert(chain, fee);
		self
	}

	pub fn with_dry_run(mut self, outcome: DryRunOutcome) -> Self {
		self.dry_run = outcome;
		self
	}

	pub fn with_bridge_status(mut self, status: BridgeStatus) -> Self {
		self.bridge_status = status;
		self
	}

	pub fn with_bridge_fee(mut self, fee: u128) -> Self {
		self.bridge_fee = fee;
		self
	}

	pub fn queries(&self) -> Vec<String> {
		self.queries.lock().unwrap().clone()
	}

	fn record(&self, query: String) {
		self.queries.lock().unwrap().push(query);
	}
}

#[async_trait]
impl ChainClient for MockClient {
	async fn balance(&self, chain: Chain, _: &str, _: &AssetInfo) -> Result<Option<u128>> {
		self.record(format!("balance:{chain}"));
		Ok(self.balances.get(&chain).copied())
	}

	async fn estimate_fee(
		&self,
		chain: Chain,
		call: &SerializedCall,
		_: &str,
	) -> Result<Option<u128>> {
		self.record(format!("fee:{chain}:{}", call.module));
		Ok(self.chain_fees.get(&chain).copied().or(self.fee))
	}

	async fn dry_run(&self, chain: Chain, _: &SerializedCall, _: &str) -> Result<DryRunOutcome> {
		self.record(format!("dry_run:{chain}"));
		Ok(self.dry_run.clone())
	}

	async fn bridge_status(&self) -> Result<BridgeStatus> {
		self.record("bridge_status".into());
		Ok(self.bridge_status)
	}

	async fn ethereum_bridge_fees(&self, payer: Chain) -> Result<u128> {
		self.record(format!("bridge_fees:{payer}"));
		match self.bridge_fee {
			0 => Err(Error::Client("no bridge fee configured".into())),
			fee => Ok(fee),
		}
	}
}
