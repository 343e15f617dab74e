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

//! Per chain transfer strategies.
//!
//! Every parachain is described by one [`ChainStrategy`] record. Capabilities are plain optional
//! function fields, so "can this chain use the generic token pallet" is a field lookup. Hooks that
//! most chains share have defaults in [`defaults`]; the records themselves live in [`chains`] and
//! are collected by [`registry()`].

use crate::{
	call::SerializedCall,
	client::ChainClient,
	currency::OverriddenAsset,
	error::{Error, Result},
	options::Address,
	scenario::Scenario,
};
use std::fmt;
use xcm_transfer_assets::{normalize_symbol, AssetInfo, AssetRegistry};
use xcm_transfer_primitives::{Chain, Destination, MultiAsset, MultiLocation, Version, Versioned};

pub mod chains;
pub mod defaults;
mod registry;

pub use registry::{registry, strategy};

/// Collaborators shared by every builder.
#[derive(Clone, Copy)]
pub struct Context<'a> {
	pub client: &'a dyn ChainClient,
	pub registry: &'a dyn AssetRegistry,
}

impl<'a> Context<'a> {
	pub fn new(client: &'a dyn ChainClient, registry: &'a dyn AssetRegistry) -> Self {
		Self { client, registry }
	}
}

/// A validated transfer with the asset resolved against the origin's metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferInput {
	pub origin: Chain,
	pub destination: Destination,
	pub scenario: Scenario,
	pub asset: AssetInfo,
	pub amount: u128,
	pub address: Address,
	pub sender_address: Option<String>,
	pub ah_address: Option<String>,
	pub fee_asset: Option<AssetInfo>,
	pub overridden: Option<OverriddenAsset>,
	pub version: Version,
	pub para_id_to: Option<u32>,
	pub pallet: Option<String>,
	pub method: Option<String>,
}

impl TransferInput {
	pub fn destination_chain(&self) -> Option<Chain> {
		self.destination.chain()
	}

	pub fn is_destination(&self, chain: Chain) -> bool {
		self.destination.is_chain(chain)
	}

	/// Destination is one of the AssetHub chains.
	pub fn to_asset_hub(&self) -> bool {
		self.destination_chain().map_or(false, Chain::is_asset_hub)
	}

	pub fn is_symbol(&self, symbol: &str) -> bool {
		normalize_symbol(&self.asset.symbol) == normalize_symbol(symbol)
	}

	pub fn account(&self) -> Result<&str> {
		self.address.as_account().ok_or_else(|| {
			Error::InvalidAddress(format!(
				"a location address is not supported for transfers from {} to {}",
				self.origin, self.destination
			))
		})
	}

	pub fn sender(&self) -> Result<&str> {
		self.sender_address.as_deref().ok_or_else(|| {
			Error::InvalidParameter(format!(
				"a sender address is required for transfers from {} to {}",
				self.origin, self.destination
			))
		})
	}

	pub fn asset_location(&self) -> Result<&MultiLocation> {
		self.asset.location.as_ref().ok_or_else(|| {
			Error::InvalidCurrency(format!("asset {} has no location", self.asset.symbol))
		})
	}

	pub fn asset_id(&self) -> Result<&str> {
		self.asset.asset_id.as_deref().ok_or_else(|| {
			Error::InvalidCurrency(format!(
				"asset {} has no id on {}",
				self.asset.symbol, self.origin
			))
		})
	}

	pub fn para_id(&self) -> Result<u32> {
		self.para_id_to.ok_or_else(|| {
			Error::InvalidParameter(format!("no parachain id is known for {}", self.destination))
		})
	}

	/// Pallet name, honouring a caller override.
	pub fn module(&self, default: &str) -> String {
		self.pallet.clone().unwrap_or_else(|| default.to_string())
	}

	/// Method name, honouring a caller override.
	pub fn method(&self, default: &str) -> String {
		self.method.clone().unwrap_or_else(|| default.to_string())
	}

	pub fn scenario_error(&self, reason: impl Into<String>) -> Error {
		Error::scenario(self.origin, self.scenario, reason)
	}
}

/// Input of the cross-consensus pallet builders: the transfer plus the default locations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossConsensusInput {
	pub transfer: TransferInput,
	pub destination: Versioned<MultiLocation>,
	pub beneficiary: Versioned<MultiLocation>,
	pub assets: Versioned<Vec<MultiAsset>>,
}

/// Fees reported back for a [`Query`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeEstimate {
	pub fee: u128,
	pub destination_fee: Option<u128>,
}

/// A chain query a builder needs answered before it can finish.
#[derive(Clone, Debug, PartialEq)]
pub enum Query {
	/// Simulate `call` on `chain` as `sender`.
	DryRun { chain: Chain, call: SerializedCall, sender: String },
	/// Bridge and execution fees of delivering a message to Ethereum, paid by `payer`.
	EthereumBridgeFees { payer: Chain },
}

/// A builder waiting for a [`Query`].
pub struct Pending {
	pub query: Query,
	resume: Box<dyn FnOnce(FeeEstimate) -> Result<Prepared> + Send>,
}

impl Pending {
	pub fn new(
		query: Query,
		resume: impl FnOnce(FeeEstimate) -> Result<Prepared> + Send + 'static,
	) -> Self {
		Self { query, resume: Box::new(resume) }
	}

	pub fn resume(self, estimate: FeeEstimate) -> Result<Prepared> {
		(self.resume)(estimate)
	}
}

impl fmt::Debug for Pending {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Pending").field("query", &self.query).finish_non_exhaustive()
	}
}

/// Result of a builder: a finished call or a query to answer first.
#[derive(Debug)]
pub enum Prepared {
	Ready(SerializedCall),
	Pending(Pending),
}

impl From<SerializedCall> for Prepared {
	fn from(call: SerializedCall) -> Self {
		Prepared::Ready(call)
	}
}

pub type GenericTokenFn = fn(&Context<'_>, &TransferInput) -> Result<SerializedCall>;
pub type CrossConsensusFn = fn(&Context<'_>, &CrossConsensusInput) -> Result<Prepared>;
pub type BridgeProtocolFn = fn(&Context<'_>, &TransferInput) -> Result<SerializedCall>;
pub type CanUseFn = fn(&Context<'_>, &TransferInput) -> bool;
pub type CurrencySpecFn = fn(&Context<'_>, &TransferInput) -> Result<Versioned<Vec<MultiAsset>>>;
pub type CallFn = fn(&Context<'_>, &TransferInput) -> Result<SerializedCall>;

/// How one chain sends assets.
#[derive(Clone, Copy)]
pub struct ChainStrategy {
	pub chain: Chain,
	/// XCM version the chain currently speaks.
	pub version: Version,
	/// `XTokens` style transfer.
	pub generic_token: Option<GenericTokenFn>,
	/// `PolkadotXcm` style transfer.
	pub cross_consensus: Option<CrossConsensusFn>,
	/// Bridge specific pallet transfer.
	pub bridge_protocol: Option<BridgeProtocolFn>,
	/// Whether the generic token pallet may carry this particular transfer.
	pub can_use_generic_token: CanUseFn,
	pub currency_spec: CurrencySpecFn,
	/// Call issued on the relay chain when this chain is the destination.
	pub relay_to_chain: CallFn,
	pub local_transfer: CallFn,
}

impl ChainStrategy {
	pub fn new(chain: Chain, version: Version) -> Self {
		Self {
			chain,
			version,
			generic_token: None,
			cross_consensus: None,
			bridge_protocol: None,
			can_use_generic_token: defaults::can_use_generic_token,
			currency_spec: defaults::currency_spec,
			relay_to_chain: defaults::relay_to_chain,
			local_transfer: defaults::local_transfer,
		}
	}

	pub fn generic_token(mut self, transfer: GenericTokenFn) -> Self {
		self.generic_token = Some(transfer);
		self
	}

	pub fn cross_consensus(mut self, transfer: CrossConsensusFn) -> Self {
		self.cross_consensus = Some(transfer);
		self
	}

	pub fn bridge_protocol(mut self, transfer: BridgeProtocolFn) -> Self {
		self.bridge_protocol = Some(transfer);
		self
	}

	pub fn can_use_generic_token_when(mut self, check: CanUseFn) -> Self {
		self.can_use_generic_token = check;
		self
	}

	pub fn currency_spec_with(mut self, spec: CurrencySpecFn) -> Self {
		self.currency_spec = spec;
		self
	}

	pub fn relay_to_chain_with(mut self, call: CallFn) -> Self {
		self.relay_to_chain = call;
		self
	}

	pub fn local_transfer_with(mut self, call: CallFn) -> Self {
		self.local_transfer = call;
		self
	}

	/// Same strategy for a chain that only differs in name and version.
	pub fn variant(mut self, chain: Chain, version: Version) -> Self {
		self.chain = chain;
		self.version = version;
		self
	}

	pub fn supports_generic_token(&self) -> bool {
		self.generic_token.is_some()
	}

	pub fn supports_cross_consensus(&self) -> bool {
		self.cross_consensus.is_some()
	}

	pub fn supports_bridge_protocol(&self) -> bool {
		self.bridge_protocol.is_some()
	}
}

impl fmt::Debug for ChainStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ChainStrategy")
			.field("chain", &self.chain)
			.field("version", &self.version)
			.field("generic_token", &self.supports_generic_token())
			.field("cross_consensus", &self.supports_cross_consensus())
			.field("bridge_protocol", &self.supports_bridge_protocol())
			.finish()
	}
}
