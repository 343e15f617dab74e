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

use crate::scenario::Scenario;
use xcm_transfer_primitives::{Chain, LocationError};

/// Result type used by the transfer builders.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building a transfer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The currency is not known on the chain, or an override list is malformed.
	#[error("invalid currency: {0}")]
	InvalidCurrency(String),
	/// Origin and destination cannot talk to each other.
	#[error("incompatible chains: {0}")]
	IncompatibleNodes(String),
	/// The chain refuses this particular asset and scenario combination.
	#[error("scenario {scenario} is not supported by {chain}: {reason}")]
	ScenarioNotSupported { chain: Chain, scenario: Scenario, reason: String },
	#[error("invalid address: {0}")]
	InvalidAddress(String),
	#[error("invalid parameter: {0}")]
	InvalidParameter(String),
	#[error("{0} is not supported as a destination of this transfer")]
	NodeNotSupported(Chain),
	#[error("{0} has no XCM transfer pallet implemented")]
	NoXcmSupportImplemented(Chain),
	/// The keep-alive pre-check failed or could not be evaluated.
	#[error("keep alive check failed: {0}")]
	KeepAlive(String),
	#[error("dry run failed: {0}")]
	DryRunFailed(String),
	#[error("the chain client has no fee estimate for the call on {0}")]
	FeeUnavailable(Chain),
	#[error("the Ethereum bridge is currently halted")]
	BridgeHalted,
	/// A request to the chain client failed.
	#[error("chain client error: {0}")]
	Client(String),
	#[error(transparent)]
	Assets(#[from] xcm_transfer_assets::Error),
	#[error(transparent)]
	Location(#[from] LocationError),
	#[error(transparent)]
	Serialization(#[from] serde_json::Error),
}

impl Error {
	pub fn scenario(chain: Chain, scenario: Scenario, reason: impl Into<String>) -> Self {
		Error::ScenarioNotSupported { chain, scenario, reason: reason.into() }
	}
}
