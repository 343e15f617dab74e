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

use xcm_transfer_primitives::Chain;

/// Metadata lookup errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("no metadata is known for chain {0}")]
	UnknownChain(Chain),
	#[error("asset {query} was not found on {chain}")]
	AssetNotFound { chain: Chain, query: String },
	#[error("multiple assets on {chain} match {query}, use a more specific currency")]
	AmbiguousAsset { chain: Chain, query: String },
	#[error("invalid metadata table: {0}")]
	InvalidTable(String),
}
