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

//! Transfer pallets a chain may expose.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A pallet through which assets leave a chain.
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
	EnumIter,
	IntoStaticStr,
)]
pub enum Pallet {
	XTokens,
	OrmlXTokens,
	PolkadotXcm,
	RelayerXcm,
	XTransfer,
	XcmPallet,
}

/// Families of transfer pallets that share a call layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum PalletFamily {
	/// `XTokens` style: currency selector plus amount.
	GenericToken,
	/// `PolkadotXcm` style: versioned destination, beneficiary and asset list.
	CrossConsensusMessage,
	/// Bridge specific pallets with their own layout.
	BridgeProtocol,
}

impl Pallet {
	pub fn family(self) -> PalletFamily {
		match self {
			Pallet::XTokens | Pallet::OrmlXTokens => PalletFamily::GenericToken,
			Pallet::PolkadotXcm | Pallet::RelayerXcm | Pallet::XcmPallet =>
				PalletFamily::CrossConsensusMessage,
			Pallet::XTransfer => PalletFamily::BridgeProtocol,
		}
	}

	pub fn name(self) -> &'static str {
		self.into()
	}
}
