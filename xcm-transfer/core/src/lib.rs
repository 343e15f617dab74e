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

//! Builds XCM transfer calls between Polkadot and Kusama ecosystem chains.
//!
//! Given a [`TransferOptions`] request, [`send`] validates it against the asset tables, picks the
//! pallet each chain uses for the scenario and returns a [`SerializedCall`] descriptor that the
//! caller's [`ChainClient`] can submit.
//!
//! Supported routes:
//! * Parachain to relay chain, relay chain to parachain and parachain to parachain
//! * AssetHubPolkadot to AssetHubKusama over the bridge
//! * Ethereum assets to and from AssetHub over Snowbridge
//! * Same chain transfers

pub mod call;
pub mod client;
pub mod currency;
pub mod dispatch;
pub mod error;
pub mod ethereum;
pub mod execute;
pub mod fees;
pub mod keep_alive;
pub mod local;
pub mod location;
pub mod options;
pub mod pallets;
pub mod resolve;
pub mod scenario;
pub mod ss58;
pub mod strategy;
pub mod type_and_then;
pub mod validation;


pub use call::SerializedCall;
pub use client::{BridgeStatus, ChainClient, DryRunOutcome};
pub use currency::{Currency, OverrideAsset};
pub use dispatch::{build, dry_run, prepare, send};
pub use error::{Error, Result};
pub use fees::{
	origin_fee_details, transferable_amount, xcm_fee, DestinationFee, OriginFee, TransferFees,
};
pub use options::{Address, TransferOptions};
pub use resolve::resolve;
pub use scenario::Scenario;
pub use strategy::{registry, strategy, ChainStrategy, Context, Prepared, TransferInput};
