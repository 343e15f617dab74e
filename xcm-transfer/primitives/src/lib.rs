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

//! Primitive data structures for describing cross-consensus transfers.
//!
//! Everything in here is a plain value: locations, junctions, versioned wrappers, assets and chain
//! identifiers. The types serialize into the exact JSON shape that runtimes expect as call
//! parameters, so the builders in `xcm-transfer-core` never have to touch raw JSON.

pub mod amount;
pub mod asset;
pub mod chain;
pub mod instruction;
pub mod location;
pub mod pallet;
pub mod version;

pub use asset::{
	create_multi_asset, create_versioned_multi_assets, sort_multi_assets, AssetId, Fungibility,
	LegacyAssetId, MultiAsset,
};
pub use chain::{Chain, Destination, ParseChainError};
pub use instruction::{
	AssetFilter, Instruction, Weight, WeightLimit, WildAsset, WildFungibility,
};
pub use location::{
	create_x1_payload, Junction, Junctions, LocationError, MultiLocation, NetworkId, Parents,
	MAX_JUNCTIONS,
};
pub use pallet::{Pallet, PalletFamily};
pub use version::{add_version_header, Version, Versioned};
