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

//! Static chain and asset metadata.
//!
//! The builders only ever read this data. [`AssetRegistry`] is the lookup interface;
//! [`StaticAssetRegistry`] implements it over a JSON table, and [`StaticAssetRegistry::bundled`]
//! returns the table shipped with this crate.

mod error;
mod registry;
mod table;
mod types;

pub use error::Error;
pub use registry::{normalize_symbol, AssetQuery, AssetRegistry, SymbolSpecifier};
pub use table::StaticAssetRegistry;
pub use types::{AssetInfo, ChainAssets};

/// Log target of this crate.
pub const LOG_TARGET: &str = "xcm::assets";
