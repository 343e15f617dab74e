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

//! Transfers where origin and destination are the same chain.

use crate::{
	call::{numeric_id, SerializedCall},
	error::Result,
	strategy::{Context, TransferInput},
};
use serde_json::{json, Value};

/// The native asset of the origin, as opposed to a registered foreign one.
pub fn is_native_asset(ctx: &Context<'_>, input: &TransferInput) -> Result<bool> {
	Ok(input.asset.is_native && input.is_symbol(ctx.registry.native_asset_symbol(input.origin)?))
}

/// `{Id: address}`, or the bare address on chains with Ethereum style accounts.
pub fn account_id(ctx: &Context<'_>, input: &TransferInput, address: &str) -> Value {
	if ctx.registry.is_evm(input.origin) {
		Value::String(address.to_string())
	} else {
		json!({ "Id": address })
	}
}

/// `Balances.transfer_keep_alive` for the native asset, `Tokens.transfer` otherwise.
pub fn transfer(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	if is_native_asset(ctx, input)? {
		native_transfer(ctx, input)
	} else {
		tokens_transfer(ctx, input)
	}
}

pub fn native_transfer(ctx: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	let address = input.account()?;
	SerializedCall::new("Balances", "transfer_keep_alive")
		.with("dest", account_id(ctx, input, address))?
		.with("value", input.amount.to_string())
}

/// `Tokens.transfer` addressed by numeric currency id.
pub fn tokens_transfer(_: &Context<'_>, input: &TransferInput) -> Result<SerializedCall> {
	let address = input.account()?;
	SerializedCall::new("Tokens", "transfer")
		.with("dest", json!({ "Id": address }))?
		.with("currency_id", numeric_id(input.asset_id()?))?
		.with("amount", input.amount.to_string())
}
