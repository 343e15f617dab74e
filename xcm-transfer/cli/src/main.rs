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

//! `xcm-transfer`: prints the call that moves an asset between two chains.

mod cli;
mod client;
mod logger;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = cli::Cli::parse();
	logger::init(cli.log.as_deref());
	cli.run().await
}
