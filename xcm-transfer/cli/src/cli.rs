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

use crate::client::OfflineClient;
use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};
use std::{fs, path::PathBuf, str::FromStr};
use tracing::info;
use xcm_transfer_assets::StaticAssetRegistry;
use xcm_transfer_core::{
	dry_run, send, strategy, transferable_amount, xcm_fee, Address, Currency, TransferOptions,
};
use xcm_transfer_primitives::{Chain, Destination, MultiLocation, Version};

/// Print the call that transfers an asset over XCM.
#[derive(Debug, Parser)]
#[command(name = "xcm-transfer", version)]
pub struct Cli {
	/// Log directives, `RUST_LOG` syntax. Defaults to `RUST_LOG`, then to `xcm=info`.
	#[arg(long, global = true)]
	pub log: Option<String>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Build a transfer and print the resulting call as JSON.
	Send(SendCmd),
	/// Estimate the fees of a transfer on the origin and on the destination.
	Fees(SendCmd),
	/// Print the most the sender can transfer without reaping the account.
	Transferable(SendCmd),
	/// Build a transfer and simulate it on the origin.
	DryRun(SendCmd),
	/// List the supported chains with their XCM version and transfer pallets.
	Chains,
}

impl Cli {
	pub async fn run(self) -> anyhow::Result<()> {
		match self.command {
			Command::Send(cmd) => cmd.run(Query::Call).await,
			Command::Fees(cmd) => cmd.run(Query::Fees).await,
			Command::Transferable(cmd) => cmd.run(Query::Transferable).await,
			Command::DryRun(cmd) => cmd.run(Query::DryRun).await,
			Command::Chains => {
				for line in chain_table() {
					println!("{line}");
				}
				Ok(())
			},
		}
	}
}

fn parse_destination(value: &str) -> Result<Destination, String> {
	if value.trim_start().starts_with('{') {
		return parse_location(value).map(Destination::Location)
	}
	Chain::from_str(value).map(Destination::Chain).map_err(|e| e.to_string())
}

fn parse_location(value: &str) -> Result<MultiLocation, String> {
	serde_json::from_str(value).map_err(|e| format!("invalid location: {e}"))
}

/// What a transfer command prints.
#[derive(Clone, Copy, Debug)]
enum Query {
	Call,
	Fees,
	Transferable,
	DryRun,
}

#[derive(Debug, Args)]
struct SendCmd {
	/// Read the request from a JSON file instead of the flags below.
	#[arg(long, conflicts_with_all = ["from", "to", "amount", "address"])]
	request: Option<PathBuf>,

	/// Origin chain.
	#[arg(long, required_unless_present = "request")]
	from: Option<Chain>,

	/// Destination chain, or a JSON location.
	#[arg(long, required_unless_present = "request", value_parser = parse_destination)]
	to: Option<Destination>,

	/// Asset symbol on the origin.
	#[arg(long, group = "currency")]
	symbol: Option<String>,

	/// Asset id on the origin.
	#[arg(long, group = "currency")]
	asset_id: Option<String>,

	/// Asset location as JSON.
	#[arg(long, group = "currency", value_parser = parse_location)]
	location: Option<MultiLocation>,

	/// Amount in the asset's smallest unit.
	#[arg(long, required_unless_present = "request")]
	amount: Option<u128>,

	/// Recipient account.
	#[arg(long, required_unless_present = "request")]
	address: Option<String>,

	/// Signer of the call.
	#[arg(long)]
	sender: Option<String>,

	/// AssetHub account receiving leftovers of routes through AssetHub.
	#[arg(long)]
	ah_address: Option<String>,

	/// Symbol of the asset paying the fees.
	#[arg(long)]
	fee_asset: Option<String>,

	/// XCM version to encode for, e.g. `V3`.
	#[arg(long)]
	xcm_version: Option<Version>,

	/// Parachain id of the destination, for destinations given as locations.
	#[arg(long)]
	para_id: Option<u32>,

	#[arg(long)]
	disable_asset_check: bool,

	/// Pallet name override.
	#[arg(long)]
	pallet: Option<String>,

	/// Method name override.
	#[arg(long)]
	method: Option<String>,

	/// Refuse transfers that would reap the sender or the recipient.
	#[arg(long)]
	keep_alive: bool,

	#[command(flatten)]
	figures: Figures,
}

/// Chain figures supplied by hand in place of live queries.
#[derive(Debug, Args)]
struct Figures {
	/// Execution fee to report for dry runs.
	#[arg(long)]
	dry_run_fee: Option<u128>,

	/// Next hop fee to report for dry runs.
	#[arg(long, requires = "dry_run_fee")]
	destination_fee: Option<u128>,

	/// Ethereum bridge fee, in the native asset of the paying chain.
	#[arg(long)]
	bridge_fee: Option<u128>,

	/// Treat the Ethereum bridge as halted.
	#[arg(long)]
	bridge_halted: bool,

	/// Fee reported for every call estimate.
	#[arg(long)]
	fee: Option<u128>,

	/// Balance reported for every account and asset.
	#[arg(long)]
	balance: Option<u128>,
}

impl SendCmd {
	fn currency(&self) -> anyhow::Result<Currency> {
		match (&self.symbol, &self.asset_id, &self.location) {
			(Some(symbol), _, _) => Ok(Currency::symbol(symbol.as_str())),
			(_, Some(id), _) => Ok(Currency::id(id.as_str())),
			(_, _, Some(location)) => Ok(Currency::Location(location.clone())),
			_ => Err(anyhow!("one of --symbol, --asset-id or --location is required")),
		}
	}

	fn options(&self) -> anyhow::Result<TransferOptions> {
		if let Some(path) = &self.request {
			let request = fs::read_to_string(path)
				.with_context(|| format!("failed to read {}", path.display()))?;
			return serde_json::from_str(&request)
				.with_context(|| format!("invalid transfer request in {}", path.display()))
		}

		let missing = |flag: &str| anyhow!("--{flag} is required");
		let mut options = TransferOptions::new(
			self.from.ok_or_else(|| missing("from"))?,
			self.to.clone().ok_or_else(|| missing("to"))?,
			self.currency()?,
			self.amount.ok_or_else(|| missing("amount"))?,
			Address::Account(self.address.clone().ok_or_else(|| missing("address"))?),
		);
		options.sender_address = self.sender.clone();
		options.ah_address = self.ah_address.clone();
		options.fee_asset = self.fee_asset.as_deref().map(Currency::symbol);
		options.version = self.xcm_version;
		options.para_id_to = self.para_id;
		options.disable_asset_check = self.disable_asset_check;
		options.pallet = self.pallet.clone();
		options.method = self.method.clone();
		options.keep_alive = self.keep_alive;
		Ok(options)
	}

	fn client(&self) -> OfflineClient {
		OfflineClient {
			dry_run_fee: self.figures.dry_run_fee,
			destination_fee: self.figures.destination_fee,
			bridge_fee: self.figures.bridge_fee,
			bridge_halted: self.figures.bridge_halted,
			fee: self.figures.fee,
			balance: self.figures.balance,
		}
	}

	async fn run(self, query: Query) -> anyhow::Result<()> {
		let options = self.options()?;
		let registry = StaticAssetRegistry::bundled()?;
		let client = self.client();
		info!(
			target: "xcm::cli",
			origin = %options.origin,
			destination = %options.destination,
			currency = %options.currency,
			?query,
			"Building transfer"
		);

		let route = format!("{} -> {}", options.origin, options.destination);
		let output = match query {
			Query::Call => send(&client, registry, &options).await.context(route)?.to_json()?,
			Query::Fees => {
				let fees = xcm_fee(&client, registry, &options).await.context(route)?;
				serde_json::to_string_pretty(&fees)?
			},
			Query::Transferable =>
				transferable_amount(&client, registry, &options).await.context(route)?.to_string(),
			Query::DryRun => {
				let outcome = dry_run(&client, registry, &options).await.context(route)?;
				serde_json::to_string_pretty(&outcome)?
			},
		};
		println!("{output}");
		Ok(())
	}
}

fn chain_table() -> Vec<String> {
	Chain::all()
		.map(|chain| match strategy(chain) {
			Some(strategy) => {
				let pallets = [
					(strategy.supports_generic_token(), "generic-token"),
					(strategy.supports_cross_consensus(), "cross-consensus"),
					(strategy.supports_bridge_protocol(), "bridge-protocol"),
				]
				.into_iter()
				.filter_map(|(supported, name)| supported.then_some(name))
				.collect::<Vec<_>>()
				.join(", ");
				format!("{chain:<20} {:<4} {pallets}", strategy.version.to_string())
			},
			None if chain.is_relay_chain() => format!("{chain:<20} {:<4} relay", ""),
			None => format!("{chain:<20} {:<4} external", ""),
		})
		.collect()
}
