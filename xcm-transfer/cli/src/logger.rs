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

use tracing::Level;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

/// Directives used when neither `--log` nor `RUST_LOG` is given.
const DEFAULT_DIRECTIVES: &str = "xcm=info";

/// Logs go to stderr so that the printed call can be piped.
pub fn init(directives: Option<&str>) {
	let builder = EnvFilter::builder().with_default_directive(Level::WARN.into());
	let filter = match directives {
		Some(directives) => builder.parse_lossy(directives),
		None => match std::env::var(EnvFilter::DEFAULT_ENV) {
			Ok(directives) => builder.parse_lossy(directives),
			Err(_) => builder.parse_lossy(DEFAULT_DIRECTIVES),
		},
	};

	SubscriberBuilder::default()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.without_time()
		.init();
}
