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

//! SS58 and Ethereum address handling.

use crate::error::{Error, Result};
use blake2::{Blake2b512, Digest};

const CHECKSUM_PREFIX: &[u8] = b"SS58PRE";
const CHECKSUM_LEN: usize = 2;
const ACCOUNT_LEN: usize = 32;

/// `0x` followed by exactly 40 hex digits.
pub fn is_ethereum_address(address: &str) -> bool {
	address
		.strip_prefix("0x")
		.map_or(false, |digits| digits.len() == 40 && digits.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Hex encoding of the account behind `address`.
///
/// Hex input is validated and returned lower-cased. SS58 input is decoded, its checksum verified
/// and the 32 byte account id returned.
pub fn account_to_hex(address: &str) -> Result<String> {
	if let Some(digits) = address.strip_prefix("0x") {
		hex::decode(digits)
			.map_err(|e| Error::InvalidAddress(format!("{address} is not valid hex: {e}")))?;
		return Ok(address.to_lowercase())
	}

	let data = bs58::decode(address)
		.into_vec()
		.map_err(|e| Error::InvalidAddress(format!("{address} is not a valid SS58 address: {e}")))?;

	let prefix_len = match data.first() {
		Some(0..=63) => 1,
		Some(64..=127) => 2,
		_ => return Err(Error::InvalidAddress(format!("{address} has an invalid SS58 prefix"))),
	};

	if data.len() != prefix_len + ACCOUNT_LEN + CHECKSUM_LEN {
		return Err(Error::InvalidAddress(format!(
			"{address} does not encode a {ACCOUNT_LEN} byte account"
		)))
	}

	let (payload, checksum) = data.split_at(data.len() - CHECKSUM_LEN);
	let hash = Blake2b512::new().chain_update(CHECKSUM_PREFIX).chain_update(payload).finalize();
	if &hash[..CHECKSUM_LEN] != checksum {
		return Err(Error::InvalidAddress(format!("{address} has an invalid SS58 checksum")))
	}

	Ok(format!("0x{}", hex::encode(&payload[prefix_len..])))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	const ALICE: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
	const ALICE_HEX: &str = "0xd43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d";

	#[test]
	fn decodes_ss58_account() {
		assert_eq!(account_to_hex(ALICE).unwrap(), ALICE_HEX);
	}

	#[test]
	fn hex_accounts_are_passed_through() {
		assert_eq!(account_to_hex(&ALICE_HEX.to_uppercase().replace("0X", "0x")).unwrap(), ALICE_HEX);
	}

	#[rstest]
	#[case("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQZ")]
	#[case("not-an-address")]
	#[case("0xzz")]
	#[case("")]
	fn rejects_malformed_addresses(#[case] address: &str) {
		assert!(matches!(account_to_hex(address), Err(Error::InvalidAddress(_))));
	}

	#[rstest]
	#[case("0x1501C1413e4178c38567Ada8945A80351F7B8496", true)]
	#[case("0x1501c1413e4178c38567ada8945a80351f7b849", false)]
	#[case(ALICE_HEX, false)]
	#[case(ALICE, false)]
	fn recognises_ethereum_addresses(#[case] address: &str, #[case] expected: bool) {
		assert_eq!(is_ethereum_address(address), expected);
	}
}
