// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustmd5
// Module: suite
// Purpose: Built-in test vector suite behind `-x`.

use crate::rmd5::md5::Md5;
use colored::*;

/// One reference input with its published digest.
pub struct TestVector {
	pub input: &'static str,
	pub expected: &'static str,
}

/// The seven reference vectors of RFC 1321, appendix A.5.
pub const TEST_VECTORS: [TestVector; 7] = [
	TestVector {
		input: "",
		expected: "d41d8cd98f00b204e9800998ecf8427e",
	},
	TestVector {
		input: "a",
		expected: "0cc175b9c0f1b6a831c399e269772661",
	},
	TestVector {
		input: "abc",
		expected: "900150983cd24fb0d6963f7d28e17f72",
	},
	TestVector {
		input: "message digest",
		expected: "f96b697d7cb7938d525a2f31aaf161d0",
	},
	TestVector {
		input: "abcdefghijklmnopqrstuvwxyz",
		expected: "c3fcd3d76192e4007dfb496cca67e13b",
	},
	TestVector {
		input: "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
		expected: "d174ab98d277d9f5a5611c2c9f419d9f",
	},
	TestVector {
		input: "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
		expected: "57edf4a22be3c955ac49da2e2107b67a",
	},
];

/// Digests every reference vector and compares it against the
/// published value. Returns whether all vectors matched.
pub fn run_suite() -> bool {
	println!("MD5 test suite:");
	let mut all_ok = true;
	for vector in &TEST_VECTORS {
		let digest =
			hex::encode(Md5::digest(vector.input.as_bytes()));
		if digest == vector.expected {
			println!(
				"{} {:?} {}",
				digest,
				vector.input,
				"ok".green()
			);
		} else {
			all_ok = false;
			println!(
				"{} {:?} {} (expected {})",
				digest,
				vector.input,
				"MISMATCH".red(),
				vector.expected
			);
		}
	}
	if !all_ok {
		eprintln!(
			"{}",
			"test suite failed: digest mismatch".red()
		);
	}
	all_ok
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_suite_vector_matches_its_published_digest() {
		for vector in &TEST_VECTORS {
			assert_eq!(
				hex::encode(Md5::digest(vector.input.as_bytes())),
				vector.expected,
				"input {:?}",
				vector.input
			);
		}
	}

	#[test]
	fn run_suite_reports_success() {
		assert!(run_suite());
	}
}
