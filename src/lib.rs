// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustmd5
// File: lib.rs

pub mod rmd5 {
	pub mod app;
	pub mod benchmark;
	pub mod md5;
	pub mod output;
	pub mod suite;
}
