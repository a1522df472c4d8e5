// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustmd5
// File: main.rs

use rustmd5::rmd5::app;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	app::run()?;
	Ok(())
}
