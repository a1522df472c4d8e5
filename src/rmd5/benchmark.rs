// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustmd5
// Module: benchmark
// Purpose: Fixed-workload time trial behind `-t`.

use crate::rmd5::md5::Md5;
use std::time::Instant;

/// Length of one synthetic test block in bytes.
pub const TEST_BLOCK_LEN: usize = 10000;

/// Number of synthetic test blocks digested per trial.
pub const TEST_BLOCK_COUNT: usize = 10000;

/// Digests the fixed synthetic workload through a single context
/// and reports digest, elapsed time and throughput.
pub fn run_time_trial() {
	println!(
		"MD5 time trial. Digesting {} {}-byte blocks ...",
		TEST_BLOCK_COUNT, TEST_BLOCK_LEN
	);

	let mut block = [0u8; TEST_BLOCK_LEN];
	for (i, byte) in block.iter_mut().enumerate() {
		*byte = (i & 0xff) as u8;
	}

	let start = Instant::now();
	let mut ctx = Md5::new();
	for _ in 0..TEST_BLOCK_COUNT {
		ctx.update(&block);
	}
	let digest = ctx.finalize();
	let elapsed = start.elapsed();

	let total_bytes = (TEST_BLOCK_LEN * TEST_BLOCK_COUNT) as f64;
	let seconds = elapsed.as_secs_f64().max(f64::EPSILON);

	println!("done");
	println!("Digest = {}", hex::encode(digest));
	println!("Time = {:.3} seconds", elapsed.as_secs_f64());
	println!("Speed = {:.0} bytes/second", total_bytes / seconds);
}
