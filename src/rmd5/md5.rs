// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustmd5
// Module: md5
// Purpose: Incremental MD5 digest engine (RFC 1321).

use std::io::{self, Read};

/// Size of one compression block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Size of the finished digest in bytes.
pub const DIGEST_LEN: usize = 16;

// Additive step constants, floor(2^32 * abs(sin(i + 1))) for the
// 64 steps in order.
const SINE: [u32; 64] = [
	0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf,
	0x4787c62a, 0xa8304613, 0xfd469501, 0x698098d8, 0x8b44f7af,
	0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e,
	0x49b40821, 0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
	0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8, 0x21e1cde6,
	0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8,
	0x676f02d9, 0x8d2a4c8a, 0xfffa3942, 0x8771f681, 0x6d9d6122,
	0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
	0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039,
	0xe6db99e5, 0x1fa27cf8, 0xc4ac5665, 0xf4292244, 0x432aff97,
	0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d,
	0x85845dd1, 0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
	0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

// Left-rotation amounts, four per round, reused every four steps.
const SHIFT: [u32; 64] = [
	7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, //
	5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, //
	4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, //
	6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

// One 0x80 marker byte followed by zeros; finalize slices off as
// much as the pad length needs.
const PADDING: [u8; BLOCK_LEN] = {
	let mut padding = [0u8; BLOCK_LEN];
	padding[0] = 0x80;
	padding
};

/// Incremental MD5 context.
///
/// Data may be fed in chunks of any size through [`Md5::update`];
/// the digest is independent of how the input was split. The
/// context is consumed by [`Md5::finalize`], so a finished digest
/// can never be updated again.
///
/// ```
/// use rustmd5::rmd5::md5::Md5;
///
/// let mut ctx = Md5::new();
/// ctx.update(b"message ");
/// ctx.update(b"digest");
/// assert_eq!(
///     hex::encode(ctx.finalize()),
///     "f96b697d7cb7938d525a2f31aaf161d0",
/// );
/// ```
#[derive(Clone)]
pub struct Md5 {
	state: [u32; 4],
	count: u64,
	buffer: [u8; BLOCK_LEN],
	buffered: usize,
}

impl Default for Md5 {
	fn default() -> Self {
		Self::new()
	}
}

impl Md5 {
	/// Creates a context loaded with the RFC 1321 initialization
	/// constants.
	pub fn new() -> Self {
		Self {
			state: [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476],
			count: 0,
			buffer: [0u8; BLOCK_LEN],
			buffered: 0,
		}
	}

	/// Absorbs `input` into the running digest.
	///
	/// Accepts any length including zero. The bit counter wraps
	/// modulo 2^64 for inputs beyond that bound, as the algorithm
	/// specifies.
	pub fn update(&mut self, input: &[u8]) {
		self.count = self
			.count
			.wrapping_add((input.len() as u64).wrapping_mul(8));

		let mut input = input;
		if self.buffered > 0 {
			let take = (BLOCK_LEN - self.buffered).min(input.len());
			self.buffer[self.buffered..self.buffered + take]
				.copy_from_slice(&input[..take]);
			self.buffered += take;
			input = &input[take..];
			if self.buffered < BLOCK_LEN {
				return;
			}
			let block = self.buffer;
			self.transform(&block);
			self.buffered = 0;
		}

		let mut blocks = input.chunks_exact(BLOCK_LEN);
		for block in blocks.by_ref() {
			self.transform(block);
		}

		let tail = blocks.remainder();
		self.buffer[..tail.len()].copy_from_slice(tail);
		self.buffered = tail.len();
	}

	/// Pads the absorbed data, appends the pre-padding bit count
	/// and returns the 16-byte digest. Internal state is wiped
	/// before the context is dropped.
	pub fn finalize(mut self) -> [u8; DIGEST_LEN] {
		// Bit count as it stood before padding, low word first.
		let bits = self.count.to_le_bytes();

		let index = self.buffered;
		let pad_len = if index < 56 {
			56 - index
		} else {
			120 - index
		};
		self.update(&PADDING[..pad_len]);
		self.update(&bits);
		debug_assert_eq!(self.buffered, 0);

		let mut digest = [0u8; DIGEST_LEN];
		for (out, word) in
			digest.chunks_exact_mut(4).zip(self.state.iter())
		{
			out.copy_from_slice(&word.to_le_bytes());
		}

		self.wipe();
		digest
	}

	/// One-shot digest of a byte slice.
	pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
		let mut ctx = Self::new();
		ctx.update(data);
		ctx.finalize()
	}

	/// Digests everything a reader yields until end-of-stream.
	pub fn digest_reader<R: Read>(
		input: &mut R,
	) -> io::Result<[u8; DIGEST_LEN]> {
		let mut ctx = Self::new();
		let mut buffer = [0u8; 8192];
		loop {
			let count = input.read(&mut buffer)?;
			if count == 0 {
				break;
			}
			ctx.update(&buffer[..count]);
		}
		Ok(ctx.finalize())
	}

	// Compresses exactly one 64-byte block into the accumulator.
	fn transform(&mut self, block: &[u8]) {
		debug_assert_eq!(block.len(), BLOCK_LEN);

		let mut x = [0u32; 16];
		for (word, bytes) in x.iter_mut().zip(block.chunks_exact(4))
		{
			*word = u32::from_le_bytes([
				bytes[0], bytes[1], bytes[2], bytes[3],
			]);
		}

		let [mut a, mut b, mut c, mut d] = self.state;
		for i in 0..64 {
			let (f, g) = match i / 16 {
				0 => ((b & c) | (!b & d), i),
				1 => ((b & d) | (c & !d), (5 * i + 1) % 16),
				2 => (b ^ c ^ d, (3 * i + 5) % 16),
				_ => (c ^ (b | !d), (7 * i) % 16),
			};
			let sum = a
				.wrapping_add(f)
				.wrapping_add(SINE[i])
				.wrapping_add(x[g]);
			a = d;
			d = c;
			c = b;
			b = b.wrapping_add(sum.rotate_left(SHIFT[i]));
		}

		self.state[0] = self.state[0].wrapping_add(a);
		self.state[1] = self.state[1].wrapping_add(b);
		self.state[2] = self.state[2].wrapping_add(c);
		self.state[3] = self.state[3].wrapping_add(d);
	}

	// Zeroizes accumulator, counter and pending bytes.
	fn wipe(&mut self) {
		self.state = [0u32; 4];
		self.count = 0;
		self.buffer = [0u8; BLOCK_LEN];
		self.buffered = 0;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pending_stays_below_block_length() {
		let mut ctx = Md5::new();
		for chunk_len in [0usize, 1, 63, 64, 65, 127, 128, 200] {
			ctx.update(&vec![0x5a; chunk_len]);
			assert!(ctx.buffered < BLOCK_LEN);
		}
	}

	#[test]
	fn bit_counter_tracks_absorbed_bytes() {
		let mut ctx = Md5::new();
		ctx.update(b"abc");
		ctx.update(b"");
		ctx.update(&[0u8; 61]);
		assert_eq!(ctx.count, 64 * 8);
	}

	#[test]
	fn bit_counter_carries_into_high_half() {
		let mut ctx = Md5::new();
		ctx.count = (1u64 << 32) - 8;
		ctx.update(b"z");
		assert_eq!(ctx.count, 1u64 << 32);
	}

	#[test]
	fn bit_counter_wraps_modulo_2_64() {
		let mut ctx = Md5::new();
		ctx.count = u64::MAX - 7;
		ctx.update(b"z");
		assert_eq!(ctx.count, 0);
	}

	#[test]
	fn chunking_does_not_change_the_digest() {
		let data: Vec<u8> =
			(0..331u32).map(|i| (i * 7 + 3) as u8).collect();
		let whole = Md5::digest(&data);
		for chunk_len in [1usize, 7, 64] {
			let mut ctx = Md5::new();
			for chunk in data.chunks(chunk_len) {
				ctx.update(chunk);
			}
			assert_eq!(ctx.finalize(), whole, "chunk {}", chunk_len);
		}
	}

	#[test]
	fn update_with_empty_slice_is_a_no_op() {
		let mut ctx = Md5::new();
		ctx.update(b"");
		assert_eq!(
			hex::encode(ctx.finalize()),
			"d41d8cd98f00b204e9800998ecf8427e",
		);
	}

	#[test]
	fn digest_reader_matches_slice_digest() {
		let data = vec![0xabu8; 20000];
		let mut cursor = std::io::Cursor::new(data.clone());
		let streamed = Md5::digest_reader(&mut cursor)
			.expect("cursor reads cannot fail");
		assert_eq!(streamed, Md5::digest(&data));
	}
}
