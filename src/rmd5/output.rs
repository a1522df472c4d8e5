// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustmd5
// Module: output
// Purpose: Digest rendering and output line assembly.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::ValueEnum;
use std::fmt;

/// Digest encodings surfaced via the CLI `--output` flag.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputOptions {
	Hex,
	Base64,
	HexBase64,
}

impl OutputOptions {
	pub fn canonical_name(self) -> &'static str {
		match self {
			Self::Hex => "hex",
			Self::Base64 => "base64",
			Self::HexBase64 => "hex-base64",
		}
	}
}

impl fmt::Display for OutputOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.canonical_name())
	}
}

/// Renders digest bytes into the tokens the selected encoding
/// asks for, hex first when both are requested.
pub fn render_tokens(
	digest: &[u8],
	option: OutputOptions,
) -> Vec<String> {
	match option {
		OutputOptions::Hex => vec![hex::encode(digest)],
		OutputOptions::Base64 => vec![STANDARD.encode(digest)],
		OutputOptions::HexBase64 => {
			vec![hex::encode(digest), STANDARD.encode(digest)]
		}
	}
}

/// Joins digest tokens and an optional label into one output
/// line. The label is dropped under `hash_only`.
pub fn assemble_output(
	hash_only: bool,
	tokens: Vec<String>,
	label: Option<&str>,
) -> String {
	let mut line = tokens.join(" ");
	if !hash_only {
		if let Some(label) = label {
			line.push(' ');
			line.push_str(label);
		}
	}
	line
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_base64_emits_both_tokens() {
		let digest = [0u8; 16];
		let tokens =
			render_tokens(&digest, OutputOptions::HexBase64);
		assert_eq!(
			tokens,
			vec![
				"00000000000000000000000000000000".to_string(),
				"AAAAAAAAAAAAAAAAAAAAAA==".to_string(),
			]
		);
	}

	#[test]
	fn hash_only_drops_the_label() {
		let line = assemble_output(
			true,
			vec!["cafe".to_string()],
			Some("ignored"),
		);
		assert_eq!(line, "cafe");
	}

	#[test]
	fn label_is_appended_after_tokens() {
		let line = assemble_output(
			false,
			vec!["cafe".to_string(), "yv4=".to_string()],
			Some("file.txt"),
		);
		assert_eq!(line, "cafe yv4= file.txt");
	}
}
