// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustmd5
// Module: app
// Purpose: CLI assembly and argv-order dispatch.

use crate::rmd5::benchmark::run_time_trial;
use crate::rmd5::md5::Md5;
use crate::rmd5::output::{
	assemble_output, render_tokens, OutputOptions,
};
use crate::rmd5::suite::run_suite;
use clap::{crate_name, Arg, ArgAction, ArgMatches};
use clap_complete::{generate, Generator, Shell};
use colored::*;
use std::error::Error;
use std::fs;
use std::io::{self, BufReader};
use std::path::Path;

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
{about-with-newline}
Without file, string or trial arguments, rmd5 digests standard
input and prints the digest alone.
{usage-heading} {usage}

{all-args}{after-help}
";

// A single unit of work, replayed in command-line order.
enum Task<'a> {
	DigestString(&'a str),
	DigestPath(&'a str),
	TimeTrial,
	SelfTest,
}

fn build_cli() -> clap::Command {
	clap::Command::new(crate_name!())
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name("rmd5")
		.version(clap::crate_version!())
		.about("Compute and verify MD5 message digests")
		.arg(
			Arg::new("string")
				.short('s')
				.long("string")
				.value_name("TEXT")
				.action(ArgAction::Append)
				.help("Digest the provided literal string"),
		)
		.arg(
			Arg::new("time-trial")
				.short('t')
				.long("time-trial")
				.action(ArgAction::SetTrue)
				.help("Run the 10000 x 10000-byte time trial"),
		)
		.arg(
			Arg::new("self-test")
				.short('x')
				.long("self-test")
				.action(ArgAction::SetTrue)
				.help("Run the built-in test vector suite"),
		)
		.arg(
			Arg::new("output")
				.short('o')
				.long("output")
				.value_parser(clap::value_parser!(OutputOptions))
				.default_value("hex")
				.help("Output format (hex, base64, hex-base64)"),
		)
		.arg(
			Arg::new("hash-only")
				.long("hash-only")
				.action(ArgAction::SetTrue)
				.help("Emit only digests without labels"),
		)
		.arg(
			Arg::new("completions")
				.long("completions")
				.value_name("SHELL")
				.value_parser(clap::value_parser!(Shell))
				.help("Generate shell completions and exit"),
		)
		.arg(
			Arg::new("FILE")
				.action(ArgAction::Append)
				.help("Files to digest; a directory digests its files non-recursively"),
		)
}

pub fn run() -> Result<(), Box<dyn Error>> {
	let matches = build_cli().get_matches();

	if let Some(shell) =
		matches.get_one::<Shell>("completions").copied()
	{
		print_completions(shell, &mut build_cli());
		return Ok(());
	}

	let option = matches
		.get_one::<OutputOptions>("output")
		.copied()
		.unwrap_or(OutputOptions::Hex);
	let hash_only = matches.get_flag("hash-only");

	let tasks = ordered_tasks(&matches);
	if tasks.is_empty() {
		digest_stdin(option, hash_only)?;
		return Ok(());
	}

	let mut failures = 0usize;
	for task in tasks {
		match task {
			Task::DigestString(text) => {
				digest_string(text, option, hash_only)
			}
			Task::DigestPath(path) => {
				failures += digest_path(path, option, hash_only)
			}
			Task::TimeTrial => run_time_trial(),
			Task::SelfTest => {
				if !run_suite() {
					failures += 1;
				}
			}
		}
	}

	if failures > 0 {
		std::process::exit(1);
	}
	Ok(())
}

fn print_completions<G: Generator>(
	gen: G,
	cmd: &mut clap::Command,
) {
	generate(gen, cmd, "rmd5", &mut io::stdout());
}

// Rebuilds the reference driver's semantics: every argument is
// handled in the order it appeared on the command line.
fn ordered_tasks(matches: &ArgMatches) -> Vec<Task<'_>> {
	let mut tasks: Vec<(usize, Task)> = Vec::new();

	if let (Some(values), Some(indices)) = (
		matches.get_many::<String>("string"),
		matches.indices_of("string"),
	) {
		for (text, index) in values.zip(indices) {
			tasks.push((index, Task::DigestString(text)));
		}
	}

	if let (Some(values), Some(indices)) = (
		matches.get_many::<String>("FILE"),
		matches.indices_of("FILE"),
	) {
		for (path, index) in values.zip(indices) {
			tasks.push((index, Task::DigestPath(path)));
		}
	}

	if matches.get_flag("time-trial") {
		if let Some(index) = matches.index_of("time-trial") {
			tasks.push((index, Task::TimeTrial));
		}
	}

	if matches.get_flag("self-test") {
		if let Some(index) = matches.index_of("self-test") {
			tasks.push((index, Task::SelfTest));
		}
	}

	tasks.sort_by_key(|(index, _)| *index);
	tasks.into_iter().map(|(_, task)| task).collect()
}

fn digest_string(
	text: &str,
	option: OutputOptions,
	hash_only: bool,
) {
	let digest = Md5::digest(text.as_bytes());
	let tokens = render_tokens(&digest, option);
	println!("{}", assemble_output(hash_only, tokens, Some(text)));
}

fn digest_stdin(
	option: OutputOptions,
	hash_only: bool,
) -> Result<(), Box<dyn Error>> {
	let digest = Md5::digest_reader(&mut io::stdin().lock())?;
	let tokens = render_tokens(&digest, option);
	println!("{}", assemble_output(hash_only, tokens, None));
	Ok(())
}

// Returns the number of entries that could not be read. Failures
// are reported and never abort the remaining arguments.
fn digest_path(
	path: &str,
	option: OutputOptions,
	hash_only: bool,
) -> usize {
	let md = match fs::metadata(path) {
		Ok(md) => md,
		Err(err) => {
			report_unreadable(path, &err);
			return 1;
		}
	};

	if !md.is_dir() {
		return digest_file(Path::new(path), path, option, hash_only);
	}

	let entries = match fs::read_dir(path) {
		Ok(entries) => entries,
		Err(err) => {
			report_unreadable(path, &err);
			return 1;
		}
	};

	let mut failures = 0;
	for entry in entries {
		match entry {
			Ok(entry) if entry.path().is_file() => {
				let entry_path = entry.path();
				let label = entry_path.display().to_string();
				failures += digest_file(
					&entry_path,
					&label,
					option,
					hash_only,
				);
			}
			Ok(_) => {}
			Err(err) => {
				report_unreadable(path, &err);
				failures += 1;
			}
		}
	}
	failures
}

fn digest_file(
	path: &Path,
	label: &str,
	option: OutputOptions,
	hash_only: bool,
) -> usize {
	let digest = match try_digest_file(path) {
		Ok(digest) => digest,
		Err(err) => {
			report_unreadable(label, &err);
			return 1;
		}
	};
	let tokens = render_tokens(&digest, option);
	println!("{}", assemble_output(hash_only, tokens, Some(label)));
	0
}

fn try_digest_file(path: &Path) -> io::Result<[u8; 16]> {
	let mut reader = BufReader::new(fs::File::open(path)?);
	Md5::digest_reader(&mut reader)
}

fn report_unreadable(label: &str, err: &io::Error) {
	eprintln!(
		"{}",
		format!("{} can't be opened ({})", label, err).red()
	);
}
