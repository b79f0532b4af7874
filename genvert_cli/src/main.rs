use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use genvert_cli::Commands;
use genvert_cli::EmitArgs;
use genvert_cli::GenvertCli;
use genvert_cli::OutputFormat;
use genvert_core::AnyEmptyResult;
use genvert_core::DocumentOptions;
use genvert_core::Emitter;
use genvert_core::GenvertConfig;
use genvert_core::SleepDelay;
use genvert_core::Token;
use genvert_core::decode;
use genvert_core::encode;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() {
	let args = GenvertCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		None => emit_document(DocumentOptions::default()),
		Some(Commands::Emit(emit)) => run_emit(&args, emit),
		Some(Commands::Encode { values, format }) => run_encode(values, *format),
		Some(Commands::Decode { tokens, format }) => run_decode(tokens, *format),
	};

	if let Err(e) = result {
		match e.downcast::<genvert_core::GenvertError>() {
			Ok(genvert_err) => {
				let report: miette::Report = (*genvert_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				if use_color {
					eprintln!("{} {e}", "error:".red());
				} else {
					eprintln!("error: {e}");
				}
			}
		}
		process::exit(2);
	}
}

/// Logs go to stderr; stdout carries the document.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn resolve_root(args: &GenvertCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn run_emit(args: &GenvertCli, emit: &EmitArgs) -> AnyEmptyResult {
	let root = resolve_root(args);
	let mut options = GenvertConfig::load(&root)?
		.map(|config| config.document_options())
		.unwrap_or_default();
	emit.apply_to(&mut options);

	emit_document(options)
}

fn emit_document(options: DocumentOptions) -> AnyEmptyResult {
	tracing::debug!(?options, "resolved document options");

	let stdout = std::io::stdout();
	let mut emitter = Emitter::new(stdout.lock(), SleepDelay, options)?;
	emitter.run()?;

	Ok(())
}

#[derive(Serialize)]
struct EncodedEntry {
	value: i128,
	token: Token,
}

#[derive(Serialize)]
struct DecodedEntry<'a> {
	token: &'a str,
	value: u64,
}

fn run_encode(values: &[i128], format: OutputFormat) -> AnyEmptyResult {
	let entries = values
		.iter()
		.map(|&value| encode(value).map(|token| EncodedEntry { value, token }))
		.collect::<genvert_core::GenvertResult<Vec<_>>>()?;

	let mut stdout = std::io::stdout().lock();
	match format {
		OutputFormat::Text => {
			for entry in &entries {
				writeln!(stdout, "{}\t{}", entry.value, entry.token)?;
			}
		}
		OutputFormat::Json => {
			writeln!(stdout, "{}", serde_json::to_string(&entries)?)?;
		}
	}

	Ok(())
}

fn run_decode(tokens: &[String], format: OutputFormat) -> AnyEmptyResult {
	let entries = tokens
		.iter()
		.map(|token| {
			decode(token).map(|value| {
				DecodedEntry {
					token: token.as_str(),
					value,
				}
			})
		})
		.collect::<genvert_core::GenvertResult<Vec<_>>>()?;

	let mut stdout = std::io::stdout().lock();
	match format {
		OutputFormat::Text => {
			for entry in &entries {
				writeln!(stdout, "{}\t{}", entry.token, entry.value)?;
			}
		}
		OutputFormat::Json => {
			writeln!(stdout, "{}", serde_json::to_string(&entries)?)?;
		}
	}

	Ok(())
}
