use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use genvert_core::DocumentOptions;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Stream a small deterministic vertical fixture document to stdout.",
	long_about = "genvert writes a pseudo-XML vertical document made of numbered data lines, each \
	              carrying a base62 key token, grouped into paragraph blocks and sprinkled with \
	              marker tags.\n\nRunning `genvert` without a subcommand emits the default \
	              document (20 lines, 2 paragraphs), pausing 4ms after each line.\n\nQuick \
	              start:\n  genvert                 Emit the default document\n  genvert emit \
	              --no-delay Emit without pacing\n  genvert encode 63       Print the token for a \
	              value\n  genvert decode bb       Print the value of a token"
)]
pub struct GenvertCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Directory searched for `genvert.toml` by `emit`.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose logging on stderr.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Emit the fixture document to stdout.
	///
	/// Settings are taken from the flags below, then from `genvert.toml`,
	/// then from the built-in defaults. Running `genvert` without a
	/// subcommand always emits the built-in defaults and reads no config.
	Emit(EmitArgs),
	/// Print the key token for each value.
	///
	/// Tokens are written least significant digit first and hold at most 8
	/// symbols. Zero has the empty token. Negative values are rejected.
	Encode {
		/// Values to encode, from 0 to 18446744073709551615.
		#[arg(required = true, allow_negative_numbers = true)]
		values: Vec<i128>,

		/// Output format.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Print the value of each key token.
	Decode {
		/// Tokens to decode.
		#[arg(required = true)]
		tokens: Vec<String>,

		/// Output format.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Debug, Clone, Default, Args)]
pub struct EmitArgs {
	/// Number of data lines.
	#[arg(long)]
	pub count: Option<u64>,

	/// Data lines per paragraph block.
	#[arg(long)]
	pub paragraph_size: Option<u64>,

	/// Value of the `id` attribute on the root element.
	#[arg(long)]
	pub root_id: Option<String>,

	/// Literal placed before the index in the last column.
	#[arg(long)]
	pub payload_prefix: Option<String>,

	/// Pause after each data line, in milliseconds.
	#[arg(long, conflicts_with = "no_delay")]
	pub delay_ms: Option<u64>,

	/// Do not pause between lines.
	#[arg(long, default_value_t = false)]
	pub no_delay: bool,
}

impl EmitArgs {
	/// Overwrite the fields of `options` set on the command line.
	pub fn apply_to(&self, options: &mut DocumentOptions) {
		if let Some(count) = self.count {
			options.count = count;
		}
		if let Some(paragraph_size) = self.paragraph_size {
			options.paragraph_size = paragraph_size;
		}
		if let Some(root_id) = &self.root_id {
			options.root_id.clone_from(root_id);
		}
		if let Some(payload_prefix) = &self.payload_prefix {
			options.payload_prefix.clone_from(payload_prefix);
		}
		if let Some(delay_ms) = self.delay_ms {
			options.delay = Duration::from_millis(delay_ms);
		}
		if self.no_delay {
			options.delay = Duration::ZERO;
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// One tab separated pair per line.
	Text,
	/// A JSON array of objects.
	Json,
}
