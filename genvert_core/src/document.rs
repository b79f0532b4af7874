use std::io::Write;
use std::time::Duration;

use crate::GenvertError;
use crate::GenvertResult;
use crate::delay::Delay;
use crate::delay::NoDelay;
use crate::token::encode_unsigned;

/// Default identifier of the `<doc>` root element.
pub const DEFAULT_ROOT_ID: &str = "foo";
/// Default number of data lines.
pub const DEFAULT_COUNT: u64 = 20;
/// Default number of data lines per `<p>` block.
pub const DEFAULT_PARAGRAPH_SIZE: u64 = 10;
/// Default literal placed before the index in the last column.
pub const DEFAULT_PAYLOAD_PREFIX: &str = "data:";
/// Default pause after each data line.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(4);

/// Markers repeat with this period over the line index.
const MARKER_PERIOD: u64 = 5;

/// Shape of the emitted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
	/// Value of the `id` attribute on `<doc>`.
	pub root_id: String,
	/// Data lines are numbered `1..=count`.
	pub count: u64,
	/// Data lines per paragraph block. Must be non-zero.
	pub paragraph_size: u64,
	/// Literal placed before the index in the payload column.
	pub payload_prefix: String,
	/// Pause requested from the [`Delay`] after every data line.
	pub delay: Duration,
}

impl Default for DocumentOptions {
	fn default() -> Self {
		Self {
			root_id: DEFAULT_ROOT_ID.to_string(),
			count: DEFAULT_COUNT,
			paragraph_size: DEFAULT_PARAGRAPH_SIZE,
			payload_prefix: DEFAULT_PAYLOAD_PREFIX.to_string(),
			delay: DEFAULT_DELAY,
		}
	}
}

impl DocumentOptions {
	pub fn validate(&self) -> GenvertResult<()> {
		if self.paragraph_size == 0 {
			return Err(GenvertError::InvalidOptions(
				"paragraph size must be at least 1".to_string(),
			));
		}

		if let Some(c) = self
			.root_id
			.chars()
			.find(|&c| matches!(c, '"' | '<' | '>' | '&') || c.is_control())
		{
			return Err(GenvertError::InvalidOptions(format!(
				"root id `{}` contains the reserved character {c:?}",
				self.root_id
			)));
		}

		if let Some(c) = self
			.payload_prefix
			.chars()
			.find(|&c| matches!(c, '\t' | '\n' | '\r'))
		{
			return Err(GenvertError::InvalidOptions(format!(
				"payload prefix `{}` contains the column separator {c:?}",
				self.payload_prefix.escape_debug()
			)));
		}

		Ok(())
	}
}

/// Self-closing tag placed after selected data lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
	/// `<nl />`, after every line whose index is a multiple of 5.
	Newline,
	/// `<m/>`, after every line whose index leaves 2 when divided by 5.
	Point,
}

impl Marker {
	/// The marker that follows data line `index`, if any.
	pub fn after(index: u64) -> Option<Self> {
		match index % MARKER_PERIOD {
			0 => Some(Self::Newline),
			2 => Some(Self::Point),
			_ => None,
		}
	}

	pub fn tag(self) -> &'static str {
		match self {
			Self::Newline => "<nl />",
			Self::Point => "<m/>",
		}
	}
}

/// Counts gathered while emitting a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentSummary {
	pub paragraphs: u64,
	pub lines: u64,
	pub newline_markers: u64,
	pub point_markers: u64,
}

/// Streams a document line by line into `W`, pausing through `D` after every
/// data line.
///
/// Each line is flushed before the pause so a reader on the other end of a
/// pipe sees it as soon as it is produced.
#[derive(Debug)]
pub struct Emitter<W, D> {
	writer: W,
	delay: D,
	options: DocumentOptions,
	paragraph: u64,
	paragraph_open: bool,
	summary: DocumentSummary,
}

impl<W: Write, D: Delay> Emitter<W, D> {
	pub fn new(writer: W, delay: D, options: DocumentOptions) -> GenvertResult<Self> {
		options.validate()?;

		Ok(Self {
			writer,
			delay,
			options,
			paragraph: 0,
			paragraph_open: false,
			summary: DocumentSummary::default(),
		})
	}

	pub fn options(&self) -> &DocumentOptions {
		&self.options
	}

	/// Write the whole document. Any write failure aborts the run.
	pub fn run(&mut self) -> GenvertResult<DocumentSummary> {
		self.paragraph = 0;
		self.paragraph_open = false;
		self.summary = DocumentSummary::default();

		writeln!(self.writer, "<doc id=\"{}\">", self.options.root_id)?;

		for index in 1..=self.options.count {
			if (index - 1) % self.options.paragraph_size == 0 {
				self.open_paragraph()?;
			}

			self.write_line(index)?;
			self.writer.flush()?;
			self.delay.pause(self.options.delay);
		}

		if self.paragraph_open {
			writeln!(self.writer, "</p>")?;
			self.paragraph_open = false;
		}

		writeln!(self.writer, "</doc>")?;
		self.writer.flush()?;

		tracing::info!(
			paragraphs = self.summary.paragraphs,
			lines = self.summary.lines,
			newline_markers = self.summary.newline_markers,
			point_markers = self.summary.point_markers,
			"emitted document"
		);

		Ok(self.summary)
	}

	/// Give back the writer and the delay.
	pub fn into_parts(self) -> (W, D) {
		(self.writer, self.delay)
	}

	fn open_paragraph(&mut self) -> GenvertResult<()> {
		if self.paragraph_open {
			writeln!(self.writer, "</p>")?;
		}

		self.paragraph += 1;
		self.paragraph_open = true;
		self.summary.paragraphs += 1;
		writeln!(self.writer, "<p id=\"par{}\">", self.paragraph)?;
		tracing::debug!(paragraph = self.paragraph, "opened paragraph");

		Ok(())
	}

	fn write_line(&mut self, index: u64) -> GenvertResult<()> {
		let token = encode_unsigned(index);
		writeln!(
			self.writer,
			"{index}\t{token}\t{}{index}",
			self.options.payload_prefix
		)?;
		self.summary.lines += 1;
		tracing::trace!(index, %token, "emitted data line");

		if let Some(marker) = Marker::after(index) {
			writeln!(self.writer, "{}", marker.tag())?;
			match marker {
				Marker::Newline => self.summary.newline_markers += 1,
				Marker::Point => self.summary.point_markers += 1,
			}
		}

		Ok(())
	}
}

/// Render the document into a string without pausing.
pub fn render_document(options: &DocumentOptions) -> GenvertResult<String> {
	let mut emitter = Emitter::new(Vec::new(), NoDelay, options.clone())?;
	emitter.run()?;
	let (buffer, _) = emitter.into_parts();

	String::from_utf8(buffer)
		.map_err(|e| GenvertError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
