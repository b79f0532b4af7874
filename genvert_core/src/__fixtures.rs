use std::time::Duration;

use crate::Delay;
use crate::DocumentOptions;

/// Records every requested pause without waiting.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingDelay {
	pub(crate) pauses: Vec<Duration>,
}

impl RecordingDelay {
	pub(crate) fn total(&self) -> Duration {
		self.pauses.iter().sum()
	}
}

impl Delay for RecordingDelay {
	fn pause(&mut self, duration: Duration) {
		self.pauses.push(duration);
	}
}

/// The full default document, line by line.
pub(crate) const DEFAULT_DOCUMENT_LINES: &[&str] = &[
	"<doc id=\"foo\">\n",
	"<p id=\"par1\">\n",
	"1\tb\tdata:1\n",
	"2\tc\tdata:2\n",
	"<m/>\n",
	"3\td\tdata:3\n",
	"4\te\tdata:4\n",
	"5\tf\tdata:5\n",
	"<nl />\n",
	"6\tg\tdata:6\n",
	"7\th\tdata:7\n",
	"<m/>\n",
	"8\ti\tdata:8\n",
	"9\tj\tdata:9\n",
	"10\tk\tdata:10\n",
	"<nl />\n",
	"</p>\n",
	"<p id=\"par2\">\n",
	"11\tl\tdata:11\n",
	"12\tm\tdata:12\n",
	"<m/>\n",
	"13\tn\tdata:13\n",
	"14\to\tdata:14\n",
	"15\tp\tdata:15\n",
	"<nl />\n",
	"16\tq\tdata:16\n",
	"17\tr\tdata:17\n",
	"<m/>\n",
	"18\ts\tdata:18\n",
	"19\tt\tdata:19\n",
	"20\tu\tdata:20\n",
	"<nl />\n",
	"</p>\n",
	"</doc>\n",
];

pub(crate) fn default_document() -> String {
	DEFAULT_DOCUMENT_LINES.concat()
}

/// A short document: two paragraphs of three lines each, plus a partial one.
pub(crate) fn short_options() -> DocumentOptions {
	DocumentOptions {
		root_id: "bar".to_string(),
		count: 7,
		paragraph_size: 3,
		payload_prefix: "x=".to_string(),
		..DocumentOptions::default()
	}
}

pub(crate) const SHORT_DOCUMENT: &str = "<doc id=\"bar\">\n<p id=\"par1\">\n1\tb\tx=1\n2\tc\tx=2\n<m/>\n3\td\tx=3\n</p>\n<p id=\"par2\">\n4\te\tx=4\n5\tf\tx=5\n<nl />\n6\tg\tx=6\n</p>\n<p id=\"par3\">\n7\th\tx=7\n<m/>\n</p>\n</doc>\n";
