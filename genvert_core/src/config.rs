use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::DocumentOptions;
use crate::GenvertError;
use crate::GenvertResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"genvert.toml",
	".genvert.toml",
	".config/genvert.toml",
];

/// Configuration loaded from a `genvert.toml` file.
///
/// ```toml
/// [document]
/// root_id = "foo"
/// count = 20
/// paragraph_size = 10
/// payload_prefix = "data:"
/// delay_ms = 4
/// ```
///
/// Every key is optional. Missing keys keep the built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenvertConfig {
	/// Overrides for the emitted document.
	#[serde(default)]
	pub document: DocumentConfig,
}

/// The `[document]` table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DocumentConfig {
	pub root_id: Option<String>,
	pub count: Option<u64>,
	pub paragraph_size: Option<u64>,
	pub payload_prefix: Option<String>,
	/// Pause after each data line, in milliseconds.
	pub delay_ms: Option<u64>,
}

impl DocumentConfig {
	/// Overwrite the fields of `options` that this table sets.
	pub fn apply_to(&self, options: &mut DocumentOptions) {
		if let Some(root_id) = &self.root_id {
			options.root_id.clone_from(root_id);
		}
		if let Some(count) = self.count {
			options.count = count;
		}
		if let Some(paragraph_size) = self.paragraph_size {
			options.paragraph_size = paragraph_size;
		}
		if let Some(payload_prefix) = &self.payload_prefix {
			options.payload_prefix.clone_from(payload_prefix);
		}
		if let Some(delay_ms) = self.delay_ms {
			options.delay = Duration::from_millis(delay_ms);
		}
	}
}

impl GenvertConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> GenvertResult<Option<GenvertConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			tracing::debug!(root = %root.display(), "no config file found");
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// Parse config file contents.
	pub fn parse(content: &str) -> GenvertResult<GenvertConfig> {
		toml::from_str(content).map_err(|e| GenvertError::ConfigParse(e.to_string()))
	}

	/// Built-in defaults with this config layered on top.
	pub fn document_options(&self) -> DocumentOptions {
		let mut options = DocumentOptions::default();
		self.document.apply_to(&mut options);
		options
	}
}
