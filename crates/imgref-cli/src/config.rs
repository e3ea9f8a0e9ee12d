use std::path::Path;

use anyhow::Context;
use imgref_reference::ResolveOptions;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// Settings loaded from `--config`. Command-line flags take precedence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Batch resolution options.
    pub resolve: ResolveOptions,
    /// Default output format.
    pub format: Option<OutputFormat>,
    /// Report dropped entries from `resolve` on stderr.
    pub report_dropped: bool,
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config() {
        let c = CliConfig::load_or_default(None).unwrap();
        assert!(!c.resolve.normalize);
        assert!(c.format.is_none());
        assert!(!c.report_dropped);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = \"json\"\nreport_dropped = true\n\n[resolve]\nnormalize = true").unwrap();
        let c = CliConfig::load(file.path()).unwrap();
        assert_eq!(c.format, Some(OutputFormat::Json));
        assert!(c.report_dropped);
        assert!(c.resolve.normalize);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[resolve]").unwrap();
        let c = CliConfig::load(file.path()).unwrap();
        assert_eq!(c, CliConfig::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = 42").unwrap();
        assert!(CliConfig::load(file.path()).is_err());
    }
}
