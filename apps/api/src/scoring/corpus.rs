use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Flattened reference text built from the configured skills list.
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillCorpus(String);

impl SkillCorpus {
    /// Trims every line, drops blank ones and joins the rest with single spaces.
    pub fn from_lines(raw: &str) -> Self {
        let joined = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for SkillCorpus {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read skill corpus at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads a newline-delimited skills file into a [`SkillCorpus`].
pub fn load_skills(path: impl AsRef<Path>) -> Result<SkillCorpus, CorpusError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let corpus = SkillCorpus::from_lines(&raw);
    let skill_count = raw.lines().filter(|l| !l.trim().is_empty()).count();
    info!("Loaded {skill_count} skills from {}", path.display());
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_skills(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let file = write_skills("python\n\nsql\n  \nfastapi\n");
        let corpus = load_skills(file.path()).unwrap();
        assert_eq!(corpus.as_str(), "python sql fastapi");
    }

    #[test]
    fn test_lines_are_trimmed_and_order_preserved() {
        let file = write_skills("  rust \n\tdistributed systems\r\nsql");
        let corpus = load_skills(file.path()).unwrap();
        assert_eq!(corpus.as_str(), "rust distributed systems sql");
    }

    #[test]
    fn test_whitespace_only_file_yields_empty_corpus() {
        let file = write_skills("\n   \n\t\n");
        let corpus = load_skills(file.path()).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = load_skills(&missing).unwrap_err();
        assert!(err.to_string().contains("nope.txt"), "got: {err}");
    }
}
