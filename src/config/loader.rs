//! Flat `key=value` property file parsing.

use std::fs;
use std::path::Path;
use serde::Serialize;
use tracing::debug;
use crate::utils::ConfigError;

const SEPARATOR: char = '=';
const COMMENT_CHAR: char = '#';

/// Integer properties in the order their keys first appeared.
///
/// A repeated key keeps its original position and takes the later value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Properties {
    entries: Vec<(String, i64)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: i64) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| *value)
    }

    /// Looks up a key that must be present.
    pub fn require(&self, key: &str) -> Result<i64, ConfigError> {
        self.get(key).ok_or_else(|| ConfigError::missing_key(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses property text.
///
/// Blank lines and `#` comments are skipped. Each remaining line is split on
/// the first `=`; the value is trimmed, stripped of surrounding quotes and
/// parsed as an integer.
pub fn parse_properties(text: &str) -> Result<Properties, ConfigError> {
    let mut props = Properties::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_CHAR) {
            continue;
        }

        let (key, raw_value) = line.split_once(SEPARATOR).unwrap_or((line, ""));
        let key = key.trim();
        let value = raw_value.trim().trim_matches('"').trim();

        let parsed = value
            .parse::<i64>()
            .map_err(|_| ConfigError::invalid_value(key, value))?;
        props.insert(key, parsed);
    }

    Ok(props)
}

/// Reads and parses a property file.
pub fn load_properties(path: impl AsRef<Path>) -> Result<Properties, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| ConfigError::io(path, &e))?;
    let props = parse_properties(&text)?;
    debug!("Loaded {} properties from {}", props.len(), path.display());
    Ok(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let text = "# lambda sizing\n\nbase_lambda_memory_mb=128\n   # indented comment\nmax_batch_size = 10\n";
        let props = parse_properties(text).unwrap();

        assert_eq!(props.len(), 2);
        assert_eq!(props.get("base_lambda_memory_mb"), Some(128));
        assert_eq!(props.get("max_batch_size"), Some(10));
    }

    #[test]
    fn test_parse_strips_quotes_and_whitespace() {
        let props = parse_properties("warm_latency_ms =  \"25\"  ").unwrap();
        assert_eq!(props.get("warm_latency_ms"), Some(25));
    }

    #[test]
    fn test_parse_trims_whitespace_inside_quotes() {
        let props = parse_properties("warm_latency_ms = \" 25 \"\nmax_batch_size=\"\t10\"").unwrap();
        assert_eq!(props.get("warm_latency_ms"), Some(25));
        assert_eq!(props.get("max_batch_size"), Some(10));
    }

    #[test]
    fn test_parse_splits_on_first_separator_only() {
        let err = parse_properties("key=1=2").unwrap_err();
        assert_eq!(err, ConfigError::invalid_value("key", "1=2"));
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        let err = parse_properties("process_per_message_ms=1.5").unwrap_err();
        assert_eq!(err, ConfigError::invalid_value("process_per_message_ms", "1.5"));
    }

    #[test]
    fn test_parse_line_without_separator_is_invalid() {
        let err = parse_properties("max_batch_size").unwrap_err();
        assert_eq!(err, ConfigError::invalid_value("max_batch_size", ""));
    }

    #[test]
    fn test_duplicate_key_keeps_position_takes_last_value() {
        let props = parse_properties("a=1\nb=2\na=3").unwrap();
        let entries: Vec<_> = props.iter().collect();
        assert_eq!(entries, vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_require_reports_missing_key() {
        let props = Properties::new();
        assert_eq!(
            props.require("batch_increment"),
            Err(ConfigError::missing_key("batch_increment"))
        );
    }

    #[test]
    fn test_load_properties_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "batch_increment=5").unwrap();
        writeln!(file, "batch_memory_overhead_mb=64").unwrap();

        let props = load_properties(file.path()).unwrap();
        assert_eq!(props.get("batch_increment"), Some(5));
        assert_eq!(props.get("batch_memory_overhead_mb"), Some(64));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("input.prop");

        let err = load_properties(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Io { ref path, .. } if *path == missing));
    }
}
