use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use hours_core::{encode, encode_compact, WeeklySchedule};
use serde::Deserialize;

/// A schedule document as the editor saves it: a top-level `days` map keyed
/// by weekday name.
#[derive(Debug, Deserialize)]
struct ScheduleDoc {
    days: WeeklySchedule,
}

/// Encode a schedule document into the storage string
#[derive(Debug, Parser)]
pub struct EncodeCommand {
    /// Schedule document (.json, .yaml or .yml) with a top-level `days` map
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Always emit the compact token form
    #[arg(long)]
    pub compact: bool,
}

impl EncodeCommand {
    pub fn execute(&self) -> Result<i32> {
        let schedule = load_document(&self.file)?;
        let stored = if self.compact {
            encode_compact(&schedule)
        } else {
            encode(&schedule)
        };
        println!("{stored}");
        Ok(0)
    }
}

fn load_document(path: &Path) -> Result<WeeklySchedule> {
    if !path.exists() {
        anyhow::bail!(
            "Schedule document not found: {}\nPlease check the file path and try again.",
            path.display()
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schedule document: {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );

    // serde_path_to_error points at the offending field instead of a bare
    // line/column
    let doc: ScheduleDoc = if is_yaml {
        let deserializer = serde_yaml::Deserializer::from_str(&content);
        serde_path_to_error::deserialize(deserializer)
            .with_context(|| format!("Failed to parse YAML schedule document: {}", path.display()))?
    } else {
        let mut deserializer = serde_json::Deserializer::from_str(&content);
        serde_path_to_error::deserialize(&mut deserializer)
            .with_context(|| format!("Failed to parse JSON schedule document: {}", path.display()))?
    };

    Ok(doc.days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_yaml_documents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hours.yaml");
        fs::write(
            &path,
            "days:\n  monday:\n    enabled: true\n    slots:\n      - from: \"09:00\"\n        to: \"17:00\"\n",
        )
        .unwrap();

        let schedule = load_document(&path).unwrap();
        assert!(schedule.monday.enabled);
        assert_eq!(schedule.monday.slots.len(), 1);
        assert!(!schedule.tuesday.enabled);
    }

    #[test]
    fn loads_json_documents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hours.json");
        fs::write(
            &path,
            r#"{"days": {"friday": {"enabled": true, "slots": [{"from": "18:00", "to": "23:00"}]}}}"#,
        )
        .unwrap();

        let schedule = load_document(&path).unwrap();
        assert!(schedule.friday.enabled);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.yaml");

        let error = load_document(&missing).unwrap_err().to_string();
        assert!(error.contains("Schedule document not found"));
        assert!(error.contains(&missing.display().to_string()));
    }

    #[test]
    fn invalid_time_reports_the_field_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(
            &path,
            "days:\n  monday:\n    enabled: true\n    slots:\n      - from: \"25:00\"\n        to: \"17:00\"\n",
        )
        .unwrap();

        let error = format!("{:#}", load_document(&path).unwrap_err());
        assert!(error.contains("Failed to parse YAML schedule document"));
    }
}
