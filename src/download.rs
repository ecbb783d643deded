//! Saving generated invoices to disk

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;
use uuid::Uuid;

/// File name for an invoice downloaded at `at`, e.g. `invoice-1718000000000.pdf`
pub fn invoice_file_name(at: DateTime<Utc>) -> String {
    format!("invoice-{}.pdf", at.timestamp_millis())
}

/// Writes PDF payloads into a downloads folder
#[derive(Debug, Clone)]
pub struct Downloader {
    dir: PathBuf,
}

impl Downloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Save `bytes` under a timestamped name and return the final path.
    ///
    /// The payload goes to a hidden `.part` file first and is renamed into
    /// place. The temporary file is removed if any step fails.
    pub async fn save(&self, bytes: &[u8], at: DateTime<Utc>) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let target = self.dir.join(invoice_file_name(at));
        let temp = self.dir.join(format!(".invoice-{}.part", Uuid::new_v4()));

        if let Err(err) = write_then_rename(&temp, &target, bytes).await {
            if let Err(cleanup) = fs::remove_file(&temp).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to remove {}: {}", temp.display(), cleanup);
                }
            }
            return Err(err);
        }

        Ok(target)
    }
}

async fn write_then_rename(temp: &Path, target: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(temp, bytes)
        .await
        .with_context(|| format!("Failed to write {}", temp.display()))?;
    fs::rename(temp, target)
        .await
        .with_context(|| format!("Failed to move invoice to {}", target.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn leftover_part_files(dir: &Path) -> Vec<PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "part"))
            .collect()
    }

    #[test]
    fn test_file_name_embeds_millis() {
        let at = Utc.timestamp_millis_opt(1_718_000_000_123).unwrap();
        assert_eq!(invoice_file_name(at), "invoice-1718000000123.pdf");
    }

    #[test]
    fn test_file_name_pattern_for_now() {
        let name = invoice_file_name(Utc::now());
        let digits = name
            .strip_prefix("invoice-")
            .and_then(|rest| rest.strip_suffix(".pdf"))
            .unwrap();
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_save_writes_payload_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = Downloader::new(dir.path());
        let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

        let path = downloader.save(b"%PDF-1.4 test", at).await.unwrap();

        assert_eq!(path, dir.path().join("invoice-1700000000000.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4 test");
        assert!(leftover_part_files(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("invoices").join("2024");
        let downloader = Downloader::new(&nested);

        let path = downloader.save(b"pdf", Utc::now()).await.unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_save_fails_when_target_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let at = Utc.timestamp_millis_opt(42).unwrap();
        // A non-empty directory squatting on the final name makes the rename fail
        let squatter = dir.path().join(invoice_file_name(at));
        std::fs::create_dir(&squatter).unwrap();
        std::fs::write(squatter.join("keep"), b"x").unwrap();

        let downloader = Downloader::new(dir.path());
        assert!(downloader.save(b"pdf", at).await.is_err());
        assert!(leftover_part_files(dir.path()).is_empty());
    }
}
