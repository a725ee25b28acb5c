// SPDX-License-Identifier: MPL-2.0
//! Writing report artifacts to disk.
//!
//! # Directory Resolution
//!
//! Reports go to the first available of:
//! 1. `[report] output_dir` from `settings.toml`
//! 2. The platform downloads directory
//! 3. The application data directory
//! 4. The current working directory

use crate::app::paths;
use crate::domain::report::ReportArtifact;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the directory reports are saved to when no save dialog is shown.
#[must_use]
pub fn report_directory(configured: Option<&Path>) -> PathBuf {
    pick_report_directory(
        configured.map(Path::to_path_buf),
        dirs::download_dir(),
        paths::get_app_data_dir(),
    )
}

fn pick_report_directory(
    configured: Option<PathBuf>,
    downloads: Option<PathBuf>,
    data: Option<PathBuf>,
) -> PathBuf {
    configured
        .filter(|dir| !dir.as_os_str().is_empty())
        .or(downloads)
        .or(data)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Writes `artifact` into `dir` under its generated file name.
///
/// Creates `dir` if needed and returns the full path written.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written.
pub fn save_artifact(dir: &Path, artifact: &ReportArtifact) -> Result<PathBuf> {
    let path = dir.join(&artifact.file_name);
    write_artifact_to(&path, artifact)?;
    Ok(path)
}

/// Writes `artifact` to an exact path, typically one picked in a save dialog.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn write_artifact_to(path: &Path, artifact: &ReportArtifact) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &artifact.bytes)?;
    tracing::info!(path = %path.display(), bytes = artifact.bytes.len(), "report saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::ReportKind;
    use tempfile::tempdir;

    #[test]
    fn configured_directory_wins() {
        let dir = pick_report_directory(
            Some(PathBuf::from("/reports")),
            Some(PathBuf::from("/home/user/Downloads")),
            Some(PathBuf::from("/data")),
        );
        assert_eq!(dir, PathBuf::from("/reports"));
    }

    #[test]
    fn empty_configured_directory_is_ignored() {
        let dir = pick_report_directory(
            Some(PathBuf::new()),
            Some(PathBuf::from("/home/user/Downloads")),
            None,
        );
        assert_eq!(dir, PathBuf::from("/home/user/Downloads"));
    }

    #[test]
    fn falls_back_to_data_then_current_directory() {
        assert_eq!(
            pick_report_directory(None, None, Some(PathBuf::from("/data"))),
            PathBuf::from("/data")
        );
        assert_eq!(pick_report_directory(None, None, None), PathBuf::from("."));
    }

    #[test]
    fn save_artifact_writes_bytes_under_generated_name() {
        let temp_dir = tempdir().expect("create temp dir");
        let target = temp_dir.path().join("nested");
        let artifact = ReportArtifact::new(ReportKind::Text, 1234, b"CKD DETECTION REPORT".to_vec());

        let path = save_artifact(&target, &artifact).expect("save should succeed");

        assert_eq!(path, target.join("CKD_Report_1234.txt"));
        assert_eq!(fs::read(&path).expect("read back"), b"CKD DETECTION REPORT");
    }

    #[test]
    fn write_artifact_to_exact_path() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join("chosen.pdf");
        let artifact = ReportArtifact::new(ReportKind::Pdf, 1, b"%PDF".to_vec());

        write_artifact_to(&path, &artifact).expect("write should succeed");
        assert_eq!(fs::read(&path).expect("read back"), b"%PDF");
    }

    #[test]
    fn unwritable_target_is_an_io_error() {
        let temp_dir = tempdir().expect("create temp dir");
        // A regular file cannot act as a parent directory.
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"").expect("create blocker file");
        let artifact = ReportArtifact::new(ReportKind::Text, 1, Vec::new());

        let result = save_artifact(&blocker, &artifact);
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
