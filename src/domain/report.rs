// SPDX-License-Identifier: MPL-2.0
//! Downloadable report artifacts and the download state machine.

/// File name prefix shared by every report.
pub const REPORT_FILE_PREFIX: &str = "CKD_Report_";

/// Format of a saved report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Document rendered by the server.
    Pdf,
    /// Plain-text report built locally when the server document is unavailable.
    Text,
}

impl ReportKind {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            ReportKind::Pdf => "pdf",
            ReportKind::Text => "txt",
        }
    }
}

/// Builds `CKD_Report_<epoch-ms>.<ext>`.
#[must_use]
pub fn report_file_name(kind: ReportKind, epoch_millis: i64) -> String {
    format!("{REPORT_FILE_PREFIX}{epoch_millis}.{}", kind.extension())
}

/// A report ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub kind: ReportKind,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ReportArtifact {
    #[must_use]
    pub fn new(kind: ReportKind, epoch_millis: i64, bytes: Vec<u8>) -> Self {
        Self {
            kind,
            file_name: report_file_name(kind, epoch_millis),
            bytes,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.kind == ReportKind::Text
    }
}

/// Progress of the report download.
///
/// ```text
/// Idle ──begin──▶ Requesting ──server document──▶ SucceededBinary
///                      └──────any failure─────────▶ SucceededFallback
/// ```
///
/// Both success states accept a new download; `Requesting` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadState {
    #[default]
    Idle,
    Requesting,
    SucceededBinary,
    SucceededFallback,
}

impl DownloadState {
    /// Moves to `Requesting`. Returns `false` if a download is already running.
    pub fn begin(&mut self) -> bool {
        if self.is_requesting() {
            return false;
        }
        *self = DownloadState::Requesting;
        true
    }

    /// Records the outcome of a running download.
    pub fn finish(&mut self, kind: ReportKind) {
        if self.is_requesting() {
            *self = match kind {
                ReportKind::Pdf => DownloadState::SucceededBinary,
                ReportKind::Text => DownloadState::SucceededFallback,
            };
        }
    }

    #[must_use]
    pub fn is_requesting(self) -> bool {
        self == DownloadState::Requesting
    }
}
