//! Optional resume file and the fixed contact links.
//!
//! The results screen probes for `resume.pdf` on every pass. When the file is
//! there it offers a download, otherwise it falls back to a profile link.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FitError, Result};

pub const RESUME_FILE_NAME: &str = "resume.pdf";
pub const DOWNLOAD_FILE_NAME: &str = "Candidate_Resume.pdf";
pub const RESUME_MIME: &str = "application/pdf";

pub const EMAIL_LINK: &str = "mailto:marwa.bouabid@duke.edu";
pub const PROFILE_LINK: &str = "https://linkedin.com/in/yourprofile";

/// Result of looking for the resume file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeAsset {
    Available {
        bytes: Vec<u8>,
        file_name: &'static str,
        mime: &'static str,
    },
    Unavailable {
        fallback_url: &'static str,
    },
}

impl ResumeAsset {
    /// Look for `resume.pdf` in `dir`. Never fails: a missing or unreadable
    /// file yields `Unavailable`.
    pub fn probe(dir: &Path) -> Self {
        let path = dir.join(RESUME_FILE_NAME);
        match fs::read(&path) {
            Ok(bytes) => {
                tracing::trace!(path = %path.display(), size = bytes.len(), "resume found");
                Self::Available {
                    bytes,
                    file_name: DOWNLOAD_FILE_NAME,
                    mime: RESUME_MIME,
                }
            }
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Failed to read {}: {}", path.display(), e);
                }
                Self::Unavailable {
                    fallback_url: PROFILE_LINK,
                }
            }
        }
    }

    /// Label of the control the results screen shows for this asset.
    pub fn control_label(&self) -> &'static str {
        match self {
            Self::Available { .. } => "📄 Download My Resume",
            Self::Unavailable { .. } => "📄 View My Resume",
        }
    }

    /// Write the resume into `dir` under the fixed download name.
    ///
    /// Returns `Ok(None)` when there is nothing to download.
    pub fn save_to(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let Self::Available {
            bytes, file_name, ..
        } = self
        else {
            return Ok(None);
        };

        fs::create_dir_all(dir).map_err(|e| FitError::from_io_error(e, Some(dir.into())))?;
        let target = dir.join(file_name);
        fs::write(&target, bytes).map_err(|e| FitError::from_io_error(e, Some(target.clone())))?;
        tracing::info!(path = %target.display(), "saved resume");
        Ok(Some(target))
    }
}
