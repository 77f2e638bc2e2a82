//! Upload validation. Both checks run before any analysis work so a bad
//! upload never reaches the estimator.

use std::path::Path;

/// File extensions accepted for analysis, lowercase without the dot.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["stl", "obj", "ply", "step", "stp"];

/// Upload size cap.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Rejections produced by upload intake.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("upload has no filename")]
    MissingFilename,

    #[error(
        "unsupported file type \"{extension}\": allowed types are .stl, .obj, .ply, .step, .stp"
    )]
    UnsupportedFileType { extension: String },

    #[error("file of {size_bytes} bytes exceeds the {max_bytes} byte upload limit")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },
}

/// Check the filename's extension against the allow-list.
pub fn validate_filename(filename: &str) -> Result<(), IntakeError> {
    if filename.trim().is_empty() {
        return Err(IntakeError::MissingFilename);
    }

    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(IntakeError::UnsupportedFileType { extension })
    }
}

/// Check the upload size against the cap.
pub fn validate_size(size_bytes: u64) -> Result<(), IntakeError> {
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(IntakeError::FileTooLarge {
            size_bytes,
            max_bytes: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

/// Full intake check: extension first, then size.
pub fn validate_upload(filename: &str, size_bytes: u64) -> Result<(), IntakeError> {
    validate_filename(filename)?;
    validate_size(size_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_allowed_extension() {
        for ext in ALLOWED_EXTENSIONS {
            assert!(validate_upload(&format!("part.{ext}"), 1024).is_ok());
        }
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(validate_upload("PART.STL", 1024).is_ok());
        assert!(validate_upload("Model.Step", 1024).is_ok());
    }

    #[test]
    fn rejects_dwg_files() {
        let err = validate_upload("drawing.dwg", 1024).unwrap_err();
        assert_eq!(
            err,
            IntakeError::UnsupportedFileType {
                extension: "dwg".to_string()
            }
        );
    }

    #[test]
    fn rejects_files_without_an_extension() {
        assert!(matches!(
            validate_upload("README", 1024),
            Err(IntakeError::UnsupportedFileType { .. })
        ));
    }

    #[test]
    fn rejects_blank_filenames() {
        assert_eq!(
            validate_upload("   ", 1024),
            Err(IntakeError::MissingFilename)
        );
    }

    #[test]
    fn rejects_sixty_mib_uploads() {
        let sixty_mib = 60 * 1024 * 1024;
        let err = validate_upload("big.stl", sixty_mib).unwrap_err();
        assert_eq!(
            err,
            IntakeError::FileTooLarge {
                size_bytes: sixty_mib,
                max_bytes: MAX_UPLOAD_BYTES,
            }
        );
    }

    #[test]
    fn accepts_exactly_the_size_cap() {
        assert!(validate_upload("edge.stl", MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_upload("over.stl", MAX_UPLOAD_BYTES + 1).is_err());
    }

    #[test]
    fn bad_extension_wins_over_bad_size() {
        // Extension is checked first; the size never matters for a .dwg.
        assert!(matches!(
            validate_upload("drawing.dwg", MAX_UPLOAD_BYTES + 1),
            Err(IntakeError::UnsupportedFileType { .. })
        ));
    }
}
