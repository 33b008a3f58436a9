//! Résumé text extraction for uploaded PDF and DOCX files.

mod docx;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("PDF parsing failed: {0}")]
    Pdf(String),

    #[error("DOCX parsing failed: {0}")]
    Docx(String),
}

impl ExtractError {
    /// Parse failure attributed to `format`.
    pub fn failed(format: ResumeFormat, detail: String) -> Self {
        match format {
            ResumeFormat::Pdf => ExtractError::Pdf(detail),
            ResumeFormat::Docx => ExtractError::Docx(detail),
        }
    }
}

/// File formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
}

impl ResumeFormat {
    /// Picks the format from the file extension, case-insensitively.
    pub fn from_filename(file_name: &str) -> Result<Self, ExtractError> {
        let ext = file_extension(file_name).to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Ok(ResumeFormat::Pdf),
            "docx" => Ok(ResumeFormat::Docx),
            _ => Err(ExtractError::UnsupportedFormat(if ext.is_empty() {
                file_name.to_string()
            } else {
                ext
            })),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "pdf",
            ResumeFormat::Docx => "docx",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "application/pdf",
            ResumeFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// Extension after the last `.` of the final path component, or `""`.
/// Dotfiles such as `.pdf` have no extension.
pub fn file_extension(file_name: &str) -> &str {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    match base.rfind('.') {
        Some(idx) if idx > 0 => &base[idx + 1..],
        _ => "",
    }
}

/// File name without directories and without its extension.
pub fn file_stem(file_name: &str) -> &str {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    match base.rfind('.') {
        Some(idx) if idx > 0 => &base[..idx],
        _ => base,
    }
}

/// Extracts plain text from a résumé file. CPU-bound; call from a blocking task.
pub fn extract_resume_text(bytes: &[u8], format: ResumeFormat) -> Result<String, ExtractError> {
    match format {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string())),
        ResumeFormat::Docx => docx::extract_text(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ResumeFormat::from_filename("cv.pdf").unwrap(), ResumeFormat::Pdf);
        assert_eq!(ResumeFormat::from_filename("CV.DOCX").unwrap(), ResumeFormat::Docx);
        assert_eq!(
            ResumeFormat::from_filename("jane.doe.resume.Pdf").unwrap(),
            ResumeFormat::Pdf
        );
    }

    #[test]
    fn test_unsupported_extensions_are_rejected() {
        for name in ["cv.doc", "cv.txt", "cv", "pdf", ".pdf"] {
            assert!(
                matches!(
                    ResumeFormat::from_filename(name),
                    Err(ExtractError::UnsupportedFormat(_))
                ),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_file_stem_strips_directories_and_extension() {
        assert_eq!(file_stem("uploads/jane_cv.pdf"), "jane_cv");
        assert_eq!(file_stem("C:\\docs\\jane.v2.docx"), "jane.v2");
        assert_eq!(file_stem("resume"), "resume");
    }

    #[test]
    fn test_garbage_pdf_is_a_parse_error() {
        let err = extract_resume_text(b"definitely not a pdf", ResumeFormat::Pdf).unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
        assert!(err.to_string().contains("parsing failed"));
    }

    #[test]
    fn test_garbage_docx_is_a_parse_error() {
        let err = extract_resume_text(b"PK not really a zip", ResumeFormat::Docx).unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_)));
        assert!(err.to_string().contains("parsing failed"));
    }
}
