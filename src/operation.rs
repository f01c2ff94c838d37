use std::fmt;

use crate::service::types::{CompressJobRequest, ExportJobRequest, JobRequest};

/// Media type declared for PDF uploads.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Default OCR language hint for exports.
pub const DEFAULT_OCR_LANG: &str = "en-US";

/// How aggressively the service compresses the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl CompressionLevel {
    /// The service's wire spelling for this level.
    pub fn as_wire(self) -> &'static str {
        match self {
            CompressionLevel::Low => "LOW",
            CompressionLevel::Medium => "MEDIUM",
            CompressionLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Editable formats the export operation can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Docx,
    Pptx,
    Xlsx,
    Rtf,
}

impl ExportFormat {
    /// The service's wire spelling for this format.
    pub fn as_wire(self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Pptx => "pptx",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Rtf => "rtf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// A processing operation the service can run against an uploaded asset.
///
/// The two operations share the whole upload → submit → poll pipeline and
/// differ only in endpoint path and request body, so the orchestrator takes
/// one of these descriptors instead of duplicating the flow per operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Compress {
        level: CompressionLevel,
    },
    Export {
        format: ExportFormat,
        ocr_lang: String,
    },
}

impl Operation {
    pub fn compress(level: CompressionLevel) -> Self {
        Operation::Compress { level }
    }

    pub fn export(format: ExportFormat, ocr_lang: impl Into<String>) -> Self {
        Operation::Export {
            format,
            ocr_lang: ocr_lang.into(),
        }
    }

    /// Service-relative path of this operation's submission endpoint.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Operation::Compress { .. } => "/operation/compresspdf",
            Operation::Export { .. } => "/operation/exportpdf",
        }
    }

    /// Short name used in progress output and log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Compress { .. } => "compress",
            Operation::Export { .. } => "export",
        }
    }

    /// JSON body submitted to [`endpoint`](Self::endpoint). Always carries
    /// the asset identifier returned at asset creation.
    pub fn request_body(&self, asset_id: &str) -> JobRequest {
        match self {
            Operation::Compress { level } => JobRequest::Compress(CompressJobRequest {
                asset_id: asset_id.to_string(),
                compression_level: level.as_wire().to_string(),
            }),
            Operation::Export { format, ocr_lang } => JobRequest::Export(ExportJobRequest {
                asset_id: asset_id.to_string(),
                target_format: format.as_wire().to_string(),
                ocr_lang: ocr_lang.clone(),
            }),
        }
    }
}
