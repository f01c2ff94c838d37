//! Command-line interface, built on clap.
//!
//! Defines the [`Cli`] struct with the [`Command`] subcommands (compress,
//! export) and global flags overriding the polling policy from
//! `pdflow.toml`.

use clap::{Parser, Subcommand, ValueEnum};

use crate::operation::{CompressionLevel, ExportFormat};

/// pdflow — document processing client for the Adobe PDF Services API.
#[derive(Debug, Parser)]
#[command(name = "pdflow", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Maximum number of status poll attempts before giving up.
    #[arg(long, global = true)]
    pub max_poll_attempts: Option<u32>,

    /// Wait between status poll attempts, in milliseconds.
    #[arg(long, global = true)]
    pub poll_interval_ms: Option<u64>,

    /// Abort the whole run after this many seconds.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

/// Compression level accepted by the CLI, mapped to
/// [`CompressionLevel`] internally.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LevelArg {
    /// Smallest quality loss, least size reduction.
    Low,
    /// Balanced quality and size.
    Medium,
    /// Most aggressive size reduction.
    High,
}

impl From<LevelArg> for CompressionLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Low => CompressionLevel::Low,
            LevelArg::Medium => CompressionLevel::Medium,
            LevelArg::High => CompressionLevel::High,
        }
    }
}

/// Export target format accepted by the CLI, mapped to [`ExportFormat`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Docx,
    Pptx,
    Xlsx,
    Rtf,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Docx => ExportFormat::Docx,
            FormatArg::Pptx => ExportFormat::Pptx,
            FormatArg::Xlsx => ExportFormat::Xlsx,
            FormatArg::Rtf => ExportFormat::Rtf,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compress a PDF and report the processed document's location.
    Compress {
        /// Path to the PDF file to compress.
        file: String,

        /// Download the processed document to this path instead of
        /// printing its URI.
        #[arg(long, short)]
        output: Option<String>,

        /// Compression aggressiveness.
        #[arg(long, value_enum, default_value_t = LevelArg::Low)]
        level: LevelArg,
    },

    /// Export a PDF to an editable format.
    Export {
        /// Path to the PDF file to export.
        file: String,

        /// Download the processed document to this path instead of
        /// printing its URI.
        #[arg(long, short)]
        output: Option<String>,

        /// Target document format.
        #[arg(long, value_enum, default_value_t = FormatArg::Docx)]
        format: FormatArg,

        /// OCR language hint passed to the service.
        #[arg(long, default_value = "en-US")]
        ocr_lang: String,
    },
}
