//! Failure taxonomy of the deduction extraction pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::reconcile::ReconcileError;

/// Everything that can stop a deduction read.
///
/// Callers match on variants to pick user-facing messages; nothing below
/// this boundary retries or recovers.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Item dictionary resource missing or malformed.
    #[error("項目定義ファイル{}を読み込めませんでした: {reason}", .path.display())]
    Dictionary { path: PathBuf, reason: String },

    /// Source document absent at the derived path.
    #[error("{filename}が見つかりません。ファイルか指定年月日を修正してください。")]
    DocumentNotFound { filename: String },

    /// Inputs were insufficient to build a source filename.
    #[error("読み出し元PDF名が生成できませんでした。{reason}")]
    FilenameDerivation { reason: String },

    /// Document present but unreadable (corrupt, wrong password, ...).
    #[error("{filename}を読み込めませんでした: {reason}")]
    Document { filename: String, reason: String },

    /// No token matched the deduction-sum label.
    #[error("{label}が見つかりませんでした。項目定義ファイルか明細の書式を確認してください。")]
    MissingTotal { label: String },

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}
