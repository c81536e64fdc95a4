use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::core::Report;

#[derive(Debug, Serialize)]
struct RunLog {
    schema_version: &'static str,
    tool_version: String,
    command: &'static str,
    started_at: String,
    finished_at: String,
    status: String,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_keyword: Option<String>,
    pages_crawled: u64,
    p1: usize,
    p2: usize,
    p3: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ExportLog {
    schema_version: &'static str,
    tool_version: String,
    command: &'static str,
    started_at: String,
    finished_at: String,
    status: String,
    output_path: String,
    bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn logs_dir(home_dir: &Path) -> PathBuf {
    home_dir.join(".config/seoview/logs")
}

pub fn write_run_log(
    home_dir: &Path,
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
    url: &str,
    target_keyword: Option<&str>,
    report: &Report,
) -> Result<PathBuf> {
    let dir = logs_dir(home_dir);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("ログディレクトリの作成に失敗しました: {}", dir.display()))?;

    let pid = std::process::id();
    let ts = finished_at.unix_timestamp_nanos();
    let file_name = format!("run-{pid}-{ts}.json");
    let path = dir.join(file_name);

    let status = if report.is_error() {
        "server_error".to_string()
    } else {
        "ok".to_string()
    };

    let log = RunLog {
        schema_version: "1.0",
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        command: "run",
        started_at: started_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string()),
        finished_at: finished_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string()),
        status,
        url: url.to_string(),
        target_keyword: target_keyword
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string),
        pages_crawled: report.site.pages_crawled,
        p1: report.priority_fixes.p1.len(),
        p2: report.priority_fixes.p2.len(),
        p3: report.priority_fixes.p3.len(),
        error: report.error.clone(),
    };

    let buf = serde_json::to_vec_pretty(&log).context("ログ(JSON)のシリアライズに失敗しました")?;
    std::fs::write(&path, buf)
        .with_context(|| format!("ログの書き込みに失敗しました: {}", path.display()))?;
    Ok(path)
}

pub fn write_export_log(
    home_dir: &Path,
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
    output_path: &Path,
    bytes: u64,
    error: Option<String>,
) -> Result<PathBuf> {
    let dir = logs_dir(home_dir);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("ログディレクトリの作成に失敗しました: {}", dir.display()))?;

    let pid = std::process::id();
    let ts = finished_at.unix_timestamp_nanos();
    let file_name = format!("export-{pid}-{ts}.json");
    let path = dir.join(file_name);

    let status = if error.is_some() {
        "error".to_string()
    } else {
        "ok".to_string()
    };

    let log = ExportLog {
        schema_version: "1.0",
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        command: "export",
        started_at: started_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string()),
        finished_at: finished_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string()),
        status,
        output_path: output_path.display().to_string(),
        bytes,
        error,
    };

    let buf = serde_json::to_vec_pretty(&log).context("ログ(JSON)のシリアライズに失敗しました")?;
    std::fs::write(&path, buf)
        .with_context(|| format!("ログの書き込みに失敗しました: {}", path.display()))?;
    Ok(path)
}
