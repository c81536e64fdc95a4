use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::Report;

#[derive(Debug, Clone, Default)]
pub struct ReportState {
    current: Option<Report>,
}

impl ReportState {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn current(&self) -> Option<&Report> {
        self.current.as_ref()
    }

    pub fn set_current(&mut self, report: Report) {
        self.current = Some(report);
    }

    pub fn export_enabled(&self) -> bool {
        matches!(&self.current, Some(report) if !report.is_error())
    }

    pub fn load(home_dir: &Path) -> Result<Self> {
        let path = state_path(home_dir);
        if !path.exists() {
            return Ok(Self::new());
        }
        let s = std::fs::read_to_string(&path)
            .with_context(|| format!("状態ファイルの読み取りに失敗しました: {}", path.display()))?;
        let report: Report = serde_json::from_str(&s)
            .with_context(|| format!("状態ファイル(JSON)の解析に失敗しました: {}", path.display()))?;
        Ok(Self {
            current: Some(report),
        })
    }

    pub fn save(&self, home_dir: &Path) -> Result<PathBuf> {
        let path = state_path(home_dir);
        let Some(report) = &self.current else {
            if path.exists() {
                std::fs::remove_file(&path).with_context(|| {
                    format!("状態ファイルの削除に失敗しました: {}", path.display())
                })?;
            }
            return Ok(path);
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("状態ディレクトリの作成に失敗しました: {}", parent.display())
            })?;
        }
        let buf =
            serde_json::to_vec_pretty(report).context("状態(JSON)のシリアライズに失敗しました")?;
        std::fs::write(&path, buf)
            .with_context(|| format!("状態ファイルの書き込みに失敗しました: {}", path.display()))?;
        Ok(path)
    }
}

pub fn state_path(home_dir: &Path) -> PathBuf {
    home_dir.join(".config/seoview/current_report.json")
}
