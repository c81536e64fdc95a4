use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub audit: AuditConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UiConfig {
    pub color: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
            },
            ui: UiConfig { color: true },
            audit: AuditConfig {
                max_pages: None,
                max_depth: None,
            },
            config_path: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    api: Option<RawApiConfig>,
    ui: Option<RawUiConfig>,
    audit: Option<RawAuditConfig>,
}

#[derive(Debug, Deserialize)]
struct RawApiConfig {
    base_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawUiConfig {
    color: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawAuditConfig {
    max_pages: Option<u32>,
    max_depth: Option<u32>,
}

pub fn default_config_path(home_dir: &Path) -> PathBuf {
    home_dir.join(".config/seoview/config.toml")
}

pub fn load(config_path: Option<&Path>, home_dir: &Path) -> Result<EffectiveConfig> {
    let mut cfg = EffectiveConfig::default();

    let path = config_path
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| default_config_path(home_dir));

    if path.exists() {
        let s = std::fs::read_to_string(&path)
            .with_context(|| format!("設定ファイルの読み取りに失敗しました: {}", path.display()))?;
        let raw: RawConfig =
            toml::from_str(&s).context("設定ファイル(TOML)の解析に失敗しました")?;
        apply_raw_config(&mut cfg, raw);
        cfg.config_path = Some(path.display().to_string());
    }

    apply_env_overrides(&mut cfg)?;

    Ok(cfg)
}

fn apply_raw_config(cfg: &mut EffectiveConfig, raw: RawConfig) {
    if let Some(api) = raw.api {
        if let Some(base_url) = api.base_url {
            cfg.api.base_url = base_url;
        }
    }

    if let Some(ui) = raw.ui {
        if let Some(color) = ui.color {
            cfg.ui.color = color;
        }
    }

    if let Some(audit) = raw.audit {
        if let Some(max_pages) = audit.max_pages {
            cfg.audit.max_pages = Some(max_pages);
        }
        if let Some(max_depth) = audit.max_depth {
            cfg.audit.max_depth = Some(max_depth);
        }
    }
}

fn apply_env_overrides(cfg: &mut EffectiveConfig) -> Result<()> {
    if let Ok(v) = std::env::var("SEOVIEW_API_BASE_URL") {
        let v = v.trim();
        if !v.is_empty() {
            cfg.api.base_url = v.to_string();
        }
    }
    if let Ok(v) = std::env::var("SEOVIEW_UI_COLOR") {
        cfg.ui.color = parse_bool(&v).with_context(|| "SEOVIEW_UI_COLOR")?;
    }
    if let Ok(v) = std::env::var("SEOVIEW_AUDIT_MAX_PAGES") {
        cfg.audit.max_pages = Some(
            v.trim()
                .parse::<u32>()
                .with_context(|| "SEOVIEW_AUDIT_MAX_PAGES")?,
        );
    }
    if let Ok(v) = std::env::var("SEOVIEW_AUDIT_MAX_DEPTH") {
        cfg.audit.max_depth = Some(
            v.trim()
                .parse::<u32>()
                .with_context(|| "SEOVIEW_AUDIT_MAX_DEPTH")?,
        );
    }

    Ok(())
}

fn parse_bool(s: &str) -> Result<bool> {
    let s = s.trim().to_ascii_lowercase();
    match s.as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow::anyhow!(
            "真偽値が不正です: {s}（true|false|1|0|yes|no|on|off を指定してください）"
        )),
    }
}
