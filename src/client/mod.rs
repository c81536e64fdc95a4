use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::Report;

#[derive(Debug, Serialize)]
struct PdfRequest<'a> {
    report: &'a Report,
}

pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("HTTPクライアントの初期化に失敗しました")?;
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url.into()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn run_audit(
        &self,
        url: &str,
        target_keyword: Option<&str>,
        max_pages: Option<u32>,
        max_depth: Option<u32>,
    ) -> Result<Report> {
        let endpoint = format!("{}/api/audit", self.base_url);
        let query = audit_query(url, target_keyword, max_pages, max_depth);
        // リトライなし・単発リクエスト。失敗はそのまま呼び出し元へ伝播する。
        let report = self
            .http
            .get(&endpoint)
            .query(&query)
            .send()
            .with_context(|| format!("監査リクエストの送信に失敗しました: {endpoint}"))?
            .json::<Report>()
            .context("監査レスポンス(JSON)の解析に失敗しました")?;
        Ok(report)
    }

    pub fn export_pdf(&self, report: &Report) -> Result<Vec<u8>> {
        let endpoint = format!("{}/api/pdf", self.base_url);
        let response = self
            .http
            .post(&endpoint)
            .json(&PdfRequest { report })
            .send()
            .with_context(|| format!("PDFリクエストの送信に失敗しました: {endpoint}"))?;
        let bytes = response
            .bytes()
            .context("PDFレスポンスの読み取りに失敗しました")?;
        Ok(bytes.to_vec())
    }
}

fn normalize_base_url(base: String) -> String {
    base.trim_end_matches('/').to_string()
}

fn audit_query(
    url: &str,
    target_keyword: Option<&str>,
    max_pages: Option<u32>,
    max_depth: Option<u32>,
) -> Vec<(&'static str, String)> {
    let mut query = vec![("url", url.to_string())];
    if let Some(keyword) = target_keyword.map(str::trim).filter(|k| !k.is_empty()) {
        query.push(("target_keyword", keyword.to_string()));
    }
    if let Some(n) = max_pages {
        query.push(("max_pages", n.to_string()));
    }
    if let Some(n) = max_depth {
        query.push(("max_depth", n.to_string()));
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_query_omits_blank_keyword() {
        let query = audit_query("https://example.com", Some("   "), None, None);
        assert_eq!(query, vec![("url", "https://example.com".to_string())]);
    }

    #[test]
    fn audit_query_trims_keyword_and_forwards_limits() {
        let query = audit_query("example.com", Some("  ai automation "), Some(25), Some(2));
        assert_eq!(
            query,
            vec![
                ("url", "example.com".to_string()),
                ("target_keyword", "ai automation".to_string()),
                ("max_pages", "25".to_string()),
                ("max_depth", "2".to_string()),
            ]
        );
    }

    #[test]
    fn normalize_base_url_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("http://localhost:8000/".to_string()),
            "http://localhost:8000"
        );
        assert_eq!(
            normalize_base_url("http://localhost:8000".to_string()),
            "http://localhost:8000"
        );
    }
}
