use crate::core::{Finding, PageSummary, Priority};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default)]
    pub pages_crawled: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriorityFixes {
    #[serde(rename = "P1", default)]
    pub p1: Vec<Finding>,
    #[serde(rename = "P2", default)]
    pub p2: Vec<Finding>,
    #[serde(rename = "P3", default)]
    pub p3: Vec<Finding>,
}

impl PriorityFixes {
    pub fn get(&self, priority: Priority) -> &[Finding] {
        match priority {
            Priority::P1 => &self.p1,
            Priority::P2 => &self.p2,
            Priority::P3 => &self.p3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokenLink {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub status: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub site: SiteInfo,
    #[serde(default)]
    pub inputs: AuditInputs,
    #[serde(default)]
    pub priority_fixes: PriorityFixes,
    #[serde(default)]
    pub pages: Vec<PageSummary>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub broken_links: Vec<BrokenLink>,
}

impl Report {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
