use std::collections::BTreeMap;

use crate::core::Finding;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSuggestions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_meta_description: Option<String>,
}

impl PageSuggestions {
    pub fn is_empty(&self) -> bool {
        self.suggested_title.is_none() && self.suggested_meta_description.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub h1: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headings: BTreeMap<String, u64>,
    #[serde(default)]
    pub images_total: u64,
    #[serde(default)]
    pub images_missing_alt: u64,
    #[serde(default)]
    pub internal_links: u64,
    #[serde(default)]
    pub external_links: u64,
    #[serde(default)]
    pub word_count: u64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub keyword_hits: BTreeMap<String, u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Finding>,
    #[serde(default, skip_serializing_if = "PageSuggestions::is_empty")]
    pub suggestions: PageSuggestions,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub speed_tips: Vec<String>,
}

impl PageSummary {
    pub fn h1_count(&self) -> u64 {
        self.headings.get("h1").copied().unwrap_or(0)
    }
}
