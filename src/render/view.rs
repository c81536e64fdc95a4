use crate::core::{Finding, PageSummary, Priority, Report};
use crate::render::escape::{esc, esc_str};

pub const MAX_FINDINGS_PER_PRIORITY: usize = 30;
pub const MAX_PAGES: usize = 10;

pub const NO_ISSUES_PLACEHOLDER: &str = "No issues found here 🎉";
pub const MISSING_TEXT: &str = "(missing)";
pub const MISSING_KEYWORD: &str = "—";
pub const NO_REPORT_MESSAGE: &str = "No report loaded.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportView {
    Error { message: String },
    Audit(AuditView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditView {
    pub meta: MetaView,
    pub sections: Vec<PrioritySection>,
    pub pages: Vec<PageView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaView {
    pub site_url: String,
    pub pages_crawled: String,
    pub target_keyword: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrioritySection {
    pub priority: Priority,
    pub total: usize,
    pub entries: Vec<FindingView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindingView {
    pub code: String,
    pub message: String,
    pub url: Option<String>,
    pub fix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub url: String,
    pub title: String,
    pub meta_description: String,
    pub h1_count: String,
    pub images_missing_alt: String,
    pub images_total: String,
    pub suggested_title: String,
    pub suggested_meta_description: String,
}

pub fn build_view(report: Option<&Report>) -> ReportView {
    let Some(report) = report else {
        return ReportView::Error {
            message: esc_str(NO_REPORT_MESSAGE),
        };
    };
    if let Some(error) = &report.error {
        return ReportView::Error {
            message: esc_str(error),
        };
    }

    let sections = Priority::ALL
        .iter()
        .map(|&priority| build_section(priority, report.priority_fixes.get(priority)))
        .collect();
    let pages = report.pages.iter().take(MAX_PAGES).map(build_page).collect();

    ReportView::Audit(AuditView {
        meta: build_meta(report),
        sections,
        pages,
    })
}

fn build_meta(report: &Report) -> MetaView {
    let keyword = report
        .inputs
        .target_keyword
        .as_deref()
        .filter(|k| !k.is_empty());
    MetaView {
        site_url: esc_str(&report.site.url),
        pages_crawled: esc_str(&report.site.pages_crawled.to_string()),
        target_keyword: match keyword {
            Some(keyword) => esc_str(keyword),
            None => MISSING_KEYWORD.to_string(),
        },
    }
}

fn build_section(priority: Priority, findings: &[Finding]) -> PrioritySection {
    let entries = findings
        .iter()
        .take(MAX_FINDINGS_PER_PRIORITY)
        .map(build_finding)
        .collect();
    PrioritySection {
        priority,
        // バッジは切り詰め前の総数を表示する
        total: findings.len(),
        entries,
    }
}

fn build_finding(finding: &Finding) -> FindingView {
    FindingView {
        code: esc_str(&finding.code),
        message: esc_str(&finding.message),
        url: finding
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .map(esc_str),
        fix: finding
            .fix
            .as_deref()
            .filter(|f| !f.is_empty())
            .map(esc_str),
    }
}

fn build_page(page: &PageSummary) -> PageView {
    let title = page.title.as_deref().filter(|t| !t.is_empty());
    let meta_description = page.meta_description.as_deref().filter(|d| !d.is_empty());
    PageView {
        url: esc_str(&page.url),
        title: esc_str(title.unwrap_or(MISSING_TEXT)),
        meta_description: esc_str(meta_description.unwrap_or(MISSING_TEXT)),
        h1_count: esc_str(&page.h1_count().to_string()),
        images_missing_alt: esc_str(&page.images_missing_alt.to_string()),
        images_total: esc_str(&page.images_total.to_string()),
        suggested_title: esc(page.suggestions.suggested_title.as_deref()),
        suggested_meta_description: esc(page.suggestions.suggested_meta_description.as_deref()),
    }
}
