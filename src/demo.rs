use crate::core::{AuditInputs, Finding, Priority, PriorityFixes, Report, SiteInfo};

pub fn demo_report() -> Report {
    Report {
        error: None,
        site: SiteInfo {
            url: "https://demo.local".to_string(),
            host: Some("demo.local".to_string()),
            pages_crawled: 3,
        },
        inputs: AuditInputs {
            target_keyword: Some("ai automation".to_string()),
            max_pages: Some(25),
            max_depth: Some(2),
        },
        priority_fixes: PriorityFixes {
            p1: vec![Finding {
                priority: Some(Priority::P1),
                code: "MISSING_TITLE".to_string(),
                message: "Missing <title> tag.".to_string(),
                url: Some("/services".to_string()),
                details: None,
                fix: Some(
                    "Add a unique title (50–60 chars) with primary keyword.".to_string(),
                ),
            }],
            p2: vec![],
            p3: vec![],
        },
        pages: vec![],
        broken_links: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_report_is_exportable() {
        let report = demo_report();
        assert!(!report.is_error());
        assert_eq!(report.site.pages_crawled, 3);
        assert_eq!(report.priority_fixes.p1.len(), 1);
        assert!(report.priority_fixes.p2.is_empty());
        assert!(report.priority_fixes.p3.is_empty());
        assert!(report.pages.is_empty());
    }
}
