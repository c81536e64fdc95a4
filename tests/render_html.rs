use seoview::core::{Finding, Priority, Report, SiteInfo};
use seoview::demo::demo_report;
use seoview::render::{NO_ISSUES_PLACEHOLDER, render};
use seoview::state::ReportState;

fn empty_report(url: &str) -> Report {
    Report {
        site: SiteInfo {
            url: url.to_string(),
            host: None,
            pages_crawled: 0,
        },
        ..Report::default()
    }
}

fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.match_indices(needle).count()
}

#[test]
fn empty_report_renders_three_zero_sections_and_no_pages() {
    let report = empty_report("example.com");
    let mut state = ReportState::new();
    let html = render(&report, &mut state);

    for priority in Priority::ALL {
        assert!(
            html.contains(&format!("{priority} Fixes <span class=\"pill\">0</span>")),
            "missing zero badge for {priority}: {html}"
        );
    }
    assert_eq!(count_occurrences(&html, NO_ISSUES_PLACEHOLDER), 3);
    assert!(html.contains("Pages (top 10)"));
    assert!(!html.contains("<div class=\"page\">"));
    assert!(html.contains("<div><b>Target keyword:</b> —</div>"));
    assert!(state.export_enabled());
}

#[test]
fn demo_report_renders_one_p1_item_with_fix_line() {
    let report = demo_report();
    let mut state = ReportState::new();
    let html = render(&report, &mut state);

    assert!(html.contains("P1 Fixes <span class=\"pill\">1</span>"));
    assert!(html.contains("P2 Fixes <span class=\"pill\">0</span>"));
    assert!(html.contains("P3 Fixes <span class=\"pill\">0</span>"));
    assert_eq!(count_occurrences(&html, "MISSING_TITLE"), 1);
    assert!(html.contains("<b>MISSING_TITLE</b> — Missing &lt;title&gt; tag."));
    assert!(html.contains("<div class=\"fix\">Fix: Add a unique title (50–60 chars) with primary keyword.</div>"));
    assert!(html.contains("<div class=\"muted\">/services</div>"));
    assert_eq!(count_occurrences(&html, NO_ISSUES_PLACEHOLDER), 2);
    assert!(html.contains("<div><b>Pages crawled:</b> 3</div>"));
    assert!(html.contains("<div><b>Target keyword:</b> ai automation</div>"));
    assert!(state.export_enabled());
}

#[test]
fn error_report_renders_only_the_error_block_and_disables_export() {
    let report = Report {
        error: Some("invalid url".to_string()),
        ..empty_report("bad")
    };
    let mut state = ReportState::new();
    let html = render(&report, &mut state);

    assert!(html.contains("<div class=\"err\">invalid url</div>"));
    assert!(!html.contains("Fixes"));
    assert!(!html.contains("Pages (top 10)"));
    assert!(!state.export_enabled());
    assert_eq!(
        state.current().and_then(|r| r.error.as_deref()),
        Some("invalid url")
    );
}

#[test]
fn injected_markup_renders_as_literal_text() {
    let mut report = empty_report("example.com");
    report.priority_fixes.p1 = vec![Finding {
        priority: Some(Priority::P1),
        code: "XSS".to_string(),
        message: "<b>evil</b>".to_string(),
        url: Some("<script>alert(1)</script>".to_string()),
        details: None,
        fix: None,
    }];
    let mut state = ReportState::new();
    let html = render(&report, &mut state);

    assert!(html.contains("&lt;b&gt;evil&lt;/b&gt;"));
    assert!(!html.contains("<b>evil</b>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>alert(1)</script>"));
}

#[test]
fn oversized_bucket_renders_thirty_items_with_true_badge() {
    let mut report = empty_report("example.com");
    report.priority_fixes.p1 = (0..45)
        .map(|i| Finding {
            priority: Some(Priority::P1),
            code: format!("ISSUE_{i}"),
            message: "message".to_string(),
            url: None,
            details: None,
            fix: None,
        })
        .collect();
    let mut state = ReportState::new();
    let html = render(&report, &mut state);

    assert!(html.contains("P1 Fixes <span class=\"pill\">45</span>"));
    assert_eq!(count_occurrences(&html, "<b>ISSUE_"), 30);
    assert!(html.contains("<b>ISSUE_29</b>"));
    assert!(!html.contains("<b>ISSUE_30</b>"));
}

#[test]
fn render_is_idempotent() {
    let report = demo_report();

    let mut first_state = ReportState::new();
    let first = render(&report, &mut first_state);
    let mut second_state = ReportState::new();
    let second = render(&report, &mut second_state);

    assert_eq!(first, second);
    assert_eq!(first_state.current(), second_state.current());

    // 同じ状態コンテナに対して二度描画しても結果は変わらない
    let again = render(&report, &mut first_state);
    assert_eq!(first, again);
    assert_eq!(first_state.current(), Some(&report));
}

#[test]
fn stale_success_is_replaced_by_error_render() {
    let mut state = ReportState::new();
    let _ = render(&demo_report(), &mut state);
    assert!(state.export_enabled());

    let error_report = Report {
        error: Some("boom".to_string()),
        ..Report::default()
    };
    let _ = render(&error_report, &mut state);
    assert!(!state.export_enabled());
}
