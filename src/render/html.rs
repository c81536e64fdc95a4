use std::fmt::Write as _;

use crate::core::Report;
use crate::render::view::{
    AuditView, MetaView, NO_ISSUES_PLACEHOLDER, PageView, PrioritySection, ReportView, build_view,
};
use crate::state::ReportState;

pub fn render(report: &Report, state: &mut ReportState) -> String {
    // エラーレポートも含めて無条件に記録する（古い成功レポートを書き出し可能なまま残さない）
    state.set_current(report.clone());
    render_document(&build_view(Some(report)))
}

pub fn render_document(view: &ReportView) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>SEO Audit Report</title>
<style>{css}</style>
</head>
<body>
<div class="container">
{body}</div>
</body>
</html>
"#,
        css = inline_css(),
        body = render_body(view),
    )
}

fn render_body(view: &ReportView) -> String {
    match view {
        ReportView::Error { message } => format!("<div class=\"err\">{message}</div>\n"),
        ReportView::Audit(audit) => render_audit(audit),
    }
}

fn render_audit(audit: &AuditView) -> String {
    let mut out = String::with_capacity(8 * 1024);
    out.push_str(&render_meta(&audit.meta));
    for section in &audit.sections {
        out.push_str(&render_section(section));
    }
    out.push_str(&render_pages(&audit.pages));
    out
}

fn render_meta(meta: &MetaView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<div class=\"meta\">");
    let _ = writeln!(out, "  <div><b>Site:</b> {}</div>", meta.site_url);
    let _ = writeln!(
        out,
        "  <div><b>Pages crawled:</b> {}</div>",
        meta.pages_crawled
    );
    let _ = writeln!(
        out,
        "  <div><b>Target keyword:</b> {}</div>",
        meta.target_keyword
    );
    let _ = writeln!(out, "</div>");
    out
}

fn render_section(section: &PrioritySection) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<div class=\"section\">");
    let _ = writeln!(
        out,
        "  <h2>{} Fixes <span class=\"pill\">{}</span></h2>",
        section.priority, section.total
    );
    let _ = writeln!(out, "  <ul>");
    if section.entries.is_empty() {
        let _ = writeln!(out, "    <li>{NO_ISSUES_PLACEHOLDER}</li>");
    }
    for entry in &section.entries {
        let _ = writeln!(out, "    <li>");
        let _ = writeln!(out, "      <b>{}</b> — {}", entry.code, entry.message);
        if let Some(url) = &entry.url {
            let _ = writeln!(out, "      <div class=\"muted\">{url}</div>");
        }
        if let Some(fix) = &entry.fix {
            let _ = writeln!(out, "      <div class=\"fix\">Fix: {fix}</div>");
        }
        let _ = writeln!(out, "    </li>");
    }
    let _ = writeln!(out, "  </ul>");
    let _ = writeln!(out, "</div>");
    out
}

fn render_pages(pages: &[PageView]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<div class=\"section\">");
    let _ = writeln!(out, "  <h2>Pages (top 10)</h2>");
    for page in pages {
        let _ = writeln!(out, "  <div class=\"page\">");
        let _ = writeln!(out, "    <h3>{}</h3>", page.url);
        let _ = writeln!(out, "    <div class=\"grid\">");
        let _ = writeln!(out, "      <div><b>Title:</b> {}</div>", page.title);
        let _ = writeln!(
            out,
            "      <div><b>Meta desc:</b> {}</div>",
            page.meta_description
        );
        let _ = writeln!(out, "      <div><b>H1 count:</b> {}</div>", page.h1_count);
        let _ = writeln!(
            out,
            "      <div><b>Images missing alt:</b> {} / {}</div>",
            page.images_missing_alt, page.images_total
        );
        let _ = writeln!(out, "    </div>");
        let _ = writeln!(out, "    <div class=\"suggest\">");
        let _ = writeln!(
            out,
            "      <div><b>Suggested title:</b> {}</div>",
            page.suggested_title
        );
        let _ = writeln!(
            out,
            "      <div><b>Suggested description:</b> {}</div>",
            page.suggested_meta_description
        );
        let _ = writeln!(out, "    </div>");
        let _ = writeln!(out, "  </div>");
    }
    let _ = writeln!(out, "</div>");
    out
}

fn inline_css() -> &'static str {
    r#"
body { margin: 0; font-family: -apple-system, "Segoe UI", Roboto, sans-serif; color: #1b1f24; background: #f6f8fa; }
.container { max-width: 920px; margin: 0 auto; padding: 24px 16px; }
.meta { background: #fff; border: 1px solid #d8dee4; border-radius: 8px; padding: 12px 16px; margin-bottom: 16px; }
.meta div { margin: 2px 0; }
.section { background: #fff; border: 1px solid #d8dee4; border-radius: 8px; padding: 12px 16px; margin-bottom: 16px; }
.section h2 { margin: 0 0 8px; font-size: 18px; }
.section ul { margin: 0; padding-left: 20px; }
.section li { margin: 8px 0; }
.pill { display: inline-block; background: #eef1f4; border-radius: 999px; padding: 1px 10px; font-size: 13px; vertical-align: middle; }
.muted { color: #6a737d; font-size: 13px; }
.fix { color: #22663c; font-size: 13px; }
.err { background: #ffecec; border: 1px solid #f0b4b4; border-radius: 8px; color: #86181d; padding: 12px 16px; }
.page { border-top: 1px solid #eceff2; padding: 10px 0; }
.page h3 { margin: 0 0 6px; font-size: 15px; }
.grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4px 16px; font-size: 14px; }
.suggest { margin-top: 6px; font-size: 13px; color: #44505c; }
"#
}
