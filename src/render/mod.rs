mod escape;
mod html;
mod view;

pub use escape::{esc, esc_str};
pub use html::{render, render_document};
pub use view::{
    AuditView, FindingView, MAX_FINDINGS_PER_PRIORITY, MAX_PAGES, MetaView, MISSING_KEYWORD,
    MISSING_TEXT, NO_ISSUES_PLACEHOLDER, NO_REPORT_MESSAGE, PageView, PrioritySection, ReportView,
    build_view,
};
