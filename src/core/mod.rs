mod finding;
mod page;
mod priority;
mod report;

pub use finding::Finding;
pub use page::{PageSummary, PageSuggestions};
pub use priority::Priority;
pub use report::{AuditInputs, BrokenLink, PriorityFixes, Report, SiteInfo};
