use anyhow::Error;
use std::io::{self, Write};
use unicode_width::UnicodeWidthChar;

use crate::core::{Priority, Report};
use crate::render::{MAX_FINDINGS_PER_PRIORITY, MAX_PAGES};

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub color: bool,
    pub stdin_is_tty: bool,
    pub stdout_is_tty: bool,
    pub stderr_is_tty: bool,
    pub quiet: bool,
    pub verbose: bool,
}

pub fn eprintln_error(err: &Error) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "エラー:");
    let _ = writeln!(stderr, "  {err}");

    let mut causes = err.chain().skip(1).peekable();
    if causes.peek().is_some() {
        let _ = writeln!(stderr, "原因:");
        for cause in causes {
            let _ = writeln!(stderr, "  - {cause}");
        }
    }

    let _ = writeln!(stderr, "次に:");
    let _ = writeln!(
        stderr,
        "  - 詳細を見るには `--verbose` を付けて再実行してください"
    );
    let _ = writeln!(
        stderr,
        "  - 利用可能なコマンド/オプションは `seoview --help` を参照してください"
    );
}

// HTMLは標準出力へ流すので、人間向けの要約は標準エラー出力に出す。
pub fn print_run_summary(report: &Report, cfg: &UiConfig) {
    if cfg.quiet {
        return;
    }

    let mut out = io::stderr().lock();

    if let Some(message) = &report.error {
        let _ = writeln!(out, "監査エラー: {message}");
        let _ = writeln!(out, "（エラーレポートはPDFとして書き出せません）");
        return;
    }

    let _ = writeln!(
        out,
        "サイト: {}  クロール済み: {}ページ",
        report.site.url, report.site.pages_crawled
    );
    if let Some(keyword) = report
        .inputs
        .target_keyword
        .as_deref()
        .filter(|k| !k.is_empty())
    {
        let _ = writeln!(out, "ターゲットキーワード: {keyword}");
    }

    let _ = writeln!(out);
    print_priority_table(&mut out, report, cfg.color);

    let total_pages = report.pages.len();
    if total_pages > MAX_PAGES {
        let _ = writeln!(out, "ページ: {MAX_PAGES}件表示 / 全{total_pages}件");
    } else {
        let _ = writeln!(out, "ページ: {total_pages}件");
    }
}

fn print_priority_table(out: &mut dyn Write, report: &Report, color: bool) {
    let label_priority = "優先度";
    let label_count = "件数";
    let label_shown = "表示";

    let priority_w = visible_width_ansi(label_priority).max(2);
    let count_w = visible_width_ansi(label_count).max(4);
    let shown_w = visible_width_ansi(label_shown).max(4);

    let _ = writeln!(
        out,
        "{}  {}  {}",
        pad_end_display(label_priority, priority_w),
        pad_start_display(label_count, count_w),
        pad_start_display(label_shown, shown_w)
    );
    let _ = writeln!(
        out,
        "{}  {}  {}",
        "-".repeat(priority_w),
        "-".repeat(count_w),
        "-".repeat(shown_w)
    );

    for priority in Priority::ALL {
        let total = report.priority_fixes.get(priority).len();
        let shown = total.min(MAX_FINDINGS_PER_PRIORITY);
        let label = pad_end_ansi(&format_priority(priority, color), priority_w);
        let _ = writeln!(
            out,
            "{label}  {}  {}",
            pad_start_display(&total.to_string(), count_w),
            pad_start_display(&shown.to_string(), shown_w)
        );
    }
    let _ = writeln!(out);
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::P1 => "P1",
        Priority::P2 => "P2",
        Priority::P3 => "P3",
    }
}

pub fn format_priority(priority: Priority, color: bool) -> String {
    let s = priority_label(priority);
    if !color {
        return s.to_string();
    }

    let code = match priority {
        Priority::P1 => "31",
        Priority::P2 => "33",
        Priority::P3 => "32",
    };
    format!("\x1b[{code}m{s}\x1b[0m")
}

fn pad_end_ansi(s: &str, width: usize) -> String {
    let w = visible_width_ansi(s);
    if w >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - w))
}

fn pad_end_display(s: &str, width: usize) -> String {
    let w = visible_width_ansi(s);
    if w >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - w))
}

fn pad_start_display(s: &str, width: usize) -> String {
    let w = visible_width_ansi(s);
    if w >= width {
        return s.to_string();
    }
    format!("{}{}", " ".repeat(width - w), s)
}

fn visible_width_ansi(s: &str) -> usize {
    let mut width: usize = 0;
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            if chars.peek() == Some(&'[') {
                let _ = chars.next();
                while let Some(ch2) = chars.next() {
                    if ch2 == 'm' {
                        break;
                    }
                }
                continue;
            }
        }
        width = width.saturating_add(UnicodeWidthChar::width(ch).unwrap_or(0));
    }
    width
}
