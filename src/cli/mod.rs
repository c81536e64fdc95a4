use std::io;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::client::ApiClient;
use crate::core::Report;
use crate::state::ReportState;
use crate::ui::UiConfig;

pub const EXPORT_FILE_NAME: &str = "seo-audit-report.pdf";

#[derive(Debug, Parser)]
#[command(
    name = "seoview",
    version,
    about = "SEO監査レポートを取得してHTMLとして表示し、PDFとして書き出すクライアント（開発者向け）"
)]
pub struct Cli {
    #[arg(long, global = true)]
    pub json: bool,
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
    #[arg(long, global = true)]
    pub verbose: bool,
    #[arg(long, global = true)]
    pub quiet: bool,
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Demo(DemoArgs),
    Export(ExportArgs),
    Config(ConfigArgs),
    Completion(CompletionArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    pub url: String,
    #[arg(long)]
    pub keyword: Option<String>,
    #[arg(long)]
    pub max_pages: Option<u32>,
    #[arg(long)]
    pub max_depth: Option<u32>,
}

#[derive(Debug, Args)]
pub struct DemoArgs {}

#[derive(Debug, Args)]
pub struct ExportArgs {}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[arg(long)]
    pub show: bool,
}

#[derive(Debug, Args)]
pub struct CompletionArgs {
    pub shell: String,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let stdin_is_tty = io::stdin().is_terminal();
    let stdout_is_tty = io::stdout().is_terminal();
    let stderr_is_tty = io::stderr().is_terminal();

    let home_dir = crate::platform::effective_home_dir()?;

    let env_config_path = std::env::var_os("SEOVIEW_CONFIG").map(std::path::PathBuf::from);
    let cfg = crate::config::load(
        cli.config.as_deref().or(env_config_path.as_deref()),
        &home_dir,
    )
    .map_err(crate::exit::invalid_args_err)?;

    let color = stderr_is_tty && cfg.ui.color && !cli.no_color;

    let ui_cfg = UiConfig {
        color,
        stdin_is_tty,
        stdout_is_tty,
        stderr_is_tty,
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Run(args) => {
            let url = args.url.trim().to_string();
            if url.is_empty() {
                return Err(crate::exit::invalid_args("run: URL は空にできません"));
            }
            let max_pages = args.max_pages.or(cfg.audit.max_pages);
            let max_depth = args.max_depth.or(cfg.audit.max_depth);
            validate_limits(max_pages, max_depth).map_err(crate::exit::invalid_args_err)?;

            let client = ApiClient::new(cfg.api.base_url.clone(), Duration::from_secs(cli.timeout))?;

            // 進行中表示はリクエスト送信前に必ず出す
            let show_progress = ui_cfg.stderr_is_tty && !cli.quiet && !cli.json;
            let pb = if show_progress {
                let pb = indicatif::ProgressBar::new_spinner();
                pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
                pb.set_message("Running audit…");
                pb.enable_steady_tick(Duration::from_millis(120));
                Some(pb)
            } else {
                None
            };

            let started_at = time::OffsetDateTime::now_utc();
            let result = client.run_audit(&url, args.keyword.as_deref(), max_pages, max_depth);
            let finished_at = time::OffsetDateTime::now_utc();

            if let Some(pb) = pb {
                pb.finish_and_clear();
            }

            let report = result?;

            let log_path = crate::logs::write_run_log(
                &home_dir,
                started_at,
                finished_at,
                &url,
                args.keyword.as_deref(),
                &report,
            )?;

            render_and_emit(&report, &home_dir, &ui_cfg, cli.json)?;

            if ui_cfg.verbose {
                eprintln!("ログ: {}", log_hint(&log_path, &home_dir));
            }
        }
        Commands::Demo(_args) => {
            let report = crate::demo::demo_report();
            render_and_emit(&report, &home_dir, &ui_cfg, cli.json)?;
        }
        Commands::Export(_args) => {
            if cli.json {
                return Err(crate::exit::invalid_args(
                    "export は --json と併用できません",
                ));
            }

            let state = ReportState::load(&home_dir)?;
            let Some(report) = state.current() else {
                return Err(crate::exit::invalid_args(
                    "export: 書き出せるレポートがありません（先に `seoview run` または `seoview demo` を実行してください）",
                ));
            };
            if !state.export_enabled() {
                return Err(crate::exit::invalid_args(
                    "export: 最後のレポートはエラーレポートのため書き出せません",
                ));
            }

            let client = ApiClient::new(cfg.api.base_url.clone(), Duration::from_secs(cli.timeout))?;
            let out_path = PathBuf::from(EXPORT_FILE_NAME);

            let started_at = time::OffsetDateTime::now_utc();
            let result = client.export_pdf(report);
            let finished_at = time::OffsetDateTime::now_utc();

            let bytes = match result {
                Ok(bytes) => bytes,
                Err(err) => {
                    let err_s = err.to_string();
                    let log_path = crate::logs::write_export_log(
                        &home_dir,
                        started_at,
                        finished_at,
                        &out_path,
                        0,
                        Some(err_s.clone()),
                    )
                    .map_err(|e| {
                        crate::exit::export_failed(format!(
                            "export: PDFリクエストが失敗しました: {err_s}\nさらにログの書き込みにも失敗しました: {e}"
                        ))
                    })?;
                    let log_hint = log_hint(&log_path, &home_dir);
                    return Err(crate::exit::export_failed(format!(
                        "PDFの書き出しに失敗しました: {err_s}\nログ: {log_hint}"
                    )));
                }
            };

            std::fs::write(&out_path, &bytes)
                .with_context(|| {
                    format!("PDFファイルの書き込みに失敗しました: {}", out_path.display())
                })
                .map_err(crate::exit::export_failed_err)?;

            let log_path = crate::logs::write_export_log(
                &home_dir,
                started_at,
                finished_at,
                &out_path,
                bytes.len() as u64,
                None,
            )
            .map_err(|e| {
                anyhow::anyhow!(
                    "export: PDFは書き出せましたが、ログの書き込みに失敗しました: {e}"
                )
            })?;

            if !ui_cfg.quiet {
                println!("書き出しました: {}", out_path.display());
            }
            if ui_cfg.verbose {
                eprintln!("ログ: {}", log_hint(&log_path, &home_dir));
            }
        }
        Commands::Config(_args) => {
            if _args.show {
                if cli.json {
                    let stdout = std::io::stdout();
                    serde_json::to_writer_pretty(stdout.lock(), &cfg)?;
                } else {
                    println!("{}", toml::to_string_pretty(&cfg)?);
                }
            } else if !ui_cfg.quiet {
                eprintln!("config: `seoview config --show` を使用してください");
            }
        }
        Commands::Completion(_args) => {
            let shell = parse_shell(&_args.shell)?;
            let mut cmd = Cli::command();
            let mut out = std::io::stdout().lock();
            clap_complete::generate(shell, &mut cmd, "seoview", &mut out);
        }
    }

    Ok(())
}

fn render_and_emit(
    report: &Report,
    home_dir: &Path,
    ui_cfg: &UiConfig,
    json: bool,
) -> Result<()> {
    let mut state = ReportState::new();
    let html = crate::render::render(report, &mut state);
    let state_path = state.save(home_dir)?;

    if json {
        write_json(report)?;
    } else {
        write_text(&html)?;
        crate::ui::print_run_summary(report, ui_cfg);
    }
    if ui_cfg.verbose {
        eprintln!("状態: {}", log_hint(&state_path, home_dir));
    }
    Ok(())
}

fn write_json(report: &Report) -> Result<()> {
    use std::io::Write;

    let buf = serde_json::to_vec_pretty(report)?;

    let mut stdout = std::io::stdout().lock();
    match stdout.write_all(&buf) {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => return Ok(()),
        Err(err) => return Err(err.into()),
    }
    match stdout.write_all(b"\n") {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err.into()),
    }
}

fn write_text(s: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = std::io::stdout().lock();
    match stdout.write_all(s.as_bytes()) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err.into()),
    }
}

fn validate_limits(max_pages: Option<u32>, max_depth: Option<u32>) -> Result<()> {
    if let Some(n) = max_pages {
        if !(1..=200).contains(&n) {
            return Err(anyhow::anyhow!(
                "run: --max-pages は 1..=200 で指定してください（現在: {n}）"
            ));
        }
    }
    if let Some(n) = max_depth {
        if !(0..=5).contains(&n) {
            return Err(anyhow::anyhow!(
                "run: --max-depth は 0..=5 で指定してください（現在: {n}）"
            ));
        }
    }
    Ok(())
}

fn log_hint(path: &Path, home_dir: &Path) -> String {
    path.strip_prefix(home_dir)
        .map(|p| format!("~/{p}", p = p.display()))
        .unwrap_or_else(|_| path.display().to_string())
}

fn parse_shell(s: &str) -> Result<clap_complete::Shell> {
    let s = s.trim().to_ascii_lowercase();
    match s.as_str() {
        "bash" => Ok(clap_complete::Shell::Bash),
        "zsh" => Ok(clap_complete::Shell::Zsh),
        "fish" => Ok(clap_complete::Shell::Fish),
        other => Err(crate::exit::invalid_args(format!(
            "未対応のシェルです: {other}（bash|zsh|fish を指定してください）"
        ))),
    }
}
