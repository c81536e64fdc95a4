fn main() {
    if let Err(err) = seoview::cli::run() {
        seoview::ui::eprintln_error(&err);
        std::process::exit(seoview::exit::exit_code(&err));
    }
}
