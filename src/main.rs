//! ahn - command-line entry point

fn main() {
    if let Err(err) = ahnentafel::cli::run() {
        ahnentafel::ui::output::error(format!("{err:#}"));
        std::process::exit(1);
    }
}
