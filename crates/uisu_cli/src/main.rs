//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `uisu_core` linkage.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `uisu_cli [query] [decade]`, e.g. `uisu_cli kuti 1970s`.
//! Set `UISU_LOG_DIR` to an absolute path to write logs at the default level.

use std::process::ExitCode;

const LOG_DIR_ENV: &str = "UISU_LOG_DIR";
use uisu_core::{DocumentLibrary, RangeBucket};

fn main() -> ExitCode {
    println!("uisu_core ping={}", uisu_core::ping());
    println!("uisu_core version={}", uisu_core::core_version());

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = uisu_core::init_logging(uisu_core::default_log_level(), &log_dir) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let mut args = std::env::args().skip(1);
    let query = args.next().unwrap_or_default();
    let bucket = match args.next().map(|label| RangeBucket::parse(&label)) {
        None => RangeBucket::All,
        Some(Ok(bucket)) => bucket,
        Some(Err(err)) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut library = DocumentLibrary::open();
    library.set_query(query);
    library.set_bucket(bucket);
    let visible = library.visible();
    println!("documents matched={} bucket={}", visible.len(), bucket.label());
    for document in visible {
        println!(
            "{}\t{}\t{}\t{}",
            document.id,
            document.year,
            document.doc_type.as_str(),
            document.title
        );
    }
    ExitCode::SUCCESS
}
