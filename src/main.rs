use mimalloc::MiMalloc;
use std::path::PathBuf;
use std::process::ExitCode;

mod scenario;

use scenario::Scenario;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn parse_env_bool(key: &str) -> bool {
    matches!(
        std::env::var(key).ok().as_deref(),
        Some("1") | Some("true") | Some("yes") | Some("on")
    )
}

fn main() -> ExitCode {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: attrsync <scenario.toml>");
        return ExitCode::from(2);
    };
    let quiet = parse_env_bool("ATTRSYNC_QUIET");

    let result = Scenario::load(&path).and_then(|scenario| scenario.run());
    let (reports, totals) = match result {
        Ok(out) => out,
        Err(err) => {
            eprintln!("attrsync: {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    };

    for (index, report) in reports.iter().enumerate() {
        println!("pass {}: {}", index + 1, report.outline);
        if quiet {
            continue;
        }
        for warning in &report.warnings {
            for line in warning.lines() {
                println!("  warning: {line}");
            }
        }
    }
    println!(
        "writes={} removals={} skipped={} diagnostics={}",
        totals.writes, totals.removals, totals.skipped, totals.diagnostics
    );
    ExitCode::SUCCESS
}
