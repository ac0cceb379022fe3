use std::path::{Path, PathBuf};
use std::process;

use sigcheck_core::{Checker, Verified};

use crate::{report_error, OutputFormat};

/// Check `executable` (if given) and then every entry of `executables`.
///
/// Exits 1 on the first failure without checking the remaining files.
pub(crate) fn cmd_check(
    public_key: &Path,
    executable: Option<&Path>,
    executables: &[PathBuf],
    output: OutputFormat,
    quiet: bool,
) {
    let targets: Vec<&Path> = executable
        .into_iter()
        .chain(executables.iter().map(PathBuf::as_path))
        .collect();

    if targets.is_empty() {
        report_error(
            "no executable given (use --executable or pass paths)",
            "usage",
            output,
            quiet,
        );
        process::exit(1);
    }

    let checker = Checker::new(public_key);
    for target in targets {
        match checker.check(target) {
            Ok(verified) => report_verified(&verified, output, quiet),
            Err(e) => {
                report_error(&e.to_string(), e.kind().as_str(), output, quiet);
                process::exit(1);
            }
        }
    }
}

fn report_verified(verified: &Verified, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => println!(
            "verified {} (signer: {}...)",
            verified.executable.display(),
            verified.signer
        ),
        OutputFormat::Json => {
            let mut value = match serde_json::to_value(verified) {
                Ok(v) => v,
                Err(e) => {
                    report_error(&format!("internal error: {}", e), "internal", output, quiet);
                    process::exit(1);
                }
            };
            value["status"] = serde_json::json!("verified");
            println!("{}", value);
        }
    }
}
