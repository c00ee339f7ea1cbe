//! Apply command implementation.

use blockpatch_core::patch::{apply_to_file, check_file, PatchError};
use tracing::debug;

use crate::ApplyArgs;

pub fn run(args: ApplyArgs) {
    debug!(
        "patching {} with contents of {}",
        args.target.display(),
        args.source.display()
    );

    if args.dry_run {
        match check_file(&args.target, &args.marker, args.delimiter) {
            Ok(true) => {
                println!(
                    "Found `{}` block in {}",
                    args.marker,
                    args.target.display()
                );
                println!("(dry-run mode - no changes made)");
            }
            Ok(false) => {
                print_not_found(&args.marker, &args.target);
                std::process::exit(1);
            }
            Err(e) => {
                print_error(&e);
                std::process::exit(1);
            }
        }
        return;
    }

    match apply_to_file(&args.target, &args.source, &args.marker, args.delimiter) {
        Ok(report) => {
            println!(
                "Updated {}. replaced {} occurrence.",
                report.target.display(),
                report.replacements
            );
        }
        Err(e) => {
            print_error(&e);
            std::process::exit(1);
        }
    }
}

fn print_not_found(marker: &str, target: &std::path::Path) {
    eprintln!(
        "Error: could not find `{}` block to replace in {}.",
        marker,
        target.display()
    );
}

fn print_error(e: &PatchError) {
    match e {
        PatchError::PatternNotFound { marker, .. } => {
            eprintln!("Error: could not find `{marker}` block to replace.");
        }
        other => {
            eprintln!("Error: {other}");
        }
    }
}
