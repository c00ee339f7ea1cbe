//! Check command implementation.

use blockpatch_core::patch::check_file;

use crate::CheckArgs;

pub fn run(args: CheckArgs) {
    match check_file(&args.target, &args.marker, args.delimiter) {
        Ok(true) => {
            println!(
                "OK   `{}` block present in {}",
                args.marker,
                args.target.display()
            );
        }
        Ok(false) => {
            eprintln!(
                "FAIL no `{}` block closed by {:?} in {}",
                args.marker,
                args.delimiter,
                args.target.display()
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
