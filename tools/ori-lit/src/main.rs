//! `ori-lit`: decode literals from the command line.
//!
//! Prints each literal's value and how many units of it were consumed.
//! Set `RUST_LOG=ori_lit=trace` to see why a literal was rejected.

mod options;
mod report;

use std::process::ExitCode;

use options::Options;
use report::decode_literal;

/// Install a tracing subscriber if `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    }
}

fn print_usage() {
    eprintln!("Usage: ori-lit <kind> [options] <literal>...");
    eprintln!();
    eprintln!("Kinds: i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bool");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --base=<n>   Integer base 2..=36, or 0 to infer 0x/0o/0b (default: 10)");
    eprintln!("  --bytes      Decode through the byte adapter");
    eprintln!("  --exact      Fail unless the whole literal is consumed");
    eprintln!("  --           Treat every following argument as a literal");
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match Options::parse(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(
        kind = %options.kind,
        base = options.base,
        infer = options.infers_base(),
        bytes = options.bytes,
        "decoding {} literal(s)",
        options.literals.len()
    );

    let mut failed = false;
    for literal in &options.literals {
        match decode_literal(&options, literal) {
            Ok(outcome) => println!("'{literal}' -> {outcome}"),
            Err(err) => {
                failed = true;
                println!("'{literal}' -> error: {err}");
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
