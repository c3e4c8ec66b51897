//! CLI driver for net frequency computation.
//!
//! Usage:
//!   nf --text banana
//!   nf --text banana --query an --query ana
//!   printf mississippi | nf
//!
//! The raw input is wrapped in `#`/`$` sentinels before construction. With
//! `--query` flags the driver prints one `query\tnf` line per query;
//! otherwise it prints the full net frequency report.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use netfreq::{wrap_sentinels, SuffixTree};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let raw = match parse_arg(&args, "--text") {
        Some(text) => text.into_bytes(),
        None => {
            let mut buf = Vec::new();
            if let Err(err) = io::stdin().read_to_end(&mut buf) {
                eprintln!("error: failed to read stdin: {err}");
                return ExitCode::FAILURE;
            }
            // a trailing newline is shell noise, not text
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            buf
        }
    };

    let text = match wrap_sentinels(&raw) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut tree = SuffixTree::new(&text);
    let queries = parse_multi_arg(&args, "--query");

    if queries.is_empty() {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(err) = tree.all_nf(&mut out) {
            eprintln!("error: failed to write report: {err}");
            return ExitCode::FAILURE;
        }
        if let Err(err) = out.flush() {
            eprintln!("error: failed to write report: {err}");
            return ExitCode::FAILURE;
        }
    } else {
        for query in &queries {
            println!("{query}\t{}", tree.single_nf(query.as_bytes()));
        }
    }

    ExitCode::SUCCESS
}

fn parse_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_multi_arg(args: &[String], flag: &str) -> Vec<String> {
    args.iter()
        .enumerate()
        .filter(|(_, a)| *a == flag)
        .filter_map(|(i, _)| args.get(i + 1))
        .cloned()
        .collect()
}

fn print_usage() {
    println!("Compute string net frequencies over a suffix tree.");
    println!();
    println!("Usage:");
    println!("  nf --text STRING                 report all positive net frequencies");
    println!("  nf --text STRING --query SUB...  net frequency of specific substrings");
    println!("  ... | nf                         read the text from stdin");
}
