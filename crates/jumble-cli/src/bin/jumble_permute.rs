// jumble-permute: print every distinct arrangement of a letter sequence.
//
// The intermediate product of the solve pipeline, exposed directly: the
// deduplicated candidate set, without dictionary filtering, sorted
// shortest first. Useful for piping into other filters.
//
// Usage:
//   jumble-permute [OPTIONS] LETTERS
//
// Options:
//   --full                Only print full-length arrangements (anagrams)
//   --keep-case           Keep input letter case instead of lowercasing
//   -h, --help            Print help

use std::io::{self, Write};

use jumble_dict::finder::{self, FindOptions};
use jumble_dict::handle::parse_letters;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if jumble_cli::wants_help(&args) {
        print_help();
        return;
    }

    let options = FindOptions {
        full_only: args.iter().any(|a| a == "--full"),
        case_fold: !args.iter().any(|a| a == "--keep-case"),
    };

    let letters = match args.iter().find(|a| !a.starts_with('-')) {
        Some(letters) => letters,
        None => jumble_cli::fatal("no letters given (try --help)"),
    };

    let letters = match parse_letters(letters) {
        Ok(letters) => letters,
        Err(e) => jumble_cli::fatal(&e.to_string()),
    };

    let mut candidates: Vec<String> = finder::candidate_set(&letters, &options)
        .into_iter()
        .collect();
    finder::sort_words(&mut candidates);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for candidate in &candidates {
        let _ = writeln!(out, "{candidate}");
    }
}

fn print_help() {
    println!("jumble-permute: print every distinct arrangement of a letter sequence.");
    println!();
    println!("Usage: jumble-permute [OPTIONS] LETTERS");
    println!();
    println!("Prints each distinct arrangement of each subset of LETTERS");
    println!("(lengths 2 and up, at most {} letters), one per line.", jumble_core::MAX_LETTERS);
    println!();
    println!("Options:");
    println!("  --full                Only print full-length arrangements (anagrams)");
    println!("  --keep-case           Keep input letter case instead of lowercasing");
    println!("  -h, --help            Print this help");
}
