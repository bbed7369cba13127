// jumble-solve: find dictionary words hidden in a letter sequence.
//
// Enumerates every arrangement of every subset (two letters and up) of the
// given letters, deduplicates, filters against a word list, and prints the
// surviving words shortest first, one per line.
//
// Usage:
//   jumble-solve [OPTIONS] LETTERS
//
// Options:
//   -w, --wordlist PATH   Word list file (one word per line)
//   --full                Only report full-length arrangements (anagrams)
//   --keep-case           Match the dictionary without lowercasing input
//   -h, --help            Print help

use std::io::{self, Write};

use jumble_dict::handle::JumbleHandle;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist_path, args) = jumble_cli::parse_wordlist_path(&args);

    if jumble_cli::wants_help(&args) {
        print_help();
        return;
    }

    let full_only = args.iter().any(|a| a == "--full");
    let keep_case = args.iter().any(|a| a == "--keep-case");

    let letters = match args.iter().find(|a| !a.starts_with('-')) {
        Some(letters) => letters,
        None => jumble_cli::fatal("no letters given (try --help)"),
    };

    let dictionary = jumble_cli::load_dictionary(wordlist_path.as_deref())
        .unwrap_or_else(|e| jumble_cli::fatal(&e));

    let mut handle = JumbleHandle::new(Box::new(dictionary));
    handle.set_full_only(full_only);
    handle.set_case_fold(!keep_case);

    let words = match handle.find(letters) {
        Ok(words) => words,
        Err(e) => jumble_cli::fatal(&e.to_string()),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for word in &words {
        let _ = writeln!(out, "{word}");
    }
}

fn print_help() {
    println!("jumble-solve: find dictionary words hidden in a letter sequence.");
    println!();
    println!("Usage: jumble-solve [OPTIONS] LETTERS");
    println!();
    println!("Prints every word from the word list that can be formed by");
    println!("rearranging a subset of LETTERS (up to {} letters).", jumble_core::MAX_LETTERS);
    println!();
    println!("Options:");
    println!("  -w, --wordlist PATH   Word list file (one word per line)");
    println!("  --full                Only report full-length arrangements (anagrams)");
    println!("  --keep-case           Match the dictionary without lowercasing input");
    println!("  -h, --help            Print this help");
}
