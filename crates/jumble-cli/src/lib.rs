// jumble-cli: shared utilities for the command-line tools.

use std::path::PathBuf;
use std::process;

use jumble_dict::dictionary::{WordlistDictionary, WordlistError};

/// Word-list file name searched for in directory candidates.
const WORDS_FILE: &str = "words.txt";

/// Search for a word list and load it into a dictionary.
///
/// Search order:
/// 1. `wordlist_path` argument (if provided)
/// 2. `JUMBLE_WORDLIST` environment variable (file path)
/// 3. `~/.jumble/words.txt`
/// 4. System word lists (`/usr/share/dict/words` and variants)
/// 5. `words.txt` in the current working directory
pub fn load_dictionary(wordlist_path: Option<&str>) -> Result<WordlistDictionary, String> {
    let search_paths = build_search_paths(wordlist_path);

    for path in &search_paths {
        if path.is_file() {
            return WordlistDictionary::from_path(path)
                .map_err(|e: WordlistError| format!("failed to load {}: {}", path.display(), e));
        }
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of word-list file candidates, in search order.
fn build_search_paths(wordlist_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = wordlist_path {
        paths.push(PathBuf::from(p));
    }

    // 2. JUMBLE_WORDLIST environment variable
    if let Ok(env_path) = std::env::var("JUMBLE_WORDLIST") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".jumble").join(WORDS_FILE));
    }

    // 4. System word lists
    paths.push(PathBuf::from("/usr/share/dict/words"));
    paths.push(PathBuf::from("/usr/share/dict/american-english"));
    paths.push(PathBuf::from("/usr/share/dict/british-english"));

    // 5. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDS_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--wordlist=PATH` or `-w PATH` argument from command line args.
///
/// Returns `(wordlist_path, remaining_args)`.
pub fn parse_wordlist_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut wordlist_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--wordlist=") {
            wordlist_path = Some(val.to_string());
        } else if arg == "--wordlist" || arg == "-w" {
            if i + 1 < args.len() {
                wordlist_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (wordlist_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_equals_form() {
        let (path, rest) = parse_wordlist_path(&args(&["--wordlist=/tmp/w.txt", "cat"]));
        assert_eq!(path.as_deref(), Some("/tmp/w.txt"));
        assert_eq!(rest, args(&["cat"]));
    }

    #[test]
    fn parses_separate_value_form() {
        let (path, rest) = parse_wordlist_path(&args(&["-w", "/tmp/w.txt", "--full", "cat"]));
        assert_eq!(path.as_deref(), Some("/tmp/w.txt"));
        assert_eq!(rest, args(&["--full", "cat"]));
    }

    #[test]
    fn passes_through_unrelated_args() {
        let (path, rest) = parse_wordlist_path(&args(&["cat"]));
        assert_eq!(path, None);
        assert_eq!(rest, args(&["cat"]));
    }
}
