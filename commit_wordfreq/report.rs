use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::frequency::WordCount;

pub const CONSOLE_HEADER: &str = "Top most used words in commit messages:";
pub const FILE_HEADER: &str = "Top 10 most used words in commit messages:";
pub const SEPARATOR: &str = "------------------------------------------";

/// Header, separator, then one `word: count` line per entry.
pub fn render(header: &str, words: &[WordCount]) -> String {
    let mut out = format!("{}\n{}\n", header, SEPARATOR);
    for wc in words {
        out.push_str(&format!("{}: {}\n", wc.word, wc.count));
    }
    out
}

pub fn print_report<W: Write>(out: &mut W, words: &[WordCount]) -> io::Result<()> {
    out.write_all(render(CONSOLE_HEADER, words).as_bytes())
}

/// Create or truncate `path` and write the file flavour of the report.
pub fn save_report(path: &Path, words: &[WordCount]) -> io::Result<()> {
    fs::write(path, render(FILE_HEADER, words))
}
