//! Word frequency counter built on `htable::Table`.
//!
//! Reads whitespace-separated words from stdin, counts them
//! case-insensitively, prints `word count` lines by descending count, then
//! dumps the table to stderr.
//!
//! Run with: `cargo run --example wordfreq < input.txt`
//! Set `RUST_LOG=debug` to see table growth.

use htable::{StrKey, Table};
use std::error::Error;
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut counts: Table<u64> = Table::new();
    // The table has no ordering, so first-seen order is tracked here.
    let mut uniques: Vec<String> = Vec::new();

    for line in io::stdin().lock().lines() {
        let line = line?;
        for word in line.split_whitespace() {
            let word = word.to_lowercase();
            let key = StrKey::from(word.as_str());
            match counts.get(&key).copied() {
                Some(n) => {
                    counts.set(key, n + 1);
                }
                None => {
                    counts.set(key, 1);
                    uniques.push(word);
                }
            }
        }
    }

    let count_of = |w: &str| counts.get(&StrKey::from(w)).copied().unwrap_or(0);
    uniques.sort_by_key(|w| std::cmp::Reverse(count_of(w)));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for word in &uniques {
        writeln!(out, "{} {}", word, count_of(word))?;
    }
    out.flush()?;

    let stderr = io::stderr();
    let mut err = stderr.lock();
    writeln!(err, "Hash table dump:")?;
    writeln!(err, "----------------")?;
    counts.dump(&mut err)?;
    Ok(())
}
