use lexdawg::Dawg;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use tracing_subscriber::EnvFilter;

/// Builds a word graph from a word list and runs a few queries against it.
///
/// Usage: cargo run --example wordlist <filename> [prefix] [pattern] [word distance]
///
/// Set `RUST_LOG=lexdawg=debug` to see reduction statistics.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <filename> [prefix] [pattern] [word distance]",
            args[0]
        );
        std::process::exit(1);
    }

    let filename = &args[1];

    let file = File::open(filename).unwrap_or_else(|_| {
        eprintln!("File \"{}\" not found.", filename);
        std::process::exit(1);
    });

    // One word per line; blank lines are skipped
    let mut dawg = Dawg::new();
    for line in BufReader::new(file).lines() {
        let line = line.unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        });
        let word = line.trim();
        if !word.is_empty() {
            dawg.add(word.chars());
        }
    }
    dawg.reduce();

    let stats = dawg.stats();
    println!("=== Statistics ===");
    println!("Words: {}", stats.word_count);
    println!("Trie nodes: {}", stats.trie_node_count);
    println!("Graph nodes: {}", stats.node_count);
    println!("Reduction ratio: {:.2}%", stats.reduction_ratio());

    if let Some(prefix) = args.get(2) {
        let words = dawg.search_with_prefix(prefix.chars());
        println!("\n{} words start with \"{}\"", words.len(), prefix);
        for word in words.iter().take(10) {
            println!("  {}", word.iter().collect::<String>());
        }
    }

    if let Some(pattern) = args.get(3) {
        match dawg.search_with_count(pattern.chars()) {
            Ok(words) => {
                println!("\n{} words match \"{}\"", words.len(), pattern);
                for (word, count) in words.iter().take(10) {
                    println!("  {} ({})", word.iter().collect::<String>(), count);
                }
            }
            Err(e) => eprintln!("\n{}", e),
        }
    }

    if let (Some(query), Some(distance)) = (args.get(4), args.get(5)) {
        let distance: usize = distance.parse().unwrap_or_else(|_| {
            eprintln!("Distance must be a non-negative integer, got \"{}\"", distance);
            std::process::exit(1);
        });
        let words = dawg.search_within_distance(query.chars(), distance);
        println!("\n{} words within {} edits of \"{}\"", words.len(), distance, query);
        for word in &words {
            println!("  {}", word.iter().collect::<String>());
        }
    }
}
