//! Basic usage example of the redraft diff engine

use redraft_core::tokenizers::CharacterTokenizer;
use redraft_core::{compute_diff, AlignmentKind, DiffConfig, DiffEngine};

const LINE: &str = "----------------------------------------";

fn main() {
    println!("=== Redraft Diff Engine Examples ===\n");

    // Example 1: Simple diff with default configuration
    example_simple_diff();

    // Example 2: Character-granularity diff
    example_character_diff();

    // Example 3: Size guard and the greedy fallback
    example_size_guard();
}

fn example_simple_diff() {
    println!("Example 1: Simple Diff");
    println!("{}", LINE);

    let original = "The report was written by the team last week.";
    let suggested = "The team wrote the report last week.";

    let result = compute_diff(original, suggested, None);

    println!("Original:  {}", original);
    println!("Suggested: {}", suggested);
    println!("\n{}", result.summary());
    println!("\nOperations:");
    for (i, op) in result.operations.iter().enumerate() {
        println!("  {}. {}", i + 1, op.description());
    }
    println!("\n");
}

fn example_character_diff() {
    println!("Example 2: Character-Granularity Diff");
    println!("{}", LINE);

    let config = DiffConfig::default().with_tokenizer(Box::new(CharacterTokenizer::new()));
    let result = compute_diff("colour", "color", Some(config));

    for op in &result.operations {
        println!("  {}", op.description());
    }
    println!("\n");
}

fn example_size_guard() {
    println!("Example 3: Size Guard");
    println!("{}", LINE);

    // A tiny ceiling for demonstration; real callers keep the default.
    let config = DiffConfig::default()
        .with_token_ceiling(Some(4))
        .with_algorithm(AlignmentKind::Lcs);
    let engine = DiffEngine::new(config);

    // Over the ceiling the engine degrades to the greedy tier but stays total.
    let result = engine.diff("one two three four five", "zero one two three four five");

    println!("{}", result.summary());
    println!("(alignment quality degrades past the ceiling, output stays valid)");
}
