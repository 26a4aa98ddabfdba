//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    solver::{Database, ScoreEntry},
    tictactoe::Position,
};

/// Create a progress bar over `total` positions
pub fn create_progress(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} positions ({msg})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );
    pb
}

/// Create a spinner for long-running steps
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb
}

/// Build the database, showing a spinner when `progress` is set
pub fn build_with_spinner(
    config: &crate::BuildConfig,
    progress: bool,
) -> crate::Result<Database> {
    let spinner = progress.then(|| create_spinner("Building retrograde database..."));
    let db = Database::build_with(config);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    db
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Human-readable score from X's point of view
pub fn describe_score(score: i32) -> &'static str {
    match score.signum() {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}

/// Print a position with its score entry
pub fn print_entry(position: &Position, entry: &ScoreEntry) {
    println!("{}\n", position.render());
    print_kv("Position", &position.key());
    print_kv(
        "Score",
        &format!("{} ({})", entry.score, describe_score(entry.score)),
    );
    if entry.is_terminal() {
        print_kv("Optimal moves", "(terminal)");
    } else {
        let moves: Vec<String> = entry.optimal_moves.iter().map(usize::to_string).collect();
        print_kv("Optimal moves", &moves.join(", "));
    }
}
