//! Output formatting for CLI

use crate::analysis::PlayerStats;

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

/// Format a rate as a percentage with one decimal
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the grouped win-or-draw rates, one line per window
pub fn print_player_stats(stats: &PlayerStats) {
    print_kv("Games", &format_number(stats.games()));
    print_kv("Games per group", &format_number(stats.group_size));
    print_kv(
        "Win-or-draw rate",
        &format_percent(stats.overall_win_draw_rate()),
    );
    for (group, rate) in stats.aggregated.iter().enumerate() {
        let first = group * stats.group_size + 1;
        let last = ((group + 1) * stats.group_size).min(stats.games());
        println!("    games {first:>7}-{last:<7} {}", format_percent(*rate));
    }
}
