//! Statistics reporting.

use console::style;

use crate::download::RunStats;

/// Print the per-run summary.
pub fn print_run_stats(stats: &RunStats) {
    println!();
    println!("{}", style("Run summary:").bold());
    println!("  Chapters scraped: {}", stats.chapters_processed);
    println!("  Chapters used:    {}", stats.chapters_with_images());
    if stats.chapters_empty > 0 {
        println!(
            "  Chapters empty:   {}",
            style(stats.chapters_empty).yellow()
        );
    }
    println!("  Images found:     {}", stats.images_found);
    println!(
        "  Images saved:     {}",
        style(stats.images_downloaded).green()
    );
    if stats.images_failed > 0 {
        println!("  Images failed:    {}", style(stats.images_failed).red());
    }
    println!("  PDF pages:        {}", stats.pages_written);
}
