// System status — what's in the store and how fresh the cached report is.

use anyhow::Result;
use colored::Colorize;

use crate::store::PostStore;

pub fn show(store: &PostStore, db_path: &str) -> Result<()> {
    println!("\n{}", "=== Bonfire Status ===".bold());
    println!("  Database:     {db_path}");
    println!("  Posts stored: {}", store.post_count()?);

    match store.get_report()? {
        Some((report, updated_at)) => {
            println!(
                "  Cached report: {} topics over {} posts, built {}",
                report.topics.len(),
                report.doc_count,
                updated_at
            );
        }
        None => {
            println!(
                "  Cached report: {}",
                "none (run `bonfire trends`)".dimmed()
            );
        }
    }
    println!();
    Ok(())
}
