use crate::catalog::{self, CatalogPage};
use crate::cli::BrowseArgs;
use crate::config::Config;
use crate::models::{CATEGORIES, SampleDetail, SampleRecord, SampleStore, SortKey};
use anyhow::Result;
use colored::Colorize;
use tracing::debug;

/// Prints one page of the catalog for the parsed query
pub fn browse(args: &BrowseArgs, config: &Config) -> Result<()> {
    let store = SampleStore::seeded();
    let page = catalog::run(store.records(), &args.query, config.page_size);
    debug!(
        keyword = %args.query.keyword,
        sort = args.query.sort.id(),
        page = page.page,
        matches = page.total_matching,
        "browse"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    display_page(&page, args.query.sort);
    Ok(())
}

fn display_page(page: &CatalogPage, sort: SortKey) {
    println!(
        "{}  {} ({})",
        "┃".bright_magenta(),
        "Code Samples".bold(),
        page.total_matching
    );
    println!(
        "{}  Sorted by {} · Page {} of {}",
        "┃".bright_magenta(),
        sort.label().bright_yellow(),
        page.page,
        page.total_pages
    );
    println!("{}", "─".repeat(60).bright_magenta());

    if page.is_empty() {
        println!("{}  No Samples Found", "┃".bright_magenta());
        println!(
            "{}  Try adjusting your search or filters.",
            "┃".bright_magenta()
        );
        return;
    }

    for record in &page.items {
        display_record_line(record);
    }
}

fn display_record_line(record: &SampleRecord) {
    println!(
        "{}  {} {}",
        "┃".bright_magenta(),
        format!("[{}]", record.id).yellow(),
        record.title.bright_white()
    );
    println!(
        "{}      by {} · {} views · {:.1} ★ · {} comments",
        "┃".bright_magenta(),
        record.author.as_deref().unwrap_or("Anonymous").bright_blue(),
        record.views_or_zero(),
        record.rating_or_zero(),
        record.comments_count.unwrap_or(0)
    );
    if !record.tags.is_empty() {
        println!(
            "{}      {}",
            "┃".bright_magenta(),
            record.tags.join(", ").bright_cyan()
        );
    }
}

/// Shows a sample's metadata followed by its code
pub fn show_sample(id: &str) -> Result<()> {
    let store = SampleStore::seeded();

    match store.detail(id) {
        Some(detail) => display_detail(&detail),
        None => {
            println!("{}  No sample found with ID: {}", "┃".bright_magenta(), id);
            println!("{}  Available samples:", "┃".bright_magenta());
            println!("{}", "─".repeat(60).bright_magenta());

            for record in store.records().iter().take(10) {
                println!(
                    "{}  {} {}",
                    "┃".bright_magenta(),
                    format!("[{}]", record.id).yellow(),
                    record.title.bright_white()
                );
            }

            if store.len() > 10 {
                println!("{}  ... and {} more", "┃".bright_magenta(), store.len() - 10);
            }
        }
    }

    Ok(())
}

fn display_detail(detail: &SampleDetail) {
    let record = &detail.record;

    println!("{}", "─".repeat(60).bright_magenta());
    println!("{}  {}", "┃".bright_magenta(), record.title.bold());
    println!("{}", "─".repeat(60).bright_magenta());

    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "Author".bright_blue(),
        detail.author.name
    );
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "Language".bright_blue(),
        detail.language.display_name()
    );
    if let Some(file_name) = &detail.file_name {
        println!("{}  {}: {}", "┃".bright_magenta(), "File".bright_blue(), file_name);
    }
    println!(
        "{}  {}: {} views · {:.1} ★ ({} ratings) · {} comments",
        "┃".bright_magenta(),
        "Stats".bright_blue(),
        record.views_or_zero(),
        record.rating_or_zero(),
        detail.total_ratings,
        record.comments_count.unwrap_or(0)
    );
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "Created".bright_blue(),
        detail.created_at.format("%Y-%m-%d %H:%M")
    );
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "Updated".bright_blue(),
        detail.updated_at.format("%Y-%m-%d %H:%M")
    );
    if !record.tags.is_empty() {
        println!(
            "{}  {}: {}",
            "┃".bright_magenta(),
            "Tags".bright_blue(),
            record.tags.join(", ")
        );
    }

    println!("{}  {}", "┃".bright_magenta(), "Description:".bright_yellow());
    println!("{}  {}", "┃".bright_magenta(), detail.long_description);

    println!("{}", "─".repeat(60).bright_magenta());
    for (i, line) in detail.code.lines().enumerate() {
        println!(
            "{} {} {}",
            "┃".bright_magenta(),
            format!("{:>3}", i + 1).bright_black(),
            line
        );
    }
    println!("{}", "─".repeat(60).bright_magenta());

    if !detail.related.is_empty() {
        println!("{}  {}", "┃".bright_magenta(), "Related Samples:".bright_yellow());
        for related in &detail.related {
            println!(
                "{}  {} {} by {}",
                "┃".bright_magenta(),
                format!("[{}]", related.id).yellow(),
                related.title.bright_white(),
                related.author
            );
        }
    }
}

/// Lists category ids with their labels, then the sort keys
pub fn list_categories() {
    println!("{}  {}", "┃".bright_magenta(), "CATEGORIES:".bright_yellow());
    for category in CATEGORIES {
        println!(
            "{}  {:<27} {}",
            "┃".bright_magenta(),
            category.id.bright_white(),
            category.label
        );
    }

    println!("{}  {}", "┃".bright_magenta(), "SORT KEYS:".bright_yellow());
    for sort in SortKey::ALL {
        println!(
            "{}  {:<27} {}",
            "┃".bright_magenta(),
            sort.id().bright_white(),
            sort.label()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::QueryState;

    #[test]
    fn json_output_lists_the_page() {
        let store = SampleStore::seeded();
        let mut query = QueryState::default();
        query.set_keyword("kanban");
        let page = catalog::run(store.records(), &query, 6);

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["total_matching"], 1);
        assert_eq!(json["items"][0]["id"], "105");
        assert_eq!(json["page"], 1);
        assert_eq!(json["total_pages"], 1);
    }

    #[test]
    fn commands_run_against_the_seeded_store() {
        let config = Config::default();
        assert!(browse(&BrowseArgs::default(), &config).is_ok());
        assert!(show_sample("1").is_ok());
        assert!(show_sample("missing").is_ok());
    }
}
