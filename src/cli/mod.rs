//! CLI Module for SampleDeck
//!
//! Lets users query the sample catalog straight from the terminal without launching
//! the TUI. `open <PATH>` is handled by `main`, everything else lands here.

pub mod commands;

use crate::catalog::QueryState;
use crate::config::Config;
use crate::models::SortKey;
use crate::models::category::find_category;
use anyhow::{Context, Result, bail};
use colored::Colorize;

/// Arguments of the `browse` command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowseArgs {
    pub query: QueryState,
    pub json: bool,
}

impl BrowseArgs {
    /// Parses `[-k KEYWORD] [-c CATEGORY]... [-s SORT] [-p PAGE] [--json]`
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut parsed = BrowseArgs::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-k" | "--keyword" => {
                    let value = iter.next().context("Missing value for --keyword")?;
                    parsed.query.set_keyword(value.as_str());
                }
                "-c" | "--category" => {
                    let value = iter.next().context("Missing value for --category")?;
                    let Some(category) = find_category(value) else {
                        bail!("Unknown category: {}", value);
                    };
                    parsed.query.categories.insert(category.id.to_string());
                }
                "-s" | "--sort" => {
                    let value = iter.next().context("Missing value for --sort")?;
                    parsed.query.set_sort(SortKey::from_id(value));
                }
                "-p" | "--page" => {
                    let value = iter.next().context("Missing value for --page")?;
                    let page: usize = value
                        .parse()
                        .with_context(|| format!("Invalid page number: {}", value))?;
                    parsed.query.go_to_page(page.max(1));
                }
                "--json" => parsed.json = true,
                other => bail!("Unexpected argument: {}", other),
            }
        }

        Ok(parsed)
    }
}

/// Executes CLI commands based on the provided arguments
pub fn execute_cli(args: &[String], config: &Config) -> Result<()> {
    if args.is_empty() {
        print_help();
        return Ok(());
    }

    match args[0].as_str() {
        "browse" | "ls" => match BrowseArgs::parse(&args[1..]) {
            Ok(browse) => commands::browse(&browse, config)?,
            Err(e) => {
                println!("{}  Error: {}", "┃".bright_magenta(), e);
                println!(
                    "{}  Usage: sampledeck browse [-k KEYWORD] [-c CATEGORY]... [-s SORT] [-p PAGE] [--json]",
                    "┃".bright_magenta()
                );
            }
        },
        "show" | "view" => {
            if args.len() < 2 {
                println!("{}  Error: Missing sample ID", "┃".bright_magenta());
                println!("{}  Usage: sampledeck show <ID>", "┃".bright_magenta());
                return Ok(());
            }

            commands::show_sample(&args[1])?;
        }
        "categories" => {
            commands::list_categories();
        }
        "help" => {
            print_help();
        }
        _ => {
            println!("{}  Unknown command: {}", "┃".bright_magenta(), args[0]);

            print_help();
        }
    }

    Ok(())
}

/// Prints the help message with available commands
fn print_help() {
    println!(
        "{}  {}",
        "┃".bright_magenta(),
        "SAMPLEDECK CLI - CODE SAMPLE CATALOG".bold()
    );

    println!("{}  {}", "┃".bright_magenta(), "USAGE:".bright_yellow());
    println!("{}  sampledeck [COMMAND] [ARGS]", "┃".bright_magenta());
    println!("{}  {}", "┃".bright_magenta(), "COMMANDS:".bright_yellow());

    let commands = [
        ("open <PATH>", "Launch the TUI at a route, e.g. /sample/1"),
        ("browse, ls [OPTIONS]", "List one page of the filtered, sorted catalog"),
        ("  -k, --keyword <TEXT>", "Match title or description"),
        ("  -c, --category <ID>", "Require a category (repeatable)"),
        ("  -s, --sort <KEY>", "popularity, newest or rating"),
        ("  -p, --page <N>", "Page number, clamped to the last page"),
        ("  --json", "Print the page as JSON"),
        ("show, view <ID>", "Display a sample with its code"),
        ("categories", "List category ids and sort keys"),
        ("help", "Display this help message"),
    ];
    for (command, description) in commands {
        println!(
            "{}  {:<27} {}",
            "┃".bright_magenta(),
            command.bright_white(),
            description
        );
    }

    println!("{}  {}", "┃".bright_magenta(), "TIP:".bright_green());
    println!(
        "{}  Run with no arguments to launch the full TUI (Terminal User Interface) mode",
        "┃".bright_magenta()
    );
}
