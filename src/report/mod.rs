// SPDX-License-Identifier: PMPL-1.0-or-later

//! Human-readable console output.
//!
//! Everything the CLI prints for people lives here; machine output
//! goes through [`output::OutputFormat`] instead.

pub mod output;

use colored::*;

use crate::registry::Registry;
use crate::state::{self, PostRecord, StatusField};
use crate::types::{ConversionResult, FilterReason, FilterVerdict, Status, TitleClassification};

pub use output::OutputFormat;

/// Print one classified title, section by section.
pub fn print_classification(original: &str, classification: &TitleClassification) {
    println!("\n{}", "=== TITLE CLASSIFICATION ===".bold().cyan());
    println!();

    println!("{}", "LANGUAGES".bold().yellow());
    println!("  Source: {}", classification.source_languages.join(", "));
    println!("  Target: {}", classification.target_languages.join(", "));
    println!("  Direction: {}", classification.direction);
    println!();

    println!("{}", "FLAIR".bold().yellow());
    println!("  Code: {}", classification.final_code.bold());
    println!("  Text: {}", classification.final_text);
    if let Some(pair) = &classification.language_country {
        println!("  Region: {pair}");
    }
    if let Some(notify) = &classification.notify_languages {
        println!("  Notify: {}", notify.join(", "));
    }
    println!();

    println!("{}", "TITLE".bold().yellow());
    println!("  Original: {original}");
    println!("  Processed: {}", classification.processed_title);
    if !classification.actual_title.is_empty() {
        println!("  Actual: {}", classification.actual_title);
    }
}

/// Print a filter verdict as a one-liner, PASS in green, FAIL in red.
pub fn print_verdict(original: &str, verdict: &FilterVerdict) {
    match verdict {
        FilterVerdict::Accepted { title } => {
            println!("{} {}", "PASS".green().bold(), title);
            if title != original {
                println!("  (misspelling of \"English\" repaired)");
            }
        }
        FilterVerdict::Rejected { reason } => {
            println!(
                "{} rule {}: {}",
                "FAIL".red().bold(),
                reason.rule(),
                describe_reason(reason)
            );
        }
    }
}

/// Print a converter lookup result.
pub fn print_conversion(query: &str, result: &ConversionResult) {
    if result.is_empty() {
        println!("{} no language matches `{query}`", "MISS".red().bold());
        return;
    }
    println!("{} {}", result.code.bold(), result.name);
    if result.is_script() {
        println!("  Script (ISO 15924)");
    }
    println!("  Supported flair: {}", result.supported);
    if let Some(country) = &result.country {
        println!("  Country: {country}");
    }
}

/// Print a country resolver result.
pub fn print_country(query: &str, code: &str, name: &str) {
    if code.is_empty() {
        println!("{} no country matches `{query}`", "MISS".red().bold());
    } else {
        println!("{} {}", code.bold(), name);
    }
}

/// Print a stored post record with its rendered flair.
pub fn print_record(registry: &Registry, record: &PostRecord) {
    let flair = state::render(registry, record);

    println!("\n{}", "=== POST RECORD ===".bold().cyan());
    println!();

    println!("{}", "POST".bold().yellow());
    println!("  Id: {}", record.id);
    println!("  Author: {}", record.author);
    println!("  Title: {}", record.title);
    println!("  Direction: {}", record.direction);
    println!();

    println!("{}", "FLAIR".bold().yellow());
    println!("  Category: {}", flair.category.bold());
    println!("  Text: {}", flair.text);
    println!();

    println!("{}", "WORKFLOW".bold().yellow());
    match &record.status {
        StatusField::Single(status) => println!("  Status: {}", paint_status(*status)),
        StatusField::PerLanguage(statuses) => {
            println!("  Status:");
            for (code, status) in statuses {
                println!("    {code}: {}", paint_status(*status));
            }
        }
    }
    println!("  Identified: {}", record.is_identified);
    println!("  Long: {}", record.is_long);
    if record.is_script {
        println!("  Script pinned: true");
    }
    if !record.language_history.is_empty() {
        println!("  History: {}", record.language_history.join(" > "));
    }
    if !record.contributors.is_empty() {
        println!("  Contributors: {}", record.contributors.join(", "));
    }
    if !record.notified.is_empty() {
        println!("  Notified: {}", record.notified.join(", "));
    }
    for (status, seconds) in &record.time_delta {
        println!("  Reached {} after {}s", status, seconds);
    }
}

fn describe_reason(reason: &FilterReason) -> &'static str {
    match reason {
        FilterReason::NoKeywords => "no language keyword anywhere in the title",
        FilterReason::BuriedLede => "the target language is named too late in the title",
        FilterReason::ShortGeneric => "short generic request naming no other language",
        FilterReason::MisplacedArrow => "the > separator appears too late in the title",
    }
}

fn paint_status(status: Status) -> ColoredString {
    let label = status.label();
    match status {
        Status::Untranslated => label.red(),
        Status::MissingAssets => label.yellow(),
        Status::InProgress => label.blue(),
        Status::DoubleCheck => label.magenta(),
        Status::Translated => label.green(),
    }
}
