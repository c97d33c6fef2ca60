// SPDX-License-Identifier: PMPL-1.0-or-later

//! lingo-triage: deterministic title triage and post state tracking
//! for translation request queues.
//!
//! The binary is a front end over the library: `classify` and `batch`
//! run the title pipeline, `filter` checks the posting rules, `state`
//! operates on persisted post records, and `lookup` queries the
//! language and country resolvers directly.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use rayon::prelude::*;

use lingo_triage::convert::{convert, country};
use lingo_triage::pipeline::{bad_title_reformat, check_title, Classifier};
use lingo_triage::registry::Registry;
use lingo_triage::report::{self, OutputFormat};
use lingo_triage::state::{self, PostRecord};
use lingo_triage::storage::RecordStore;
use lingo_triage::types::Status;

#[derive(Parser)]
#[command(name = "lingo-triage")]
#[command(version = "2.0.0")]
#[command(about = "Title triage and post state tracking for translation request queues")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one post title
    Classify {
        /// Post title to classify
        #[arg(value_name = "TITLE")]
        title: String,

        /// Machine output instead of the human report
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Classify a file of titles, one per line, in parallel
    Batch {
        /// File with one title per line
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Emit one JSON object per title instead of a summary
        #[arg(short, long)]
        jsonl: bool,
    },

    /// Check a title against the posting rules
    Filter {
        /// Post title to check
        #[arg(value_name = "TITLE")]
        title: String,

        /// Suggest a reformatted title when the check fails
        #[arg(short, long)]
        reformat: bool,

        /// Machine output instead of the one-line verdict
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Operate on stored post records
    State {
        /// Record store directory
        #[arg(short, long, default_value = "records")]
        store: PathBuf,

        #[command(subcommand)]
        action: StateAction,
    },

    /// Look up one language or country token
    Lookup {
        /// Code, name, nickname, or regional pair
        #[arg(value_name = "TOKEN")]
        token: String,

        /// Query the country resolver instead of the language converter
        #[arg(short, long)]
        country: bool,
    },
}

#[derive(Subcommand)]
enum StateAction {
    /// Classify a title and store a fresh record for it
    New {
        /// Post id, also the storage key
        id: String,
        /// Post title
        title: String,
        /// Post author
        #[arg(short, long, default_value = "[deleted]")]
        author: String,
    },

    /// Print one stored record
    Show {
        id: String,

        /// Machine output instead of the human report
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List stored post ids
    List,

    /// Reclassify a record's language from a token
    Identify {
        id: String,
        /// Language name or code, script code, or a `+`-joined chain
        token: String,
        /// Take 3/4-letter codes at face value, skipping fuzzy matching
        #[arg(short, long)]
        advanced: bool,
    },

    /// Set a record's status directly
    Status {
        id: String,
        /// untranslated, missing, inprogress, doublecheck, or translated
        status: String,
        /// Language code, for defined multiple posts
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Mark a record in progress
    Claim {
        id: String,
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Mark a record translated
    Translate {
        id: String,
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Mark a record as needing review
    Review {
        id: String,
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Mark a record as missing assets
    Missing {
        id: String,
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Rebuild a record from its original title
    Reset { id: String },

    /// Turn a record into a defined multiple
    Multiple {
        id: String,
        /// `+`-joined language list, e.g. `german+french`
        languages: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let registry = Registry::new();

    match cli.command {
        Commands::Classify { title, format } => {
            let classifier = Classifier::new(&registry);
            let classification = classifier.classify(&title)?;
            match format {
                Some(format) => println!("{}", format.serialize(&classification)?),
                None => report::print_classification(&title, &classification),
            }
        }

        Commands::Batch { file, jsonl } => {
            run_batch(&registry, &file, jsonl)?;
        }

        Commands::Filter {
            title,
            reformat,
            format,
        } => {
            let verdict = check_title(&registry, &title);
            match format {
                Some(format) => println!("{}", format.serialize(&verdict)?),
                None => report::print_verdict(&title, &verdict),
            }
            if !verdict.is_accepted() {
                if reformat {
                    println!("suggested: {}", bad_title_reformat(&registry, &title));
                }
                return Ok(ExitCode::from(1));
            }
        }

        Commands::State { store, action } => {
            let store = RecordStore::new(&store);
            run_state(&registry, &store, action)?;
        }

        Commands::Lookup {
            token,
            country: want_country,
        } => {
            if want_country {
                let (code, name) = country(&registry, &token);
                report::print_country(&token, &code, &name);
            } else {
                let result = convert(&registry, &token);
                report::print_conversion(&token, &result);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_batch(registry: &Registry, file: &PathBuf, jsonl: bool) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("could not read title file {}", file.display()))?;
    let titles: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let classifier = Classifier::new(registry);
    let results: Vec<_> = titles
        .par_iter()
        .map(|title| (*title, classifier.classify(title)))
        .collect();

    if jsonl {
        for (title, result) in &results {
            match result {
                Ok(classification) => println!(
                    "{}",
                    serde_json::json!({ "title": title, "classification": classification })
                ),
                Err(err) => eprintln!("skipping {title:?}: {err}"),
            }
        }
        return Ok(());
    }

    let mut by_code: BTreeMap<String, usize> = BTreeMap::new();
    let mut failures = 0usize;
    for (title, result) in &results {
        match result {
            Ok(classification) => {
                *by_code.entry(classification.final_code.clone()).or_insert(0) += 1;
            }
            Err(err) => {
                failures += 1;
                eprintln!("skipping {title:?}: {err}");
            }
        }
    }

    println!("Classified {} titles", results.len() - failures);
    for (code, count) in &by_code {
        println!("  {code}: {count}");
    }
    if failures > 0 {
        println!("Failed: {failures}");
    }
    Ok(())
}

fn run_state(registry: &Registry, store: &RecordStore, action: StateAction) -> Result<()> {
    match action {
        StateAction::New { id, title, author } => {
            let classifier = Classifier::new(registry);
            let classification = classifier.classify(&title)?;
            let record = PostRecord::new(
                registry,
                &id,
                &author,
                Utc::now().timestamp(),
                &title,
                &classification,
            );
            let path = store.save(&record)?;
            let flair = state::render(registry, &record);
            println!("{}: {} ({})", record.id, flair.text, flair.category);
            println!("stored at {}", path.display());
        }

        StateAction::Show { id, format } => {
            let record = store.load(&id)?;
            match format {
                Some(format) => println!("{}", format.serialize(&record)?),
                None => report::print_record(registry, &record),
            }
        }

        StateAction::List => {
            for id in store.list()? {
                println!("{id}");
            }
        }

        StateAction::Identify {
            id,
            token,
            advanced,
        } => {
            let mut record = store.load(&id)?;
            record.identify(registry, &token, advanced)?;
            store.save(&record)?;
            print_flair(registry, &record);
        }

        StateAction::Status {
            id,
            status,
            language,
        } => {
            let status = Status::from_label(&status).ok_or_else(|| {
                anyhow!(
                    "`{status}` is not a status; try untranslated, missing, \
                     inprogress, doublecheck, or translated"
                )
            })?;
            change_status(registry, store, &id, language.as_deref(), status)?;
        }

        StateAction::Claim { id, language } => {
            change_status(registry, store, &id, language.as_deref(), Status::InProgress)?;
        }

        StateAction::Translate { id, language } => {
            change_status(registry, store, &id, language.as_deref(), Status::Translated)?;
        }

        StateAction::Review { id, language } => {
            change_status(registry, store, &id, language.as_deref(), Status::DoubleCheck)?;
        }

        StateAction::Missing { id, language } => {
            change_status(registry, store, &id, language.as_deref(), Status::MissingAssets)?;
        }

        StateAction::Reset { id } => {
            let mut record = store.load(&id)?;
            record.reset(registry)?;
            store.save(&record)?;
            print_flair(registry, &record);
        }

        StateAction::Multiple { id, languages } => {
            let mut record = store.load(&id)?;
            record.set_defined_multiple(registry, &languages)?;
            store.save(&record)?;
            print_flair(registry, &record);
        }
    }
    Ok(())
}

fn change_status(
    registry: &Registry,
    store: &RecordStore,
    id: &str,
    language: Option<&str>,
    status: Status,
) -> Result<()> {
    let mut record = store.load(id)?;
    match language {
        Some(code) => record.set_status_multiple(&code.to_lowercase(), status),
        None => record.set_status(status),
    }
    let elapsed = Utc::now().timestamp() - record.created_utc;
    record.set_time(status, elapsed.max(0));
    store.save(&record)?;
    print_flair(registry, &record);
    Ok(())
}

fn print_flair(registry: &Registry, record: &PostRecord) {
    let flair = state::render(registry, record);
    println!("{}: {} ({})", record.id, flair.text, flair.category);
}
