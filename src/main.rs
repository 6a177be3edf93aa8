//! PosGame - Sentence generation and ground-truth tagging
//!
//! Command-line entry point: generates practice sentences with their answer
//! keys, shows the part-of-speech reference, and checks the generator service.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::{non_blocking, rolling};

use posgame::answer_key::AnswerKey;
use posgame::cli::{Args, Commands};
use posgame::config::Config;
use posgame::engine::ContentEngine;
use posgame::generator::check_generator_availability;
use posgame::language::Language;
use posgame::pos::{catalog, PosVocabulary};
use posgame::source::SentenceRequest;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Setup logging to both console and file
    setup_logging(args.verbose)?;

    // Load configuration
    let config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            if std::path::Path::new("posgame.toml").exists() {
                info!("Found posgame.toml in current directory, loading...");
                Config::from_file("posgame.toml")?
            } else {
                Config::default()
            }
        }
    };

    match args.command {
        Commands::Generate {
            language,
            difficulty,
            count,
            offline,
            json,
        } => {
            let mut config = config;
            if offline {
                config.generator.enabled = false;
            }

            let engine = ContentEngine::from_config(config)?;
            engine.start_session();

            let mut request = SentenceRequest::new(language);
            if let Some(difficulty) = difficulty {
                request = request.with_difficulty(difficulty);
            }

            let mut keys = Vec::with_capacity(count);
            for _ in 0..count.max(1) {
                keys.push(engine.generate(request).await);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&keys)?);
            } else {
                for key in &keys {
                    print_answer_key(key);
                }
            }
        }
        Commands::Vocabulary { language } => {
            print_vocabulary(language);
        }
        Commands::Check => {
            info!(
                "Checking generator {} at {}",
                config.generator.model, config.generator.endpoint
            );
            check_generator_availability(&config.generator.endpoint, &config.generator.model).await?;
            println!(
                "Generator available: {} ({})",
                config.generator.model, config.generator.endpoint
            );
        }
        Commands::InitConfig { path } => {
            Config::default().save_to_file(&path)?;
            println!("Wrote default configuration to {}", path.display());
        }
    }

    Ok(())
}

fn print_answer_key(key: &AnswerKey) {
    println!("\n{}", key.sentence);
    println!(
        "Difficulty: {}  Source: {}  Id: {}",
        key.difficulty, key.provenance, key.id
    );
    if let Some((requested, actual)) = key.difficulty_mismatch() {
        println!("Note: requested {} but this sentence is {}", requested, actual);
    }

    println!("{:<6} {:<24} {:<14} {:<20}", "Index", "Word", "Tag", "Label");
    println!("{}", "-".repeat(66));
    for entry in &key.words {
        println!(
            "{:<6} {:<24} {:<14} {:<20}",
            entry.record.index, entry.record.word, entry.record.pos.as_str(), entry.display_name
        );
    }
}

fn print_vocabulary(language: Language) {
    let vocabulary = PosVocabulary::for_language(language);
    println!("\nPart-of-speech labels ({}):", language.name());
    println!("{:<14} {:<30}", "Tag", "Label");
    println!("{}", "-".repeat(44));
    for (pos, label) in &vocabulary.entries {
        println!("{:<14} {:<30}", pos.as_str(), label);
    }

    for entry in catalog(language) {
        println!("\n{} - {}", entry.pos, vocabulary.display_name(entry.pos));
        println!("  {}", entry.description);
        println!("  Examples: {}", entry.examples);
        println!("  Sentence: {}", entry.example_sentence);
    }
}

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = std::env::current_dir()?.join(".posgame").join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Daily rotating file appender
    let file_appender = rolling::daily(&log_dir, "posgame.log");
    let (non_blocking_file, guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(guard);

    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    // Console output goes to stderr so JSON on stdout stays clean
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(verbose)
        .with_line_number(verbose);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
