use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use weight_profile::catalog::{self, Category, Question};
use weight_profile::config::OutputFormat;
use weight_profile::output;
use weight_profile::quiz::{self, QuizOutcome, QuizSession};
use weight_profile::scoring::{calculate_profile, Profile};
use weight_profile::telemetry;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_ABORTED: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score an answers file (JSON or YAML) and print the profile
    Score {
        /// Answers keyed by question id, e.g. {"1": 3, "29": ["tiroides"]}
        answers: PathBuf,

        /// Output format (defaults to the config, then table)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Also write the profile as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Take the quiz in the terminal, one question at a time
    Take {
        /// Save the answers to this file when the quiz ends
        #[arg(long)]
        save: Option<PathBuf>,

        /// Continue from a previously saved answers file
        #[arg(long)]
        resume: Option<PathBuf>,

        /// Output format (defaults to the config, then table)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List the questions in the catalog
    Questions {
        /// Only show questions of this category tag (e.g. sueno)
        #[arg(long)]
        category: Option<Category>,
    },
    /// Validate a catalog file (defaults to the configured catalog)
    Validate {
        /// Catalog file to check
        path: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "weight-profile")]
#[command(about = "Weight-loss diagnosis quiz scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/weight-profile/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Question catalog file (overrides the config; defaults to the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn render_profile(profile: &Profile, format: OutputFormat, use_colors: bool) -> String {
    match format {
        OutputFormat::Table => output::format_profile(profile, use_colors),
        OutputFormat::Tsv => output::format_tsv(profile),
        OutputFormat::Json => serde_json::to_string_pretty(profile)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
    }
}

fn load_questions(path: Option<&PathBuf>) -> Vec<Question> {
    match catalog::resolve_catalog(path.map(|p| p.as_path())) {
        Ok(questions) => questions,
        Err(e) => {
            eprintln!("Catalog error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let config = match weight_profile::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let filter = telemetry::log_filter(cli.verbose, config.log_level.as_deref());
    if let Err(e) = telemetry::init(&filter) {
        eprintln!("Logging error: {:#}", e);
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = config.colors.unwrap_or_else(output::should_use_colors);
    let catalog_path = cli.catalog.or(config.catalog.clone());
    let default_format = config.format.unwrap_or_default();

    match cli.command {
        Commands::Validate { path } => {
            let target = path.or(catalog_path);
            let questions = load_questions(target.as_ref());
            let source = target
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in catalog".to_string());
            println!("{}: {} questions, catalog is valid", source, questions.len());
        }
        Commands::Questions { category } => {
            let questions = load_questions(catalog_path.as_ref());
            let selected: Vec<Question> = questions
                .into_iter()
                .filter(|q| category.map_or(true, |c| q.category == c))
                .collect();
            println!("{}", output::format_question_list(&selected, use_colors));
        }
        Commands::Score {
            answers,
            format,
            output: output_path,
        } => {
            let questions = load_questions(catalog_path.as_ref());

            let answer_set = match quiz::load_answers(&answers) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Answers error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let start_time = Instant::now();
            let profile = calculate_profile(&questions, &answer_set);
            tracing::info!(
                answers = answer_set.len(),
                categories = profile.scores.len(),
                overall = %profile.overall_risk_level,
                elapsed = ?start_time.elapsed(),
                "scored answers"
            );
            if profile.is_empty() && !answer_set.is_empty() {
                tracing::warn!("none of the answers matched the catalog");
            }

            println!(
                "{}",
                render_profile(&profile, format.unwrap_or(default_format), use_colors)
            );

            if let Some(path) = output_path {
                if let Err(e) = quiz::write_json(&path, &profile) {
                    eprintln!("Failed to write profile: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            }
        }
        Commands::Take {
            save,
            resume,
            format,
        } => {
            let questions = load_questions(catalog_path.as_ref());

            let mut session = match resume {
                Some(ref path) => match quiz::load_answers(path) {
                    Ok(previous) => QuizSession::resume(&questions, previous),
                    Err(e) => {
                        eprintln!("Answers error: {:#}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
                None => QuizSession::new(&questions),
            };

            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut stdout = io::stdout();
            let outcome = match quiz::run_interactive(&mut session, &mut input, &mut stdout) {
                Ok(o) => o,
                Err(e) => {
                    eprintln!("Quiz error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            // Partial answers are saved too so the quiz can be resumed
            if let Some(ref path) = save {
                if let Err(e) = quiz::save_answers(path, session.answers()) {
                    eprintln!("{:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
                tracing::info!(path = %path.display(), "saved answers");
            }

            if outcome == QuizOutcome::Aborted {
                eprintln!(
                    "Quiz stopped with {} of {} questions answered.",
                    session.answered(),
                    session.total()
                );
                std::process::exit(EXIT_ABORTED);
            }

            let (_, profile) = session.finish();
            println!();
            println!(
                "{}",
                render_profile(&profile, format.unwrap_or(default_format), use_colors)
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
