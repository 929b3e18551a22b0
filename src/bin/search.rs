// Rescue Search CLI Tool
// Command-line interface for searching pet rescue post titles

use clap::Parser;
use rescue_search::highlight::mark;
use rescue_search::{logging, DataLoader, RescueSearch, SearchConfig, SearchSession, Suggestion};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Rescue Search Tool - typo-tolerant search over post titles
#[derive(Parser, Debug)]
#[command(name = "rescue-search")]
#[command(about = "Search pet rescue post titles with typo tolerance and highlighting", long_about = None)]
#[command(version)]
struct Args {
    /// Search query (omit with --interactive or --stats)
    #[arg(value_name = "QUERY")]
    query: Option<String>,

    /// Maximum number of results to display
    #[arg(short, long, default_value = "10")]
    limit: usize,

    /// Match threshold in [0, 1] (overrides the config file)
    #[arg(short, long)]
    threshold: Option<f64>,

    /// JSON config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON corpus file (defaults to the embedded post list)
    #[arg(long, value_name = "FILE")]
    corpus: Option<PathBuf>,

    /// Show match scores
    #[arg(short, long)]
    scores: bool,

    /// Read queries from stdin, one keystroke batch per line
    #[arg(short, long)]
    interactive: bool,

    /// Print corpus statistics
    #[arg(long)]
    stats: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = match &args.config {
        Some(path) => SearchConfig::from_path(path)?,
        None => SearchConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config = config.with_threshold(threshold);
    }

    let items = match &args.corpus {
        Some(path) => DataLoader::from_path(path)?,
        None => DataLoader::default_corpus()?,
    };

    let search = RescueSearch::new(items, config)?;

    if args.stats {
        let stats = search.stats();
        println!("Items: {}", stats.items);
        println!("Words: {}", stats.words);
        println!("Longest title: {} chars", stats.longest_title);
    }

    if args.interactive {
        return run_interactive(&search, &args);
    }

    let Some(query) = args.query.as_deref() else {
        if args.stats {
            return Ok(());
        }
        return Err("a QUERY is required unless --interactive or --stats is given".into());
    };

    let mut suggestions = search.suggestions(query);
    suggestions.truncate(args.limit);

    if suggestions.is_empty() {
        println!("No matches found.");
        return Ok(());
    }

    println!("Found {} matches:\n", suggestions.len());
    print_suggestions(&suggestions, args.scores);

    Ok(())
}

/// Outcome of one interactive input line
#[derive(Debug, PartialEq)]
enum LineOutcome {
    /// Keep reading, optionally printing a status message
    Continue(Option<String>),
    Quit,
}

/// Apply one interactive input line to the session
///
/// Each line replaces the field text. An empty line clears it, `:submit`
/// submits, `:pick N` selects the Nth suggestion and `:quit` exits. A
/// leading `\` is dropped and the rest is taken as text, so `\:submit`
/// searches for ":submit".
fn handle_line(session: &mut SearchSession<'_>, line: &str) -> LineOutcome {
    let line = line.trim_end();
    if let Some(text) = line.strip_prefix('\\') {
        session.on_change_text(text);
        return LineOutcome::Continue(None);
    }

    let message = match line {
        ":quit" => return LineOutcome::Quit,
        "" => {
            session.on_clear();
            None
        }
        ":submit" => Some(match session.on_submit() {
            Some(query) => format!("Submitted: {}", query),
            None => "Nothing to submit.".to_string(),
        }),
        cmd if cmd.starts_with(":pick ") => {
            let picked = cmd[":pick ".len()..]
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| session.recommendations().get(i))
                .map(|s| s.title.clone());
            Some(match picked {
                Some(title) => format!("Selected: {}", session.on_suggestion_press(&title)),
                None => "No such suggestion.".to_string(),
            })
        }
        text => {
            session.on_change_text(text);
            None
        }
    };

    LineOutcome::Continue(message)
}

/// Drive a search session from stdin
fn run_interactive(search: &RescueSearch, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = SearchSession::new(search);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    prompt(&mut stdout, &session)?;
    for line in stdin.lock().lines() {
        let line = line?;
        match handle_line(&mut session, &line) {
            LineOutcome::Quit => break,
            LineOutcome::Continue(Some(message)) => println!("{}", message),
            LineOutcome::Continue(None) => {}
        }

        if session.show_recommendations() {
            let shown = session.recommendations().len().min(args.limit);
            print_suggestions(&session.recommendations()[..shown], args.scores);
        }
        prompt(&mut stdout, &session)?;
    }

    Ok(())
}

fn prompt(stdout: &mut io::Stdout, session: &SearchSession<'_>) -> io::Result<()> {
    write!(stdout, "[{}] {}> ", session.phase(), session.query())?;
    stdout.flush()
}

fn print_suggestions(suggestions: &[Suggestion], scores: bool) {
    for (idx, suggestion) in suggestions.iter().enumerate() {
        println!(
            "{}. {:<6} {}",
            idx + 1,
            suggestion.id,
            mark(&suggestion.segments, "[", "]")
        );

        if scores {
            println!(
                "      Score: {:.3} {}",
                suggestion.score,
                score_bar(suggestion.score)
            );
        }
    }
}

/// Generate a visual relevance bar (full for a perfect match)
fn score_bar(score: f64) -> String {
    let bar_len = 10;
    let filled = ((1.0 - score.clamp(0.0, 1.0)) * bar_len as f64) as usize;
    let mut bar = String::from("[");
    for i in 0..bar_len {
        if i < filled {
            bar.push('█');
        } else {
            bar.push('░');
        }
    }
    bar.push(']');
    bar
}
