use std::path::PathBuf;

use anyhow::Context;
use clap::{arg, command, value_parser, Arg, ArgAction};
use detfa::{load_automaton, Classification};
use owo_colors::OwoColorize;
use tracing::{debug, info, Level};

fn main() -> anyhow::Result<()> {
    let matches = command!()
        .arg(
            arg!(<FILE> "path to the textual automaton description")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(arg!([WORDS]... "words to classify against the automaton"))
        .arg(
            Arg::new("determinize")
                .short('d')
                .long("determinize")
                .help("Apply the subset construction and print the resulting automaton")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::TRACE
    } else {
        Level::INFO
    };
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Unable to set global tracing subscriber");

    let path = matches
        .get_one::<PathBuf>("FILE")
        .expect("FILE is required");
    let words: Vec<String> = matches
        .get_many::<String>("WORDS")
        .map(|words| words.cloned().collect())
        .unwrap_or_default();

    let mut automaton = load_automaton(path)
        .with_context(|| format!("could not load the automaton from {}", path.display()))?;
    debug!(
        "loaded automaton with {} states over alphabet {:?}",
        automaton.size(),
        automaton.alphabet()
    );

    if matches.get_flag("determinize") {
        automaton = automaton.determinize();
        info!("determinized automaton has {} states", automaton.size());
        print!("{automaton}");
    }

    if words.is_empty() {
        return Ok(());
    }

    let results = automaton
        .evaluate(&words)
        .context("pass --determinize to evaluate against a non-deterministic automaton")?;
    for word in &words {
        let classification = results[word];
        let rendered = match classification {
            Classification::Accepted => classification.green().to_string(),
            Classification::Rejected => classification.red().to_string(),
            Classification::Invalid => classification.yellow().to_string(),
        };
        println!("{word} {rendered}");
    }
    Ok(())
}
