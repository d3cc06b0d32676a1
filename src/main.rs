//! Word Sleuth CLI
//!
//! Runs the solver against a known secret, across the whole dictionary, or
//! alongside a human playing the real puzzle.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use log::info;
use word_sleuth::oracle::DEFAULT_SUGGESTIONS;
use word_sleuth::vocab::{words_of_length, VocabSource};
use word_sleuth::{
    Feedback, FeedbackMode, Interactive, SolveObserver, Solver, SolverOptions, VocabLoader,
    WORD_LENGTH,
};

const USAGE_TEXT: &str = "\
Usage: word-sleuth [COMMAND] [OPTIONS]

Commands:
  play            Suggest guesses while you play the real puzzle (default)
  solve <word>    Show how the solver finds <word>
  bench           Solve every dictionary word and print the distribution
  help            Show this message

Options:
  --dict <path>   Read candidate words from <path> instead of the built-in list
                  (also WORD_SLEUTH_DICT)
  --budgeted      Score repeated letters the way the newspaper game does
  --top <n>       Number of suggestions shown per round in play (default 10)";

const DICT_ENV: &str = "WORD_SLEUTH_DICT";

/// Prints each round of a scripted solve.
struct PrintRounds {
    round: usize,
}

impl SolveObserver for PrintRounds {
    fn on_guess(&mut self, guess: &str, feedback: &Feedback, remaining: usize) {
        self.round += 1;
        println!(
            "Guess {}: {} → {}  ({} left)",
            self.round,
            guess.to_uppercase(),
            feedback.to_emoji_string(),
            remaining
        );
    }
}

struct Args {
    command: String,
    operand: Option<String>,
    dict: Option<PathBuf>,
    mode: FeedbackMode,
    suggestions: usize,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        command: "play".to_string(),
        operand: None,
        dict: std::env::var_os(DICT_ENV).map(PathBuf::from),
        mode: FeedbackMode::Presence,
        suggestions: DEFAULT_SUGGESTIONS,
    };

    let mut positional = Vec::new();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dict" => {
                let path = iter.next().context("--dict needs a path")?;
                args.dict = Some(PathBuf::from(path));
            }
            "--budgeted" => args.mode = FeedbackMode::Budgeted,
            "--top" => {
                let n = iter.next().context("--top needs a number")?;
                args.suggestions = n
                    .parse()
                    .with_context(|| format!("--top expects a number, got {:?}", n))?;
                if args.suggestions == 0 {
                    bail!("--top must be at least 1");
                }
            }
            "--help" | "-h" => positional.insert(0, "help".to_string()),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    if let Some(command) = positional.next() {
        args.command = command;
    }
    args.operand = positional.next();
    Ok(args)
}

fn load_words(args: &Args) -> Result<Vec<String>> {
    let mut loader = VocabLoader::default();
    let name = match &args.dict {
        Some(path) => {
            loader.register("file", VocabSource::File(path.clone()));
            "file"
        }
        None => VocabLoader::EMBEDDED,
    };
    let words = loader
        .load(name)
        .with_context(|| format!("could not load vocabulary {:?}", name))?;
    let words = words_of_length(&words, WORD_LENGTH);
    if words.is_empty() {
        bail!("vocabulary has no {}-letter words", WORD_LENGTH);
    }
    info!("Using {} candidate words", words.len());
    Ok(words)
}

fn run_solve(solver: &Solver, target: &str) -> Result<()> {
    if target.len() != WORD_LENGTH {
        bail!("Word must be {} letters.", WORD_LENGTH);
    }

    println!("Solving for: {}", target.to_uppercase());
    println!();

    let mut game = word_sleuth::Game::with_mode(target, solver.options().mode);
    let mut rounds = PrintRounds { round: 0 };
    let path = solver
        .solve_with_observer(&mut game, &mut rounds)
        .with_context(|| format!("failed to solve {:?}", target))?;

    println!();
    println!("Solved in {} guesses.", path.len());
    Ok(())
}

fn run_bench(solver: &Solver) {
    println!("Solving all {} words...", solver.words().len());
    let start = Instant::now();
    let distribution = solver.guess_distribution();
    println!("{}", distribution);
    println!("took {:.2?}", start.elapsed());
}

fn run_play(solver: &Solver, suggestions: usize) -> Result<()> {
    println!("Loaded {} words.", solver.words().len());
    println!();

    let stdin = io::stdin();
    let mut oracle = Interactive::new(stdin.lock(), io::stdout())
        .with_suggestions(suggestions);
    let path = solver.solve(&mut oracle).context("interactive session ended")?;

    println!();
    println!(
        "🎉 Solved with {} in {} guesses!",
        path.last().map(|w| w.to_uppercase()).unwrap_or_default(),
        path.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or(());

    let args = parse_args()?;
    if args.command == "help" {
        println!("{}", USAGE_TEXT);
        return Ok(());
    }

    let words = load_words(&args)?;
    let solver = Solver::with_options(words, SolverOptions::default().with_mode(args.mode));

    match args.command.as_str() {
        "play" => run_play(&solver, args.suggestions),
        "solve" => {
            let target = args
                .operand
                .as_deref()
                .context("Usage: word-sleuth solve <word>")?
                .to_lowercase();
            run_solve(&solver, &target)
        }
        "bench" | "benchmark" => {
            run_bench(&solver);
            Ok(())
        }
        other => {
            eprintln!("{}", USAGE_TEXT);
            bail!("Unknown command: {}", other)
        }
    }
}
