use std::io::Cursor;

use word_sleuth::{
    load_dictionary, Answer, Feedback, FeedbackMode, Game, Interactive, Oracle, SolveError,
    SolveObserver, Solver, SolverOptions,
};

fn get_test_words() -> Vec<String> {
    vec![
        "crane".to_string(),
        "slate".to_string(),
        "trace".to_string(),
        "crate".to_string(),
        "raise".to_string(),
        "arise".to_string(),
        "stare".to_string(),
        "roast".to_string(),
        "toast".to_string(),
        "beast".to_string(),
    ]
}

/// Remembers every round reported by the solver.
#[derive(Default)]
struct Recorder {
    rounds: Vec<(String, Feedback, usize)>,
}

impl SolveObserver for Recorder {
    fn on_guess(&mut self, guess: &str, feedback: &Feedback, remaining: usize) {
        self.rounds.push((guess.to_string(), feedback.clone(), remaining));
    }
}

/// An oracle that never wants a proposal.
struct Mute;

impl Oracle for Mute {
    fn proposal_size(&self) -> usize {
        0
    }

    fn ask(&mut self, _proposals: &[String]) -> Result<Answer, SolveError> {
        unreachable!("solver must not ask an oracle without proposals")
    }

    fn is_win(&self, _feedback: &Feedback) -> bool {
        false
    }
}

/// Plays the last of its proposals and records how many it was handed.
struct Counting {
    game: Game,
    seen: Vec<usize>,
}

impl Oracle for Counting {
    fn proposal_size(&self) -> usize {
        3
    }

    fn ask(&mut self, proposals: &[String]) -> Result<Answer, SolveError> {
        self.seen.push(proposals.len());
        let guess = proposals.last().cloned().unwrap_or_default();
        let feedback = self.game.ask(&guess)?;
        Ok(Answer { guess, feedback })
    }

    fn is_win(&self, feedback: &Feedback) -> bool {
        self.game.is_win(feedback)
    }
}

#[test]
fn test_solver_creation() {
    let words = get_test_words();
    let solver = Solver::new(words.clone());
    assert_eq!(solver.words(), words.as_slice());
    assert_eq!(solver.options(), SolverOptions::default());
    assert_eq!(solver.options().mode, FeedbackMode::Presence);
}

#[test]
fn test_solve_for_target() {
    let solver = Solver::new(get_test_words());
    let path = solver.solve_for_secret("crate").unwrap();
    assert_eq!(path, vec!["stare", "trace", "crate"]);
}

#[test]
fn test_solve_counts_guesses() {
    let solver = Solver::new(get_test_words());
    let mut game = Game::new("arise");
    let path = solver.solve(&mut game).unwrap();
    assert_eq!(path.last().map(String::as_str), Some("arise"));
    assert_eq!(game.num_guesses(), path.len());
}

#[test]
fn test_solve_various_targets() {
    let words = get_test_words();
    let solver = Solver::new(words.clone());

    for target in &words {
        let path = solver.solve_for_secret(target).unwrap();
        assert!(!path.is_empty(), "Failed to solve for target: {}", target);
        assert!(path.len() <= 3, "Too many guesses for target: {}", target);
        assert_eq!(path.last(), Some(target), "Final guess doesn't match target: {}", target);
    }
}

#[test]
fn test_singleton_vocabulary() {
    let solver = Solver::new(vec!["crane".to_string()]);
    let mut game = Game::new("crane");
    let path = solver.solve(&mut game).unwrap();
    assert_eq!(path, vec!["crane"]);
    assert_eq!(game.num_guesses(), 1);
}

#[test]
fn test_empty_vocabulary() {
    let solver = Solver::new(Vec::<String>::new());
    let mut game = Game::new("crane");
    let result = solver.solve(&mut game);
    assert!(matches!(result, Err(SolveError::Exhausted { guesses: 0 })));
    assert_eq!(game.num_guesses(), 0);
}

#[test]
fn test_secret_outside_vocabulary() {
    let solver = Solver::new(get_test_words());
    let result = solver.solve_for_secret("fuzzy");
    assert!(matches!(result, Err(SolveError::Exhausted { guesses }) if guesses > 0));
}

#[test]
fn test_unrecognized_oracle() {
    let solver = Solver::new(get_test_words());
    assert!(matches!(
        solver.solve(&mut Mute),
        Err(SolveError::UnrecognizedOracle)
    ));
}

#[test]
fn test_oracle_gets_proposal_size() {
    let solver = Solver::new(get_test_words());
    let mut oracle = Counting {
        game: Game::new("crane"),
        seen: Vec::new(),
    };
    let path = solver.solve(&mut oracle).unwrap();
    assert_eq!(path.last().map(String::as_str), Some("crane"));
    assert_eq!(oracle.seen[0], 3);
    assert!(oracle.seen.iter().all(|&n| (1..=3).contains(&n)));
}

#[test]
fn test_observer_sees_shrinking_candidates() {
    let solver = Solver::new(load_dictionary());
    let mut game = Game::new("crows");
    let mut recorder = Recorder::default();
    let path = solver.solve_with_observer(&mut game, &mut recorder).unwrap();

    assert_eq!(path, vec!["stare", "crisp", "crows"]);
    assert_eq!(recorder.rounds.len(), path.len());
    let remaining: Vec<usize> = recorder.rounds.iter().map(|(_, _, r)| *r).collect();
    assert!(remaining.windows(2).all(|w| w[0] >= w[1]));
    assert!(recorder.rounds.last().unwrap().1.is_win());
}

#[test]
fn test_with_full_dictionary() {
    let solver = Solver::new(load_dictionary());
    let mut game = Game::new("hello");
    let path = solver.solve(&mut game).unwrap();
    assert_eq!(path.last().map(String::as_str), Some("hello"));
    assert!(game.num_guesses() < 10);
}

#[test]
fn test_budgeted_mode_solves() {
    let options = SolverOptions::default().with_mode(FeedbackMode::Budgeted);
    let solver = Solver::with_options(load_dictionary(), options);
    for target in ["hello", "geese", "fuzzy", "creep"] {
        if !solver.words().iter().any(|w| w == target) {
            continue;
        }
        let path = solver.solve_for_secret(target).unwrap();
        assert_eq!(path.last().map(String::as_str), Some(target));
    }
}

#[test]
fn test_interactive_session() {
    // The operator ignores the first suggestion and plays "crane" against
    // the secret "crate", then wins with "crate".
    let script = "crane\neeene\ncrate\neeeee\n";
    let mut oracle = Interactive::new(Cursor::new(script), Vec::new());
    let solver = Solver::new(get_test_words());
    let path = solver.solve(&mut oracle).unwrap();
    assert_eq!(path, vec!["crane", "crate"]);

    let output = String::from_utf8(oracle.into_output()).unwrap();
    assert!(output.contains(" * stare"));
    assert!(output.contains(" * crate"));
}

#[test]
fn test_interactive_contradiction_exhausts() {
    // Feedback claiming every letter of "stare" is absent leaves nothing.
    let script = "stare\nnnnnn\n";
    let mut oracle = Interactive::new(Cursor::new(script), Vec::new());
    let solver = Solver::new(get_test_words());
    assert!(matches!(
        solver.solve(&mut oracle),
        Err(SolveError::Exhausted { guesses: 1 })
    ));
}

#[test]
fn test_guess_distribution() {
    let solver = Solver::new(get_test_words());
    let distribution = solver.guess_distribution();
    assert_eq!(distribution.failures, 0);
    assert_eq!(distribution.counts, vec![(1, 1), (2, 7), (3, 2)]);
    assert_eq!(distribution.solved(), 10);
    assert_eq!(distribution.max_guesses(), 3);
    assert!((distribution.average().unwrap() - 2.1).abs() < 1e-9);

    let report = distribution.to_string();
    assert!(report.contains("solved 10 at 2.100 guesses each"));
    assert!(!report.contains("failed"));
}

#[test]
fn test_empty_distribution() {
    let solver = Solver::new(Vec::<String>::new());
    let distribution = solver.guess_distribution();
    assert_eq!(distribution.solved(), 0);
    assert_eq!(distribution.average(), None);
    assert_eq!(distribution.max_guesses(), 0);
    assert!(distribution.to_string().contains("solved nothing"));
}

#[test]
fn test_mode_mismatch_fails_fast() {
    let words: Vec<String> = ["geese", "gusts", "creep"].iter().map(|s| s.to_string()).collect();
    let options = SolverOptions::default().with_mode(FeedbackMode::Budgeted);
    let solver = Solver::with_options(words, options);

    let mut game = Game::new("creep");
    assert!(matches!(
        solver.solve(&mut game),
        Err(SolveError::ModeMismatch {
            solver: FeedbackMode::Budgeted,
            oracle: FeedbackMode::Presence,
        })
    ));
    assert_eq!(game.num_guesses(), 0);

    let mut game = Game::with_mode("creep", FeedbackMode::Budgeted);
    let path = solver.solve(&mut game).unwrap();
    assert_eq!(path.last().map(String::as_str), Some("creep"));
}

#[test]
fn test_interactive_uses_solver_mode() {
    // A human relays budgeted feedback: the surplus 'e' in "geese" is No.
    let words: Vec<String> = ["geese", "gusts", "creep"].iter().map(|s| s.to_string()).collect();
    let options = SolverOptions::default().with_mode(FeedbackMode::Budgeted);
    let solver = Solver::with_options(words, options);

    let script = "geese\nnpenn\ncreep\neeeee\n";
    let mut oracle = Interactive::new(Cursor::new(script), Vec::new());
    let path = solver.solve(&mut oracle).unwrap();
    assert_eq!(path, vec!["geese", "creep"]);
}

#[test]
fn test_interactive_skips_non_ascii_guess() {
    let script = "stäre\nslate\neeeee\n";
    let mut oracle = Interactive::new(Cursor::new(script), Vec::new());
    let solver = Solver::new(get_test_words());
    let path = solver.solve(&mut oracle).unwrap();
    assert_eq!(path, vec!["slate"]);
}

#[test]
fn test_solve_all_full_dictionary() {
    let solver = Solver::new(load_dictionary());
    let results = solver.solve_all();
    assert_eq!(results.len(), solver.words().len());
    for (secret, result) in &results {
        let path = result.as_ref().unwrap();
        assert_eq!(path.last(), Some(secret));
        assert!(path.len() < 10, "{} took {} guesses", secret, path.len());
    }
}
