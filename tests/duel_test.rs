//! Concurrency tests: two real threads against one shared game.

use std::collections::HashSet;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use gridlock::{
    Actor, Cell, GameState, Outcome, Player, Sequential, SilentRender, Stochastic, Strategy,
};

/// Replays a fixed list of cells, then repeats a fallback cell.
struct Scripted {
    cells: Vec<Cell>,
    next: usize,
    fallback: Cell,
}

impl Scripted {
    fn new(cells: &[(u8, u8)], fallback: (u8, u8)) -> Self {
        Self {
            cells: cells.iter().map(|(r, c)| Cell::new(*r, *c)).collect(),
            next: 0,
            fallback: Cell::new(fallback.0, fallback.1),
        }
    }
}

impl Strategy for Scripted {
    fn next_candidate(&mut self) -> Cell {
        match self.cells.get(self.next) {
            Some(cell) => {
                self.next += 1;
                *cell
            }
            None => self.fallback,
        }
    }
}

fn spawn_actor(
    game: &Arc<GameState>,
    player: Player,
    strategy: Box<dyn Strategy>,
) -> thread::JoinHandle<()> {
    let game = Arc::clone(game);
    thread::spawn(move || Actor::new(game, player, strategy, Duration::from_millis(1)).run())
}

#[test]
fn test_sequential_x_wins_row_zero_when_o_stays_away() {
    // X scans row-major; O only ever touches rows 1 and 2. Turn
    // alternation forces the acceptance order, so X's first three
    // accepted moves fill row 0 and win on the third placement.
    let game = Arc::new(GameState::new(Box::new(SilentRender)));
    let x = spawn_actor(&game, Player::X, Box::new(Sequential::new()));
    let o = spawn_actor(
        &game,
        Player::O,
        Box::new(Scripted::new(&[(1, 0), (1, 1)], (2, 0))),
    );
    x.join().unwrap();
    o.join().unwrap();

    assert_eq!(game.outcome(), Outcome::Won(Player::X));

    let moves = game.moves();
    assert_eq!(moves.len(), 5);
    let x_cells: Vec<_> = moves
        .iter()
        .filter(|m| m.player == Player::X)
        .map(|m| (m.cell.row(), m.cell.col()))
        .collect();
    assert_eq!(x_cells, [(0, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_scripted_duel_ends_in_draw() {
    let game = Arc::new(GameState::new(Box::new(SilentRender)));
    let x = spawn_actor(
        &game,
        Player::X,
        Box::new(Scripted::new(&[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)], (0, 0))),
    );
    let o = spawn_actor(
        &game,
        Player::O,
        Box::new(Scripted::new(&[(1, 1), (0, 1), (1, 2), (2, 0)], (1, 1))),
    );
    x.join().unwrap();
    o.join().unwrap();

    assert_eq!(game.outcome(), Outcome::Draw);
    assert!(game.board().is_full());
    assert_eq!(gridlock::winner(&game.board()), None);

    // Terminal state rejects immediately on the test thread too.
    assert!(!game.attempt_move(Player::X, Cell::new(0, 0)));
    assert!(!game.attempt_move(Player::O, Cell::new(0, 0)));
}

#[test]
fn test_waiting_actor_is_released_on_termination() {
    // Four moves in: X to play, one move from winning.
    let game = Arc::new(GameState::new(Box::new(SilentRender)));
    for (player, row, col) in [
        (Player::X, 0, 0),
        (Player::O, 1, 0),
        (Player::X, 0, 1),
        (Player::O, 1, 1),
    ] {
        assert!(game.attempt_move(player, Cell::new(row, col)));
    }

    // O parks inside attempt_move waiting for its turn.
    let (tx, rx) = mpsc::channel();
    let waiter = {
        let game = Arc::clone(&game);
        thread::spawn(move || {
            let accepted = game.attempt_move(Player::O, Cell::new(2, 2));
            tx.send(accepted).unwrap();
        })
    };

    // Give the waiter time to park, then end the game.
    thread::sleep(Duration::from_millis(50));
    assert!(game.attempt_move(Player::X, Cell::new(0, 2)));
    assert_eq!(game.outcome(), Outcome::Won(Player::X));

    // The terminal notification must release the waiter promptly,
    // and its pending proposal is rejected.
    let accepted = rx
        .recv_timeout(Duration::from_secs(2))
        .expect("waiting actor was not released after termination");
    assert!(!accepted);
    waiter.join().unwrap();
}

#[test]
fn test_random_duels_preserve_protocol_invariants() {
    for seed in 0..5 {
        let game = Arc::new(GameState::new(Box::new(SilentRender)));
        let x = spawn_actor(&game, Player::X, Box::new(Stochastic::seeded(seed)));
        let o = spawn_actor(&game, Player::O, Box::new(Stochastic::seeded(seed + 100)));
        x.join().unwrap();
        o.join().unwrap();

        let outcome = game.outcome();
        assert!(outcome.is_terminal(), "seed {seed}: game did not finish");

        let moves = game.moves();

        // Write-once: no cell appears twice in the log.
        let cells: HashSet<_> = moves.iter().map(|m| m.cell).collect();
        assert_eq!(cells.len(), moves.len(), "seed {seed}: cell overwritten");

        // Strict alternation, X first.
        for (i, m) in moves.iter().enumerate() {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(m.player, expected, "seed {seed}: turn order violated");
        }

        // Replaying the log move for move reproduces board and outcome.
        let replay = GameState::new(Box::new(SilentRender));
        for m in &moves {
            assert!(replay.attempt_move(m.player, m.cell), "seed {seed}: replay rejected {m}");
        }
        assert_eq!(replay.board(), game.board(), "seed {seed}: board mismatch");
        assert_eq!(replay.outcome(), outcome, "seed {seed}: outcome mismatch");

        match outcome {
            Outcome::Won(p) => {
                assert_eq!(gridlock::winner(&game.board()), Some(p), "seed {seed}")
            }
            Outcome::Draw => {
                assert!(game.board().is_full(), "seed {seed}");
                assert_eq!(gridlock::winner(&game.board()), None, "seed {seed}");
            }
            Outcome::Undecided => unreachable!(),
        }
    }
}
