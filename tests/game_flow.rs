use gomoku::eval::calculate_score;
use gomoku::search::candidate_moves;
use gomoku::{AIEngine, Board, GameState, MoveError, Pos, SearchConfig, Stone};

fn cells(board: &Board) -> Vec<Stone> {
    let mut out = Vec::new();
    for y in 0..19 {
        for x in 0..19 {
            out.push(board.stone(x, y));
        }
    }
    out
}

#[test]
fn computer_self_play_keeps_rules() {
    let mut black = AIEngine::with_config(SearchConfig::default().with_depth(2).with_seed(1));
    let mut white = AIEngine::with_config(SearchConfig::default().with_depth(2).with_seed(2));
    let mut board = Board::new();
    let mut placed = 0usize;

    for _ in 0..80 {
        if board.state() != GameState::Playing {
            break;
        }
        let mover = board.current_player();
        let engine = if mover == 0 { &mut black } else { &mut white };

        let before = cells(&board);
        let Some(pos) = engine.find_best_move(&board) else {
            break;
        };
        assert_eq!(cells(&board), before, "search changed the board");

        assert!(board.place_stone(pos.x as i32, pos.y as i32));
        placed += 1;

        let removed = (board.capture_count(0) + board.capture_count(1)) as usize;
        assert_eq!(board.stone_count(), placed - removed);
        if board.state() == GameState::Playing {
            assert_eq!(board.current_player(), 1 - mover);
        } else {
            assert_eq!(board.current_player(), mover);
        }
    }

    assert!(placed > 0);
    assert_eq!(board.history().len(), placed);
}

#[test]
fn capture_sequence_from_play() {
    let mut board = Board::new();
    // Black brackets two White stones, placing the low end last
    for (x, y) in [(3, 9), (2, 9), (12, 3), (1, 9)] {
        assert!(board.place_stone(x, y));
    }
    assert!(board.place_stone(0, 9));

    assert_eq!(board.capture_count(0), 2);
    assert_eq!(board.stone(1, 9), Stone::Empty);
    assert_eq!(board.stone(2, 9), Stone::Empty);
    assert_eq!(board.stone(3, 9), Stone::Black);
}

#[test]
fn forbidden_move_is_atomic() {
    let mut board = Board::new();
    for (x, y) in [(7, 9), (0, 0), (8, 9), (2, 0), (9, 7), (4, 0), (9, 8), (6, 0)] {
        assert!(board.place_stone(x, y));
    }
    let before = cells(&board);

    assert_eq!(
        board.try_place_stone(9, 9),
        Err(MoveError::DoubleFreeThree { x: 9, y: 9 })
    );
    assert!(!board.place_stone(9, 9));
    assert_eq!(cells(&board), before);
    assert_eq!(board.current_player(), 0);
}

#[test]
fn exhaustive_shallow_search_is_argmax() {
    let mut board = Board::new();
    for (x, y) in [(9, 9), (10, 9), (9, 10)] {
        assert!(board.place_stone(x, y));
    }

    let mut best: Option<(Pos, i64)> = None;
    for mv in candidate_moves(&board) {
        let mut child = board.clone();
        if !child.place_stone(mv.x as i32, mv.y as i32) {
            continue;
        }
        let score = calculate_score(&child);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }

    // Any seed: nothing is truncated
    let mut engine = AIEngine::with_config(SearchConfig::exhaustive(1).with_seed(77));
    let result = engine.find_best_move_with_stats(&board);
    assert_eq!(result.best_move, best.map(|(mv, _)| mv));
    assert_eq!(result.score, best.map_or(0, |(_, s)| s));
}

#[test]
fn computer_completes_five() {
    let mut board = Board::new();
    for (x, y) in [(9, 5), (12, 5), (9, 6), (12, 7), (9, 7), (12, 9), (9, 8), (12, 11)] {
        assert!(board.place_stone(x, y));
    }

    let mut engine = AIEngine::with_config(SearchConfig::exhaustive(1).with_seed(3));
    let pos = engine.find_best_move(&board).unwrap();
    assert!(pos == Pos::new(9, 4) || pos == Pos::new(9, 9));

    assert!(board.place_stone(pos.x as i32, pos.y as i32));
    assert_eq!(board.state(), GameState::BlackWins);
}
