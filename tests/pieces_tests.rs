//! Pieces tests - shapes, rotation and move rejection

use proptest::prelude::*;

use tui_arcade::core::{MemoryRecord, MoveResult, Piece, PuzzleGame, SequenceSource, Shape};
use tui_arcade::types::{GameAction, PieceKind};

fn kind() -> impl Strategy<Value = PieceKind> {
    (0..PieceKind::ALL.len()).prop_map(|i| PieceKind::ALL[i])
}

fn action() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        Just(GameAction::MoveLeft),
        Just(GameAction::MoveRight),
        Just(GameAction::Rotate),
        Just(GameAction::SoftDrop),
    ]
}

#[test]
fn test_o_is_rotation_invariant() {
    let o = Shape::of(PieceKind::O);
    assert_eq!(o.rotated(), o);
}

#[test]
fn test_i_spawns_flat_and_centered() {
    let i = Piece::spawn(PieceKind::I);
    assert_eq!((i.x, i.y), (3, 0));
    let cells: Vec<_> = i.board_cells().collect();
    assert_eq!(cells, vec![(3, 0), (4, 0), (5, 0), (6, 0)]);
}

#[test]
fn test_s_and_z_mirror_each_other() {
    let s: Vec<_> = Shape::of(PieceKind::S).cells().collect();
    let z: Vec<_> = Shape::of(PieceKind::Z)
        .cells()
        .map(|(x, y)| (2 - x, y))
        .collect();
    let mut z_sorted = z;
    z_sorted.sort_by_key(|&(x, y)| (y, x));
    assert_eq!(s, z_sorted);
}

proptest! {
    #[test]
    fn four_rotations_are_identity(kind in kind(), turns in 0usize..4) {
        let mut shape = Shape::of(kind);
        for _ in 0..turns {
            shape = shape.rotated();
        }
        let start = shape;
        for _ in 0..4 {
            shape = shape.rotated();
        }
        prop_assert_eq!(shape, start);
    }

    #[test]
    fn rotation_keeps_four_cells(kind in kind(), turns in 0usize..4) {
        let mut shape = Shape::of(kind);
        for _ in 0..turns {
            shape = shape.rotated();
        }
        prop_assert_eq!(shape.cells().count(), 4);
    }

    #[test]
    fn rejected_moves_leave_the_piece_alone(
        kinds in prop::collection::vec(kind(), 1..8),
        actions in prop::collection::vec(action(), 1..120),
    ) {
        let mut game = PuzzleGame::new(SequenceSource::new(kinds), Box::new(MemoryRecord::default()));
        for a in actions {
            if game.game_over() {
                break;
            }
            let before = game.active();
            let board = game.board().filled_count();
            if game.apply_action(a) == MoveResult::Rejected {
                prop_assert_eq!(game.active(), before);
                prop_assert_eq!(game.board().filled_count(), board);
            }
        }
    }
}
