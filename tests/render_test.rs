//! Render tests - snapshots through the views into framebuffers and escape
//! sequences, without a real terminal.

use tui_arcade::core::{MemoryRecord, PlatformerSession, PuzzleGame, SequenceSource};
use tui_arcade::term::{encode_diff_into, encode_full_into, PlatformerView, PuzzleView, Viewport};
use tui_arcade::types::{GameAction, InputFrame, PieceKind};
use tui_arcade::default_level;

#[test]
fn test_locked_piece_is_drawn_at_the_bottom() {
    let mut game = PuzzleGame::new(
        SequenceSource::new([PieceKind::O, PieceKind::T]),
        Box::new(MemoryRecord::default()),
    );
    for _ in 0..4 {
        game.apply_action(GameAction::MoveLeft);
    }
    game.apply_action(GameAction::HardDrop);

    let vp = Viewport::new(60, 24);
    let fb = PuzzleView::default().render(&game.snapshot(), vp);

    // 22-wide frame centered in 60 columns: board column 0 starts at x = 20.
    // Board row 19 is screen row 21.
    for x in 20..24 {
        assert_eq!(fb.get(x, 21).map(|c| c.ch), Some('█'), "x = {x}");
    }
    assert_eq!(fb.get(24, 21).map(|c| c.ch), Some('·'));
}

#[test]
fn test_diff_only_touches_changed_cells() {
    let mut game = PuzzleGame::new(
        SequenceSource::new([PieceKind::I]),
        Box::new(MemoryRecord::default()),
    );
    let view = PuzzleView::default();
    let vp = Viewport::new(60, 24);
    let before = view.render(&game.snapshot(), vp);

    let mut full = Vec::new();
    encode_full_into(&before, &mut full).unwrap();

    let mut same = Vec::new();
    encode_diff_into(&before, &before, &mut same).unwrap();
    assert!(same.len() < full.len() / 10);

    game.apply_action(GameAction::MoveRight);
    let after = view.render(&game.snapshot(), vp);
    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    assert!(diff.len() > same.len());
    assert!(diff.len() < full.len());
}

#[test]
fn test_platformer_frame_follows_the_session() {
    let mut session = PlatformerSession::new(default_level());
    let view = PlatformerView::default();
    let vp = Viewport::new(64, 26);

    let first = view.render(&session.snapshot(), vp);
    assert!(first.row_text(0).starts_with("SCORE 0"));

    let right = InputFrame {
        right: true,
        ..InputFrame::IDLE
    };
    for _ in 0..30 {
        session.step(&right);
    }
    let later = view.render(&session.snapshot(), vp);

    let player_x = |fb: &tui_arcade::term::FrameBuffer| {
        (0..fb.height()).find_map(|y| (0..fb.width()).find(|&x| fb.get(x, y).map(|c| c.ch) == Some('@')))
    };
    let (a, b) = (player_x(&first), player_x(&later));
    assert!(a.is_some() && b.is_some());
    assert!(b > a);
}
