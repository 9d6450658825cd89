//! Per-frame scene drawing
//!
//! Order: clear to black, then in white the surviving blocks, the three
//! walls, the ball and the paddle.

use super::{Canvas, Color, Rect};
use crate::consts::*;
use crate::sim::GameState;

/// Wall rectangles: top, left, right. The bottom is open.
pub const WALLS: [Rect; 3] = [
    Rect::new(0.0, 0.0, ARENA_WIDTH, THICKNESS),
    Rect::new(0.0, 0.0, THICKNESS, ARENA_HEIGHT),
    Rect::new(ARENA_WIDTH - THICKNESS, 0.0, THICKNESS, ARENA_HEIGHT),
];

pub fn draw_scene<C: Canvas>(state: &GameState, canvas: &mut C) -> Result<(), C::Error> {
    canvas.set_draw_color(Color::BLACK);
    canvas.clear();

    canvas.set_draw_color(Color::WHITE);

    for (_, block) in state.live_blocks() {
        canvas.fill_rect(Rect::new(
            block.pos.x,
            block.pos.y,
            BLOCK_WIDTH,
            BLOCK_HEIGHT,
        ));
    }

    for wall in WALLS {
        canvas.fill_rect(wall);
    }

    let ball = state.ball.pos;
    canvas.fill_rect(Rect::new(ball.x, ball.y, BALL_SIZE, BALL_SIZE));

    let paddle = state.paddle.pos;
    canvas.fill_rect(Rect::new(paddle.x, paddle.y, PADDLE_WIDTH, PADDLE_HEIGHT));

    canvas.present()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};

    #[test]
    fn test_fresh_frame() {
        let state = GameState::new();
        let mut list = DrawList::new();
        draw_scene(&state, &mut list).unwrap();

        assert_eq!(
            &list.commands[..3],
            &[
                DrawCommand::SetColor(Color::BLACK),
                DrawCommand::Clear,
                DrawCommand::SetColor(Color::WHITE),
            ]
        );
        assert_eq!(list.commands.last(), Some(&DrawCommand::Present));

        // 15 blocks + 3 walls + ball + paddle
        let rects = list.filled_rects();
        assert_eq!(rects.len(), BLOCK_COUNT + 5);
        assert_eq!(rects[0], Rect::new(30.0, 100.0, BLOCK_WIDTH, BLOCK_HEIGHT));
        assert_eq!(rects[BLOCK_COUNT + 3], Rect::new(515.0, 703.0, 20.0, 20.0));
        assert_eq!(rects[BLOCK_COUNT + 4], Rect::new(475.0, 728.0, 100.0, 20.0));
    }

    #[test]
    fn test_destroyed_blocks_not_drawn() {
        let mut state = GameState::new();
        state.blocks[0].destroy();
        state.blocks[7].destroy();

        let mut list = DrawList::new();
        draw_scene(&state, &mut list).unwrap();

        let rects = list.filled_rects();
        assert_eq!(rects.len(), BLOCK_COUNT - 2 + 5);
        assert!(!rects.iter().any(|r| r.x == 30.0 && r.y == 100.0));
        assert!(!rects.iter().any(|r| r.x == 480.0 && r.y == 200.0));
    }

    #[test]
    fn test_walls() {
        assert_eq!(WALLS[2].x, 1004.0);
        assert_eq!(WALLS[0].w, 1024.0);
    }
}
