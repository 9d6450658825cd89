//! Headless round tests: drive `Game` with synthetic clock instants and a
//! recording canvas.

use std::time::{Duration, Instant};

use block_breaker::Game;
use block_breaker::consts::*;
use block_breaker::platform::{Key, KeyboardState};
use block_breaker::renderer::DrawList;
use block_breaker::sim::{GameEvent, GamePhase};

const TICK: Duration = Duration::from_millis(16);

struct Harness {
    game: Game,
    now: Instant,
    keys: KeyboardState,
}

impl Harness {
    fn new() -> Self {
        let now = Instant::now();
        Self {
            game: Game::new(now),
            now,
            keys: KeyboardState::new(),
        }
    }

    fn step(&mut self) -> Vec<GameEvent> {
        self.now += TICK;
        assert!(self.game.is_due(self.now));
        let input = self.keys.tick_input();
        self.game.update(self.now, &input)
    }
}

#[test]
fn waits_for_space_then_plays() {
    let mut h = Harness::new();
    let initial = h.game.state().clone();

    h.keys.press(Key::Right);
    for _ in 0..30 {
        h.step();
    }
    assert_eq!(h.game.state().phase, GamePhase::NotStarted);
    assert_eq!(h.game.state().ball, initial.ball);
    assert_eq!(h.game.state().paddle, initial.paddle);

    h.keys.press(Key::Space);
    let events = h.step();
    assert!(events.contains(&GameEvent::RoundStarted));
    h.keys.release(Key::Space);

    h.step();
    assert_eq!(h.game.state().phase, GamePhase::Running);
    assert!(h.game.state().paddle.pos.x > initial.paddle.pos.x);
}

#[test]
fn paddle_pins_against_track_ends() {
    let mut h = Harness::new();
    h.keys.press(Key::Space);
    h.keys.press(Key::Right);
    for _ in 0..200 {
        h.step();
    }
    assert_eq!(h.game.state().paddle.pos.x, PADDLE_MAX_X);

    h.keys.press(Key::Left);
    for _ in 0..200 {
        h.step();
    }
    assert_eq!(h.game.state().paddle.pos.x, PADDLE_MIN_X);
}

#[test]
fn long_round_keeps_invariants() {
    let mut h = Harness::new();
    h.keys.press(Key::Space);

    let mut destroyed_so_far = 0;
    let mut list = DrawList::new();
    for i in 0..5_000 {
        // Wiggle the paddle around
        h.keys.release(Key::Left);
        h.keys.release(Key::Right);
        match (i / 40) % 3 {
            0 => h.keys.press(Key::Left),
            1 => h.keys.press(Key::Right),
            _ => {}
        }

        let events = h.step();
        let state = h.game.state();

        for event in &events {
            if *event == GameEvent::PaddleBounce {
                assert!((state.ball.vel.length() - BALL_BOUNCE_SPEED).abs() < 0.01);
                assert!(state.ball.vel.y < 0.0);
            }
        }

        let destroyed = state.destroyed_count();
        assert!(destroyed >= destroyed_so_far);
        destroyed_so_far = destroyed;

        assert!(state.paddle.pos.x >= PADDLE_MIN_X);
        assert!(state.paddle.pos.x <= PADDLE_MAX_X);
        assert!(state.ball.pos.is_finite());

        list.commands.clear();
        h.game.draw(&mut list).unwrap();
        assert_eq!(list.filled_rects().len(), BLOCK_COUNT - destroyed + 5);
    }
    assert_eq!(h.game.state().phase, GamePhase::Running);
}

#[test]
fn escape_ends_the_loop() {
    let mut h = Harness::new();
    h.keys.press(Key::Space);
    h.step();

    h.keys.press(Key::Escape);
    let events = h.step();
    assert_eq!(events, vec![GameEvent::Quit]);
    assert!(!h.game.is_running());
}

#[test]
fn window_close_ends_the_loop_before_start() {
    let mut h = Harness::new();
    h.keys.request_close();
    h.step();
    assert!(!h.game.is_running());
    assert_eq!(h.game.state().phase, GamePhase::Terminated);
}
