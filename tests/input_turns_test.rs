use crossterm::event::{KeyCode, KeyEvent};

use snake_gym::core::{EnvConfig, SnakeEnv};
use snake_gym::input::{handle_key_event, Command, TurnBuffer};
use snake_gym::types::{Direction, Position};

fn press(turns: &mut TurnBuffer, code: KeyCode) {
    if let Some(Command::Turn(direction)) = handle_key_event(KeyEvent::from(code)) {
        turns.push(direction);
    }
}

#[test]
fn two_quick_presses_make_a_u_turn() {
    let mut env = SnakeEnv::new(EnvConfig::default().with_seed(4)).unwrap();
    env.reset();
    let mut turns = TurnBuffer::new();

    // Heading right; Left alone would be a reversal, Up then Left is a U-turn.
    press(&mut turns, KeyCode::Up);
    press(&mut turns, KeyCode::Left);

    let dir = turns.next(env.direction());
    env.step_direction(dir);
    assert_eq!(env.head(), Position::new(100, 40));

    let dir = turns.next(env.direction());
    env.step_direction(dir);
    assert_eq!(env.head(), Position::new(90, 40));
    assert_eq!(env.direction(), Direction::Left);

    // Nothing queued: keep going.
    let dir = turns.next(env.direction());
    env.step_direction(dir);
    assert_eq!(env.head(), Position::new(80, 40));
}

#[test]
fn reversal_key_is_ignored_by_the_environment() {
    let mut env = SnakeEnv::new(EnvConfig::default().with_seed(4)).unwrap();
    env.reset();
    let mut turns = TurnBuffer::new();

    press(&mut turns, KeyCode::Char('a'));
    let dir = turns.next(env.direction());
    env.step_direction(dir);

    assert_eq!(env.direction(), Direction::Right);
    assert_eq!(env.head(), Position::new(110, 50));
}

#[test]
fn restart_key_is_not_a_turn() {
    let mut turns = TurnBuffer::new();
    press(&mut turns, KeyCode::Char('r'));
    assert!(turns.is_empty());
    assert_eq!(
        handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
        Some(Command::Restart)
    );
}
