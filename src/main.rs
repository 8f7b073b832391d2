//! Terminal snake runner (default binary).
//!
//! Plays the environment interactively: the terminal display is opened by
//! the environment's first human render, and the keyboard supplies the
//! actions. Configuration comes from `SNAKE_*` environment variables.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use snake_gym::core::{EnvConfig, SnakeEnv};
use snake_gym::input::{handle_key_event, should_quit, Command, TurnBuffer};
use snake_gym::logging;
use snake_gym::term::terminal_display_factory;
use snake_gym::types::{RenderMode, RENDER_FPS};

fn main() -> Result<()> {
    logging::init_file_from_env()?;

    let config = EnvConfig::from_env().context("invalid SNAKE_* configuration")?;
    info!(?config, "starting interactive session");
    let mut env = SnakeEnv::new(config)?.with_display(terminal_display_factory());

    let result = run(&mut env);

    // Always try to restore terminal state.
    let closed = env.close();
    result?;
    closed?;
    Ok(())
}

fn run(env: &mut SnakeEnv) -> Result<()> {
    let tick_duration = Duration::from_millis(1000 / RENDER_FPS as u64);
    let mut turns = TurnBuffer::new();

    env.reset();
    env.render(RenderMode::Human)?;
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(Command::Turn(direction)) => turns.push(direction),
                        Some(Command::Restart) => {
                            turns.clear();
                            env.reset();
                            env.render(RenderMode::Human)?;
                            last_tick = Instant::now();
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => {
                    env.render(RenderMode::Human)?;
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if env.is_done() {
                continue;
            }

            let direction = turns.next(env.direction());
            let step = env.step_direction(direction);
            env.render(RenderMode::Human)?;

            if step.done {
                info!(
                    score = step.info.score,
                    steps = env.steps(),
                    reward = step.reward,
                    "episode ended"
                );
            }
        }
    }
}
