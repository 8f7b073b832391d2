//! Headless replay: feeds an action script through the environment.
//!
//! Reads whitespace-separated actions from stdin (codes `0..4` or direction
//! names such as `up`/`l`), runs one episode and prints one JSON record per
//! line. Stops at the end of the episode or the script, whichever is first.
//!
//! ```text
//! echo "3 3 0 0 2" | SNAKE_SEED=7 snake-replay
//! ```

use std::io::{self, BufWriter, Read, Write};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::info;

use snake_gym::core::{EnvConfig, SnakeEnv, StepInfo};
use snake_gym::logging;
use snake_gym::types::{Direction, Position};

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum Record<'a> {
    Reset {
        config: &'a EnvConfig,
        head: Position,
        food: Position,
        shape: [usize; 3],
    },
    Step {
        step: u32,
        action: usize,
        direction: Direction,
        reward: i32,
        done: bool,
        info: StepInfo,
        head: Position,
        food: Position,
        length: usize,
    },
}

fn parse_action(token: &str) -> Result<usize> {
    if let Ok(code) = token.parse::<usize>() {
        return Ok(code);
    }
    match Direction::from_str(token) {
        Some(direction) => Ok(direction.action()),
        None => bail!("unrecognized action {token:?}"),
    }
}

fn main() -> Result<()> {
    logging::init_stderr()?;

    let config = EnvConfig::from_env().context("invalid SNAKE_* configuration")?;
    let mut env = SnakeEnv::new(config.clone())?;

    let mut script = String::new();
    io::stdin()
        .read_to_string(&mut script)
        .context("failed to read actions from stdin")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let first = env.reset();
    let reset = Record::Reset {
        config: &config,
        head: env.head(),
        food: env.food(),
        shape: first.shape(),
    };
    writeln!(out, "{}", serde_json::to_string(&reset)?)?;

    for (i, token) in script.split_whitespace().enumerate() {
        let action = parse_action(token).with_context(|| format!("action #{}", i + 1))?;
        let step = env
            .step(action)
            .with_context(|| format!("action #{}", i + 1))?;

        let record = Record::Step {
            step: env.steps(),
            action,
            direction: env.direction(),
            reward: step.reward,
            done: step.done,
            info: step.info,
            head: env.head(),
            food: env.food(),
            length: env.body().len(),
        };
        writeln!(out, "{}", serde_json::to_string(&record)?)?;

        if step.done {
            break;
        }
    }

    out.flush()?;
    info!(score = env.score(), steps = env.steps(), done = env.is_done(), "replay finished");
    Ok(())
}
