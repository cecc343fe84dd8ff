//! Blocking read-decide-write loop over a line transport

use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow};
use rand::Rng;

use crate::protocol::{encode_command, parse_tick, parse_world_config};
use crate::strategy::Strategy;

/// Counters reported when the input stream ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub ticks: u64,
    pub dead_ticks: u64,
}

/// Drive `strategy` until `input` is exhausted.
///
/// The first non-empty line must be the world config; each later line is
/// one tick and gets exactly one command line in reply.
pub fn run<R: Rng, I: BufRead, O: Write>(
    strategy: &mut Strategy<R>,
    input: I,
    mut output: O,
) -> Result<RunStats> {
    let mut lines = input.lines().enumerate();

    let world = loop {
        let (n, line) = lines.next().ok_or_else(|| anyhow!("input ended before world config"))?;
        let line = line.context("failed to read world config")?;
        if line.trim().is_empty() {
            continue;
        }
        break parse_world_config(&line).with_context(|| format!("bad world config on line {}", n + 1))?;
    };
    log::info!("World {}x{}", world.game_width, world.game_height);

    let map = world.map();
    let mut stats = RunStats::default();
    for (n, line) in lines {
        let line = line.with_context(|| format!("failed to read line {}", n + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let tick = parse_tick(&line).with_context(|| format!("bad tick record on line {}", n + 1))?;
        let command = strategy.decide(&tick.fragments(), map, &tick.visible_objects())?;
        if matches!(command, crate::Command::Died) {
            stats.dead_ticks += 1;
        }
        stats.ticks += 1;

        writeln!(output, "{}", encode_command(command)?).context("failed to write command")?;
        output.flush().context("failed to flush command")?;
    }

    log::info!("Input closed after {} ticks ({} dead)", stats.ticks, stats.dead_ticks);
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn strategy() -> Strategy {
        Strategy::with_rng(Settings::default(), Pcg32::seed_from_u64(5))
    }

    #[test]
    fn test_run_answers_every_tick() {
        let input = concat!(
            "{\"GAME_WIDTH\":100,\"GAME_HEIGHT\":100}\n",
            "{\"Mine\":[{\"X\":10,\"Y\":10,\"R\":5,\"M\":50}],\"Objects\":[{\"T\":\"F\",\"X\":20,\"Y\":20}]}\n",
            "\n",
            "{\"Mine\":[],\"Objects\":[]}\n",
        );
        let mut out = Vec::new();
        let stats = run(&mut strategy(), input.as_bytes(), &mut out).unwrap();

        assert_eq!(stats, RunStats { ticks: 2, dead_ticks: 1 });
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![
            r#"{"X":20.0,"Y":20.0,"Split":false}"#,
            r#"{"X":0.0,"Y":0.0,"Debug":"Died"}"#,
        ]);
    }

    #[test]
    fn test_run_without_config() {
        let mut out = Vec::new();
        assert!(run(&mut strategy(), "".as_bytes(), &mut out).is_err());
    }

    #[test]
    fn test_run_rejects_malformed_tick() {
        let input = "{\"GAME_WIDTH\":100,\"GAME_HEIGHT\":100}\n{\"Mine\":[{\"X\":1}]}\n";
        let mut out = Vec::new();
        assert!(run(&mut strategy(), input.as_bytes(), &mut out).is_err());
        assert!(out.is_empty());
    }
}
