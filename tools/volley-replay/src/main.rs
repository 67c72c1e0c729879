//! volley-replay: run a seeded session headlessly and print every tick.
//!
//! Usage:
//!   volley-replay run --seed 7 --ticks 1800 --fire-every 20
//!   volley-replay run --config session.json --dt 0.033 --snapshots
//!
//! Each tick is printed to stdout as one JSON line. Running twice with the
//! same arguments prints the same bytes.

use std::path::PathBuf;
use std::process;

use log::{info, warn};

use volley_core::enums::EntityKind;
use volley_core::state::{EntityView, TickResult};
use volley_sim::{Session, SessionConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "volley-replay: headless VOLLEY session runner\n\
         \n\
         Commands:\n\
         \n\
         run       Simulate a session and print one JSON line per tick\n\
         \n\
           --config <path>    Session config JSON (missing fields use defaults)\n\
           --seed <N>         RNG seed (overrides config)\n\
           --width <W>        Playfield width (overrides config)\n\
           --height <H>       Playfield height (overrides config)\n\
           --ticks <N>        Maximum ticks to run (default: 1800)\n\
           --dt <secs>        Seconds per tick (default: 1/60)\n\
           --fire-every <N>   Fire at the leading monster every N ticks (default: 0, never)\n\
           --snapshots        Include the entity snapshot with every tick\n\
         \n\
         Examples:\n\
         \n\
           volley-replay run --seed 7 --fire-every 20\n\
           volley-replay run --config session.json --ticks 600 --snapshots\n"
    );
}

/// One output line.
#[derive(serde::Serialize)]
struct ReplayLine<'a> {
    #[serde(flatten)]
    result: &'a TickResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    entities: Option<Vec<EntityView>>,
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let raw = flag_value(args, flag)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("Error: invalid value for {flag}: {raw}");
            process::exit(1);
        }
    }
}

fn load_config(args: &[String]) -> SessionConfig {
    let mut config = match flag_value(args, "--config").map(PathBuf::from) {
        Some(path) => {
            let text = match std::fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("Error reading {}: {e}", path.display());
                    process::exit(1);
                }
            };
            match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error parsing {}: {e}", path.display());
                    process::exit(1);
                }
            }
        }
        None => SessionConfig::default(),
    };

    if let Some(seed) = parse_flag(args, "--seed") {
        config.seed = seed;
    }
    if let Some(width) = parse_flag(args, "--width") {
        config.bounds_width = width;
    }
    if let Some(height) = parse_flag(args, "--height") {
        config.bounds_height = height;
    }
    config
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let config = load_config(args);
    let ticks: u64 = parse_flag(args, "--ticks").unwrap_or(1800);
    let dt: f64 = parse_flag(args, "--dt").unwrap_or(1.0 / 60.0);
    let fire_every: u64 = parse_flag(args, "--fire-every").unwrap_or(0);
    let snapshots = args.iter().any(|a| a == "--snapshots");

    if !(dt.is_finite() && dt > 0.0) {
        eprintln!("Error: --dt must be a positive number of seconds");
        process::exit(1);
    }

    let mut session = match Session::with_config(config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    info!(
        "running up to {ticks} ticks of {dt}s (seed={})",
        session.config().seed
    );

    for i in 0..ticks {
        if fire_every > 0 && i % fire_every == 0 {
            fire_at_leading_monster(&mut session);
        }

        let result = session.tick(dt);
        let line = ReplayLine {
            result: &result,
            entities: snapshots.then(|| session.snapshot_entities()),
        };
        match serde_json::to_string(&line) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing tick {}: {e}", result.tick);
                process::exit(1);
            }
        }

        if result.outcome.is_terminal() {
            break;
        }
    }

    let stats = session.stats();
    eprintln!(
        "{:?} after {} ticks ({:.2}s): score {}, {} monsters, {} shots, {} expired",
        session.outcome(),
        session.time().tick,
        session.time().elapsed_secs,
        session.score(),
        stats.monsters_spawned,
        stats.projectiles_fired,
        stats.projectiles_expired,
    );
}

/// Aim at the monster closest to the left edge.
fn fire_at_leading_monster(session: &mut Session) {
    let player = session.player_position();
    let target = session
        .snapshot_entities()
        .into_iter()
        .filter(|e| e.kind == EntityKind::Monster && e.position.x >= player.x)
        .min_by(|a, b| a.position.x.total_cmp(&b.position.x));

    if let Some(target) = target {
        if let Err(e) = session.fire_from_player(target.position) {
            warn!("shot at {} refused: {e}", target.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flag_parsing() {
        let a = args(&["--seed", "7", "--width", "300", "--snapshots"]);
        assert_eq!(flag_value(&a, "--seed"), Some("7"));
        assert_eq!(parse_flag::<u64>(&a, "--seed"), Some(7));
        assert_eq!(parse_flag::<f64>(&a, "--width"), Some(300.0));
        assert_eq!(flag_value(&a, "--snapshots"), None);
        assert_eq!(flag_value(&a, "--height"), None);
    }

    #[test]
    fn test_overrides_apply_to_defaults() {
        let config = load_config(&args(&["--seed", "9", "--height", "200"]));
        assert_eq!(config.seed, 9);
        assert_eq!(config.bounds_height, 200.0);
        assert_eq!(config.bounds_width, SessionConfig::default().bounds_width);
    }

    #[test]
    fn test_replay_line_flattens_result() {
        let result = TickResult {
            tick: 3,
            ..Default::default()
        };
        let line = ReplayLine {
            result: &result,
            entities: None,
        };
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.starts_with("{\"tick\":3,"));
        assert!(!json.contains("entities"));
    }
}
