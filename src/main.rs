//! Palisade -- a Quoridor rules engine with a headless match runner.
//!
//! Seats the configured agents at one table and plays a full match,
//! logging moves to stderr in algebraic notation. With --snapshots the
//! runner also emits one JSON snapshot per turn on stdout, one object per
//! line, which is the same payload a rendering frontend would consume.
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --players N    Player count, 2 or 4 (default: 2)
//!   --agent SPEC   Agent for the next unfilled seat, repeatable
//!                  (human[:NAME] | random[:SEED] | llm[:MODEL[,ATTEMPTS]];
//!                  unfilled seats default to random)
//!   --seed N       Base seed for unseeded random seats, 0 for entropy
//!                  (default: 0)
//!   --max-turns N  Stop a game still running after N moves (default: 500)
//!   --snapshots    Emit one JSON snapshot per turn on stdout
//!   --quiet        Suppress per-move logging and the summary
//!   --help         Show this help

use std::env;
use std::process;

use palisade::agents::{Agent, AgentSpec};
use palisade::board::new_game;
use palisade::hotseat::{HotseatController, PlayerMeta};
use palisade::protocol::notation::format_move;

struct MatchConfig {
    players: usize,
    agent_specs: Vec<String>,
    seed: u64,
    max_turns: u32,
    snapshots: bool,
    quiet: bool,
}

impl Default for MatchConfig {
    fn default() -> MatchConfig {
        MatchConfig {
            players: 2,
            agent_specs: Vec::new(),
            seed: 0,
            max_turns: 500,
            snapshots: false,
            quiet: false,
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = MatchConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--players" => {
                i += 1;
                config.players = args[i].parse().expect("invalid --players value");
            }
            "--agent" => {
                i += 1;
                config.agent_specs.push(args[i].clone());
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--max-turns" => {
                i += 1;
                config.max_turns = args[i].parse().expect("invalid --max-turns value");
            }
            "--snapshots" => {
                config.snapshots = true;
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let state = match new_game(config.players) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("Cannot start match: {}", err);
            process::exit(1);
        }
    };

    if config.agent_specs.len() > config.players {
        eprintln!(
            "Too many --agent specs: {} given for {} seats",
            config.agent_specs.len(),
            config.players
        );
        process::exit(1);
    }

    let (mut agents, roster) = build_seats(&config);

    let mut controller = HotseatController::new(state);
    controller.set_roster(roster);

    if !config.quiet {
        let names: Vec<&str> = controller.roster().iter().map(|m| m.name.as_str()).collect();
        eprintln!(
            "Match: {} players ({}), {} walls shared, up to {} moves",
            config.players,
            names.join(" vs "),
            controller.state().shared_walls_remaining,
            config.max_turns
        );
    }

    let mut moves_played = 0u32;
    while moves_played < config.max_turns && !controller.state().is_terminal() {
        if config.snapshots {
            emit_snapshot(&controller);
        }

        let seat = controller.state().current_player;
        let mv = match controller.play_turn(agents[seat].as_mut()) {
            Ok(mv) => mv,
            Err(err) => {
                eprintln!("Seat {} cannot move: {}", seat + 1, err);
                process::exit(1);
            }
        };
        moves_played += 1;

        if !config.quiet {
            eprintln!(
                "move {}: {} plays {}",
                moves_played,
                controller.roster()[seat].name,
                format_move(&mv)
            );
        }
    }

    if config.snapshots {
        emit_snapshot(&controller);
    }

    if !config.quiet {
        print_summary(&controller, moves_played);
    }
}

/// Builds one agent and roster entry per seat. Seats without a spec get
/// the random bot; unseeded random seats derive their seed from the base
/// seed and seat index so reruns with the same seed repeat the match.
fn build_seats(config: &MatchConfig) -> (Vec<Box<dyn Agent>>, Vec<PlayerMeta>) {
    let mut agents: Vec<Box<dyn Agent>> = Vec::new();
    let mut roster = Vec::new();

    for seat in 0..config.players {
        let raw = config
            .agent_specs
            .get(seat)
            .map(String::as_str)
            .unwrap_or("random");
        let mut spec = match AgentSpec::parse(raw) {
            Ok(spec) => spec,
            Err(err) => {
                eprintln!("Invalid agent spec '{}': {}", raw, err);
                process::exit(1);
            }
        };

        if let AgentSpec::Human { name } = &spec {
            eprintln!(
                "Seat {} ({}) is human; human seats need an attached frontend",
                seat + 1,
                name
            );
            process::exit(1);
        }
        if let AgentSpec::Random { seed: 0 } = spec {
            if config.seed != 0 {
                // Seed 0 means entropy, so the wrapped derivation must stay nonzero.
                let derived = config.seed.wrapping_add(seat as u64).max(1);
                spec = AgentSpec::Random { seed: derived };
            }
        }

        let role = match spec {
            AgentSpec::Human { .. } => "human",
            AgentSpec::Random { .. } => "random",
            AgentSpec::Llm { .. } => "llm",
        };
        let agent = spec.build(None);
        roster.push(PlayerMeta {
            id: seat,
            name: agent.name().to_string(),
            role: role.to_string(),
        });
        agents.push(agent);
    }

    (agents, roster)
}

fn emit_snapshot(controller: &HotseatController) {
    let json = serde_json::to_string(&controller.snapshot())
        .expect("failed to serialize snapshot");
    println!("{}", json);
}

fn print_summary(controller: &HotseatController, moves_played: u32) {
    let state = controller.state();
    eprintln!("=== Match Summary ===");
    match state.winner {
        Some(id) => eprintln!(
            "Winner: {} (player {})",
            controller.roster()[id].name,
            id + 1
        ),
        None => eprintln!("No winner within {} moves", moves_played),
    }
    eprintln!("Moves played: {}", moves_played);
    eprintln!(
        "Walls placed: {} ({} left in the pool)",
        state.walls.len(),
        state.shared_walls_remaining
    );
}

fn print_usage() {
    eprintln!("Usage: palisade [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --players N    Player count, 2 or 4 (default: 2)");
    eprintln!("  --agent SPEC   Agent for the next unfilled seat, repeatable");
    eprintln!("                 (human[:NAME] | random[:SEED] | llm[:MODEL[,ATTEMPTS]])");
    eprintln!("  --seed N       Base seed for unseeded random seats, 0 for entropy");
    eprintln!("  --max-turns N  Stop a game still running after N moves (default: 500)");
    eprintln!("  --snapshots    Emit one JSON snapshot per turn on stdout");
    eprintln!("  --quiet        Suppress per-move logging and the summary");
    eprintln!("  --help         Show this help");
}
