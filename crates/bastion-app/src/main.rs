use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;

use bastion_app::autopilot::Autopilot;
use bastion_app::game_loop::{spawn_game_loop, LoggingObserver, FRAME_DURATION};
use bastion_app::session::{run_headless_session, HeadlessOptions};
use bastion_app::state::AppState;
use bastion_core::commands::PlayerCommand;
use bastion_core::config::EngineConfig;
use bastion_core::constants::DEFAULT_FRAME_MS;
use bastion_core::enums::SessionOutcome;

#[derive(Parser, Debug)]
#[command(name = "bastion")]
#[command(about = "Headless runner for the BASTION missile-defense simulation")]
struct Cli {
    /// JSON engine config. Fields it leaves out keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the RNG seed (each further session adds one)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of headless sessions to run
    #[arg(long, default_value_t = 1)]
    sessions: u32,
    /// Frame cap per session (10 min at 60fps = 36000)
    #[arg(long, default_value_t = 36_000)]
    max_frames: u64,
    /// Frames between autopilot shots, 0 to disable
    #[arg(long, default_value_t = 6)]
    autopilot_interval: u64,
    /// Run a single session on the real-time game loop thread
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.validate().context("invalid engine configuration")?;

    if cli.realtime {
        run_realtime(config, &cli)
    } else {
        run_batch(config, &cli)
    }
}

fn autopilot_interval(cli: &Cli) -> Option<u64> {
    (cli.autopilot_interval > 0).then_some(cli.autopilot_interval)
}

fn run_batch(config: EngineConfig, cli: &Cli) -> Result<()> {
    let options = HeadlessOptions {
        max_frames: cli.max_frames,
        frame_ms: DEFAULT_FRAME_MS,
        autopilot_interval: autopilot_interval(cli),
    };

    let mut wins = 0;
    let mut losses = 0;
    for i in 0..cli.sessions {
        let session_config = EngineConfig {
            seed: config.seed.wrapping_add(u64::from(i)),
            ..config.clone()
        };
        let report = run_headless_session(session_config, &options)?;
        match report.outcome {
            Some(SessionOutcome::Won) => wins += 1,
            Some(SessionOutcome::Lost) => losses += 1,
            None => {}
        }
        info!(
            "session {} (seed {}): {:?}, score {}, {} frames",
            i + 1,
            report.seed,
            report.outcome,
            report.score,
            report.frames
        );
        println!("{}", serde_json::to_string(&report)?);
    }

    info!(
        "{} sessions: {wins} won, {losses} lost, {} undecided",
        cli.sessions,
        cli.sessions - wins - losses
    );
    Ok(())
}

fn run_realtime(config: EngineConfig, cli: &Cli) -> Result<()> {
    let state = AppState::new();
    let mut autopilot = autopilot_interval(cli).map(|n| Autopilot::new(n, &config));

    let (cmd_tx, handle) = spawn_game_loop(
        config,
        state.latest_snapshot.clone(),
        Box::new(LoggingObserver),
    )?;
    *state
        .command_tx
        .lock()
        .map_err(|_| anyhow!("command channel lock poisoned"))? = Some(cmd_tx);
    *state
        .running
        .lock()
        .map_err(|_| anyhow!("running flag lock poisoned"))? = true;

    state.send(PlayerCommand::Start);

    let mut last_tick = None;
    for _ in 0..cli.max_frames {
        if !state.is_running() {
            break;
        }
        std::thread::sleep(FRAME_DURATION);
        let Some(snapshot) = state.snapshot() else {
            continue;
        };
        if snapshot.phase.is_terminal() {
            break;
        }
        if last_tick == Some(snapshot.time.tick) {
            continue;
        }
        last_tick = Some(snapshot.time.tick);

        if let Some(shot) = autopilot.as_mut().and_then(|a| a.next_shot(&snapshot)) {
            state.send(PlayerCommand::FireAt {
                x: shot.x,
                y: shot.y,
            });
        }
    }

    state.shutdown();
    handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    if let Some(snapshot) = state.snapshot() {
        info!(
            "final state: {:?}, score {}, {} frames",
            snapshot.phase, snapshot.score.score, snapshot.time.tick
        );
    }
    Ok(())
}
