use clap::Parser;
use set_core::*;
use set_gameroom::Config;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Race robots for sets on a shared board", long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = ROWS)]
    pub rows: usize,
    #[arg(long, default_value_t = COLUMNS)]
    pub columns: usize,
    #[arg(long, default_value_t = PLAYERS)]
    pub players: usize,
    /// Players 0..humans read their key presses from stdin.
    #[arg(long, default_value_t = HUMANS)]
    pub humans: usize,
    /// Round length in seconds.
    #[arg(long, default_value_t = TURN_TIMEOUT.as_secs())]
    pub timeout: u64,
    /// Seconds left when the countdown turns urgent.
    #[arg(long, default_value_t = TURN_WARNING.as_secs())]
    pub warning: u64,
    #[arg(long, default_value_t = POINT_FREEZE.as_millis() as u64)]
    pub point_freeze_ms: u64,
    #[arg(long, default_value_t = PENALTY_FREEZE.as_millis() as u64)]
    pub penalty_freeze_ms: u64,
    /// Upper bound on a robot's pause between key presses.
    #[arg(long, default_value_t = THINK_DELAY.as_millis() as u64)]
    pub think_ms: u64,
    /// Open boards as dealt, even when they hold no set.
    #[arg(long)]
    pub no_ensure_set: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            rows: args.rows,
            columns: args.columns,
            players: args.players,
            humans: args.humans,
            turn_timeout: Duration::from_secs(args.timeout),
            turn_warning: Duration::from_secs(args.warning),
            point_freeze: Duration::from_millis(args.point_freeze_ms),
            penalty_freeze: Duration::from_millis(args.penalty_freeze_ms),
            think_delay: Duration::from_millis(args.think_ms),
            ensure_set: !args.no_ensure_set,
            ..Config::default()
        }
    }
}
