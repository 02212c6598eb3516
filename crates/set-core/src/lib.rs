//! Core type aliases, constants, and runtime utilities for the set table.
//!
//! This crate provides the foundational types and default parameters
//! used throughout the workspace.
use std::time::Duration;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Board position, counted row-major from the top-left slot.
pub type Slot = usize;
/// Stable small integer identifying a player (0-based).
pub type PlayerId = usize;
/// Points accumulated by a player over the whole game.
pub type Score = u32;

// ============================================================================
// TABLE GEOMETRY
// ============================================================================
/// Rows of slots on the board.
pub const ROWS: usize = 3;
/// Columns of slots on the board.
pub const COLUMNS: usize = 4;

// ============================================================================
// DECK COMPOSITION
// A card is a vector of FEATURE_COUNT features, each taking one of
// FEATURE_SIZE values. A set is FEATURE_SIZE cards.
// ============================================================================
/// Number of features per card (shape, color, number, shading).
pub const FEATURE_COUNT: usize = 4;
/// Values per feature, which is also the number of cards in a set.
pub const FEATURE_SIZE: usize = 3;

// ============================================================================
// SEATING
// ============================================================================
/// Players at the table.
pub const PLAYERS: usize = 3;
/// Leading players driven by external input rather than a robot.
pub const HUMANS: usize = 0;

// ============================================================================
// ROUND TIMER
// ============================================================================
/// Length of a round before the board is cleared and redealt.
pub const TURN_TIMEOUT: Duration = Duration::from_secs(60);
/// Remaining time below which the countdown turns urgent.
pub const TURN_WARNING: Duration = Duration::from_secs(5);
/// Dealer wake cadence while the countdown is calm.
pub const NORMAL_TICK: Duration = Duration::from_millis(500);
/// Dealer wake cadence once the countdown is urgent.
pub const URGENT_TICK: Duration = Duration::from_millis(10);

// ============================================================================
// FREEZES
// ============================================================================
/// Freeze after a valid set.
pub const POINT_FREEZE: Duration = Duration::from_secs(1);
/// Freeze after an invalid set.
pub const PENALTY_FREEZE: Duration = Duration::from_secs(3);
/// Granularity of freeze countdown updates.
pub const FREEZE_TICK: Duration = Duration::from_secs(1);

// ============================================================================
// ROBOTS
// ============================================================================
/// Upper bound on the random pause between synthesized key presses.
pub const THINK_DELAY: Duration = Duration::from_millis(100);

// ============================================================================
// DEALING
// ============================================================================
/// Maximum full-board reshuffles while hunting for a board that holds a set.
pub const RESHUFFLE_LIMIT: usize = 32;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Render a duration as seconds with one decimal, as shown on the countdown.
pub fn seconds(duration: Duration) -> String {
    format!("{:.1}s", duration.as_secs_f32())
}
