//! Live coordination of a set table.
//!
//! A single dealer referees any number of players racing to claim sets on a
//! shared board. Each player runs in its own task, optionally driven by a
//! robot, and the dealer judges their claims one at a time.
//!
//! ## Architecture
//!
//! - [`Room`] — Builds a game from a [`Config`] and starts the dealer
//! - [`Handle`] — Key presses in, termination, final [`Summary`] out
//! - [`Dealer`] — Deals, runs the round [`Countdown`], judges claims
//! - [`Actor`] — Per-player selection loop, waits on its [`Verdict`]
//! - [`Robot`] — Synthesizes key presses for seats without a human
//!
//! ## Shared state
//!
//! - [`Table`] — Board, board-ready signal, and the [`Screen`]
//! - [`Seat`] — One player's tokens, queued presses, score, and wake state
//! - [`Claims`] — FIFO of completed selections awaiting a ruling
mod actor;
mod claims;
mod config;
mod dealer;
mod handle;
mod robot;
mod room;
mod screen;
mod seat;
mod summary;
mod table;
mod timer;
mod verdict;

pub use actor::*;
pub use claims::*;
pub use config::*;
pub use dealer::*;
pub use handle::*;
pub use robot::*;
pub use room::*;
pub use screen::*;
pub use seat::*;
pub use summary::*;
pub use table::*;
pub use timer::*;
pub use verdict::*;
