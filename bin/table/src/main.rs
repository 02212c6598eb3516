//! Set Table Binary
//!
//! Runs one game on the terminal. Seats below `--humans` take presses from
//! stdin as `<player> <slot>` lines; the rest are played by robots.
//! Type `q` or hit Ctrl-C to end the game early. The final standings are
//! printed as JSON.
mod args;
mod input;

use args::Args;
use clap::Parser;
use input::Command;
use set_gameroom::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    set_core::log();
    let config = Config::from(Args::parse());
    let handle = Room::new(config)?.spawn();
    interrupt(handle.clone());
    listen(handle.clone());
    let summary = handle.join().await?;
    println!("{}", summary.to_json()?);
    Ok(())
}

/// Ctrl-C wraps the game up instead of killing the process.
fn interrupt(handle: Handle) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, wrapping up the game");
            handle.terminate();
        }
    });
}

/// Feeds stdin lines into the table until the game ends.
fn listen(handle: Handle) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else {
                break;
            };
            if handle.is_terminated() {
                break;
            }
            match Command::parse(&line) {
                Some(Command::Quit) => {
                    handle.terminate();
                    break;
                }
                Some(Command::Press(player, slot)) => {
                    if !handle.press(player, slot) {
                        log::debug!("press {} {} ignored", player, slot);
                    }
                }
                None => log::warn!("expected `<player> <slot>` or `q`, got {:?}", line),
            }
        }
    });
}
