use set_core::*;

/// One line typed on stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Press(PlayerId, Slot),
    Quit,
}

impl Command {
    /// `<player> <slot>` presses a key, `q` ends the game.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some(q), None, None) if q.eq_ignore_ascii_case("q") => Some(Self::Quit),
            (Some(player), Some(slot), None) => {
                Some(Self::Press(player.parse().ok()?, slot.parse().ok()?))
            }
            _ => None,
        }
    }
}
