use serde::Serialize;
use set_core::*;

/// Final standings of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub winners: Vec<PlayerId>,
    /// Indexed by player.
    pub scores: Vec<Score>,
}

impl Summary {
    pub fn new(winners: Vec<PlayerId>, scores: Vec<Score>) -> Self {
        Self { winners, scores }
    }
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn renders_as_json() {
        let summary = Summary::new(vec![0, 1], vec![5, 5, 3]);
        assert_eq!(summary.to_json().unwrap(), r#"{"winners":[0,1],"scores":[5,5,3]}"#);
    }
}
