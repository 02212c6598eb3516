/// The dealer's ruling on a claim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The selection was a set; the claimant scores.
    Point,
    /// The selection was not a set.
    Penalty,
    /// The claim was cancelled because the board changed under it,
    /// or there is no ruling at all.
    #[default]
    Irrelevant,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Point => write!(f, "point"),
            Self::Penalty => write!(f, "penalty"),
            Self::Irrelevant => write!(f, "irrelevant"),
        }
    }
}
