use serde::{Deserialize, Serialize};

/// A user's recorded judgment about another user. Decisions are permanent:
/// the first disposition written for an ordered pair wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    Interested,
    NotInterested,
}

impl Disposition {
    pub fn as_str(self) -> &'static str {
        match self {
            Disposition::Interested => "interested",
            Disposition::NotInterested => "not_interested",
        }
    }
}
