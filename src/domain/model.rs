use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One player's score, relative to par, at one club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub player: String,
    pub score: i32,
}

/// A round found while scanning for a player, tagged with where it was played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRound {
    pub location: String,
    pub club: String,
    pub score: i32,
}

pub type ClubRounds = BTreeMap<String, Vec<Round>>;

/// location -> club -> rounds in file order.
///
/// Keys iterate in lexicographic order, which is the order `places`, `clubs`
/// and the club search in `rounds` observe. A location only comes into being
/// together with its first club, and rounds are append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GolfIndex {
    locations: BTreeMap<String, ClubRounds>,
}

impl GolfIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, location: &str, club: &str, round: Round) {
        self.locations
            .entry(location.to_string())
            .or_default()
            .entry(club.to_string())
            .or_default()
            .push(round);
    }

    pub fn locations(&self) -> impl Iterator<Item = (&str, &ClubRounds)> {
        self.locations
            .iter()
            .map(|(name, clubs)| (name.as_str(), clubs))
    }

    pub fn clubs_at(&self, location: &str) -> Option<&ClubRounds> {
        self.locations.get(location)
    }

    /// First club with this name in location order. The same club name under
    /// a later location is never reached.
    pub fn find_club(&self, club: &str) -> Option<(&str, &[Round])> {
        self.locations
            .iter()
            .find_map(|(location, clubs)| {
                clubs
                    .get(club)
                    .map(|rounds| (location.as_str(), rounds.as_slice()))
            })
    }

    pub fn rounds_of(&self, player: &str) -> Vec<PlayerRound> {
        let mut found = Vec::new();
        for (location, clubs) in &self.locations {
            for (club, rounds) in clubs {
                for round in rounds.iter().filter(|r| r.player == player) {
                    found.push(PlayerRound {
                        location: location.clone(),
                        club: club.clone(),
                        score: round.score,
                    });
                }
            }
        }
        found
    }

    pub fn scores_of(&self, player: &str) -> Vec<i32> {
        self.locations
            .values()
            .flat_map(|clubs| clubs.values())
            .flatten()
            .filter(|round| round.player == player)
            .map(|round| round.score)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn round_count(&self) -> usize {
        self.locations
            .values()
            .flat_map(|clubs| clubs.values())
            .map(Vec::len)
            .sum()
    }
}
