use crate::core::handicap::{calculate_handicap, format_handicap, format_score, has_handicap};
use crate::domain::model::GolfIndex;
use crate::utils::error::{GolfError, LookupKind, Result};
use std::fmt;

/// Output of a query, one entry per printed line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<String>,
}

impl Report {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Read-only queries over a loaded [`GolfIndex`].
pub struct QueryEngine<'a> {
    index: &'a GolfIndex,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a GolfIndex) -> Self {
        Self { index }
    }

    pub fn places(&self) -> Report {
        let mut report = Report::default();
        for (location, clubs) in self.index.locations() {
            report.push(location);
            for club in clubs.keys() {
                report.push(format!("--{}", club));
            }
        }
        report
    }

    pub fn clubs(&self, location: &str) -> Result<Report> {
        let clubs = self
            .index
            .clubs_at(location)
            .ok_or_else(|| not_found(LookupKind::Location, location))?;

        let mut report = Report::default();
        for club in clubs.keys() {
            report.push(format!("--{}", club));
        }
        Ok(report)
    }

    /// Rounds at the first club named `club`, best score first. Equal scores
    /// keep file order.
    pub fn rounds(&self, club: &str) -> Result<Report> {
        let (location, rounds) = self
            .index
            .find_club(club)
            .ok_or_else(|| not_found(LookupKind::Club, club))?;
        tracing::debug!("Club {} resolved under {}", club, location);

        let mut sorted = rounds.to_vec();
        sorted.sort_by_key(|round| round.score);

        let mut report = Report::default();
        for round in &sorted {
            report.push(format!("{} : {}", round.player, format_score(round.score)));
        }
        Ok(report)
    }

    pub fn played(&self, player: &str) -> Result<Report> {
        let mut rounds = self.index.rounds_of(player);
        if rounds.is_empty() {
            return Err(not_found(LookupKind::Player, player));
        }

        rounds.sort_by(|a, b| a.score.cmp(&b.score).then_with(|| a.club.cmp(&b.club)));

        let scores: Vec<i32> = rounds.iter().map(|round| round.score).collect();
        let hcp = calculate_handicap(&scores);

        let mut report = Report::default();
        if has_handicap(hcp) {
            report.push(format!(
                "{} has a HCP of {} with following results:",
                player,
                format_handicap(hcp)
            ));
        } else {
            report.push(format!("{} has too few rounds for a handicap:", player));
        }

        for round in &rounds {
            report.push(format!(
                "{} : {} : {}",
                round.location,
                round.club,
                format_score(round.score)
            ));
        }
        Ok(report)
    }

    /// Never fails: a player without rounds is part of the comparison.
    pub fn compare(&self, first: &str, second: &str) -> Report {
        let a = PlayerStanding::of(self.index, first);
        let b = PlayerStanding::of(self.index, second);

        let mut report = Report::default();
        report.push(a.describe());
        report.push(b.describe());

        let verdict = match (a.has_handicap(), b.has_handicap()) {
            (false, false) => "Either hasn't played enough golf".to_string(),
            (false, true) => format!("{} has played better golf", b.player),
            (true, false) => format!("{} has played better golf", a.player),
            (true, true) if a.hcp < b.hcp => format!("{} has played better golf", a.player),
            (true, true) if b.hcp < a.hcp => format!("{} has played better golf", b.player),
            (true, true) => "Both have played as good golf".to_string(),
        };
        report.push(verdict);
        report
    }
}

struct PlayerStanding<'p> {
    player: &'p str,
    round_count: usize,
    hcp: f64,
}

impl<'p> PlayerStanding<'p> {
    fn of(index: &GolfIndex, player: &'p str) -> Self {
        let scores = index.scores_of(player);
        Self {
            player,
            round_count: scores.len(),
            hcp: calculate_handicap(&scores),
        }
    }

    fn has_handicap(&self) -> bool {
        has_handicap(self.hcp)
    }

    fn describe(&self) -> String {
        if self.round_count == 0 {
            format!("{} has played no rounds of golf", self.player)
        } else if !self.has_handicap() {
            format!(
                "{} has played {} rounds of golf, but hasn't played enough for a handicap",
                self.player, self.round_count
            )
        } else {
            format!(
                "{} has played {} rounds of golf, with HCP of {}",
                self.player,
                self.round_count,
                format_handicap(self.hcp)
            )
        }
    }
}

fn not_found(kind: LookupKind, name: &str) -> GolfError {
    GolfError::NotFound {
        kind,
        name: name.to_string(),
    }
}
