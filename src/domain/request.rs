//! Match request submitted by the form.

use serde::Serialize;

use super::error::DomainError;
use super::sport::Sport;

/// A validated request to analyse one fixture.
///
/// Both team identifiers are guaranteed non-empty after trimming. A blank
/// league is normalised to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    home_team: String,
    away_team: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    league: Option<String>,
    sport: Sport,
}

impl MatchRequest {
    /// Create a football request without a league.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyHomeTeam`] or [`DomainError::EmptyAwayTeam`]
    /// when either identifier is blank.
    pub fn try_new(home: impl Into<String>, away: impl Into<String>) -> Result<Self, DomainError> {
        let home_team = home.into().trim().to_string();
        if home_team.is_empty() {
            return Err(DomainError::EmptyHomeTeam);
        }
        let away_team = away.into().trim().to_string();
        if away_team.is_empty() {
            return Err(DomainError::EmptyAwayTeam);
        }
        Ok(Self {
            home_team,
            away_team,
            league: None,
            sport: Sport::default(),
        })
    }

    /// Attach a league or tournament. Blank input clears it.
    #[must_use]
    pub fn with_league(mut self, league: impl Into<String>) -> Self {
        let league = league.into().trim().to_string();
        self.league = (!league.is_empty()).then_some(league);
        self
    }

    /// Select the sport.
    #[must_use]
    pub const fn with_sport(mut self, sport: Sport) -> Self {
        self.sport = sport;
        self
    }

    #[must_use]
    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    #[must_use]
    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    #[must_use]
    pub fn league(&self) -> Option<&str> {
        self.league.as_deref()
    }

    #[must_use]
    pub const fn sport(&self) -> Sport {
        self.sport
    }

    /// Short `Home vs Away` label for logs and headers.
    #[must_use]
    pub fn fixture(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}
