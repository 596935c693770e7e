//! Supported sports and their mandatory market taxonomies.
//!
//! Every analysis request names a [`Sport`]. The sport decides which market
//! categories the model is asked to cover; football carries the richest
//! taxonomy, the other sports a shorter fixed list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A sport the analyzer can build a prompt for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    #[default]
    Football,
    Cricket,
    Basketball,
    Tennis,
    Hockey,
    Baseball,
    #[serde(rename = "table tennis")]
    TableTennis,
}

/// A named group of markets the model must analyse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketCategory {
    /// Category heading shown to the model.
    pub title: &'static str,
    /// Market names the model must cover inside this category.
    pub markets: &'static [&'static str],
}

const FOOTBALL: &[MarketCategory] = &[
    MarketCategory {
        title: "ফলাফল ও মূল বাজি",
        markets: &[
            "Home/Away Win",
            "Double Chance",
            "Draw in at least one half",
            "Win by margin (1,2,3,4+)",
        ],
    },
    MarketCategory {
        title: "গোল ও বিটিএস",
        markets: &[
            "Total Goals (O/U)",
            "Handicap",
            "Goal count",
            "BTS",
            "Winner+BTS",
            "Winner+O/U",
            "1st Goal team",
            "1st Goal type (Kick)",
            "Goal in both halves",
            "Goals in a row (2,3,4,5)",
            "One-sided scoring",
        ],
    },
    MarketCategory {
        title: "বিশেষ ঘটনা",
        markets: &[
            "Goal outside box",
            "Header goal",
            "Goal after corner (10s)",
            "Substitute to score",
            "Injury time goal",
            "Double Chance + BTS",
        ],
    },
    MarketCategory {
        title: "শৃঙ্খলা ও ফাউল",
        markets: &[
            "Red Card",
            "Penalty/Red Card combo",
            "Penalty Awarded",
            "No Penalty/Red Card",
            "Yellow Card (O/U)",
            "Both teams 1+ card",
            "Foul winner",
        ],
    },
    MarketCategory {
        title: "সেট পিস ও স্ট্যাটস",
        markets: &[
            "Corner Winner",
            "Total Corners (O/U)",
            "Last Corner Time",
            "Race to 7/9 Corners",
            "Shots on Target (O/U & Winner)",
            "Offside (O/U)",
            "Goal Kicks winner",
            "More Saves",
            "Shots towards bar/post",
        ],
    },
    MarketCategory {
        title: "টেকনোলজি ও বিবিধ",
        markets: &[
            "VAR Checked",
            "Medical team entry (2+)",
            "Ball in net but no goal",
        ],
    },
];

const CRICKET: &[MarketCategory] = &[
    MarketCategory {
        title: "ফলাফল ও টস",
        markets: &["Match Winner", "Toss Winner", "Toss Winner + Match Winner", "Tie"],
    },
    MarketCategory {
        title: "রান ও উইকেট",
        markets: &[
            "1st Innings Total (O/U)",
            "Powerplay Runs (O/U)",
            "Top Batter",
            "Top Bowler",
            "Highest Opening Partnership",
            "Fall of 1st Wicket (O/U)",
        ],
    },
    MarketCategory {
        title: "বিশেষ ঘটনা",
        markets: &[
            "Century Scored",
            "Fifty Scored",
            "Most Sixes",
            "Most Fours",
            "Run Out in Match",
            "Hat-trick",
        ],
    },
];

const BASKETBALL: &[MarketCategory] = &[
    MarketCategory {
        title: "ফলাফল ও হ্যান্ডিক্যাপ",
        markets: &["Moneyline", "Point Spread", "Winning Margin", "Overtime"],
    },
    MarketCategory {
        title: "পয়েন্ট",
        markets: &[
            "Total Points (O/U)",
            "1st Half Total (O/U)",
            "Highest Scoring Quarter",
            "Race to 20 Points",
            "Team Total (O/U)",
        ],
    },
    MarketCategory {
        title: "খেলোয়াড় ও স্ট্যাটস",
        markets: &[
            "Top Scorer",
            "Total Rebounds (O/U)",
            "Total Assists (O/U)",
            "Total 3-Pointers (O/U)",
            "Double-Double",
        ],
    },
];

const TENNIS: &[MarketCategory] = &[
    MarketCategory {
        title: "ফলাফল",
        markets: &["Match Winner", "Set Betting", "1st Set Winner", "Comeback Win"],
    },
    MarketCategory {
        title: "গেম ও সেট",
        markets: &[
            "Total Games (O/U)",
            "Game Handicap",
            "Total Sets (O/U)",
            "Tie-break in Match",
        ],
    },
    MarketCategory {
        title: "সার্ভ ও স্ট্যাটস",
        markets: &[
            "Aces (O/U)",
            "Double Faults (O/U)",
            "Break of Serve in 1st Set",
            "First Break of Serve",
        ],
    },
];

const HOCKEY: &[MarketCategory] = &[
    MarketCategory {
        title: "ফলাফল",
        markets: &["Match Winner", "Double Chance", "Draw", "Winning Margin"],
    },
    MarketCategory {
        title: "গোল",
        markets: &[
            "Total Goals (O/U)",
            "Both Teams to Score",
            "First Goal Team",
            "Highest Scoring Quarter",
        ],
    },
    MarketCategory {
        title: "শৃঙ্খলা ও সেট পিস",
        markets: &[
            "Penalty Corners (O/U)",
            "Penalty Stroke Awarded",
            "Green Card",
            "Yellow Card",
        ],
    },
];

const BASEBALL: &[MarketCategory] = &[
    MarketCategory {
        title: "ফলাফল ও রান লাইন",
        markets: &["Moneyline", "Run Line", "Extra Innings", "1st 5 Innings Winner"],
    },
    MarketCategory {
        title: "রান",
        markets: &[
            "Total Runs (O/U)",
            "Run in 1st Inning",
            "Highest Scoring Inning",
            "Team Total (O/U)",
        ],
    },
    MarketCategory {
        title: "খেলোয়াড় ও স্ট্যাটস",
        markets: &[
            "Home Run in Match",
            "Starting Pitcher Strikeouts (O/U)",
            "Total Hits (O/U)",
            "Errors in Match",
        ],
    },
];

const TABLE_TENNIS: &[MarketCategory] = &[
    MarketCategory {
        title: "ফলাফল",
        markets: &["Match Winner", "Correct Score (Sets)", "1st Game Winner"],
    },
    MarketCategory {
        title: "পয়েন্ট ও গেম",
        markets: &[
            "Total Games (O/U)",
            "Total Points (O/U)",
            "Game Handicap",
            "Deciding Game Played",
        ],
    },
];

impl Sport {
    /// All supported sports in display order.
    pub const ALL: [Sport; 7] = [
        Sport::Football,
        Sport::Cricket,
        Sport::Basketball,
        Sport::Tennis,
        Sport::Hockey,
        Sport::Baseball,
        Sport::TableTennis,
    ];

    /// Wire name, as echoed in the analysis response.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Sport::Football => "football",
            Sport::Cricket => "cricket",
            Sport::Basketball => "basketball",
            Sport::Tennis => "tennis",
            Sport::Hockey => "hockey",
            Sport::Baseball => "baseball",
            Sport::TableTennis => "table tennis",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Sport::Football => "Football",
            Sport::Cricket => "Cricket",
            Sport::Basketball => "Basketball",
            Sport::Tennis => "Tennis",
            Sport::Hockey => "Hockey",
            Sport::Baseball => "Baseball",
            Sport::TableTennis => "Table Tennis",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Sport::Football => "⚽",
            Sport::Cricket => "🏏",
            Sport::Basketball => "🏀",
            Sport::Tennis => "🎾",
            Sport::Hockey => "🏑",
            Sport::Baseball => "⚾",
            Sport::TableTennis => "🏓",
        }
    }

    /// Mandatory market categories for this sport.
    #[must_use]
    pub const fn taxonomy(self) -> &'static [MarketCategory] {
        match self {
            Sport::Football => FOOTBALL,
            Sport::Cricket => CRICKET,
            Sport::Basketball => BASKETBALL,
            Sport::Tennis => TENNIS,
            Sport::Hockey => HOCKEY,
            Sport::Baseball => BASEBALL,
            Sport::TableTennis => TABLE_TENNIS,
        }
    }

    /// Total number of mandatory markets across all categories.
    #[must_use]
    pub fn market_count(self) -> usize {
        self.taxonomy().iter().map(|c| c.markets.len()).sum()
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        Sport::ALL
            .into_iter()
            .find(|sport| sport.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownSport {
                name: s.to_string(),
                expected: Sport::ALL
                    .iter()
                    .map(|sport| sport.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Football".parse::<Sport>().unwrap(), Sport::Football);
        assert_eq!(" CRICKET ".parse::<Sport>().unwrap(), Sport::Cricket);
    }

    #[test]
    fn parses_table_tennis_separators() {
        assert_eq!("table tennis".parse::<Sport>().unwrap(), Sport::TableTennis);
        assert_eq!("table-tennis".parse::<Sport>().unwrap(), Sport::TableTennis);
        assert_eq!("table_tennis".parse::<Sport>().unwrap(), Sport::TableTennis);
    }

    #[test]
    fn rejects_unknown_sport() {
        let err = "curling".parse::<Sport>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("curling"));
        assert!(message.contains("table tennis"));
    }

    #[test]
    fn default_is_football() {
        assert_eq!(Sport::default(), Sport::Football);
    }

    #[test]
    fn football_carries_six_categories() {
        let taxonomy = Sport::Football.taxonomy();
        assert_eq!(taxonomy.len(), 6);
        assert!(taxonomy[0].markets.contains(&"Double Chance"));
        assert!(taxonomy[5].markets.contains(&"VAR Checked"));
    }

    #[test]
    fn every_sport_has_markets() {
        for sport in Sport::ALL {
            assert!(!sport.taxonomy().is_empty(), "{sport} has no categories");
            assert!(sport.market_count() > 0, "{sport} has no markets");
        }
    }

    #[test]
    fn serializes_table_tennis_with_space() {
        let json = serde_json::to_string(&Sport::TableTennis).unwrap();
        assert_eq!(json, "\"table tennis\"");
        let back: Sport = serde_json::from_str("\"basketball\"").unwrap();
        assert_eq!(back, Sport::Basketball);
    }
}
