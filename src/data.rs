//! Hardcoded site data: the match schedule, the player leaderboard and the
//! aggregate season numbers. Everything here is immutable for the lifetime
//! of a page load.

#[derive(Clone, PartialEq)]
pub struct Team {
    pub name: &'static str,
    pub short: &'static str,
    pub rank: u32,
}

#[derive(Clone, Copy, PartialEq)]
pub enum MatchStatus {
    Live,
    Upcoming,
    Finished,
}

impl MatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Live => "LIVE",
            MatchStatus::Upcoming => "Скоро",
            MatchStatus::Finished => "Завершен",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            MatchStatus::Live => "match-status live",
            MatchStatus::Upcoming => "match-status upcoming",
            MatchStatus::Finished => "match-status finished",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Match {
    pub tournament: &'static str,
    pub time: &'static str,
    pub status: MatchStatus,
    pub team1: Team,
    pub team2: Team,
    pub score: Option<&'static str>,
    pub map: &'static str,
    pub prize: &'static str,
    pub viewers: &'static str,
}

impl Match {
    // Matches without a score yet show a plain "vs" between the teams.
    pub fn score_label(&self) -> &'static str {
        self.score.unwrap_or("vs")
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Clone, PartialEq)]
pub struct Player {
    pub name: &'static str,
    pub team: &'static str,
    pub rating: f64,
    pub kd: f64,
    pub hs: u32,
    pub adr: u32,
    pub maps: u32,
    pub trend: Trend,
    pub change: f64,
}

impl Player {
    pub fn change_label(&self) -> String {
        match self.trend {
            Trend::Up => format!("+{}", self.change),
            // Downward changes already carry their sign.
            Trend::Down => self.change.to_string(),
        }
    }

    pub fn trend_class(&self) -> &'static str {
        match self.trend {
            Trend::Up => "trend-chip up",
            Trend::Down => "trend-chip down",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct StatHighlight {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
    pub trend: Option<&'static str>,
}

pub const MATCHES: &[Match] = &[
    Match {
        tournament: "BLAST Premier",
        time: "19:00",
        status: MatchStatus::Live,
        team1: Team { name: "NAVI", short: "NAV", rank: 3 },
        team2: Team { name: "FaZe Clan", short: "FZ", rank: 1 },
        score: Some("1:0"),
        map: "Mirage",
        prize: "$250,000",
        viewers: "485K",
    },
    Match {
        tournament: "IEM Cologne",
        time: "21:30",
        status: MatchStatus::Upcoming,
        team1: Team { name: "G2 Esports", short: "G2", rank: 2 },
        team2: Team { name: "Team Vitality", short: "VIT", rank: 4 },
        score: None,
        map: "Inferno",
        prize: "$500,000",
        viewers: "0",
    },
    Match {
        tournament: "ESL Pro League",
        time: "Завершен",
        status: MatchStatus::Finished,
        team1: Team { name: "Astralis", short: "AST", rank: 8 },
        team2: Team { name: "MOUZ", short: "MOU", rank: 5 },
        score: Some("2:1"),
        map: "Nuke",
        prize: "$125,000",
        viewers: "320K",
    },
];

// Leaderboard over the last three months of play.
pub const PLAYERS: &[Player] = &[
    Player { name: "s1mple", team: "NAVI", rating: 1.35, kd: 1.42, hs: 62, adr: 89, maps: 156, trend: Trend::Up, change: 0.02 },
    Player { name: "ZywOo", team: "Vitality", rating: 1.32, kd: 1.38, hs: 58, adr: 85, maps: 142, trend: Trend::Up, change: 0.01 },
    Player { name: "NiKo", team: "G2", rating: 1.28, kd: 1.31, hs: 64, adr: 88, maps: 168, trend: Trend::Down, change: -0.01 },
    Player { name: "ropz", team: "FaZe", rating: 1.25, kd: 1.29, hs: 55, adr: 82, maps: 134, trend: Trend::Up, change: 0.03 },
];

pub const SEASON_STATS: &[StatHighlight] = &[
    StatHighlight { icon: "🎮", value: "2,847", label: "Про матчей", trend: Some("+12%") },
    StatHighlight { icon: "👥", value: "1,432", label: "Про игроков", trend: Some("+8%") },
    StatHighlight { icon: "🏆", value: "156", label: "Турниров", trend: Some("+24%") },
    StatHighlight { icon: "🎯", value: "1.24", label: "Средний рейтинг", trend: Some("+3%") },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_score_renders_as_vs() {
        let upcoming = MATCHES
            .iter()
            .find(|m| m.score.is_none())
            .expect("schedule should contain an unplayed match");
        assert_eq!(upcoming.score_label(), "vs");
    }

    #[test]
    fn present_score_renders_verbatim() {
        assert_eq!(MATCHES[0].score_label(), "1:0");
        assert_eq!(MATCHES[2].score_label(), "2:1");
    }

    #[test]
    fn status_labels_match_site_copy() {
        assert_eq!(MatchStatus::Live.label(), "LIVE");
        assert_eq!(MatchStatus::Upcoming.label(), "Скоро");
        assert_eq!(MatchStatus::Finished.label(), "Завершен");
    }

    #[test]
    fn live_badge_carries_live_class() {
        assert_eq!(MATCHES[0].status.badge_class(), "match-status live");
    }

    #[test]
    fn upward_trend_is_plus_prefixed() {
        assert_eq!(PLAYERS[0].change_label(), "+0.02");
        assert_eq!(PLAYERS[1].change_label(), "+0.01");
    }

    #[test]
    fn downward_trend_keeps_its_own_sign() {
        let niko = PLAYERS
            .iter()
            .find(|p| matches!(p.trend, Trend::Down))
            .expect("leaderboard should contain a falling player");
        assert_eq!(niko.change_label(), "-0.01");
    }
}
