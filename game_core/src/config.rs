use std::str::FromStr;

use crate::params::Params;

/// Difficulty selection offered by the match variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Human readable label, used in history records and the match summary
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Key used by the difficulty `<select>` element
    pub fn key(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Unknown difficulty: {s}")),
        }
    }
}

/// Per-tick paddle and ball speeds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speeds {
    pub paddle: f32,
    pub ball: f32,
}

impl Speeds {
    pub const fn new(paddle: f32, ball: f32) -> Self {
        Self { paddle, ball }
    }

    const fn from_pair(pair: (f32, f32)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

/// Lookup table from difficulty to speeds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyTable {
    pub easy: Speeds,
    pub medium: Speeds,
    pub hard: Speeds,
}

impl DifficultyTable {
    pub fn speeds(&self, difficulty: Difficulty) -> Speeds {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: Speeds::from_pair(Params::EASY_SPEEDS),
            medium: Speeds::from_pair(Params::MEDIUM_SPEEDS),
            hard: Speeds::from_pair(Params::HARD_SPEEDS),
        }
    }
}

/// Which rule set a session plays by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Runs forever: no win condition, no timer, no history
    Endless,
    /// First to `win_score`, timed and recorded in the history log
    Match,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub spin_factor: f32,
    pub win_score: u32,
    pub difficulties: DifficultyTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: Params::PLAYFIELD_WIDTH,
            playfield_height: Params::PLAYFIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            spin_factor: Params::SPIN_FACTOR,
            win_score: Params::WIN_SCORE,
            difficulties: DifficultyTable::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speeds(&self, difficulty: Difficulty) -> Speeds {
        self.difficulties.speeds(difficulty)
    }
}

/// Settings read from the UI when a match starts
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSettings {
    pub difficulty: Difficulty,
    pub player_name: String,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            player_name: Params::DEFAULT_PLAYER_NAME.to_string(),
        }
    }
}

impl MatchSettings {
    /// Build settings from raw form values. Unknown difficulty keys fall back
    /// to medium and a blank name falls back to the placeholder.
    pub fn from_inputs(difficulty_key: &str, player_name: &str) -> Self {
        let difficulty = difficulty_key.parse().unwrap_or_else(|err: String| {
            log::warn!("{err}, falling back to {}", Difficulty::default().key());
            Difficulty::default()
        });

        Self {
            difficulty,
            player_name: normalize_player_name(player_name),
        }
    }
}

/// Trim a player name, substituting the placeholder when nothing is left
pub fn normalize_player_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Params::DEFAULT_PLAYER_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_table_defaults() {
        let config = Config::new();
        assert_eq!(config.speeds(Difficulty::Easy), Speeds::new(4.0, 3.0));
        assert_eq!(config.speeds(Difficulty::Medium), Speeds::new(6.0, 5.0));
        assert_eq!(config.speeds(Difficulty::Hard), Speeds::new(9.0, 7.0));
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "insane".parse::<Difficulty>(),
            Err("Unknown difficulty: insane".to_string())
        );
    }

    #[test]
    fn test_unknown_difficulty_falls_back_to_medium() {
        let settings = MatchSettings::from_inputs("nightmare", "Ana");
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert_eq!(settings.player_name, "Ana");
    }

    #[test]
    fn test_player_name_is_trimmed() {
        assert_eq!(normalize_player_name("  Bo  "), "Bo");
        assert_eq!(normalize_player_name("   "), Params::DEFAULT_PLAYER_NAME);
        assert_eq!(normalize_player_name(""), Params::DEFAULT_PLAYER_NAME);
    }

    #[test]
    fn test_custom_table_is_used() {
        let mut config = Config::new();
        config.difficulties.hard = Speeds::new(12.0, 10.0);
        assert_eq!(config.speeds(Difficulty::Hard).ball, 10.0);
    }
}
