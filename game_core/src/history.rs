use crate::params::Params;

/// Summary of one completed, recorded match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub player_name: String,
    pub opponent_label: String,
    pub left_score: u32,
    pub right_score: u32,
    pub elapsed: String, // MM:SS.D
    pub difficulty_label: String,
}

impl HistoryRecord {
    pub fn new(
        player_name: impl Into<String>,
        left_score: u32,
        right_score: u32,
        elapsed: impl Into<String>,
        difficulty_label: impl Into<String>,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            opponent_label: Params::OPPONENT_LABEL.to_string(),
            left_score,
            right_score,
            elapsed: elapsed.into(),
            difficulty_label: difficulty_label.into(),
        }
    }

    /// One-line text shown in the history list
    pub fn line(&self) -> String {
        format!(
            "{} {} : {} {} | {} | {}",
            self.player_name,
            self.left_score,
            self.right_score,
            self.opponent_label,
            self.elapsed,
            self.difficulty_label
        )
    }

    /// End-of-match message shown to the player
    pub fn summary(&self) -> String {
        format!(
            "Match over!\n{}: {}  {}: {}\nTime: {}\nDifficulty: {}",
            self.player_name,
            self.left_score,
            self.opponent_label,
            self.right_score,
            self.elapsed,
            self.difficulty_label
        )
    }
}

/// Append-only match log, newest first
#[derive(Debug, Clone, Default)]
pub struct MatchHistory {
    records: Vec<HistoryRecord>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: HistoryRecord) {
        self.records.insert(0, record);
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_newest_first() {
        let mut history = MatchHistory::new();
        history.record(HistoryRecord::new("Ana", 5, 2, "01:10.4", "Easy"));
        history.record(HistoryRecord::new("Bo", 1, 5, "00:42.0", "Hard"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.records()[0].player_name, "Bo");
        assert_eq!(history.records()[1].player_name, "Ana");
        assert_eq!(history.latest().map(|r| r.right_score), Some(5));
    }

    #[test]
    fn test_record_defaults_opponent_label() {
        let record = HistoryRecord::new("Ana", 0, 5, "00:30.0", "Medium");
        assert_eq!(record.opponent_label, "AI");
        assert_eq!(record.line(), "Ana 0 : 5 AI | 00:30.0 | Medium");
    }

    #[test]
    fn test_summary_mentions_scores_time_and_difficulty() {
        let summary = HistoryRecord::new("Ana", 3, 5, "02:00.1", "Hard").summary();
        assert!(summary.contains("Ana: 3"));
        assert!(summary.contains("AI: 5"));
        assert!(summary.contains("02:00.1"));
        assert!(summary.contains("Hard"));
    }

    #[test]
    fn test_empty_history() {
        let history = MatchHistory::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
