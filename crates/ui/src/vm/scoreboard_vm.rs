use quiz_core::model::ScoreboardEntry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreboardRowVm {
    pub rank_label: String,
    pub score_label: String,
    pub topic: Option<String>,
}

#[must_use]
pub fn map_scoreboard_rows(entries: &[ScoreboardEntry]) -> Vec<ScoreboardRowVm> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| ScoreboardRowVm {
            rank_label: format!("{}. {}", i + 1, entry.user.name),
            score_label: format!(
                "Score: {}/{} ({}%)",
                entry.score, entry.total, entry.percentage
            ),
            topic: entry.topic.clone().filter(|topic| !topic.trim().is_empty()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use quiz_core::model::{ScoreOwner, ScoreboardEntry};

    use super::map_scoreboard_rows;

    #[test]
    fn rows_are_ranked_in_order() {
        let entry = |name: &str, score, percentage, topic: Option<&str>| ScoreboardEntry {
            user: ScoreOwner {
                name: name.to_string(),
                email: None,
            },
            score,
            total: 5,
            percentage,
            topic: topic.map(str::to_string),
            difficulty: None,
        };
        let rows = map_scoreboard_rows(&[
            entry("Ada", 5, 100, Some("Rust")),
            entry("Bo", 2, 40, Some("  ")),
        ]);
        assert_eq!(rows[0].rank_label, "1. Ada");
        assert_eq!(rows[0].score_label, "Score: 5/5 (100%)");
        assert_eq!(rows[0].topic.as_deref(), Some("Rust"));
        assert_eq!(rows[1].rank_label, "2. Bo");
        assert_eq!(rows[1].topic, None);
    }
}
