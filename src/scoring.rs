//! Net upvote aggregation
//!
//! A [`ScoreBoard`] maps issue numbers to their net score (`+1` reactions
//! minus `-1` reactions). It never holds an entry whose score is zero: an
//! issue only appears while its running score is non-zero.

use std::collections::HashMap;
use upvotes_github::{Issue, Reaction};

/// One ranked row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub issue_number: u64,
    pub title: Option<String>,
    pub score: i64,
}

#[derive(Debug, Default, Clone)]
pub struct ScoreBoard {
    scores: HashMap<u64, i64>,
    titles: HashMap<u64, String>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single reaction to an issue's running score
    pub fn apply(&mut self, issue_number: u64, reaction: &Reaction) {
        let delta = reaction.kind().score_delta();
        if delta == 0 {
            return;
        }

        let score = self.scores.entry(issue_number).or_insert(0);
        *score += delta;
        if *score == 0 {
            self.scores.remove(&issue_number);
        }
    }

    /// Apply every reaction of an issue and remember its title for reporting
    pub fn record(&mut self, issue: &Issue, reactions: &[Reaction]) {
        if !issue.title.is_empty() {
            self.titles.insert(issue.number, issue.title.clone());
        }
        for reaction in reactions {
            self.apply(issue.number, reaction);
        }
    }

    pub fn score(&self, issue_number: u64) -> Option<i64> {
        self.scores.get(&issue_number).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Entries sorted by descending score; ties go to the lower issue number
    pub fn ranked(&self) -> Vec<ScoreEntry> {
        let mut entries: Vec<ScoreEntry> = self
            .scores
            .iter()
            .map(|(&issue_number, &score)| ScoreEntry {
                issue_number,
                title: self.titles.get(&issue_number).cloned(),
                score,
            })
            .collect();

        entries.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.issue_number.cmp(&b.issue_number))
        });
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reactions(contents: &[&str]) -> Vec<Reaction> {
        contents.iter().map(|c| Reaction::new(*c)).collect()
    }

    #[test]
    fn test_net_score() {
        let mut board = ScoreBoard::new();
        board.record(&Issue::new(10, "ten"), &reactions(&["+1", "+1", "-1"]));
        board.record(&Issue::new(20, "twenty"), &reactions(&["+1", "+1"]));
        board.record(&Issue::new(30, "thirty"), &[]);

        assert_eq!(board.score(10), Some(1));
        assert_eq!(board.score(20), Some(2));
        assert_eq!(board.score(30), None);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_other_reactions_are_ignored() {
        let mut board = ScoreBoard::new();
        board.record(
            &Issue::new(1, "one"),
            &reactions(&["heart", "rocket", "eyes", "laugh", "hooray", "confused"]),
        );
        assert!(board.is_empty());

        board.record(&Issue::new(2, "two"), &reactions(&["heart", "+1", "rocket"]));
        assert_eq!(board.score(2), Some(1));
    }

    #[test]
    fn test_negative_scores_are_kept() {
        let mut board = ScoreBoard::new();
        board.record(&Issue::new(7, "seven"), &reactions(&["-1", "-1", "+1"]));
        assert_eq!(board.score(7), Some(-1));
    }

    #[test]
    fn test_cancelled_score_leaves_no_entry() {
        let mut board = ScoreBoard::new();
        board.record(&Issue::new(4, "four"), &reactions(&["+1", "-1"]));
        assert_eq!(board.score(4), None);
        assert!(board.ranked().is_empty());

        board.record(&Issue::new(5, "five"), &reactions(&["-1", "+1", "+1", "-1"]));
        assert!(board.is_empty());
    }

    #[test]
    fn test_order_independent() {
        let contents = ["+1", "-1", "heart", "+1", "+1", "-1", "eyes"];
        let mut forward = ScoreBoard::new();
        forward.record(&Issue::new(1, "one"), &reactions(&contents));

        let mut reversed_contents = contents;
        reversed_contents.reverse();
        let mut backward = ScoreBoard::new();
        backward.record(&Issue::new(1, "one"), &reactions(&reversed_contents));

        let mut rotated_contents = contents;
        rotated_contents.rotate_left(3);
        let mut rotated = ScoreBoard::new();
        rotated.record(&Issue::new(1, "one"), &reactions(&rotated_contents));

        assert_eq!(forward.score(1), Some(1));
        assert_eq!(forward.score(1), backward.score(1));
        assert_eq!(forward.score(1), rotated.score(1));
    }

    #[test]
    fn test_ranked_descending_with_number_tiebreak() {
        let mut board = ScoreBoard::new();
        board.record(&Issue::new(10, "ten"), &reactions(&["+1"]));
        board.record(&Issue::new(3, "three"), &reactions(&["+1", "+1", "+1"]));
        board.record(&Issue::new(8, "eight"), &reactions(&["-1"]));
        board.record(&Issue::new(2, "two"), &reactions(&["+1"]));

        let order: Vec<(u64, i64)> = board
            .ranked()
            .iter()
            .map(|entry| (entry.issue_number, entry.score))
            .collect();
        assert_eq!(order, vec![(3, 3), (2, 1), (10, 1), (8, -1)]);
    }

    #[test]
    fn test_ranked_entries_carry_titles() {
        let mut board = ScoreBoard::new();
        board.record(&Issue::new(1, "Crash on start"), &reactions(&["+1"]));
        board.apply(2, &Reaction::new("+1"));

        let ranked = board.ranked();
        assert_eq!(ranked[0].title.as_deref(), Some("Crash on start"));
        assert_eq!(ranked[1].title, None);
    }
}
