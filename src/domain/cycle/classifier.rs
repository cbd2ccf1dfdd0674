//! Rollover classification.
//!
//! Every nomination that survives exclusion is either promoted (carried to
//! the next wheel) or demoted (retired to the fallen registry). The decision
//! depends only on how many distinct members reacted to it.

use std::collections::BTreeSet;

use crate::domain::nomination::PROMOTION_THRESHOLD;

/// Outcome for a single nomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Promoted,
    Demoted,
}

impl Classification {
    pub fn from_distinct_voters(distinct_voters: usize) -> Self {
        if distinct_voters > PROMOTION_THRESHOLD {
            Classification::Promoted
        } else {
            Classification::Demoted
        }
    }
}

/// A nomination with its distinct voter count, ready to classify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub title: String,
    pub distinct_voters: usize,
}

impl Assessment {
    pub fn new(title: impl Into<String>, distinct_voters: usize) -> Self {
        Self {
            title: title.into(),
            distinct_voters,
        }
    }

    pub fn classification(&self) -> Classification {
        Classification::from_distinct_voters(self.distinct_voters)
    }
}

/// Result of classifying one window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolloverPlan {
    /// Ascending lexicographic order, no duplicates.
    pub promoted: Vec<String>,
    /// Ascending lexicographic order, no duplicates.
    pub demoted: Vec<String>,
}

impl RolloverPlan {
    /// Partitions assessments into promoted and demoted titles.
    ///
    /// A title assessed more than once is promoted if any assessment
    /// promotes it.
    pub fn from_assessments<I>(assessments: I) -> Self
    where
        I: IntoIterator<Item = Assessment>,
    {
        let mut promoted = BTreeSet::new();
        let mut demoted = BTreeSet::new();

        for assessment in assessments {
            match assessment.classification() {
                Classification::Promoted => {
                    demoted.remove(&assessment.title);
                    promoted.insert(assessment.title);
                }
                Classification::Demoted => {
                    if !promoted.contains(&assessment.title) {
                        demoted.insert(assessment.title);
                    }
                }
            }
        }

        Self {
            promoted: promoted.into_iter().collect(),
            demoted: demoted.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_voters_promote() {
        assert_eq!(Classification::from_distinct_voters(2), Classification::Promoted);
    }

    #[test]
    fn zero_or_one_voter_demotes() {
        assert_eq!(Classification::from_distinct_voters(0), Classification::Demoted);
        assert_eq!(Classification::from_distinct_voters(1), Classification::Demoted);
    }

    #[test]
    fn plan_sorts_by_title_not_votes() {
        let plan = RolloverPlan::from_assessments(vec![
            Assessment::new("Zardoz", 5),
            Assessment::new("Hausu", 2),
            Assessment::new("Hackers", 1),
            Assessment::new("Arachnophobia", 0),
        ]);
        assert_eq!(plan.promoted, vec!["Hausu", "Zardoz"]);
        assert_eq!(plan.demoted, vec!["Arachnophobia", "Hackers"]);
    }

    #[test]
    fn promotion_wins_over_demotion_for_same_title() {
        let plan = RolloverPlan::from_assessments(vec![
            Assessment::new("Hausu", 1),
            Assessment::new("Hausu", 2),
            Assessment::new("Hausu", 0),
        ]);
        assert_eq!(plan.promoted, vec!["Hausu"]);
        assert!(plan.demoted.is_empty());
    }
}
