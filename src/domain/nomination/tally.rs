//! Reaction tally over the current window.
//!
//! Turns the raw window (one entry per chat message) into nominations keyed
//! by title, and computes the two numbers the rest of the engine needs:
//! total votes (sum of reaction counts) and distinct voters (union of the
//! members behind those reactions).

use std::collections::{HashMap, HashSet};

use super::{ExclusionSet, Reaction, WindowMessage};
use crate::domain::foundation::{MessageId, VoterId};

/// A nomination needs strictly more distinct voters than this to be promoted.
pub const PROMOTION_THRESHOLD: usize = 1;

/// One chat message carrying a nomination title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub message_id: MessageId,
    pub reactions: Vec<Reaction>,
}

/// A title nominated in the current window.
///
/// Posting the same title twice yields one nomination with two postings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nomination {
    pub title: String,
    pub postings: Vec<Posting>,
}

impl Nomination {
    /// Sum of all reaction counts, saturating at `u32::MAX`.
    ///
    /// The same member reacting with two emojis counts twice.
    pub fn total_votes(&self) -> u32 {
        self.reactions()
            .fold(0u32, |total, (_, r)| total.saturating_add(r.count))
    }

    pub fn has_reactions(&self) -> bool {
        self.postings.iter().any(|p| !p.reactions.is_empty())
    }

    /// Every reaction together with the message it is attached to.
    pub fn reactions(&self) -> impl Iterator<Item = (MessageId, &Reaction)> {
        self.postings
            .iter()
            .flat_map(|p| p.reactions.iter().map(move |r| (p.message_id, r)))
    }
}

/// Groups member messages into nominations, dropping excluded titles.
///
/// Order is the order in which each title first appears in `messages`.
pub fn collect_nominations(messages: &[WindowMessage], exclusions: &ExclusionSet) -> Vec<Nomination> {
    let mut nominations: Vec<Nomination> = Vec::new();
    let mut by_title: HashMap<&str, usize> = HashMap::new();

    for message in messages.iter().filter(|m| m.is_nomination()) {
        if exclusions.contains(&message.content) {
            continue;
        }
        let posting = Posting {
            message_id: message.id,
            reactions: message.reactions.clone(),
        };
        match by_title.get(message.content.as_str()) {
            Some(&idx) => nominations[idx].postings.push(posting),
            None => {
                by_title.insert(message.content.as_str(), nominations.len());
                nominations.push(Nomination {
                    title: message.content.clone(),
                    postings: vec![posting],
                });
            }
        }
    }

    nominations
}

/// Vote total for one nomination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteTally {
    pub title: String,
    pub total_votes: u32,
}

/// Tallies every nomination that received at least one reaction, in window order.
pub fn tally(nominations: &[Nomination]) -> Vec<VoteTally> {
    nominations
        .iter()
        .filter(|n| n.has_reactions())
        .map(|n| VoteTally {
            title: n.title.clone(),
            total_votes: n.total_votes(),
        })
        .collect()
}

/// Orders tallies by descending vote count; ties keep window order.
pub fn ranked(mut tallies: Vec<VoteTally>) -> Vec<VoteTally> {
    tallies.sort_by(|a, b| b.total_votes.cmp(&a.total_votes));
    tallies
}

/// Union of the members who reacted to one nomination.
///
/// Only the promotion threshold matters, so callers stop feeding voters as
/// soon as [`VoterUnion::is_decided`] reports true.
#[derive(Debug, Clone, Default)]
pub struct VoterUnion {
    voters: HashSet<VoterId>,
}

impl VoterUnion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend<I: IntoIterator<Item = VoterId>>(&mut self, voters: I) {
        self.voters.extend(voters);
    }

    /// True once the union is past the promotion threshold.
    pub fn is_decided(&self) -> bool {
        self.voters.len() > PROMOTION_THRESHOLD
    }

    pub fn count(&self) -> usize {
        self.voters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nomination::MessageOrigin;

    fn msg(id: u64, title: &str) -> WindowMessage {
        WindowMessage::nomination(MessageId::new(id), title)
    }

    #[test]
    fn bot_and_command_messages_are_dropped() {
        let window = vec![
            msg(1, "Hausu").with_reaction("👍", 1),
            msg(2, "Next Week on the Wheel:").with_origin(MessageOrigin::Bot),
            msg(3, ".rollover").with_origin(MessageOrigin::Command),
        ];
        let noms = collect_nominations(&window, &ExclusionSet::new());
        assert_eq!(noms.len(), 1);
        assert_eq!(noms[0].title, "Hausu");
    }

    #[test]
    fn excluded_titles_are_dropped() {
        let window = vec![msg(1, "Hausu"), msg(2, "Hackers")];
        let exclusions: ExclusionSet = ["Hausu"].into_iter().collect();
        let noms = collect_nominations(&window, &exclusions);
        assert_eq!(noms.len(), 1);
        assert_eq!(noms[0].title, "Hackers");
    }

    #[test]
    fn repeated_title_merges_into_first_position() {
        let window = vec![
            msg(1, "Hausu").with_reaction("👍", 1),
            msg(2, "Hackers").with_reaction("👍", 1),
            msg(3, "Hausu").with_reaction("😀", 2),
        ];
        let noms = collect_nominations(&window, &ExclusionSet::new());
        assert_eq!(noms.len(), 2);
        assert_eq!(noms[0].title, "Hausu");
        assert_eq!(noms[0].postings.len(), 2);
        assert_eq!(noms[0].total_votes(), 3);
    }

    #[test]
    fn huge_reaction_counts_saturate() {
        let window = vec![
            msg(1, "Hausu").with_reaction("👍", u32::MAX),
            msg(2, "Hausu").with_reaction("😀", 5),
        ];
        let noms = collect_nominations(&window, &ExclusionSet::new());
        assert_eq!(noms[0].total_votes(), u32::MAX);
    }

    #[test]
    fn tally_skips_unreacted_nominations() {
        let window = vec![
            msg(1, "Hausu").with_reaction("👍", 3),
            msg(2, "Lair of the White Worm"),
            msg(3, "Hackers").with_reaction("👍", 1),
        ];
        let tallies = tally(&collect_nominations(&window, &ExclusionSet::new()));
        assert_eq!(
            tallies,
            vec![
                VoteTally { title: "Hausu".into(), total_votes: 3 },
                VoteTally { title: "Hackers".into(), total_votes: 1 },
            ]
        );
    }

    #[test]
    fn ranked_is_descending_and_stable() {
        let tallies = vec![
            VoteTally { title: "A".into(), total_votes: 1 },
            VoteTally { title: "B".into(), total_votes: 3 },
            VoteTally { title: "C".into(), total_votes: 1 },
        ];
        let titles: Vec<_> = ranked(tallies).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
    }

    #[test]
    fn voter_union_decides_past_threshold() {
        let mut union = VoterUnion::new();
        union.extend([VoterId::new(1), VoterId::new(1)]);
        assert!(!union.is_decided());
        union.extend([VoterId::new(2)]);
        assert!(union.is_decided());
        assert_eq!(union.count(), 2);
    }
}
