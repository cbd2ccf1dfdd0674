//! Property tests for the registry, wheel and chunking invariants.

use proptest::prelude::*;

use movie_night::domain::cycle::{Assessment, RolloverPlan};
use movie_night::domain::foundation::chunk_lines;
use movie_night::domain::nomination::VoteTally;
use movie_night::domain::registry::FallenRegistry;
use movie_night::domain::wheel::WheelList;

fn title_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 :']{0,24}"
}

fn tally_strategy() -> impl Strategy<Value = Vec<VoteTally>> {
    prop::collection::vec((title_strategy(), 0u32..6), 0..20).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(title, total_votes)| VoteTally { title, total_votes })
            .collect()
    })
}

proptest! {
    #[test]
    fn fallen_merge_is_idempotent(
        existing in prop::collection::vec(title_strategy(), 0..15),
        demoted in prop::collection::vec(title_strategy(), 0..15),
    ) {
        let mut once = FallenRegistry::from_rows(existing);
        once.merge(demoted.clone());
        let mut twice = once.clone();
        let added = twice.merge(demoted);

        prop_assert_eq!(added, 0);
        prop_assert_eq!(&once, &twice);

        let rows = once.to_rows();
        let mut sorted = rows.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(rows, sorted);
    }

    #[test]
    fn removing_a_valid_index_drops_exactly_that_title(
        titles in prop::collection::btree_set(title_strategy(), 1..15),
        pick in any::<prop::sample::Index>(),
    ) {
        let registry = FallenRegistry::from_rows(titles.iter().cloned());
        let sorted = registry.to_rows();
        let display_index = pick.index(sorted.len()) + 1;

        let (remaining, removed) = registry.without(display_index).unwrap();

        prop_assert_eq!(&removed, &sorted[display_index - 1]);
        prop_assert_eq!(remaining.len(), sorted.len() - 1);
        prop_assert!(!remaining.iter().any(|t| t == removed));
    }

    #[test]
    fn removing_out_of_range_fails(
        titles in prop::collection::btree_set(title_strategy(), 0..10),
        beyond in 1usize..5,
    ) {
        let registry = FallenRegistry::from_rows(titles.iter().cloned());

        prop_assert!(registry.without(0).is_err());
        prop_assert!(registry.without(registry.len() + beyond).is_err());
    }

    #[test]
    fn wheel_repeats_each_title_by_its_votes(tallies in tally_strategy()) {
        let list = WheelList::weighted(&tallies);

        let expected: Vec<String> = tallies
            .iter()
            .flat_map(|t| std::iter::repeat(t.title.clone()).take(t.total_votes as usize))
            .collect();
        prop_assert_eq!(list.entries(), expected.as_slice());
    }

    #[test]
    fn chunking_preserves_lines_and_respects_limit(
        lines in prop::collection::vec("[a-zA-Z0-9 ]{0,40}", 0..60),
        limit in 42usize..300,
    ) {
        let chunks = chunk_lines(&lines, limit);

        prop_assert_eq!(chunks.join("\n"), lines.join("\n"));
        prop_assert!(chunks.iter().all(|c| c.chars().count() <= limit));
    }

    #[test]
    fn chunks_never_exceed_limit_for_long_titles(
        titles in prop::collection::vec("[a-z]{1,120}", 1..20),
        limit in 1usize..100,
    ) {
        let chunks = WheelList::unweighted(titles.clone()).render_chunks(limit);

        prop_assert!(chunks.iter().all(|c| c.chars().count() <= limit));
        let rejoined: String = chunks.concat().replace('\n', "");
        prop_assert_eq!(rejoined, titles.concat());
    }

    #[test]
    fn promotion_and_demotion_partition_the_window(
        voters in prop::collection::btree_map(title_strategy(), 0usize..5, 0..20),
    ) {
        let plan = RolloverPlan::from_assessments(
            voters.iter().map(|(title, count)| Assessment::new(title.clone(), *count)),
        );

        for title in &plan.promoted {
            prop_assert!(voters[title] > 1);
            prop_assert!(!plan.demoted.contains(title));
        }
        for title in &plan.demoted {
            prop_assert!(voters[title] <= 1);
        }
        prop_assert_eq!(plan.promoted.len() + plan.demoted.len(), voters.len());
    }
}
