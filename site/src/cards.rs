//! List-to-card mapping.
//!
//! [`render_cards`] is the one place where a static list becomes the ordered
//! sequence of cards a section draws. Order is preserved and each card
//! carries its entry's natural key, which the components hand to `<For>` so
//! identity survives re-renders.

use std::fmt::Debug;
use std::hash::Hash;

use crate::motion::MotionSpec;

/// A static content record that drives list rendering.
pub trait Entry {
    /// Natural unique field (title, step number, label).
    type Key: Clone + Eq + Hash + Debug + 'static;

    /// The entry's key; must be unique within its list.
    fn key(&self) -> Self::Key;

    /// Entrance intent for this entry's card, if it animates.
    fn motion(&self) -> Option<MotionSpec> {
        None
    }
}

/// One renderable card: the entry plus its identity and motion.
#[derive(Clone, Debug, PartialEq)]
pub struct Card<E: Entry> {
    /// Stable identity for keyed rendering
    pub key: E::Key,
    /// Position in the source list, 0-based
    pub index: usize,
    /// The source record
    pub entry: E,
    /// Entrance intent, `None` for static cards
    pub motion: Option<MotionSpec>,
}

/// Map entries to cards, preserving input order.
pub fn render_cards<E>(entries: &[E]) -> Vec<Card<E>>
where
    E: Entry + Clone,
{
    let cards: Vec<Card<E>> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| Card {
            key: entry.key(),
            index,
            entry: entry.clone(),
            motion: entry.motion(),
        })
        .collect();

    debug_assert!(
        keys_unique(&cards),
        "card keys must be unique within a list"
    );
    cards
}

fn keys_unique<E: Entry>(cards: &[Card<E>]) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(cards.len());
    cards.iter().all(|card| seen.insert(card.key.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FEATURES, FILTER_CHIPS, STEPS};
    use pretty_assertions::assert_eq;

    #[test]
    fn feature_cards_follow_array_order() {
        let cards = render_cards(&FEATURES);
        assert_eq!(cards.len(), 3);

        let keys: Vec<_> = cards.iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec!["Plan marketplace", "Royalties for architects", "Builder-ready"]
        );
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.index, i);
            assert_eq!(card.entry, FEATURES[i]);
        }
    }

    #[test]
    fn step_cards_keyed_by_number_ascending() {
        let cards = render_cards(&STEPS);
        let keys: Vec<u8> = cards.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec![1, 2, 3, 4]);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn step_cards_stagger_their_reveal() {
        let delays: Vec<u128> = render_cards(&STEPS)
            .iter()
            .filter_map(|c| c.motion)
            .map(|m| m.delay.as_millis())
            .collect();
        assert_eq!(delays, vec![50, 100, 150, 200]);
    }

    #[test]
    fn keys_are_unique_in_every_list() {
        assert!(keys_unique(&render_cards(&FEATURES)));
        assert!(keys_unique(&render_cards(&STEPS)));
        assert!(keys_unique(&render_cards(&FILTER_CHIPS)));
    }

    #[test]
    fn empty_list_yields_no_cards() {
        let cards = render_cards::<crate::content::Step>(&[]);
        assert!(cards.is_empty());
    }
}
