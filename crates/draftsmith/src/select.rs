//! Topic selection and style draws.
use draftsmith_types::{
    catalog::{Category, STRUCTURES, VOICES},
    posts::{Selection, Style},
};
use rand::{Rng, seq::SliceRandom};

/// Pick a category uniformly, then a topic uniformly from it.
///
/// Returns `None` only for an empty bank or an empty category.
pub fn select_random<R: Rng>(bank: &[Category], rng: &mut R) -> Option<Selection> {
    let category = bank.choose(rng)?;
    let topic = category.topics.choose(rng)?;

    Some(Selection::categorized(*topic, category.name))
}

/// The topic after `produced` already published ones, numbered from 1.
///
/// `None` once every topic has been produced.
pub fn select_sequential(topics: &[&str], produced: usize) -> Option<Selection> {
    topics
        .get(produced)
        .map(|topic| Selection::sequenced(*topic, produced + 1, topics.len()))
}

/// Draw a voice and a structure uniformly.
pub fn draw_style<R: Rng>(rng: &mut R) -> Style {
    Style {
        voice: VOICES[rng.gen_range(0..VOICES.len())],
        structure: STRUCTURES[rng.gen_range(0..STRUCTURES.len())],
    }
}

#[cfg(test)]
mod tests {
    use draftsmith_types::catalog::{SERIES_TOPICS, TOPIC_BANK};
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn sequential_returns_the_topic_at_the_cursor() {
        let topics = ["alpha", "beta", "gamma"];

        for (index, topic) in topics.iter().enumerate() {
            let selection = select_sequential(&topics, index).unwrap();
            let sequence = selection.sequence.unwrap();

            assert_eq!(selection.topic, *topic);
            assert_eq!(sequence.number, index + 1);
            assert_eq!(sequence.total, 3);
            assert_eq!(selection.category, None);
        }
    }

    #[test]
    fn sequential_is_exhausted_past_the_end() {
        let topics = ["alpha", "beta"];

        assert_eq!(select_sequential(&topics, 2), None);
        assert_eq!(select_sequential(&topics, 250), None);
        assert_eq!(select_sequential(&[], 0), None);
        assert_eq!(select_sequential(SERIES_TOPICS, SERIES_TOPICS.len()), None);
    }

    #[test]
    fn random_pick_belongs_to_its_category() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let selection = select_random(TOPIC_BANK, &mut rng).unwrap();
            let category = selection.category.as_deref().unwrap();
            let entry = TOPIC_BANK
                .iter()
                .find(|entry| entry.name == category)
                .unwrap();

            assert!(entry.topics.contains(&selection.topic.as_str()));
            assert_eq!(selection.sequence, None);
        }
    }

    #[test]
    fn random_pick_reaches_every_category() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            seen.insert(select_random(TOPIC_BANK, &mut rng).unwrap().category.unwrap());
        }

        assert_eq!(seen.len(), TOPIC_BANK.len());
    }

    #[test]
    fn empty_bank_has_nothing_to_pick() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty = [Category {
            name: "Empty",
            topics: &[],
        }];

        assert_eq!(select_random(&[], &mut rng), None);
        assert_eq!(select_random(&empty, &mut rng), None);
    }

    #[test]
    fn style_comes_from_the_tables() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            let style = draw_style(&mut rng);
            assert!(VOICES.contains(&style.voice));
            assert!(STRUCTURES.contains(&style.structure));
        }
    }
}
