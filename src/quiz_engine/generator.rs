use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::warn;

use crate::quiz_engine::{
    catalog::Catalog,
    deck::CountryDeck,
    models::Question,
};

const DISTRACTORS: usize = 3;

/// Build the session RNG: seeded when a seed is given, entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Draw `count` distinct countries and turn each into a four-option question.
///
/// A `count` larger than the catalog is clamped to the catalog size.
pub fn generate_questions<R: Rng>(catalog: &Catalog, count: usize, rng: &mut R) -> Vec<Question> {
    let count = if count > catalog.len() {
        warn!(requested = count, available = catalog.len(), "question count clamped to catalog size");
        catalog.len()
    } else {
        count
    };

    let mut deck = CountryDeck::new_shuffled(catalog, rng);
    let picks = deck.deal_n(count);

    picks
        .into_iter()
        .map(|(idx, correct)| {
            let mut distractors = CountryDeck::without(catalog, idx, rng);
            let [a, b, c]: [String; DISTRACTORS] = std::array::from_fn(|_| {
                distractors
                    .deal()
                    .map(|(_, d)| d.name.clone())
                    .unwrap_or_default()
            });

            let mut options = [a, b, c, correct.name.clone()];
            for i in (1..options.len()).rev() {
                let j = rng.gen_range(0..=i);
                options.swap(i, j);
            }

            Question {
                correct_answer: correct.clone(),
                options,
                flag_url: correct.flag_url(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn count_is_clamped_to_catalog_size() {
        let catalog = Catalog::builtin();
        let mut rng = make_rng(Some(3));
        let questions = generate_questions(&catalog, 500, &mut rng);
        assert_eq!(questions.len(), catalog.len());

        let distinct: HashSet<_> = questions.iter().map(|q| &q.correct_answer.iso_code).collect();
        assert_eq!(distinct.len(), catalog.len());
    }

    #[test]
    fn zero_count_yields_no_questions() {
        let mut rng = make_rng(Some(3));
        assert!(generate_questions(&Catalog::builtin(), 0, &mut rng).is_empty());
    }

    #[test]
    fn minimal_catalog_still_has_four_distinct_options() {
        let catalog = Catalog::new(Catalog::builtin().countries()[..4].to_vec()).unwrap();
        let mut rng = make_rng(Some(11));
        for q in generate_questions(&catalog, 4, &mut rng) {
            let distinct: HashSet<_> = q.options.iter().collect();
            assert_eq!(distinct.len(), 4);
        }
    }

    #[test]
    fn flag_url_uses_iso_code() {
        let mut rng = make_rng(Some(8));
        let q = &generate_questions(&Catalog::builtin(), 1, &mut rng)[0];
        assert_eq!(q.flag_url, format!("https://flagcdn.com/w320/{}.png", q.correct_answer.iso_code));
    }
}
