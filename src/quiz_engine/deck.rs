use rand::Rng;
use crate::quiz_engine::models::Country;

/// A shuffled view over a country list that deals each entry at most once.
pub struct CountryDeck<'a> {
    countries: &'a [Country],
    order: Vec<usize>,
    cursor: usize,
}

impl<'a> CountryDeck<'a> {
    /// Shuffle every country in `countries`.
    pub fn new_shuffled<R: Rng>(countries: &'a [Country], rng: &mut R) -> Self {
        Self::shuffled_indices(countries, (0..countries.len()).collect(), rng)
    }

    /// Shuffle every country except the one at `skip`; used to draw distractors.
    pub fn without<R: Rng>(countries: &'a [Country], skip: usize, rng: &mut R) -> Self {
        let order = (0..countries.len()).filter(|&i| i != skip).collect();
        Self::shuffled_indices(countries, order, rng)
    }

    fn shuffled_indices<R: Rng>(countries: &'a [Country], mut order: Vec<usize>, rng: &mut R) -> Self {
        // Fisher-Yates shuffle
        for i in (1..order.len()).rev() {
            let j = rng.gen_range(0..=i);
            order.swap(i, j);
        }

        CountryDeck { countries, order, cursor: 0 }
    }

    /// Deal one country with its catalog index, or `None` once exhausted.
    pub fn deal(&mut self) -> Option<(usize, &'a Country)> {
        let idx = *self.order.get(self.cursor)?;
        self.cursor += 1;
        let countries = self.countries;
        Some((idx, &countries[idx]))
    }

    /// Deal up to `n` countries; fewer if the deck runs out.
    pub fn deal_n(&mut self, n: usize) -> Vec<(usize, &'a Country)> {
        (0..n).map_while(|_| self.deal()).collect()
    }

    /// Remaining countries available.
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::catalog::Catalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn deck_deals_every_country_once() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let mut deck = CountryDeck::new_shuffled(&catalog, &mut rng);
        let all = deck.deal_n(100);

        assert_eq!(all.len(), catalog.len());
        assert_eq!(deck.remaining(), 0);
        assert!(deck.deal().is_none());

        let mut seen = std::collections::HashSet::new();
        for (idx, c) in &all {
            assert!(seen.insert(*idx), "Duplicate country: {}", c);
        }
    }

    #[test]
    fn deck_without_never_deals_the_skipped_country() {
        let catalog = Catalog::builtin();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut deck = CountryDeck::without(&catalog, 5, &mut rng);
            assert_eq!(deck.remaining(), catalog.len() - 1);
            assert!(deck.deal_n(catalog.len()).iter().all(|(i, _)| *i != 5));
        }
    }

    #[test]
    fn deck_is_deterministic_with_seed() {
        let catalog = Catalog::builtin();
        let make = |seed: u64| -> Vec<usize> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut deck = CountryDeck::new_shuffled(&catalog, &mut rng);
            deck.deal_n(5).into_iter().map(|(i, _)| i).collect()
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }
}
