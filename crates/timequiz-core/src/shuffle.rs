//! Optional random reordering of a question set.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::model::QuestionSet;

/// Permutes question sets with its own generator, seeded once.
pub struct Shuffler {
    enabled: bool,
    seed: u64,
    rng: StdRng,
}

impl Shuffler {
    /// Seed from the current system time.
    pub fn new(enabled: bool) -> Self {
        Self::with_seed(enabled, time_seed())
    }

    pub fn with_seed(enabled: bool, seed: u64) -> Self {
        Self {
            enabled,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Return a uniformly random permutation, or the input unchanged when disabled.
    pub fn apply(&mut self, mut questions: QuestionSet) -> QuestionSet {
        if self.enabled {
            questions.as_mut_slice().shuffle(&mut self.rng);
            tracing::debug!(seed = self.seed, "shuffled {} questions", questions.len());
        }
        questions
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn numbered(n: usize) -> QuestionSet {
        (0..n)
            .map(|i| Question::new(format!("q{i}"), format!("a{i}")))
            .collect()
    }

    fn sorted(set: &QuestionSet) -> Vec<Question> {
        let mut v = set.questions().to_vec();
        v.sort_by(|a, b| a.prompt.cmp(&b.prompt));
        v
    }

    #[test]
    fn disabled_is_identity() {
        let original = numbered(20);
        let mut shuffler = Shuffler::new(false);
        assert_eq!(shuffler.apply(original.clone()), original);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let original = numbered(50);
        let mut shuffler = Shuffler::with_seed(true, 7);
        let shuffled = shuffler.apply(original.clone());
        assert_eq!(shuffled.len(), original.len());
        assert_eq!(sorted(&shuffled), sorted(&original));
    }

    #[test]
    fn same_seed_same_order() {
        let a = Shuffler::with_seed(true, 42).apply(numbered(30));
        let b = Shuffler::with_seed(true, 42).apply(numbered(30));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_changes_order_for_large_sets() {
        // 100! orderings: the identity permutation is not a realistic result.
        let original = numbered(100);
        let shuffled = Shuffler::with_seed(true, 1).apply(original.clone());
        assert_ne!(shuffled, original);
    }

    #[test]
    fn empty_set_is_fine() {
        let mut shuffler = Shuffler::with_seed(true, 3);
        assert!(shuffler.apply(QuestionSet::default()).is_empty());
    }
}
