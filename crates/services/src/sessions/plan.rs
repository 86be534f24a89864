use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use vowel_core::model::PhonemeId;

/// Number of choices shown per question, correct answer included.
pub const OPTION_COUNT: usize = 4;

/// Order in which dataset entries are asked within one session.
///
/// Always a permutation of `0..len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOrder(Vec<PhonemeId>);

impl QuestionOrder {
    /// Uniformly shuffled order over `0..len` (Fisher–Yates via `SliceRandom`).
    pub fn shuffled<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut ids: Vec<PhonemeId> = (0..len).map(PhonemeId::new).collect();
        ids.shuffle(rng);
        Self(ids)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<PhonemeId> {
        self.0.get(position).copied()
    }

    /// True when every index in `0..len` appears exactly once.
    #[must_use]
    pub fn is_permutation_of(&self, len: usize) -> bool {
        if self.0.len() != len {
            return false;
        }
        let mut seen = vec![false; len];
        for id in &self.0 {
            match seen.get_mut(id.value()) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

/// Build a shuffled option set of up to `n` distinct values containing `correct`.
///
/// Distractors are sampled from the distinct values of `pool` other than
/// `correct`. When the pool is too small the set shrinks instead of failing,
/// so the result has `min(n, distinct_distractors + 1)` items. `n` is treated
/// as at least 1.
pub fn generate_options<S, R>(correct: &str, pool: &[S], n: usize, rng: &mut R) -> Vec<String>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut seen = HashSet::new();
    let mut distractors: Vec<&str> = pool
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| *candidate != correct && seen.insert(*candidate))
        .collect();
    distractors.shuffle(rng);
    distractors.truncate(n.max(1) - 1);

    let mut options: Vec<String> = distractors.into_iter().map(str::to_string).collect();
    options.push(correct.to_string());
    options.shuffle(rng);
    options
}
