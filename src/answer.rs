use crate::error::{Error, Result};
use crate::question::Ordinal;

/// One optional answer per question.
///
/// Updates never mutate in place: `set_answer` and `reset` return a new
/// store, so an observer holding the previous value never sees a half-applied
/// change and two stores can be compared with `==`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnswerStore {
    values: Vec<Option<Ordinal>>,
}

impl AnswerStore {
    /// All `len` answers unset.
    pub fn new(len: usize) -> Self {
        Self {
            values: vec![None; len],
        }
    }

    /// Builds a store from previously recorded answers, `None` meaning unanswered.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<Ordinal>>,
    {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Replaces the answer at `index`, leaving every other answer untouched.
    pub fn set_answer(&self, index: usize, value: Ordinal) -> Result<Self> {
        if index >= self.values.len() {
            return Err(Error::IllegalQuestion {
                index,
                len: self.values.len(),
            });
        }
        let mut values = self.values.clone();
        values[index] = Some(value);
        Ok(Self { values })
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Total score. Fails with `NotFulfilled` while any answer is unset.
    pub fn sum(&self) -> Result<u32> {
        self.values.iter().try_fold(0u32, |acc, value| {
            value
                .map(|ordinal| acc + u32::from(ordinal.value()))
                .ok_or(Error::NotFulfilled)
        })
    }

    pub fn reset(&self) -> Self {
        Self::new(self.values.len())
    }

    pub fn get(&self, index: usize) -> Option<Ordinal> {
        self.values.get(index).copied().flatten()
    }

    pub fn values(&self) -> &[Option<Ordinal>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of answered questions.
    pub fn answered(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }

    /// Indices of the questions still waiting for an answer, in order.
    pub fn unanswered(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_none())
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::question::OPTIONS;

    fn filled(values: &[u8]) -> AnswerStore {
        values
            .iter()
            .enumerate()
            .fold(AnswerStore::new(values.len()), |store, (index, &value)| {
                store
                    .set_answer(index, Ordinal::try_from(value).unwrap())
                    .unwrap()
            })
    }

    #[test]
    fn test_new_is_unset() {
        let store = AnswerStore::new(3);
        assert_eq!(store.len(), 3);
        assert_eq!(store.values(), &[None, None, None]);
        assert!(!store.is_complete());
        assert_eq!(store.unanswered(), vec![0, 1, 2]);
    }

    #[test]
    fn test_set_answer_leaves_others() {
        let before = AnswerStore::new(3);
        let after = before.set_answer(1, Ordinal::Usually).unwrap();
        assert_eq!(before.values(), &[None, None, None]);
        assert_eq!(after.values(), &[None, Some(Ordinal::Usually), None]);
        assert_eq!(after.answered(), 1);
    }

    #[test]
    fn test_set_answer_replaces() {
        let store = AnswerStore::new(2)
            .set_answer(0, Ordinal::Always)
            .unwrap()
            .set_answer(0, Ordinal::Never)
            .unwrap();
        assert_eq!(store.get(0), Some(Ordinal::Never));
    }

    #[test]
    fn test_set_answer_out_of_range() {
        let store = AnswerStore::new(3);
        assert!(matches!(
            store.set_answer(3, Ordinal::Never),
            Err(Error::IllegalQuestion { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_set_answer_idempotent() {
        let store = AnswerStore::new(4).set_answer(2, Ordinal::Sometimes).unwrap();
        let twice = store.set_answer(2, Ordinal::Sometimes).unwrap();
        assert_eq!(store, twice);
    }

    #[test]
    fn test_sum() {
        assert_eq!(filled(&[3, 3, 3]).sum().unwrap(), 9);
        assert_eq!(filled(&[0, 1, 2, 3]).sum().unwrap(), 6);
        assert_eq!(filled(&[2; 24]).sum().unwrap(), 48);
    }

    #[test]
    fn test_sum_order_independent() {
        let forward = AnswerStore::new(3)
            .set_answer(0, Ordinal::Never)
            .and_then(|s| s.set_answer(1, Ordinal::Always))
            .and_then(|s| s.set_answer(2, Ordinal::Usually))
            .unwrap();
        let backward = AnswerStore::new(3)
            .set_answer(2, Ordinal::Usually)
            .and_then(|s| s.set_answer(1, Ordinal::Always))
            .and_then(|s| s.set_answer(0, Ordinal::Never))
            .unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.sum().unwrap(), backward.sum().unwrap());
    }

    #[test]
    fn test_sum_not_fulfilled() {
        let store = AnswerStore::from_values([Some(Ordinal::Never), None, Some(Ordinal::Usually)]);
        assert!(!store.is_complete());
        assert_eq!(store.unanswered(), vec![1]);
        assert!(matches!(store.sum(), Err(Error::NotFulfilled)));
    }

    #[test]
    fn test_is_complete() {
        let mut store = AnswerStore::new(OPTIONS.len());
        for (index, option) in OPTIONS.iter().enumerate() {
            assert!(!store.is_complete());
            store = store.set_answer(index, *option).unwrap();
        }
        assert!(store.is_complete());
    }

    #[test]
    fn test_reset() {
        let store = filled(&[1, 2, 3]);
        assert!(store.is_complete());
        let cleared = store.reset();
        assert_eq!(cleared, AnswerStore::new(3));
        assert!(!cleared.is_complete());
    }
}
