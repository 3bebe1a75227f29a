use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;

/// Selected option index per answered question.
///
/// An entry exists iff the question has been answered in the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<QuestionId, usize>);

impl AnswerMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, question_id: QuestionId, option_index: usize) {
        self.0.insert(question_id, option_index);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn get(&self, question_id: &QuestionId) -> Option<usize> {
        self.0.get(question_id).copied()
    }

    #[must_use]
    pub fn contains(&self, question_id: &QuestionId) -> bool {
        self.0.contains_key(question_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, usize)> {
        self.0.iter().map(|(id, index)| (id, *index))
    }
}

impl<K: Into<QuestionId>> FromIterator<(K, usize)> for AnswerMap {
    fn from_iter<T: IntoIterator<Item = (K, usize)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(id, index)| (id.into(), index)).collect())
    }
}
