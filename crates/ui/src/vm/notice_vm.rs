use std::collections::VecDeque;

use mentor_core::model::Notice;

pub const MAX_VISIBLE_NOTICES: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeEntry {
    pub id: u64,
    pub notice: Notice,
}

/// Most recent notices first, at most `MAX_VISIBLE_NOTICES`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeStack {
    entries: VecDeque<NoticeEntry>,
    next_id: u64,
}

impl NoticeStack {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_front(NoticeEntry { id, notice });
        self.entries.truncate(MAX_VISIBLE_NOTICES);
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    #[must_use]
    pub fn entries(&self) -> Vec<NoticeEntry> {
        self.entries.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
