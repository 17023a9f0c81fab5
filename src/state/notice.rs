//! Transient in-page notices.
//!
//! Every "dialog" outcome (download finished, project saved, link copied) is a
//! notice pushed here and rendered by `components::notice_stack`.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Append a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, text: text.into() });
        id
    }

    pub fn info(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Info, text)
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, text)
    }

    /// Remove the notice with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
