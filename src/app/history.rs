//! Navigation history
//!
//! An explicit stack of `NavigationState` snapshots with a cursor, mirroring
//! browser back/forward: pushing after going back drops the forward entries,
//! and moving the cursor never changes the depth.

use std::collections::VecDeque;

use super::state::NavigationState;
use crate::constants::HISTORY_LIMIT;

#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<NavigationState>,
    /// Index of the active entry (meaningless while `entries` is empty)
    cursor: usize,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }
}

impl History {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            limit: limit.max(1),
        }
    }

    /// Record a new entry after the cursor
    pub fn push(&mut self, state: NavigationState) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push_back(state);
        if self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step back; returns the entry to replay
    pub fn back(&mut self) -> Option<&NavigationState> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward; returns the entry to replay
    pub fn forward(&mut self) -> Option<&NavigationState> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn current(&self) -> Option<&NavigationState> {
        self.entries.get(self.cursor)
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 1-based position of the cursor, for the status bar
    pub fn position(&self) -> usize {
        if self.entries.is_empty() {
            0
        } else {
            self.cursor + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::MailboxName;

    fn mailbox(name: MailboxName) -> NavigationState {
        NavigationState::Mailbox { mailbox: name }
    }

    fn detail(id: u64) -> NavigationState {
        NavigationState::EmailDetail { id, from_sent: false }
    }

    #[test]
    fn test_back_and_forward_keep_depth() {
        let mut history = History::default();
        history.push(mailbox(MailboxName::Inbox));
        history.push(detail(1));
        history.push(mailbox(MailboxName::Sent));

        assert_eq!(history.back(), Some(&detail(1)));
        assert_eq!(history.back(), Some(&mailbox(MailboxName::Inbox)));
        assert_eq!(history.back(), None);
        assert_eq!(history.len(), 3);

        assert_eq!(history.forward(), Some(&detail(1)));
        assert_eq!(history.forward(), Some(&mailbox(MailboxName::Sent)));
        assert_eq!(history.forward(), None);
        assert_eq!(history.len(), 3);
        assert_eq!(history.position(), 3);
    }

    #[test]
    fn test_push_after_back_drops_forward_entries() {
        let mut history = History::default();
        history.push(mailbox(MailboxName::Inbox));
        history.push(detail(1));
        history.push(detail(2));

        history.back();
        history.back();
        history.push(mailbox(MailboxName::Archive));

        assert_eq!(history.len(), 2);
        assert!(!history.can_go_forward());
        assert_eq!(history.current(), Some(&mailbox(MailboxName::Archive)));
        assert_eq!(history.back(), Some(&mailbox(MailboxName::Inbox)));
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::with_limit(2);
        history.push(detail(1));
        history.push(detail(2));
        history.push(detail(3));

        assert_eq!(history.len(), 2);
        assert_eq!(history.back(), Some(&detail(2)));
        assert!(!history.can_go_back());
    }

    #[test]
    fn test_empty_history() {
        let mut history = History::default();
        assert_eq!(history.position(), 0);
        assert!(history.current().is_none());
        assert!(history.back().is_none());
        assert!(history.forward().is_none());
    }
}
