use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub id: u64,
    pub kind: MessageKind,
    pub text: String,
}

/// Queue of user-visible status messages. Every entry carries an id so a
/// dismiss targets the message it was rendered for even when the queue
/// changed in between.
#[derive(Clone, Debug, Default)]
pub struct StatusMessages {
    pub entries: Vec<StatusMessage>,
    next_id: u64,
}

impl StatusMessages {
    /// Append a message under the next id.
    pub fn push(&mut self, kind: MessageKind, text: &str) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(StatusMessage {
            id,
            kind,
            text: text.to_string(),
        });
    }

    /// Remove the message with the given id. An id that is already gone is a
    /// no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|m| m.id != id);
    }
}

pub fn use_status_messages() -> Signal<StatusMessages> {
    use_context::<Signal<StatusMessages>>()
}

pub fn push_message(messages: &mut Signal<StatusMessages>, kind: MessageKind, text: &str) {
    messages.write().push(kind, text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_distinct_ids() {
        let mut messages = StatusMessages::default();
        messages.push(MessageKind::Success, "saved");
        messages.push(MessageKind::Error, "failed");
        assert_ne!(messages.entries[0].id, messages.entries[1].id);
    }

    #[test]
    fn test_dismiss_removes_only_the_matching_entry() {
        let mut messages = StatusMessages::default();
        messages.push(MessageKind::Success, "first");
        messages.push(MessageKind::Success, "second");
        messages.push(MessageKind::Success, "third");

        let second = messages.entries[1].id;
        messages.dismiss(second);

        assert_eq!(messages.entries.len(), 2);
        assert!(messages.entries.iter().all(|m| m.id != second));
        assert_eq!(messages.entries[0].text, "first");
        assert_eq!(messages.entries[1].text, "third");
    }

    #[test]
    fn test_dismiss_stale_id_is_noop() {
        let mut messages = StatusMessages::default();
        messages.push(MessageKind::Error, "only");
        let id = messages.entries[0].id;
        messages.dismiss(id);
        messages.dismiss(id);
        assert!(messages.entries.is_empty());

        messages.push(MessageKind::Success, "later");
        assert_eq!(messages.entries.len(), 1);
    }
}
