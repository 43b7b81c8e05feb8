//! # Context Injector
//!
//! Merges the record summary into the leading system message of a chat
//! sequence. Only index 0 is an injection point, and only when its role is
//! `system` — a system message anywhere else is left untouched. The input
//! is never mutated; callers get a fresh sequence.

use educator_core::chat::{ChatMessage, Role};

/// Appended after the summary so the model answers strictly from the
/// provided data.
pub const INSTRUCTION_SUFFIX: &str = "\n\nWhen answering questions about students, ALWAYS base \
    your answers ONLY on the information provided above. If you are asked about something that \
    is not in the data, state clearly that you do not have that information.";

/// Return a copy of `messages` with `summary` merged into the leading
/// system message.
///
/// If the sequence is empty or does not start with a system message there
/// is no injection point and the copy is returned unchanged. All elements
/// past index 0 are preserved verbatim either way.
#[must_use]
pub fn inject_context(messages: &[ChatMessage], summary: &str) -> Vec<ChatMessage> {
    messages
        .iter()
        .enumerate()
        .map(|(index, msg)| {
            if index == 0 && msg.role == Role::System {
                ChatMessage {
                    role: Role::System,
                    content: format!("{}{summary}{INSTRUCTION_SUFFIX}", msg.content),
                }
            } else {
                msg.clone()
            }
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_unchanged() {
        let injected = inject_context(&[], "summary");
        assert!(injected.is_empty());
    }

    #[test]
    fn non_system_head_unchanged() {
        let messages = vec![ChatMessage::user("hello")];
        let injected = inject_context(&messages, "summary");
        assert_eq!(injected, messages);
    }

    #[test]
    fn system_head_receives_summary_and_suffix() {
        let messages = vec![ChatMessage::system("X"), ChatMessage::user("Y")];
        let injected = inject_context(&messages, "<records>");

        assert_eq!(injected.len(), 2);
        assert_eq!(injected[0].role, Role::System);
        assert!(injected[0].content.starts_with('X'));
        assert!(injected[0].content.contains("<records>"));
        assert!(injected[0].content.ends_with(INSTRUCTION_SUFFIX));
        assert_eq!(injected[1], messages[1]);
    }

    #[test]
    fn input_not_mutated() {
        let messages = vec![ChatMessage::system("original")];
        let _ = inject_context(&messages, "summary");
        assert_eq!(messages[0].content, "original");
    }

    #[test]
    fn non_leading_system_message_untouched() {
        let messages = vec![
            ChatMessage::user("hello"),
            ChatMessage::system("late system"),
        ];
        let injected = inject_context(&messages, "summary");
        assert_eq!(injected, messages);
    }

    #[test]
    fn ordering_and_tail_preserved() {
        let messages = vec![
            ChatMessage::system("sys"),
            ChatMessage::user("q1"),
            ChatMessage::assistant("a1"),
            ChatMessage::user("q2"),
        ];
        let injected = inject_context(&messages, "summary");
        assert_eq!(injected.len(), 4);
        assert_eq!(&injected[1..], &messages[1..]);
    }
}
