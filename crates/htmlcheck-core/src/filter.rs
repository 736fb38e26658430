//! Message-level filtering applied before pass/fail is computed
//!
//! A message is suppressed when its effective severity sits at or below
//! the configured floor, or when its text matches the suppression
//! matcher. The two rules are independent drop conditions combined into
//! one predicate.

use crate::types::{IgnoreLevel, MessageMatcher, MessageType, ValidationMessage};

/// Combined suppression predicate for checker diagnostics
#[derive(Debug, Clone, Default)]
pub struct MessageFilter {
    ignore_level: IgnoreLevel,
    ignore_messages: Option<MessageMatcher>,
}

impl MessageFilter {
    /// Create a filter from the options of a validate call
    pub fn new(ignore_level: IgnoreLevel, ignore_messages: Option<MessageMatcher>) -> Self {
        Self {
            ignore_level,
            ignore_messages,
        }
    }

    /// A message survives filtering when it is above the severity floor
    /// and its text matches no suppression rule.
    pub fn is_important(&self, message: &ValidationMessage) -> bool {
        self.above_ignore_level(message) && !self.matches_ignored_text(message)
    }

    /// Drop suppressed messages, preserving the order of the remainder.
    pub fn apply(&self, messages: Vec<ValidationMessage>) -> Vec<ValidationMessage> {
        messages
            .into_iter()
            .filter(|message| self.is_important(message))
            .collect()
    }

    // `Info` drops only bare informational notices; an `info` message
    // with a subtype such as `warning` is kept.
    fn above_ignore_level(&self, message: &ValidationMessage) -> bool {
        if message.message_type != MessageType::Info {
            return true;
        }
        match self.ignore_level {
            IgnoreLevel::None => true,
            IgnoreLevel::Info => message.sub_type.is_some(),
            IgnoreLevel::Warning => false,
        }
    }

    fn matches_ignored_text(&self, message: &ValidationMessage) -> bool {
        self.ignore_messages
            .as_ref()
            .map(|matcher| matcher.matches(&message.message))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageSubType;
    use regex::Regex;

    fn info(message: &str) -> ValidationMessage {
        ValidationMessage::new(MessageType::Info, message)
    }

    fn warning(message: &str) -> ValidationMessage {
        let mut msg = info(message);
        msg.sub_type = Some(MessageSubType::Warning);
        msg
    }

    fn error(message: &str) -> ValidationMessage {
        ValidationMessage::new(MessageType::Error, message)
    }

    #[test]
    fn test_no_floor_keeps_everything() {
        let filter = MessageFilter::default();
        let messages = vec![info("a"), warning("b"), error("c")];
        assert_eq!(filter.apply(messages.clone()), messages);
    }

    #[test]
    fn test_warning_floor_drops_all_info() {
        let filter = MessageFilter::new(IgnoreLevel::Warning, None);
        let kept = filter.apply(vec![info("a"), warning("b"), error("c")]);
        assert_eq!(kept, vec![error("c")]);
    }

    #[test]
    fn test_info_floor_drops_only_bare_info() {
        let filter = MessageFilter::new(IgnoreLevel::Info, None);
        let kept = filter.apply(vec![info("a"), warning("b"), error("c")]);
        assert_eq!(kept, vec![warning("b"), error("c")]);
    }

    #[test]
    fn test_substring_suppression() {
        let matcher = MessageMatcher::Substring("lacks heading".to_string());
        let filter = MessageFilter::new(IgnoreLevel::None, Some(matcher));
        let kept = filter.apply(vec![
            error("Section lacks heading."),
            error("Element not allowed here."),
        ]);
        assert_eq!(kept, vec![error("Element not allowed here.")]);
    }

    #[test]
    fn test_pattern_suppression() {
        let matcher = MessageMatcher::Pattern(Regex::new(r"heading|doctype").unwrap());
        let filter = MessageFilter::new(IgnoreLevel::None, Some(matcher));
        let kept = filter.apply(vec![
            error("Section lacks heading."),
            error("Expected a doctype token."),
            error("Stray end tag."),
        ]);
        assert_eq!(kept, vec![error("Stray end tag.")]);
    }

    #[test]
    fn test_rules_combine() {
        let matcher = MessageMatcher::Substring("Stray".to_string());
        let filter = MessageFilter::new(IgnoreLevel::Warning, Some(matcher));
        let kept = filter.apply(vec![
            info("note"),
            warning("w"),
            error("Stray end tag."),
            error("Section lacks heading."),
        ]);
        assert_eq!(kept, vec![error("Section lacks heading.")]);
    }

    #[test]
    fn test_network_errors_never_filtered_by_level() {
        let filter = MessageFilter::new(IgnoreLevel::Warning, None);
        let message = ValidationMessage::network_error("503 Service Unavailable");
        assert!(filter.is_important(&message));
    }
}
