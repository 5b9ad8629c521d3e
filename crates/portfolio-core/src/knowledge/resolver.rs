//! Maps a free-text question to exactly one canned answer.
//!
//! Matching is lowercase substring containment over the topics in declaration
//! order; the first topic with any contained keyword wins. Nothing is trimmed,
//! stripped or tokenized, so "smart" selects a topic tagged "art".

use super::{KnowledgeBase, TopicRecord};

/// Returned when no topic matches. Lines render as a bulleted list.
pub const FALLBACK_ANSWER: &str = "I'd love to help! Try asking about:\n\
• Education & studies\n\
• Hobbies & interests\n\
• Dance & fitness\n\
• Sports & physical activities\n\
• Technical interests\n\
• My personality & traits";

/// Which branch produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Topic(&'static TopicRecord),
    Fallback,
}

impl Resolution {
    /// The text to show, verbatim.
    pub fn answer(&self) -> &'static str {
        match self {
            Resolution::Topic(topic) => topic.answer,
            Resolution::Fallback => FALLBACK_ANSWER,
        }
    }

    /// Name of the matched topic; `None` for the fallback.
    pub fn topic_name(&self) -> Option<&'static str> {
        match self {
            Resolution::Topic(topic) => Some(topic.name),
            Resolution::Fallback => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Topic(_))
    }
}

/// Stateless resolver over an immutable knowledge base. Cheap to copy and share across threads.
#[derive(Debug, Clone, Copy)]
pub struct AnswerResolver {
    knowledge: &'static KnowledgeBase,
}

impl AnswerResolver {
    pub fn new(knowledge: &'static KnowledgeBase) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &'static KnowledgeBase {
        self.knowledge
    }

    /// Resolves `question` and reports which topic, if any, was selected.
    pub fn resolve_topic(&self, question: &str) -> Resolution {
        let normalized = question.to_lowercase();
        match self.knowledge.first_match(&normalized) {
            Some(topic) => Resolution::Topic(topic),
            None => Resolution::Fallback,
        }
    }

    /// Total: every input, including the empty string, maps to some answer.
    pub fn resolve(&self, question: &str) -> &'static str {
        self.resolve_topic(question).answer()
    }
}

impl Default for AnswerResolver {
    fn default() -> Self {
        Self::new(KnowledgeBase::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_of(name: &str) -> &'static str {
        KnowledgeBase::builtin().get(name).unwrap().answer
    }

    #[test]
    fn matching_ignores_case() {
        let resolver = AnswerResolver::default();
        for q in ["EDUCATION", "education", "Education"] {
            assert_eq!(resolver.resolve(q), answer_of("education"), "question: {}", q);
        }
        assert_eq!(
            resolver.resolve_topic("WhO ArE YoU?").topic_name(),
            Some("personality")
        );
    }

    #[test]
    fn earlier_topic_wins_shared_keywords() {
        let resolver = AnswerResolver::default();
        let resolution = resolver.resolve_topic("I love AI and ML");
        assert_eq!(resolution.topic_name(), Some("education"));
        assert_eq!(resolution.answer(), answer_of("education"));
        assert_ne!(resolution.answer(), answer_of("tech"));
    }

    #[test]
    fn keywords_match_inside_longer_words() {
        let resolver = AnswerResolver::default();
        assert_eq!(
            resolver.resolve("I enjoy dancing on weekends"),
            answer_of("dance")
        );
        // No word boundaries: "smart" contains "art".
        assert_eq!(resolver.resolve_topic("Are you smart?").topic_name(), Some("dance"));
        assert_eq!(
            resolver.resolve_topic("Tell me about your data projects").topic_name(),
            Some("tech")
        );
    }

    #[test]
    fn multi_word_keywords_match() {
        let resolver = AnswerResolver::default();
        assert_eq!(
            resolver.resolve_topic("What do you do in your free time?").topic_name(),
            Some("hobbies")
        );
        assert_eq!(
            resolver.resolve_topic("Can you describe yourself?").topic_name(),
            Some("personality")
        );
    }

    #[test]
    fn sports_question_selects_sports() {
        let resolver = AnswerResolver::default();
        assert_eq!(resolver.resolve("Do you play cricket?"), answer_of("sports"));
    }

    #[test]
    fn unmatched_question_gets_fallback() {
        let resolver = AnswerResolver::default();
        let resolution = resolver.resolve_topic("What is your favorite color?");
        assert_eq!(resolution, Resolution::Fallback);
        assert!(!resolution.is_match());
        assert_eq!(resolution.topic_name(), None);
        assert_eq!(
            resolution.answer(),
            "I'd love to help! Try asking about:\n• Education & studies\n• Hobbies & interests\n• Dance & fitness\n• Sports & physical activities\n• Technical interests\n• My personality & traits"
        );
    }

    #[test]
    fn fallback_lists_six_bulleted_categories() {
        let lines: Vec<&str> = FALLBACK_ANSWER.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[1..].iter().all(|l| l.starts_with("• ")));
    }

    #[test]
    fn every_input_yields_an_answer() {
        let resolver = AnswerResolver::default();
        for q in ["", "   ", "\t\n", "1234 !?#", "¿¡", "🙂🙂"] {
            assert_eq!(resolver.resolve(q), FALLBACK_ANSWER, "question: {:?}", q);
        }
        assert!(!resolver.resolve("MiXeD CaSe GyM").is_empty());
    }

    #[test]
    fn repeated_calls_agree() {
        let resolver = AnswerResolver::default();
        for q in ["Tell me about your tech stack", "favorite color", ""] {
            assert_eq!(resolver.resolve(q), resolver.resolve(q));
        }
    }

    #[test]
    fn declaration_order_decides_between_custom_topics() {
        static TOPICS: [TopicRecord; 2] = [
            TopicRecord {
                name: "first",
                keywords: &["shared"],
                answer: "first answer",
            },
            TopicRecord {
                name: "second",
                keywords: &["shared", "only-second"],
                answer: "second answer\nwith a line break",
            },
        ];
        static KB: KnowledgeBase = KnowledgeBase::new(&TOPICS);
        let resolver = AnswerResolver::new(&KB);
        assert_eq!(resolver.resolve("SHARED and only-second"), "first answer");
        assert_eq!(
            resolver.resolve("only-second"),
            "second answer\nwith a line break"
        );
        assert_eq!(resolver.resolve("neither"), FALLBACK_ANSWER);
    }
}
