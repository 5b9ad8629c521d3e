//! Keyword-tagged knowledge base behind the "Ask About Me" widget.
//!
//! ## Topic Table
//!
//! Topics are matched in declaration order and the first hit wins, so the order
//! below is part of the behavior, not just presentation:
//!
//! | Order | Topic         | Covers                                   |
//! |-------|---------------|------------------------------------------|
//! | 1     | `education`   | B.Tech in AI & ML, academic background   |
//! | 2     | `hobbies`     | interests and free time                  |
//! | 3     | `sports`      | gym, badminton, cricket, martial arts    |
//! | 4     | `dance`       | dance and creative expression            |
//! | 5     | `tech`        | AI/ML, web development, data systems     |
//! | 6     | `personality` | traits and mindset                       |
//!
//! `education` and `tech` share "ai" and "ml"; education always wins.

mod resolver;
mod topics;

pub use resolver::{AnswerResolver, Resolution, FALLBACK_ANSWER};
use topics::BUILTIN_TOPICS;

use serde::Serialize;

/// One canned answer and the lowercase substrings that select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicRecord {
    /// Identifier of the record; never shown to the visitor.
    pub name: &'static str,
    /// Lowercase substrings. Any one of them appearing in the question selects this topic.
    pub keywords: &'static [&'static str],
    /// Returned verbatim on match, including any embedded line breaks.
    pub answer: &'static str,
}

impl TopicRecord {
    /// True when any keyword is contained in `normalized` (already lowercased).
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k))
    }
}

/// Ordered, immutable set of topics. Order defines match priority.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    topics: &'static [TopicRecord],
}

static BUILTIN: KnowledgeBase = KnowledgeBase::new(&BUILTIN_TOPICS);

impl KnowledgeBase {
    pub const fn new(topics: &'static [TopicRecord]) -> Self {
        Self { topics }
    }

    /// The process-wide table compiled into the binary.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    /// Topics in declaration (priority) order.
    pub fn topics(&self) -> &'static [TopicRecord] {
        self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Looks up a topic by name.
    pub fn get(&self, name: &str) -> Option<&'static TopicRecord> {
        self.topics.iter().find(|t| t.name == name)
    }

    /// First topic, in declaration order, with a keyword contained in `normalized`.
    pub fn first_match(&self, normalized: &str) -> Option<&'static TopicRecord> {
        self.topics.iter().find(|t| t.matches(normalized))
    }

    /// Structural check used by the gateway pre-flight. Problems are reported, not fixed.
    pub fn verify(&self) -> KnowledgeStatus {
        let mut issues = Vec::new();
        if self.topics.is_empty() {
            issues.push("knowledge base has no topics".to_string());
        }
        for (i, topic) in self.topics.iter().enumerate() {
            if topic.name.is_empty() {
                issues.push(format!("topic #{} has an empty name", i + 1));
            }
            if self.topics[..i].iter().any(|t| t.name == topic.name) {
                issues.push(format!("topic '{}' is declared twice", topic.name));
            }
            if topic.answer.trim().is_empty() {
                issues.push(format!("topic '{}' has an empty answer", topic.name));
            }
            if topic.keywords.is_empty() {
                issues.push(format!("topic '{}' has no keywords", topic.name));
            }
            for keyword in topic.keywords {
                if keyword.is_empty() {
                    // An empty keyword would match every question.
                    issues.push(format!("topic '{}' has an empty keyword", topic.name));
                } else if keyword.to_lowercase() != *keyword {
                    issues.push(format!(
                        "topic '{}' keyword '{}' is not lowercase and can never match",
                        topic.name, keyword
                    ));
                }
            }
        }
        KnowledgeStatus {
            topic_count: self.topics.len(),
            keyword_count: self.topics.iter().map(|t| t.keywords.len()).sum(),
            complete: issues.is_empty(),
            issues,
        }
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        *Self::builtin()
    }
}

/// Result of [`KnowledgeBase::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeStatus {
    pub topic_count: usize,
    pub keyword_count: usize,
    /// True when no issues were found.
    pub complete: bool,
    pub issues: Vec<String>,
}
