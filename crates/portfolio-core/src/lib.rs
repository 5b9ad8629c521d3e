//! portfolio-core: shared config, page content, and the keyword-matched knowledge base
//! behind the "Ask About Me" widget.
//!
//! Nothing in this crate performs I/O apart from [`CoreConfig::load`]; the resolver is a pure
//! function over a `static` table and can be called from any thread.

mod knowledge;
mod profile;
mod shared;

pub use shared::CoreConfig;

pub use profile::{AboutCard, GallerySlot, Profile, Section, SocialLink};

pub use knowledge::{
    AnswerResolver, KnowledgeBase, KnowledgeStatus, Resolution, TopicRecord, FALLBACK_ANSWER,
};

/// Resolves `question` against the built-in knowledge base.
///
/// Callers are expected to skip blank input; if they don't, the fallback text comes back.
pub fn resolve(question: &str) -> &'static str {
    AnswerResolver::default().resolve(question)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_of(name: &str) -> &'static str {
        KnowledgeBase::builtin().get(name).unwrap().answer
    }

    #[test]
    fn resolve_ignores_case() {
        for q in ["EDUCATION", "education", "Education"] {
            assert_eq!(resolve(q), answer_of("education"), "question: {}", q);
        }
    }

    #[test]
    fn resolve_gives_education_the_ai_ml_tie() {
        assert_eq!(resolve("I love AI and ML"), answer_of("education"));
        assert_ne!(resolve("I love AI and ML"), answer_of("tech"));
    }

    #[test]
    fn resolve_matches_inside_words_and_by_keyword() {
        assert_eq!(resolve("I enjoy dancing on weekends"), answer_of("dance"));
        assert_eq!(resolve("Do you play cricket?"), answer_of("sports"));
    }

    #[test]
    fn resolve_falls_back_to_help_text() {
        assert_eq!(
            resolve("What is your favorite color?"),
            "I'd love to help! Try asking about:\n• Education & studies\n• Hobbies & interests\n• Dance & fitness\n• Sports & physical activities\n• Technical interests\n• My personality & traits"
        );
    }

    #[test]
    fn resolve_answers_blank_input() {
        for q in ["", " ", "\t\n  "] {
            assert_eq!(resolve(q), FALLBACK_ANSWER, "question: {:?}", q);
        }
        assert_eq!(resolve("Who are you?"), resolve("Who are you?"));
    }
}
