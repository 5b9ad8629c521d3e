//! Built-in topic table. Declaration order is match priority.

use super::TopicRecord;

pub static BUILTIN_TOPICS: [TopicRecord; 6] = [
    TopicRecord {
        name: "education",
        keywords: &[
            "education",
            "study",
            "student",
            "college",
            "degree",
            "academic",
            "university",
            "btech",
            "ai",
            "ml",
        ],
        answer: "I'm currently pursuing B.Tech in Artificial Intelligence & Machine Learning. My academic journey is built on a strong foundation in mathematics and logical problem-solving, which fuels my passion for understanding complex systems and creating innovative solutions.",
    },
    TopicRecord {
        name: "hobbies",
        // "enjoy" is deliberately absent: it would shadow dance questions like "I enjoy dancing".
        keywords: &["hobby", "hobbies", "interest", "free time", "passion"],
        answer: "My interests span across multiple domains - I'm deeply passionate about dancing, which is a core part of my identity. I also prioritize fitness through regular gym sessions, love exploring new technologies, and constantly work on personal growth and discipline. Nature and mindfulness play an important role in keeping me balanced.",
    },
    TopicRecord {
        name: "sports",
        keywords: &[
            "sport",
            "sports",
            "fitness",
            "gym",
            "workout",
            "badminton",
            "cricket",
            "tennis",
            "martial",
            "physical",
        ],
        answer: "I'm quite active physically! I regularly engage in badminton, table tennis, and cricket. The gym is a big part of my routine for strength training, complemented by running and cardio. I also have an interest in martial arts, which teaches discipline and mental focus.",
    },
    TopicRecord {
        name: "dance",
        keywords: &[
            "dance",
            "dancing",
            "creative",
            "performance",
            "expression",
            "art",
        ],
        answer: "Dance is a core part of my identity and creative expression. It's not just a hobby - it's how I connect with myself and express emotions that words can't capture. I'm building a collection of performances and videos that I'll be sharing soon on this platform.",
    },
    TopicRecord {
        name: "tech",
        keywords: &[
            "tech",
            "technology",
            "coding",
            "programming",
            "web",
            "development",
            "project",
            "ai",
            "ml",
            "machine learning",
            "artificial intelligence",
            "data",
        ],
        answer: "I'm deeply invested in AI/ML and web development. I love building meaningful tech projects that solve real problems. My interests include exploring data systems, creating intelligent applications, and staying updated with the latest technological advancements. I believe in learning by doing.",
    },
    TopicRecord {
        name: "personality",
        keywords: &[
            "personality",
            "character",
            "who are you",
            "describe yourself",
            "traits",
            "nature",
        ],
        answer: "I'd describe myself as a curious learner with a logical mindset. I value consistency, growth, and discipline. I approach challenges with a calm and reflective attitude, always seeking to understand deeper patterns. I believe in the power of continuous improvement and balancing multiple passions.",
    },
];
