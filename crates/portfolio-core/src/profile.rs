//! Static page content for the portfolio (hero, about, dance gallery, vision, footer).
//!
//! The frontend fetches this as JSON and owns all layout; nothing here carries styling.

use serde::Serialize;

/// A navigable page section. `id` doubles as the anchor in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// A card in the About section: either a paragraph or a bullet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AboutCard {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'static str>,
    #[serde(skip_serializing_if = "no_items")]
    pub items: &'static [&'static str],
}

fn no_items(items: &&'static [&'static str]) -> bool {
    items.is_empty()
}

/// Placeholder slot in the dance gallery until videos are published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GallerySlot {
    pub slot: u8,
    pub caption: &'static str,
    /// Set once a performance is published.
    pub video_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub network: &'static str,
    pub href: &'static str,
}

/// Everything the page shows besides the ask widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub owner: String,
    pub taglines: &'static [&'static str],
    pub intro: &'static str,
    pub sections: &'static [Section],
    pub about_cards: &'static [AboutCard],
    pub personality_traits: &'static [&'static str],
    pub dance_intro: &'static str,
    pub dance_gallery: &'static [GallerySlot],
    pub vision: &'static [&'static str],
    pub social_links: &'static [SocialLink],
    pub footer: String,
}

static SECTIONS: [Section; 4] = [
    Section { id: "about", label: "About" },
    Section { id: "qa", label: "Ask Me" },
    Section { id: "dance", label: "Dance" },
    Section { id: "vision", label: "Vision" },
];

static ABOUT_CARDS: [AboutCard; 4] = [
    AboutCard {
        title: "Education",
        content: Some("B.Tech student in Artificial Intelligence & Machine Learning with a strong foundation in mathematics and logical problem-solving."),
        items: &[],
    },
    AboutCard {
        title: "Technical Interests",
        content: None,
        items: &[
            "AI & Machine Learning",
            "Web Development",
            "Data Systems",
            "Meaningful Tech Projects",
        ],
    },
    AboutCard {
        title: "Hobbies & Interests",
        content: None,
        items: &[
            "Dancing (Core Passion)",
            "Fitness & Gym",
            "Technology Exploration",
            "Personal Growth",
            "Nature & Mindfulness",
        ],
    },
    AboutCard {
        title: "Sports & Fitness",
        content: None,
        items: &[
            "Badminton",
            "Table Tennis",
            "Gym & Strength Training",
            "Running & Cardio",
            "Cricket",
            "Martial Arts",
        ],
    },
];

static DANCE_GALLERY: [GallerySlot; 3] = [
    GallerySlot { slot: 1, caption: "Coming Soon", video_url: None },
    GallerySlot { slot: 2, caption: "Coming Soon", video_url: None },
    GallerySlot { slot: 3, caption: "Coming Soon", video_url: None },
];

static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { network: "GitHub", href: "#" },
    SocialLink { network: "LinkedIn", href: "#" },
    SocialLink { network: "Instagram", href: "#" },
];

impl Profile {
    /// Page content for `owner`. The copyright year is fixed to the site's launch year.
    pub fn for_owner(owner: &str) -> Self {
        Self {
            owner: owner.to_string(),
            taglines: &[
                "AI/ML Student",
                "Tech Enthusiast",
                "Dancer",
                "Lifelong Learner",
            ],
            intro: "This space reflects my journey, interests, and personal brand.",
            sections: &SECTIONS,
            about_cards: &ABOUT_CARDS,
            personality_traits: &[
                "Curious learner",
                "Logical thinker",
                "Consistent and growth-focused",
                "Calm and reflective mindset",
            ],
            dance_intro: "Dance is a core part of my identity. Videos and performances will be added here soon.",
            dance_gallery: &DANCE_GALLERY,
            vision: &[
                "My journey is defined by continuous learning and skill building. I believe in blending technology, creativity, and discipline to create meaningful impact. Whether it's through code, movement, or ideas, I strive to push boundaries and grow consistently.",
                "This platform is a reflection of my commitment to long-term personal and professional growth. I'm building something that represents not just where I am, but where I'm headed—a space that evolves as I do.",
            ],
            social_links: &SOCIAL_LINKS,
            footer: format!("© 2024 {}. Building the future, one step at a time.", owner),
        }
    }

    /// Section ids in navigation order.
    pub fn section_ids(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_lists_sections_in_page_order() {
        let profile = Profile::for_owner("Prajwal");
        assert_eq!(profile.section_ids(), ["about", "qa", "dance", "vision"]);
        assert_eq!(profile.sections[1].label, "Ask Me");
    }

    #[test]
    fn owner_flows_into_footer() {
        let profile = Profile::for_owner("Asha");
        assert_eq!(profile.owner, "Asha");
        assert!(profile.footer.contains("© 2024 Asha."));
    }

    #[test]
    fn gallery_slots_are_placeholders() {
        let profile = Profile::for_owner("Prajwal");
        assert_eq!(profile.dance_gallery.len(), 3);
        assert!(profile
            .dance_gallery
            .iter()
            .all(|s| s.caption == "Coming Soon" && s.video_url.is_none()));
    }

    #[test]
    fn about_cards_serialize_content_or_items() {
        let json = serde_json::to_value(Profile::for_owner("Prajwal")).unwrap();
        let cards = json["about_cards"].as_array().unwrap();
        assert_eq!(cards.len(), 4);
        assert!(cards[0].get("content").is_some());
        assert!(cards[0].get("items").is_none());
        assert!(cards[3].get("content").is_none());
        assert_eq!(cards[3]["items"].as_array().unwrap().len(), 6);
        assert_eq!(json["personality_traits"][0], "Curious learner");
    }
}
