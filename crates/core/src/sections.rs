//! Typed section shapes for the public pages, with the default site copy.
//!
//! Each struct is one `(page, section)` pair. Keys are serialised in
//! camelCase, the same names editors write into `content_json`.

use serde::Serialize;

use crate::content::{safe_list, to_content_map, ContentMap, SectionContent, SectionSchema};

/// Section keys of the About page, in render order.
pub const ABOUT_SECTION_KEYS: &[&str] = &["hero", "story", "mission", "values", "team", "cta"];

/// Number of highlight bullets the home hero editor exposes.
pub const HOME_HIGHLIGHT_SLOTS: usize = 3;

/// Number of perk bullets the careers hero editor exposes.
pub const CAREERS_PERK_SLOTS: usize = 4;

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeHero {
    pub headline: String,
    pub subheadline: String,
    pub primary_cta_label: String,
    pub primary_cta_href: String,
    pub secondary_cta_label: String,
    pub secondary_cta_href: String,
    pub highlights: Vec<String>,
}

impl SectionSchema for HomeHero {
    const PAGE: &'static str = "home";
    const KEY: &'static str = "hero";

    fn defaults() -> Self {
        Self {
            headline: "Building the next generation of technology talent".into(),
            subheadline: "JASIQ Labs trains students, delivers software for clients, and partners with organisations to grow digital skills.".into(),
            primary_cta_label: "Get started".into(),
            primary_cta_href: "/contact".into(),
            secondary_cta_label: "Explore careers".into(),
            secondary_cta_href: "/careers".into(),
            highlights: vec![
                "Hands-on training programs".into(),
                "Product engineering for clients".into(),
                "Partnerships that scale impact".into(),
            ],
        }
    }

    fn merge(c: &SectionContent<'_>) -> Self {
        let d = Self::defaults();
        Self {
            headline: c.text("headline", &d.headline),
            subheadline: c.text("subheadline", &d.subheadline),
            primary_cta_label: c.text("primaryCtaLabel", &d.primary_cta_label),
            primary_cta_href: c.text("primaryCtaHref", &d.primary_cta_href),
            secondary_cta_label: c.text("secondaryCtaLabel", &d.secondary_cta_label),
            secondary_cta_href: c.text("secondaryCtaHref", &d.secondary_cta_href),
            highlights: c.list("highlights", &d.highlights),
        }
    }

    fn to_content(&self) -> ContentMap {
        to_content_map(&Self {
            highlights: safe_list(&self.highlights, HOME_HIGHLIGHT_SLOTS),
            ..self.clone()
        })
    }
}

// ---------------------------------------------------------------------------
// About (six sections)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutHero {
    pub title: String,
    pub subtitle: String,
}

impl SectionSchema for AboutHero {
    const PAGE: &'static str = "about";
    const KEY: &'static str = "hero";

    fn defaults() -> Self {
        Self {
            title: "About JASIQ Labs".into(),
            subtitle: "A technology company built around learning, building and partnering.".into(),
        }
    }

    fn merge(c: &SectionContent<'_>) -> Self {
        let d = Self::defaults();
        Self {
            title: c.text("title", &d.title),
            subtitle: c.text("subtitle", &d.subtitle),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutStory {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

impl SectionSchema for AboutStory {
    const PAGE: &'static str = "about";
    const KEY: &'static str = "story";

    fn defaults() -> Self {
        Self {
            heading: "Our story".into(),
            paragraphs: vec![
                "JASIQ Labs started as a small study group of engineers who wanted to teach what they practised every day.".into(),
                "Today we run training cohorts, ship production software for clients, and work with partners who share our focus on practical skills.".into(),
            ],
        }
    }

    fn merge(c: &SectionContent<'_>) -> Self {
        let d = Self::defaults();
        Self {
            heading: c.text("heading", &d.heading),
            paragraphs: c.list("paragraphs", &d.paragraphs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutMission {
    pub mission_title: String,
    pub mission_text: String,
    pub vision_title: String,
    pub vision_text: String,
}

impl SectionSchema for AboutMission {
    const PAGE: &'static str = "about";
    const KEY: &'static str = "mission";

    fn defaults() -> Self {
        Self {
            mission_title: "Our mission".into(),
            mission_text: "Make industry-grade engineering skills accessible to every motivated learner.".into(),
            vision_title: "Our vision".into(),
            vision_text: "A workforce that learns by building real products for real users.".into(),
        }
    }

    fn merge(c: &SectionContent<'_>) -> Self {
        let d = Self::defaults();
        Self {
            mission_title: c.text("missionTitle", &d.mission_title),
            mission_text: c.text("missionText", &d.mission_text),
            vision_title: c.text("visionTitle", &d.vision_title),
            vision_text: c.text("visionText", &d.vision_text),
        }
    }
}

/// One entry of the About values grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutValues {
    pub heading: String,
    pub values: Vec<ValueItem>,
}

impl SectionSchema for AboutValues {
    const PAGE: &'static str = "about";
    const KEY: &'static str = "values";

    fn defaults() -> Self {
        let item = |title: &str, description: &str| ValueItem {
            title: title.into(),
            description: description.into(),
        };
        Self {
            heading: "What we value".into(),
            values: vec![
                item("Craft", "We take pride in software that works and keeps working."),
                item("Curiosity", "Every project is a chance to learn something new."),
                item("Candour", "We say what we think and listen to what we hear."),
            ],
        }
    }

    fn merge(c: &SectionContent<'_>) -> Self {
        let d = Self::defaults();
        let values = match c.records("values") {
            Some(records) => records
                .iter()
                .map(|r| ValueItem {
                    title: r.text("title", ""),
                    description: r.text("description", ""),
                })
                .collect(),
            None => d.values,
        };
        Self {
            heading: c.text("heading", &d.heading),
            values,
        }
    }
}

/// One person on the About team grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutTeam {
    pub heading: String,
    pub intro: String,
    pub members: Vec<TeamMember>,
}

impl SectionSchema for AboutTeam {
    const PAGE: &'static str = "about";
    const KEY: &'static str = "team";

    fn defaults() -> Self {
        Self {
            heading: "Meet the team".into(),
            intro: "Engineers, mentors and operators who care about doing the work well.".into(),
            members: Vec::new(),
        }
    }

    fn merge(c: &SectionContent<'_>) -> Self {
        let d = Self::defaults();
        let members = match c.records("members") {
            Some(records) => records
                .iter()
                .map(|r| TeamMember {
                    name: r.text("name", ""),
                    role: r.text("role", ""),
                    bio: r.text("bio", ""),
                    image_url: r.text("imageUrl", ""),
                })
                .collect(),
            None => d.members,
        };
        Self {
            heading: c.text("heading", &d.heading),
            intro: c.text("intro", &d.intro),
            members,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutCta {
    pub heading: String,
    pub text: String,
    pub button_label: String,
    pub button_href: String,
}

impl SectionSchema for AboutCta {
    const PAGE: &'static str = "about";
    const KEY: &'static str = "cta";

    fn defaults() -> Self {
        Self {
            heading: "Work with us".into(),
            text: "Whether you want to learn, hire or partner, we would like to hear from you.".into(),
            button_label: "Contact us".into(),
            button_href: "/contact".into(),
        }
    }

    fn merge(c: &SectionContent<'_>) -> Self {
        let d = Self::defaults();
        Self {
            heading: c.text("heading", &d.heading),
            text: c.text("text", &d.text),
            button_label: c.text("buttonLabel", &d.button_label),
            button_href: c.text("buttonHref", &d.button_href),
        }
    }
}

// ---------------------------------------------------------------------------
// Careers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareersHero {
    pub title: String,
    pub subtitle: String,
    pub perks: Vec<String>,
}

impl SectionSchema for CareersHero {
    const PAGE: &'static str = "careers";
    const KEY: &'static str = "hero";

    fn defaults() -> Self {
        Self {
            title: "Careers at JASIQ Labs".into(),
            subtitle: "Join a team that ships, teaches and keeps learning.".into(),
            perks: vec![
                "Remote-friendly schedules".into(),
                "Mentorship from senior engineers".into(),
                "Learning budget".into(),
                "Real client projects".into(),
            ],
        }
    }

    fn merge(c: &SectionContent<'_>) -> Self {
        let d = Self::defaults();
        Self {
            title: c.text("title", &d.title),
            subtitle: c.text("subtitle", &d.subtitle),
            perks: c.list("perks", &d.perks),
        }
    }

    fn to_content(&self) -> ContentMap {
        to_content_map(&Self {
            perks: safe_list(&self.perks, CAREERS_PERK_SLOTS),
            ..self.clone()
        })
    }
}

// ---------------------------------------------------------------------------
// Legal
// ---------------------------------------------------------------------------

/// One heading + body block of a legal document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalClause {
    pub heading: String,
    pub body: String,
}

/// Shared shape of the legal sub-pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocument {
    pub title: String,
    pub last_updated: String,
    pub clauses: Vec<LegalClause>,
}

impl LegalDocument {
    fn merge_over(c: &SectionContent<'_>, d: LegalDocument) -> Self {
        let clauses = match c.records("clauses") {
            Some(records) => records
                .iter()
                .map(|r| LegalClause {
                    heading: r.text("heading", ""),
                    body: r.text("body", ""),
                })
                .collect(),
            None => d.clauses,
        };
        Self {
            title: c.text("title", &d.title),
            last_updated: c.text("lastUpdated", &d.last_updated),
            clauses,
        }
    }
}

fn clause(heading: &str, body: &str) -> LegalClause {
    LegalClause {
        heading: heading.into(),
        body: body.into(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PrivacyPolicy(pub LegalDocument);

impl SectionSchema for PrivacyPolicy {
    const PAGE: &'static str = "legal";
    const KEY: &'static str = "privacy";

    fn defaults() -> Self {
        Self(LegalDocument {
            title: "Privacy Policy".into(),
            last_updated: "2024-01-01".into(),
            clauses: vec![
                clause("Information we collect", "We collect the details you submit through our forms, such as your name, email address and message."),
                clause("How we use it", "We use your information only to respond to your enquiry and to provide the services you request."),
                clause("Contact", "Questions about this policy can be sent to privacy@jasiqlabs.com."),
            ],
        })
    }

    fn merge(c: &SectionContent<'_>) -> Self {
        Self(LegalDocument::merge_over(c, Self::defaults().0))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TermsOfService(pub LegalDocument);

impl SectionSchema for TermsOfService {
    const PAGE: &'static str = "legal";
    const KEY: &'static str = "terms";

    fn defaults() -> Self {
        Self(LegalDocument {
            title: "Terms of Service".into(),
            last_updated: "2024-01-01".into(),
            clauses: vec![
                clause("Use of the site", "By using this website you agree to these terms."),
                clause("Content", "All content on this site is provided for general information and may change without notice."),
            ],
        })
    }

    fn merge(c: &SectionContent<'_>) -> Self {
        Self(LegalDocument::merge_over(c, Self::defaults().0))
    }
}
