//! Static site content
//!
//! Everything the page displays lives in `content/site.json`, compiled into
//! the binary and validated once at startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The shipped content document
pub const EMBEDDED_CONTENT: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("skill '{name}' has level {level}, expected 0-100")]
    SkillLevel { name: String, level: u8 },
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Shown in the header logo
    pub short_name: String,
    pub location: String,
    pub email: String,
    /// Site-relative asset paths
    pub image: String,
    pub resume: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub greeting: String,
    /// Typed out one after another, forever
    pub roles: Vec<String>,
    /// How long a fully typed role stays up
    pub role_hold_ms: u32,
    pub description: String,
    pub primary_cta: Link,
    pub secondary_cta: Link,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub highlights: Vec<Highlight>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0-100
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub icon: String,
    pub count: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub heading: String,
    pub intro: String,
    pub categories: Vec<SkillCategory>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub repo: String,
    pub live: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projects {
    pub heading: String,
    pub intro: String,
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactCopy {
    pub heading: String,
    pub intro: String,
    pub info_heading: String,
    pub info_intro: String,
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
    Twitter,
}

impl SocialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialKind::Github => "github",
            SocialKind::Linkedin => "linkedin",
            SocialKind::Twitter => "twitter",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub tagline: String,
    pub links: Vec<Link>,
}

/// All page content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub hero: Hero,
    pub about: About,
    pub skills: Skills,
    pub projects: Projects,
    pub contact: ContactCopy,
    pub socials: Vec<SocialLink>,
    pub footer: Footer,
}

impl SiteContent {
    /// Parse and validate the compiled-in document
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.hero.roles.iter().all(|r| r.trim().is_empty()) {
            return Err(ContentError::Empty("hero.roles"));
        }
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Empty("profile.name"));
        }
        for skill in self.skills.categories.iter().flat_map(|c| &c.skills) {
            if skill.level > 100 {
                return Err(ContentError::SkillLevel {
                    name: skill.name.clone(),
                    level: skill.level,
                });
            }
        }
        Ok(())
    }

    pub fn social(&self, kind: SocialKind) -> Option<&SocialLink> {
        self.socials.iter().find(|s| s.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_is_valid() {
        let content = SiteContent::embedded().expect("shipped content parses");
        assert_eq!(content.projects.items.len(), 6);
        assert_eq!(content.skills.categories.len(), 4);
        assert_eq!(content.hero.roles.len(), 4);
        assert_eq!(content.hero.role_hold_ms, 2000);
        assert!(content.social(SocialKind::Github).is_some());
    }

    #[test]
    fn test_rejects_out_of_range_level() {
        let mut content = SiteContent::embedded().expect("parses");
        content.skills.categories[0].skills[0].level = 140;
        assert!(matches!(
            content.validate(),
            Err(ContentError::SkillLevel { level: 140, .. })
        ));
    }

    #[test]
    fn test_rejects_missing_roles() {
        let mut content = SiteContent::embedded().expect("parses");
        content.hero.roles = vec![" ".to_string()];
        assert!(matches!(content.validate(), Err(ContentError::Empty("hero.roles"))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(SiteContent::from_json("{}"), Err(ContentError::Json(_))));
    }
}
