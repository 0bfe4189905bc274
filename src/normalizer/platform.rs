//! Source platform identifiers and their rule tables.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::platforms::{blogger, devto, ghost, hashnode, medium, substack, wordpress};
use super::rules::Rule;

/// Blogging platform an HTML document was exported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    #[default]
    Medium,
    Substack,
    Blogger,
    Hashnode,
    WordPress,
    Ghost,
    DevTo,
    /// No platform-specific rules; universal cleaning only
    Generic,
}

impl Platform {
    pub const ALL: [Platform; 8] = [
        Platform::Medium,
        Platform::Substack,
        Platform::Blogger,
        Platform::Hashnode,
        Platform::WordPress,
        Platform::Ghost,
        Platform::DevTo,
        Platform::Generic,
    ];

    /// Resolve a platform tag. Matching ignores case and surrounding
    /// whitespace; unrecognized tags resolve to [`Platform::Generic`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str().eq_ignore_ascii_case(tag))
            .unwrap_or(Platform::Generic)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Medium => "medium",
            Platform::Substack => "substack",
            Platform::Blogger => "blogger",
            Platform::Hashnode => "hashnode",
            Platform::WordPress => "wordpress",
            Platform::Ghost => "ghost",
            Platform::DevTo => "devto",
            Platform::Generic => "generic",
        }
    }

    /// Ordered platform-specific rules, run before the universal pass.
    #[must_use]
    pub const fn rules(self) -> &'static [Rule] {
        match self {
            Platform::Medium => medium::RULES,
            Platform::Substack => substack::RULES,
            Platform::Blogger => blogger::RULES,
            Platform::Hashnode => hashnode::RULES,
            Platform::WordPress => wordpress::RULES,
            Platform::Ghost => ghost::RULES,
            Platform::DevTo => devto::RULES,
            Platform::Generic => &[],
        }
    }
}

impl From<&str> for Platform {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<&String> for Platform {
    fn from(tag: &String) -> Self {
        Self::from_tag(tag)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_tag(platform.as_str()), platform);
        }
    }

    #[test]
    fn test_tag_matching_is_lenient_about_case() {
        assert_eq!(Platform::from_tag("WordPress"), Platform::WordPress);
        assert_eq!(Platform::from_tag("  GHOST "), Platform::Ghost);
        assert_eq!(Platform::from_tag("DevTo"), Platform::DevTo);
    }

    #[test]
    fn test_unknown_tags_fall_back_to_generic() {
        assert_eq!(Platform::from_tag("unknown-platform"), Platform::Generic);
        assert_eq!(Platform::from_tag(""), Platform::Generic);
        assert!(Platform::from_tag("tumblr").rules().is_empty());
    }

    #[test]
    fn test_every_named_platform_has_rules() {
        for platform in Platform::ALL {
            if platform != Platform::Generic {
                assert!(!platform.rules().is_empty(), "{platform} has no rules");
            }
        }
    }

    #[test]
    fn test_serde_uses_tags() -> serde_json::Result<()> {
        assert_eq!(serde_json::to_string(&Platform::DevTo)?, "\"devto\"");
        let parsed: Platform = serde_json::from_str("\"Substack\"")?;
        assert_eq!(parsed, Platform::Substack);
        let parsed: Platform = serde_json::from_str("\"livejournal\"")?;
        assert_eq!(parsed, Platform::Generic);
        Ok(())
    }
}
