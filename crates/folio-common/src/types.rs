use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single portfolio entry, as rendered by a project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,

    /// Navigation target for the whole card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Markdown text
    pub description: String,

    /// Pre-formatted date range, displayed as-is
    pub dates: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Canonical URL, only shown when printing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<ProjectLink>,
}

impl Project {
    /// Tags that appear more than once, in order of their first repeat.
    /// Tags are used as rendering keys, so repeats collide.
    pub fn duplicate_tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut repeated = Vec::new();

        for tag in &self.tags {
            if !seen.insert(tag.as_str()) && !repeated.contains(&tag.as_str()) {
                repeated.push(tag.as_str());
            }
        }

        repeated
    }
}

/// External link shown as a badge in the card footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub icon: LinkIcon,

    /// Label such as "Website" or "Source"
    #[serde(rename = "type")]
    pub kind: String,

    pub href: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkIcon {
    Globe,
    Github,
    Youtube,
    Document,
    Play,
    #[default]
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default() {
        let yaml = r#"
title: Chat Collect
description: "A **browser** extension"
dates: "Jan 2024 - Feb 2024"
"#;
        let project: Project = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(project.title, "Chat Collect");
        assert!(project.href.is_none());
        assert!(project.link.is_none());
        assert!(project.image.is_none());
        assert!(project.video.is_none());
        assert!(project.tags.is_empty());
        assert!(project.links.is_empty());
    }

    #[test]
    fn test_link_type_field() {
        let yaml = r#"
icon: github
type: Source
href: https://github.com/example/repo
"#;
        let link: ProjectLink = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(link.icon, LinkIcon::Github);
        assert_eq!(link.kind, "Source");
        assert_eq!(link.href, "https://github.com/example/repo");

        let out = serde_yaml::to_string(&link).unwrap();
        assert!(out.contains("type: Source"));
    }

    #[test]
    fn test_unknown_icon_rejected() {
        let yaml = "icon: myspace\ntype: Profile\nhref: https://example.com\n";
        assert!(serde_yaml::from_str::<ProjectLink>(yaml).is_err());
    }

    #[test]
    fn test_duplicate_tags() {
        let project = Project {
            title: "Magic UI".to_string(),
            href: None,
            description: String::new(),
            dates: "2023".to_string(),
            tags: vec![
                "Rust".to_string(),
                "WASM".to_string(),
                "Rust".to_string(),
                "Leptos".to_string(),
                "WASM".to_string(),
                "Rust".to_string(),
            ],
            link: None,
            image: None,
            video: None,
            links: Vec::new(),
        };

        assert_eq!(project.duplicate_tags(), vec!["Rust", "WASM"]);
    }
}
