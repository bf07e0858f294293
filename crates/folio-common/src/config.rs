use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::types::{LinkIcon, Project, ProjectLink};

/// Portfolio document - site settings plus the ordered list of projects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub site: SiteSettings,

    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Owner name shown in the page hero
    #[serde(default = "default_name")]
    pub name: String,

    /// Document title
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Heading above the project grid
    #[serde(default = "default_projects_heading")]
    pub projects_heading: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            title: default_title(),
            description: String::new(),
            projects_heading: default_projects_heading(),
        }
    }
}

/// Non-fatal finding reported by [`Portfolio::lint`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub project: String,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "project '{}': {}", self.project, self.message)
    }
}

impl Portfolio {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Collect warnings about data the card renders but cannot render well.
    /// Nothing here rejects the document.
    pub fn lint(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for project in &self.projects {
            if project.title.trim().is_empty() {
                issues.push(ConfigIssue {
                    project: project.title.clone(),
                    message: "title is empty".to_string(),
                });
            }

            for tag in project.duplicate_tags() {
                issues.push(ConfigIssue {
                    project: project.title.clone(),
                    message: format!("tag '{}' is listed more than once", tag),
                });
            }

            for link in &project.links {
                if link.href.trim().is_empty() {
                    issues.push(ConfigIssue {
                        project: project.title.clone(),
                        message: format!("link '{}' has an empty href", link.kind),
                    });
                }
            }
        }

        issues
    }

    /// Example document written by `config example`
    pub fn example() -> Self {
        Self {
            site: SiteSettings {
                name: "Jane Doe".to_string(),
                title: "Jane Doe - Projects".to_string(),
                description: "Software engineer building tools for the web.".to_string(),
                projects_heading: default_projects_heading(),
            },
            projects: vec![
                Project {
                    title: "Chat Collect".to_string(),
                    href: Some("https://chatcollect.com".to_string()),
                    description: "With the release of the [OpenAI GPT Store](https://openai.com/blog/introducing-the-gpt-store), \
                        I built a SaaS that lets users collect emails from their GPT users.".to_string(),
                    dates: "Jan 2024 - Feb 2024".to_string(),
                    tags: vec![
                        "Rust".to_string(),
                        "Leptos".to_string(),
                        "PostgreSQL".to_string(),
                        "TailwindCSS".to_string(),
                    ],
                    link: Some("https://chatcollect.com".to_string()),
                    image: None,
                    video: Some("https://cdn.example.com/chat-collect.mp4".to_string()),
                    links: vec![ProjectLink {
                        icon: LinkIcon::Globe,
                        kind: "Website".to_string(),
                        href: "https://chatcollect.com".to_string(),
                    }],
                },
                Project {
                    title: "Magic UI".to_string(),
                    href: Some("https://magicui.design".to_string()),
                    description: "Designed, developed and sold animated UI components for developers.".to_string(),
                    dates: "June 2023 - Present".to_string(),
                    tags: vec!["Rust".to_string(), "WASM".to_string()],
                    link: Some("https://magicui.design".to_string()),
                    image: Some("/magicui.png".to_string()),
                    video: None,
                    links: vec![
                        ProjectLink {
                            icon: LinkIcon::Globe,
                            kind: "Website".to_string(),
                            href: "https://magicui.design".to_string(),
                        },
                        ProjectLink {
                            icon: LinkIcon::Github,
                            kind: "Source".to_string(),
                            href: "https://github.com/magicuidesign/magicui".to_string(),
                        },
                    ],
                },
            ],
        }
    }
}

fn default_name() -> String { "Portfolio".to_string() }
fn default_title() -> String { "Projects".to_string() }
fn default_projects_heading() -> String { "Check out my latest work".to_string() }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;

    #[test]
    fn test_empty_document_uses_defaults() {
        let portfolio = Portfolio::from_yaml_str("{}").unwrap();
        assert_eq!(portfolio, Portfolio::default());
        assert_eq!(portfolio.site.projects_heading, "Check out my latest work");
    }

    #[test]
    fn test_projects_keep_document_order() {
        let yaml = r#"
site:
  name: Jane
projects:
  - title: First
    description: one
    dates: "2021"
  - title: Second
    description: two
    dates: "2022"
    tags: [Rust]
    links:
      - { icon: youtube, type: Demo, href: "https://youtu.be/x" }
"#;
        let portfolio = Portfolio::from_yaml_str(yaml).unwrap();

        assert_eq!(portfolio.site.name, "Jane");
        assert_eq!(portfolio.site.title, "Projects");
        let titles: Vec<_> = portfolio.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
        assert_eq!(portfolio.projects[1].links[0].icon, LinkIcon::Youtube);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let err = Portfolio::from_yaml_str("projects: [ { title: 1").unwrap_err();
        assert!(matches!(err, FolioError::Yaml(_)));
    }

    #[test]
    fn test_example_round_trips_and_is_clean() {
        let example = Portfolio::example();
        let yaml = example.to_yaml().unwrap();
        assert_eq!(Portfolio::from_yaml_str(&yaml).unwrap(), example);
        assert!(example.lint().is_empty());
    }

    #[test]
    fn test_bundled_portfolio_parses() {
        let portfolio = Portfolio::from_yaml_str(include_str!("../../../portfolio.yaml")).unwrap();

        assert_eq!(portfolio.site.name, "Jane Doe");
        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.projects[2].links.len(), 3);
        assert!(portfolio.projects[2].image.is_some() && portfolio.projects[2].video.is_some());
        assert!(portfolio.lint().is_empty());
    }

    #[test]
    fn test_lint_reports_duplicates_and_empty_hrefs() {
        let mut portfolio = Portfolio::example();
        portfolio.projects[1].tags.push("Rust".to_string());
        portfolio.projects[1].links[0].href = " ".to_string();

        let issues = portfolio.lint();
        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues[0].to_string(),
            "project 'Magic UI': tag 'Rust' is listed more than once"
        );
        assert_eq!(issues[1].message, "link 'Website' has an empty href");
    }
}
