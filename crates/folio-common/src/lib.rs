pub mod types;
pub mod config;
pub mod error;

pub use error::{Result, FolioError};
pub use types::{LinkIcon, Project, ProjectLink};
pub use config::{ConfigIssue, Portfolio, SiteSettings};
