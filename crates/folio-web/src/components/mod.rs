/// UI components for the portfolio site
///
/// A small card/badge kit and the project card built from it.

pub mod card;
pub mod badge;
pub mod icons;
pub mod project_card;
pub mod projects;
