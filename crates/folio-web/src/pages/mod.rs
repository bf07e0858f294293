/// Page components for the portfolio site

pub mod home;
pub mod not_found;
