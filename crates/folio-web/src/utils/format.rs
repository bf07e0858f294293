/// Formatting utilities for displaying project data

/// Compact form of a project URL for the print-only line.
///
/// Removes the first `https://`, then the first `www.`, then the first `/`,
/// each at most once. Deeper path separators and other schemes are left alone.
pub fn display_link(link: &str) -> String {
    link.replacen("https://", "", 1)
        .replacen("www.", "", 1)
        .replacen('/', "", 1)
}
