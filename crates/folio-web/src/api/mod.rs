/// Server functions
///
/// Data the page loads from the server. Bodies only run with the `ssr`
/// feature; the hydrated client calls them over HTTP.

pub mod portfolio;
