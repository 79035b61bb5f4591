//! Application-wide constants.
//!
//! Names, config locations, and the links shown in the help overlay.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Flexbox media queried columns";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "flexcols";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "flexcols";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "FLEXCOLS_CONFIG_DIR";

/// Article the clamp technique comes from.
pub const ARTICLE_URL: &str = "https://css-tricks.com/responsive-layouts-fewer-media-queries/";

/// Upstream library the generated rule follows.
pub const LIBRARY_URL: &str = "https://github.com/mei33/flexbox-media-queried-columns";

/// Site of the article's author.
pub const AUTHOR_URL: &str = "https://css-only.art/";
