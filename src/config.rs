//! Application-level configuration constants.

pub const API_BASE_URL: &str = "http://localhost:8000";

// Form placeholders
pub const NAME_PLACEHOLDER: &str = "E.g., The Future of AI in Healthcare";
pub const DESCRIPTION_PLACEHOLDER: &str = "Describe what you want the article to be about...";
