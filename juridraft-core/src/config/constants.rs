/// Gemini API defaults
pub mod gemini {
    pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
    pub const SUPPORTED_MODELS: &[&str] = &[
        "gemini-2.0-flash",
        "gemini-2.0-flash-lite",
        "gemini-2.5-flash",
        "gemini-2.5-pro",
    ];
    pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
    pub const FALLBACK_API_KEY_ENV: &str = "GOOGLE_API_KEY";
    pub const REQUEST_TIMEOUT_SECS: u64 = 120;
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Document export defaults
pub mod export {
    pub const DEFAULT_OUTPUT_DIR: &str = "outputs";
    pub const DRAFT_FILENAME: &str = "court_process_draft.docx";
    pub const RESEARCH_FILENAME: &str = "legal_research.docx";
}

/// Configuration file locations
pub mod files {
    pub const CONFIG_FILE_NAME: &str = "juridraft.toml";
    pub const HOME_CONFIG_DIR: &str = ".juridraft";
}

/// Prefix of the display string shown when a completion fails
pub const COMPLETION_ERROR_PREFIX: &str = "Error: Unable to fetch response. Details: ";
