//! External credentials
//!
//! Both credentials are optional at build time (`option_env!`) and can be
//! overridden per-session through the page URL, which keeps the demo
//! usable without rebuilding. A missing credential disables the dependent
//! action with guidance instead of hiding it.

use crate::utils::url::get_query_param;

/// API key for the generative-text endpoint. Absence makes every analysis
/// request resolve to the fixed fallback text.
pub fn ai_api_key() -> Option<String> {
    lookup("api_key", option_env!("GEMINI_API_KEY"))
}

/// Project credential the EVM connect flow requires. Absence puts the
/// connect button into its "setup required" state for that network.
pub fn evm_project_id() -> Option<String> {
    lookup("project_id", option_env!("EVM_PROJECT_ID"))
}

fn lookup(query_key: &str, build_time: Option<&'static str>) -> Option<String> {
    get_query_param(query_key)
        .filter(|v| !v.is_empty())
        .or_else(|| build_time.map(str::to_string))
        .filter(|v| !v.is_empty())
}
