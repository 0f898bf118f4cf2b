//! Generative Project Analysis
//!
//! Calls a Gemini-style `generateContent` endpoint with a launchpad
//! project's name and description and returns markdown-flavored text for
//! the analysis modal. Every failure mode (missing key, transport error,
//! non-2xx, malformed body) collapses into one fixed fallback string;
//! nothing propagates past this module.

use gloo_net::http::Request;
use hub_core::market::LaunchpadProject;
use serde::{Deserialize, Serialize};

use crate::utils::config;
use crate::utils::constants::ANALYSIS_MODEL;

/// Shown whenever the analysis cannot be produced, whatever the reason.
pub const ANALYSIS_FALLBACK: &str = "An error occurred while generating the AI analysis. \
     The model may be unavailable or the request could not be processed. \
     Please try again later.";

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Instructions for a balanced three-paragraph write-up. The model output
/// is markdown-flavored: bold terms, no headers.
fn build_prompt(project: &LaunchpadProject) -> String {
    format!(
        "Provide a brief, high-level analysis for a fictional crypto launchpad project. \
         The analysis should be balanced, highlighting potential strengths and risks. \
         Use markdown bolding for key terms. Do not use headers or titles.\n\n\
         Project Name: \"{}\"\n\
         Project Description: \"{}\"\n\n\
         Structure your analysis into three distinct paragraphs:\n\
         1. **Concept**: Briefly explain the project's core idea in simple terms.\n\
         2. **Potential**: What are the potential strengths or market opportunities?\n\
         3. **Considerations**: What are some potential challenges or risks to consider \
         for a project like this?",
        project.name, project.description
    )
}

/// Pull the generated text out of a raw response body.
fn extract_text(body: &str) -> Option<String> {
    let response: GenerateResponse = serde_json::from_str(body).ok()?;
    let candidate = response.candidates.into_iter().next()?;
    let text = candidate
        .content
        .parts
        .into_iter()
        .map(|p| p.text)
        .collect::<Vec<_>>()
        .join("");
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Fetch an analysis for `project`, or the fixed fallback.
pub async fn project_analysis(project: &LaunchpadProject) -> String {
    let Some(api_key) = config::ai_api_key() else {
        log::warn!("analysis requested without an API key configured");
        return ANALYSIS_FALLBACK.to_string();
    };

    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{ANALYSIS_MODEL}:generateContent?key={api_key}"
    );
    let request = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: build_prompt(project),
            }],
        }],
    };

    let response = match Request::post(&url).json(&request) {
        Ok(req) => match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("analysis request failed: {e:?}");
                return ANALYSIS_FALLBACK.to_string();
            }
        },
        Err(e) => {
            log::warn!("analysis request could not be built: {e:?}");
            return ANALYSIS_FALLBACK.to_string();
        }
    };

    if !response.ok() {
        log::warn!("analysis endpoint returned status {}", response.status());
        return ANALYSIS_FALLBACK.to_string();
    }

    match response.text().await {
        Ok(body) => extract_text(&body).unwrap_or_else(|| ANALYSIS_FALLBACK.to_string()),
        Err(e) => {
            log::warn!("analysis body unreadable: {e:?}");
            ANALYSIS_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::market::launchpad_projects;

    #[test]
    fn test_prompt_carries_project_fields() {
        let project = &launchpad_projects()[0];
        let prompt = build_prompt(project);
        assert!(prompt.contains(&project.name));
        assert!(prompt.contains(&project.description));
        assert!(prompt.contains("three distinct paragraphs"));
    }

    #[test]
    fn test_extract_text_joins_candidate_parts() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "**Concept**: a" }, { "text": " protocol." } ] } }
            ]
        }"#;
        assert_eq!(
            extract_text(body).as_deref(),
            Some("**Concept**: a protocol.")
        );
    }

    #[test]
    fn test_extract_text_rejects_empty_or_malformed_bodies() {
        assert_eq!(extract_text("{}"), None);
        assert_eq!(extract_text("not json"), None);
        assert_eq!(
            extract_text(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#),
            None
        );
    }
}
