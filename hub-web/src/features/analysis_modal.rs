//! Project Analysis Modal
//!
//! Fetches a generated write-up for one project when opened and renders
//! its markdown-flavored text (bold spans and paragraphs only).

use hub_core::market::LaunchpadProject;
use leptos::prelude::*;

use crate::services::analysis;

/// Split one line of model output into `(text, is_bold)` runs, treating
/// `**` as the bold toggle. An unclosed marker keeps the tail unbolded
/// rather than swallowing it.
pub fn bold_segments(line: &str) -> Vec<(String, bool)> {
    let mut segments = Vec::new();
    let parts: Vec<&str> = line.split("**").collect();
    let balanced = parts.len() % 2 == 1;
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        let bold = i % 2 == 1 && (balanced || i + 1 < parts.len());
        segments.push((part.to_string(), bold));
    }
    segments
}

#[component]
pub fn AnalysisModal(
    project: LaunchpadProject,
    /// Owner signal; setting it to `None` closes the modal.
    selected: RwSignal<Option<LaunchpadProject>>,
) -> impl IntoView {
    let analysis_text = RwSignal::new(None::<String>);

    // Fetch on open. If the modal is gone by the time the response lands,
    // the write below is a no-op on the disposed signal.
    {
        let project = project.clone();
        leptos::task::spawn_local(async move {
            let text = analysis::project_analysis(&project).await;
            analysis_text.try_set(Some(text));
        });
    }

    view! {
        <div class="modal-overlay" on:click=move |_| selected.set(None)>
            <div class="modal-card" on:click=|ev| ev.stop_propagation()>
                <div class="modal-head">
                    <span class="project-logo">{project.logo.clone()}</span>
                    <div class="modal-title">
                        <h2>{project.name.clone()}</h2>
                        <p>{project.description.clone()}</p>
                    </div>
                    <button class="modal-close" on:click=move |_| selected.set(None)>
                        "×"
                    </button>
                </div>

                <div class="modal-body">
                    <h3 class="analysis-heading">"AI Project Analysis"</h3>
                    {move || match analysis_text.get() {
                        None => view! {
                            <p class="analysis-loading">"Generating analysis..."</p>
                        }.into_any(),
                        Some(text) => view! {
                            <div class="analysis-text">
                                {text
                                    .lines()
                                    .filter(|line| !line.trim().is_empty())
                                    .map(|line| {
                                        view! {
                                            <p>
                                                {bold_segments(line)
                                                    .into_iter()
                                                    .map(|(segment, bold)| {
                                                        if bold {
                                                            view! { <strong>{segment}</strong> }
                                                                .into_any()
                                                        } else {
                                                            view! { <span>{segment}</span> }
                                                                .into_any()
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </p>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }.into_any(),
                    }}
                </div>

                <div class="modal-foot">
                    <button class="modal-close-btn" on:click=move |_| selected.set(None)>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_segments_alternate() {
        assert_eq!(
            bold_segments("**Concept**: a cross-chain protocol"),
            vec![
                ("Concept".to_string(), true),
                (": a cross-chain protocol".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_plain_line_is_one_segment() {
        assert_eq!(
            bold_segments("no markup here"),
            vec![("no markup here".to_string(), false)]
        );
    }

    #[test]
    fn test_unclosed_marker_does_not_bold_the_tail() {
        assert_eq!(
            bold_segments("dangling **tail"),
            vec![
                ("dangling ".to_string(), false),
                ("tail".to_string(), false),
            ]
        );
    }
}
