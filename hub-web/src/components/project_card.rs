//! Launchpad Project Card

use hub_core::market::{LaunchpadProject, ProjectStatus};
use hub_core::utils::format_amount;
use leptos::prelude::*;

#[component]
pub fn ProjectCard(
    project: LaunchpadProject,
    /// Accent theme key of the network the card is shown under.
    theme: &'static str,
    /// Action row rendered at the bottom of the card.
    children: Children,
) -> impl IntoView {
    let pct = project.progress_pct();
    let status_class = match project.status {
        ProjectStatus::Live => "status-live",
        ProjectStatus::Ended => "status-ended",
        ProjectStatus::Upcoming => "status-upcoming",
    };

    view! {
        <div class="project-card">
            <div class="project-head">
                <span class="project-logo">{project.logo.clone()}</span>
                <div class="project-title">
                    <h3>{project.name.clone()}</h3>
                    <p class="project-ticker">{format!("${}", project.token_symbol)}</p>
                </div>
                <span class=format!("project-status {status_class}")>
                    {project.status.label()}
                </span>
            </div>

            <p class="project-description">{project.description.clone()}</p>

            <div class="project-progress">
                <div class="progress-meta">
                    <span>"Progress"</span>
                    <span>{format!("{pct:.0}%")}</span>
                </div>
                <div class="progress-track">
                    <div
                        class=format!("progress-fill {theme}")
                        style=format!("width: {pct:.0}%")
                    ></div>
                </div>
                <div class="progress-meta">
                    <span>
                        {format!(
                            "{} / {}",
                            format_amount(project.raised as f64, 0),
                            format_amount(project.goal as f64, 0),
                        )}
                    </span>
                </div>
            </div>

            {children()}
        </div>
    }
}
