//! Launchpad Panel
//!
//! Fixed project listing; only live sales can be opened. Opening a project
//! shows the AI analysis modal.

use hub_core::market::{launchpad_projects, LaunchpadProject};
use hub_core::NetworkId;
use leptos::prelude::*;

use crate::components::ProjectCard;
use crate::features::analysis_modal::AnalysisModal;

#[component]
pub fn LaunchpadPanel(network: NetworkId) -> impl IntoView {
    let selected_project = RwSignal::new(None::<LaunchpadProject>);

    view! {
        <div class="panel launchpad-panel">
            <div class="panel-head">
                <h2>{format!("Launchpad on {}", network.name())}</h2>
            </div>

            <div class="project-list">
                {launchpad_projects()
                    .into_iter()
                    .map(|project| {
                        let open = project.is_open();
                        let card_project = project.clone();
                        view! {
                            <ProjectCard project=card_project theme=network.theme()>
                                <button
                                    class="participate-btn"
                                    disabled={!open}
                                    on:click=move |_| selected_project.set(Some(project.clone()))
                                >
                                    "Participate"
                                </button>
                            </ProjectCard>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            {move || selected_project.get().map(|project| view! {
                <AnalysisModal project selected=selected_project/>
            })}
        </div>
    }
}
