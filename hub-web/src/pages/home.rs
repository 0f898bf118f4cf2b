//! Landing Page
//!
//! Featured launchpad projects grouped per network; the explore buttons
//! route into the matching dashboard through the session context, so a
//! live session on another network is torn down on the way.

use hub_core::market::featured_projects;
use leptos::prelude::*;

use crate::components::ProjectCard;
use crate::state::session::use_session_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session_context();

    view! {
        <div class="home">
            <div class="home-hero">
                <h1>"Featured Launchpad Projects"</h1>
                <p>
                    "Discover the next wave of innovation across the multi-chain \
                     ecosystem. Invest in projects before they launch."
                </p>
            </div>

            {featured_projects()
                .into_iter()
                .map(|(network, projects)| {
                    view! {
                        <section class="home-section">
                            <h2 class=format!("home-section-title {}", network.theme())>
                                {network.name()}
                            </h2>
                            <div class="project-grid">
                                {projects.into_iter().map(|project| {
                                    view! {
                                        <ProjectCard project theme=network.theme()>
                                            <button
                                                class=format!("explore-btn {}", network.theme())
                                                on:click=move |_| session.select_network(network)
                                            >
                                                {format!("Explore on {}", network.name())}
                                            </button>
                                        </ProjectCard>
                                    }
                                }).collect::<Vec<_>>()}
                            </div>
                        </section>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
