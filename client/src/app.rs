//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use plotchat::ChatState;

use crate::components::chat_view::ChatView;
use crate::components::diagnostics_panel::DiagnosticsPanel;
use crate::net::api::browser_config;

/// Root application component.
///
/// Provides the chat state and endpoint config to child components.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::default());
    provide_context(chat);
    provide_context(browser_config());

    view! {
        <Title text="Data Mystery Solver"/>

        <div class="app">
            <header class="app-header">
                <h1>"Data Mystery Solver"</h1>
                <p class="subtitle">"Ask questions about your data"</p>
            </header>
            <ChatView/>
            <DiagnosticsPanel/>
        </div>
    }
}
