//! Collapsible view of the chat state's diagnostic log.

use leptos::prelude::*;
use plotchat::ChatState;

#[component]
pub fn DiagnosticsPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <details class="diagnostics">
            <summary>"Diagnostics"</summary>
            <pre class="diagnostics__log">{move || chat.with(|state| state.diagnostics.as_text())}</pre>
        </details>
    }
}
