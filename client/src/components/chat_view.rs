//! Chat view: message list, loading indicator, and the input form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns no state of its own beyond the draft text. Submissions go through
//! `ChatState::begin_submit`, the request runs on `spawn_local`, and the
//! reply or error is applied with `ChatState::settle` when the call settles.

use leptos::prelude::*;
use leptos::task::spawn_local;
use plotchat::{ChatConfig, ChatService, ChatState};

use crate::components::message_bubble::{LoadingBubble, MessageBubble};
use crate::net::api::GlooChatService;
use crate::util::clock;

/// Message history with a text input for new questions.
#[component]
pub fn ChatView() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<ChatConfig>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let service = StoredValue::new(GlooChatService::new(config));

    // Liveness probe on mount. Only feeds the diagnostics panel.
    chat.update(ChatState::record_mounted);
    spawn_local(async move {
        let result = service.get_value().probe().await;
        chat.update(|state| state.record_probe(result));
    });

    Effect::new(move || {
        let _ = chat.with(|state| (state.messages().len(), state.loading));

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let loading = move || chat.with(|state| state.loading);

    let do_send = move || {
        let text = input.get();
        let timestamp = clock::now();
        let Some(request) = chat
            .try_update(|state| {
                state.set_input(text);
                state.begin_submit(timestamp)
            })
            .flatten()
        else {
            return;
        };
        input.set(String::new());

        spawn_local(async move {
            let result = service.get_value().chat(&request).await;
            chat.update(|state| {
                state.settle(result, clock::now());
            });
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    view! {
        <div class="chat-container">
            <div class="messages-wrapper" node_ref=messages_ref>
                <For
                    each=move || chat.with(|state| state.messages().iter().cloned().enumerate().collect::<Vec<_>>())
                    key=|(idx, _)| *idx
                    children=|(_, message)| view! { <MessageBubble message=message/> }
                />
                {move || loading().then(|| view! { <LoadingBubble/> })}
            </div>
        </div>

        <form class="input-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Type your message..."
                disabled=loading
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            <button type="submit" disabled=loading>
                "Send"
            </button>
        </form>
    }
}
