//! Single chat bubble and the loading placeholder.

#[cfg(test)]
#[path = "message_bubble_test.rs"]
mod message_bubble_test;

use leptos::prelude::*;
use plotchat::Message;

use crate::components::plot_view::PlotView;

/// CSS class list for a bubble; plot bubbles get a wider layout.
pub fn bubble_class(message: &Message) -> String {
    let sender = message.sender.as_str();
    if message.is_plot() { format!("message {sender} plot") } else { format!("message {sender}") }
}

/// One message: text and/or an interactive plot, plus its timestamp.
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let class = bubble_class(&message);
    let text = Some(message.text_or_empty().to_owned()).filter(|text| !text.is_empty());
    let Message { plot, timestamp, .. } = message;

    view! {
        <div class=class>
            <div class="message-content">
                {text.map(|text| view! { <p>{text}</p> })}
                {plot.map(|plot| view! { <PlotView plot=plot/> })}
                {timestamp.map(|ts| view! { <span class="timestamp">{ts}</span> })}
            </div>
        </div>
    }
}

/// Indeterminate progress shown where the next bot message will appear.
#[component]
pub fn LoadingBubble() -> impl IntoView {
    view! {
        <div class="message bot loading">
            <div class="loading-dots">
                <span></span>
                <span></span>
                <span></span>
            </div>
        </div>
    }
}
