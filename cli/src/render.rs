//! Plain-text rendering of chat messages for the terminal.

use plotchat::{Message, Sender};

/// Label shown before a message body.
pub fn sender_label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "you",
        Sender::Bot => "bot",
    }
}

/// One message as a terminal line (or several, for multi-line text).
///
/// Continuation lines are indented to line up under the first body line.
pub fn render_message(message: &Message) -> String {
    let prefix = match message.timestamp.as_deref() {
        Some(ts) => format!("[{ts}] {}: ", sender_label(message.sender)),
        None => format!("{}: ", sender_label(message.sender)),
    };

    let mut body: Vec<String> = message.text_or_empty().lines().map(str::to_owned).collect();
    if let Some(plot) = &message.plot {
        body.push(plot.summary());
    }
    if body.is_empty() {
        body.push(String::new());
    }

    let indent = " ".repeat(prefix.chars().count());
    let mut out = String::new();
    for (idx, line) in body.iter().enumerate() {
        if idx == 0 {
            out.push_str(&prefix);
        } else {
            out.push('\n');
            out.push_str(&indent);
        }
        out.push_str(line);
    }
    out
}

/// Display timestamp in `HH:MM:SS`, local time when the offset is knowable.
pub fn clock() -> String {
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
