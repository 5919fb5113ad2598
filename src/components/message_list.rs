//! Append-only list of chat lines.

use leptos::prelude::*;

use crate::net::types::ChatMessage;

/// Render entries `0..count` as `<author>: <text>` in arrival order.
///
/// Rows are keyed by position. The log only grows, so a row once built is
/// never rebuilt; `entry` is read once per new row.
#[component]
pub fn MessageList<F>(#[prop(into)] count: Signal<usize>, entry: F) -> impl IntoView
where
    F: Fn(usize) -> Option<ChatMessage> + Clone + Send + Sync + 'static,
{
    view! {
        <div class="message-list">
            <For
                each=move || 0..count.get()
                key=|index| *index
                children=move |index| {
                    entry(index)
                        .map(|msg| {
                            let author = format!("{}: ", msg.username);
                            view! {
                                <p class="message-list__entry">
                                    <strong>{author}</strong>
                                    {msg.text}
                                </p>
                            }
                        })
                }
            />
        </div>
    }
}
