//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::chat_view::ChatView;
use crate::config::ChatConfig;

/// Root application component.
///
/// Resolves the build-time endpoint configuration and renders the chat view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ChatConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("{e}; falling back to the default endpoint");
        ChatConfig::default()
    });

    view! {
        <Title text="Room Chat"/>
        <ChatView config=config/>
    }
}
