use leptos::ev::KeyboardEvent;
use leptos::html::Input;
use leptos::prelude::*;

use crate::core::config::{BoardConfig, Locale};

/// Enter is the only way to confirm. An Enter that commits an IME
/// composition (pinyin and the like) belongs to the input method.
fn confirms_card(key: &str, composing: bool) -> bool {
    key == "Enter" && !composing
}

#[component]
pub fn NewCardForm(on_submit: Callback<String>) -> impl IntoView {
    let locale = use_context::<BoardConfig>().unwrap_or_default().locale;
    let (title, set_title) = signal(String::new());
    let input_ref: NodeRef<Input> = NodeRef::new();

    // Focus once the input is in the DOM
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let handle_keydown = move |ev: KeyboardEvent| {
        if confirms_card(&ev.key(), ev.is_composing()) {
            ev.prevent_default();
            on_submit.run(title.get_untracked());
        }
    };

    let (heading, placeholder) = match locale {
        Locale::En => ("New card", "Card title, Enter to add"),
        Locale::Zh => ("添加新卡片", "输入标题后按回车"),
    };

    view! {
        <li class="kanban-card new-card">
            <h3>{heading}</h3>
            <div class="kanban-card-title">
                <input
                    type="text"
                    node_ref=input_ref
                    placeholder=placeholder
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    on:keydown=handle_keydown
                />
            </div>
        </li>
    }
}
