//! IPv6 AI assistant chat card.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends questions to `POST /api/ask` and renders the transcript held in
//! `AssistantState`. Validation, the optimistic insert, and rollback are all
//! state transitions; this component only wires them to the network and a
//! toast.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::assistant::{AssistantState, Role, SUGGESTED_QUESTIONS};
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastVariant;
use crate::state::toast::ToastState;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn AiAssistant() -> impl IntoView {
    let assistant = expect_context::<RwSignal<AssistantState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Narrow views of the state so typing in the input re-renders neither the
    // transcript nor the scroll position.
    let messages = Memo::new(move |_| assistant.with(|s| s.messages.clone()));
    let show_suggestions = Memo::new(move |_| assistant.with(AssistantState::show_suggestions));
    let pending = Memo::new(move |_| assistant.with(|s| s.pending));
    let validation = Memo::new(move |_| assistant.with(|s| s.validation.clone()));

    Effect::new(move || {
        let _ = messages.with(Vec::len);
        let _ = pending.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let ask = move |text: String| {
        let Some(Ok(asked)) = assistant.try_update(|s| s.submit(&text)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = api::ask_question(&asked.question).await;
            if let Some(description) = assistant.try_update(|s| s.resolve(asked, outcome)).flatten() {
                log::warn!("assistant request failed: {description}");
                show_toast(toasts, "AI Error", &description, ToastVariant::Destructive);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (asked, toasts);
    };

    let on_send = move |_| ask(assistant.with_untracked(|s| s.input.clone()));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            ask(assistant.with_untracked(|s| s.input.clone()));
        }
    };

    let is_pending = move || pending.get();

    view! {
        <section class="card ai-assistant">
            <header class="card__header ai-assistant__header">
                <span class="avatar avatar--accent" aria-hidden="true">"✦"</span>
                <div>
                    <h2 class="card__title">"IPv6 AI Assistant"</h2>
                    <p class="card__description">"Ask me anything about IPv6!"</p>
                </div>
            </header>

            <div class="ai-assistant__messages" node_ref=messages_ref>
                {move || {
                    if show_suggestions.get() {
                        return view! {
                            <div class="ai-assistant__suggestions">
                                <p>"Examples:"</p>
                                {SUGGESTED_QUESTIONS
                                    .iter()
                                    .map(|&question| {
                                        view! {
                                            <button
                                                class="btn btn--outline btn--block"
                                                disabled=is_pending
                                                on:click=move |_| {
                                                    assistant.update(|s| s.edit(question.to_owned()));
                                                    ask(question.to_owned());
                                                }
                                            >
                                                {question}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any();
                    }

                    messages
                        .get()
                        .into_iter()
                        .map(|msg| {
                            let is_user = msg.role == Role::User;
                            view! {
                                <div class="chat-message" class:chat-message--user=is_user>
                                    {(!is_user).then(|| view! { <span class="avatar avatar--primary">"AI"</span> })}
                                    <div class="chat-message__bubble">
                                        {if is_user {
                                            view! { <p class="chat-message__text">{msg.content}</p> }.into_any()
                                        } else {
                                            let rendered = render_markdown_html(&msg.content);
                                            view! { <div class="chat-message__markdown" inner_html=rendered></div> }
                                                .into_any()
                                        }}
                                    </div>
                                    {is_user.then(|| view! { <span class="avatar">"You"</span> })}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                {move || {
                    is_pending()
                        .then(|| {
                            view! {
                                <div class="chat-message">
                                    <span class="avatar avatar--primary">"AI"</span>
                                    <div class="chat-message__bubble typing-indicator" aria-label="Assistant is typing">
                                        <span></span>
                                        <span></span>
                                        <span></span>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>

            <footer class="ai-assistant__footer">
                <div class="ai-assistant__form">
                    <textarea
                        class="ai-assistant__input"
                        rows="2"
                        placeholder="e.g., How does IPv6 improve security?"
                        disabled=is_pending
                        prop:value=move || assistant.with(|s| s.input.clone())
                        on:input=move |ev| assistant.update(|s| s.edit(event_target_value(&ev)))
                        on:keydown=on_keydown
                    ></textarea>
                    <button class="btn btn--primary btn--icon" on:click=on_send disabled=is_pending aria-label="Send">
                        "➤"
                    </button>
                </div>
                {move || {
                    validation
                        .get()
                        .map(|message| view! { <p class="form-message" role="alert">{message}</p> })
                }}
            </footer>
        </section>
    }
}
