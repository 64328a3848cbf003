//! Toast viewport and the helper that schedules auto-dismissal.

use leptos::prelude::*;

use crate::state::toast::{ToastState, ToastVariant};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_DURATION_MS;

/// Show a toast and dismiss it after [`TOAST_DURATION_MS`] in the browser.
pub fn show_toast(toasts: RwSignal<ToastState>, title: &str, description: &str, variant: ToastVariant) {
    let id = toasts.try_update(|t| t.push(title, description, variant));

    #[cfg(feature = "hydrate")]
    if let Some(id) = id {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(TOAST_DURATION_MS))).await;
            toasts.update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Fixed-position stack of active toasts.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let destructive = toast.variant == ToastVariant::Destructive;
                        view! {
                            <li class="toast" class:toast--destructive=destructive role="status">
                                <div class="toast__text">
                                    <strong class="toast__title">{toast.title}</strong>
                                    <p class="toast__description">{toast.description}</p>
                                </div>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ol>
    }
}
