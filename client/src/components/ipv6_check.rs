//! One-click IPv6 connectivity test card.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives `net::ipify` from the browser and renders the per-protocol verdicts
//! held in `ConnectivityState`. During SSR the card renders its idle state;
//! lookups only ever run after hydration.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::ipify::{BrowserFetcher, check_connectivity};
use crate::state::connectivity::{CheckPhase, ConnectivityState, ipv4_label, ipv6_label};

#[component]
pub fn Ipv6Check() -> impl IntoView {
    let check = expect_context::<RwSignal<ConnectivityState>>();

    let on_run = move |_| {
        if check.get_untracked().is_pending() {
            return;
        }
        check.update(|s| *s = std::mem::take(s).begin_run());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = check_connectivity(&BrowserFetcher).await;
            check.update(|s| *s = std::mem::take(s).complete(outcome));
        });
    };

    view! {
        <section class="card ipv6-check">
            <header class="card__header">
                <h2 class="card__title">"One-Click IPv6 Test"</h2>
                <p class="card__description">"Check if your device and network are using IPv6."</p>
            </header>
            <div class="card__body">
                {move || {
                    let state = check.get();
                    match state.phase {
                        CheckPhase::NotRun => {
                            view! {
                                <div class="ipv6-check__intro">
                                    <p>"Click the button below to start the connectivity test."</p>
                                </div>
                            }
                                .into_any()
                        }
                        CheckPhase::Pending => {
                            view! {
                                <div class="ipv6-check__pending">
                                    <span class="spinner" aria-hidden="true"></span>
                                    <span>"Running tests..."</span>
                                </div>
                            }
                                .into_any()
                        }
                        CheckPhase::Completed => {
                            let ipv6 = state.ipv6_status();
                            let ipv4 = state.ipv4_status();
                            let ipv6_class = result_card_class(ipv6.is_supported());
                            let ipv4_class = result_card_class(ipv4.is_supported());
                            let error = state.error_message().map(str::to_owned);
                            view! {
                                <div class="ipv6-check__results">
                                    <div class=ipv6_class>
                                        <h3 class="result-card__title">"IPv6 Connection"</h3>
                                        <p class="result-card__body">{ipv6_label(&ipv6)}</p>
                                    </div>
                                    <div class=ipv4_class>
                                        <h3 class="result-card__title">"IPv4 Connection"</h3>
                                        <p class="result-card__body">{ipv4_label(&ipv4)}</p>
                                    </div>
                                </div>
                                {error
                                    .map(|message| {
                                        view! {
                                            <div class="alert alert--destructive" role="alert">
                                                <strong class="alert__title">"Error"</strong>
                                                <p>{message}</p>
                                            </div>
                                        }
                                    })}
                            }
                                .into_any()
                        }
                    }
                }}
                <div class="ipv6-check__actions">
                    <button
                        class="btn btn--primary"
                        on:click=on_run
                        disabled=move || check.get().is_pending()
                    >
                        {move || check.get().button_label()}
                    </button>
                </div>
            </div>
        </section>
    }
}

fn result_card_class(supported: bool) -> &'static str {
    if supported { "result-card result-card--ok" } else { "result-card result-card--missing" }
}
