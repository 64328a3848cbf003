//! Landing page: header, hero, the three feature cards, footer.

use leptos::prelude::*;

use crate::components::ai_assistant::AiAssistant;
use crate::components::ipv6_check::Ipv6Check;
use crate::components::regional_stats::RegionalStats;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="site-header">
                <div class="site-header__inner">
                    <div class="site-header__brand">
                        <span class="site-header__logo" aria-hidden="true">"⬡"</span>
                        <h1 class="site-header__title">"IPv6Insight"</h1>
                    </div>
                    <p class="site-header__tagline">"Your guide to the next generation internet."</p>
                </div>
            </header>

            <main class="home__main">
                <div class="hero">
                    <h2 class="hero__title">"Is your network ready for the future?"</h2>
                    <p class="hero__lead">
                        "Check your IPv6 connectivity, explore regional adoption, and ask our AI anything about IPv6."
                    </p>
                </div>

                <div class="home__grid">
                    <div class="home__wide">
                        <Ipv6Check/>
                        <RegionalStats/>
                    </div>
                    <div class="home__narrow">
                        <AiAssistant/>
                    </div>
                </div>
            </main>

            <footer class="site-footer">
                <p>"© IPv6Insight. All rights reserved."</p>
                <p>"Raising awareness for a faster, more secure internet."</p>
            </footer>
        </div>
    }
}
