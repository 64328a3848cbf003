//! Regional IPv6 adoption charts.
//!
//! Static sample data rendered as inline SVG; no network and no state.

use leptos::prelude::*;

use crate::util::bar_chart::{AdoptionDatum, VIEW_HEIGHT, VIEW_WIDTH, layout};

pub const ISP_ADOPTION: [AdoptionDatum; 4] = [
    AdoptionDatum { name: "Jio", adoption: 78 },
    AdoptionDatum { name: "Airtel", adoption: 65 },
    AdoptionDatum { name: "Vi", adoption: 45 },
    AdoptionDatum { name: "BSNL", adoption: 30 },
];

pub const CITY_ADOPTION: [AdoptionDatum; 5] = [
    AdoptionDatum { name: "Delhi", adoption: 72 },
    AdoptionDatum { name: "Mumbai", adoption: 68 },
    AdoptionDatum { name: "Bangalore", adoption: 65 },
    AdoptionDatum { name: "Chennai", adoption: 62 },
    AdoptionDatum { name: "Kolkata", adoption: 55 },
];

#[component]
pub fn RegionalStats() -> impl IntoView {
    view! {
        <section class="card regional-stats">
            <header class="card__header">
                <h2 class="card__title">"Regional IPv6 Adoption"</h2>
                <p class="card__description">"Anonymized & aggregated IPv6 adoption rates across India."</p>
            </header>
            <div class="card__body regional-stats__charts">
                <AdoptionChart title="By Major ISP" data=&ISP_ADOPTION/>
                <AdoptionChart title="By Major City" data=&CITY_ADOPTION/>
            </div>
        </section>
    }
}

#[component]
fn AdoptionChart(title: &'static str, data: &'static [AdoptionDatum]) -> impl IntoView {
    let chart = layout(data);
    let plot = chart.plot;
    let view_box = format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}");
    let tick_label_x = coord(plot.left - 8.0);
    let label_y = coord(chart.label_y);

    let ticks = chart
        .ticks
        .into_iter()
        .map(|tick| {
            let y = coord(tick.y);
            view! {
                <g class="bar-chart__tick">
                    <line
                        class="bar-chart__grid"
                        x1=coord(plot.left)
                        x2=coord(plot.right)
                        y1=y.clone()
                        y2=y.clone()
                    />
                    <text class="bar-chart__tick-label" x=tick_label_x.clone() y=y text-anchor="end" dominant-baseline="middle">
                        {tick.label}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    let bars = chart
        .bars
        .into_iter()
        .map(|bar| {
            let label_x = coord(bar.label_x);
            view! {
                <g class="bar-chart__bar">
                    <rect
                        x=coord(bar.x)
                        y=coord(bar.y)
                        width=coord(bar.width)
                        height=coord(bar.height)
                        rx="4"
                        aria-label=format!("{}: {}%", bar.name, bar.adoption)
                    />
                    <text class="bar-chart__value" x=label_x.clone() y=coord(bar.y - 6.0) text-anchor="middle">
                        {format!("{}%", bar.adoption)}
                    </text>
                    <text class="bar-chart__label" x=label_x y=label_y.clone() text-anchor="middle">
                        {bar.name}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <figure class="bar-chart">
            <figcaption class="bar-chart__title">{title}</figcaption>
            <svg class="bar-chart__svg" viewBox=view_box role="img" aria-label=title>
                {ticks}
                {bars}
            </svg>
        </figure>
    }
}

fn coord(v: f64) -> String {
    format!("{v:.1}")
}
