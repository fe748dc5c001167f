//! Sentiment distribution bar chart.
//!
//! Plain CSS bars: each bar's height is its share of the largest count.

use leptos::*;

use crate::render::SentimentBar;

#[component]
pub fn SentimentChart(bars: Vec<SentimentBar>) -> impl IntoView {
    view! {
        <div class="chart-container" role="img" aria-label="Sentiment Distribution">
            <div class="chart-title">"Sentiment Distribution"</div>
            <div class="chart-legend">"Number of Comments"</div>
            <div class="chart-bars">
                {bars
                    .into_iter()
                    .map(|bar| {
                        view! {
                            <div class="chart-column">
                                <div
                                    class=format!("chart-bar {}", bar.css_class)
                                    style=format!("height: {:.1}%", bar.percent)
                                    title=format!("Number of Comments: {}", bar.count)
                                ></div>
                                <div class="chart-label">{bar.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
