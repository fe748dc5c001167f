//! Analysis results section.
//!
//! Renders a [`ResultsView`] and scrolls itself into view once mounted.
//! A new result mounts a fresh section, so nothing carries over between
//! renders.

use leptos::html::Section;
use leptos::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::components::SentimentChart;
use crate::render::ResultsView;

#[component]
pub fn ResultsSection(results: ResultsView) -> impl IntoView {
    let section_ref = create_node_ref::<Section>();

    section_ref.on_load(|section| {
        // Wait for the section to be attached before scrolling
        request_animation_frame(move || {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        });
    });

    let ResultsView {
        summary,
        sentiments,
        mean,
        median,
        keyword_groups,
        quality,
        word_cloud,
    } = results;

    view! {
        <section class="results-section" node_ref=section_ref>
            <h2>"Analysis Results"</h2>

            <div class="full-width-summary-card glass-card">
                <h3>"Summary:"</h3>
                <p class="summary-text">{summary}</p>
            </div>

            <div class="results-grid">
                <div class="sentiment-card glass-card">
                    <h3>"Sentiment Distribution:"</h3>
                    <SentimentChart bars=sentiments.clone()/>
                    <ul class="sentiment-list">
                        {sentiments
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <li class=format!("sentiment-item {}", s.css_class)>
                                        <span class="sentiment-label">{s.label} ":"</span>
                                        <span class="sentiment-count">{s.count}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="stats-and-quality-grid">
                    <div class="sentiment-stats-card glass-card">
                        <h3>"Sentiment Statistics:"</h3>
                        <p><strong>"Mean Sentiment:"</strong> " " {mean}</p>
                        <p><strong>"Median Sentiment:"</strong> " " {median}</p>
                    </div>

                    <div class="keywords-card glass-card">
                        <h3>"Common Keywords:"</h3>
                        {keyword_groups
                            .into_iter()
                            .map(|group| {
                                view! {
                                    <div class="keyword-group">
                                        <h4>{group.sentiment} ":"</h4>
                                        <ul class="keyword-list">
                                            {group
                                                .lines
                                                .into_iter()
                                                .map(|line| view! { <li>{line}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="data-quality-card glass-card">
                        <h3>"Data Quality:"</h3>
                        {quality
                            .into_iter()
                            .map(|(label, value)| {
                                view! { <p><strong>{label} ":"</strong> " " {value}</p> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="word-cloud-container glass-card">
                <h3>"Word Cloud:"</h3>
                {word_cloud.map(|src| {
                    view! { <img src=src alt="Word Cloud" class="word-cloud-image"/> }
                })}
            </div>
        </section>
    }
}
