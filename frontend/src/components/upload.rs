//! CSV upload form.
//!
//! Collects the file and the comment column, sends them to the analysis
//! service and reports a successful result through `on_complete`.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement, SubmitEvent};

use crate::services::{run_analysis, AnalysisOutcome, HttpTransport, SubmissionForm};
use crate::{AnalysisResult, ACCEPTED_FILE_TYPES, ANALYZE_URL};

#[component]
pub fn UploadForm(
    /// Receives every completed analysis
    #[prop(into)]
    on_complete: Callback<AnalysisResult>,
) -> impl IntoView {
    let form = create_rw_signal(SubmissionForm::<File>::new());
    let transport = HttpTransport::new(ANALYZE_URL);

    let in_flight = move || form.with(|f| f.is_in_flight());
    let error = move || form.with(|f| f.error().map(str::to_string));
    let file_name = move || form.with(|f| f.file().map(|file| file.name()));

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        form.update(|f| f.select_file(file));
    };

    let on_column_input = move |ev: Event| {
        let column = event_target_value(&ev);
        form.update(|f| f.set_column(column));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(Ok((ticket, request))) = form.try_update(|f| f.begin()) else {
            return;
        };

        let transport = transport.clone();
        spawn_local(async move {
            let result = run_analysis(&transport, request).await;
            if let Some(AnalysisOutcome::Completed(result)) =
                form.try_update(|f| f.finish(ticket, result))
            {
                on_complete.call(result);
            }
        });
    };

    let on_cancel = move |_| {
        form.update(|f| {
            f.cancel();
        });
    };

    view! {
        <div class="upload-form-container">
            <h2>"Upload CSV for Sentiment Analysis"</h2>
            <form class="upload-form" on:submit=on_submit>
                <div>
                    <label for="csvFile">"Select CSV File:"</label>
                    <input
                        type="file"
                        id="csvFile"
                        accept=ACCEPTED_FILE_TYPES
                        on:change=on_file_change
                    />
                    <Show when=move || file_name().is_some() fallback=|| view! { }>
                        <span class="selected-file">{move || file_name().unwrap_or_default()}</span>
                    </Show>
                </div>
                <div>
                    <label for="commentColumn">
                        "Comment Column Name or Index (e.g., 'text' or '5'):"
                    </label>
                    <input
                        type="text"
                        id="commentColumn"
                        placeholder="e.g., 'text' or '5'"
                        prop:value=move || form.with(|f| f.comment_column().to_string())
                        on:input=on_column_input
                    />
                </div>
                <button type="submit" disabled=in_flight>
                    {move || if in_flight() { "Analyzing..." } else { "Analyze Comments" }}
                </button>
                <Show when=in_flight fallback=|| view! { }>
                    <button type="button" class="btn-secondary" on:click=on_cancel>
                        "Cancel"
                    </button>
                </Show>
            </form>
            <Show when=move || error().is_some() fallback=|| view! { }>
                <p class="error-message">{move || error().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
