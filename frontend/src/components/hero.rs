//! Hero section component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="App-header">
            <h1>{APP_NAME}</h1>
        </header>
    }
}
