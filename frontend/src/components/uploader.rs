//! Dataset upload component.
//!
//! Holds the widget's [`UploadState`] in a signal, uploads the picked file,
//! and shows the fit once a response has been applied. Failures only reach
//! the browser console.

use leptos::*;
use linreg_core::{ApplyPolicy, Resolution, UploadState, TITLE};
use web_sys::{Event, HtmlInputElement};

use crate::components::FitResultView;
use crate::services::upload_dataset;
use crate::BACKEND_URL;

#[component]
pub fn FileUploader(
    /// Base URL of the fitting service
    #[prop(into, default = BACKEND_URL.to_string())]
    base_url: String,
    /// How overlapping responses are applied
    #[prop(optional)]
    policy: ApplyPolicy,
) -> impl IntoView {
    let state = create_rw_signal(UploadState::new(policy));
    let base_url = store_value(base_url);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Some(ticket) = state.try_update(UploadState::begin) else {
            return;
        };

        log::info!(
            "📤 Uploading {} ({} bytes) [request #{}]",
            file.name(),
            file.size(),
            ticket.seq()
        );

        // Earlier uploads keep running; the state decides which one sticks.
        spawn_local(async move {
            let outcome = upload_dataset(file, &base_url.get_value()).await;

            match state.try_update(|s| s.resolve(ticket, outcome)) {
                Some(Resolution::Applied) => {
                    log::info!("✅ Fit received [request #{}]", ticket.seq());
                }
                Some(Resolution::Failed(err)) => {
                    log::error!("❌ Upload failed [request #{}]: {}", ticket.seq(), err);
                }
                Some(Resolution::Superseded) => {
                    log::warn!("Ignored response to superseded request #{}", ticket.seq());
                }
                Some(Resolution::Discarded) | None => {}
            }
        });
    };

    let result = create_memo(move |_| state.with(|s| s.result().cloned()));

    view! {
        <div class="file-uploader">
            <h1>{TITLE}</h1>
            <input type="file" name="file" on:change=on_file_change/>
            {move || result.get().map(|fit| view! { <FitResultView result=fit/> })}
        </div>
    }
}
