//! Fitted line display: the returned plot and the three coefficients.

use leptos::*;
use linreg_core::{FitResult, ResultView};

#[component]
pub fn FitResultView(result: FitResult) -> impl IntoView {
    let ResultView { image_src, fields } = ResultView::from(&result);

    view! {
        <div class="fit-result">
            <img src=image_src/>
            {fields
                .into_iter()
                .map(|field| view! { <p>{field.text()}</p> })
                .collect_view()}
        </div>
    }
}
