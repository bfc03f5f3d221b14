use leptos::prelude::*;

/// Dismissible success alert for a one-shot notice.
#[component]
pub(super) fn Flash(message: &'static str) -> impl IntoView {
    view! {
        <div class="alert alert-success alert-dismissible fade show" role="alert">
            <span>{message}</span>
            <button
                type="button"
                class="btn-close"
                data-bs-dismiss="alert"
                aria-label="Close"
            ></button>
        </div>
    }
}
