// Notification components
use leptos::*;

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="mb-4 bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-lg text-sm" role="alert">
            {message}
        </div>
    }
}

#[component]
pub fn SuccessAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="mb-4 bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded-lg text-sm" role="status">
            {message}
        </div>
    }
}
