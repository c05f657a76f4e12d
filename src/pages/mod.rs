// Page components
use leptos::*;
use leptos_router::*;

use crate::routes::{self, paths};
use crate::session::use_session;

pub mod auth;
pub mod recruiter;
pub mod student;

pub use auth::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    // Authenticated visitors get sent straight to their dashboard link.
    let cta = move || {
        let session = session.get();
        match session.role().filter(|_| session.is_authenticated()) {
            Some(role) => view! {
                <A
                    href=routes::dashboard_path(role)
                    class="bg-gradient-to-r from-purple-600 to-blue-600 text-white px-6 py-3 rounded-lg font-semibold"
                >
                    "Go to Dashboard"
                </A>
            }
            .into_view(),
            None => view! {
                <div class="space-x-4">
                    <A
                        href=paths::LOGIN
                        class="bg-gradient-to-r from-purple-600 to-blue-600 text-white px-6 py-3 rounded-lg font-semibold"
                    >
                        "Sign In"
                    </A>
                    <A
                        href=paths::SIGNUP
                        class="px-6 py-3 border border-gray-300 rounded-lg font-semibold hover:bg-gray-50"
                    >
                        "Create Account"
                    </A>
                </div>
            }
            .into_view(),
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-purple-50 via-blue-50 to-teal-50 flex items-center justify-center">
            <div class="text-center max-w-2xl px-4">
                <h1 class="text-5xl font-bold text-gray-900 mb-4">"JobPortal"</h1>
                <p class="text-xl text-gray-600 mb-8">
                    "Connecting students with their next role, and recruiters with their next hire."
                </p>
                {cta}
            </div>
        </div>
    }
}

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let go_back = move |_| {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-purple-50 via-blue-50 to-teal-50 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">"Access Denied"</h1>
                <p class="text-xl text-gray-600 mb-8">
                    "You don't have permission to access this page."
                </p>
                <button
                    on:click=go_back
                    class="bg-gradient-to-r from-purple-600 to-blue-600 text-white px-6 py-3 rounded-lg font-semibold"
                >
                    "Go Back"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-purple-50 via-blue-50 to-teal-50 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">"Page Not Found"</h1>
                <p class="text-xl text-gray-600 mb-8">
                    "The page you're looking for doesn't exist."
                </p>
                <A
                    href=paths::HOME
                    class="bg-gradient-to-r from-purple-600 to-blue-600 text-white px-6 py-3 rounded-lg font-semibold"
                >
                    "Go Home"
                </A>
            </div>
        </div>
    }
}
