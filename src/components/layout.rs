use leptos::*;
use leptos_router::*;

use crate::routes::{self, paths};
use crate::session::{logout_session, use_session};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        logout_session(session);
        navigate(paths::LOGIN, Default::default());
    };

    let nav = move || {
        session
            .get()
            .role()
            .map(routes::nav_items)
            .unwrap_or(&[])
            .iter()
            .map(|item| {
                view! {
                    <A
                        href=item.path
                        class="px-3 py-2 rounded-lg font-medium text-gray-600 hover:text-purple-600 hover:bg-purple-50"
                    >
                        {item.label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-purple-50 via-blue-50 to-teal-50">
            <header class="bg-white/90 backdrop-blur-md shadow-lg border-b border-purple-100">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        <div class="flex items-center space-x-8">
                            <A href=paths::HOME class="text-xl font-bold text-purple-600">
                                "JobPortal"
                            </A>
                            <nav class="hidden md:flex space-x-6">{nav}</nav>
                        </div>
                        <div class="flex items-center space-x-4">
                            <span class="text-sm text-gray-600">
                                {move || session.get().email().unwrap_or_default()}
                            </span>
                            <button
                                on:click=on_logout
                                class="px-3 py-2 text-red-600 hover:text-red-700 hover:bg-red-50 rounded-lg font-medium"
                            >
                                "Logout"
                            </button>
                        </div>
                    </div>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn PageHeader(#[prop(into)] title: String, #[prop(optional)] description: Option<String>) -> impl IntoView {
    view! {
        <div class="border-b border-gray-200 pb-5 mb-6">
            <h1 class="text-2xl font-bold text-gray-900">{title}</h1>
            {description.map(|desc| view! {
                <p class="mt-2 text-sm text-gray-600">{desc}</p>
            })}
        </div>
    }
}

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! {
        <div class="bg-white/80 backdrop-blur-lg rounded-2xl shadow-lg border border-purple-100 p-8">
            {children()}
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-64 py-8">
            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-purple-600"></div>
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="text-center py-16 bg-white/60 rounded-2xl border border-purple-100 text-gray-600">
            {message}
        </div>
    }
}
