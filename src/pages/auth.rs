use leptos::*;
use leptos_router::*;

use crate::api::api_client;
use crate::components::layout::Card;
use crate::components::notifications::ErrorAlert;
use crate::forms;
use crate::routes::{self, paths};
use crate::session::{login_session, use_session};
use crate::types::{LoginRequest, Role, SignupRequest};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let navigate = use_navigate();
    let login = create_action(move |request: &LoginRequest| {
        let request = request.clone();
        let navigate = navigate.clone();
        async move {
            set_error.set(None);
            match api_client().login(&request).await {
                Ok(response) => {
                    let target = routes::dashboard_path(response.user.role);
                    login_session(session, response.user, response.token);
                    navigate(target, Default::default());
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        login.dispatch(LoginRequest {
            email: email.get(),
            password: password.get(),
        });
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-purple-50 via-blue-50 to-teal-50 flex items-center justify-center py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <h2 class="text-center text-3xl font-extrabold text-gray-900">
                    "Sign in to JobPortal"
                </h2>

                <Card>
                    <form class="space-y-6" on:submit=on_submit>
                        <div>
                            <label for="email" class="block text-sm font-medium text-gray-700 mb-2">
                                "Email address"
                            </label>
                            <input
                                id="email"
                                type="email"
                                required
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500"
                                placeholder="you@example.com"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>

                        <div>
                            <label for="password" class="block text-sm font-medium text-gray-700 mb-2">
                                "Password"
                            </label>
                            <input
                                id="password"
                                type="password"
                                required
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500"
                                placeholder="Password"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>

                        {move || error.get().map(|msg| view! { <ErrorAlert message=msg/> })}

                        <button
                            type="submit"
                            disabled=move || login.pending().get()
                            class="w-full py-3 px-4 rounded-lg text-white font-semibold bg-gradient-to-r from-purple-600 to-blue-600 disabled:opacity-50"
                        >
                            {move || if login.pending().get() { "Signing in..." } else { "Sign in" }}
                        </button>

                        <p class="text-center text-sm text-gray-600">
                            "No account yet? "
                            <A href=paths::SIGNUP class="text-purple-600 font-medium">
                                "Sign up"
                            </A>
                        </p>
                    </form>
                </Card>
            </div>
        </div>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session();
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (role, set_role) = create_signal(Role::Student);
    let (name, set_name) = create_signal(String::new());
    let (company_name, set_company_name) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let navigate = use_navigate();
    let signup = create_action(move |request: &SignupRequest| {
        let request = request.clone();
        let navigate = navigate.clone();
        async move {
            set_error.set(None);
            match api_client().signup(&request).await {
                Ok(response) => {
                    let target = routes::dashboard_path(response.user.role);
                    login_session(session, response.user, response.token);
                    navigate(target, Default::default());
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        // Role-specific required field, checked before any network call.
        let (name, company_name) = match role.get() {
            Role::Student => {
                let Some(name) = forms::optional(&name.get()) else {
                    set_error.set(Some("Name is required for students".to_string()));
                    return;
                };
                (Some(name), None)
            }
            Role::Recruiter => {
                let Some(company) = forms::optional(&company_name.get()) else {
                    set_error.set(Some("Company name is required for recruiters".to_string()));
                    return;
                };
                (None, Some(company))
            }
        };

        signup.dispatch(SignupRequest {
            email: email.get(),
            password: password.get(),
            role: role.get(),
            name,
            company_name,
        });
    };

    let on_role_change = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        set_role.set(if value == Role::Recruiter.as_str() {
            Role::Recruiter
        } else {
            Role::Student
        });
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-purple-50 via-blue-50 to-teal-50 flex items-center justify-center py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <h2 class="text-center text-3xl font-extrabold text-gray-900">
                    "Create your account"
                </h2>

                <Card>
                    <form class="space-y-6" on:submit=on_submit>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-2">"I am a"</label>
                            <select
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500"
                                on:change=on_role_change
                                prop:value=move || role.get().as_str()
                            >
                                <option value=Role::Student.as_str()>"Student"</option>
                                <option value=Role::Recruiter.as_str()>"Recruiter"</option>
                            </select>
                        </div>

                        {move || match role.get() {
                            Role::Student => view! {
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-2">"Full Name"</label>
                                    <input
                                        class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500"
                                        placeholder="Your name"
                                        prop:value=name
                                        on:input=move |ev| set_name.set(event_target_value(&ev))
                                    />
                                </div>
                            },
                            Role::Recruiter => view! {
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-2">"Company Name"</label>
                                    <input
                                        class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500"
                                        placeholder="Your company"
                                        prop:value=company_name
                                        on:input=move |ev| set_company_name.set(event_target_value(&ev))
                                    />
                                </div>
                            },
                        }}

                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-2">"Email address"</label>
                            <input
                                type="email"
                                required
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500"
                                placeholder="you@example.com"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-2">"Password"</label>
                            <input
                                type="password"
                                required
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500"
                                placeholder="At least 6 characters"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>

                        {move || error.get().map(|msg| view! { <ErrorAlert message=msg/> })}

                        <button
                            type="submit"
                            disabled=move || signup.pending().get()
                            class="w-full py-3 px-4 rounded-lg text-white font-semibold bg-gradient-to-r from-purple-600 to-blue-600 disabled:opacity-50"
                        >
                            {move || if signup.pending().get() { "Creating account..." } else { "Sign up" }}
                        </button>

                        <p class="text-center text-sm text-gray-600">
                            "Already registered? "
                            <A href=paths::LOGIN class="text-purple-600 font-medium">
                                "Sign in"
                            </A>
                        </p>
                    </form>
                </Card>
            </div>
        </div>
    }
}
