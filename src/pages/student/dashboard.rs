use leptos::*;
use leptos_router::*;

use crate::api::api_client;
use crate::components::layout::{Card, LoadingSpinner};
use crate::components::notifications::ErrorAlert;
use crate::routes::paths;
use crate::types::{Application, ApplicationStatus, StudentProfile};

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    // Profile and applications are fetched concurrently on mount.
    let data = create_resource(
        || (),
        |_| async move {
            let client = api_client();
            futures::join!(client.student_profile(), client.student_applications())
        },
    );

    view! {
        <Suspense fallback=move || view! { <LoadingSpinner/> }>
            {move || data.get().map(|(profile, applications)| match (profile, applications) {
                (Ok(profile), Ok(applications)) => view! {
                    <Dashboard profile applications/>
                }
                .into_view(),
                (Err(err), _) | (_, Err(err)) => view! {
                    <ErrorAlert message=err.to_string()/>
                }
                .into_view(),
            })}
        </Suspense>
    }
}

#[component]
fn Dashboard(profile: StudentProfile, applications: Vec<Application>) -> impl IntoView {
    let shortlisted = applications
        .iter()
        .filter(|app| app.status == ApplicationStatus::Shortlisted)
        .count();
    let profile_complete = if profile.cv_filename.is_some() { "100%" } else { "80%" };
    let recent: Vec<Application> = applications.iter().take(5).cloned().collect();

    view! {
        <div class="space-y-8">
            <Card>
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-3xl font-bold text-gray-900 mb-2">
                            {format!("Welcome back, {}!", profile.name)}
                        </h1>
                        <p class="text-gray-600">
                            "Manage your profile and track your job applications"
                        </p>
                    </div>
                    <A
                        href=paths::STUDENT_JOBS
                        class="bg-gradient-to-r from-purple-600 to-blue-600 text-white px-6 py-3 rounded-lg font-semibold"
                    >
                        "Find Jobs"
                    </A>
                </div>
            </Card>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard label="Total Applications" value=applications.len().to_string()/>
                <StatCard label="Shortlisted" value=shortlisted.to_string()/>
                <StatCard label="Profile Complete" value=profile_complete.to_string()/>
            </div>

            <Card>
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-2xl font-bold text-gray-900">"Profile Overview"</h2>
                    <A href=paths::STUDENT_PROFILE class="text-purple-600 font-medium">
                        "Edit Profile"
                    </A>
                </div>
                <dl class="grid grid-cols-1 md:grid-cols-2 gap-4 text-sm">
                    <ProfileField label="Education" value=profile.education/>
                    <ProfileField label="Skills" value=profile.skills/>
                    <ProfileField label="Location" value=profile.location/>
                    <ProfileField label="CV" value=profile.cv_filename/>
                </dl>
            </Card>

            <Card>
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-2xl font-bold text-gray-900">"Recent Applications"</h2>
                    <A href=paths::STUDENT_APPLICATIONS class="text-purple-600 font-medium">
                        "View All"
                    </A>
                </div>
                {if recent.is_empty() {
                    view! { <p class="text-gray-600">"No applications yet"</p> }.into_view()
                } else {
                    recent
                        .into_iter()
                        .map(|app| view! {
                            <div class="flex items-center justify-between py-3 border-b border-gray-100 last:border-b-0">
                                <div>
                                    <p class="font-medium text-gray-900">
                                        {app.title.unwrap_or_else(|| "Untitled role".to_string())}
                                    </p>
                                    <p class="text-sm text-gray-600">
                                        {app.company_name.unwrap_or_default()}
                                    </p>
                                </div>
                                <span class=app.status.badge_class()>{app.status.label()}</span>
                            </div>
                        })
                        .collect_view()
                }}
            </Card>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-white/80 backdrop-blur-lg rounded-2xl shadow-lg border border-purple-100 p-6">
            <p class="text-2xl font-bold text-gray-900">{value}</p>
            <p class="text-gray-600">{label}</p>
        </div>
    }
}

#[component]
fn ProfileField(label: &'static str, value: Option<String>) -> impl IntoView {
    view! {
        <div>
            <dt class="text-gray-500">{label}</dt>
            <dd class="text-gray-900">{value.unwrap_or_else(|| "Not set".to_string())}</dd>
        </div>
    }
}
