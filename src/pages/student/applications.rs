use leptos::*;
use leptos_router::*;

use crate::api::api_client;
use crate::components::layout::{Card, EmptyState, LoadingSpinner, PageHeader};
use crate::components::notifications::ErrorAlert;
use crate::routes;
use crate::types::Application;
use crate::utils::{self, RequestGuard};

#[component]
pub fn StudentApplicationsPage() -> impl IntoView {
    let (applications, set_applications) = create_signal(Vec::<Application>::new());
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let guard = RequestGuard::default();
    let fetch_applications = move || {
        let guard = guard.clone();
        let seq = guard.issue();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api_client().student_applications().await;
            if !guard.is_current(seq) {
                return;
            }
            match result {
                Ok(found) => set_applications.set(found),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    };

    fetch_applications();

    let on_refresh = {
        let fetch_applications = fetch_applications.clone();
        move |_| fetch_applications()
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <PageHeader title="My Applications"/>
                <button
                    on:click=on_refresh
                    class="px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50"
                >
                    "Refresh"
                </button>
            </div>

            {move || error.get().map(|msg| view! { <ErrorAlert message=msg/> })}

            {move || {
                if loading.get() {
                    view! { <LoadingSpinner/> }.into_view()
                } else if applications.get().is_empty() {
                    view! { <EmptyState message="You have not applied to any jobs yet"/> }
                        .into_view()
                } else {
                    view! {
                        <div class="space-y-4">
                            {applications
                                .get()
                                .into_iter()
                                .map(|application| view! { <ApplicationCard application/> })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ApplicationCard(application: Application) -> impl IntoView {
    let applied = application
        .applied_at
        .as_deref()
        .map(|raw| format!("Applied {}", utils::format_date(raw)));
    let details_path = application.job_id.map(routes::student_job_details_path);

    view! {
        <Card>
            <div class="flex items-start justify-between gap-4">
                <div>
                    <h3 class="text-lg font-semibold text-gray-900">
                        {application.title.clone().unwrap_or_default()}
                    </h3>
                    <p class="text-gray-600">
                        {application.company_name.clone().unwrap_or_default()}
                    </p>
                    <p class="text-sm text-gray-500 mt-1">{applied.unwrap_or_default()}</p>
                </div>
                <div class="flex items-center gap-3">
                    <span class=application.status.badge_class()>
                        {application.status.label()}
                    </span>
                    {details_path.map(|path| view! {
                        <A href=path class="text-purple-600 hover:text-purple-700 font-semibold">
                            "View Job"
                        </A>
                    })}
                </div>
            </div>
        </Card>
    }
}
