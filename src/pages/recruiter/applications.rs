use leptos::*;
use leptos_router::*;

use crate::api::api_client;
use crate::components::layout::{Card, EmptyState, LoadingSpinner, PageHeader};
use crate::components::notifications::ErrorAlert;
use crate::types::{Applicant, ApplicationStatus};
use crate::utils::{self, RequestGuard};

fn job_id_param(params: &ParamsMap) -> Option<i64> {
    params.get("job_id").and_then(|raw| raw.parse().ok())
}

#[component]
pub fn JobApplicationsPage() -> impl IntoView {
    let params = use_params_map();
    let job_id = move || params.with(job_id_param);

    let (applicants, set_applicants) = create_signal(Vec::<Applicant>::new());
    let (job_title, set_job_title) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let guard = RequestGuard::default();
    let fetch_applicants = move || {
        let Some(job_id) = job_id() else {
            set_error.set(Some("Job not found".to_string()));
            return;
        };
        let guard = guard.clone();
        let seq = guard.issue();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let client = api_client();
            let (applicants, job) =
                futures::join!(client.job_applications(job_id), client.job_details(job_id));
            if !guard.is_current(seq) {
                return;
            }
            match applicants {
                Ok(found) => set_applicants.set(found),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            if let Ok(job) = job {
                set_job_title.set(Some(job.title));
            }
            set_loading.set(false);
        });
    };

    fetch_applicants();

    let update_status = create_action({
        let fetch_applicants = fetch_applicants.clone();
        move |input: &(i64, ApplicationStatus)| {
            let (application_id, status) = *input;
            let fetch_applicants = fetch_applicants.clone();
            async move {
                set_error.set(None);
                match api_client()
                    .update_application_status(application_id, status)
                    .await
                {
                    Ok(_) => fetch_applicants(),
                    Err(err) => set_error.set(Some(err.to_string())),
                }
            }
        }
    });

    let on_status_change = move |application_id: i64, raw: String| {
        if let Some(status) = ApplicationStatus::parse(&raw) {
            update_status.dispatch((application_id, status));
        }
    };

    view! {
        <div class="space-y-6">
            {move || {
                let title = match job_title.get() {
                    Some(title) => format!("Applications for {title}"),
                    None => "Applications".to_string(),
                };
                view! { <PageHeader title/> }
            }}

            {move || error.get().map(|msg| view! { <ErrorAlert message=msg/> })}

            {move || {
                if loading.get() {
                    view! { <LoadingSpinner/> }.into_view()
                } else if applicants.get().is_empty() {
                    view! { <EmptyState message="No applications for this job yet"/> }.into_view()
                } else {
                    view! {
                        <div class="space-y-4">
                            {applicants
                                .get()
                                .into_iter()
                                .map(|applicant| view! {
                                    <ApplicantCard applicant on_status_change/>
                                })
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
fn ApplicantCard<F>(applicant: Applicant, on_status_change: F) -> impl IntoView
where
    F: Fn(i64, String) + Copy + 'static,
{
    let application_id = applicant.id;
    let current_status = applicant.status;
    let applied = applicant
        .applied_at
        .as_deref()
        .map(|raw| format!("Applied {}", utils::format_date(raw)))
        .unwrap_or_default();
    let cv_href = applicant
        .cv_filename
        .as_deref()
        .map(|filename| format!("/uploads/{filename}"));

    view! {
        <Card>
            <div class="flex items-start justify-between gap-4">
                <div class="flex-1">
                    <h3 class="text-lg font-semibold text-gray-900">
                        {applicant.name.clone().unwrap_or_else(|| "Unnamed applicant".to_string())}
                    </h3>
                    <p class="text-gray-600">{applicant.email.clone().unwrap_or_default()}</p>
                    {applicant.education.clone().map(|education| view! {
                        <p class="text-sm text-gray-600 mt-1">{education}</p>
                    })}
                    {applicant.skills.clone().map(|skills| view! {
                        <p class="text-sm text-gray-600 mt-1">{format!("Skills: {skills}")}</p>
                    })}
                    <p class="text-sm text-gray-500 mt-1">{applied}</p>

                    {applicant.cover_letter.clone().map(|letter| view! {
                        <div class="mt-3 p-4 bg-purple-50 rounded-lg">
                            <p class="text-sm font-medium text-gray-700 mb-1">"Cover Letter"</p>
                            <p class="text-sm text-gray-700 whitespace-pre-line">{letter}</p>
                        </div>
                    })}
                </div>

                <div class="flex flex-col items-end gap-3">
                    <span class=current_status.badge_class()>{current_status.label()}</span>
                    <select
                        class="px-3 py-2 border border-gray-300 rounded-lg text-sm"
                        prop:value=current_status.as_str()
                        on:change=move |ev| on_status_change(application_id, event_target_value(&ev))
                    >
                        {ApplicationStatus::ALL
                            .iter()
                            .map(|status| view! {
                                <option
                                    value=status.as_str()
                                    selected=*status == current_status
                                >
                                    {status.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                    {cv_href.map(|href| view! {
                        <a
                            href=href
                            target="_blank"
                            class="text-purple-600 hover:text-purple-700 font-medium text-sm"
                        >
                            "View CV"
                        </a>
                    })}
                </div>
            </div>
        </Card>
    }
}
