use leptos::*;
use leptos_router::*;

use crate::api::api_client;
use crate::components::layout::{Card, EmptyState, LoadingSpinner, PageHeader};
use crate::components::notifications::ErrorAlert;
use crate::routes::{self, paths};
use crate::types::Job;
use crate::utils::{self, RequestGuard};

/// Maps the confirm-dialog answer to the delete request to issue. A declined
/// dialog issues nothing.
fn confirmed_delete(confirmed: bool, job_id: i64) -> Option<i64> {
    confirmed.then_some(job_id)
}

#[component]
pub fn RecruiterJobsPage() -> impl IntoView {
    let (jobs, set_jobs) = create_signal(Vec::<Job>::new());
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let guard = RequestGuard::default();
    let fetch_jobs = move || {
        let guard = guard.clone();
        let seq = guard.issue();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api_client().recruiter_jobs().await;
            if !guard.is_current(seq) {
                return;
            }
            match result {
                Ok(found) => set_jobs.set(found),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    };

    fetch_jobs();

    let delete = create_action({
        let fetch_jobs = fetch_jobs.clone();
        move |job_id: &i64| {
            let job_id = *job_id;
            let fetch_jobs = fetch_jobs.clone();
            async move {
                set_error.set(None);
                match api_client().delete_job(job_id).await {
                    Ok(_) => fetch_jobs(),
                    Err(err) => set_error.set(Some(err.to_string())),
                }
            }
        }
    });

    let on_delete = move |job_id: i64| {
        let confirmed = window()
            .confirm_with_message("Delete this job? All its applications will be removed.")
            .unwrap_or(false);
        if let Some(job_id) = confirmed_delete(confirmed, job_id) {
            delete.dispatch(job_id);
        }
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <PageHeader title="My Job Postings"/>
                <A
                    href=paths::RECRUITER_POST_JOB
                    class="bg-gradient-to-r from-purple-600 to-blue-600 text-white px-6 py-3 rounded-lg font-semibold"
                >
                    "Post New Job"
                </A>
            </div>

            {move || error.get().map(|msg| view! { <ErrorAlert message=msg/> })}

            {move || {
                if loading.get() {
                    view! { <LoadingSpinner/> }.into_view()
                } else if jobs.get().is_empty() {
                    view! { <EmptyState message="You have not posted any jobs yet"/> }.into_view()
                } else {
                    view! {
                        <div class="space-y-4">
                            {jobs
                                .get()
                                .into_iter()
                                .map(|job| view! { <RecruiterJobCard job on_delete/> })
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
fn RecruiterJobCard<F>(job: Job, on_delete: F) -> impl IntoView
where
    F: Fn(i64) + Copy + 'static,
{
    let job_id = job.id;
    let applications_path = routes::recruiter_job_applications_path(job_id);
    let posted = job
        .posted_at
        .as_deref()
        .map(|raw| format!("Posted {}", utils::format_date(raw)))
        .unwrap_or_default();

    view! {
        <Card>
            <div class="flex items-start justify-between gap-4">
                <div>
                    <h3 class="text-xl font-semibold text-gray-900">{job.title}</h3>
                    <div class="flex flex-wrap gap-3 text-sm text-gray-600 mt-1">
                        {job.location.map(|location| view! { <span>{location}</span> })}
                        {job.salary.map(|salary| view! { <span>{utils::format_salary(salary)}</span> })}
                        {job.job_type.map(|job_type| view! { <span>{job_type}</span> })}
                        {job.work_mode.map(|work_mode| view! { <span>{work_mode}</span> })}
                    </div>
                    <p class="text-sm text-gray-500 mt-2">{posted}</p>
                </div>
                <div class="flex items-center gap-3">
                    <A
                        href=applications_path
                        class="px-4 py-2 bg-purple-100 text-purple-700 rounded-lg font-medium hover:bg-purple-200"
                    >
                        {format!("Applications ({})", job.application_count.unwrap_or(0))}
                    </A>
                    <button
                        on:click=move |_| on_delete(job_id)
                        class="px-4 py-2 text-red-600 hover:bg-red-50 rounded-lg font-medium"
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declined_confirm_issues_no_delete() {
        assert_eq!(confirmed_delete(false, 42), None);
    }

    #[test]
    fn accepted_confirm_deletes_the_chosen_job() {
        assert_eq!(confirmed_delete(true, 42), Some(42));
    }
}
