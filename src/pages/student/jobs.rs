use leptos::*;
use leptos_router::*;

use crate::api::api_client;
use crate::components::forms::{NumberField, SelectField, TextField};
use crate::components::layout::{Card, EmptyState, LoadingSpinner};
use crate::components::notifications::ErrorAlert;
use crate::routes;
use crate::types::{Job, JobFilters, JOB_TYPES, WORK_MODES};
use crate::utils::{self, RequestGuard};

#[component]
pub fn StudentJobsPage() -> impl IntoView {
    let (jobs, set_jobs) = create_signal(Vec::<Job>::new());
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let keyword = create_rw_signal(String::new());
    let location = create_rw_signal(String::new());
    let job_type = create_rw_signal(String::new());
    let work_mode = create_rw_signal(String::new());
    let salary_min = create_rw_signal(String::new());

    let guard = RequestGuard::default();
    let fetch_jobs = move |filters: JobFilters| {
        let guard = guard.clone();
        let seq = guard.issue();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api_client().search_jobs(&filters).await;
            // A newer search has been issued since; drop this response.
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

    let current_filters = move || JobFilters {
        keyword: keyword.get(),
        location: location.get(),
        job_type: job_type.get(),
        work_mode: work_mode.get(),
        salary_min: salary_min.get(),
        ..JobFilters::default()
    };

    // Default, most-recent-first result set on mount.
    fetch_jobs(JobFilters::default());

    let on_search = {
        let fetch_jobs = fetch_jobs.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            fetch_jobs(current_filters());
        }
    };

    let on_reset = {
        let fetch_jobs = fetch_jobs.clone();
        move |_| {
            keyword.set(String::new());
            location.set(String::new());
            job_type.set(String::new());
            work_mode.set(String::new());
            salary_min.set(String::new());
            fetch_jobs(JobFilters::default());
        }
    };

    view! {
        <div class="space-y-6">
            <Card>
                <form class="grid grid-cols-1 md:grid-cols-3 gap-4" on:submit=on_search>
                    <TextField label="Keyword" value=keyword placeholder="Search by title or description"/>
                    <TextField label="Location" value=location placeholder="Location"/>
                    <NumberField label="Min Salary" value=salary_min placeholder="Min Salary"/>
                    <SelectField label="Job Type" value=job_type options=&JOB_TYPES/>
                    <SelectField label="Work Mode" value=work_mode options=&WORK_MODES/>
                    <div class="flex items-end gap-3">
                        <button
                            type="submit"
                            class="bg-gradient-to-r from-purple-600 to-blue-600 text-white px-6 py-3 rounded-lg font-semibold"
                        >
                            "Search"
                        </button>
                        <button
                            type="button"
                            on:click=on_reset
                            class="px-4 py-3 border border-gray-300 rounded-lg hover:bg-gray-50"
                        >
                            "Reset"
                        </button>
                    </div>
                </form>
            </Card>

            {move || error.get().map(|msg| view! { <ErrorAlert message=msg/> })}

            {move || {
                if loading.get() {
                    view! { <LoadingSpinner/> }.into_view()
                } else if jobs.get().is_empty() {
                    view! { <EmptyState message="No jobs found"/> }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            {jobs
                                .get()
                                .into_iter()
                                .map(|job| view! { <JobCard job/> })
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
fn JobCard(job: Job) -> impl IntoView {
    let details_path = routes::student_job_details_path(job.id);
    let posted = job
        .posted_at
        .as_deref()
        .map(|raw| format!("Posted {}", utils::format_date(raw)));

    view! {
        <div class="bg-white/80 backdrop-blur-lg rounded-2xl shadow-lg border border-purple-100 p-6">
            <h3 class="text-xl font-semibold text-gray-900 mb-1">{job.title}</h3>
            <p class="text-gray-600 mb-2">{job.company_name.unwrap_or_default()}</p>
            <p class="text-gray-700 mb-3">{utils::truncate_string(&job.description, 160)}</p>
            <div class="flex flex-wrap gap-3 text-sm text-gray-600">
                {job.location.map(|location| view! { <span>{location}</span> })}
                {job.salary.map(|salary| view! { <span>{utils::format_salary(salary)}</span> })}
                {job.job_type.map(|job_type| view! { <span>{job_type}</span> })}
            </div>
            <div class="mt-4 flex items-center justify-between">
                <span class="text-sm text-gray-500">{posted.unwrap_or_default()}</span>
                <A href=details_path class="text-purple-600 hover:text-purple-700 font-semibold">
                    "View"
                </A>
            </div>
        </div>
    }
}
