use leptos::*;
use leptos_router::*;

use crate::api::{api_client, ApiError};
use crate::components::layout::{Card, LoadingSpinner};
use crate::components::notifications::{ErrorAlert, SuccessAlert};
use crate::forms;
use crate::types::{ApplyRequest, Job};
use crate::utils;

fn job_id_param(params: &ParamsMap) -> Option<i64> {
    params.get("job_id").and_then(|raw| raw.parse().ok())
}

#[component]
pub fn StudentJobDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let job_id = move || params.with(job_id_param);

    let job = create_resource(job_id, |job_id| async move {
        match job_id {
            Some(job_id) => api_client().job_details(job_id).await,
            None => Err(ApiError::Status {
                status: 404,
                message: "Job not found".to_string(),
            }),
        }
    });

    view! {
        <Suspense fallback=move || view! { <LoadingSpinner/> }>
            {move || job.get().map(|result| match result {
                Ok(job) => view! { <JobDetails job/> }.into_view(),
                Err(err) => view! { <ErrorAlert message=err.to_string()/> }.into_view(),
            })}
        </Suspense>
    }
}

#[component]
fn JobDetails(job: Job) -> impl IntoView {
    let (error, set_error) = create_signal(None::<String>);
    let (success, set_success) = create_signal(None::<String>);
    let cover_letter = create_rw_signal(String::new());

    let job_id = job.id;
    let apply = create_action(move |request: &ApplyRequest| {
        let request = request.clone();
        async move {
            set_error.set(None);
            set_success.set(None);
            match api_client().apply_to_job(job_id, &request).await {
                Ok(_) => {
                    set_success.set(Some("Application submitted successfully".to_string()));
                    cover_letter.set(String::new());
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_apply = move |_| {
        apply.dispatch(ApplyRequest {
            cover_letter: forms::optional(&cover_letter.get()),
        });
    };

    let go_back = move |_| {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    };

    view! {
        <div class="max-w-4xl mx-auto space-y-6">
            <Card>
                <h1 class="text-3xl font-bold text-gray-900 mb-2">{job.title}</h1>
                <p class="text-gray-600 mb-2">{job.company_name.unwrap_or_default()}</p>
                <div class="flex flex-wrap gap-4 text-gray-600">
                    {job.location.map(|location| view! { <span>{location}</span> })}
                    {job.salary.map(|salary| view! { <span>{utils::format_salary(salary)}</span> })}
                    {job.job_type.map(|job_type| view! { <span>{job_type}</span> })}
                    {job.work_mode.map(|work_mode| view! { <span>{work_mode}</span> })}
                </div>

                <div class="mt-6">
                    <h2 class="text-xl font-semibold text-gray-900 mb-2">"About the role"</h2>
                    <p class="text-gray-700 whitespace-pre-line">{job.description}</p>
                </div>

                {job.skills_required.map(|skills| view! {
                    <div class="mt-4">
                        <h3 class="font-semibold text-gray-900 mb-1">"Skills"</h3>
                        <p class="text-gray-700">{skills}</p>
                    </div>
                })}

                {job.deadline.map(|deadline| view! {
                    <p class="mt-4 text-sm text-gray-500">
                        {format!("Apply by {}", utils::format_date(&deadline))}
                    </p>
                })}

                <div class="mt-8">
                    {move || error.get().map(|msg| view! { <ErrorAlert message=msg/> })}
                    {move || success.get().map(|msg| view! { <SuccessAlert message=msg/> })}

                    <label class="block text-sm font-medium text-gray-700 mb-2">
                        "Cover Letter (optional)"
                    </label>
                    <textarea
                        rows=5
                        class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500"
                        placeholder="Write a brief cover letter"
                        prop:value=move || cover_letter.get()
                        on:input=move |ev| cover_letter.set(event_target_value(&ev))
                    ></textarea>

                    <div class="mt-4 flex items-center gap-3">
                        <button
                            on:click=on_apply
                            disabled=move || apply.pending().get()
                            class="bg-gradient-to-r from-purple-600 to-blue-600 text-white px-6 py-3 rounded-lg font-semibold disabled:opacity-50"
                        >
                            {move || if apply.pending().get() { "Applying..." } else { "Apply Now" }}
                        </button>
                        <button
                            on:click=go_back
                            class="px-6 py-3 border border-gray-300 rounded-lg hover:bg-gray-50"
                        >
                            "Back"
                        </button>
                    </div>
                </div>
            </Card>
        </div>
    }
}
