use leptos::*;
use leptos_router::*;

use crate::api::api_client;
use crate::components::layout::{Card, LoadingSpinner};
use crate::components::notifications::ErrorAlert;
use crate::routes::{self, paths};
use crate::types::{Job, RecruiterProfile};
use crate::utils;

#[component]
pub fn RecruiterDashboardPage() -> impl IntoView {
    // Profile and posted jobs are fetched concurrently on mount.
    let data = create_resource(
        || (),
        |_| async move {
            let client = api_client();
            futures::join!(client.recruiter_profile(), client.recruiter_jobs())
        },
    );

    view! {
        <Suspense fallback=move || view! { <LoadingSpinner/> }>
            {move || data.get().map(|(profile, jobs)| match (profile, jobs) {
                (Ok(profile), Ok(jobs)) => view! {
                    <Dashboard profile jobs/>
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
fn Dashboard(profile: RecruiterProfile, jobs: Vec<Job>) -> impl IntoView {
    let total_applications: i64 = jobs
        .iter()
        .map(|job| job.application_count.unwrap_or(0))
        .sum();
    let recent: Vec<Job> = jobs.iter().take(5).cloned().collect();

    view! {
        <div class="space-y-8">
            <Card>
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-3xl font-bold text-gray-900 mb-2">
                            {format!("Welcome back, {}!", profile.company_name)}
                        </h1>
                        <p class="text-gray-600">
                            "Manage your job postings and review applicants"
                        </p>
                    </div>
                    <A
                        href=paths::RECRUITER_POST_JOB
                        class="bg-gradient-to-r from-purple-600 to-blue-600 text-white px-6 py-3 rounded-lg font-semibold"
                    >
                        "Post New Job"
                    </A>
                </div>
            </Card>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <StatCard label="Active Jobs" value=jobs.len().to_string()/>
                <StatCard label="Total Applications" value=total_applications.to_string()/>
            </div>

            <Card>
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-2xl font-bold text-gray-900">"Recent Postings"</h2>
                    <A href=paths::RECRUITER_JOBS class="text-purple-600 font-medium">
                        "View All"
                    </A>
                </div>
                {if recent.is_empty() {
                    view! { <p class="text-gray-600">"No jobs posted yet"</p> }.into_view()
                } else {
                    recent
                        .into_iter()
                        .map(|job| {
                            let applications_path =
                                routes::recruiter_job_applications_path(job.id);
                            let posted = job
                                .posted_at
                                .as_deref()
                                .map(|raw| format!("Posted {}", utils::format_date(raw)))
                                .unwrap_or_default();
                            view! {
                                <div class="flex items-center justify-between py-3 border-b border-gray-100 last:border-b-0">
                                    <div>
                                        <p class="font-medium text-gray-900">{job.title}</p>
                                        <p class="text-sm text-gray-600">{posted}</p>
                                    </div>
                                    <A
                                        href=applications_path
                                        class="text-purple-600 font-medium"
                                    >
                                        {format!(
                                            "{} applicants",
                                            job.application_count.unwrap_or(0),
                                        )}
                                    </A>
                                </div>
                            }
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
