use leptos::*;

use crate::api::api_client;
use crate::components::forms::{NumberField, SelectField, TextArea, TextField};
use crate::components::layout::Card;
use crate::components::notifications::{ErrorAlert, SuccessAlert};
use crate::forms;
use crate::types::{CreateJobRequest, JOB_TYPES, WORK_MODES};

#[component]
pub fn PostJobPage() -> impl IntoView {
    let (error, set_error) = create_signal(None::<String>);
    let (success, set_success) = create_signal(None::<String>);

    let title = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let skills_required = create_rw_signal(String::new());
    let location = create_rw_signal(String::new());
    let salary = create_rw_signal(String::new());
    let work_mode = create_rw_signal(String::new());
    let job_type = create_rw_signal(String::new());
    let deadline = create_rw_signal(String::new());

    let post = create_action(move |request: &CreateJobRequest| {
        let request = request.clone();
        async move {
            set_error.set(None);
            set_success.set(None);
            match api_client().create_job(&request).await {
                Ok(_) => {
                    set_success.set(Some("Job posted successfully".to_string()));
                    title.set(String::new());
                    description.set(String::new());
                    skills_required.set(String::new());
                    location.set(String::new());
                    salary.set(String::new());
                    work_mode.set(String::new());
                    job_type.set(String::new());
                    deadline.set(String::new());
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(title) = forms::optional(&title.get()) else {
            set_error.set(Some("Job title is required".to_string()));
            return;
        };
        let Some(description) = forms::optional(&description.get()) else {
            set_error.set(Some("Job description is required".to_string()));
            return;
        };
        post.dispatch(CreateJobRequest {
            title,
            description,
            skills_required: forms::optional(&skills_required.get()),
            location: forms::optional(&location.get()),
            salary: forms::optional_number(&salary.get()),
            work_mode: forms::optional(&work_mode.get()),
            job_type: forms::optional(&job_type.get()),
            deadline: forms::optional(&deadline.get()),
        });
    };

    view! {
        <div class="max-w-4xl mx-auto">
            <Card>
                <h1 class="text-2xl font-bold text-gray-900 mb-4">"Post a New Job"</h1>

                {move || error.get().map(|msg| view! { <ErrorAlert message=msg/> })}
                {move || success.get().map(|msg| view! { <SuccessAlert message=msg/> })}

                <form class="space-y-6" on:submit=on_submit>
                    <TextField label="Job Title" value=title placeholder="e.g. Backend Engineer" required=true/>
                    <TextArea
                        label="Description"
                        value=description
                        rows=6
                        placeholder="Describe the role and responsibilities"
                        required=true
                    />
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <TextField label="Required Skills" value=skills_required placeholder="e.g. Rust, SQL"/>
                        <TextField label="Location" value=location placeholder="City, Country"/>
                        <NumberField label="Salary" value=salary placeholder="e.g. 60000"/>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-2">
                                "Application Deadline"
                            </label>
                            <input
                                type="date"
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500"
                                prop:value=move || deadline.get()
                                on:input=move |ev| deadline.set(event_target_value(&ev))
                            />
                        </div>
                        <SelectField label="Job Type" value=job_type options=&JOB_TYPES/>
                        <SelectField label="Work Mode" value=work_mode options=&WORK_MODES/>
                    </div>

                    <div class="flex justify-end">
                        <button
                            type="submit"
                            disabled=move || post.pending().get()
                            class="bg-gradient-to-r from-purple-600 to-blue-600 text-white px-8 py-3 rounded-lg font-semibold disabled:opacity-50"
                        >
                            {move || if post.pending().get() { "Posting..." } else { "Post Job" }}
                        </button>
                    </div>
                </form>
            </Card>
        </div>
    }
}
