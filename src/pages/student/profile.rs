use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::api::api_client;
use crate::components::forms::{NumberField, TextArea, TextField};
use crate::components::layout::{Card, LoadingSpinner};
use crate::components::notifications::{ErrorAlert, SuccessAlert};
use crate::forms;
use crate::types::UpdateStudentProfileRequest;
use crate::utils;

#[component]
pub fn StudentProfilePage() -> impl IntoView {
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (success, set_success) = create_signal(None::<String>);

    let name = create_rw_signal(String::new());
    let education = create_rw_signal(String::new());
    let skills = create_rw_signal(String::new());
    let location = create_rw_signal(String::new());
    let expected_salary = create_rw_signal(String::new());
    let bio = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let cv_filename = create_rw_signal(None::<String>);

    let profile = create_resource(|| (), |_| async move { api_client().student_profile().await });

    // Seed the form once the profile arrives.
    create_effect(move |_| {
        if let Some(result) = profile.get() {
            match result {
                Ok(profile) => {
                    name.set(profile.name);
                    education.set(profile.education.unwrap_or_default());
                    skills.set(profile.skills.unwrap_or_default());
                    location.set(profile.location.unwrap_or_default());
                    expected_salary.set(
                        profile
                            .expected_salary
                            .map(|s| s.to_string())
                            .unwrap_or_default(),
                    );
                    bio.set(profile.bio.unwrap_or_default());
                    phone.set(profile.phone.unwrap_or_default());
                    cv_filename.set(profile.cv_filename);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        }
    });

    let save = create_action(move |request: &UpdateStudentProfileRequest| {
        let request = request.clone();
        async move {
            set_error.set(None);
            set_success.set(None);
            match api_client().update_student_profile(&request).await {
                Ok(_) => set_success.set(Some("Profile updated successfully".to_string())),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_save = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        save.dispatch(UpdateStudentProfileRequest {
            name: name.get(),
            education: forms::optional(&education.get()),
            skills: forms::optional(&skills.get()),
            location: forms::optional(&location.get()),
            expected_salary: forms::optional_number(&expected_salary.get()),
            bio: forms::optional(&bio.get()),
            phone: forms::optional(&phone.get()),
        });
    };

    let upload = create_action(move |file: &web_sys::File| {
        let file = file.clone();
        async move {
            set_error.set(None);
            set_success.set(None);
            let Ok(form) = web_sys::FormData::new() else {
                set_error.set(Some("Failed to prepare upload".to_string()));
                return;
            };
            if form.append_with_blob("cv", &file).is_err() {
                set_error.set(Some("Failed to prepare upload".to_string()));
                return;
            }
            match api_client().upload_cv(form).await {
                Ok(response) => {
                    cv_filename.set(Some(response.filename));
                    set_success.set(Some("CV uploaded successfully".to_string()));
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    // Extension check happens locally; disallowed files never hit the network.
    let on_file_change = move |ev: ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        input.set_value("");
        set_error.set(None);
        set_success.set(None);
        if !utils::is_allowed_cv_file(&file.name()) {
            set_error.set(Some("Please upload a PDF, DOC, or DOCX file".to_string()));
            return;
        }
        upload.dispatch(file);
    };

    view! {
        <Show when=move || !loading.get() fallback=move || view! { <LoadingSpinner/> }>
            <div class="max-w-4xl mx-auto space-y-6">
                <Card>
                    <h1 class="text-2xl font-bold text-gray-900 mb-4">"Edit Profile"</h1>

                    {move || error.get().map(|msg| view! { <ErrorAlert message=msg/> })}
                    {move || success.get().map(|msg| view! { <SuccessAlert message=msg/> })}

                    <form class="space-y-6" on:submit=on_save>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <TextField label="Full Name" value=name placeholder="Your name" required=true/>
                            <TextField label="Phone" value=phone placeholder="Your phone"/>
                            <TextField label="Education" value=education placeholder="e.g. BSc Computer Science"/>
                            <TextField label="Location" value=location placeholder="City, Country"/>
                            <div class="md:col-span-2">
                                <TextArea label="Skills" value=skills rows=3 placeholder="e.g. Rust, Python, SQL"/>
                            </div>
                            <NumberField label="Expected Salary" value=expected_salary placeholder="e.g. 50000"/>
                            <div class="md:col-span-2">
                                <TextArea label="Bio" value=bio rows=4 placeholder="Tell recruiters about yourself"/>
                            </div>
                        </div>

                        <div class="flex items-center justify-between gap-4">
                            <div class="flex items-center gap-3">
                                <label class="flex items-center gap-2 cursor-pointer bg-gradient-to-r from-purple-600 to-blue-600 text-white px-4 py-2 rounded-lg font-semibold">
                                    {move || if upload.pending().get() { "Uploading..." } else { "Upload CV" }}
                                    <input
                                        type="file"
                                        accept=".pdf,.doc,.docx"
                                        class="hidden"
                                        on:change=on_file_change
                                    />
                                </label>
                                <span class="text-sm text-gray-600">
                                    {move || match cv_filename.get() {
                                        Some(filename) => format!("Uploaded: {filename}"),
                                        None => "No CV uploaded".to_string(),
                                    }}
                                </span>
                            </div>

                            <button
                                type="submit"
                                disabled=move || save.pending().get()
                                class="bg-purple-600 text-white px-6 py-2 rounded-lg font-semibold disabled:opacity-50"
                            >
                                {move || if save.pending().get() { "Saving..." } else { "Save Changes" }}
                            </button>
                        </div>
                    </form>
                </Card>
            </div>
        </Show>
    }
}
