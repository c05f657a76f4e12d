use leptos::*;

use crate::api::api_client;
use crate::components::forms::{TextArea, TextField};
use crate::components::layout::{Card, LoadingSpinner};
use crate::components::notifications::{ErrorAlert, SuccessAlert};
use crate::forms;
use crate::types::UpdateRecruiterProfileRequest;

#[component]
pub fn RecruiterProfilePage() -> impl IntoView {
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (success, set_success) = create_signal(None::<String>);

    let company_name = create_rw_signal(String::new());
    let company_description = create_rw_signal(String::new());
    let location = create_rw_signal(String::new());
    let contact_person = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let website = create_rw_signal(String::new());

    let profile = create_resource(|| (), |_| async move { api_client().recruiter_profile().await });

    // Seed the form once the profile arrives.
    create_effect(move |_| {
        if let Some(result) = profile.get() {
            match result {
                Ok(profile) => {
                    company_name.set(profile.company_name);
                    company_description.set(profile.company_description.unwrap_or_default());
                    location.set(profile.location.unwrap_or_default());
                    contact_person.set(profile.contact_person.unwrap_or_default());
                    phone.set(profile.phone.unwrap_or_default());
                    website.set(profile.website.unwrap_or_default());
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        }
    });

    let save = create_action(move |request: &UpdateRecruiterProfileRequest| {
        let request = request.clone();
        async move {
            set_error.set(None);
            set_success.set(None);
            match api_client().update_recruiter_profile(&request).await {
                Ok(_) => set_success.set(Some("Profile updated successfully".to_string())),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_save = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        save.dispatch(UpdateRecruiterProfileRequest {
            company_name: company_name.get(),
            company_description: forms::optional(&company_description.get()),
            location: forms::optional(&location.get()),
            contact_person: forms::optional(&contact_person.get()),
            phone: forms::optional(&phone.get()),
            website: forms::optional(&website.get()),
        });
    };

    view! {
        <Show when=move || !loading.get() fallback=move || view! { <LoadingSpinner/> }>
            <div class="max-w-4xl mx-auto space-y-6">
                <Card>
                    <h1 class="text-2xl font-bold text-gray-900 mb-4">"Company Profile"</h1>

                    {move || error.get().map(|msg| view! { <ErrorAlert message=msg/> })}
                    {move || success.get().map(|msg| view! { <SuccessAlert message=msg/> })}

                    <form class="space-y-6" on:submit=on_save>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <TextField
                                label="Company Name"
                                value=company_name
                                placeholder="Your company"
                                required=true
                            />
                            <TextField label="Contact Person" value=contact_person placeholder="Full name"/>
                            <TextField label="Location" value=location placeholder="City, Country"/>
                            <TextField label="Phone" value=phone placeholder="Contact phone"/>
                            <TextField label="Website" value=website placeholder="https://example.com"/>
                            <div class="md:col-span-2">
                                <TextArea
                                    label="About the Company"
                                    value=company_description
                                    rows=4
                                    placeholder="What does your company do?"
                                />
                            </div>
                        </div>

                        <div class="flex justify-end">
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
