pub mod api;
pub mod components;
pub mod forms;
pub mod guard;
pub mod pages;
pub mod routes;
pub mod session;
pub mod types;
pub mod utils;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::layout::Layout;
use crate::guard::{RedirectIfAuthenticated, RequireRole};
use crate::pages::recruiter::*;
use crate::pages::student::*;
use crate::pages::{HomePage, LoginPage, NotFoundPage, SignupPage, UnauthorizedPage};
use crate::routes::{paths, RECRUITER_ONLY, STUDENT_ONLY};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    session::provide_session();

    view! {
        <Title text="JobPortal"/>
        <Meta name="description" content="Job board for students and recruiters"/>

        <Router>
            <Routes>
                <Route path=paths::HOME view=HomePage/>
                <Route
                    path=paths::LOGIN
                    view=|| {
                        view! {
                            <RedirectIfAuthenticated>
                                <LoginPage/>
                            </RedirectIfAuthenticated>
                        }
                    }
                />
                <Route
                    path=paths::SIGNUP
                    view=|| {
                        view! {
                            <RedirectIfAuthenticated>
                                <SignupPage/>
                            </RedirectIfAuthenticated>
                        }
                    }
                />
                <Route path=paths::UNAUTHORIZED view=UnauthorizedPage/>

                <Route
                    path=paths::STUDENT_DASHBOARD
                    view=|| {
                        view! {
                            <RequireRole allowed_roles=STUDENT_ONLY>
                                <Layout>
                                    <StudentDashboardPage/>
                                </Layout>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=paths::STUDENT_PROFILE
                    view=|| {
                        view! {
                            <RequireRole allowed_roles=STUDENT_ONLY>
                                <Layout>
                                    <StudentProfilePage/>
                                </Layout>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=paths::STUDENT_JOBS
                    view=|| {
                        view! {
                            <RequireRole allowed_roles=STUDENT_ONLY>
                                <Layout>
                                    <StudentJobsPage/>
                                </Layout>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=paths::STUDENT_JOB_DETAILS
                    view=|| {
                        view! {
                            <RequireRole allowed_roles=STUDENT_ONLY>
                                <Layout>
                                    <StudentJobDetailsPage/>
                                </Layout>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=paths::STUDENT_APPLICATIONS
                    view=|| {
                        view! {
                            <RequireRole allowed_roles=STUDENT_ONLY>
                                <Layout>
                                    <StudentApplicationsPage/>
                                </Layout>
                            </RequireRole>
                        }
                    }
                />

                <Route
                    path=paths::RECRUITER_DASHBOARD
                    view=|| {
                        view! {
                            <RequireRole allowed_roles=RECRUITER_ONLY>
                                <Layout>
                                    <RecruiterDashboardPage/>
                                </Layout>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=paths::RECRUITER_PROFILE
                    view=|| {
                        view! {
                            <RequireRole allowed_roles=RECRUITER_ONLY>
                                <Layout>
                                    <RecruiterProfilePage/>
                                </Layout>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=paths::RECRUITER_JOBS
                    view=|| {
                        view! {
                            <RequireRole allowed_roles=RECRUITER_ONLY>
                                <Layout>
                                    <RecruiterJobsPage/>
                                </Layout>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=paths::RECRUITER_POST_JOB
                    view=|| {
                        view! {
                            <RequireRole allowed_roles=RECRUITER_ONLY>
                                <Layout>
                                    <PostJobPage/>
                                </Layout>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=paths::RECRUITER_JOB_APPLICATIONS
                    view=|| {
                        view! {
                            <RequireRole allowed_roles=RECRUITER_ONLY>
                                <Layout>
                                    <JobApplicationsPage/>
                                </Layout>
                            </RequireRole>
                        }
                    }
                />

                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}
