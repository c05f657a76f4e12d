// Access guard: role-based route protection evaluated against the current
// session on every navigation.
use leptos::*;
use leptos_router::Redirect;

use crate::routes::{self, paths};
use crate::session::use_session;
use crate::types::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    RedirectToLogin,
    RedirectToUnauthorized,
}

/// The guard decision. The login check takes precedence over the role
/// check; an empty allowed set admits any authenticated role.
pub fn decide(authenticated: bool, role: Option<Role>, allowed: &[Role]) -> GuardOutcome {
    if !authenticated {
        return GuardOutcome::RedirectToLogin;
    }
    if !allowed.is_empty() && !role.is_some_and(|role| allowed.contains(&role)) {
        return GuardOutcome::RedirectToUnauthorized;
    }
    GuardOutcome::Render
}

/// Wraps a protected view: renders it, or redirects to login or the
/// unauthorized page depending on session state.
#[component]
pub fn RequireRole(allowed_roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    move || {
        let session = session.get();
        match decide(session.is_authenticated(), session.role(), allowed_roles) {
            GuardOutcome::Render => children().into_view(),
            GuardOutcome::RedirectToLogin => view! { <Redirect path=paths::LOGIN/> }.into_view(),
            GuardOutcome::RedirectToUnauthorized => {
                view! { <Redirect path=paths::UNAUTHORIZED/> }.into_view()
            }
        }
    }
}

/// Wraps the login and signup views: an already-authenticated user is sent
/// to the dashboard for their role instead.
#[component]
pub fn RedirectIfAuthenticated(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    move || {
        let session = session.get();
        match session.role().filter(|_| session.is_authenticated()) {
            Some(role) => {
                view! { <Redirect path=routes::dashboard_path(role)/> }.into_view()
            }
            None => children().into_view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{RECRUITER_ONLY, STUDENT_ONLY};

    #[test]
    fn unauthenticated_always_goes_to_login() {
        assert_eq!(
            decide(false, None, STUDENT_ONLY),
            GuardOutcome::RedirectToLogin
        );
        // Login check wins over role mismatch.
        assert_eq!(
            decide(false, Some(Role::Student), RECRUITER_ONLY),
            GuardOutcome::RedirectToLogin
        );
        assert_eq!(decide(false, None, &[]), GuardOutcome::RedirectToLogin);
    }

    #[test]
    fn wrong_role_goes_to_unauthorized() {
        assert_eq!(
            decide(true, Some(Role::Student), RECRUITER_ONLY),
            GuardOutcome::RedirectToUnauthorized
        );
        assert_eq!(
            decide(true, Some(Role::Recruiter), STUDENT_ONLY),
            GuardOutcome::RedirectToUnauthorized
        );
    }

    #[test]
    fn matching_role_renders() {
        assert_eq!(
            decide(true, Some(Role::Student), STUDENT_ONLY),
            GuardOutcome::Render
        );
        assert_eq!(
            decide(true, Some(Role::Recruiter), RECRUITER_ONLY),
            GuardOutcome::Render
        );
    }

    #[test]
    fn empty_allowed_set_admits_any_authenticated_role() {
        assert_eq!(decide(true, Some(Role::Student), &[]), GuardOutcome::Render);
        assert_eq!(decide(true, Some(Role::Recruiter), &[]), GuardOutcome::Render);
        assert_eq!(decide(true, None, &[]), GuardOutcome::Render);
    }

    #[test]
    fn authenticated_without_role_fails_role_gates() {
        assert_eq!(
            decide(true, None, STUDENT_ONLY),
            GuardOutcome::RedirectToUnauthorized
        );
    }
}
