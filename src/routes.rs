// Route table: fixed at build time, partitioned into public, student and
// recruiter namespaces. Pages and guards share these constants so the
// router, the nav menu and the redirect targets cannot drift apart.
use crate::types::Role;

pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const SIGNUP: &str = "/signup";
    pub const UNAUTHORIZED: &str = "/unauthorized";

    pub const STUDENT_DASHBOARD: &str = "/student/dashboard";
    pub const STUDENT_PROFILE: &str = "/student/profile";
    pub const STUDENT_JOBS: &str = "/student/jobs";
    pub const STUDENT_JOB_DETAILS: &str = "/student/jobs/:job_id";
    pub const STUDENT_APPLICATIONS: &str = "/student/applications";

    pub const RECRUITER_DASHBOARD: &str = "/recruiter/dashboard";
    pub const RECRUITER_PROFILE: &str = "/recruiter/profile";
    pub const RECRUITER_JOBS: &str = "/recruiter/jobs";
    pub const RECRUITER_POST_JOB: &str = "/recruiter/post-job";
    pub const RECRUITER_JOB_APPLICATIONS: &str = "/recruiter/jobs/:job_id/applications";
}

pub const STUDENT_ONLY: &[Role] = &[Role::Student];
pub const RECRUITER_ONLY: &[Role] = &[Role::Recruiter];

pub struct ProtectedRouteDef {
    pub path: &'static str,
    pub allowed_roles: &'static [Role],
}

pub const PROTECTED_ROUTES: &[ProtectedRouteDef] = &[
    ProtectedRouteDef { path: paths::STUDENT_DASHBOARD, allowed_roles: STUDENT_ONLY },
    ProtectedRouteDef { path: paths::STUDENT_PROFILE, allowed_roles: STUDENT_ONLY },
    ProtectedRouteDef { path: paths::STUDENT_JOBS, allowed_roles: STUDENT_ONLY },
    ProtectedRouteDef { path: paths::STUDENT_JOB_DETAILS, allowed_roles: STUDENT_ONLY },
    ProtectedRouteDef { path: paths::STUDENT_APPLICATIONS, allowed_roles: STUDENT_ONLY },
    ProtectedRouteDef { path: paths::RECRUITER_DASHBOARD, allowed_roles: RECRUITER_ONLY },
    ProtectedRouteDef { path: paths::RECRUITER_PROFILE, allowed_roles: RECRUITER_ONLY },
    ProtectedRouteDef { path: paths::RECRUITER_JOBS, allowed_roles: RECRUITER_ONLY },
    ProtectedRouteDef { path: paths::RECRUITER_POST_JOB, allowed_roles: RECRUITER_ONLY },
    ProtectedRouteDef { path: paths::RECRUITER_JOB_APPLICATIONS, allowed_roles: RECRUITER_ONLY },
];

pub fn allowed_roles_for(path: &str) -> Option<&'static [Role]> {
    PROTECTED_ROUTES
        .iter()
        .find(|route| route.path == path)
        .map(|route| route.allowed_roles)
}

pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::Student => paths::STUDENT_DASHBOARD,
        Role::Recruiter => paths::RECRUITER_DASHBOARD,
    }
}

pub fn student_job_details_path(job_id: i64) -> String {
    format!("/student/jobs/{job_id}")
}

pub fn recruiter_job_applications_path(job_id: i64) -> String {
    format!("/recruiter/jobs/{job_id}/applications")
}

pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

const STUDENT_NAV: &[NavItem] = &[
    NavItem { path: paths::STUDENT_DASHBOARD, label: "Dashboard" },
    NavItem { path: paths::STUDENT_JOBS, label: "Find Jobs" },
    NavItem { path: paths::STUDENT_APPLICATIONS, label: "My Applications" },
];

const RECRUITER_NAV: &[NavItem] = &[
    NavItem { path: paths::RECRUITER_DASHBOARD, label: "Dashboard" },
    NavItem { path: paths::RECRUITER_JOBS, label: "Manage Jobs" },
    NavItem { path: paths::RECRUITER_POST_JOB, label: "Post New Job" },
];

pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Student => STUDENT_NAV,
        Role::Recruiter => RECRUITER_NAV,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_stable() {
        let first = allowed_roles_for(paths::STUDENT_PROFILE);
        let second = allowed_roles_for(paths::STUDENT_PROFILE);
        assert_eq!(first, second);
        assert_eq!(first, Some(STUDENT_ONLY));
    }

    #[test]
    fn namespaces_gate_the_matching_role() {
        for route in PROTECTED_ROUTES {
            if route.path.starts_with("/student") {
                assert_eq!(route.allowed_roles, STUDENT_ONLY, "{}", route.path);
            } else {
                assert_eq!(route.allowed_roles, RECRUITER_ONLY, "{}", route.path);
            }
        }
    }

    #[test]
    fn public_paths_are_not_protected() {
        assert_eq!(allowed_roles_for(paths::HOME), None);
        assert_eq!(allowed_roles_for(paths::LOGIN), None);
        assert_eq!(allowed_roles_for(paths::SIGNUP), None);
        assert_eq!(allowed_roles_for(paths::UNAUTHORIZED), None);
        assert_eq!(allowed_roles_for("/no/such/page"), None);
    }

    #[test]
    fn dashboards_are_chosen_by_role() {
        assert_eq!(dashboard_path(Role::Student), paths::STUDENT_DASHBOARD);
        assert_eq!(dashboard_path(Role::Recruiter), paths::RECRUITER_DASHBOARD);
    }

    #[test]
    fn nav_menus_stay_inside_their_namespace() {
        for item in nav_items(Role::Student) {
            assert!(item.path.starts_with("/student"));
        }
        for item in nav_items(Role::Recruiter) {
            assert!(item.path.starts_with("/recruiter"));
        }
    }

    #[test]
    fn detail_paths_match_route_patterns() {
        assert_eq!(student_job_details_path(42), "/student/jobs/42");
        assert_eq!(
            recruiter_job_applications_path(42),
            "/recruiter/jobs/42/applications"
        );
    }
}
