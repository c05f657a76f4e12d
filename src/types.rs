// Shared type definitions
use serde::{Deserialize, Serialize};

use crate::forms;

/// Account role. Drives route gating and navigation-menu contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Recruiter,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Recruiter => "recruiter",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the logged-in user taken at login/signup. Not refreshed
/// until the user re-authenticates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Rejected,
        ApplicationStatus::Hired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Hired => "Hired",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => {
                "inline-block px-3 py-1 rounded-full text-sm font-medium border bg-yellow-100 text-yellow-700 border-yellow-200"
            }
            ApplicationStatus::Shortlisted => {
                "inline-block px-3 py-1 rounded-full text-sm font-medium border bg-blue-100 text-blue-700 border-blue-200"
            }
            ApplicationStatus::Rejected => {
                "inline-block px-3 py-1 rounded-full text-sm font-medium border bg-red-100 text-red-700 border-red-200"
            }
            ApplicationStatus::Hired => {
                "inline-block px-3 py-1 rounded-full text-sm font-medium border bg-green-100 text-green-700 border-green-200"
            }
        }
    }

    pub fn parse(value: &str) -> Option<ApplicationStatus> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const JOB_TYPES: [&str; 4] = ["full-time", "part-time", "internship", "contract"];
pub const WORK_MODES: [&str; 3] = ["remote", "onsite", "hybrid"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub skills_required: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub work_mode: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub application_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub expected_salary: Option<i64>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cv_filename: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecruiterProfile {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// One of the caller's own applications, as the student sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    #[serde(default)]
    pub job_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<i64>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub applied_at: Option<String>,
}

/// An application to one of the recruiter's jobs, with applicant details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub cv_filename: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub applied_at: Option<String>,
}

// Request types

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStudentProfileRequest {
    pub name: String,
    pub education: Option<String>,
    pub skills: Option<String>,
    pub location: Option<String>,
    pub expected_salary: Option<i64>,
    pub bio: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRecruiterProfileRequest {
    pub company_name: String,
    pub company_description: Option<String>,
    pub location: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub skills_required: Option<String>,
    pub location: Option<String>,
    pub salary: Option<i64>,
    pub work_mode: Option<String>,
    pub job_type: Option<String>,
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyRequest {
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ApplicationStatus,
}

// Response envelopes

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserRecord,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse<T> {
    pub profile: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsResponse {
    #[serde(default)]
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub job: Job,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationsResponse {
    #[serde(default)]
    pub applications: Vec<Application>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantsResponse {
    #[serde(default)]
    pub applications: Vec<Applicant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadCvResponse {
    pub filename: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Job-search filter set. Only populated filter fields are serialized;
/// sort order and pagination always carry their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct JobFilters {
    pub keyword: String,
    pub location: String,
    pub job_type: String,
    pub work_mode: String,
    pub salary_min: String,
    pub skills: String,
    pub sort_by: String,
    pub order: String,
    pub page: u32,
    pub per_page: u32,
}

impl Default for JobFilters {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            location: String::new(),
            job_type: String::new(),
            work_mode: String::new(),
            salary_min: String::new(),
            skills: String::new(),
            sort_by: "posted_at".to_string(),
            order: "DESC".to_string(),
            page: 1,
            per_page: 20,
        }
    }
}

impl JobFilters {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        for (key, value) in [
            ("keyword", &self.keyword),
            ("location", &self.location),
            ("job_type", &self.job_type),
            ("work_mode", &self.work_mode),
            ("skills", &self.skills),
        ] {
            if let Some(value) = forms::optional(value) {
                query.push((key, value));
            }
        }
        if let Some(salary_min) = forms::optional_number(&self.salary_min) {
            query.push(("salary_min", salary_min.to_string()));
        }
        query.push(("sort_by", self.sort_by.clone()));
        query.push(("order", self.order.clone()));
        query.push(("page", self.page.to_string()));
        query.push(("per_page", self.per_page.to_string()));
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_serde() {
        let json = serde_json::to_string(&Role::Student).unwrap();
        assert_eq!(json, "\"student\"");
        let back: Role = serde_json::from_str("\"recruiter\"").unwrap();
        assert_eq!(back, Role::Recruiter);
    }

    #[test]
    fn status_parse_accepts_wire_values_only() {
        assert_eq!(
            ApplicationStatus::parse("shortlisted"),
            Some(ApplicationStatus::Shortlisted)
        );
        assert_eq!(ApplicationStatus::parse("Shortlisted"), None);
        assert_eq!(ApplicationStatus::parse(""), None);
    }

    #[test]
    fn default_filters_serialize_to_defaults_only() {
        let query = JobFilters::default().to_query();
        assert_eq!(
            query,
            vec![
                ("sort_by", "posted_at".to_string()),
                ("order", "DESC".to_string()),
                ("page", "1".to_string()),
                ("per_page", "20".to_string()),
            ]
        );
    }

    #[test]
    fn populated_filters_only_include_set_fields() {
        let filters = JobFilters {
            location: "Remote".to_string(),
            ..JobFilters::default()
        };
        let query = filters.to_query();
        assert!(query.contains(&("location", "Remote".to_string())));
        assert!(query.contains(&("page", "1".to_string())));
        assert!(!query.iter().any(|(k, _)| *k == "keyword"));
        assert!(!query.iter().any(|(k, _)| *k == "job_type"));
        assert!(!query.iter().any(|(k, _)| *k == "salary_min"));
    }

    #[test]
    fn salary_filter_is_numerically_coerced() {
        let filters = JobFilters {
            salary_min: "50000".to_string(),
            ..JobFilters::default()
        };
        assert!(filters
            .to_query()
            .contains(&("salary_min", "50000".to_string())));

        let bad = JobFilters {
            salary_min: "lots".to_string(),
            ..JobFilters::default()
        };
        assert!(!bad.to_query().iter().any(|(k, _)| *k == "salary_min"));
    }

    #[test]
    fn job_with_missing_optionals_deserializes() {
        let job: Job = serde_json::from_str(r#"{"id": 7, "title": "Backend Engineer"}"#).unwrap();
        assert_eq!(job.id, 7);
        assert_eq!(job.salary, None);
        assert_eq!(job.company_name, None);
    }
}
