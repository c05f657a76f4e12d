// API client for the JobPortal REST backend
use std::cell::RefCell;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    Applicant, ApplicantsResponse, Application, ApplicationsResponse, ApplicationStatus,
    ApplyRequest, AuthResponse, CreateJobRequest, Job, JobFilters, JobResponse, JobsResponse,
    LoginRequest, MessageResponse, ProfileResponse, RecruiterProfile, SignupRequest,
    StudentProfile, UpdateRecruiterProfileRequest, UpdateStatusRequest,
    UpdateStudentProfileRequest, UploadCvResponse,
};

/// Requests are issued against the same origin; the dev server proxies
/// these paths to the backend.
pub const API_BASE: &str = "";

thread_local! {
    static BEARER_TOKEN: RefCell<Option<String>> = RefCell::new(None);
}

/// Set on login and restore, cleared on logout. Attached to every request
/// while present.
pub fn set_bearer_token(token: Option<String>) {
    BEARER_TOKEN.with(|cell| *cell.borrow_mut() = token);
}

fn bearer_token() -> Option<String> {
    BEARER_TOKEN.with(|cell| cell.borrow().clone())
}

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ApiError {
    /// Non-2xx response. The message is what the page shows the user.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to encode request: {0}")]
    Serialization(String),
    #[error("Invalid response from server: {0}")]
    Deserialization(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull a human-readable message out of an error body. The backend emits
/// `{"error": ...}`; `{"message": ...}` is accepted as well. Anything
/// unparseable falls back to a generic message with the status code.
pub fn error_message_from_body(body: &str, status: u16) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message.or(body.error))
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(API_BASE.to_string())
    }
}

pub fn api_client() -> ApiClient {
    ApiClient::default()
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Auth endpoints
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login", request).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/signup", request).await
    }

    // Student endpoints
    pub async fn student_profile(&self) -> Result<StudentProfile, ApiError> {
        let response: ProfileResponse<StudentProfile> = self.get("/student/profile").await?;
        Ok(response.profile)
    }

    pub async fn update_student_profile(
        &self,
        request: &UpdateStudentProfileRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.put("/student/profile", request).await
    }

    pub async fn upload_cv(&self, form: web_sys::FormData) -> Result<UploadCvResponse, ApiError> {
        self.upload("/student/upload-cv", form).await
    }

    pub async fn student_applications(&self) -> Result<Vec<Application>, ApiError> {
        let response: ApplicationsResponse = self.get("/student/applications").await?;
        Ok(response.applications)
    }

    pub async fn apply_to_job(
        &self,
        job_id: i64,
        request: &ApplyRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post(&format!("/student/jobs/apply/{job_id}"), request)
            .await
    }

    // Job endpoints
    pub async fn search_jobs(&self, filters: &JobFilters) -> Result<Vec<Job>, ApiError> {
        let response: JobsResponse = self.get_query("/jobs/search", &filters.to_query()).await?;
        Ok(response.jobs)
    }

    pub async fn job_details(&self, job_id: i64) -> Result<Job, ApiError> {
        let response: JobResponse = self.get(&format!("/jobs/{job_id}")).await?;
        Ok(response.job)
    }

    // Recruiter endpoints
    pub async fn recruiter_profile(&self) -> Result<RecruiterProfile, ApiError> {
        let response: ProfileResponse<RecruiterProfile> = self.get("/recruiter/profile").await?;
        Ok(response.profile)
    }

    pub async fn update_recruiter_profile(
        &self,
        request: &UpdateRecruiterProfileRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.put("/recruiter/profile", request).await
    }

    pub async fn recruiter_jobs(&self) -> Result<Vec<Job>, ApiError> {
        let response: JobsResponse = self.get("/recruiter/jobs").await?;
        Ok(response.jobs)
    }

    pub async fn create_job(&self, request: &CreateJobRequest) -> Result<MessageResponse, ApiError> {
        self.post("/recruiter/jobs", request).await
    }

    pub async fn delete_job(&self, job_id: i64) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/recruiter/jobs/{job_id}")).await
    }

    pub async fn job_applications(&self, job_id: i64) -> Result<Vec<Applicant>, ApiError> {
        let response: ApplicantsResponse = self
            .get(&format!("/recruiter/jobs/{job_id}/applications"))
            .await?;
        Ok(response.applications)
    }

    pub async fn update_application_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> Result<MessageResponse, ApiError> {
        self.put(
            &format!("/recruiter/applications/{application_id}/status"),
            &UpdateStatusRequest { status },
        )
        .await
    }

    // Generic HTTP methods
    pub async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(network_error)?;
        parse_response(response).await
    }

    pub async fn get_query<T>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = authorize(Request::get(&self.url(path)))
            .query(query.iter().map(|(key, value)| (*key, value.as_str())))
            .send()
            .await
            .map_err(network_error)?;
        parse_response(response).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|err| ApiError::Serialization(err.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        parse_response(response).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|err| ApiError::Serialization(err.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        parse_response(response).await
    }

    pub async fn delete<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(network_error)?;
        parse_response(response).await
    }

    pub async fn upload<T>(&self, path: &str, form: web_sys::FormData) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = authorize(Request::post(&self.url(path)))
            .body(form)
            .map_err(|err| ApiError::Serialization(err.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        parse_response(response).await
    }
}

fn authorize(request: RequestBuilder) -> RequestBuilder {
    match bearer_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {token}")),
        None => request,
    }
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

async fn parse_response<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!("request to {} failed with status {status}", response.url());
        return Err(ApiError::Status {
            status,
            message: error_message_from_body(&body, status),
        });
    }
    response
        .json()
        .await
        .map_err(|err| ApiError::Deserialization(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_key_is_surfaced_verbatim() {
        assert_eq!(
            error_message_from_body(r#"{"message": "X"}"#, 400),
            "X"
        );
    }

    #[test]
    fn error_key_is_surfaced_too() {
        assert_eq!(
            error_message_from_body(r#"{"error": "Invalid credentials"}"#, 401),
            "Invalid credentials"
        );
    }

    #[test]
    fn message_key_wins_over_error_key() {
        assert_eq!(
            error_message_from_body(r#"{"message": "first", "error": "second"}"#, 400),
            "first"
        );
    }

    #[test]
    fn unparseable_bodies_fall_back_to_a_generic_message() {
        assert_eq!(
            error_message_from_body("<html>oops</html>", 502),
            "Request failed with status 502"
        );
        assert_eq!(
            error_message_from_body("", 500),
            "Request failed with status 500"
        );
        assert_eq!(
            error_message_from_body(r#"{"detail": "other shape"}"#, 422),
            "Request failed with status 422"
        );
    }

    #[test]
    fn status_errors_display_the_extracted_message() {
        let err = ApiError::Status {
            status: 404,
            message: "Job not found".to_string(),
        };
        assert_eq!(err.to_string(), "Job not found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(ApiError::Network("timeout".to_string()).status(), None);
    }
}
