pub mod applications;
pub mod dashboard;
pub mod job_details;
pub mod jobs;
pub mod profile;

pub use applications::*;
pub use dashboard::*;
pub use job_details::*;
pub use jobs::*;
pub use profile::*;
