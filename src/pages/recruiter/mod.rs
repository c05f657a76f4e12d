pub mod applications;
pub mod dashboard;
pub mod jobs;
pub mod post_job;
pub mod profile;

pub use applications::*;
pub use dashboard::*;
pub use jobs::*;
pub use post_job::*;
pub use profile::*;
