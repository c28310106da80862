pub mod artifact;
pub mod response;

pub use artifact::{SourceArtifact, StatementArtifact, SubmissionRequest, TARGET_LANGUAGE};
pub use response::{AnalysisData, AnalysisResult, ApiResponse, ResponseStatus};
