//! Domain data types for claim analysis.

pub mod analysis;
pub mod article;
pub mod claim;

pub use analysis::{AnalysisRequest, AnalysisResult};
pub use article::FetchedArticle;
pub use claim::Claim;
