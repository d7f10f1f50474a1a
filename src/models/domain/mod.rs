pub mod company_info;
pub mod confidence;
pub mod grounding;
pub mod search;

pub use company_info::{CompanyField, CompanyInfo, NOT_FOUND};
pub use confidence::{ConfidenceEntry, ConfidenceLevel};
pub use grounding::{GroundingChunk, GroundingSource};
pub use search::{SearchResult, SearchState};
