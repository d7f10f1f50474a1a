pub mod request;
pub mod response;

pub use request::SearchRequest;
pub use response::ResultView;
