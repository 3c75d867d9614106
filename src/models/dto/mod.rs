pub mod request;
pub mod response;

pub use request::QuizRequest;
pub use response::QuizResponse;
