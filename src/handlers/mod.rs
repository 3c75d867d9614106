pub mod quiz_handler;

pub use quiz_handler::{configure, GENERATE_QUIZ_PATH};
