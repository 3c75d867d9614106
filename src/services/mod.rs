pub mod generators;
pub mod quiz_parser;
pub mod quiz_service;
