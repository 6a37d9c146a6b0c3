/// License report domain - Pure logic for building generator invocations
/// and normalizing the report they produce
pub mod domain;
pub mod services;
