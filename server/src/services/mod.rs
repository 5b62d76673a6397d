//! Service layer — orchestration logic behind the HTTP routes.

pub mod generate;
