// domain/entities/mod.rs
pub mod descriptor;
pub mod layout;
pub mod report;
pub mod request;
