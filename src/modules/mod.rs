pub mod catalog;
pub mod relationships;
