pub mod auth;
pub mod customer;

pub use auth::{ContactFormData, LoginFormData, LoginResponse, RegisterFormData};
pub use customer::{Contact, Customer};
