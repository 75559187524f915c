pub mod contact;
pub mod services;
