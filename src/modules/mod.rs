pub mod contact;
pub mod portfolio;
