pub mod admin;
pub mod faqs;
pub mod pages;
