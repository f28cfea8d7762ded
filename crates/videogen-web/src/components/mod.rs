pub mod contact_form;
pub mod faq;
pub mod generator;
pub mod toaster;
