pub mod alert;
pub mod popup;
