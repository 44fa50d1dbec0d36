pub mod form;
pub mod print_view;
pub mod results;
