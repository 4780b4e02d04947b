pub mod form;
pub mod id;
pub mod sample_data;
pub mod today;
