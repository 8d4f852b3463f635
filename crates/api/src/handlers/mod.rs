pub mod records;
pub mod refresh;
pub mod status;
