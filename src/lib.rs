pub mod data;
pub mod datasets;
