pub mod check;
pub mod download;
