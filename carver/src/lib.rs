pub mod ascii;
pub mod config;
pub mod svg;
