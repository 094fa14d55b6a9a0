pub mod globe;
pub mod help;
pub mod map;
