mod setup;

pub use setup::{cleanup, setup};
