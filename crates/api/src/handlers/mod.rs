pub mod charts;
pub mod render;
