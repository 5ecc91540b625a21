pub mod noise;
pub mod render;
pub mod scan;
pub mod workflow;
