pub mod canonicalize;
pub mod curated;
pub mod field_list;
pub mod model;
pub mod parser;
pub mod render;
pub mod repairs;
pub mod workflow;
