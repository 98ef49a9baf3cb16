pub mod project;
pub mod script;
pub mod video;
