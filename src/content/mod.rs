pub mod body;
pub mod extract;
pub mod filename;
pub mod kind;
pub mod model;
pub mod sample;
pub mod scanner;
pub mod thumbs;
