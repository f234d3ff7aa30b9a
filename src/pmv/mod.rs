pub mod engine;
pub mod fanger;
pub mod inversion;
pub mod parameter;
pub mod two_node;
