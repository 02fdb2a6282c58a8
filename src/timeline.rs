pub mod builder;
pub mod event;
pub mod model;
pub mod script;
pub mod shape;
