pub mod advise;
pub mod bracket;
pub mod catalog;
pub mod display;
pub mod schema;
pub mod schemes;
