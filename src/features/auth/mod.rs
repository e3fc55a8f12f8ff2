pub mod guards;
pub mod model;
