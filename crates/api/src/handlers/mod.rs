pub mod lookup;
pub mod project;
