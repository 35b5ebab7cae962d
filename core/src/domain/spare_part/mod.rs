pub mod ports;
pub mod schema;
pub mod value_objects;

pub use ports::SparePartRepository;
pub use schema::SPARE_PART_FILTERS;
pub use value_objects::*;
