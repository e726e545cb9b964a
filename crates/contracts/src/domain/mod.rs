pub mod common;
pub mod m001_entity_type;
