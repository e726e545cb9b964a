pub mod m001_entity_type;
