pub mod find_affected_units;
pub mod find_default_muster;
pub mod update_default_muster;
