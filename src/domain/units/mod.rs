pub mod find_unit_muster;
pub mod update_unit_muster;
