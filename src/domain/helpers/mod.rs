pub mod muster;
