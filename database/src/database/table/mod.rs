pub mod id_generator;
#[allow(clippy::module_inception)]
pub mod table;
