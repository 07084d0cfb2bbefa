//! Sea-ORM entities for the products schema.

pub mod category;
pub mod product;
