pub mod uuid_v7;
pub mod validation;
