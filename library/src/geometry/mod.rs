pub mod alias;
pub mod axis;
pub mod transform;
pub mod vertex;
pub(crate) mod epsilon;
pub mod fundamental_constants;
