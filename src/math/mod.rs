//! Math primitives shared by spatial queries and brushes

pub mod aabb;
pub mod ray;

pub use aabb::Aabb;
pub use ray::Ray;
