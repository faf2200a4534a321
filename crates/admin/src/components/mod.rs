//! Reusable view components for the admin panel.

pub mod skeleton;

pub use skeleton::ProductCardSkeleton;
