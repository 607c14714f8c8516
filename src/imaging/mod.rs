//! Image processing: the dimension probe and the scaling pipeline.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Scale** | `resize_exact` with Lanczos3, encoder chosen by extension |
//! | **Full copy** | `std::fs::copy` (bytes untouched) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::fit_within;
pub use operations::{copy_full, scale_photo};
pub use params::{Quality, ResizeParams};
pub use rust_backend::{RustBackend, is_supported};
