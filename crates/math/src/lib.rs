//! Small fixed-size vectors with GLSL-style swizzles.
//!
//! Every vector type has one accessor per ordered selection of 2 to 4 of its
//! components, spelled with the `xyzw`, `rgba` or `stpq` letters:
//!
//! ```
//! use math::vec::{Vec3, Vec4};
//!
//! let v = Vec4::new(10.0, 20.0, 30.0, 40.0);
//! assert_eq!(v.wzy(), Vec3::new(40.0, 30.0, 20.0));
//! assert_eq!(v.rgb(), v.xyz());
//! ```
//!
//! With the `mutable-swizzle` feature (on by default) pairs of distinct
//! components can also be written through:
//!
//! ```
//! # #[cfg(feature = "mutable-swizzle")] {
//! use math::vec::{Vec2, Vec4};
//!
//! let mut v = Vec4::new(10.0, 20.0, 30.0, 40.0);
//! v.xz_mut().set(Vec2::new(99.0, 100.0));
//! assert_eq!(v, Vec4::new(99.0, 20.0, 100.0, 40.0));
//!
//! v.set_xy(v.yx());
//! assert_eq!(v.xy(), Vec2::new(20.0, 99.0));
//! # }
//! ```

pub mod swizzle;
pub mod vec;

pub use swizzle::{Components, Ref2};
