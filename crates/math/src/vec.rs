use core::ops;
use core::fmt;

use bytemuck::{Pod, Zeroable};

use crate::swizzle::Components;

// Defines `swizzle2_impl!`, `swizzle3_impl!` and `swizzle4_impl!`.
include!(concat!(env!("OUT_DIR"), "/swizzle_impl.rs"));

macro_rules! vec_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<$v> for $v {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: $v) -> $v {
                $v { $( $e: self.$e.$func(rhs.$e), )* }
            }
        }
    }
}

macro_rules! vec_assign_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<$v> for $v {
            #[inline]
            fn $func(&mut self, rhs: $v) {
                $( self.$e.$func(rhs.$e); )*
            }
        }
    }
}

macro_rules! scalar_op_impl {
    ($trait: ident, $func: ident, $v: ident, $t: ident, $($e: ident),*) => {
        impl ops::$trait<$t> for $v {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: $t) -> $v {
                $v { $( $e: self.$e.$func(rhs), )* }
            }
        }

        impl ops::$trait<$v> for $t {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: $v) -> $v {
                $v { $( $e: self.$func(rhs.$e), )* }
            }
        }
    }
}

macro_rules! scalar_assign_op_impl {
    ($trait: ident, $func: ident, $v: ident, $t: ident, $($e: ident),*) => {
        impl ops::$trait<$t> for $v {
            #[inline]
            fn $func(&mut self, rhs: $t) {
                $( self.$e.$func(rhs); )*
            }
        }
    }
}

macro_rules! vec_float_utils_impl {
    ($v: ident, $t: ident, $($e: ident),*) => {
        impl $v {
            #[inline]
            pub fn dot(self, b: $v) -> $t {
                // -0.0 is the additive identity in IEEE 754, +0.0 would
                // flip the sign of a negative zero sum.
                $( self.$e * b.$e + )* (-0.0)
            }

            #[inline]
            pub fn length2(self) -> $t {
                $v::dot(self, self)
            }

            #[inline]
            pub fn length(self) -> $t {
                $v::length2(self).sqrt()
            }

            #[inline]
            pub fn normalized(self) -> $v {
                self * (1.0 / $v::length(self))
            }

            #[inline]
            pub fn lerp(self, b: $v, t: $t) -> $v {
                $v { $( $e: self.$e * (1.0 - t) + b.$e * t, )* }
            }

            #[inline]
            pub fn bounce(self, n: $v) -> $v {
                self - 2.0 * $v::dot(self, n) * n
            }
        }

        impl ops::Neg for $v {
            type Output = $v;

            #[inline]
            fn neg(self) -> $v {
                $v { $( $e: -self.$e, )* }
            }
        }
    }
}

macro_rules! vec3_utils_impl {
    ($v: ident) => {
        impl $v {
            #[inline]
            pub fn cross(self, b: $v) -> $v {
                $v {
                    x: self.y * b.z - self.z * b.y,
                    y: self.z * b.x - self.x * b.z,
                    z: self.x * b.y - self.y * b.x,
                }
            }
        }
    }
}

/// Vector type `$v` of `$n` components of `$t`. `$v2` is the 2-component
/// vector of the same scalar, produced by writable swizzles.
macro_rules! vec_impl {
    ($v: ident, $t: ident, $n: literal, $v2: ident, $($e: ident),*) => {

        #[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
        #[repr(C)]
        pub struct $v {
            $( pub $e : $t, )*
        }

        impl $v {
            #[inline]
            pub fn new($( $e: $t, )*) -> $v {
                $v { $( $e, )* }
            }

            #[inline]
            pub fn from_scalar(a: $t) -> $v {
                $v { $( $e : a, )* }
            }

            #[inline]
            pub fn from_slice(a: &[$t; $n]) -> $v {
                bytemuck::cast(*a)
            }

            #[inline]
            pub fn to_slice(self) -> [$t; $n] {
                bytemuck::cast(self)
            }

            #[inline]
            pub fn clamp(a: $v, min: $v, max: $v) -> $v {
                $v { $( $e: a.$e.clamp(min.$e, max.$e), )* }
            }

            #[inline]
            pub fn min(a: $v, b: $v) -> $v {
                $v { $( $e: a.$e.min(b.$e), )* }
            }

            #[inline]
            pub fn max(a: $v, b: $v) -> $v {
                $v { $( $e: a.$e.max(b.$e), )* }
            }
        }

        impl From<[$t; $n]> for $v {
            #[inline]
            fn from(a: [$t; $n]) -> $v {
                bytemuck::cast(a)
            }
        }

        impl From<$v> for [$t; $n] {
            #[inline]
            fn from(v: $v) -> [$t; $n] {
                bytemuck::cast(v)
            }
        }

        impl ops::Index<usize> for $v {
            type Output = $t;

            #[inline]
            fn index(&self, i: usize) -> &$t {
                &bytemuck::cast_ref::<$v, [$t; $n]>(self)[i]
            }
        }

        impl ops::IndexMut<usize> for $v {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut $t {
                &mut bytemuck::cast_mut::<$v, [$t; $n]>(self)[i]
            }
        }

        impl Components for $v {
            type Scalar = $t;
            type Vec2 = $v2;

            const DIM: usize = $n;

            #[inline]
            fn component(&self, index: usize) -> $t {
                self[index]
            }

            #[inline]
            fn component_mut(&mut self, index: usize) -> &mut $t {
                &mut self[index]
            }
        }

        impl fmt::Display for $v {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let prec = f.precision().unwrap_or(3);
                let parts = [$( format!("{:.prec$}", self.$e, prec = prec), )*];
                write!(f, "{}({})", stringify!($v), parts.join(", "))
            }
        }

        vec_op_impl!(Add, add, $v, $($e),*);
        vec_op_impl!(Sub, sub, $v, $($e),*);
        vec_op_impl!(Mul, mul, $v, $($e),*);
        vec_op_impl!(Div, div, $v, $($e),*);

        vec_assign_op_impl!(AddAssign, add_assign, $v, $($e),*);
        vec_assign_op_impl!(SubAssign, sub_assign, $v, $($e),*);
        vec_assign_op_impl!(MulAssign, mul_assign, $v, $($e),*);
        vec_assign_op_impl!(DivAssign, div_assign, $v, $($e),*);

        scalar_op_impl!(Add, add, $v, $t, $($e),*);
        scalar_op_impl!(Sub, sub, $v, $t, $($e),*);
        scalar_op_impl!(Mul, mul, $v, $t, $($e),*);
        scalar_op_impl!(Div, div, $v, $t, $($e),*);

        scalar_assign_op_impl!(AddAssign, add_assign, $v, $t, $($e),*);
        scalar_assign_op_impl!(SubAssign, sub_assign, $v, $t, $($e),*);
        scalar_assign_op_impl!(MulAssign, mul_assign, $v, $t, $($e),*);
        scalar_assign_op_impl!(DivAssign, div_assign, $v, $t, $($e),*);
    }
}

/// One scalar family: the 2, 3 and 4 component vectors and their swizzles.
macro_rules! vec_family {
    ($t: ident, $v2: ident, $v3: ident, $v4: ident) => {
        vec_impl!($v2, $t, 2, $v2, x, y);
        vec_impl!($v3, $t, 3, $v2, x, y, z);
        vec_impl!($v4, $t, 4, $v2, x, y, z, w);

        swizzle2_impl!($v2, $v2, $v3, $v4);
        swizzle3_impl!($v3, $v2, $v3, $v4);
        swizzle4_impl!($v4, $v2, $v3, $v4);
    }
}

vec_family!(i32, Vec2i, Vec3i, Vec4i);
vec_family!(u32, Vec2u, Vec3u, Vec4u);
vec_family!(f32, Vec2, Vec3, Vec4);
vec_family!(f64, Vec2d, Vec3d, Vec4d);

vec_float_utils_impl!(Vec2, f32, x, y);
vec_float_utils_impl!(Vec3, f32, x, y, z);
vec_float_utils_impl!(Vec4, f32, x, y, z, w);
vec_float_utils_impl!(Vec2d, f64, x, y);
vec_float_utils_impl!(Vec3d, f64, x, y, z);
vec_float_utils_impl!(Vec4d, f64, x, y, z, w);

vec3_utils_impl!(Vec3);
vec3_utils_impl!(Vec3d);
