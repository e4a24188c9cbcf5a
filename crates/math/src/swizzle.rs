//! Runtime side of the generated swizzle accessors.
//!
//! Every `v.xzy()`-style method emitted by `build.rs` is a call to
//! [`project`] with a fixed index tuple, and every `v.xy_mut()` hands out a
//! [`Ref2`] over two distinct components. The index tuples are validated
//! when the accessors are generated, so nothing here checks them again.

/// Indexed component storage of a fixed-size vector.
pub trait Components: Copy {
    type Scalar: Copy;

    /// 2-component vector with the same scalar type.
    type Vec2: Copy + From<[Self::Scalar; 2]> + Into<[Self::Scalar; 2]>;

    const DIM: usize;

    fn component(&self, index: usize) -> Self::Scalar;
    fn component_mut(&mut self, index: usize) -> &mut Self::Scalar;
}

/// Build a new vector out of the components of `source` selected by
/// `pattern`, in order.
#[inline]
pub(crate) fn project<V, O, const L: usize>(source: &V, pattern: [usize; L]) -> O
where
    V: Components,
    O: From<[V::Scalar; L]>,
{
    O::from(pattern.map(|i| source.component(i)))
}

/// Writable view over two distinct components of a vector.
///
/// The view mutably borrows its source, so it cannot outlive it and no other
/// access to the source can happen while it is alive.
pub struct Ref2<'a, V: Components> {
    source: &'a mut V,
    pattern: [usize; 2],
}

impl<'a, V: Components> Ref2<'a, V> {
    #[cfg_attr(not(feature = "mutable-swizzle"), allow(dead_code))]
    #[inline]
    pub(crate) fn new(source: &'a mut V, pattern: [usize; 2]) -> Self {
        debug_assert!(pattern[0] != pattern[1]);
        debug_assert!(pattern[0] < V::DIM && pattern[1] < V::DIM);
        Ref2 { source, pattern }
    }

    #[inline]
    pub fn pattern(&self) -> [usize; 2] {
        self.pattern
    }

    #[inline]
    pub fn get(&self) -> V::Vec2 {
        project(&*self.source, self.pattern)
    }

    /// Write both components. `value` is fully evaluated before the first
    /// write, so values computed from the source itself are never observed
    /// half-written.
    #[inline]
    pub fn set(self, value: V::Vec2) {
        let [a, b]: [V::Scalar; 2] = value.into();
        *self.source.component_mut(self.pattern[0]) = a;
        *self.source.component_mut(self.pattern[1]) = b;
    }

    /// Read, transform and write back the two components.
    #[inline]
    pub fn update<F>(self, f: F)
    where
        F: FnOnce(V::Vec2) -> V::Vec2,
    {
        let value = f(self.get());
        self.set(value);
    }
}
