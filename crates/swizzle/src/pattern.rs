use core::fmt;

use crate::error::{Result, SwizzleError};

/// Swizzles produce and read vectors of 2, 3 or 4 components only.
pub const MIN_LEN: usize = 2;
pub const MAX_LEN: usize = 4;

/// Number of components of a source vector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dimension(usize);

impl Dimension {
    pub const TWO: Dimension = Dimension(2);
    pub const THREE: Dimension = Dimension(3);
    pub const FOUR: Dimension = Dimension(4);

    pub const ALL: [Dimension; 3] = [Self::TWO, Self::THREE, Self::FOUR];

    #[inline]
    pub fn new(n: usize) -> Result<Dimension> {
        if (MIN_LEN..=MAX_LEN).contains(&n) {
            Ok(Dimension(n))
        } else {
            Err(SwizzleError::UnsupportedDimension(n))
        }
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered tuple of component indices.
///
/// A pattern is only ever built against a [`Dimension`], so every index it
/// holds is known to be in range for that dimension.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    indices: [usize; MAX_LEN],
    len: usize,
}

// Never empty, `new` rejects lengths below MIN_LEN.
#[allow(clippy::len_without_is_empty)]
impl Pattern {
    pub fn new(indices: &[usize], dim: Dimension) -> Result<Pattern> {
        let len = indices.len();
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            return Err(SwizzleError::UnsupportedLength(len));
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= dim.get()) {
            return Err(SwizzleError::IndexOutOfRange {
                index,
                dim: dim.get(),
            });
        }

        let mut p = Pattern { indices: [0; MAX_LEN], len };
        p.indices[..len].copy_from_slice(indices);
        Ok(p)
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no component is selected twice, i.e. the pattern can be
    /// written through.
    pub fn is_distinct(&self) -> bool {
        let idx = self.indices();
        (0..idx.len()).all(|i| !idx[i + 1..].contains(&idx[i]))
    }
}

/// Every pattern of `len` indices over `[0, dim)`, repetition allowed, in
/// lexicographic order.
pub fn read_patterns(dim: Dimension, len: usize) -> Result<Vec<Pattern>> {
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return Err(SwizzleError::UnsupportedLength(len));
    }

    let n = dim.get();
    let mut patterns = Vec::with_capacity(read_count(dim, len));
    let mut digits = [0usize; MAX_LEN];

    loop {
        patterns.push(Pattern::new(&digits[..len], dim)?);

        // Odometer increment, last index fastest.
        let mut k = len;
        loop {
            if k == 0 {
                return Ok(patterns);
            }
            k -= 1;
            digits[k] += 1;
            if digits[k] < n {
                break;
            }
            digits[k] = 0;
        }
    }
}

/// Every ordered pair of distinct indices over `[0, dim)`, in lexicographic
/// order. These are the only patterns a reference view may be built from.
pub fn write_patterns(dim: Dimension) -> Result<Vec<Pattern>> {
    Ok(read_patterns(dim, 2)?
        .into_iter()
        .filter(Pattern::is_distinct)
        .collect())
}

#[inline]
pub fn read_count(dim: Dimension, len: usize) -> usize {
    dim.get().pow(len as u32)
}

#[inline]
pub fn write_count(dim: Dimension) -> usize {
    dim.get() * (dim.get() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_bounds() {
        assert!(Dimension::new(1).is_err());
        assert!(Dimension::new(5).is_err());
        assert_eq!(Dimension::new(3).unwrap(), Dimension::THREE);
        assert_eq!(
            Dimension::new(0),
            Err(SwizzleError::UnsupportedDimension(0))
        );
    }

    #[test]
    fn read_counts() {
        for dim in Dimension::ALL {
            for len in MIN_LEN..=MAX_LEN {
                let patterns = read_patterns(dim, len).unwrap();
                assert_eq!(patterns.len(), read_count(dim, len));
                assert_eq!(patterns.len(), dim.get().pow(len as u32));
                assert!(patterns.iter().all(|p| p.len() == len));
                assert!(patterns.iter().flat_map(|p| p.indices()).all(|&i| i < dim.get()));
            }
        }
    }

    #[test]
    fn read_order_is_lexicographic() {
        let patterns = read_patterns(Dimension::TWO, 2).unwrap();
        let got: Vec<&[usize]> = patterns.iter().map(|p| p.indices()).collect();
        assert_eq!(got, vec![&[0, 0][..], &[0, 1], &[1, 0], &[1, 1]]);

        let patterns = read_patterns(Dimension::FOUR, 3).unwrap();
        assert!(patterns.windows(2).all(|w| w[0].indices() < w[1].indices()));
        assert_eq!(patterns.last().unwrap().indices(), &[3, 3, 3]);
    }

    #[test]
    fn output_may_exceed_source_dimension() {
        let patterns = read_patterns(Dimension::TWO, 4).unwrap();
        assert_eq!(patterns.len(), 16);
        assert_eq!(patterns[5].indices(), &[0, 1, 0, 1]);
    }

    #[test]
    fn write_patterns_are_distinct_pairs() {
        for dim in Dimension::ALL {
            let patterns = write_patterns(dim).unwrap();
            assert_eq!(patterns.len(), write_count(dim));
            for p in &patterns {
                assert_eq!(p.len(), 2);
                assert_ne!(p.indices()[0], p.indices()[1]);
            }
        }

        let patterns = write_patterns(Dimension::THREE).unwrap();
        let got: Vec<&[usize]> = patterns.iter().map(|p| p.indices()).collect();
        assert_eq!(
            got,
            vec![&[0, 1][..], &[0, 2], &[1, 0], &[1, 2], &[2, 0], &[2, 1]]
        );
    }

    #[test]
    fn permutations_are_included() {
        let patterns = read_patterns(Dimension::TWO, 2).unwrap();
        assert!(patterns.iter().any(|p| p.indices() == [1, 0]));
        assert!(Pattern::new(&[1, 0], Dimension::TWO).unwrap().is_distinct());
        assert!(!Pattern::new(&[1, 2, 1], Dimension::THREE).unwrap().is_distinct());
    }

    #[test]
    fn invalid_patterns() {
        assert_eq!(
            Pattern::new(&[0], Dimension::TWO),
            Err(SwizzleError::UnsupportedLength(1))
        );
        assert_eq!(
            Pattern::new(&[0, 1, 2, 3, 0], Dimension::FOUR),
            Err(SwizzleError::UnsupportedLength(5))
        );
        assert_eq!(
            Pattern::new(&[0, 2], Dimension::TWO),
            Err(SwizzleError::IndexOutOfRange { index: 2, dim: 2 })
        );
        assert_eq!(
            Pattern::new(&[7, 0], Dimension::FOUR),
            Err(SwizzleError::IndexOutOfRange { index: 7, dim: 4 })
        );
        assert!(read_patterns(Dimension::THREE, 5).is_err());
    }
}
