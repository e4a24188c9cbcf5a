use core::fmt;

use crate::error::{Result, SwizzleError};
use crate::pattern::{Dimension, Pattern, MAX_LEN, MIN_LEN};

/// Interchangeable letter sets naming the same component indices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AliasGroup {
    /// `x y z w`
    Position,
    /// `r g b a`
    Color,
    /// `s t p q`
    Texture,
}

impl AliasGroup {
    pub const ALL: [AliasGroup; 3] = [AliasGroup::Position, AliasGroup::Color, AliasGroup::Texture];

    #[inline]
    pub const fn letters(self) -> [char; 4] {
        match self {
            AliasGroup::Position => ['x', 'y', 'z', 'w'],
            AliasGroup::Color => ['r', 'g', 'b', 'a'],
            AliasGroup::Texture => ['s', 't', 'p', 'q'],
        }
    }

    /// Group owning `letter`, if any. Groups are disjoint.
    pub fn of(letter: char) -> Option<AliasGroup> {
        AliasGroup::ALL
            .into_iter()
            .find(|group| group.letters().contains(&letter))
    }

    /// Component index named by `letter` in this group, for a vector of
    /// `dim` components.
    pub fn resolve(self, letter: char, dim: Dimension) -> Result<usize> {
        let index = self
            .letters()
            .iter()
            .position(|&l| l == letter)
            .ok_or(SwizzleError::UnknownLetter { letter })?;

        if index >= dim.get() {
            return Err(SwizzleError::OutOfRange {
                letter,
                group: self,
                index,
                dim: dim.get(),
            });
        }
        Ok(index)
    }

    /// Accessor name spelling `pattern` in this group.
    pub fn name(self, pattern: &Pattern) -> String {
        let letters = self.letters();
        pattern.indices().iter().map(|&i| letters[i]).collect()
    }
}

impl fmt::Display for AliasGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letters: String = self.letters().iter().collect();
        f.write_str(&letters)
    }
}

/// Resolve a whole accessor name such as `"wzy"` against a vector of `dim`
/// components. All letters must come from the same group.
pub fn parse(name: &str, dim: Dimension) -> Result<(AliasGroup, Pattern)> {
    let len = name.chars().count();
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return Err(SwizzleError::UnsupportedLength(len));
    }

    let first = name.chars().next().ok_or(SwizzleError::UnsupportedLength(0))?;
    let group = AliasGroup::of(first).ok_or(SwizzleError::UnknownLetter { letter: first })?;

    let mut indices = [0usize; MAX_LEN];
    for (slot, letter) in indices.iter_mut().zip(name.chars()) {
        match AliasGroup::of(letter) {
            Some(g) if g == group => *slot = group.resolve(letter, dim)?,
            Some(other) => {
                return Err(SwizzleError::MixedGroups {
                    name: name.to_string(),
                    first: group,
                    second: other,
                })
            }
            None => return Err(SwizzleError::UnknownLetter { letter }),
        }
    }

    Ok((group, Pattern::new(&indices[..len], dim)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_agree_on_positions() {
        for dim in Dimension::ALL {
            for i in 0..dim.get() {
                let resolved: Vec<usize> = AliasGroup::ALL
                    .iter()
                    .map(|g| g.resolve(g.letters()[i], dim).unwrap())
                    .collect();
                assert_eq!(resolved, vec![i; 3]);
            }
        }
    }

    #[test]
    fn resolve_is_truncated_by_dimension() {
        assert_eq!(AliasGroup::Color.resolve('g', Dimension::TWO), Ok(1));
        assert_eq!(
            AliasGroup::Color.resolve('b', Dimension::TWO),
            Err(SwizzleError::OutOfRange {
                letter: 'b',
                group: AliasGroup::Color,
                index: 2,
                dim: 2
            })
        );
        assert_eq!(AliasGroup::Texture.resolve('q', Dimension::FOUR), Ok(3));
        assert_eq!(
            AliasGroup::Position.resolve('r', Dimension::FOUR),
            Err(SwizzleError::UnknownLetter { letter: 'r' })
        );
    }

    #[test]
    fn groups_are_disjoint() {
        for group in AliasGroup::ALL {
            for letter in group.letters() {
                assert_eq!(AliasGroup::of(letter), Some(group));
            }
        }
        assert_eq!(AliasGroup::of('k'), None);
    }

    #[test]
    fn parse_names() {
        let (group, pattern) = parse("wzy", Dimension::FOUR).unwrap();
        assert_eq!(group, AliasGroup::Position);
        assert_eq!(pattern.indices(), &[3, 2, 1]);

        let (group, pattern) = parse("rgba", Dimension::FOUR).unwrap();
        assert_eq!(group, AliasGroup::Color);
        assert_eq!(pattern.indices(), &[0, 1, 2, 3]);

        let (group, pattern) = parse("tsst", Dimension::TWO).unwrap();
        assert_eq!(group, AliasGroup::Texture);
        assert_eq!(pattern.indices(), &[1, 0, 0, 1]);
    }

    #[test]
    fn parse_rejects_invalid_names() {
        assert!(matches!(
            parse("xg", Dimension::FOUR),
            Err(SwizzleError::MixedGroups { first: AliasGroup::Position, second: AliasGroup::Color, .. })
        ));
        assert!(matches!(
            parse("xz", Dimension::TWO),
            Err(SwizzleError::OutOfRange { letter: 'z', .. })
        ));
        assert_eq!(parse("x", Dimension::TWO), Err(SwizzleError::UnsupportedLength(1)));
        assert_eq!(parse("xyzwx", Dimension::FOUR), Err(SwizzleError::UnsupportedLength(5)));
        assert_eq!(parse("", Dimension::FOUR), Err(SwizzleError::UnsupportedLength(0)));
        assert_eq!(
            parse("xk", Dimension::FOUR),
            Err(SwizzleError::UnknownLetter { letter: 'k' })
        );
    }

    #[test]
    fn names_round_trip_through_every_group() {
        let pattern = Pattern::new(&[3, 0, 2], Dimension::FOUR).unwrap();
        assert_eq!(AliasGroup::Position.name(&pattern), "wxz");
        assert_eq!(AliasGroup::Color.name(&pattern), "arb");
        assert_eq!(AliasGroup::Texture.name(&pattern), "qsp");
        for group in AliasGroup::ALL {
            assert_eq!(parse(&group.name(&pattern), Dimension::FOUR), Ok((group, pattern)));
        }
    }
}
