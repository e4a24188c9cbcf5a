use crate::alias::AliasGroup;
use crate::error::{Result, SwizzleError};
use crate::pattern::Dimension;

/// What the generator emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub dimensions: Vec<Dimension>,
    pub groups: Vec<AliasGroup>,
    /// Emit the writable 2-component views (`xy_mut`, `set_xy`).
    pub mutable: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimension::ALL.to_vec(),
            groups: AliasGroup::ALL.to_vec(),
            mutable: true,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dimensions(mut self, dimensions: &[Dimension]) -> Self {
        self.dimensions = dimensions.to_vec();
        self
    }

    pub fn groups(mut self, groups: &[AliasGroup]) -> Self {
        self.groups = groups.to_vec();
        self
    }

    pub fn mutable(mut self, mutable: bool) -> Self {
        self.mutable = mutable;
        self
    }

    /// Reject configs that would emit an empty or duplicated surface.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.is_empty() {
            return Err(SwizzleError::NoDimensions);
        }
        if self.groups.is_empty() {
            return Err(SwizzleError::NoGroups);
        }
        for (i, dim) in self.dimensions.iter().enumerate() {
            if self.dimensions[..i].contains(dim) {
                return Err(SwizzleError::DuplicateDimension(*dim));
            }
        }
        for (i, group) in self.groups.iter().enumerate() {
            if self.groups[..i].contains(group) {
                return Err(SwizzleError::DuplicateGroup(*group));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(GeneratorConfig::default().validate(), Ok(()));
        let config = GeneratorConfig::new()
            .dimensions(&[Dimension::FOUR, Dimension::TWO])
            .groups(&[AliasGroup::Color]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_duplicates_and_empty_lists() {
        let config = GeneratorConfig::new().groups(&[AliasGroup::Position, AliasGroup::Texture, AliasGroup::Position]);
        assert_eq!(config.validate(), Err(SwizzleError::DuplicateGroup(AliasGroup::Position)));

        let config = GeneratorConfig::new().dimensions(&[Dimension::THREE, Dimension::THREE]);
        assert_eq!(config.validate(), Err(SwizzleError::DuplicateDimension(Dimension::THREE)));

        assert_eq!(GeneratorConfig::new().groups(&[]).validate(), Err(SwizzleError::NoGroups));
        assert_eq!(GeneratorConfig::new().dimensions(&[]).validate(), Err(SwizzleError::NoDimensions));
    }
}
