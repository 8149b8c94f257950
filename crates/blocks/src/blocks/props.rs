use serde::{Deserialize, Serialize};

/// A comparator's two output functions (spec §4.9).
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum ComparatorMode {
    #[default]
    Compare,
    Subtract,
}

impl ComparatorMode {
    pub fn toggle(self) -> ComparatorMode {
        match self {
            ComparatorMode::Compare => ComparatorMode::Subtract,
            ComparatorMode::Subtract => ComparatorMode::Compare,
        }
    }
}

/// Distinguishes movable fill blocks from the two immovable solids
/// piston motion must recognize (spec §4.12).
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum SolidVariant {
    #[default]
    Stone,
    Obsidian,
    Bedrock,
}

impl SolidVariant {
    pub fn is_immovable(self) -> bool {
        matches!(self, SolidVariant::Obsidian | SolidVariant::Bedrock)
    }
}
