use bitflags::bitflags;

use crate::{node::LikeNode, LikeConfig, Result};

bitflags! {
    /// Style markers present on an icon. A valid icon carries exactly one.
    pub struct IconMarkers: u8 {
        const SOLID = 0b0000_0001;
        const OUTLINE = 0b0000_0010;
    }
}

impl IconMarkers {
    pub fn read<N: LikeNode>(node: &N, config: &LikeConfig) -> Self {
        let mut markers = Self::empty();

        markers.set(Self::SOLID, node.has_class(&config.solid_class));
        markers.set(Self::OUTLINE, node.has_class(&config.outline_class));

        markers
    }

    pub fn is_valid(self) -> bool {
        self == Self::SOLID || self == Self::OUTLINE
    }

    pub fn toggled(self) -> Self {
        self ^ Self::all()
    }

    /// `None` if both or neither marker is present.
    pub fn is_liked(self) -> Option<bool> {
        if self == Self::SOLID {
            Some(true)
        } else if self == Self::OUTLINE {
            Some(false)
        } else {
            None
        }
    }

    /// Flips both markers on the node independently and returns the resulting state.
    pub fn toggle_on<N: LikeNode>(node: &N, config: &LikeConfig) -> Result<Self> {
        let mut markers = Self::empty();

        markers.set(Self::SOLID, node.toggle_class(&config.solid_class)?);
        markers.set(Self::OUTLINE, node.toggle_class(&config.outline_class)?);

        Ok(markers)
    }
}
