//! Concrete bit-field layout of the Brickfall level format
//!
//! The text format declares seven field-group slots per line; this game
//! places entities from five of them. The gate and decorator slots keep
//! their bit reservations so existing level files and tools stay
//! compatible, but no constructor is registered for them.

use grid_engine::levelmap::{BitFieldLayout, FieldDescriptor, LayoutError};

/// The five field groups this game materializes into entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Brick the player can break through
    Breakable,
    /// Solid block that never breaks
    Unbreakable,
    /// Level exit; collecting every goal wins the level
    Goal,
    /// Optional pickup
    Objective,
    /// Player spawn marker
    Player,
}

impl FieldKind {
    /// The field name used in the bit layout
    pub const fn name(self) -> &'static str {
        match self {
            Self::Breakable => "breakable",
            Self::Unbreakable => "unbreakable",
            Self::Goal => "goal",
            Self::Objective => "objective",
            Self::Player => "player",
        }
    }

    /// Reverse lookup from a layout field name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "breakable" => Some(Self::Breakable),
            "unbreakable" => Some(Self::Unbreakable),
            "goal" => Some(Self::Goal),
            "objective" => Some(Self::Objective),
            "player" => Some(Self::Player),
            _ => None,
        }
    }
}

/// Build the validated bit layout of the level format
///
/// Declaration order fixes the shift of every field: breakable packs at bit
/// 0, unbreakable at 6, goal at 10, objective at 14, player at 18, and the
/// reserved slots after that. 26 of the 32 cell bits are spoken for.
pub fn field_layout() -> Result<BitFieldLayout, LayoutError> {
    BitFieldLayout::new(vec![
        FieldDescriptor::new(FieldKind::Breakable.name(), 1, 6),
        FieldDescriptor::new(FieldKind::Unbreakable.name(), 2, 4),
        FieldDescriptor::new(FieldKind::Goal.name(), 3, 4),
        FieldDescriptor::new(FieldKind::Objective.name(), 4, 4),
        FieldDescriptor::new(FieldKind::Player.name(), 5, 4),
        // Reserved for forward compatibility with the generic format
        FieldDescriptor::new("gate", 6, 2),
        FieldDescriptor::new("decorator", 7, 2),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_validates_and_keeps_declared_order() {
        let layout = field_layout().expect("layout fits 32 bits");
        assert_eq!(layout.field_count(), 7);

        let (player, shift) = layout.field("player").expect("declared");
        assert_eq!(player.group, 5);
        assert_eq!(shift, 6 + 4 + 4 + 4);
    }

    #[test]
    fn reserved_slots_stay_declared() {
        let layout = field_layout().expect("valid");
        assert!(layout.field("gate").is_some());
        assert!(layout.field("decorator").is_some());
        // But the game has no constructor for them
        assert!(FieldKind::from_name("gate").is_none());
    }

    #[test]
    fn field_names_round_trip() {
        for kind in [
            FieldKind::Breakable,
            FieldKind::Unbreakable,
            FieldKind::Goal,
            FieldKind::Objective,
            FieldKind::Player,
        ] {
            assert_eq!(FieldKind::from_name(kind.name()), Some(kind));
        }
    }
}
