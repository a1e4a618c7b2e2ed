//! Card attributes: door class, labyrinth symbol, dream kind.
//!
//! Each enumeration converts from its raw `u8` index with `TryFrom`,
//! reporting `InvalidVariant` for anything outside the declared domain.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// Door/labyrinth class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Class {
    Observatory,
    Aquarium,
    Garden,
    Library,
}

impl Class {
    pub const ALL: [Class; 4] = [
        Class::Observatory,
        Class::Aquarium,
        Class::Garden,
        Class::Library,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Class::Observatory => "Observatory",
            Class::Aquarium => "Aquarium",
            Class::Garden => "Garden",
            Class::Library => "Library",
        }
    }
}

impl TryFrom<u8> for Class {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Class::ALL
            .get(value as usize)
            .copied()
            .ok_or(EngineError::InvalidVariant { field: "class", value })
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Symbol printed on a labyrinth card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    Sun,
    Moon,
    Key,
}

impl Symbol {
    pub const ALL: [Symbol; 3] = [Symbol::Sun, Symbol::Moon, Symbol::Key];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Symbol::Sun => "Sun",
            Symbol::Moon => "Moon",
            Symbol::Key => "Key",
        }
    }
}

impl TryFrom<u8> for Symbol {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Symbol::ALL
            .get(value as usize)
            .copied()
            .ok_or(EngineError::InvalidVariant { field: "symbol", value })
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Dream card kind. Only nightmares exist in the basic deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DreamKind {
    Nightmare,
}

impl DreamKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DreamKind::Nightmare => "Nightmare",
        }
    }
}

impl TryFrom<u8> for DreamKind {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DreamKind::Nightmare),
            _ => Err(EngineError::InvalidVariant { field: "dream kind", value }),
        }
    }
}

impl std::fmt::Display for DreamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_from_index() {
        assert_eq!(Class::try_from(0), Ok(Class::Observatory));
        assert_eq!(Class::try_from(3), Ok(Class::Library));
        assert_eq!(
            Class::try_from(4),
            Err(EngineError::InvalidVariant { field: "class", value: 4 })
        );
    }

    #[test]
    fn test_symbol_from_index() {
        assert_eq!(Symbol::try_from(2), Ok(Symbol::Key));
        assert!(matches!(
            Symbol::try_from(7),
            Err(EngineError::InvalidVariant { field: "symbol", value: 7 })
        ));
    }

    #[test]
    fn test_dream_kind_from_index() {
        assert_eq!(DreamKind::try_from(0), Ok(DreamKind::Nightmare));
        assert!(DreamKind::try_from(1).is_err());
    }
}
