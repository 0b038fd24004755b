//! Generation errors
//!
//! Any error aborts the whole run; no partial dungeon is ever returned.

use dgen_rng::DrawError;
use thiserror::Error;

use crate::dungeon::Coord;

/// Errors that can occur while generating a dungeon
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: String },

    #[error(
        "could not place room {} of {requested} after {attempts} attempts; \
         radius is too small for this many rooms",
        .placed + 1
    )]
    PlacementExhaustion {
        placed: usize,
        requested: usize,
        attempts: u32,
    },

    #[error("no path from {from} to {to}")]
    UnreachableTarget { from: Coord, to: Coord },

    #[error("random source failed: {0}")]
    Draw(#[from] DrawError),
}

impl GenerationError {
    pub(crate) fn invalid(name: &'static str, value: impl ToString) -> Self {
        GenerationError::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhaustion_display() {
        let err = GenerationError::PlacementExhaustion {
            placed: 4,
            requested: 9,
            attempts: 100,
        };
        let msg = err.to_string();
        assert!(msg.contains("room 5 of 9"), "{msg}");
        assert!(msg.contains("100 attempts"), "{msg}");
    }

    #[test]
    fn test_draw_error_converts() {
        let err: GenerationError = DrawError::Exhausted { consumed: 3 }.into();
        assert!(matches!(err, GenerationError::Draw(_)));
        assert!(err.to_string().contains("exhausted after 3 draws"));
    }

    #[test]
    fn test_unreachable_display() {
        let err = GenerationError::UnreachableTarget {
            from: Coord::new(0, 0),
            to: Coord::new(3, 4),
        };
        assert_eq!(err.to_string(), "no path from 0, 0 to 3, 4");
    }
}
