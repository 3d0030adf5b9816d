use thiserror::Error;

/// Construction-time misconfiguration.
///
/// Gameplay never produces these: blocked moves and blocked spawns are
/// ordinary `false` results, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("unknown piece kind `{0}`")]
    UnknownPieceKind(String),

    #[error("kind sequence must contain at least one piece")]
    EmptyKindSequence,

    #[error("row {row} has width {actual}, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid cell symbol `{symbol}` at ({x}, {y})")]
    InvalidCellSymbol { symbol: char, x: usize, y: usize },
}

impl FieldError {
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::InvalidDimensions { .. } => "invalid_dimensions",
            FieldError::UnknownPieceKind(_) | FieldError::EmptyKindSequence => "invalid_kind",
            FieldError::RowWidthMismatch { .. } | FieldError::InvalidCellSymbol { .. } => {
                "invalid_board"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_group_by_concern() {
        assert_eq!(
            FieldError::InvalidDimensions {
                width: 0,
                height: 20
            }
            .code(),
            "invalid_dimensions"
        );
        assert_eq!(FieldError::UnknownPieceKind("9".into()).code(), "invalid_kind");
        assert_eq!(FieldError::EmptyKindSequence.code(), "invalid_kind");
        assert_eq!(
            FieldError::InvalidCellSymbol {
                symbol: '#',
                x: 1,
                y: 2
            }
            .code(),
            "invalid_board"
        );
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = FieldError::InvalidDimensions {
            width: 0,
            height: 20,
        };
        assert_eq!(err.to_string(), "board dimensions must be positive, got 0x20");
        assert_eq!(
            FieldError::UnknownPieceKind("7".into()).to_string(),
            "unknown piece kind `7`"
        );
    }
}
