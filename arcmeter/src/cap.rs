use std::str::FromStr;

use crate::error::RingError;

/// Stroke cap applied to arc ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapStyle {
    /// Rounded stroke ends.
    #[default]
    Round,
    /// Flat stroke ends, flush with the arc endpoint.
    None,
    /// Square stroke ends extending past the arc endpoint.
    Square,
}

impl CapStyle {
    /// The canonical lowercase name of this cap style.
    pub const fn as_str(self) -> &'static str {
        match self {
            CapStyle::Round => "round",
            CapStyle::None => "none",
            CapStyle::Square => "square",
        }
    }
}

/// Parses a cap style name, normalizing case and surrounding whitespace, so
/// declarative layout strings like `"RouND"` resolve to [`CapStyle::Round`].
impl FromStr for CapStyle {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "round" => Ok(CapStyle::Round),
            "none" => Ok(CapStyle::None),
            "square" => Ok(CapStyle::Square),
            other => Err(RingError::UnknownCapStyle(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        assert_eq!("RouND".parse::<CapStyle>().unwrap(), CapStyle::Round);
        assert_eq!("  square ".parse::<CapStyle>().unwrap(), CapStyle::Square);
        assert_eq!("NONE".parse::<CapStyle>().unwrap(), CapStyle::None);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(
            "oval".parse::<CapStyle>(),
            Err(RingError::UnknownCapStyle("oval".to_string()))
        );
    }

    #[test]
    fn test_canonical_names() {
        assert_eq!(CapStyle::Round.as_str(), "round");
        assert_eq!(CapStyle::None.as_str(), "none");
        assert_eq!(CapStyle::Square.as_str(), "square");
    }
}
