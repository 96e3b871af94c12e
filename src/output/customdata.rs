//! Out-of-band data attached to an output sink next to the text.

use strum::{Display, EnumIter, EnumString};

use crate::{
    metadata::debuginfo::{MethodDebugInfo, TextSpan},
    output::TextReference,
};

/// Identifier of a predefined custom data kind.
///
/// The string form is the id the producing engine uses on the wire; parsing an id that
/// is not predefined fails, and such data travels as [`CustomData::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum CustomDataKind {
    /// [`MethodDebugInfo`] of a method whose text was written
    #[strum(serialize = "DebugInfo")]
    DebugInfo,
    /// A reference covering a text span
    #[strum(serialize = "SpanReference")]
    SpanReference,
    /// A matching pair of braces
    #[strum(serialize = "CodeBracesRange")]
    CodeBracesRange,
    /// Position of a line separator between members
    #[strum(serialize = "LineSeparator")]
    LineSeparator,
}

/// One piece of custom data.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomData {
    /// Debug information of a method
    DebugInfo(Box<MethodDebugInfo>),
    /// A reference covering a text span
    SpanReference {
        /// Referencing text
        span: TextSpan,
        /// Referenced item
        reference: TextReference,
    },
    /// A matching pair of braces
    CodeBracesRange {
        /// Opening brace
        left: TextSpan,
        /// Closing brace
        right: TextSpan,
        /// Engine-specific brace kind flags
        flags: u32,
    },
    /// Position of a line separator between members
    LineSeparator(usize),
    /// Data of a kind this crate does not know
    Other {
        /// Engine id of the data kind
        id: String,
    },
}

impl CustomData {
    /// The predefined kind of this data, `None` for [`CustomData::Other`]
    #[must_use]
    pub fn kind(&self) -> Option<CustomDataKind> {
        match self {
            CustomData::DebugInfo(_) => Some(CustomDataKind::DebugInfo),
            CustomData::SpanReference { .. } => Some(CustomDataKind::SpanReference),
            CustomData::CodeBracesRange { .. } => Some(CustomDataKind::CodeBracesRange),
            CustomData::LineSeparator(_) => Some(CustomDataKind::LineSeparator),
            CustomData::Other { .. } => None,
        }
    }

    /// The engine id of this data
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            CustomData::Other { id } => id.clone(),
            _ => self.kind().map(|kind| kind.to_string()).unwrap_or_default(),
        }
    }
}

impl From<MethodDebugInfo> for CustomData {
    fn from(debug_info: MethodDebugInfo) -> Self {
        CustomData::DebugInfo(Box::new(debug_info))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn kind_ids_round_trip() {
        for kind in CustomDataKind::iter() {
            assert_eq!(CustomDataKind::from_str(&kind.to_string()).unwrap(), kind);
        }
        assert!(CustomDataKind::from_str("XmlDocComment").is_err());
    }

    #[test]
    fn kinds_of_variants() {
        assert_eq!(
            CustomData::LineSeparator(10).kind(),
            Some(CustomDataKind::LineSeparator)
        );
        assert_eq!(CustomData::LineSeparator(10).id(), "LineSeparator");

        let other = CustomData::Other {
            id: "XmlDocComment".to_string(),
        };
        assert_eq!(other.kind(), None);
        assert_eq!(other.id(), "XmlDocComment");
    }
}
