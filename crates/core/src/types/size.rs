//! Letter size labels produced by the size classifier.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A letter clothing size, ordered from smallest to largest.
///
/// Catalog items may also list non-letter sizes (waist sizes such as `"32"`
/// for jeans); those stay plain strings and never equal a `SizeLabel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SizeLabel {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl SizeLabel {
    /// Every label, smallest first.
    pub const ALL: [Self; 6] = [Self::Xs, Self::S, Self::M, Self::L, Self::Xl, Self::Xxl];

    /// The label as it appears in catalog size lists.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
            Self::Xxl => "XXL",
        }
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a letter size.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown size label: {0}")]
pub struct UnknownSizeLabel(pub String);

impl FromStr for SizeLabel {
    type Err = UnknownSizeLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownSizeLabel(s.to_owned()))
    }
}
