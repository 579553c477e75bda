use std::fmt;
use std::str::FromStr;

use crate::foundation::error::LoopreelError;
use crate::frame::color::Color;

/// Fixed grouping of catalog entries.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Retrieval,
    Reasoning,
    Generation,
    Infrastructure,
    Multimodal,
    Alignment,
    Speculative,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 7] = [
        Category::Retrieval,
        Category::Reasoning,
        Category::Generation,
        Category::Infrastructure,
        Category::Multimodal,
        Category::Alignment,
        Category::Speculative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Retrieval => "retrieval",
            Self::Reasoning => "reasoning",
            Self::Generation => "generation",
            Self::Infrastructure => "infrastructure",
            Self::Multimodal => "multimodal",
            Self::Alignment => "alignment",
            Self::Speculative => "speculative",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Retrieval => "Retrieval",
            Self::Reasoning => "Reasoning",
            Self::Generation => "Generation",
            Self::Infrastructure => "Infrastructure",
            Self::Multimodal => "Multimodal",
            Self::Alignment => "Alignment",
            Self::Speculative => "Speculative",
        }
    }

    pub fn accent(self) -> Color {
        match self {
            Self::Retrieval => Color::hex(0xe8c872),
            Self::Reasoning => Color::hex(0xc4a0d8),
            Self::Generation => Color::hex(0xa8c4a0),
            Self::Infrastructure => Color::hex(0xd4a878),
            Self::Multimodal => Color::hex(0x88b8c8),
            Self::Alignment => Color::hex(0xc89888),
            Self::Speculative => Color::hex(0xb0b8d0),
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Next filter in the cycle `all -> retrieval -> ... -> speculative -> all`.
    pub fn next_filter(filter: Option<Category>) -> Option<Category> {
        match filter {
            None => Some(Self::ALL[0]),
            Some(c) => Self::ALL.get(c.index() + 1).copied(),
        }
    }

    /// Inverse of [`Category::next_filter`].
    pub fn prev_filter(filter: Option<Category>) -> Option<Category> {
        match filter {
            None => Self::ALL.last().copied(),
            Some(c) => c.index().checked_sub(1).map(|i| Self::ALL[i]),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LoopreelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| LoopreelError::validation(format!("unknown category '{s}'")))
    }
}
