//! Coarse hair texture classification.
//!
//! Both the seasonal advisory generator and the routine planner key their
//! wording off the same coarse texture bucket, so the label is classified
//! exactly once -- at normalization -- and the enumerated result is consumed
//! by both downstream components.

use serde::{Deserialize, Serialize};

/// Coarse texture bucket derived from a hair-type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairTexture {
    Coily,
    Curly,
    Wavy,
    Straight,
}

/// Outcome of classifying a hair-type label that is present.
///
/// `Unrecognized` is distinct from "no label at all": an unrecognized label
/// still allows weather-driven tips, while an absent label produces no
/// advisory output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "texture")]
pub enum TextureReading {
    Matched(HairTexture),
    Unrecognized,
}

/// Wording class shared by texture pairs: coily/kinky and curly hair get the
/// rich templates, wavy and straight hair the lightweight ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordingClass {
    Rich,
    Lightweight,
}

impl HairTexture {
    /// Stable key used by the care rules table.
    pub fn key(&self) -> &'static str {
        match self {
            HairTexture::Coily => "coily",
            HairTexture::Curly => "curly",
            HairTexture::Wavy => "wavy",
            HairTexture::Straight => "straight",
        }
    }

    pub fn wording(&self) -> WordingClass {
        match self {
            HairTexture::Coily | HairTexture::Curly => WordingClass::Rich,
            HairTexture::Wavy | HairTexture::Straight => WordingClass::Lightweight,
        }
    }
}

impl TextureReading {
    pub fn texture(&self) -> Option<HairTexture> {
        match self {
            TextureReading::Matched(texture) => Some(*texture),
            TextureReading::Unrecognized => None,
        }
    }

    /// Wording class for the routine planner. Unrecognized labels fall back
    /// to the neutral lightweight templates.
    pub fn wording(&self) -> WordingClass {
        self.texture()
            .map(|t| t.wording())
            .unwrap_or(WordingClass::Lightweight)
    }
}

/// Classify a hair-type label into the first matching bucket by
/// case-insensitive substring, tested in priority order:
/// coily/kinky, then curly, then wavy, then straight.
pub fn classify_label(label: &str) -> TextureReading {
    let lower = label.to_lowercase();
    if lower.contains("coil") || lower.contains("kink") {
        TextureReading::Matched(HairTexture::Coily)
    } else if lower.contains("curl") {
        TextureReading::Matched(HairTexture::Curly)
    } else if lower.contains("wav") {
        TextureReading::Matched(HairTexture::Wavy)
    } else if lower.contains("straight") {
        TextureReading::Matched(HairTexture::Straight)
    } else {
        TextureReading::Unrecognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_priority_order() {
        assert_eq!(
            classify_label("Kinky"),
            TextureReading::Matched(HairTexture::Coily)
        );
        assert_eq!(
            classify_label("coily"),
            TextureReading::Matched(HairTexture::Coily)
        );
        // Coily/kinky wins over curly when both substrings appear
        assert_eq!(
            classify_label("kinky-curly"),
            TextureReading::Matched(HairTexture::Coily)
        );
        assert_eq!(
            classify_label("Curly"),
            TextureReading::Matched(HairTexture::Curly)
        );
        assert_eq!(
            classify_label("Wavy hair"),
            TextureReading::Matched(HairTexture::Wavy)
        );
        assert_eq!(
            classify_label("STRAIGHT"),
            TextureReading::Matched(HairTexture::Straight)
        );
    }

    #[test]
    fn test_classify_unrecognized() {
        assert_eq!(classify_label("Unknown"), TextureReading::Unrecognized);
        assert_eq!(classify_label(""), TextureReading::Unrecognized);
        assert_eq!(classify_label("Type 5"), TextureReading::Unrecognized);
    }

    #[test]
    fn test_wording_classes() {
        assert_eq!(HairTexture::Coily.wording(), WordingClass::Rich);
        assert_eq!(HairTexture::Curly.wording(), WordingClass::Rich);
        assert_eq!(HairTexture::Wavy.wording(), WordingClass::Lightweight);
        assert_eq!(HairTexture::Straight.wording(), WordingClass::Lightweight);
        assert_eq!(
            TextureReading::Unrecognized.wording(),
            WordingClass::Lightweight
        );
    }
}
