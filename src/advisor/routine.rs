//! Weekly routine planning.
//!
//! A pure function of texture bucket + user-chosen intensity. The plan is a
//! fixed ordered sequence of four blocks; wording comes from in-code lookup
//! tables keyed by intensity and by the coarse wording class (coily/kinky
//! and curly share the rich templates, wavy and straight the lightweight
//! ones). Deterministic and total: there is no failure mode.

use serde::{Deserialize, Serialize};

use crate::texture::{TextureReading, WordingClass};

/// User-selected care aggressiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutineIntensity {
    Light,
    Balanced,
    Intense,
}

impl RoutineIntensity {
    /// Parse from a user-facing string. Unrecognized values default to
    /// `Balanced`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "light" => RoutineIntensity::Light,
            "intense" => RoutineIntensity::Intense,
            _ => RoutineIntensity::Balanced,
        }
    }
}

/// One block of the weekly plan.
#[derive(Debug, Clone, Serialize)]
pub struct RoutineBlock {
    pub title: String,
    /// When the block happens, e.g. "weekly" or "every 7–10 days".
    pub schedule: String,
    /// Ordered steps; never empty.
    pub steps: Vec<String>,
}

/// Build the weekly plan for a texture bucket at the given intensity.
///
/// Always returns the same four blocks in order: wash day, mid-week
/// moisture, night routine, scalp & treatment slot.
pub fn weekly_plan(texture: TextureReading, intensity: RoutineIntensity) -> Vec<RoutineBlock> {
    let wording = texture.wording();
    vec![
        wash_day(wording, intensity),
        mid_week(wording, intensity),
        night_routine(wording),
        treatment_slot(wording, intensity),
    ]
}

fn wash_day(wording: WordingClass, intensity: RoutineIntensity) -> RoutineBlock {
    let schedule = match intensity {
        RoutineIntensity::Light => "every 7–10 days",
        RoutineIntensity::Balanced => "weekly",
        RoutineIntensity::Intense => "weekly plus a monthly clarifying wash",
    };
    let steps = match wording {
        WordingClass::Rich => vec![
            "Pre-poo with a penetrating oil before cleansing".to_string(),
            "Cleanse with a sulfate-free cream shampoo".to_string(),
            "Deep condition for 20–30 minutes, with gentle heat if you can".to_string(),
            "Detangle with fingers or a wide-tooth comb while conditioner is in".to_string(),
        ],
        WordingClass::Lightweight => vec![
            "Cleanse with a lightweight shampoo".to_string(),
            "Condition mid-lengths to ends only".to_string(),
            "Finish with a cool rinse for shine".to_string(),
        ],
    };
    RoutineBlock {
        title: "Wash day".to_string(),
        schedule: schedule.to_string(),
        steps,
    }
}

fn mid_week(wording: WordingClass, intensity: RoutineIntensity) -> RoutineBlock {
    let schedule = match intensity {
        RoutineIntensity::Light => "optional",
        RoutineIntensity::Balanced => "mid-week",
        RoutineIntensity::Intense => "2–3 times mid-week",
    };
    let steps = match wording {
        WordingClass::Rich => vec![
            "Refresh with a water-based leave-in".to_string(),
            "Seal with a rich butter or oil, ends first".to_string(),
        ],
        WordingClass::Lightweight => vec![
            "Mist lightly with a leave-in spray".to_string(),
            "Smooth a drop of light oil over the ends".to_string(),
        ],
    };
    RoutineBlock {
        title: "Mid-week moisture".to_string(),
        schedule: schedule.to_string(),
        steps,
    }
}

fn night_routine(wording: WordingClass) -> RoutineBlock {
    let steps = match wording {
        WordingClass::Rich => vec![
            "Sleep on a satin or silk pillowcase, or wrap with a bonnet".to_string(),
            "Pineapple or loosely braid to protect the curl pattern".to_string(),
        ],
        WordingClass::Lightweight => vec![
            "Sleep on a satin or silk pillowcase".to_string(),
            "Tie hair in a loose braid or wrap to prevent tangles".to_string(),
        ],
    };
    RoutineBlock {
        title: "Night routine (daily)".to_string(),
        schedule: "nightly".to_string(),
        steps,
    }
}

fn treatment_slot(wording: WordingClass, intensity: RoutineIntensity) -> RoutineBlock {
    let treatment = match intensity {
        RoutineIntensity::Intense => {
            "Work in a protein or bond-repair treatment to rebuild strength"
        }
        _ => "Apply a moisturizing mask and rinse after 15 minutes",
    };
    let massage = match wording {
        WordingClass::Rich => "Massage the scalp with a nourishing oil for 3–5 minutes",
        WordingClass::Lightweight => "Massage the scalp for 3–5 minutes to boost circulation",
    };
    RoutineBlock {
        title: "Scalp & treatment slot".to_string(),
        schedule: "once a week".to_string(),
        steps: vec![massage.to_string(), treatment.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::classify_label;

    #[test]
    fn test_intensity_parse() {
        assert_eq!(RoutineIntensity::parse("light"), RoutineIntensity::Light);
        assert_eq!(RoutineIntensity::parse(" Intense "), RoutineIntensity::Intense);
        assert_eq!(RoutineIntensity::parse("balanced"), RoutineIntensity::Balanced);
        // Unrecognized defaults to balanced
        assert_eq!(RoutineIntensity::parse("extreme"), RoutineIntensity::Balanced);
        assert_eq!(RoutineIntensity::parse(""), RoutineIntensity::Balanced);
    }

    #[test]
    fn test_plan_has_four_blocks_in_fixed_order() {
        let plan = weekly_plan(classify_label("Curly"), RoutineIntensity::Balanced);
        let titles: Vec<&str> = plan.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Wash day",
                "Mid-week moisture",
                "Night routine (daily)",
                "Scalp & treatment slot"
            ]
        );
    }

    #[test]
    fn test_wavy_light_plan_wording() {
        let plan = weekly_plan(classify_label("Wavy"), RoutineIntensity::Light);

        assert_eq!(plan[0].schedule, "every 7–10 days");
        assert_eq!(plan[1].schedule, "optional");
        // Lightweight wording throughout
        assert!(plan[0].steps.iter().any(|s| s.contains("lightweight")));
        assert!(plan[1].steps.iter().any(|s| s.contains("light oil")));
    }

    #[test]
    fn test_wash_frequency_per_intensity() {
        let texture = classify_label("Coily");
        assert_eq!(
            weekly_plan(texture, RoutineIntensity::Balanced)[0].schedule,
            "weekly"
        );
        assert_eq!(
            weekly_plan(texture, RoutineIntensity::Intense)[0].schedule,
            "weekly plus a monthly clarifying wash"
        );
    }

    #[test]
    fn test_mid_week_frequency_per_intensity() {
        let texture = classify_label("Straight");
        assert_eq!(
            weekly_plan(texture, RoutineIntensity::Balanced)[1].schedule,
            "mid-week"
        );
        assert_eq!(
            weekly_plan(texture, RoutineIntensity::Intense)[1].schedule,
            "2–3 times mid-week"
        );
    }

    #[test]
    fn test_treatment_note_keyed_by_intensity() {
        let texture = classify_label("Curly");

        let intense = weekly_plan(texture, RoutineIntensity::Intense);
        assert!(
            intense[3].steps.iter().any(|s| s.contains("protein")),
            "Intense plan should suggest protein/bond repair"
        );

        let balanced = weekly_plan(texture, RoutineIntensity::Balanced);
        assert!(
            balanced[3].steps.iter().any(|s| s.contains("moisturizing mask")),
            "Non-intense plans should suggest a moisturizing mask"
        );
    }

    #[test]
    fn test_rich_wording_for_coily_and_curly() {
        for label in ["Kinky", "Curly"] {
            let plan = weekly_plan(classify_label(label), RoutineIntensity::Balanced);
            assert!(
                plan[1].steps.iter().any(|s| s.contains("rich butter")),
                "'{}' should get rich wording",
                label
            );
        }
    }

    #[test]
    fn test_unrecognized_texture_gets_lightweight_wording() {
        let plan = weekly_plan(classify_label("Unknown"), RoutineIntensity::Balanced);
        assert!(plan[0].steps.iter().any(|s| s.contains("lightweight")));
    }

    #[test]
    fn test_no_block_has_empty_steps() {
        for label in ["Kinky", "Curly", "Wavy", "Straight", "Unknown"] {
            for intensity in [
                RoutineIntensity::Light,
                RoutineIntensity::Balanced,
                RoutineIntensity::Intense,
            ] {
                for block in weekly_plan(classify_label(label), intensity) {
                    assert!(
                        !block.steps.is_empty(),
                        "Block '{}' must have steps for '{}'",
                        block.title,
                        label
                    );
                }
            }
        }
    }
}
