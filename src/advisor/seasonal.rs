//! Weather-adjusted seasonal tip generation.
//!
//! A pure function of texture reading + weather snapshot. Both inputs must
//! be present to produce anything: an absent input means "nothing to show
//! yet" (empty list), which callers deliberately treat differently from the
//! single fallback tip produced when no rule matched.

use super::types::{AdvisoryTip, CareRules};
use crate::texture::TextureReading;
use crate::weather::WeatherSnapshot;

/// Generate the ordered tip list for a classified hair type under current
/// weather.
///
/// - `texture` is `None` while no classification has run; `weather` is
///   `None` while no lookup has run. Either absence yields an empty list.
/// - With both present, base tips for the matched bucket come first, then
///   every firing weather rule in table order, then, only if nothing else
///   was produced, exactly one fallback tip. The result is never empty.
pub fn seasonal_tips(
    rules: &CareRules,
    texture: Option<TextureReading>,
    weather: Option<&WeatherSnapshot>,
) -> Vec<AdvisoryTip> {
    let (texture, weather) = match (texture, weather) {
        (Some(t), Some(w)) => (t, w),
        _ => return Vec::new(),
    };

    let mut tips = Vec::new();

    // Step 1: base tips for the matched texture bucket. An unrecognized
    // label contributes nothing here but still allows weather tips below.
    if let Some(matched) = texture.texture() {
        if let Some(bucket) = rules.textures.get(matched.key()) {
            let source = format!("texture:{}", matched.key());
            for tip in &bucket.base_tips {
                tips.push(AdvisoryTip {
                    source: source.clone(),
                    text: tip.clone(),
                });
            }
        }
    }

    // Step 2: weather rules, each evaluated independently, appended in
    // table order.
    for rule in &rules.weather_rules {
        if rule.fires(weather) {
            tips.push(AdvisoryTip {
                source: rule.id.clone(),
                text: rule.tip.clone(),
            });
        }
    }

    // Step 3: guarantee a non-empty result.
    if tips.is_empty() {
        tips.push(AdvisoryTip {
            source: "fallback".to_string(),
            text: rules.fallback.tip.clone(),
        });
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::rules::default_rules;
    use crate::texture::classify_label;

    fn snapshot(temp: f64, humidity: f64, condition: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            city: "Test".to_string(),
            temperature_c: temp,
            feels_like_c: temp,
            humidity_percent: humidity,
            condition: condition.to_string(),
            description: String::new(),
            icon_code: String::new(),
        }
    }

    fn sources(tips: &[AdvisoryTip]) -> Vec<&str> {
        tips.iter().map(|t| t.source.as_str()).collect()
    }

    #[test]
    fn test_kinky_in_hot_rain_gets_base_humidity_and_heat_tips() {
        let rules = default_rules();
        let weather = snapshot(30.0, 80.0, "rain");
        let tips = seasonal_tips(&rules, Some(classify_label("Kinky")), Some(&weather));

        let sources = sources(&tips);
        assert_eq!(
            sources.iter().filter(|s| **s == "texture:coily").count(),
            2,
            "Both coily base tips expected, got {:?}",
            sources
        );
        assert!(sources.contains(&"high_humidity_or_rain"));
        assert!(sources.contains(&"heat"));
        assert!(!sources.contains(&"cold"));
        assert!(!sources.contains(&"low_humidity"));
        assert!(!sources.contains(&"fallback"));
    }

    #[test]
    fn test_base_tips_precede_weather_tips() {
        let rules = default_rules();
        let weather = snapshot(30.0, 80.0, "Rain");
        let tips = seasonal_tips(&rules, Some(classify_label("Curly")), Some(&weather));

        assert_eq!(tips[0].source, "texture:curly");
        assert_eq!(tips[1].source, "texture:curly");
        assert_eq!(tips[2].source, "high_humidity_or_rain");
        assert_eq!(tips[3].source, "heat");
    }

    #[test]
    fn test_straight_in_mild_clear_weather_gets_exactly_one_default_tip() {
        let rules = default_rules();
        let weather = snapshot(20.0, 50.0, "clear");
        let tips = seasonal_tips(&rules, Some(classify_label("Straight")), Some(&weather));

        assert_eq!(tips.len(), 1, "Got {:?}", sources(&tips));
        assert_eq!(tips[0].source, "fallback");
    }

    #[test]
    fn test_straight_in_harsh_weather_gets_weather_tips_only() {
        let rules = default_rules();
        let weather = snapshot(30.0, 80.0, "Rain");
        let tips = seasonal_tips(&rules, Some(classify_label("Straight")), Some(&weather));

        assert_eq!(sources(&tips), vec!["high_humidity_or_rain", "heat"]);
    }

    #[test]
    fn test_unrecognized_label_in_mild_weather_gets_exactly_one_fallback() {
        let rules = default_rules();
        let weather = snapshot(20.0, 50.0, "Clear");
        let tips = seasonal_tips(&rules, Some(classify_label("Type 5")), Some(&weather));

        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].source, "fallback");
    }

    #[test]
    fn test_unrecognized_label_still_gets_weather_tips() {
        let rules = default_rules();
        let weather = snapshot(8.0, 30.0, "Clear");
        let tips = seasonal_tips(&rules, Some(classify_label("Type 5")), Some(&weather));

        assert_eq!(sources(&tips), vec!["low_humidity", "cold"]);
    }

    #[test]
    fn test_absent_texture_yields_empty_list() {
        let rules = default_rules();
        let weather = snapshot(30.0, 80.0, "Rain");
        let tips = seasonal_tips(&rules, None, Some(&weather));
        assert!(tips.is_empty(), "Missing hair type means nothing to show yet");
    }

    #[test]
    fn test_absent_weather_yields_empty_list() {
        let rules = default_rules();
        let tips = seasonal_tips(&rules, Some(classify_label("Curly")), None);
        assert!(tips.is_empty(), "Missing weather means nothing to show yet");
    }

    #[test]
    fn test_boundary_values_fire_inclusively() {
        let rules = default_rules();

        // humidity exactly 70 fires the humidity rule
        let tips = seasonal_tips(
            &rules,
            Some(classify_label("Type 5")),
            Some(&snapshot(20.0, 70.0, "Clear")),
        );
        assert_eq!(sources(&tips), vec!["high_humidity_or_rain"]);

        // temperature exactly 28 fires heat
        let tips = seasonal_tips(
            &rules,
            Some(classify_label("Type 5")),
            Some(&snapshot(28.0, 50.0, "Clear")),
        );
        assert_eq!(sources(&tips), vec!["heat"]);

        // humidity exactly 40 fires low humidity
        let tips = seasonal_tips(
            &rules,
            Some(classify_label("Type 5")),
            Some(&snapshot(20.0, 40.0, "Clear")),
        );
        assert_eq!(sources(&tips), vec!["low_humidity"]);
    }

    #[test]
    fn test_result_never_empty_with_both_inputs() {
        let rules = default_rules();
        for label in ["Kinky", "Curly", "Wavy", "Straight", "Unknown"] {
            for weather in [
                snapshot(20.0, 50.0, "Clear"),
                snapshot(35.0, 90.0, "Rain"),
                snapshot(5.0, 20.0, "Snow"),
            ] {
                let tips =
                    seasonal_tips(&rules, Some(classify_label(label)), Some(&weather));
                assert!(
                    !tips.is_empty(),
                    "Tips must never be empty for label '{}' in {:?}",
                    label,
                    weather.condition
                );
            }
        }
    }
}
