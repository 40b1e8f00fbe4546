//! Deterministic placeholder compatibility scoring.
//!
//! Scores are derived from plain arithmetic over the birth strings, not from
//! planetary positions. The hash must stay bit-for-bit stable: demo results
//! shown to users are reproduced from it.

use serde::Serialize;

use crate::domain::birth::BirthInput;

/// Maximum score of each breakdown dimension.
pub const DIMENSION_MAX: u32 = 12;

const MIN_SCORE: u32 = 12;
const MAX_SCORE: u32 = 34;
const SCORE_SPAN: f64 = 22.0;

const EXCELLENT_REMEDIES: &[&str] = &[
    "Light a ghee lamp together on Fridays to honor Venus and strengthen love.",
    "Wear matching gold jewelry blessed on an auspicious day.",
    "Plant a Tulsi (Holy Basil) together for divine blessings.",
];

const GOOD_REMEDIES: &[&str] = &[
    "Recite the Ganesha mantra on Tuesdays to remove obstacles.",
    "Donate yellow grains for Jupiter's blessing on partnerships.",
    "Offer milk to a Shiva Lingam on Mondays for harmony.",
    "Keep a pair of Mandarin ducks in your home for relationship luck.",
];

const MODERATE_REMEDIES: &[&str] = &[
    "Perform the Navagraha Shanti puja to balance planetary energies.",
    "Wear a 7-mukhi Rudraksha for relationship harmony.",
    "Donate clothes to the needy on Saturdays to appease Saturn.",
    "Chant 'Om Shukraya Namaha' 108 times on Fridays.",
    "Keep a crystal rose quartz in your bedroom.",
];

const CHALLENGING_REMEDIES: &[&str] = &[
    "Consult a qualified Vedic astrologer for personalized remedies.",
    "Perform Kumbh Vivah ritual if Manglik dosha is present.",
    "Chant Hanuman Chalisa daily for Mars-related issues.",
    "Donate red lentils on Tuesdays to pacify Mars.",
    "Wear a coral gemstone after proper consultation.",
    "Fast on Tuesdays for Mangal Shanti.",
];

/// Verdict band of a 36-point score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Excellent,
    Good,
    Moderate,
    Challenging,
}

impl Verdict {
    pub fn from_score(score36: u32) -> Self {
        if score36 >= 28 {
            Verdict::Excellent
        } else if score36 >= 22 {
            Verdict::Good
        } else if score36 >= 17 {
            Verdict::Moderate
        } else {
            Verdict::Challenging
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Excellent => "Excellent Match",
            Verdict::Good => "Good Compatibility",
            Verdict::Moderate => "Moderate Match",
            Verdict::Challenging => "Challenging - Remedies Recommended",
        }
    }

    fn remedy_pool(self) -> &'static [&'static str] {
        match self {
            Verdict::Excellent => EXCELLENT_REMEDIES,
            Verdict::Good => GOOD_REMEDIES,
            Verdict::Moderate => MODERATE_REMEDIES,
            Verdict::Challenging => CHALLENGING_REMEDIES,
        }
    }

    /// Lower scores get more remedies.
    fn remedy_count(score36: u32) -> usize {
        if score36 >= 28 {
            2
        } else if score36 >= 17 {
            3
        } else {
            4
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightLevel {
    High,
    Medium,
    Low,
}

impl InsightLevel {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 0.7 {
            InsightLevel::High
        } else if ratio >= 0.4 {
            InsightLevel::Medium
        } else {
            InsightLevel::Low
        }
    }
}

/// Sub-dimension of the breakdown, each a different weighting of the two hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Mental,
    Commitment,
    Physical,
}

impl Dimension {
    /// Weights applied to partner A's and partner B's hash.
    fn weights(self) -> (u32, u32) {
        match self {
            Dimension::Mental => (7, 3),
            Dimension::Commitment => (5, 5),
            Dimension::Physical => (3, 7),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Mental => "Mental Rapport",
            Dimension::Commitment => "Commitment & Trust",
            Dimension::Physical => "Physical Harmony",
        }
    }

    pub fn insight(self, level: InsightLevel) -> &'static str {
        match (self, level) {
            (Dimension::Mental, InsightLevel::High) => {
                "Excellent emotional and intellectual connection. Your Moon signs create a natural understanding and empathy between you."
            }
            (Dimension::Mental, InsightLevel::Medium) => {
                "Good mental compatibility with room for deeper connection. Communication will be your key to bridging differences."
            }
            (Dimension::Mental, InsightLevel::Low) => {
                "Different emotional wavelengths require patience. Practice active listening and validate each other's feelings."
            }
            (Dimension::Commitment, InsightLevel::High) => {
                "Strong foundation for long-term partnership. Saturn blesses this union with stability and mutual respect."
            }
            (Dimension::Commitment, InsightLevel::Medium) => {
                "Moderate alignment in life goals. Regular discussions about shared vision will strengthen your bond."
            }
            (Dimension::Commitment, InsightLevel::Low) => {
                "Different life paths may create tension. Focus on finding common ground and respecting individual aspirations."
            }
            (Dimension::Physical, InsightLevel::High) => {
                "Excellent physical and energetic compatibility. Mars and Venus are harmoniously aligned."
            }
            (Dimension::Physical, InsightLevel::Medium) => {
                "Good physical chemistry with natural attraction. Keep the spark alive through shared activities."
            }
            (Dimension::Physical, InsightLevel::Low) => {
                "Physical connection may need nurturing. Focus on building emotional intimacy first."
            }
        }
    }

    fn score(self, hash_a: u32, hash_b: u32) -> BreakdownItem {
        let (weight_a, weight_b) = self.weights();
        let ratio = f64::from((hash_a * weight_a + hash_b * weight_b) % 100) / 100.0;

        BreakdownItem {
            score: (ratio * f64::from(DIMENSION_MAX)).round() as u32,
            max_score: DIMENSION_MAX,
            label: self.label().to_string(),
            insight: self.insight(InsightLevel::from_ratio(ratio)).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overall {
    pub score36: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownItem {
    pub score: u32,
    pub max_score: u32,
    pub label: String,
    pub insight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub mental: BreakdownItem,
    pub commitment: BreakdownItem,
    pub physical: BreakdownItem,
}

/// Result of [`calculate_compatibility`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockCompatibility {
    pub overall: Overall,
    pub breakdown: Breakdown,
    pub remedies: Vec<String>,
}

/// Parses the leading decimal digits of a component, `0` when there are none.
fn leading_number(component: &str) -> u64 {
    let digits: String = component
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().unwrap_or(0)
}

fn component_sum(value: &str, separator: char) -> u64 {
    value.split(separator).map(leading_number).sum()
}

/// Hash of one person's birth data, in `0..100`.
///
/// Sum of the date components, the time components and the UTF-16 code
/// units of the city label, reduced modulo 100.
pub fn birth_hash(input: &BirthInput) -> u32 {
    let date_sum = component_sum(&input.date, '-');
    let time_sum = component_sum(&input.time, ':');
    let city_sum: u64 = input.city_label().encode_utf16().map(u64::from).sum();

    ((date_sum + time_sum + city_sum) % 100) as u32
}

/// Maps the combined hash onto the 36-point scale, clamped to `[12, 34]`.
pub fn score36(hash_a: u32, hash_b: u32) -> u32 {
    let combined = (hash_a + hash_b) % 100;
    let raw = (f64::from(combined) / 100.0 * SCORE_SPAN).floor() as u32 + MIN_SCORE;

    raw.clamp(MIN_SCORE, MAX_SCORE)
}

/// Scores two partners.
///
/// Pure and deterministic: identical inputs always produce identical output.
pub fn calculate_compatibility(partner_a: &BirthInput, partner_b: &BirthInput) -> MockCompatibility {
    let hash_a = birth_hash(partner_a);
    let hash_b = birth_hash(partner_b);

    let score = score36(hash_a, hash_b);
    let verdict = Verdict::from_score(score);

    let remedies = verdict
        .remedy_pool()
        .iter()
        .take(Verdict::remedy_count(score))
        .map(|r| r.to_string())
        .collect();

    MockCompatibility {
        overall: Overall {
            score36: score,
            label: verdict.label().to_string(),
        },
        breakdown: Breakdown {
            mental: Dimension::Mental.score(hash_a, hash_b),
            commitment: Dimension::Commitment.score(hash_a, hash_b),
            physical: Dimension::Physical.score(hash_a, hash_b),
        },
        remedies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth(date: &str, time: &str, city: Option<&str>) -> BirthInput {
        BirthInput {
            name: "Test".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            tz: "Asia/Kolkata".to_string(),
            lat: 19.0,
            lon: 72.0,
            city: city.map(str::to_string),
        }
    }

    #[test]
    fn test_birth_hash_sums_components_and_city_codes() {
        // 1990+5+15 + 14+30 + "Mumbai"(603) = 2657
        assert_eq!(birth_hash(&birth("1990-05-15", "14:30", Some("Mumbai"))), 57);
        // 1992+8+20 + 6+15 + "Delhi"(486) = 2527
        assert_eq!(birth_hash(&birth("1992-08-20", "06:15", Some("Delhi"))), 27);
        assert_eq!(birth_hash(&birth("1990-05-15", "14:30", None)), 54);
    }

    #[test]
    fn test_known_pair_scores() {
        let a = birth("1990-05-15", "14:30", Some("Mumbai"));
        let b = birth("1992-08-20", "06:15", Some("Delhi"));

        let result = calculate_compatibility(&a, &b);

        assert_eq!(result.overall.score36, 30);
        assert_eq!(result.overall.label, "Excellent Match");
        assert_eq!(result.remedies.len(), 2);
        assert_eq!(result.remedies[0], EXCELLENT_REMEDIES[0]);

        assert_eq!(result.breakdown.mental.label, "Mental Rapport");
        assert_eq!(result.breakdown.mental.score, 10);
        assert_eq!(result.breakdown.mental.max_score, 12);
        assert!(
            result
                .breakdown
                .mental
                .insight
                .starts_with("Excellent emotional and intellectual connection.")
        );
        assert_eq!(
            result.breakdown.mental.insight,
            Dimension::Mental.insight(InsightLevel::High)
        );
        assert_eq!(result.breakdown.commitment.score, 2);
        assert_eq!(
            result.breakdown.commitment.insight,
            Dimension::Commitment.insight(InsightLevel::Low)
        );
        assert_eq!(result.breakdown.physical.score, 7);
        assert_eq!(
            result.breakdown.physical.insight,
            Dimension::Physical.insight(InsightLevel::Medium)
        );
    }

    #[test]
    fn test_lowest_band_gets_four_remedies() {
        let a = birth("2000-01-01", "00:00", None); // hash 2
        let b = birth("2000-12-31", "23:32", None); // hash 98

        let result = calculate_compatibility(&a, &b);

        assert_eq!(result.overall.score36, 12);
        assert_eq!(result.overall.label, "Challenging - Remedies Recommended");
        assert_eq!(result.remedies.len(), 4);
        assert_eq!(result.breakdown.mental.score, 1);
        assert_eq!(result.breakdown.commitment.score, 0);
        assert_eq!(result.breakdown.physical.score, 11);
    }

    #[test]
    fn test_score_stays_in_range_and_is_deterministic() {
        let cities = [None, Some("Pune"), Some("Chandigarh"), Some("São Paulo")];

        for day in 1..=28 {
            for hour in [0, 7, 13, 23] {
                for city in cities {
                    let a = birth(&format!("1988-03-{day:02}"), &format!("{hour:02}:45"), city);
                    let b = birth("1991-11-09", &format!("{hour:02}:05"), Some("Jaipur"));

                    let first = calculate_compatibility(&a, &b);
                    let second = calculate_compatibility(&a, &b);

                    assert_eq!(first, second);
                    assert!((12..=34).contains(&first.overall.score36));
                    assert!((2..=4).contains(&first.remedies.len()));
                    assert!(first.breakdown.mental.score <= DIMENSION_MAX);
                }
            }
        }
    }

    #[test]
    fn test_score36_covers_hash_extremes() {
        assert_eq!(score36(0, 0), 12);
        assert_eq!(score36(50, 49), 33);
        assert_eq!(score36(60, 40), 12);
    }

    #[test]
    fn test_verdict_bands_do_not_overlap() {
        for score in 12..=34 {
            let expected = match score {
                28..=34 => Verdict::Excellent,
                22..=27 => Verdict::Good,
                17..=21 => Verdict::Moderate,
                _ => Verdict::Challenging,
            };
            assert_eq!(Verdict::from_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn test_insight_level_thresholds() {
        assert_eq!(InsightLevel::from_ratio(0.7), InsightLevel::High);
        assert_eq!(InsightLevel::from_ratio(0.69), InsightLevel::Medium);
        assert_eq!(InsightLevel::from_ratio(0.4), InsightLevel::Medium);
        assert_eq!(InsightLevel::from_ratio(0.39), InsightLevel::Low);
    }

    #[test]
    fn test_leading_number_matches_lenient_parsing() {
        assert_eq!(leading_number("08"), 8);
        assert_eq!(leading_number("12abc"), 12);
        assert_eq!(leading_number("x"), 0);
        assert_eq!(leading_number(""), 0);
    }

    #[test]
    fn test_serialized_shape_uses_camel_case_max_score() {
        let a = birth("1990-05-15", "14:30", Some("Mumbai"));
        let value = serde_json::to_value(calculate_compatibility(&a, &a)).unwrap();

        assert!(value["overall"]["score36"].is_u64());
        assert_eq!(value["breakdown"]["mental"]["maxScore"], 12);
        assert!(value["remedies"].is_array());
    }
}
