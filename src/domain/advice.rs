//! Templated relationship advice built on the mock scorer.

use crate::domain::birth::BirthInput;
use crate::domain::scoring::calculate_compatibility;

/// Disclaimers attached to every templated answer.
pub const DISCLAIMERS: &[&str] = &[
    "This is for entertainment and spiritual guidance purposes only.",
    "Not a substitute for professional counseling or medical advice.",
    "Consult qualified professionals for important life decisions.",
];

/// Closing line appended to crisis resources when a question is routed away.
pub const SAFETY_DISCLAIMER: &str = "Please contact professional support services.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Marriage,
    Children,
    Career,
    General,
}

impl Topic {
    fn detect(question: &str) -> Self {
        let question = question.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|w| question.contains(w));

        if mentions(&["marry", "marriage"]) {
            Topic::Marriage
        } else if mentions(&["child", "children", "baby"]) {
            Topic::Children
        } else if mentions(&["career", "work"]) {
            Topic::Career
        } else {
            Topic::General
        }
    }
}

/// Answers a free-text question about two partners from fixed templates.
pub fn generate_advice(partner_a: &BirthInput, partner_b: &BirthInput, question: &str) -> String {
    let compatibility = calculate_compatibility(partner_a, partner_b);
    let score = compatibility.overall.score36;
    let (a, b) = (&partner_a.name, &partner_b.name);

    match Topic::detect(question) {
        Topic::Marriage if score >= 28 => format!(
            "Based on your cosmic alignment ({score}/36 Gunas), this union shows excellent promise for marriage. \
             The stars indicate a harmonious partnership built on mutual understanding and shared values. \
             Consider an auspicious muhurat for your wedding to maximize celestial blessings."
        ),
        Topic::Marriage if score >= 22 => format!(
            "Your compatibility score of {score}/36 suggests a good foundation for marriage. \
             While there are areas that will require conscious effort, your combined energies can create a lasting bond. \
             Performing the recommended remedies before marriage can strengthen your union."
        ),
        Topic::Marriage => format!(
            "With a score of {score}/36, marriage requires careful consideration and the guidance of an experienced astrologer. \
             This doesn't mean the union is impossible, but specific remedies and rituals are advisable to ensure harmony."
        ),
        Topic::Children => format!(
            "The fifth house analysis from both charts indicates potential for progeny. \
             For {a} and {b}, Jupiter's blessings play a key role. \
             Consider Santana Gopala mantra jaap and visiting Santoshi Mata temple for divine blessings in this matter."
        ),
        Topic::Career => format!(
            "Looking at the tenth house for both partners, your professional lives can complement each other well. \
             {a}'s strengths may balance {b}'s approach. \
             Support each other's ambitions while maintaining work-life harmony."
        ),
        Topic::General => format!(
            "Based on the Vedic analysis of both charts, {a} and {b} have a compatibility score of {score}/36. \
             {label}. Focus on the strengths of your union: {insight} \
             The recommended remedies can help enhance harmony in areas that need attention.",
            label = compatibility.overall.label,
            insight = compatibility.breakdown.mental.insight,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, date: &str, time: &str, city: &str) -> BirthInput {
        BirthInput {
            name: name.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            tz: "Asia/Kolkata".to_string(),
            lat: 19.0,
            lon: 72.0,
            city: Some(city.to_string()),
        }
    }

    fn excellent_pair() -> (BirthInput, BirthInput) {
        (
            person("Asha", "1990-05-15", "14:30", "Mumbai"),
            person("Ravi", "1992-08-20", "06:15", "Delhi"),
        )
    }

    #[test]
    fn test_topic_detection_order() {
        assert_eq!(Topic::detect("Should we MARRY?"), Topic::Marriage);
        assert_eq!(Topic::detect("marriage and children"), Topic::Marriage);
        assert_eq!(Topic::detect("When will we have a baby"), Topic::Children);
        assert_eq!(Topic::detect("How is my career"), Topic::Career);
        assert_eq!(Topic::detect("Tell me more"), Topic::General);
    }

    #[test]
    fn test_marriage_advice_uses_score_band() {
        let (a, b) = excellent_pair();
        let advice = generate_advice(&a, &b, "Should we marry next year?");

        assert!(advice.starts_with("Based on your cosmic alignment (30/36 Gunas)"));
    }

    #[test]
    fn test_children_and_career_advice_name_partners() {
        let (a, b) = excellent_pair();

        let children = generate_advice(&a, &b, "children?");
        assert!(children.contains("For Asha and Ravi"));

        let career = generate_advice(&a, &b, "what about work");
        assert!(career.contains("Asha's strengths may balance Ravi's approach"));
    }

    #[test]
    fn test_general_advice_includes_label_and_insight() {
        let (a, b) = excellent_pair();
        let advice = generate_advice(&a, &b, "anything else?");

        assert!(advice.contains("compatibility score of 30/36"));
        assert!(advice.contains("Excellent Match."));
        assert!(advice.contains("Your Moon signs create a natural understanding"));
    }
}
