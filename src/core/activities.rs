use crate::models::{Retreat, SaltyMeter};

/// Salty-meter dimension a threshold rule reads
#[derive(Debug, Clone, Copy)]
pub enum MeterDim {
    Adventure,
    Culture,
    Party,
    Sweat,
    Rest,
}

impl MeterDim {
    fn value(&self, meter: &SaltyMeter) -> u8 {
        match self {
            MeterDim::Adventure => meter.adventure,
            MeterDim::Culture => meter.culture,
            MeterDim::Party => meter.party,
            MeterDim::Sweat => meter.sweat,
            MeterDim::Rest => meter.rest,
        }
    }
}

/// Matching rule for one must-have tag
///
/// A tag matches if any `text` fragment appears in the retreat's
/// activity/feature text, or if the meter threshold is met. The rule set is
/// data, not branching code, so new tags are a table row away.
#[derive(Debug, Clone, Copy)]
pub struct TagRule {
    pub tag: &'static str,
    pub text: &'static [&'static str],
    pub meter: Option<(MeterDim, u8)>,
}

pub const TAG_RULES: &[TagRule] = &[
    TagRule { tag: "surfing", text: &["surf"], meter: None },
    TagRule { tag: "yoga", text: &["yoga"], meter: None },
    TagRule { tag: "hiking", text: &["hik", "trek", "trail"], meter: None },
    TagRule { tag: "nightlife", text: &[], meter: Some((MeterDim::Party, 7)) },
    TagRule { tag: "beach", text: &["beach", "coast", "island"], meter: None },
    TagRule { tag: "food", text: &["food", "culinary", "cooking"], meter: None },
    TagRule { tag: "culture", text: &["cultur", "temple", "history"], meter: Some((MeterDim::Culture, 6)) },
    TagRule { tag: "fitness", text: &["gym", "crossfit", "bootcamp"], meter: Some((MeterDim::Sweat, 7)) },
    TagRule { tag: "photography", text: &["photo"], meter: None },
    TagRule { tag: "wellness", text: &["wellness", "spa", "massage", "meditat"], meter: Some((MeterDim::Rest, 7)) },
];

/// Test a must-have tag against a retreat
///
/// Unknown tags fall back to a plain substring test of the tag itself, so a
/// new quiz option degrades sensibly before the table catches up.
pub fn tag_matches(tag: &str, retreat: &Retreat) -> bool {
    let haystack = retreat.search_text();
    let normalized = tag.to_lowercase();

    match TAG_RULES.iter().find(|rule| rule.tag == normalized) {
        Some(rule) => {
            if rule.text.iter().any(|fragment| haystack.contains(fragment)) {
                return true;
            }
            match rule.meter {
                Some((dim, threshold)) => dim.value(&retreat.salty_meter) >= threshold,
                None => false,
            }
        }
        None => haystack.contains(&normalized),
    }
}

/// Count how many requested must-haves a retreat satisfies
pub fn count_matches(must_haves: &[String], retreat: &Retreat) -> usize {
    must_haves
        .iter()
        .filter(|tag| tag_matches(tag, retreat))
        .count()
}
