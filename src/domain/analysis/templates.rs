//! Table-driven narrative templates.
//!
//! Every templated phrase the narrative generator emits is resolved from the
//! tables in this module, keyed by category, risk level, urgency, or spread
//! bucket. Keeping the text declarative means new wording never touches the
//! pipeline's control flow.

use crate::domain::foundation::{RiskLevel, Urgency};

use super::context::DecisionOption;

/// Which way an option's pros/cons lean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProConBalance {
    ProsLead,
    ConsLead,
    Balanced,
}

impl ProConBalance {
    /// Classifies an option by comparing its pro and con counts.
    pub fn of(option: &DecisionOption) -> Self {
        match option.pros.len().cmp(&option.cons.len()) {
            std::cmp::Ordering::Greater => ProConBalance::ProsLead,
            std::cmp::Ordering::Less => ProConBalance::ConsLead,
            std::cmp::Ordering::Equal => ProConBalance::Balanced,
        }
    }
}

/// Bucketing of the final score spread, used to pick the comparison clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadBucket {
    /// Spread below the differentiation threshold.
    Tight,
    /// Spread between the threshold and 30.
    Moderate,
    /// Spread above 30.
    Decisive,
}

impl SpreadBucket {
    /// Classifies a final max-min spread given the differentiation threshold.
    pub fn of(spread: i32, threshold: i32) -> Self {
        if spread < threshold {
            SpreadBucket::Tight
        } else if spread > 30 {
            SpreadBucket::Decisive
        } else {
            SpreadBucket::Moderate
        }
    }
}

/// Four outcome phrases for one decision category.
struct OutcomeTemplate {
    phrases: [&'static str; 4],
}

const CAREER_OUTCOMES: OutcomeTemplate = OutcomeTemplate {
    phrases: [
        "Likely to move your work forward and build momentum",
        "Should strengthen your professional standing over time",
        "Expect visible progress on what you are accountable for",
        "Positions you well for the next deadline or review",
    ],
};

const FINANCE_OUTCOMES: OutcomeTemplate = OutcomeTemplate {
    phrases: [
        "Likely to leave your finances in a steadier place",
        "Expect a modest but real effect on your budget",
        "Should compound in your favor if you stay consistent",
        "Keeps your spending aligned with what you planned",
    ],
};

const HEALTH_OUTCOMES: OutcomeTemplate = OutcomeTemplate {
    phrases: [
        "Likely to leave you feeling better within days",
        "Expect gradual gains in energy and routine",
        "Should support the habits you are trying to build",
        "Keeps your wellbeing trending the right way",
    ],
};

const RELATIONSHIP_OUTCOMES: OutcomeTemplate = OutcomeTemplate {
    phrases: [
        "Likely to strengthen the relationships involved",
        "Expect clearer communication with the people affected",
        "Should build trust if you follow through",
        "Keeps the connection moving in a good direction",
    ],
};

const LIFESTYLE_OUTCOMES: OutcomeTemplate = OutcomeTemplate {
    phrases: [
        "Likely to make your day-to-day a little smoother",
        "Expect a small quality-of-life improvement",
        "Should fit naturally into your current routine",
        "Keeps your time going where you want it to",
    ],
};

const GENERAL_OUTCOMES: OutcomeTemplate = OutcomeTemplate {
    phrases: [
        "Likely to work out reasonably well",
        "Expect a solid, unremarkable result",
        "Should get you where you wanted to go",
        "Keeps things moving without surprises",
    ],
};

/// Resolves the outcome table for an open-ended category string.
/// "work" and "career" share a table; anything unrecognized is general.
fn outcome_template(category: &str) -> &'static OutcomeTemplate {
    match category.to_lowercase().as_str() {
        "work" | "career" => &CAREER_OUTCOMES,
        "finance" => &FINANCE_OUTCOMES,
        "health" => &HEALTH_OUTCOMES,
        "relationships" => &RELATIONSHIP_OUTCOMES,
        "lifestyle" => &LIFESTYLE_OUTCOMES,
        _ => &GENERAL_OUTCOMES,
    }
}

/// Builds the predicted outcome for one option.
///
/// Phrase selection is deterministic: index = text length mod 4, with a
/// closing clause keyed by whether pros outnumber cons or vice versa.
pub fn predicted_outcome(category: &str, option: &DecisionOption) -> String {
    let template = outcome_template(category);
    let phrase = template.phrases[option.text.chars().count() % 4];

    let qualifier = match ProConBalance::of(option) {
        ProConBalance::ProsLead => ", and the upsides you listed back that up",
        ProConBalance::ConsLead => ", though the drawbacks you noted deserve a second look",
        ProConBalance::Balanced => ", with fairly balanced considerations either way",
    };

    format!("{}{}", phrase, qualifier)
}

/// Closing clause for the one-line summary, keyed by the winner's risk level.
pub fn summary_risk_clause(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "It looks like a safe, productive move.",
        RiskLevel::Medium => "It carries some uncertainty, so keep an eye on how it plays out.",
        RiskLevel::High => "It may feel tempting, but it pulls against what you said matters here.",
    }
}

/// Risk-level closing remark for the long-form reasoning.
pub fn reasoning_risk_remark(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "Risk-wise this is a low-stakes pick; the downside is limited even if it disappoints.",
        RiskLevel::Medium => "There is moderate risk here, mostly from things you cannot fully control yet.",
        RiskLevel::High => "This is the risky path: it trades short-term comfort against the goal you described.",
    }
}

/// Urgency-dependent clause for the reasoning text.
pub fn urgency_clause(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Low => "There is no real time pressure, so you can afford to sit with this one.",
        Urgency::Medium => "You have some breathing room, but this should not linger for weeks.",
        Urgency::High => "This is time-sensitive, so the ranking leans toward what pays off soonest.",
        Urgency::Critical => {
            "This is marked critical: deciding quickly matters almost as much as deciding well."
        }
    }
}

/// Urgency-dependent time-pressure remark for the key factors list.
pub fn urgency_factor(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Low => "Low urgency: no deadline is forcing your hand",
        Urgency::Medium => "Medium urgency: worth settling within a few days",
        Urgency::High => "High urgency: time pressure is shaping this decision",
        Urgency::Critical => "Critical urgency: this needs an answer now",
    }
}

/// Comparison clause keyed by how far apart the final scores landed.
pub fn comparison_clause(bucket: SpreadBucket) -> &'static str {
    match bucket {
        SpreadBucket::Tight => {
            "All of your options scored close together, so trust your gut between the top picks."
        }
        SpreadBucket::Moderate => {
            "The top option leads, but the others have genuine merit too."
        }
        SpreadBucket::Decisive => {
            "One option stands clearly above the rest; the gap is hard to argue with."
        }
    }
}
