//! Deterministic fallback content keyed by (category, score tier).
//!
//! Pure static data: the pipeline reaches for this table whenever the
//! enrichment call fails, so a profile is always fully populated.

use super::CategoryNarrative;
use crate::assessment::catalog::PersonalityCategory;

pub(crate) const INSIGHTS_UNAVAILABLE: &str =
    "AI analysis temporarily unavailable. Please try again later.";
pub(crate) const INSIGHTS_EMPTY: &str = "Unable to generate AI analysis at this time.";

/// Scoring tier used both to frame prompts and to pick fallback content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn for_score(score: u8) -> Self {
        if score >= 70 {
            ScoreTier::High
        } else if score >= 30 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }
}

struct TierContent {
    traits: [&'static str; 4],
    description: &'static str,
}

struct FallbackTable {
    high: TierContent,
    medium: TierContent,
    low: TierContent,
}

impl FallbackTable {
    const fn tier(&self, tier: ScoreTier) -> &TierContent {
        match tier {
            ScoreTier::High => &self.high,
            ScoreTier::Medium => &self.medium,
            ScoreTier::Low => &self.low,
        }
    }
}

pub(crate) fn narrative_for(category: PersonalityCategory, score: u8) -> CategoryNarrative {
    let content = table_for(category).tier(ScoreTier::for_score(score));
    CategoryNarrative {
        traits: content.traits.iter().map(|t| t.to_string()).collect(),
        description: content.description.to_string(),
    }
}

fn table_for(category: PersonalityCategory) -> &'static FallbackTable {
    match category {
        PersonalityCategory::Emotion => &EMOTION,
        PersonalityCategory::Intellect => &INTELLECT,
        PersonalityCategory::Social => &SOCIAL,
        PersonalityCategory::Drive => &DRIVE,
        PersonalityCategory::Openness => &OPENNESS,
        PersonalityCategory::Resilience => &RESILIENCE,
    }
}

const EMOTION: FallbackTable = FallbackTable {
    high: TierContent {
        traits: ["Empathetic", "Intuitive", "Expressive", "Compassionate"],
        description: "You have a rich emotional landscape and are highly attuned to feelings, both your own and others.",
    },
    medium: TierContent {
        traits: ["Balanced", "Aware", "Responsive", "Moderate"],
        description: "You maintain a healthy balance between emotional awareness and rational decision-making.",
    },
    low: TierContent {
        traits: ["Analytical", "Detached", "Logical", "Objective"],
        description: "You tend to approach situations with logical analysis rather than emotional response.",
    },
};

const INTELLECT: FallbackTable = FallbackTable {
    high: TierContent {
        traits: ["Curious", "Analytical", "Philosophical", "Innovative"],
        description: "You thrive on intellectual challenges and enjoy exploring complex, abstract concepts.",
    },
    medium: TierContent {
        traits: ["Practical", "Thoughtful", "Reasonable", "Balanced"],
        description: "You value both practical solutions and thoughtful analysis in equal measure.",
    },
    low: TierContent {
        traits: ["Concrete", "Traditional", "Direct", "Pragmatic"],
        description: "You prefer concrete, tangible information and hands-on approaches to problem-solving.",
    },
};

const SOCIAL: FallbackTable = FallbackTable {
    high: TierContent {
        traits: ["Outgoing", "Engaging", "Energetic", "Sociable"],
        description: "You draw energy from social interactions and feel comfortable in group settings.",
    },
    medium: TierContent {
        traits: ["Adaptable", "Selective", "Balanced", "Situational"],
        description: "You adapt your social engagement based on context and personal energy levels.",
    },
    low: TierContent {
        traits: ["Reserved", "Independent", "Contemplative", "Selective"],
        description: "You value solitude and deep one-on-one connections over large social gatherings.",
    },
};

const DRIVE: FallbackTable = FallbackTable {
    high: TierContent {
        traits: ["Ambitious", "Persistent", "Focused", "Determined"],
        description: "You are highly motivated and persistent in pursuing your goals and ambitions.",
    },
    medium: TierContent {
        traits: ["Steady", "Reliable", "Purposeful", "Consistent"],
        description: "You maintain steady progress toward objectives while allowing for flexibility.",
    },
    low: TierContent {
        traits: ["Flexible", "Easygoing", "Spontaneous", "Adaptable"],
        description: "You prefer a more spontaneous approach to life with less rigid goal structures.",
    },
};

const OPENNESS: FallbackTable = FallbackTable {
    high: TierContent {
        traits: ["Adventurous", "Innovative", "Cosmopolitan", "Experimental"],
        description: "You actively seek new experiences and embrace diverse perspectives enthusiastically.",
    },
    medium: TierContent {
        traits: ["Open-minded", "Flexible", "Receptive", "Balanced"],
        description: "You are open to new ideas while maintaining connection to familiar foundations.",
    },
    low: TierContent {
        traits: ["Traditional", "Stable", "Consistent", "Grounding"],
        description: "You value tradition, consistency, and well-established methods and approaches.",
    },
};

const RESILIENCE: FallbackTable = FallbackTable {
    high: TierContent {
        traits: ["Robust", "Adaptable", "Composed", "Recovering"],
        description: "You demonstrate remarkable composure and adaptability in the face of challenges.",
    },
    medium: TierContent {
        traits: ["Stable", "Recovering", "Balanced", "Managing"],
        description: "You generally handle stress well while acknowledging your emotional responses.",
    },
    low: TierContent {
        traits: ["Sensitive", "Reactive", "Expressive", "Responsive"],
        description: "You experience emotions intensely and may be more sensitive to environmental stressors.",
    },
};
