use serde::{Deserialize, Serialize};

/// The six fixed categories every assessment question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityCategory {
    Emotion,
    Intellect,
    Social,
    Drive,
    Openness,
    Resilience,
}

impl PersonalityCategory {
    pub const fn label(self) -> &'static str {
        match self {
            PersonalityCategory::Emotion => "Emotion",
            PersonalityCategory::Intellect => "Intellect",
            PersonalityCategory::Social => "Social",
            PersonalityCategory::Drive => "Drive",
            PersonalityCategory::Openness => "Openness",
            PersonalityCategory::Resilience => "Resilience",
        }
    }
}

/// A single Likert-scale prompt. Reverse-scored questions invert the raw
/// answer (8 minus raw) before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub category: PersonalityCategory,
    pub dimension: &'static str,
    pub reverse_scored: bool,
}

/// Ordered, validated set of questions backing one assessment.
///
/// Category order throughout the pipeline is the first-appearance order of
/// categories in this catalog, not alphabetical order.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Builds a catalog from an arbitrary question list, rejecting empty
    /// input and duplicate question ids.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, question) in questions.iter().enumerate() {
            if questions[..index].iter().any(|seen| seen.id == question.id) {
                return Err(CatalogError::DuplicateQuestionId(question.id.to_string()));
            }
        }

        Ok(Self { questions })
    }

    /// The production question set shipped with the assessment.
    pub fn standard() -> Self {
        Self {
            questions: STANDARD_QUESTIONS.to_vec(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn find(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Distinct categories in first-appearance order.
    pub fn category_order(&self) -> Vec<PersonalityCategory> {
        let mut order = Vec::new();
        for question in &self.questions {
            if !order.contains(&question.category) {
                order.push(question.category);
            }
        }
        order
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Error raised while validating a question catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("question catalog contains no questions")]
    Empty,
    #[error("question catalog contains duplicate id '{0}'")]
    DuplicateQuestionId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_well_formed() {
        let catalog = QuestionCatalog::standard();
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.category_order().len(), 6);
        QuestionCatalog::new(catalog.questions().to_vec()).expect("standard set validates");
    }

    #[test]
    fn reverse_scored_questions_are_flagged() {
        let catalog = QuestionCatalog::standard();
        let reversed: Vec<&str> = catalog
            .questions()
            .iter()
            .filter(|q| q.reverse_scored)
            .map(|q| q.id)
            .collect();
        assert_eq!(reversed, vec!["emotion_3", "intellect_3", "drive_3"]);
    }

    #[test]
    fn rejects_empty_catalogs() {
        assert!(matches!(
            QuestionCatalog::new(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn rejects_duplicate_question_ids() {
        let mut questions = QuestionCatalog::standard().questions().to_vec();
        let first = questions[0];
        questions.push(first);
        assert!(matches!(
            QuestionCatalog::new(questions),
            Err(CatalogError::DuplicateQuestionId(id)) if id == "emotion_1"
        ));
    }
}

const STANDARD_QUESTIONS: &[Question] = &[
    Question {
        id: "emotion_1",
        text: "I often feel deeply moved by art, music, or nature",
        category: PersonalityCategory::Emotion,
        dimension: "Sensitivity",
        reverse_scored: false,
    },
    Question {
        id: "emotion_2",
        text: "I find it easy to understand how others are feeling",
        category: PersonalityCategory::Emotion,
        dimension: "Empathy",
        reverse_scored: false,
    },
    Question {
        id: "emotion_3",
        text: "I prefer to make decisions based on logic rather than feelings",
        category: PersonalityCategory::Emotion,
        dimension: "Rationality",
        reverse_scored: true,
    },
    Question {
        id: "intellect_1",
        text: "I enjoy exploring abstract ideas and concepts",
        category: PersonalityCategory::Intellect,
        dimension: "Abstract Thinking",
        reverse_scored: false,
    },
    Question {
        id: "intellect_2",
        text: "I frequently question conventional wisdom",
        category: PersonalityCategory::Intellect,
        dimension: "Critical Thinking",
        reverse_scored: false,
    },
    Question {
        id: "intellect_3",
        text: "I prefer practical solutions over theoretical ones",
        category: PersonalityCategory::Intellect,
        dimension: "Pragmatism",
        reverse_scored: true,
    },
    Question {
        id: "social_1",
        text: "I feel energized after social gatherings",
        category: PersonalityCategory::Social,
        dimension: "Extraversion",
        reverse_scored: false,
    },
    Question {
        id: "social_2",
        text: "I adapt my communication style to different people",
        category: PersonalityCategory::Social,
        dimension: "Adaptability",
        reverse_scored: false,
    },
    Question {
        id: "social_3",
        text: "I prefer deep conversations over small talk",
        category: PersonalityCategory::Social,
        dimension: "Depth",
        reverse_scored: false,
    },
    Question {
        id: "drive_1",
        text: "I set ambitious goals for myself",
        category: PersonalityCategory::Drive,
        dimension: "Ambition",
        reverse_scored: false,
    },
    Question {
        id: "drive_2",
        text: "I persist in tasks even when they become difficult",
        category: PersonalityCategory::Drive,
        dimension: "Persistence",
        reverse_scored: false,
    },
    Question {
        id: "drive_3",
        text: "I prefer a predictable routine over constant change",
        category: PersonalityCategory::Drive,
        dimension: "Stability",
        reverse_scored: true,
    },
    Question {
        id: "openness_1",
        text: "I enjoy trying new and unfamiliar activities",
        category: PersonalityCategory::Openness,
        dimension: "Novelty Seeking",
        reverse_scored: false,
    },
    Question {
        id: "openness_2",
        text: "I appreciate diverse perspectives and cultures",
        category: PersonalityCategory::Openness,
        dimension: "Cultural Openness",
        reverse_scored: false,
    },
    Question {
        id: "resilience_1",
        text: "I recover quickly from setbacks and disappointments",
        category: PersonalityCategory::Resilience,
        dimension: "Recovery",
        reverse_scored: false,
    },
    Question {
        id: "resilience_2",
        text: "I maintain calm under pressure",
        category: PersonalityCategory::Resilience,
        dimension: "Composure",
        reverse_scored: false,
    },
];
