//! FAQ entity and request DTOs.

use std::fmt;

use faqdesk_core::language::Language;
use faqdesk_core::translation::{Translatable, VariantText};
use faqdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `faqs` table.
///
/// `answer*` fields hold rich-text (HTML) markup as authored.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Faq {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub question_hi: Option<String>,
    pub answer_hi: Option<String>,
    pub question_bn: Option<String>,
    pub answer_bn: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Faq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.question)
    }
}

type VariantAccessor = fn(&Faq) -> VariantText<'_>;

/// Language -> override columns. Languages not listed (English) have none.
const VARIANT_FIELDS: [(Language, VariantAccessor); 2] = [
    (Language::Hindi, hindi_fields),
    (Language::Bengali, bengali_fields),
];

fn hindi_fields(faq: &Faq) -> VariantText<'_> {
    VariantText {
        question: faq.question_hi.as_deref(),
        answer: faq.answer_hi.as_deref(),
    }
}

fn bengali_fields(faq: &Faq) -> VariantText<'_> {
    VariantText {
        question: faq.question_bn.as_deref(),
        answer: faq.answer_bn.as_deref(),
    }
}

impl Translatable for Faq {
    fn translation_id(&self) -> DbId {
        self.id
    }

    fn base_question(&self) -> &str {
        &self.question
    }

    fn base_answer(&self) -> &str {
        &self.answer
    }

    fn variant(&self, language: Language) -> VariantText<'_> {
        VARIANT_FIELDS
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, accessor)| accessor(self))
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating an FAQ, also used for full replacement (PUT).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateFaq {
    #[validate(length(min = 1, max = 200, message = "question must be 1-200 characters"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer must not be empty"))]
    pub answer: String,
    #[validate(length(max = 200, message = "question_hi must be at most 200 characters"))]
    pub question_hi: Option<String>,
    pub answer_hi: Option<String>,
    #[validate(length(max = 200, message = "question_bn must be at most 200 characters"))]
    pub question_bn: Option<String>,
    pub answer_bn: Option<String>,
}

/// DTO for partially updating an FAQ. Omitted fields are left unchanged.
///
/// Setting a translation to `""` clears it for display purposes: empty
/// overrides fall back to the base text.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFaq {
    #[validate(length(min = 1, max = 200, message = "question must be 1-200 characters"))]
    pub question: Option<String>,
    #[validate(length(min = 1, message = "answer must not be empty"))]
    pub answer: Option<String>,
    #[validate(length(max = 200, message = "question_hi must be at most 200 characters"))]
    pub question_hi: Option<String>,
    pub answer_hi: Option<String>,
    #[validate(length(max = 200, message = "question_bn must be at most 200 characters"))]
    pub question_bn: Option<String>,
    pub answer_bn: Option<String>,
}

impl UpdateFaq {
    /// Whether the payload changes nothing.
    pub fn is_empty(&self) -> bool {
        self.question.is_none()
            && self.answer.is_none()
            && self.question_hi.is_none()
            && self.answer_hi.is_none()
            && self.question_bn.is_none()
            && self.answer_bn.is_none()
    }

    /// Apply the provided fields to `faq` in place.
    pub fn apply_to(&self, faq: &mut Faq) {
        if let Some(v) = &self.question {
            faq.question = v.clone();
        }
        if let Some(v) = &self.answer {
            faq.answer = v.clone();
        }
        if let Some(v) = &self.question_hi {
            faq.question_hi = Some(v.clone());
        }
        if let Some(v) = &self.answer_hi {
            faq.answer_hi = Some(v.clone());
        }
        if let Some(v) = &self.question_bn {
            faq.question_bn = Some(v.clone());
        }
        if let Some(v) = &self.answer_bn {
            faq.answer_bn = Some(v.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use faqdesk_core::translation::resolve_fields;

    use super::*;

    fn sample() -> Faq {
        let now = Utc::now();
        Faq {
            id: 3,
            question: "What is Django?".into(),
            answer: "<p>A web framework.</p>".into(),
            question_hi: Some("Django क्या है?".into()),
            answer_hi: None,
            question_bn: None,
            answer_bn: Some("<p>একটি ওয়েব ফ্রেমওয়ার্ক।</p>".into()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn display_is_question() {
        assert_eq!(sample().to_string(), "What is Django?");
    }

    #[test]
    fn variant_table_maps_columns() {
        let faq = sample();
        assert_eq!(faq.variant(Language::Hindi).question, Some("Django क्या है?"));
        assert_eq!(faq.variant(Language::Hindi).answer, None);
        assert_eq!(faq.variant(Language::Bengali).question, None);
        assert_eq!(faq.variant(Language::English), VariantText::default());
    }

    #[test]
    fn resolution_mixes_override_and_base_per_field() {
        let faq = sample();
        let bn = resolve_fields(&faq, "bn");
        assert_eq!(bn.question, "What is Django?");
        assert_eq!(bn.answer, "<p>একটি ওয়েব ফ্রেমওয়ার্ক।</p>");
    }

    #[test]
    fn create_requires_question_and_answer() {
        let dto = CreateFaq::default();
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("question"));
        assert!(fields.contains_key("answer"));
    }

    #[test]
    fn create_rejects_overlong_question() {
        let dto = CreateFaq {
            question: "q".repeat(201),
            answer: "a".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn question_length_counts_characters_not_bytes() {
        // 200 Devanagari characters are well over 200 bytes.
        let dto = CreateFaq {
            question: "प".repeat(200),
            answer: "a".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn update_rejects_empty_question() {
        let dto = UpdateFaq {
            question: Some(String::new()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn update_apply_only_touches_provided_fields() {
        let mut faq = sample();
        let dto = UpdateFaq {
            question_hi: Some("नया".into()),
            ..Default::default()
        };
        dto.apply_to(&mut faq);
        assert_eq!(faq.question_hi.as_deref(), Some("नया"));
        assert_eq!(faq.question, "What is Django?");
        assert_eq!(faq.answer_bn.as_deref(), Some("<p>একটি ওয়েব ফ্রেমওয়ার্ক।</p>"));
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(UpdateFaq::default().is_empty());
        assert!(!UpdateFaq {
            answer: Some("x".into()),
            ..Default::default()
        }
        .is_empty());
    }
}
