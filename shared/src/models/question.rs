//! Question Model

use serde::{Deserialize, Serialize};

/// Survey question kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Rating,
    MultipleChoice,
    Text,
}

/// Survey question attached to a QR code (or the default set)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub required: bool,
}

impl Question {
    /// Rating question without options
    pub fn rating(id: impl Into<String>, text: impl Into<String>, required: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            question_type: QuestionType::Rating,
            options: None,
            required,
        }
    }

    /// Multiple-choice question with a fixed option list
    pub fn multiple_choice(
        id: impl Into<String>,
        text: impl Into<String>,
        options: Vec<String>,
        required: bool,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            question_type: QuestionType::MultipleChoice,
            options: Some(options),
            required,
        }
    }

    /// Free-text question
    pub fn text(id: impl Into<String>, text: impl Into<String>, required: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            question_type: QuestionType::Text,
            options: None,
            required,
        }
    }
}
