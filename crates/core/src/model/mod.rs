mod answer;
mod catalog;
mod ids;
mod question;

pub use answer::{Answer, AnswerSet, Response};
pub use catalog::{Catalog, CatalogError};
pub use ids::{AssessmentId, ParseIdError, QuestionId};
pub use question::{
    DEFAULT_COMPLIANT_OPTION, DEFAULT_OPTIONS, ParseRiskLevelError, Question, QuestionDraft,
    RiskLevel,
};
