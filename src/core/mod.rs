mod adapter;
mod metric;
mod normalize;
mod registry;
mod score;

pub use adapter::{
    adapt_predictions, adapt_references, AnswerSet, Article, Dataset, GoldAnswer, Paragraph,
    Prediction, QuestionAnswers, Reference,
};
pub use metric::{Metric, SquadMetric};
pub use normalize::{answer_tokens, normalize_answer};
pub use registry::MetricRegistry;
pub use score::{
    compute_score, exact_match_score, f1_score, metric_max_over_ground_truths,
    score_per_question, QuestionScore, SquadScoreResult,
};
