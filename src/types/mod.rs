pub mod evaluation;

pub use evaluation::{EvaluationFailure, EvaluationResult};
