//! models — the trainable logistic-regression model.

pub mod logreg;

pub use self::logreg::{Evaluation, LogisticModel, train};
