pub mod action;
pub mod assertion;
pub mod data;
pub mod page;
pub mod step;

pub use action::{Action, ActionKind};
pub use assertion::Assertion;
pub use data::{DataParameter, DataSet, DataSetCollection};
pub use page::Page;
pub use step::Step;
pub use test::{Configuration, Test};

/// An executable line inside a step.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Action(Action),
    Assertion(Assertion),
}

impl Statement {
    pub fn source(&self) -> &str {
        match self {
            Statement::Action(action) => &action.source,
            Statement::Assertion(assertion) => &assertion.source,
        }
    }
}

impl From<Action> for Statement {
    fn from(action: Action) -> Self {
        Statement::Action(action)
    }
}

impl From<Assertion> for Statement {
    fn from(assertion: Assertion) -> Self {
        Statement::Assertion(assertion)
    }
}
