pub mod action;
pub mod assertion;
pub mod data;
pub mod page;
pub mod result;
pub mod step;
pub mod test;
pub mod value;

pub use action::ActionValidator;
pub use assertion::{AssertionContentValidator, AssertionValidator};
pub use data::{DataSetValidator, DataValidator};
pub use page::PageValidator;
pub use result::{ContextValue, InvalidResult, Reason, ResultType, Subject, ValidationResult};
pub use step::StepValidator;
pub use test::{ConfigurationValidator, TestValidator};
pub use value::ValueValidator;
