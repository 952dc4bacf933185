use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("input vector must have {expected} elements, found {found}")]
    Length { expected: usize, found: usize },
}
