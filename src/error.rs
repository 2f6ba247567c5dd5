/*
 * Error Module
 *
 * Errors raised while parsing or validating galaxy parameters.
 * Generation itself is total and never fails.
 */

use thiserror::Error;

pub type GalaxyResult<T> = Result<T, GalaxyError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GalaxyError {
    #[error("invalid hex color: {0:?}")]
    InvalidColor(String),

    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfDomain {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid value for {name}: {value:?}")]
    InvalidConfig { name: &'static str, value: String },
}
