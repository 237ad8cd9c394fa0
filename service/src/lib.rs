use std::sync::Arc;

use thiserror::Error;
use time::Date;
use uuid::Uuid;

pub mod clock;
pub mod config;
pub mod cut_off;
pub mod employee;
pub mod incentive;
pub mod overtime;
pub mod report;
pub mod uuid_service;

pub use incentive::calculate_incentive;
pub use lembur_utils::parse_hours;

#[derive(Debug, PartialEq, Eq)]
pub enum ValidationFailureItem {
    ModificationNotAllowed(Arc<str>),
    InvalidValue(Arc<str>),
    IdDoesNotExist(Arc<str>, Arc<str>),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Database query error: {0}")]
    DatabaseQueryError(#[from] dao::DaoError),

    #[error("Entity {0} not found")]
    EntityNotFound(Uuid),

    #[error("Employee {0} not found")]
    EmployeeNotFound(Arc<str>),

    #[error("Employee {0} already exists")]
    EmployeeAlreadyExists(Arc<str>),

    #[error("Entity {0} conflicts, expected version {1} but got {2}")]
    EntityConflicts(Uuid, Uuid, Uuid),

    #[error("Employee {0} conflicts, expected version {1} but got {2}")]
    EmployeeConflicts(Arc<str>, Uuid, Uuid),

    #[error("Validation error: {0:?}")]
    ValidationError(Arc<[ValidationFailureItem]>),

    #[error("ID cannot be set on create")]
    IdSetOnCreate,

    #[error("Version cannot be set on create")]
    VersionSetOnCreate,

    #[error("Start date {0} must be before end date {1}")]
    DateOrderWrong(Date, Date),

    #[error("Internal error")]
    InternalError,
}
