//! Parsing of textual path and query values.
//!
//! Every failure becomes a `Validation` error so the client gets a 400 in
//! the usual response envelope.

use crate::responses::AppError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use fitness_core::{FitnessError, TrainingId, UserId};
use fitness_domain::ActivityType;
use serde::Deserialize;

/// `?email=` query.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    #[serde(default)]
    pub email: String,
}

/// `?age=` query.
#[derive(Debug, Deserialize)]
pub struct AgeQuery {
    #[serde(default)]
    pub age: String,
}

/// `?activity_type=` query.
#[derive(Debug, Deserialize)]
pub struct ActivityTypeQuery {
    #[serde(default)]
    pub activity_type: String,
}

fn invalid(what: &str, raw: &str) -> AppError {
    AppError::Service(FitnessError::Validation(format!("Invalid {}: {}", what, raw)))
}

/// Parses a user id path segment.
pub fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    raw.parse().map_err(|_| invalid("user ID", raw))
}

/// Parses a training id path segment.
pub fn parse_training_id(raw: &str) -> Result<TrainingId, AppError> {
    raw.parse().map_err(|_| invalid("training ID", raw))
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    raw.trim().parse().map_err(|_| invalid("date", raw))
}

/// Parses an ISO date and returns midnight UTC of that day.
pub fn parse_day_start(raw: &str) -> Result<DateTime<Utc>, AppError> {
    Ok(parse_date(raw)?.and_time(NaiveTime::MIN).and_utc())
}

/// Parses a non-negative whole number of years.
pub fn parse_age(raw: &str) -> Result<u32, AppError> {
    raw.trim().parse().map_err(|_| invalid("age", raw))
}

/// Parses an activity type name, ignoring case.
pub fn parse_activity_type(raw: &str) -> Result<ActivityType, AppError> {
    raw.parse()
        .map_err(|e: fitness_domain::UnknownActivityType| AppError::Service(FitnessError::Validation(e.to_string())))
}
