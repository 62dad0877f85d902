//! User DTO.

use chrono::NaiveDate;
use fitness_core::rules::not_blank;
use fitness_core::UserId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// External representation of a user.
///
/// `id` is absent for a user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,

    #[validate(custom(function = "not_blank", message = "First name must not be blank"))]
    pub first_name: String,

    #[validate(custom(function = "not_blank", message = "Last name must not be blank"))]
    pub last_name: String,

    pub birthdate: NaiveDate,

    pub email: String,
}
