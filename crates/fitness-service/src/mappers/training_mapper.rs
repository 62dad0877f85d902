//! Training mapper.

use super::UserMapper;
use crate::dto::{TrainingDto, TrainingOwner};
use fitness_core::{Mapper, UserId};
use fitness_domain::{Training, User};

/// Maps between [`Training`] and [`TrainingDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TrainingMapper;

impl TrainingMapper {
    /// DTO naming the owner by id.
    #[must_use]
    pub fn to_dto(training: &Training) -> TrainingDto {
        Self::with_owner(training, TrainingOwner::UserId(training.user_id))
    }

    /// DTO embedding the owning user.
    #[must_use]
    pub fn to_dto_with_user(training: &Training, user: &User) -> TrainingDto {
        Self::with_owner(training, TrainingOwner::User(UserMapper::to_dto(user)))
    }

    /// [`to_dto`](Self::to_dto) lifted over absence.
    #[must_use]
    pub fn to_dto_opt(training: Option<&Training>) -> Option<TrainingDto> {
        training.map(Self::to_dto)
    }

    /// Builds an entity owned by the already-resolved `user_id`.
    /// The owner named inside the DTO is not consulted.
    #[must_use]
    pub fn to_entity(dto: TrainingDto, user_id: UserId) -> Training {
        Training {
            id: dto.id,
            user_id,
            start_time: dto.start_time,
            end_time: dto.end_time,
            activity_type: dto.activity_type,
            distance: dto.distance,
            average_speed: dto.average_speed,
        }
    }

    /// Overwrites every mutable field of `training` with the DTO's value.
    /// Neither the id nor the owning user is touched.
    pub fn merge_into(dto: TrainingDto, training: &mut Training) {
        training.start_time = dto.start_time;
        training.end_time = dto.end_time;
        training.activity_type = dto.activity_type;
        training.distance = dto.distance;
        training.average_speed = dto.average_speed;
    }

    fn with_owner(training: &Training, owner: TrainingOwner) -> TrainingDto {
        TrainingDto {
            id: training.id,
            owner,
            start_time: training.start_time,
            end_time: training.end_time,
            activity_type: training.activity_type,
            distance: training.distance,
            average_speed: training.average_speed,
        }
    }
}

impl Mapper<Training, TrainingDto> for TrainingMapper {
    fn map(from: &Training) -> TrainingDto {
        Self::to_dto(from)
    }
}
