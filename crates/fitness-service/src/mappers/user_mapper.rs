//! User mapper.

use crate::dto::UserDto;
use fitness_core::{BiMapper, Mapper};
use fitness_domain::User;

/// Maps between [`User`] and [`UserDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UserMapper;

impl UserMapper {
    /// Field-for-field copy of the entity.
    #[must_use]
    pub fn to_dto(user: &User) -> UserDto {
        UserDto {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            birthdate: user.birthdate,
            email: user.email.clone(),
        }
    }

    /// [`to_dto`](Self::to_dto) lifted over absence.
    #[must_use]
    pub fn to_dto_opt(user: Option<&User>) -> Option<UserDto> {
        user.map(Self::to_dto)
    }

    /// Builds an entity from the DTO. An absent id yields an unsaved user.
    #[must_use]
    pub fn to_entity(dto: UserDto) -> User {
        User {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            birthdate: dto.birthdate,
            email: dto.email,
        }
    }

    /// Overwrites every mutable field of `user` with the DTO's value.
    /// The id is never touched.
    pub fn merge_into(dto: UserDto, user: &mut User) {
        user.first_name = dto.first_name;
        user.last_name = dto.last_name;
        user.birthdate = dto.birthdate;
        user.email = dto.email;
    }
}

impl Mapper<User, UserDto> for UserMapper {
    fn map(from: &User) -> UserDto {
        Self::to_dto(from)
    }
}

impl BiMapper<User, UserDto> for UserMapper {
    fn map_back(from: UserDto) -> User {
        Self::to_entity(from)
    }
}
