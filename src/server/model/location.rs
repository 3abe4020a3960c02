//! Location domain models and parameters.

use entity::location::InterestLevel;

use crate::model::location::{InterestLevelDto, LocationDto, UpsertLocationDto};

impl From<InterestLevelDto> for InterestLevel {
    fn from(dto: InterestLevelDto) -> Self {
        match dto {
            InterestLevelDto::Low => InterestLevel::Low,
            InterestLevelDto::Medium => InterestLevel::Medium,
            InterestLevelDto::High => InterestLevel::High,
        }
    }
}

impl From<InterestLevel> for InterestLevelDto {
    fn from(value: InterestLevel) -> Self {
        match value {
            InterestLevel::Low => InterestLevelDto::Low,
            InterestLevel::Medium => InterestLevelDto::Medium,
            InterestLevel::High => InterestLevelDto::High,
        }
    }
}

/// A named place assets travel between.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Metres.
    pub radius: f64,
    pub interest_level: InterestLevel,
}

impl Location {
    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            latitude: entity.latitude,
            longitude: entity.longitude,
            radius: entity.radius,
            interest_level: entity.interest_level,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            id: self.id,
            name: self.name,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
            radius: self.radius,
            interest_level: self.interest_level.into(),
        }
    }
}

/// Fields shared by location create and update.
#[derive(Debug, Clone)]
pub struct LocationParams {
    pub name: String,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    pub interest_level: InterestLevel,
}

impl LocationParams {
    pub fn from_dto(dto: UpsertLocationDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
            latitude: dto.latitude,
            longitude: dto.longitude,
            radius: dto.radius,
            interest_level: dto.interest_level.into(),
        }
    }
}
