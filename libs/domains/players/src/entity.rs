use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Player, PlayerSortField};

/// Sea-ORM Entity for the players table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub player_id: String,
    pub birth_year: Option<String>,
    pub birth_month: Option<String>,
    pub birth_day: Option<String>,
    pub birth_country: Option<String>,
    pub birth_state: Option<String>,
    pub birth_city: Option<String>,
    pub death_year: Option<String>,
    pub death_month: Option<String>,
    pub death_day: Option<String>,
    pub death_country: Option<String>,
    pub death_state: Option<String>,
    pub death_city: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub given_name: Option<String>,
    pub weight: Option<String>,
    pub height: Option<String>,
    pub bats: Option<String>,
    pub throw_stats: Option<String>,
    pub debut: Option<String>,
    pub final_game: Option<String>,
    pub retro_id: Option<String>,
    pub bbref_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Player {
    fn from(model: Model) -> Self {
        Self {
            player_id: model.player_id,
            birth_year: model.birth_year,
            birth_month: model.birth_month,
            birth_day: model.birth_day,
            birth_country: model.birth_country,
            birth_state: model.birth_state,
            birth_city: model.birth_city,
            death_year: model.death_year,
            death_month: model.death_month,
            death_day: model.death_day,
            death_country: model.death_country,
            death_state: model.death_state,
            death_city: model.death_city,
            first_name: model.first_name,
            last_name: model.last_name,
            given_name: model.given_name,
            weight: model.weight,
            height: model.height,
            bats: model.bats,
            throw_stats: model.throw_stats,
            debut: model.debut,
            final_game: model.final_game,
            retro_id: model.retro_id,
            bbref_id: model.bbref_id,
        }
    }
}

impl From<Player> for ActiveModel {
    fn from(player: Player) -> Self {
        ActiveModel {
            player_id: Set(player.player_id),
            birth_year: Set(player.birth_year),
            birth_month: Set(player.birth_month),
            birth_day: Set(player.birth_day),
            birth_country: Set(player.birth_country),
            birth_state: Set(player.birth_state),
            birth_city: Set(player.birth_city),
            death_year: Set(player.death_year),
            death_month: Set(player.death_month),
            death_day: Set(player.death_day),
            death_country: Set(player.death_country),
            death_state: Set(player.death_state),
            death_city: Set(player.death_city),
            first_name: Set(player.first_name),
            last_name: Set(player.last_name),
            given_name: Set(player.given_name),
            weight: Set(player.weight),
            height: Set(player.height),
            bats: Set(player.bats),
            throw_stats: Set(player.throw_stats),
            debut: Set(player.debut),
            final_game: Set(player.final_game),
            retro_id: Set(player.retro_id),
            bbref_id: Set(player.bbref_id),
        }
    }
}

impl From<PlayerSortField> for Column {
    fn from(field: PlayerSortField) -> Self {
        match field {
            PlayerSortField::PlayerId => Column::PlayerId,
            PlayerSortField::BirthYear => Column::BirthYear,
            PlayerSortField::BirthMonth => Column::BirthMonth,
            PlayerSortField::BirthDay => Column::BirthDay,
            PlayerSortField::BirthCountry => Column::BirthCountry,
            PlayerSortField::BirthState => Column::BirthState,
            PlayerSortField::BirthCity => Column::BirthCity,
            PlayerSortField::DeathYear => Column::DeathYear,
            PlayerSortField::DeathMonth => Column::DeathMonth,
            PlayerSortField::DeathDay => Column::DeathDay,
            PlayerSortField::DeathCountry => Column::DeathCountry,
            PlayerSortField::DeathState => Column::DeathState,
            PlayerSortField::DeathCity => Column::DeathCity,
            PlayerSortField::FirstName => Column::FirstName,
            PlayerSortField::LastName => Column::LastName,
            PlayerSortField::GivenName => Column::GivenName,
            PlayerSortField::Weight => Column::Weight,
            PlayerSortField::Height => Column::Height,
            PlayerSortField::Bats => Column::Bats,
            PlayerSortField::ThrowStats => Column::ThrowStats,
            PlayerSortField::Debut => Column::Debut,
            PlayerSortField::FinalGame => Column::FinalGame,
            PlayerSortField::RetroId => Column::RetroId,
            PlayerSortField::BbrefId => Column::BbrefId,
        }
    }
}
