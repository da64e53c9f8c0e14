use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use strum::{Display, EnumIter, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Four ASCII digits, e.g. `1934`
static BIRTH_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}$").unwrap());

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("Player id must not be blank".into()));
    }
    Ok(())
}

fn validate_sort(value: &str) -> Result<(), ValidationError> {
    SortSpec::from_str(value)
        .map(|_| ())
        .map_err(|e| ValidationError::new("sort").with_message(e.into()))
}

/// A baseball player record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Externally assigned identifier, e.g. `aaronha01`
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
    /// Batting hand (R, L or B)
    pub bats: Option<String>,
    /// Throwing hand (R or L)
    pub throw_stats: Option<String>,
    pub debut: Option<String>,
    pub final_game: Option<String>,
    /// Retrosheet identifier
    pub retro_id: Option<String>,
    /// Baseball-Reference identifier
    pub bbref_id: Option<String>,
}

/// Unpaged listing wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Players {
    pub players: Vec<Player>,
}

/// DTO for creating (or overwriting) a player
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayer {
    #[validate(
        length(min = 3, max = 32, message = "Player id must be between 3 and 32 characters"),
        custom(function = "validate_not_blank")
    )]
    pub player_id: String,
    #[validate(length(max = 255))]
    pub birth_year: Option<String>,
    #[validate(length(max = 255))]
    pub birth_month: Option<String>,
    #[validate(length(max = 255))]
    pub birth_day: Option<String>,
    #[validate(length(max = 255))]
    pub birth_country: Option<String>,
    #[validate(length(max = 255))]
    pub birth_state: Option<String>,
    #[validate(length(max = 255))]
    pub birth_city: Option<String>,
    #[validate(length(max = 255))]
    pub death_year: Option<String>,
    #[validate(length(max = 255))]
    pub death_month: Option<String>,
    #[validate(length(max = 255))]
    pub death_day: Option<String>,
    #[validate(length(max = 255))]
    pub death_country: Option<String>,
    #[validate(length(max = 255))]
    pub death_state: Option<String>,
    #[validate(length(max = 255))]
    pub death_city: Option<String>,
    #[validate(length(max = 255))]
    pub first_name: Option<String>,
    #[validate(length(max = 255))]
    pub last_name: Option<String>,
    #[validate(length(max = 255))]
    pub given_name: Option<String>,
    #[validate(length(max = 255))]
    pub weight: Option<String>,
    #[validate(length(max = 255))]
    pub height: Option<String>,
    #[validate(length(max = 255))]
    pub bats: Option<String>,
    #[validate(length(max = 255))]
    pub throw_stats: Option<String>,
    #[validate(length(max = 255))]
    pub debut: Option<String>,
    #[validate(length(max = 255))]
    pub final_game: Option<String>,
    #[validate(length(max = 255))]
    pub retro_id: Option<String>,
    #[validate(length(max = 255))]
    pub bbref_id: Option<String>,
}

/// DTO for replacing (PUT) or patching (PATCH) a player.
///
/// `playerId` is accepted but ignored: the identity always comes from the path.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayer {
    #[validate(length(max = 32))]
    pub player_id: Option<String>,
    #[validate(length(max = 255))]
    pub birth_year: Option<String>,
    #[validate(length(max = 255))]
    pub birth_month: Option<String>,
    #[validate(length(max = 255))]
    pub birth_day: Option<String>,
    #[validate(length(max = 255))]
    pub birth_country: Option<String>,
    #[validate(length(max = 255))]
    pub birth_state: Option<String>,
    #[validate(length(max = 255))]
    pub birth_city: Option<String>,
    #[validate(length(max = 255))]
    pub death_year: Option<String>,
    #[validate(length(max = 255))]
    pub death_month: Option<String>,
    #[validate(length(max = 255))]
    pub death_day: Option<String>,
    #[validate(length(max = 255))]
    pub death_country: Option<String>,
    #[validate(length(max = 255))]
    pub death_state: Option<String>,
    #[validate(length(max = 255))]
    pub death_city: Option<String>,
    #[validate(length(max = 255))]
    pub first_name: Option<String>,
    #[validate(length(max = 255))]
    pub last_name: Option<String>,
    #[validate(length(max = 255))]
    pub given_name: Option<String>,
    #[validate(length(max = 255))]
    pub weight: Option<String>,
    #[validate(length(max = 255))]
    pub height: Option<String>,
    #[validate(length(max = 255))]
    pub bats: Option<String>,
    #[validate(length(max = 255))]
    pub throw_stats: Option<String>,
    #[validate(length(max = 255))]
    pub debut: Option<String>,
    #[validate(length(max = 255))]
    pub final_game: Option<String>,
    #[validate(length(max = 255))]
    pub retro_id: Option<String>,
    #[validate(length(max = 255))]
    pub bbref_id: Option<String>,
}

impl From<CreatePlayer> for Player {
    fn from(input: CreatePlayer) -> Self {
        Self {
            player_id: input.player_id,
            birth_year: input.birth_year,
            birth_month: input.birth_month,
            birth_day: input.birth_day,
            birth_country: input.birth_country,
            birth_state: input.birth_state,
            birth_city: input.birth_city,
            death_year: input.death_year,
            death_month: input.death_month,
            death_day: input.death_day,
            death_country: input.death_country,
            death_state: input.death_state,
            death_city: input.death_city,
            first_name: input.first_name,
            last_name: input.last_name,
            given_name: input.given_name,
            weight: input.weight,
            height: input.height,
            bats: input.bats,
            throw_stats: input.throw_stats,
            debut: input.debut,
            final_game: input.final_game,
            retro_id: input.retro_id,
            bbref_id: input.bbref_id,
        }
    }
}

impl Player {
    /// A player with only the identifier set
    pub fn new(player_id: impl Into<String>) -> Self {
        Self::replaced(player_id.into(), UpdatePlayer::default())
    }

    /// Build the full replacement stored under `player_id`.
    ///
    /// Every attribute is taken from `replacement`, absent ones become null.
    pub fn replaced(player_id: String, replacement: UpdatePlayer) -> Self {
        Self {
            player_id,
            birth_year: replacement.birth_year,
            birth_month: replacement.birth_month,
            birth_day: replacement.birth_day,
            birth_country: replacement.birth_country,
            birth_state: replacement.birth_state,
            birth_city: replacement.birth_city,
            death_year: replacement.death_year,
            death_month: replacement.death_month,
            death_day: replacement.death_day,
            death_country: replacement.death_country,
            death_state: replacement.death_state,
            death_city: replacement.death_city,
            first_name: replacement.first_name,
            last_name: replacement.last_name,
            given_name: replacement.given_name,
            weight: replacement.weight,
            height: replacement.height,
            bats: replacement.bats,
            throw_stats: replacement.throw_stats,
            debut: replacement.debut,
            final_game: replacement.final_game,
            retro_id: replacement.retro_id,
            bbref_id: replacement.bbref_id,
        }
    }

    /// Merge a partial update: only attributes present in `patch` overwrite.
    /// The identifier never changes.
    pub fn apply_patch(&mut self, patch: UpdatePlayer) {
        fn merge(target: &mut Option<String>, value: Option<String>) {
            if value.is_some() {
                *target = value;
            }
        }

        merge(&mut self.birth_year, patch.birth_year);
        merge(&mut self.birth_month, patch.birth_month);
        merge(&mut self.birth_day, patch.birth_day);
        merge(&mut self.birth_country, patch.birth_country);
        merge(&mut self.birth_state, patch.birth_state);
        merge(&mut self.birth_city, patch.birth_city);
        merge(&mut self.death_year, patch.death_year);
        merge(&mut self.death_month, patch.death_month);
        merge(&mut self.death_day, patch.death_day);
        merge(&mut self.death_country, patch.death_country);
        merge(&mut self.death_state, patch.death_state);
        merge(&mut self.death_city, patch.death_city);
        merge(&mut self.first_name, patch.first_name);
        merge(&mut self.last_name, patch.last_name);
        merge(&mut self.given_name, patch.given_name);
        merge(&mut self.weight, patch.weight);
        merge(&mut self.height, patch.height);
        merge(&mut self.bats, patch.bats);
        merge(&mut self.throw_stats, patch.throw_stats);
        merge(&mut self.debut, patch.debut);
        merge(&mut self.final_game, patch.final_game);
        merge(&mut self.retro_id, patch.retro_id);
        merge(&mut self.bbref_id, patch.bbref_id);
    }

    /// Value of a sortable attribute
    pub fn attribute(&self, field: PlayerSortField) -> Option<&str> {
        let value = match field {
            PlayerSortField::PlayerId => return Some(&self.player_id),
            PlayerSortField::BirthYear => &self.birth_year,
            PlayerSortField::BirthMonth => &self.birth_month,
            PlayerSortField::BirthDay => &self.birth_day,
            PlayerSortField::BirthCountry => &self.birth_country,
            PlayerSortField::BirthState => &self.birth_state,
            PlayerSortField::BirthCity => &self.birth_city,
            PlayerSortField::DeathYear => &self.death_year,
            PlayerSortField::DeathMonth => &self.death_month,
            PlayerSortField::DeathDay => &self.death_day,
            PlayerSortField::DeathCountry => &self.death_country,
            PlayerSortField::DeathState => &self.death_state,
            PlayerSortField::DeathCity => &self.death_city,
            PlayerSortField::FirstName => &self.first_name,
            PlayerSortField::LastName => &self.last_name,
            PlayerSortField::GivenName => &self.given_name,
            PlayerSortField::Weight => &self.weight,
            PlayerSortField::Height => &self.height,
            PlayerSortField::Bats => &self.bats,
            PlayerSortField::ThrowStats => &self.throw_stats,
            PlayerSortField::Debut => &self.debut,
            PlayerSortField::FinalGame => &self.final_game,
            PlayerSortField::RetroId => &self.retro_id,
            PlayerSortField::BbrefId => &self.bbref_id,
        };
        value.as_deref()
    }
}

/// Player attributes accepted in `sort=<field>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum PlayerSortField {
    PlayerId,
    BirthYear,
    BirthMonth,
    BirthDay,
    BirthCountry,
    BirthState,
    BirthCity,
    DeathYear,
    DeathMonth,
    DeathDay,
    DeathCountry,
    DeathState,
    DeathCity,
    FirstName,
    LastName,
    GivenName,
    Weight,
    Height,
    Bats,
    ThrowStats,
    Debut,
    FinalGame,
    RetroId,
    BbrefId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Parsed `sort=<field>[,asc|desc]` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: PlayerSortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: PlayerSortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: PlayerSortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Compare two players on this spec. Missing values sort after present
    /// ones when ascending and before them when descending.
    pub fn compare(&self, a: &Player, b: &Player) -> Ordering {
        let ascending = match (a.attribute(self.field), b.attribute(self.field)) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        match self.direction {
            SortDirection::Asc => ascending,
            SortDirection::Desc => ascending.reverse(),
        }
    }
}

impl FromStr for SortSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);

        let field = parts.next().unwrap_or_default();
        let field = PlayerSortField::from_str(field)
            .map_err(|_| format!("Unknown sort property: {}", field))?;

        let direction = match parts.next() {
            None | Some("") => SortDirection::Asc,
            Some(dir) => SortDirection::from_str(dir)
                .map_err(|_| format!("Unknown sort direction: {}", dir))?,
        };

        if parts.next().is_some() {
            return Err(format!("Invalid sort parameter: {}", s));
        }

        Ok(Self { field, direction })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}

/// Zero-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    /// Ordering; `None` means identifier order
    pub sort: Option<SortSpec>,
}

impl PageRequest {
    pub const DEFAULT_SIZE: u64 = 20;
    pub const MAX_SIZE: u64 = 2000;

    /// Sizes outside `1..=MAX_SIZE` are clamped: zero falls back to the
    /// default, anything larger to the maximum.
    pub fn new(page: u64, size: u64) -> Self {
        let size = match size {
            0 => Self::DEFAULT_SIZE,
            s => s.min(Self::MAX_SIZE),
        };
        Self {
            page,
            size,
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Number of rows to skip
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    /// Zero-based page number echoed from the request
    pub number: u64,
    /// Page size echoed from the request
    pub size: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: u64, request: &PageRequest) -> Self {
        let total_pages = match request.size {
            0 => 0,
            size => total_elements.div_ceil(size),
        };
        Self {
            content,
            total_elements,
            total_pages,
            number: request.page,
            size: request.size,
        }
    }
}

/// Query parameters of `GET /v1/players/search`
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive fragment of the last name; takes precedence over `birthYear`
    #[validate(length(
        min = 1,
        max = 50,
        message = "Last name must be between 1 and 50 characters"
    ))]
    pub last_name: Option<String>,
    /// Exact four-digit birth year
    #[validate(regex(path = *BIRTH_YEAR, message = "Birth year must be a 4-digit number"))]
    pub birth_year: Option<String>,
    /// Zero-based page number (default 0)
    pub page: Option<i64>,
    /// Page size (default 20, at most 2000)
    pub size: Option<i64>,
    /// `<field>[,asc|desc]`, e.g. `lastName,desc`
    #[validate(custom(function = "validate_sort"))]
    pub sort: Option<String>,
}

impl SearchParams {
    /// Page request described by `page`, `size` and `sort`
    pub fn page_request(&self) -> Result<PageRequest, String> {
        let page = self.page.unwrap_or(0).max(0) as u64;
        let size = match self.size {
            Some(size) if size > 0 => size as u64,
            _ => PageRequest::DEFAULT_SIZE,
        };

        let request = PageRequest::new(page, size);
        match self.sort.as_deref() {
            Some(sort) => Ok(request.with_sort(sort.parse()?)),
            None => Ok(request),
        }
    }
}

/// Path parameter of the single-player routes
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct PlayerIdPath {
    /// Player identifier
    #[validate(
        length(min = 3, max = 32, message = "Player id must be between 3 and 32 characters"),
        custom(function = "validate_not_blank")
    )]
    pub id: String,
}
