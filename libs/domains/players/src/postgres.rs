use async_trait::async_trait;
use sea_orm::sea_query::{self, Expr, Func, IntoCondition, OnConflict};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Iterable, Order,
    PaginatorTrait, QueryFilter, QueryOrder, Schema, Select,
};

use crate::{
    entity::{self, Column, Entity},
    error::PlayerResult,
    models::{Page, PageRequest, Player, SortDirection},
    repository::PlayerRepository,
};

/// Create the `players` table from the entity definition if it is missing
pub async fn bootstrap_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(Entity);
    statement.if_not_exists();

    db.execute_raw(backend.build(&statement)).await?;
    tracing::info!("Ensured players table exists");
    Ok(())
}

pub struct PgPlayerRepository {
    db: DatabaseConnection,
}

impl PgPlayerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch_page(
        &self,
        select: Select<Entity>,
        request: &PageRequest,
    ) -> PlayerResult<Page<Player>> {
        let paginator = ordered(select, request).paginate(&self.db, request.size);
        let total = paginator.num_items().await?;

        // Pages past the end are empty; this also keeps the paginator's
        // `page * size` offset from overflowing on huge page numbers.
        if request.offset() >= total {
            return Ok(Page::new(Vec::new(), total, request));
        }
        let models = paginator.fetch_page(request.page).await?;

        Ok(Page::new(
            models.into_iter().map(Into::into).collect(),
            total,
            request,
        ))
    }

    async fn fetch_all(&self, select: Select<Entity>) -> PlayerResult<Vec<Player>> {
        let models = select.order_by_asc(Column::PlayerId).all(&self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}

/// Requested ordering, then identifier order as the tie breaker
fn ordered(select: Select<Entity>, request: &PageRequest) -> Select<Entity> {
    let select = match request.sort {
        Some(sort) => {
            let order = match sort.direction {
                SortDirection::Asc => Order::Asc,
                SortDirection::Desc => Order::Desc,
            };
            select.order_by(Column::from(sort.field), order)
        }
        None => select,
    };
    select.order_by_asc(Column::PlayerId)
}

/// `lower(column) = lower(value)`
fn lower_eq(column: Column, value: &str) -> impl IntoCondition {
    sea_query::ExprTrait::eq(
        Expr::expr(Func::lower(Expr::col(column))),
        value.to_lowercase(),
    )
}

/// `lower(column) LIKE '%fragment%'`
fn lower_contains(column: Column, fragment: &str) -> impl IntoCondition {
    sea_query::ExprTrait::like(
        Expr::expr(Func::lower(Expr::col(column))),
        like_fragment(fragment),
    )
}

/// Escape LIKE wildcards so the fragment matches literally
fn like_fragment(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    escaped.push('%');
    for c in fragment.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl PlayerRepository for PgPlayerRepository {
    async fn find_all(&self) -> PlayerResult<Vec<Player>> {
        self.fetch_all(Entity::find()).await
    }

    async fn find_all_paged(&self, request: &PageRequest) -> PlayerResult<Page<Player>> {
        self.fetch_page(Entity::find(), request).await
    }

    async fn find_by_id(&self, player_id: &str) -> PlayerResult<Option<Player>> {
        let model = Entity::find_by_id(player_id.to_string())
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_last_name_containing(
        &self,
        fragment: &str,
        request: &PageRequest,
    ) -> PlayerResult<Page<Player>> {
        let select = Entity::find().filter(lower_contains(Column::LastName, fragment));
        self.fetch_page(select, request).await
    }

    async fn find_by_birth_year(
        &self,
        year: &str,
        request: &PageRequest,
    ) -> PlayerResult<Page<Player>> {
        let select = Entity::find().filter(Column::BirthYear.eq(year));
        self.fetch_page(select, request).await
    }

    async fn find_by_last_name(&self, last_name: &str) -> PlayerResult<Vec<Player>> {
        self.fetch_all(Entity::find().filter(lower_eq(Column::LastName, last_name)))
            .await
    }

    async fn find_by_first_name(&self, first_name: &str) -> PlayerResult<Vec<Player>> {
        self.fetch_all(Entity::find().filter(lower_eq(Column::FirstName, first_name)))
            .await
    }

    async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> PlayerResult<Option<Player>> {
        let model = Entity::find()
            .filter(lower_eq(Column::FirstName, first_name))
            .filter(lower_eq(Column::LastName, last_name))
            .order_by_asc(Column::PlayerId)
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_birth_country(&self, country: &str) -> PlayerResult<Vec<Player>> {
        self.fetch_all(Entity::find().filter(lower_eq(Column::BirthCountry, country)))
            .await
    }

    async fn find_by_bats(&self, bats: &str) -> PlayerResult<Vec<Player>> {
        self.fetch_all(Entity::find().filter(Column::Bats.eq(bats)))
            .await
    }

    async fn find_by_throw_stats(&self, throw_stats: &str) -> PlayerResult<Vec<Player>> {
        self.fetch_all(Entity::find().filter(Column::ThrowStats.eq(throw_stats)))
            .await
    }

    async fn find_by_retro_id(&self, retro_id: &str) -> PlayerResult<Option<Player>> {
        let model = Entity::find()
            .filter(Column::RetroId.eq(retro_id))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_bbref_id(&self, bbref_id: &str) -> PlayerResult<Option<Player>> {
        let model = Entity::find()
            .filter(Column::BbrefId.eq(bbref_id))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn save(&self, player: Player) -> PlayerResult<Player> {
        let active_model: entity::ActiveModel = player.clone().into();

        Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(Column::PlayerId)
                    .update_columns(Column::iter().filter(|c| !matches!(c, Column::PlayerId)))
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        tracing::info!(player_id = %player.player_id, "Saved player");
        Ok(player)
    }

    async fn delete_by_id(&self, player_id: &str) -> PlayerResult<bool> {
        let result = Entity::delete_by_id(player_id.to_string())
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(player_id = %player_id, "Deleted player");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_id(&self, player_id: &str) -> PlayerResult<bool> {
        let count = Entity::find_by_id(player_id.to_string())
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }
}
