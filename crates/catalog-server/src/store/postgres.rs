//! PostgreSQL catalog store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use super::filter::like_pattern;
use super::{CatalogStore, Page, SpecimenFilter, StoreError, StoreResult};
use crate::models::{
    Expedition, ExpeditionFields, Specimen, SpecimenDetail, SpecimenFields, Taxonomy,
    TaxonomyFields,
};

const EXPEDITION_COLUMNS: &str = "expedition_id, expedition, continent, country, \
     state_province, term, created_at, updated_at";

const TAXONOMY_COLUMNS: &str = "taxonomy_id, kingdom, phylum, highest_biostratigraphic_zone, \
     class_name, identification_description, family, genus, species, created_at, updated_at";

/// Specimen columns with both references flattened in
const SPECIMEN_SELECT: &str = r#"
    SELECT s.specimen_id, s.catalog_number, s.expedition_id, s.taxonomy_id,
           s.created_at, s.updated_at,
           e.expedition AS e_expedition, e.continent AS e_continent, e.country AS e_country,
           e.state_province AS e_state_province, e.term AS e_term,
           e.created_at AS e_created_at, e.updated_at AS e_updated_at,
           t.kingdom AS t_kingdom, t.phylum AS t_phylum,
           t.highest_biostratigraphic_zone AS t_highest_biostratigraphic_zone,
           t.class_name AS t_class_name,
           t.identification_description AS t_identification_description,
           t.family AS t_family, t.genus AS t_genus, t.species AS t_species,
           t.created_at AS t_created_at, t.updated_at AS t_updated_at
    FROM specimens s
    LEFT JOIN expeditions e ON e.expedition_id = s.expedition_id
    LEFT JOIN taxonomies t ON t.taxonomy_id = s.taxonomy_id
"#;

const SPECIMEN_FROM: &str = r#"
    FROM specimens s
    LEFT JOIN expeditions e ON e.expedition_id = s.expedition_id
    LEFT JOIN taxonomies t ON t.taxonomy_id = s.taxonomy_id
"#;

#[derive(Debug, FromRow)]
struct SpecimenRow {
    specimen_id: i64,
    catalog_number: String,
    expedition_id: Option<i64>,
    taxonomy_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    e_expedition: Option<String>,
    e_continent: Option<String>,
    e_country: Option<String>,
    e_state_province: Option<String>,
    e_term: Option<String>,
    e_created_at: Option<DateTime<Utc>>,
    e_updated_at: Option<DateTime<Utc>>,
    t_kingdom: Option<String>,
    t_phylum: Option<String>,
    t_highest_biostratigraphic_zone: Option<String>,
    t_class_name: Option<String>,
    t_identification_description: Option<String>,
    t_family: Option<String>,
    t_genus: Option<String>,
    t_species: Option<String>,
    t_created_at: Option<DateTime<Utc>>,
    t_updated_at: Option<DateTime<Utc>>,
}

impl From<SpecimenRow> for SpecimenDetail {
    fn from(row: SpecimenRow) -> Self {
        // A left join yields NULL columns when the reference is absent
        let expedition = match (
            row.expedition_id,
            row.e_expedition,
            row.e_continent,
            row.e_country,
            row.e_created_at,
            row.e_updated_at,
        ) {
            (Some(id), Some(name), Some(continent), Some(country), Some(created), Some(updated)) => {
                Some(Expedition {
                    expedition_id: id,
                    expedition: name,
                    continent,
                    country,
                    state_province: row.e_state_province,
                    term: row.e_term,
                    created_at: created,
                    updated_at: updated,
                })
            },
            _ => None,
        };

        let taxonomy = match (
            row.taxonomy_id,
            row.t_kingdom,
            row.t_phylum,
            row.t_highest_biostratigraphic_zone,
            row.t_class_name,
            row.t_identification_description,
            row.t_family,
            row.t_genus,
            row.t_species,
        ) {
            (
                Some(id),
                Some(kingdom),
                Some(phylum),
                Some(zone),
                Some(class_name),
                Some(order),
                Some(family),
                Some(genus),
                Some(species),
            ) => match (row.t_created_at, row.t_updated_at) {
                (Some(created), Some(updated)) => Some(Taxonomy {
                    taxonomy_id: id,
                    kingdom,
                    phylum,
                    highest_biostratigraphic_zone: zone,
                    class_name,
                    identification_description: order,
                    family,
                    genus,
                    species,
                    created_at: created,
                    updated_at: updated,
                }),
                _ => None,
            },
            _ => None,
        };

        let specimen = Specimen {
            specimen_id: row.specimen_id,
            catalog_number: row.catalog_number,
            expedition_id: row.expedition_id,
            taxonomy_id: row.taxonomy_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        };

        SpecimenDetail::new(specimen, expedition, taxonomy)
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &SpecimenFilter) {
    builder.push(" WHERE TRUE");
    for (field, needle) in filter.conditions() {
        builder
            .push(" AND ")
            .push(field.column())
            .push(" ILIKE ")
            .push_bind(like_pattern(needle))
            .push(r" ESCAPE '\'");
    }
}

fn map_reference_violation(error: sqlx::Error, fields: &SpecimenFields) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = error {
        if db_err.is_foreign_key_violation() {
            let constraint = db_err.constraint().unwrap_or_default();
            if constraint.contains("taxonomy") {
                return StoreError::MissingReference {
                    entity: "Taxonomy",
                    id: fields.taxonomy_id.unwrap_or_default(),
                };
            }
            return StoreError::MissingReference {
                entity: "Expedition",
                id: fields.expedition_id.unwrap_or_default(),
            };
        }
    }
    StoreError::Database(error)
}

/// Catalog store over a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, fields))]
    async fn create_expedition(&self, fields: &ExpeditionFields) -> StoreResult<Expedition> {
        let sql = format!(
            "INSERT INTO expeditions (expedition, continent, country, state_province, term) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {EXPEDITION_COLUMNS}"
        );
        let expedition = sqlx::query_as::<_, Expedition>(&sql)
            .bind(&fields.expedition)
            .bind(&fields.continent)
            .bind(&fields.country)
            .bind(&fields.state_province)
            .bind(&fields.term)
            .fetch_one(&self.pool)
            .await?;
        Ok(expedition)
    }

    async fn get_expedition(&self, id: i64) -> StoreResult<Option<Expedition>> {
        let sql = format!("SELECT {EXPEDITION_COLUMNS} FROM expeditions WHERE expedition_id = $1");
        Ok(sqlx::query_as::<_, Expedition>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    #[tracing::instrument(skip(self, fields))]
    async fn update_expedition(
        &self,
        id: i64,
        fields: &ExpeditionFields,
    ) -> StoreResult<Option<Expedition>> {
        let sql = format!(
            "UPDATE expeditions SET expedition = $2, continent = $3, country = $4, \
             state_province = $5, term = $6, updated_at = NOW() \
             WHERE expedition_id = $1 RETURNING {EXPEDITION_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Expedition>(&sql)
            .bind(id)
            .bind(&fields.expedition)
            .bind(&fields.continent)
            .bind(&fields.country)
            .bind(&fields.state_province)
            .bind(&fields.term)
            .fetch_optional(&self.pool)
            .await?)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_expedition(&self, id: i64) -> StoreResult<Option<u64>> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM specimens WHERE expedition_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM expeditions WHERE expedition_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(removed))
    }

    async fn list_expeditions(&self, limit: i64, offset: i64) -> StoreResult<Page<Expedition>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM expeditions")
            .fetch_one(&self.pool)
            .await?;
        let sql = format!(
            "SELECT {EXPEDITION_COLUMNS} FROM expeditions \
             ORDER BY expedition_id LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, Expedition>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(Page { items, total })
    }

    #[tracing::instrument(skip(self, fields))]
    async fn create_taxonomy(&self, fields: &TaxonomyFields) -> StoreResult<Taxonomy> {
        let sql = format!(
            "INSERT INTO taxonomies (kingdom, phylum, highest_biostratigraphic_zone, class_name, \
             identification_description, family, genus, species) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {TAXONOMY_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Taxonomy>(&sql)
            .bind(&fields.kingdom)
            .bind(&fields.phylum)
            .bind(&fields.highest_biostratigraphic_zone)
            .bind(&fields.class_name)
            .bind(&fields.identification_description)
            .bind(&fields.family)
            .bind(&fields.genus)
            .bind(&fields.species)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn get_taxonomy(&self, id: i64) -> StoreResult<Option<Taxonomy>> {
        let sql = format!("SELECT {TAXONOMY_COLUMNS} FROM taxonomies WHERE taxonomy_id = $1");
        Ok(sqlx::query_as::<_, Taxonomy>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    #[tracing::instrument(skip(self, fields))]
    async fn update_taxonomy(
        &self,
        id: i64,
        fields: &TaxonomyFields,
    ) -> StoreResult<Option<Taxonomy>> {
        let sql = format!(
            "UPDATE taxonomies SET kingdom = $2, phylum = $3, highest_biostratigraphic_zone = $4, \
             class_name = $5, identification_description = $6, family = $7, genus = $8, \
             species = $9, updated_at = NOW() \
             WHERE taxonomy_id = $1 RETURNING {TAXONOMY_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Taxonomy>(&sql)
            .bind(id)
            .bind(&fields.kingdom)
            .bind(&fields.phylum)
            .bind(&fields.highest_biostratigraphic_zone)
            .bind(&fields.class_name)
            .bind(&fields.identification_description)
            .bind(&fields.family)
            .bind(&fields.genus)
            .bind(&fields.species)
            .fetch_optional(&self.pool)
            .await?)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_taxonomy(&self, id: i64) -> StoreResult<Option<u64>> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM specimens WHERE taxonomy_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM taxonomies WHERE taxonomy_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(removed))
    }

    async fn list_taxonomies(&self, limit: i64, offset: i64) -> StoreResult<Page<Taxonomy>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM taxonomies")
            .fetch_one(&self.pool)
            .await?;
        let sql = format!(
            "SELECT {TAXONOMY_COLUMNS} FROM taxonomies ORDER BY taxonomy_id LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, Taxonomy>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(Page { items, total })
    }

    #[tracing::instrument(skip(self, fields))]
    async fn create_taxonomy_for_specimen(
        &self,
        specimen_id: i64,
        fields: &TaxonomyFields,
    ) -> StoreResult<Option<Taxonomy>> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> =
            sqlx::query_scalar("SELECT specimen_id FROM specimens WHERE specimen_id = $1 FOR UPDATE")
                .bind(specimen_id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let sql = format!(
            "INSERT INTO taxonomies (kingdom, phylum, highest_biostratigraphic_zone, class_name, \
             identification_description, family, genus, species) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {TAXONOMY_COLUMNS}"
        );
        let taxonomy = sqlx::query_as::<_, Taxonomy>(&sql)
            .bind(&fields.kingdom)
            .bind(&fields.phylum)
            .bind(&fields.highest_biostratigraphic_zone)
            .bind(&fields.class_name)
            .bind(&fields.identification_description)
            .bind(&fields.family)
            .bind(&fields.genus)
            .bind(&fields.species)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE specimens SET taxonomy_id = $1, updated_at = NOW() WHERE specimen_id = $2",
        )
        .bind(taxonomy.taxonomy_id)
        .bind(specimen_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(taxonomy))
    }

    #[tracing::instrument(skip(self, fields), fields(catalog_number = %fields.catalog_number))]
    async fn create_specimen(&self, fields: &SpecimenFields) -> StoreResult<SpecimenDetail> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO specimens (catalog_number, expedition_id, taxonomy_id) \
             VALUES ($1, $2, $3) RETURNING specimen_id",
        )
        .bind(&fields.catalog_number)
        .bind(fields.expedition_id)
        .bind(fields.taxonomy_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_reference_violation(e, fields))?;

        self.get_specimen(id)
            .await?
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))
    }

    async fn get_specimen(&self, id: i64) -> StoreResult<Option<SpecimenDetail>> {
        let sql = format!("{SPECIMEN_SELECT} WHERE s.specimen_id = $1");
        let row = sqlx::query_as::<_, SpecimenRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(SpecimenDetail::from))
    }

    #[tracing::instrument(skip(self, fields))]
    async fn update_specimen(
        &self,
        id: i64,
        fields: &SpecimenFields,
    ) -> StoreResult<Option<SpecimenDetail>> {
        let updated = sqlx::query(
            "UPDATE specimens SET catalog_number = $2, expedition_id = $3, taxonomy_id = $4, \
             updated_at = NOW() WHERE specimen_id = $1",
        )
        .bind(id)
        .bind(&fields.catalog_number)
        .bind(fields.expedition_id)
        .bind(fields.taxonomy_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_reference_violation(e, fields))?
        .rows_affected();

        if updated == 0 {
            return Ok(None);
        }
        self.get_specimen(id).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_specimen(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM specimens WHERE specimen_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self, filter), fields(conditions = filter.conditions().len()))]
    async fn list_specimens(
        &self,
        filter: &SpecimenFilter,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Page<SpecimenDetail>> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*)");
        count.push(SPECIMEN_FROM);
        push_filter(&mut count, filter);
        let total: i64 = count.build_query_scalar().fetch_one(&self.pool).await?;

        let mut select = QueryBuilder::<Postgres>::new(SPECIMEN_SELECT);
        push_filter(&mut select, filter);
        select
            .push(" ORDER BY s.specimen_id DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows: Vec<SpecimenRow> = select.build_query_as().fetch_all(&self.pool).await?;

        Ok(Page {
            items: rows.into_iter().map(SpecimenDetail::from).collect(),
            total,
        })
    }

    async fn catalog_number_in_use(
        &self,
        catalog_number: &str,
        excluding: Option<i64>,
    ) -> StoreResult<bool> {
        Ok(sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM specimens WHERE catalog_number = $1 \
             AND ($2::BIGINT IS NULL OR specimen_id <> $2))",
        )
        .bind(catalog_number)
        .bind(excluding)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn first_specimen_for_expedition(&self, expedition_id: i64) -> StoreResult<Option<i64>> {
        Ok(sqlx::query_scalar(
            "SELECT MIN(specimen_id) FROM specimens WHERE expedition_id = $1",
        )
        .bind(expedition_id)
        .fetch_one(&self.pool)
        .await?)
    }
}
