//! In-process catalog store

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, trace};

use super::{CatalogStore, Page, SpecimenFilter, StoreError, StoreResult};
use crate::models::{
    Expedition, ExpeditionFields, Specimen, SpecimenDetail, SpecimenFields, Taxonomy,
    TaxonomyFields,
};

#[derive(Debug, Default)]
struct Tables {
    expeditions: BTreeMap<i64, Expedition>,
    taxonomies: BTreeMap<i64, Taxonomy>,
    specimens: BTreeMap<i64, Specimen>,
    last_expedition_id: i64,
    last_taxonomy_id: i64,
    last_specimen_id: i64,
}

impl Tables {
    fn resolve(&self, specimen: &Specimen) -> SpecimenDetail {
        SpecimenDetail::new(
            specimen.clone(),
            specimen
                .expedition_id
                .and_then(|id| self.expeditions.get(&id).cloned()),
            specimen
                .taxonomy_id
                .and_then(|id| self.taxonomies.get(&id).cloned()),
        )
    }

    fn check_references(&self, fields: &SpecimenFields) -> StoreResult<()> {
        if let Some(id) = fields.expedition_id {
            if !self.expeditions.contains_key(&id) {
                return Err(StoreError::MissingReference { entity: "Expedition", id });
            }
        }
        if let Some(id) = fields.taxonomy_id {
            if !self.taxonomies.contains_key(&id) {
                return Err(StoreError::MissingReference { entity: "Taxonomy", id });
            }
        }
        Ok(())
    }

    fn insert_taxonomy(&mut self, fields: &TaxonomyFields) -> Taxonomy {
        self.last_taxonomy_id += 1;
        let now = Utc::now();
        let taxonomy = taxonomy_from(self.last_taxonomy_id, fields, now, now);
        self.taxonomies.insert(taxonomy.taxonomy_id, taxonomy.clone());
        taxonomy
    }

    fn remove_specimens_where(&mut self, predicate: impl Fn(&Specimen) -> bool) -> u64 {
        let before = self.specimens.len();
        self.specimens.retain(|_, s| !predicate(s));
        (before - self.specimens.len()) as u64
    }
}

fn taxonomy_from(
    id: i64,
    fields: &TaxonomyFields,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
) -> Taxonomy {
    Taxonomy {
        taxonomy_id: id,
        kingdom: fields.kingdom.clone(),
        phylum: fields.phylum.clone(),
        highest_biostratigraphic_zone: fields.highest_biostratigraphic_zone.clone(),
        class_name: fields.class_name.clone(),
        identification_description: fields.identification_description.clone(),
        family: fields.family.clone(),
        genus: fields.genus.clone(),
        species: fields.species.clone(),
        created_at,
        updated_at,
    }
}

fn expedition_from(
    id: i64,
    fields: &ExpeditionFields,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
) -> Expedition {
    Expedition {
        expedition_id: id,
        expedition: fields.expedition.clone(),
        continent: fields.continent.clone(),
        country: fields.country.clone(),
        state_province: fields.state_province.clone(),
        term: fields.term.clone(),
        created_at,
        updated_at,
    }
}

fn page_of<T>(rows: impl Iterator<Item = T>, total: usize, limit: i64, offset: i64) -> Page<T> {
    let items = rows
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .collect();
    Page {
        items,
        total: total as i64,
    }
}

/// Catalog store backed by in-process maps
///
/// Identifiers are assigned from per-table counters and never reused, the
/// same way a sequence behaves.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    tables: RwLock<Tables>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_expedition(&self, fields: &ExpeditionFields) -> StoreResult<Expedition> {
        let mut tables = self.tables.write().await;
        tables.last_expedition_id += 1;
        let now = Utc::now();
        let expedition = expedition_from(tables.last_expedition_id, fields, now, now);
        tables
            .expeditions
            .insert(expedition.expedition_id, expedition.clone());
        trace!(expedition_id = expedition.expedition_id, "Inserted expedition");
        Ok(expedition)
    }

    async fn get_expedition(&self, id: i64) -> StoreResult<Option<Expedition>> {
        Ok(self.tables.read().await.expeditions.get(&id).cloned())
    }

    async fn update_expedition(
        &self,
        id: i64,
        fields: &ExpeditionFields,
    ) -> StoreResult<Option<Expedition>> {
        let mut tables = self.tables.write().await;
        let Some(existing) = tables.expeditions.get_mut(&id) else {
            return Ok(None);
        };
        *existing = expedition_from(id, fields, existing.created_at, Utc::now());
        Ok(Some(existing.clone()))
    }

    async fn delete_expedition(&self, id: i64) -> StoreResult<Option<u64>> {
        let mut tables = self.tables.write().await;
        if tables.expeditions.remove(&id).is_none() {
            return Ok(None);
        }
        let removed = tables.remove_specimens_where(|s| s.expedition_id == Some(id));
        debug!(expedition_id = id, removed_specimens = removed, "Deleted expedition");
        Ok(Some(removed))
    }

    async fn list_expeditions(&self, limit: i64, offset: i64) -> StoreResult<Page<Expedition>> {
        let tables = self.tables.read().await;
        Ok(page_of(
            tables.expeditions.values().cloned(),
            tables.expeditions.len(),
            limit,
            offset,
        ))
    }

    async fn create_taxonomy(&self, fields: &TaxonomyFields) -> StoreResult<Taxonomy> {
        let mut tables = self.tables.write().await;
        let taxonomy = tables.insert_taxonomy(fields);
        trace!(taxonomy_id = taxonomy.taxonomy_id, "Inserted taxonomy");
        Ok(taxonomy)
    }

    async fn get_taxonomy(&self, id: i64) -> StoreResult<Option<Taxonomy>> {
        Ok(self.tables.read().await.taxonomies.get(&id).cloned())
    }

    async fn update_taxonomy(
        &self,
        id: i64,
        fields: &TaxonomyFields,
    ) -> StoreResult<Option<Taxonomy>> {
        let mut tables = self.tables.write().await;
        let Some(existing) = tables.taxonomies.get_mut(&id) else {
            return Ok(None);
        };
        *existing = taxonomy_from(id, fields, existing.created_at, Utc::now());
        Ok(Some(existing.clone()))
    }

    async fn delete_taxonomy(&self, id: i64) -> StoreResult<Option<u64>> {
        let mut tables = self.tables.write().await;
        if tables.taxonomies.remove(&id).is_none() {
            return Ok(None);
        }
        let removed = tables.remove_specimens_where(|s| s.taxonomy_id == Some(id));
        debug!(taxonomy_id = id, removed_specimens = removed, "Deleted taxonomy");
        Ok(Some(removed))
    }

    async fn list_taxonomies(&self, limit: i64, offset: i64) -> StoreResult<Page<Taxonomy>> {
        let tables = self.tables.read().await;
        Ok(page_of(
            tables.taxonomies.values().cloned(),
            tables.taxonomies.len(),
            limit,
            offset,
        ))
    }

    async fn create_taxonomy_for_specimen(
        &self,
        specimen_id: i64,
        fields: &TaxonomyFields,
    ) -> StoreResult<Option<Taxonomy>> {
        let mut tables = self.tables.write().await;
        if !tables.specimens.contains_key(&specimen_id) {
            return Ok(None);
        }
        let taxonomy = tables.insert_taxonomy(fields);
        if let Some(specimen) = tables.specimens.get_mut(&specimen_id) {
            specimen.taxonomy_id = Some(taxonomy.taxonomy_id);
            specimen.updated_at = taxonomy.updated_at;
        }
        Ok(Some(taxonomy))
    }

    async fn create_specimen(&self, fields: &SpecimenFields) -> StoreResult<SpecimenDetail> {
        let mut tables = self.tables.write().await;
        tables.check_references(fields)?;
        tables.last_specimen_id += 1;
        let now = Utc::now();
        let specimen = Specimen {
            specimen_id: tables.last_specimen_id,
            catalog_number: fields.catalog_number.clone(),
            expedition_id: fields.expedition_id,
            taxonomy_id: fields.taxonomy_id,
            created_at: now,
            updated_at: now,
        };
        tables.specimens.insert(specimen.specimen_id, specimen.clone());
        trace!(specimen_id = specimen.specimen_id, "Inserted specimen");
        Ok(tables.resolve(&specimen))
    }

    async fn get_specimen(&self, id: i64) -> StoreResult<Option<SpecimenDetail>> {
        let tables = self.tables.read().await;
        Ok(tables.specimens.get(&id).map(|s| tables.resolve(s)))
    }

    async fn update_specimen(
        &self,
        id: i64,
        fields: &SpecimenFields,
    ) -> StoreResult<Option<SpecimenDetail>> {
        let mut tables = self.tables.write().await;
        if !tables.specimens.contains_key(&id) {
            return Ok(None);
        }
        tables.check_references(fields)?;
        let Some(specimen) = tables.specimens.get_mut(&id) else {
            return Ok(None);
        };
        specimen.catalog_number = fields.catalog_number.clone();
        specimen.expedition_id = fields.expedition_id;
        specimen.taxonomy_id = fields.taxonomy_id;
        specimen.updated_at = Utc::now();
        let specimen = specimen.clone();
        Ok(Some(tables.resolve(&specimen)))
    }

    async fn delete_specimen(&self, id: i64) -> StoreResult<bool> {
        Ok(self.tables.write().await.specimens.remove(&id).is_some())
    }

    async fn list_specimens(
        &self,
        filter: &SpecimenFilter,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Page<SpecimenDetail>> {
        let tables = self.tables.read().await;
        let matching: Vec<SpecimenDetail> = tables
            .specimens
            .values()
            .rev()
            .map(|s| tables.resolve(s))
            .filter(|detail| filter.matches(detail))
            .collect();
        let total = matching.len();
        Ok(page_of(matching.into_iter(), total, limit, offset))
    }

    async fn catalog_number_in_use(
        &self,
        catalog_number: &str,
        excluding: Option<i64>,
    ) -> StoreResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .specimens
            .values()
            .any(|s| s.catalog_number == catalog_number && Some(s.specimen_id) != excluding))
    }

    async fn first_specimen_for_expedition(&self, expedition_id: i64) -> StoreResult<Option<i64>> {
        let tables = self.tables.read().await;
        Ok(tables
            .specimens
            .values()
            .find(|s| s.expedition_id == Some(expedition_id))
            .map(|s| s.specimen_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FilterField;

    fn expedition_fields(continent: &str) -> ExpeditionFields {
        ExpeditionFields {
            expedition: "Test Expedition".to_string(),
            continent: continent.to_string(),
            country: "Kenya".to_string(),
            state_province: None,
            term: None,
        }
    }

    fn taxonomy_fields() -> TaxonomyFields {
        TaxonomyFields {
            kingdom: "Animalia".to_string(),
            phylum: "Chordata".to_string(),
            highest_biostratigraphic_zone: "Vertebrata".to_string(),
            class_name: "Mammalia".to_string(),
            identification_description: "Primates".to_string(),
            family: "Hominidae".to_string(),
            genus: "Homo".to_string(),
            species: "erectus".to_string(),
        }
    }

    fn specimen_fields(catalog_number: &str, expedition_id: i64) -> SpecimenFields {
        SpecimenFields {
            catalog_number: catalog_number.to_string(),
            expedition_id: Some(expedition_id),
            taxonomy_id: None,
        }
    }

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially() {
        let store = MemoryCatalogStore::new();
        let a = store.create_expedition(&expedition_fields("Africa")).await.unwrap();
        let b = store.create_expedition(&expedition_fields("Asia")).await.unwrap();
        assert_eq!(a.expedition_id, 1);
        assert_eq!(b.expedition_id, 2);

        store.delete_expedition(b.expedition_id).await.unwrap();
        let c = store.create_expedition(&expedition_fields("Europe")).await.unwrap();
        assert_eq!(c.expedition_id, 3);
    }

    #[tokio::test]
    async fn test_specimen_resolves_references() {
        let store = MemoryCatalogStore::new();
        let expedition = store.create_expedition(&expedition_fields("Africa")).await.unwrap();
        let taxonomy = store.create_taxonomy(&taxonomy_fields()).await.unwrap();

        let created = store
            .create_specimen(&SpecimenFields {
                catalog_number: "1.2.3.4".to_string(),
                expedition_id: Some(expedition.expedition_id),
                taxonomy_id: Some(taxonomy.taxonomy_id),
            })
            .await
            .unwrap();

        let fetched = store.get_specimen(created.specimen_id).await.unwrap().unwrap();
        assert_eq!(fetched.expedition.unwrap().continent, "Africa");
        assert_eq!(fetched.taxonomy.unwrap().genus, "Homo");
    }

    #[tokio::test]
    async fn test_create_specimen_rejects_missing_reference() {
        let store = MemoryCatalogStore::new();
        let result = store.create_specimen(&specimen_fields("1.2.3.4", 99)).await;
        assert!(matches!(
            result,
            Err(StoreError::MissingReference { entity: "Expedition", id: 99 })
        ));
    }

    #[tokio::test]
    async fn test_delete_expedition_cascades() {
        let store = MemoryCatalogStore::new();
        let keep = store.create_expedition(&expedition_fields("Asia")).await.unwrap();
        let doomed = store.create_expedition(&expedition_fields("Africa")).await.unwrap();
        for n in 0..3 {
            store
                .create_specimen(&specimen_fields(&format!("1.1.1.{n}"), doomed.expedition_id))
                .await
                .unwrap();
        }
        store.create_specimen(&specimen_fields("2.2.2.2", keep.expedition_id)).await.unwrap();

        let removed = store.delete_expedition(doomed.expedition_id).await.unwrap();
        assert_eq!(removed, Some(3));

        let remaining = store.list_specimens(&SpecimenFilter::new(), 20, 0).await.unwrap();
        assert_eq!(remaining.total, 1);
        assert_eq!(store.delete_expedition(doomed.expedition_id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_specimens_descending_and_filtered() {
        let store = MemoryCatalogStore::new();
        let africa = store.create_expedition(&expedition_fields("Africa")).await.unwrap();
        let europe = store.create_expedition(&expedition_fields("Europe")).await.unwrap();
        for n in 0..5 {
            let expedition = if n % 2 == 0 { &africa } else { &europe };
            store
                .create_specimen(&specimen_fields(&format!("1.1.1.{n}"), expedition.expedition_id))
                .await
                .unwrap();
        }

        let all = store.list_specimens(&SpecimenFilter::new(), 3, 0).await.unwrap();
        assert_eq!(all.total, 5);
        let ids: Vec<i64> = all.items.iter().map(|s| s.specimen_id).collect();
        assert_eq!(ids, vec![5, 4, 3]);

        let filter = SpecimenFilter::new().with(FilterField::ExpeditionContinent, "europe");
        let european = store.list_specimens(&filter, 20, 0).await.unwrap();
        assert_eq!(european.total, 2);
        assert!(european
            .items
            .iter()
            .all(|s| s.expedition.as_ref().unwrap().continent == "Europe"));
    }

    #[tokio::test]
    async fn test_create_taxonomy_for_specimen_links_it() {
        let store = MemoryCatalogStore::new();
        let expedition = store.create_expedition(&expedition_fields("Africa")).await.unwrap();
        let specimen = store
            .create_specimen(&specimen_fields("1.2.3.4", expedition.expedition_id))
            .await
            .unwrap();

        let taxonomy = store
            .create_taxonomy_for_specimen(specimen.specimen_id, &taxonomy_fields())
            .await
            .unwrap()
            .unwrap();

        let fetched = store.get_specimen(specimen.specimen_id).await.unwrap().unwrap();
        assert_eq!(fetched.taxonomy.unwrap().taxonomy_id, taxonomy.taxonomy_id);
        assert!(store
            .create_taxonomy_for_specimen(404, &taxonomy_fields())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_catalog_number_in_use() {
        let store = MemoryCatalogStore::new();
        let expedition = store.create_expedition(&expedition_fields("Africa")).await.unwrap();
        let specimen = store
            .create_specimen(&specimen_fields("1.2.3.4", expedition.expedition_id))
            .await
            .unwrap();

        assert!(store.catalog_number_in_use("1.2.3.4", None).await.unwrap());
        assert!(!store
            .catalog_number_in_use("1.2.3.4", Some(specimen.specimen_id))
            .await
            .unwrap());
        assert!(!store.catalog_number_in_use("9.9.9.9", None).await.unwrap());
    }
}
