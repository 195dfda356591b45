//! Generic CRUD engine
//!
//! One implementation of the save / merge / page / count contract,
//! instantiated per entity through the [`Model`] trait. The PATCH
//! merge is delegated to the store's per-document `MERGE`, which
//! applies the field overlay atomically server-side: absent fields are
//! untouched, present fields overwrite, and two concurrent merges on
//! the same record cannot lose each other's non-overlapping fields.

use std::marker::PhantomData;

use chrono::Utc;
use serde_json::Value;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, Pageable, RepoError, RepoResult, is_safe_field, record_key};
use crate::db::models::{Model, SYSTEM_ACCOUNT};

// Fields owned by the server on audited entities; a client payload
// can never set or clear them through the merge path.
const AUDIT_FIELDS: [&str; 4] = [
    "created_by",
    "created_date",
    "last_modified_by",
    "last_modified_date",
];

#[derive(Clone)]
pub struct CrudRepository<M: Model> {
    base: BaseRepository,
    _model: PhantomData<M>,
}

impl<M: Model> CrudRepository<M> {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
            _model: PhantomData,
        }
    }

    /// Find all records, storage order
    pub async fn find_all(&self) -> RepoResult<Vec<M>> {
        let rows: Vec<M> = self.base.db().select(M::TABLE).await?;
        Ok(rows)
    }

    /// Find one page of records
    ///
    /// Sorting is optional; without a sort key the storage order is
    /// returned. The sort field is interpolated into the query, so it
    /// is rejected unless it is a plain identifier.
    pub async fn find_paged(&self, pageable: &Pageable) -> RepoResult<Vec<M>> {
        let query = match &pageable.sort {
            Some(sort) => {
                if !is_safe_field(&sort.field) {
                    return Err(RepoError::Validation(format!(
                        "Invalid sort field: {}",
                        sort.field
                    )));
                }
                format!(
                    "SELECT * FROM {} ORDER BY {} {} LIMIT $limit START $start",
                    M::TABLE,
                    sort.field,
                    sort.direction.as_sql()
                )
            }
            None => format!("SELECT * FROM {} LIMIT $limit START $start", M::TABLE),
        };

        let rows: Vec<M> = self
            .base
            .db()
            .query(query)
            .bind(("limit", pageable.size as i64))
            .bind(("start", pageable.offset() as i64))
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Total number of records in the collection
    pub async fn count(&self) -> RepoResult<u64> {
        let mut result = self
            .base
            .db()
            .query(format!("SELECT count() FROM {} GROUP ALL", M::TABLE))
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0).max(0) as u64)
    }

    /// Find a record by id ("table:id" or bare key)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<M>> {
        let key = record_key(M::TABLE, id);
        let record: Option<M> = self.base.db().select((M::TABLE, key)).await?;
        Ok(record)
    }

    /// Existence check without deserializing the caller's interest away
    pub async fn exists_by_id(&self, id: &str) -> RepoResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Insert a new record with a store-assigned id
    pub async fn create(&self, mut model: M) -> RepoResult<M> {
        model.stamp_created(SYSTEM_ACCOUNT, Utc::now());
        let created: Option<M> = self.base.db().create(M::TABLE).content(model).await?;
        created.ok_or_else(|| RepoError::Database(format!("Failed to create {}", M::TABLE)))
    }

    /// Insert a new record under a caller-chosen key (seed data)
    pub async fn create_with_key(&self, key: &str, mut model: M) -> RepoResult<M> {
        model.stamp_created(SYSTEM_ACCOUNT, Utc::now());
        let key = record_key(M::TABLE, key).to_string();
        let created: Option<M> = self
            .base
            .db()
            .create((M::TABLE, key))
            .content(model)
            .await?;
        created.ok_or_else(|| RepoError::Database(format!("Failed to create {}", M::TABLE)))
    }

    /// Full replace of an existing record (PUT semantics)
    ///
    /// Returns `None` when the id does not exist; nothing is created.
    pub async fn replace(&self, id: &str, mut model: M) -> RepoResult<Option<M>> {
        let key = record_key(M::TABLE, id);
        model.clear_id();
        model.stamp_modified(SYSTEM_ACCOUNT, Utc::now());
        let updated: Option<M> = self.base.db().update((M::TABLE, key)).content(model).await?;
        Ok(updated)
    }

    /// Field-level merge of a partial record (PATCH semantics)
    ///
    /// Only the fields present on `patch` reach the store: `None`
    /// fields are skipped at serialization time, so the stored values
    /// survive; present values overwrite, including `false`, `0` and
    /// `""`. Returns `None` when the id does not exist.
    pub async fn merge(&self, id: &str, patch: M) -> RepoResult<Option<M>> {
        let key = record_key(M::TABLE, id);
        if self.find_by_id(key).await?.is_none() {
            return Ok(None);
        }

        let mut data =
            serde_json::to_value(&patch).map_err(|e| RepoError::Database(e.to_string()))?;
        if let Value::Object(map) = &mut data {
            // The target id comes from the operation, never the payload
            map.remove("id");
            if M::AUDITED {
                for field in AUDIT_FIELDS {
                    map.remove(field);
                }
                map.insert(
                    "last_modified_by".to_string(),
                    Value::String(SYSTEM_ACCOUNT.to_string()),
                );
                map.insert(
                    "last_modified_date".to_string(),
                    serde_json::to_value(Utc::now())
                        .map_err(|e| RepoError::Database(e.to_string()))?,
                );
            }
        }

        let thing = RecordId::from_table_key(M::TABLE, key);
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        self.find_by_id(key).await
    }

    /// Delete by id; deleting an absent id is a no-op
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let key = record_key(M::TABLE, id);
        let _: Option<M> = self.base.db().delete((M::TABLE, key)).await?;
        Ok(())
    }

    /// Remove every record in the collection (seed/test support)
    pub async fn delete_all(&self) -> RepoResult<()> {
        let _: Vec<M> = self.base.db().delete(M::TABLE).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{Designation, Division, Post};
    use crate::db::repository::Direction;
    use surrealdb::engine::local::RocksDb;
    use tempfile::TempDir;

    async fn test_db() -> (TempDir, Surreal<Db>) {
        let tmp = tempfile::tempdir().unwrap();
        let db: Surreal<Db> = Surreal::new::<RocksDb>(tmp.path()).await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        (tmp, db)
    }

    fn designation(name: &str, sort_name: &str, grade: i32) -> Designation {
        Designation {
            name: Some(name.to_string()),
            sort_name: Some(sort_name.to_string()),
            grade: Some(grade),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_stamps_audit() {
        let (_tmp, db) = test_db().await;
        let repo: CrudRepository<Designation> = CrudRepository::new(db);

        let created = repo.create(designation("Officer", "B", 3)).await.unwrap();
        assert!(created.id.is_some());
        assert_eq!(created.created_by.as_deref(), Some(SYSTEM_ACCOUNT));
        assert!(created.created_date.is_some());
        assert!(created.last_modified_date.is_some());
    }

    #[tokio::test]
    async fn merge_overwrites_present_and_preserves_absent() {
        let (_tmp, db) = test_db().await;
        let repo: CrudRepository<Designation> = CrudRepository::new(db);

        let created = repo.create(designation("Officer", "B", 3)).await.unwrap();
        let id = created.id.as_ref().unwrap().key().to_string();

        let patch = Designation {
            grade: Some(5),
            ..Default::default()
        };
        let merged = repo.merge(&id, patch).await.unwrap().unwrap();
        assert_eq!(merged.name.as_deref(), Some("Officer"));
        assert_eq!(merged.sort_name.as_deref(), Some("B"));
        assert_eq!(merged.grade, Some(5));

        // A patch without the field leaves the previous value in place
        let patch = Designation {
            name: Some("Senior Officer".to_string()),
            ..Default::default()
        };
        let merged = repo.merge(&id, patch).await.unwrap().unwrap();
        assert_eq!(merged.name.as_deref(), Some("Senior Officer"));
        assert_eq!(merged.grade, Some(5));
    }

    #[tokio::test]
    async fn merge_accepts_falsy_values() {
        let (_tmp, db) = test_db().await;
        let repo: CrudRepository<Post> = CrudRepository::new(db.clone());

        let post = Post {
            title: Some("Annual report".to_string()),
            publish: Some(true),
            ..Default::default()
        };
        let created = repo.create(post).await.unwrap();
        let id = created.id.as_ref().unwrap().key().to_string();

        // `false` is present, not absent: it must overwrite
        let patch = Post {
            publish: Some(false),
            ..Default::default()
        };
        let merged = repo.merge(&id, patch).await.unwrap().unwrap();
        assert_eq!(merged.publish, Some(false));
        assert_eq!(merged.title.as_deref(), Some("Annual report"));

        // Same for zero and the empty string
        let desig_repo: CrudRepository<Designation> = CrudRepository::new(db);
        let created = desig_repo
            .create(designation("Officer", "B", 3))
            .await
            .unwrap();
        let id = created.id.as_ref().unwrap().key().to_string();
        let patch = Designation {
            sort_name: Some(String::new()),
            grade: Some(0),
            ..Default::default()
        };
        let merged = desig_repo.merge(&id, patch).await.unwrap().unwrap();
        assert_eq!(merged.sort_name.as_deref(), Some(""));
        assert_eq!(merged.grade, Some(0));
    }

    #[tokio::test]
    async fn merge_is_idempotent() {
        let (_tmp, db) = test_db().await;
        let repo: CrudRepository<Division> = CrudRepository::new(db);

        let created = repo
            .create(Division {
                name: Some("Dhaka".to_string()),
                bn_name: Some("ঢাকা".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let id = created.id.as_ref().unwrap().key().to_string();

        let patch = Division {
            url: Some("www.dhakadiv.gov.bd".to_string()),
            ..Default::default()
        };
        let once = repo.merge(&id, patch.clone()).await.unwrap().unwrap();
        let twice = repo.merge(&id, patch).await.unwrap().unwrap();

        assert_eq!(
            serde_json::to_value(&once).unwrap(),
            serde_json::to_value(&twice).unwrap()
        );
    }

    #[tokio::test]
    async fn merge_unknown_id_yields_none() {
        let (_tmp, db) = test_db().await;
        let repo: CrudRepository<Division> = CrudRepository::new(db);

        let patch = Division {
            name: Some("Nowhere".to_string()),
            ..Default::default()
        };
        assert!(repo.merge("missing", patch).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn merge_cannot_touch_audit_fields() {
        let (_tmp, db) = test_db().await;
        let repo: CrudRepository<Designation> = CrudRepository::new(db);

        let created = repo.create(designation("Officer", "B", 3)).await.unwrap();
        let id = created.id.as_ref().unwrap().key().to_string();

        let patch = Designation {
            created_by: Some("mallory".to_string()),
            grade: Some(9),
            ..Default::default()
        };
        let merged = repo.merge(&id, patch).await.unwrap().unwrap();
        assert_eq!(merged.created_by.as_deref(), Some(SYSTEM_ACCOUNT));
        assert_eq!(merged.grade, Some(9));
    }

    #[tokio::test]
    async fn replace_overwrites_the_whole_record() {
        let (_tmp, db) = test_db().await;
        let repo: CrudRepository<Division> = CrudRepository::new(db);

        let created = repo
            .create(Division {
                name: Some("Dhaka".to_string()),
                url: Some("www.dhakadiv.gov.bd".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let id = created.id.as_ref().unwrap().key().to_string();

        let replacement = Division {
            name: Some("Mymensingh".to_string()),
            ..Default::default()
        };
        let replaced = repo.replace(&id, replacement).await.unwrap().unwrap();
        assert_eq!(replaced.name.as_deref(), Some("Mymensingh"));
        // PUT is a full overwrite, not a merge
        assert!(replaced.url.is_none());
    }

    #[tokio::test]
    async fn replace_unknown_id_yields_none() {
        let (_tmp, db) = test_db().await;
        let repo: CrudRepository<Division> = CrudRepository::new(db);

        let replacement = Division {
            name: Some("Nowhere".to_string()),
            ..Default::default()
        };
        assert!(repo.replace("missing", replacement).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn count_tracks_create_and_delete() {
        let (_tmp, db) = test_db().await;
        let repo: CrudRepository<Division> = CrudRepository::new(db);

        assert_eq!(repo.count().await.unwrap(), 0);
        let created = repo
            .create(Division {
                name: Some("Khulna".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);

        // Deleting an absent id succeeds and changes nothing
        repo.delete("missing").await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);

        let id = created.id.as_ref().unwrap().key().to_string();
        repo.delete(&id).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn paging_windows_a_sorted_listing() {
        let (_tmp, db) = test_db().await;
        let repo: CrudRepository<Division> = CrudRepository::new(db);

        for name in ["Barishal", "Chattogram", "Dhaka", "Khulna", "Rajshahi"] {
            repo.create(Division {
                name: Some(name.to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        }

        let page0 = repo
            .find_paged(&Pageable::of(0, 2).sorted_by("name", Direction::Asc))
            .await
            .unwrap();
        assert_eq!(page0.len(), 2);
        assert_eq!(page0[0].name.as_deref(), Some("Barishal"));
        assert_eq!(page0[1].name.as_deref(), Some("Chattogram"));

        let page2 = repo
            .find_paged(&Pageable::of(2, 2).sorted_by("name", Direction::Asc))
            .await
            .unwrap();
        assert_eq!(page2.len(), 1);
        assert_eq!(page2[0].name.as_deref(), Some("Rajshahi"));

        // Count agrees with an all-covering page
        let all = repo.find_paged(&Pageable::of(0, 100)).await.unwrap();
        assert_eq!(all.len() as u64, repo.count().await.unwrap());
    }

    #[tokio::test]
    async fn paging_rejects_unsafe_sort_fields() {
        let (_tmp, db) = test_db().await;
        let repo: CrudRepository<Division> = CrudRepository::new(db);

        let result = repo
            .find_paged(&Pageable::of(0, 10).sorted_by("name; DELETE division", Direction::Asc))
            .await;
        assert!(matches!(result, Err(RepoError::Validation(_))));
    }
}
