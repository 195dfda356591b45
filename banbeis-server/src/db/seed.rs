//! Geographic reference-data seed
//!
//! One-time migration that loads the division/district/upazila
//! reference files into their collections. Each file is
//! newline-delimited JSON, one self-describing record per line, with
//! flat `division_id`/`district_id` fields that are rewritten into
//! record-id references on insert.
//!
//! The seed runs at startup and is a no-op once the `division`
//! collection holds any record. Missing files are logged and skipped
//! so a stripped deployment still boots.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use tracing::{debug, info, warn};

use crate::db::models::{District, Division, Upazila};
use crate::db::repository::{
    DistrictRepository, DivisionRepository, RepoResult, UpazilaRepository,
};

#[derive(Debug, Deserialize)]
struct DivisionRecord {
    id: String,
    name: Option<String>,
    bn_name: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DistrictRecord {
    id: String,
    division_id: Option<String>,
    name: Option<String>,
    bn_name: Option<String>,
    lat: Option<String>,
    lon: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpazilaRecord {
    id: String,
    district_id: Option<String>,
    name: Option<String>,
    bn_name: Option<String>,
    url: Option<String>,
}

/// Run the seed if the geography collections are still empty
pub async fn run(db: &Surreal<Db>, seed_dir: &Path) -> RepoResult<()> {
    let divisions = DivisionRepository::new(db.clone());
    if divisions.count().await? > 0 {
        debug!("Reference data already present, skipping seed");
        return Ok(());
    }

    seed_divisions(&divisions, &seed_dir.join("divisions.txt")).await?;
    seed_districts(
        &DistrictRepository::new(db.clone()),
        &seed_dir.join("districts.txt"),
    )
    .await?;
    seed_upazilas(
        &UpazilaRepository::new(db.clone()),
        &seed_dir.join("upazilas.txt"),
    )
    .await?;

    Ok(())
}

async fn seed_divisions(repo: &DivisionRepository, path: &Path) -> RepoResult<()> {
    let mut inserted = 0u64;
    for record in read_records::<DivisionRecord>(path) {
        let division = Division {
            id: None,
            name: record.name,
            bn_name: record.bn_name,
            url: record.url,
        };
        repo.create_with_key(&record.id, division).await?;
        inserted += 1;
    }
    info!("Seeded {} divisions", inserted);
    Ok(())
}

async fn seed_districts(repo: &DistrictRepository, path: &Path) -> RepoResult<()> {
    let mut inserted = 0u64;
    for record in read_records::<DistrictRecord>(path) {
        let district = District {
            id: None,
            name: record.name,
            bn_name: record.bn_name,
            lat: record.lat,
            lon: record.lon,
            url: record.url,
            division: record
                .division_id
                .map(|id| RecordId::from_table_key("division", id)),
        };
        repo.create_with_key(&record.id, district).await?;
        inserted += 1;
    }
    info!("Seeded {} districts", inserted);
    Ok(())
}

async fn seed_upazilas(repo: &UpazilaRepository, path: &Path) -> RepoResult<()> {
    let mut inserted = 0u64;
    for record in read_records::<UpazilaRecord>(path) {
        let upazila = Upazila {
            id: None,
            name: record.name,
            bn_name: record.bn_name,
            url: record.url,
            district: record
                .district_id
                .map(|id| RecordId::from_table_key("district", id)),
        };
        repo.create_with_key(&record.id, upazila).await?;
        inserted += 1;
    }
    info!("Seeded {} upazilas", inserted);
    Ok(())
}

/// Parse a newline-delimited JSON file, skipping blank and malformed
/// lines (with a warning) instead of failing the whole boot.
fn read_records<T: serde::de::DeserializeOwned>(path: &Path) -> Vec<T> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            warn!("Seed file {} not found, skipping", path.display());
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to read {} line {}: {}", path.display(), line_no + 1, e);
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<T>(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(
                    "Skipping malformed record in {} line {}: {}",
                    path.display(),
                    line_no + 1,
                    e
                );
            }
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use surrealdb::engine::local::RocksDb;

    async fn test_db() -> (tempfile::TempDir, Surreal<Db>) {
        let tmp = tempfile::tempdir().unwrap();
        let db: Surreal<Db> = Surreal::new::<RocksDb>(tmp.path().join("db")).await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        (tmp, db)
    }

    fn write_seed_files(dir: &Path) {
        let mut f = File::create(dir.join("divisions.txt")).unwrap();
        writeln!(f, r#"{{"id":"3","name":"Dhaka","bn_name":"ঢাকা","url":"www.dhakadiv.gov.bd"}}"#)
            .unwrap();
        writeln!(f, r#"{{"id":"6","name":"Rajshahi","bn_name":"রাজশাহী","url":"www.rajshahidiv.gov.bd"}}"#)
            .unwrap();

        let mut f = File::create(dir.join("districts.txt")).unwrap();
        writeln!(
            f,
            r#"{{"id":"1","division_id":"3","name":"Dhaka","bn_name":"ঢাকা","lat":"23.7115253","lon":"90.4111451","url":"www.dhaka.gov.bd"}}"#
        )
        .unwrap();

        let mut f = File::create(dir.join("upazilas.txt")).unwrap();
        writeln!(
            f,
            r#"{{"id":"1","district_id":"1","name":"Savar","bn_name":"সাভার","url":"savar.dhaka.gov.bd"}}"#
        )
        .unwrap();
    }

    #[tokio::test]
    async fn seed_loads_reference_files_once() {
        let (tmp, db) = test_db().await;
        write_seed_files(tmp.path());

        run(&db, tmp.path()).await.unwrap();

        let divisions = DivisionRepository::new(db.clone());
        assert_eq!(divisions.count().await.unwrap(), 2);
        let dhaka = divisions.find_by_id("3").await.unwrap().unwrap();
        assert_eq!(dhaka.name.as_deref(), Some("Dhaka"));

        let districts = DistrictRepository::new(db.clone());
        let district = districts.find_by_id("1").await.unwrap().unwrap();
        assert_eq!(
            district.division.as_ref().map(|d| d.to_string()),
            Some("division:⟨3⟩".to_string())
        );

        // Second run is a no-op, nothing is duplicated
        run(&db, tmp.path()).await.unwrap();
        assert_eq!(divisions.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn seed_survives_missing_files() {
        let (tmp, db) = test_db().await;
        run(&db, tmp.path()).await.unwrap();
        assert_eq!(DivisionRepository::new(db).count().await.unwrap(), 0);
    }
}
