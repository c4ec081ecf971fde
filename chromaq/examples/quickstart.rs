//! Quick start example for chromaq.
//!
//! Builds requests for every collection operation and prints the JSON a
//! real HTTP transport would send. The transport here answers with canned
//! responses so the example runs offline.
//!
//! Run with `RUST_LOG=chromaq_core=debug cargo run --example quickstart`.

use chromaq::prelude::*;
use chromaq::request::{AddRequest, DeleteRequest, GetRequest, QueryRequest, UpdateRequest};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Prints each request and replies like a healthy server would.
struct EchoTransport;

impl EchoTransport {
    fn show<R: Serialize>(&self, op: &str, request: &R, collection_id: &str) -> Result<()> {
        println!(
            "POST /collections/{}/{} {}",
            collection_id,
            op,
            serde_json::to_string(request)?
        );
        Ok(())
    }
}

impl Transport for EchoTransport {
    fn add(&self, request: &AddRequest, collection_id: &str) -> Result<RawOutcome> {
        self.show("add", request, collection_id)?;
        Ok(RawOutcome::Value(json!(true)))
    }

    fn get(&self, request: &GetRequest, collection_id: &str) -> Result<RawOutcome> {
        self.show("get", request, collection_id)?;
        Ok(RawOutcome::Value(json!({
            "ids": ["rust-1"],
            "documents": ["Introduction to Rust programming"],
            "metadatas": [{"category": "programming", "year": 2021}]
        })))
    }

    fn query(&self, request: &QueryRequest, collection_id: &str) -> Result<RawOutcome> {
        self.show("query", request, collection_id)?;
        Ok(RawOutcome::Text(
            r#"{
                "ids": [["rust-1", "rust-2", "py-1"]],
                "documents": [[
                    "Introduction to Rust programming",
                    "Advanced Rust patterns",
                    "Python for data science"
                ]],
                "distances": [[0.12, 0.31, 0.87]]
            }"#
            .to_string(),
        ))
    }

    fn update(&self, request: &UpdateRequest, collection_id: &str) -> Result<RawOutcome> {
        self.show("update", request, collection_id)?;
        Ok(RawOutcome::Empty)
    }

    fn upsert(&self, request: &AddRequest, collection_id: &str) -> Result<RawOutcome> {
        self.show("upsert", request, collection_id)?;
        Ok(RawOutcome::Empty)
    }

    fn delete(&self, request: &DeleteRequest, collection_id: &str) -> Result<RawOutcome> {
        self.show("delete", request, collection_id)?;
        Ok(RawOutcome::Error(HttpValidationError::with_msg(
            "delete is disabled on this demo server",
        )))
    }

    fn count(&self, collection_id: &str) -> Result<RawOutcome> {
        println!("GET /collections/{}/count", collection_id);
        Ok(RawOutcome::Value(json!(3)))
    }
}

/// A toy embedding: letter statistics of the text.
fn embed(texts: &[String]) -> Result<Vec<Embedding>> {
    Ok(texts
        .iter()
        .map(|t| {
            let len = t.len() as f32;
            let vowels = t.chars().filter(|c| "aeiou".contains(*c)).count() as f32;
            Embedding::from_vec(vec![len / 100.0, vowels / len.max(1.0)])
        })
        .collect())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("chromaq quick start\n");

    let collection = Collection::new(EchoTransport, CollectionConfig::new("articles"))
        .with_embedding_function(embed);
    tracing::info!(collection = collection.id(), "collection ready");

    // Add with generated ids
    let added = collection.add_auto(
        AddCriteria::builder()
            .with_documents([
                "Introduction to Rust programming",
                "Advanced Rust patterns",
                "Python for data science",
            ])
            .with_metadatas([
                Metadata::new().with_field("category", "programming").with_field("year", 2021),
                Metadata::new().with_field("category", "programming").with_field("year", 2023),
                Metadata::new().with_field("category", "data").with_field("year", 2019),
            ])
            .build(),
    )?;
    println!("added: {}\n", added);

    // Get with a metadata filter
    let got = collection.get(
        &[],
        &GetCriteria::builder()
            .where_metadata(and([
                cond("category", eq("programming")),
                cond("year", gte(2020)),
            ]))
            .with_limit(5)
            .build(),
    )?;
    println!("get: {}\n", got);

    // Query by text, then keep only close neighbors
    let response = collection.query(
        &["learning rust".to_string()],
        &QueryCriteria::builder()
            .where_document(or_matchers([contains("Rust"), contains("rust")]))
            .with_number_of_results(3)
            .build(),
    )?;
    if let Some(result) = response.payload() {
        let range = DistanceRange::less_than(0.5);
        println!("neighbors within {}: {:?}\n", range, result.ids_within(Some(&range)));
    }

    let updated = collection.update(
        &["rust-1".to_string()],
        &UpdateCriteria::builder()
            .with_metadatas([Metadata::single("year", 2024)])
            .with_embedding([0.3, 0.4])
            .build(),
    )?;
    println!("update: {}\n", updated);

    // The demo server rejects deletes: the failure is a value, not an error
    let deleted = collection.delete_ids(&["py-1".to_string()])?;
    println!("delete: {}\n", deleted);

    println!("count: {}", collection.count()?);

    // Validation fails before the transport is called
    match collection.add(&["a".to_string(), "b".to_string()], &AddCriteria::builder().build()) {
        Err(err) => println!("rejected locally: {}", err),
        Ok(response) => println!("unexpected: {}", response),
    }

    Ok(())
}
