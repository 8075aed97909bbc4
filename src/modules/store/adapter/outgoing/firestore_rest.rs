// src/modules/store/adapter/outgoing/firestore_rest.rs
//
// CollectionStore adapter for the Firestore REST surface:
// `documents:runQuery` for reads, plain document paths for delete/create.
// Firestore wraps every field in a typed value object; this adapter
// converts between that representation and plain JSON.

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::modules::store::application::ports::outgoing::{
    CollectionStore, Document, FieldFilter, OrderBy, SortDirection, StoreError,
};

pub struct FirestoreRestStore {
    http: reqwest::Client,
    base_url: String,
}

impl FirestoreRestStore {
    pub fn new(http: reqwest::Client, project_id: &str) -> Self {
        Self {
            http,
            base_url: format!(
                "https://firestore.googleapis.com/v1/projects/{project_id}/databases/(default)/documents"
            ),
        }
    }

    /// Point the adapter at an arbitrary endpoint (local emulator).
    pub fn with_base_url(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn run_query(&self, body: Value) -> Result<Vec<Value>, StoreError> {
        let url = format!("{}:runQuery", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected(format!("{status}: {detail}")));
        }

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| StoreError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl CollectionStore for FirestoreRestStore {
    async fn fetch(
        &self,
        collection: &str,
        filter: Option<FieldFilter>,
        order: OrderBy,
    ) -> Result<Vec<Document>, StoreError> {
        let body = json!({ "structuredQuery": structured_query(collection, filter.as_ref(), Some(&order)) });
        let rows = self.run_query(body).await?;

        rows.iter()
            .filter_map(|row| row.get("document"))
            .map(document_from_json)
            .collect()
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let url = format!("{}/{collection}/{id}", self.base_url);
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected(format!("{status}: {detail}")));
        }
        Ok(())
    }

    async fn add(&self, collection: &str, fields: Value) -> Result<String, StoreError> {
        let url = format!("{}/{collection}", self.base_url);
        let body = json!({ "fields": encode_fields(&fields)? });
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected(format!("{status}: {detail}")));
        }

        let created: Value = response
            .json()
            .await
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        let name = created
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| StoreError::Malformed("created document has no name".to_string()))?;
        Ok(document_id_from_name(name))
    }

    async fn count(&self, collection: &str) -> Result<usize, StoreError> {
        let body = json!({ "structuredQuery": structured_query(collection, None, None) });
        let rows = self.run_query(body).await?;
        Ok(rows.iter().filter(|row| row.get("document").is_some()).count())
    }
}

// Wire format helpers.

fn structured_query(
    collection: &str,
    filter: Option<&FieldFilter>,
    order: Option<&OrderBy>,
) -> Value {
    let mut query = Map::new();
    query.insert("from".into(), json!([{ "collectionId": collection }]));

    if let Some(f) = filter {
        query.insert(
            "where".into(),
            json!({
                "fieldFilter": {
                    "field": { "fieldPath": f.field },
                    "op": "EQUAL",
                    "value": encode_value(&f.equals),
                }
            }),
        );
    }

    if let Some(o) = order {
        let direction = match o.direction {
            SortDirection::Ascending => "ASCENDING",
            SortDirection::Descending => "DESCENDING",
        };
        query.insert(
            "orderBy".into(),
            json!([{ "field": { "fieldPath": o.field }, "direction": direction }]),
        );
    }

    Value::Object(query)
}

fn document_from_json(doc: &Value) -> Result<Document, StoreError> {
    let name = doc
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::Malformed("document without name".to_string()))?;
    let fields = doc
        .get("fields")
        .and_then(Value::as_object)
        .map(decode_fields)
        .transpose()?
        .unwrap_or_else(|| Value::Object(Map::new()));

    Ok(Document {
        id: document_id_from_name(name),
        fields,
    })
}

fn document_id_from_name(name: &str) -> String {
    name.rsplit('/').next().unwrap_or(name).to_string()
}

fn decode_fields(fields: &Map<String, Value>) -> Result<Value, StoreError> {
    let mut out = Map::new();
    for (key, typed) in fields {
        out.insert(key.clone(), decode_value(typed)?);
    }
    Ok(Value::Object(out))
}

/// Typed Firestore value -> plain JSON. Timestamps stay RFC 3339 strings;
/// the domain mappers parse them into dates.
fn decode_value(typed: &Value) -> Result<Value, StoreError> {
    let object = typed
        .as_object()
        .ok_or_else(|| StoreError::Malformed(format!("expected typed value, got {typed}")))?;
    let (kind, inner) = object
        .iter()
        .next()
        .ok_or_else(|| StoreError::Malformed("empty typed value".to_string()))?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" | "stringValue" | "timestampValue" | "referenceValue" => Ok(inner.clone()),
        "integerValue" => {
            // Firestore serializes 64-bit integers as strings.
            let raw = inner
                .as_str()
                .ok_or_else(|| StoreError::Malformed("integerValue is not a string".to_string()))?;
            let n: i64 = raw
                .parse()
                .map_err(|_| StoreError::Malformed(format!("bad integerValue: {raw}")))?;
            Ok(json!(n))
        }
        "doubleValue" => Ok(inner.clone()),
        "arrayValue" => {
            let values = inner
                .get("values")
                .and_then(Value::as_array)
                .map(|v| v.as_slice())
                .unwrap_or(&[]);
            values.iter().map(decode_value).collect::<Result<Vec<_>, _>>().map(Value::Array)
        }
        "mapValue" => {
            let fields = inner
                .get("fields")
                .and_then(Value::as_object)
                .map(decode_fields)
                .transpose()?;
            Ok(fields.unwrap_or_else(|| Value::Object(Map::new())))
        }
        other => Err(StoreError::Malformed(format!("unsupported value kind: {other}"))),
    }
}

fn encode_fields(fields: &Value) -> Result<Value, StoreError> {
    let object = fields
        .as_object()
        .ok_or_else(|| StoreError::Malformed("document fields must be an object".to_string()))?;
    let mut out = Map::new();
    for (key, value) in object {
        out.insert(key.clone(), encode_value(value));
    }
    Ok(Value::Object(out))
}

fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                json!({ "integerValue": i.to_string() })
            } else {
                json!({ "doubleValue": n })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => {
            let mut fields = Map::new();
            for (key, inner) in map {
                fields.insert(key.clone(), encode_value(inner));
            }
            json!({ "mapValue": { "fields": fields } })
        }
    }
}
