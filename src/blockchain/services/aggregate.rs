// src/blockchain/services/aggregate.rs

use crate::blockchain::models::RequestResult;
use futures::future::try_join_all;
use serde_json::Value;
use std::future::Future;

/// Runs every query concurrently and concatenates their responses in query order.
///
/// An array response contributes its elements, any other value is appended
/// as a single element. If one query fails the whole merge fails and the
/// results of the others are dropped.
pub async fn merge_responses<F, const N: usize>(queries: [F; N]) -> RequestResult<Vec<Value>>
where
    F: Future<Output = RequestResult<Value>>,
{
    let responses = try_join_all(queries).await?;

    let mut merged = Vec::new();
    for response in responses {
        match response {
            Value::Array(items) => merged.extend(items),
            other => merged.push(other),
        }
    }
    Ok(merged)
}

/// Same contract as [`merge_responses`] for queries that already yield lists.
pub async fn merge_lists<F, const N: usize>(queries: [F; N]) -> RequestResult<Vec<Value>>
where
    F: Future<Output = RequestResult<Vec<Value>>>,
{
    let lists = try_join_all(queries).await?;
    Ok(lists.into_iter().flatten().collect())
}
