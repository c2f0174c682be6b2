//! Read procedure handlers.

use contentdb_core::{RequestContext, Result, StorageContext};
use contentdb_engine::ContentRegistry;

use crate::command::{BulkGetIn, GetIn, SearchIn};
use crate::Output;

/// Handle the `get` procedure.
pub async fn get(registry: &ContentRegistry, request: &RequestContext, input: GetIn) -> Result<Output> {
    let GetIn {
        content_type_id,
        id,
        version,
        options,
    } = input;
    let ctx = StorageContext::build(&content_type_id, version, request);
    let crud = registry.get_crud(&content_type_id)?;
    let item = crud.get(&ctx, &id, options).await?;
    Ok(Output::Item(item))
}

/// Handle the `bulkGet` procedure.
pub async fn bulk_get(
    registry: &ContentRegistry,
    request: &RequestContext,
    input: BulkGetIn,
) -> Result<Output> {
    let BulkGetIn {
        content_type_id,
        ids,
        version,
        options,
    } = input;
    let ctx = StorageContext::build(&content_type_id, version, request);
    let crud = registry.get_crud(&content_type_id)?;
    let result = crud.bulk_get(&ctx, &ids, options).await?;
    Ok(Output::BulkItems(result))
}

/// Handle the `search` procedure.
pub async fn search(
    registry: &ContentRegistry,
    request: &RequestContext,
    input: SearchIn,
) -> Result<Output> {
    let SearchIn {
        content_type_id,
        query,
        version,
        options,
    } = input;
    let ctx = StorageContext::build(&content_type_id, version, request);
    let crud = registry.get_crud(&content_type_id)?;
    let result = crud.search(&ctx, &query, options).await?;
    Ok(Output::SearchResults(result))
}
