//! Write procedure handlers.

use contentdb_core::{RequestContext, Result, StorageContext};
use contentdb_engine::ContentRegistry;

use crate::command::{CreateIn, DeleteIn, UpdateIn};
use crate::Output;

/// Handle the `create` procedure.
pub async fn create(
    registry: &ContentRegistry,
    request: &RequestContext,
    input: CreateIn,
) -> Result<Output> {
    let CreateIn {
        content_type_id,
        data,
        version,
        options,
    } = input;
    let ctx = StorageContext::build(&content_type_id, version, request);
    let crud = registry.get_crud(&content_type_id)?;
    let item = crud.create(&ctx, data, options).await?;
    Ok(Output::Item(item))
}

/// Handle the `update` procedure.
pub async fn update(
    registry: &ContentRegistry,
    request: &RequestContext,
    input: UpdateIn,
) -> Result<Output> {
    let UpdateIn {
        content_type_id,
        id,
        data,
        version,
        options,
    } = input;
    let ctx = StorageContext::build(&content_type_id, version, request);
    let crud = registry.get_crud(&content_type_id)?;
    let item = crud.update(&ctx, &id, data, options).await?;
    Ok(Output::Item(item))
}

/// Handle the `delete` procedure.
pub async fn delete(
    registry: &ContentRegistry,
    request: &RequestContext,
    input: DeleteIn,
) -> Result<Output> {
    let DeleteIn {
        content_type_id,
        id,
        version,
        options,
    } = input;
    let ctx = StorageContext::build(&content_type_id, version, request);
    let crud = registry.get_crud(&content_type_id)?;
    let result = crud.delete(&ctx, &id, options).await?;
    Ok(Output::Deleted(result))
}
