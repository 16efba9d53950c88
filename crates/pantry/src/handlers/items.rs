//! Item mutation handlers and the JSON listing.
//!
//! Every handler receives the connection for its request explicitly and
//! reads its input through `ValidForm`.

use axum::{
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::SignedCookieJar;

use pantry_core::inventory::{self, Entry};

use super::flash::{redirect_with_flash, FlashMessage};
use super::form::ValidForm;
use super::AppError;
use crate::context::StoreConnection;
use crate::models::{AddItem, DeleteItem, RemoveItem, UpdateQuantity};

// ============================================================================
// Index forms
// ============================================================================

/// List every item as JSON (GET /list).
pub async fn list_items(
    StoreConnection(repo): StoreConnection,
) -> Result<Json<Vec<Entry>>, AppError> {
    Ok(Json(inventory::list_items(&repo).await?))
}

/// Add an item (POST /add).
pub async fn add_item(
    StoreConnection(repo): StoreConnection,
    jar: SignedCookieJar,
    ValidForm(item): ValidForm<AddItem>,
) -> Result<Response, AppError> {
    inventory::add_item(
        &repo,
        &item.name,
        &item.quantity,
        item.expiration_date.as_deref(),
    )
    .await?;

    Ok(redirect_with_flash(
        jar,
        "/",
        FlashMessage::success("Item added successfully"),
    ))
}

/// Remove an item by name (POST /remove).
pub async fn remove_item(
    StoreConnection(repo): StoreConnection,
    jar: SignedCookieJar,
    ValidForm(item): ValidForm<RemoveItem>,
) -> Result<Response, AppError> {
    inventory::remove_item_by_name(&repo, &item.name).await?;

    Ok(redirect_with_flash(
        jar,
        "/",
        FlashMessage::success("Item removed successfully"),
    ))
}

// ============================================================================
// Entries page forms
// ============================================================================

/// Change the quantity of an item (POST /update-quantity).
pub async fn update_quantity(
    StoreConnection(repo): StoreConnection,
    ValidForm(cmd): ValidForm<UpdateQuantity>,
) -> Result<impl IntoResponse, AppError> {
    inventory::update_quantity(&repo, cmd.id, &cmd.quantity).await?;
    Ok(Redirect::to("/entries"))
}

/// Delete an item by id (POST /delete-item).
pub async fn delete_item(
    StoreConnection(repo): StoreConnection,
    ValidForm(cmd): ValidForm<DeleteItem>,
) -> Result<impl IntoResponse, AppError> {
    inventory::delete_item(&repo, cmd.id).await?;
    Ok(Redirect::to("/entries"))
}
