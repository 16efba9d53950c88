use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;

use pantry_core::inventory::{self, Entry};

use super::flash::{take_flash, FlashMessage};
use super::AppError;
use crate::context::StoreConnection;

/// Template wrapper that converts Askama templates into HTML responses.
pub(crate) struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {err}"),
                )
                    .into_response()
            }
        }
    }
}

/// Index page: item list, the add/remove/search forms, and any flash message.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    items: Vec<Entry>,
    has_flash: bool,
    flash_type: String,
    flash_message: String,
}

impl IndexTemplate {
    fn new(items: Vec<Entry>, flash: Option<FlashMessage>) -> Self {
        let (flash_type, flash_message) = flash
            .map(|f| (f.message_type, f.message))
            .unwrap_or_default();

        Self {
            items,
            has_flash: !flash_message.is_empty(),
            flash_type,
            flash_message,
        }
    }
}

/// Entries page: one row per item with update and delete forms.
#[derive(Template)]
#[template(path = "entries.html")]
struct EntriesTemplate {
    items: Vec<Entry>,
}

/// Handler for the index page (GET /).
pub async fn index(
    StoreConnection(repo): StoreConnection,
    jar: SignedCookieJar,
) -> Result<impl IntoResponse, AppError> {
    let items = inventory::list_items(&repo).await?;
    let (jar, flash) = take_flash(jar);

    Ok((jar, HtmlTemplate(IndexTemplate::new(items, flash))))
}

/// Handler for the entries page (GET /entries).
pub async fn entries(StoreConnection(repo): StoreConnection) -> Result<impl IntoResponse, AppError> {
    let items = inventory::list_items(&repo).await?;

    Ok(HtmlTemplate(EntriesTemplate { items }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, name: &str) -> Entry {
        Entry {
            id,
            name: name.to_string(),
            quantity: "1".to_string(),
            expiration_date: None,
        }
    }

    #[test]
    fn test_index_renders_items_and_flash() {
        let html = IndexTemplate::new(
            vec![entry(1, "Rice")],
            Some(FlashMessage::success("Item added successfully")),
        )
        .render()
        .unwrap();

        assert!(html.contains("Rice"));
        assert!(html.contains("Item added successfully"));
    }

    #[test]
    fn test_index_without_flash() {
        let html = IndexTemplate::new(Vec::new(), None).render().unwrap();
        assert!(!html.contains("class=\"flash"));
    }

    #[test]
    fn test_index_escapes_item_names() {
        let html = IndexTemplate::new(vec![entry(1, "<b>Beans</b>")], None)
            .render()
            .unwrap();

        assert!(!html.contains("<b>Beans</b>"));
        assert!(html.contains("Beans"));
    }

    #[test]
    fn test_entries_renders_row_forms() {
        let html = EntriesTemplate {
            items: vec![entry(42, "Oats")],
        }
        .render()
        .unwrap();

        assert!(html.contains("Oats"));
        assert!(html.contains("name=\"item_id\" value=\"42\""));
        assert!(html.contains("action=\"/update-quantity\""));
        assert!(html.contains("action=\"/delete-item\""));
    }
}
