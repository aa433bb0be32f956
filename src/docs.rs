use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::inventory::dto::{InventoryItemRequest, InventoryItemView};
use crate::products::dto::{NutrimentsView, ProductView, RationView};

pub const SWAGGER_PATH: &str = "/swagger";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "rebost", description = "Food inventory backed by the Open Food Facts catalog"),
    paths(
        crate::products::handlers::get_product,
        crate::inventory::handlers::list_items,
        crate::inventory::handlers::create_item,
    ),
    components(schemas(
        ProductView,
        NutrimentsView,
        RationView,
        InventoryItemRequest,
        InventoryItemView,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;
