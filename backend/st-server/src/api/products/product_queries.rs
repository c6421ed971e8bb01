use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
    pub category_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SellerProductsQuery {
    pub email: Option<String>,
}
