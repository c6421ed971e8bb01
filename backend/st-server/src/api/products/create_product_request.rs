use crate::ApiError;

use st_core::{Product, ProductCondition};

use std::str::FromStr;

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub category_id: String,
    pub name: String,
    pub image: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub resale_price: i64,
    #[serde(default)]
    pub original_price: i64,
    #[serde(default)]
    pub years_of_use: i32,
    pub condition: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub seller_name: Option<String>,
    pub seller_email: String,
    #[serde(default)]
    pub ad: bool,
}

impl TryFrom<CreateProductRequest> for Product {
    type Error = ApiError;

    fn try_from(req: CreateProductRequest) -> Result<Self, Self::Error> {
        let category_id = Uuid::parse_str(&req.category_id)
            .map_err(|_| ApiError::validation("categoryId must be a valid id", "categoryId"))?;

        let name = req.name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("Product name cannot be empty", "name"));
        }
        if req.resale_price < 0 || req.original_price < 0 {
            return Err(ApiError::validation(
                "Prices cannot be negative",
                "resalePrice",
            ));
        }
        if req.years_of_use < 0 {
            return Err(ApiError::validation(
                "Years of use cannot be negative",
                "yearsOfUse",
            ));
        }

        let condition = req
            .condition
            .as_deref()
            .map(ProductCondition::from_str)
            .transpose()?
            .unwrap_or_default();

        let mut product = Product::new(category_id, name.to_string(), req.seller_email);
        product.image = req.image;
        product.location = req.location;
        product.resale_price = req.resale_price;
        product.original_price = req.original_price;
        product.years_of_use = req.years_of_use;
        product.condition = condition;
        product.phone = req.phone;
        product.description = req.description;
        product.seller_name = req.seller_name;
        product.ad = req.ad;
        Ok(product)
    }
}
