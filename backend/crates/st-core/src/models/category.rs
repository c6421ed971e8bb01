use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product category (e.g. "Guitars", "Keyboards")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
}

impl Category {
    pub fn new(name: String, image: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            image,
        }
    }
}
