//! Plant API Client
//!
//! Remote catalog access, organized as a trait plus a browser `fetch`
//! implementation.

mod error;
mod http;
mod normalize;

use async_trait::async_trait;

use crate::models::{Category, Plant};

pub use error::{ApiError, ApiResult};
pub use http::HttpPlantApi;
pub use normalize::{decode_categories, decode_plant, decode_plants};

// ========================
// Endpoint Paths
// ========================

pub fn all_plants_path() -> String {
    "/plants".to_string()
}

pub fn category_plants_path(category_id: u32) -> String {
    format!("/category/{}", category_id)
}

pub fn plant_path(plant_id: u32) -> String {
    format!("/plant/{}", plant_id)
}

pub fn categories_path() -> String {
    "/categories".to_string()
}

/// Read access to the remote plant catalog
#[async_trait(?Send)]
pub trait PlantApi {
    async fn list_all_plants(&self) -> ApiResult<Vec<Plant>>;

    async fn list_plants_by_category(&self, category_id: u32) -> ApiResult<Vec<Plant>>;

    /// First plant of the normalized detail response
    async fn get_plant(&self, plant_id: u32) -> ApiResult<Plant>;

    async fn list_categories(&self) -> ApiResult<Vec<Category>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(all_plants_path(), "/plants");
        assert_eq!(category_plants_path(3), "/category/3");
        assert_eq!(plant_path(12), "/plant/12");
        assert_eq!(categories_path(), "/categories");
    }
}
