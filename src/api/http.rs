//! Browser `fetch` implementation of [`PlantApi`].

use async_trait::async_trait;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::{
    all_plants_path, categories_path, category_plants_path, decode_categories, decode_plant,
    decode_plants, plant_path, ApiError, ApiResult, PlantApi,
};
use crate::models::{Category, Plant};

#[derive(Debug, Clone)]
pub struct HttpPlantApi {
    base_url: String,
}

impl HttpPlantApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and parse the body as JSON
    async fn fetch_json(&self, path: &str) -> ApiResult<Value> {
        let url = self.url_for(path);
        let window = web_sys::window().ok_or(ApiError::NoWindow)?;

        let response = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(|e| ApiError::Network(js_error_message(&e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|e| ApiError::Network(js_error_message(&e)))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                url,
            });
        }

        let text = response
            .text()
            .map_err(|e| ApiError::Decode(js_error_message(&e)))?;
        let text = JsFuture::from(text)
            .await
            .map_err(|e| ApiError::Decode(js_error_message(&e)))?
            .as_string()
            .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))?;

        tracing::debug!(url = %url, bytes = text.len(), "fetched");
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait(?Send)]
impl PlantApi for HttpPlantApi {
    async fn list_all_plants(&self) -> ApiResult<Vec<Plant>> {
        decode_plants(self.fetch_json(&all_plants_path()).await?)
    }

    async fn list_plants_by_category(&self, category_id: u32) -> ApiResult<Vec<Plant>> {
        decode_plants(self.fetch_json(&category_plants_path(category_id)).await?)
    }

    async fn get_plant(&self, plant_id: u32) -> ApiResult<Plant> {
        decode_plant(self.fetch_json(&plant_path(plant_id)).await?, plant_id)
    }

    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        decode_categories(self.fetch_json(&categories_path()).await?)
    }
}

/// Best-effort message out of a rejected JS promise
fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        let api = HttpPlantApi::new("https://example.test/api");
        assert_eq!(api.url_for(&plant_path(5)), "https://example.test/api/plant/5");
    }
}
