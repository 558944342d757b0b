use trip_map_shared::config::DATASET_PATH;
use trip_map_shared::dataset;
use trip_map_shared::models::Location;

/// Build the dataset URL for a page origin.
pub fn dataset_url(origin: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), DATASET_PATH)
}

fn page_origin() -> Result<String, String> {
    web_sys::window()
        .ok_or("window unavailable")?
        .location()
        .origin()
        .map_err(|_| "page origin unavailable".to_string())
}

/// Fetch and validate the point-of-interest dataset. Called once per page.
pub async fn fetch_locations() -> Result<Vec<Location>, String> {
    let url = dataset_url(&page_origin()?);

    let resp = reqwest::get(&url).await.map_err(|e| e.to_string())?;
    if !resp.status().is_success() {
        return Err(format!("{} returned {}", url, resp.status()));
    }
    let body = resp.text().await.map_err(|e| e.to_string())?;

    dataset::parse(&body).map_err(|e| e.to_string())
}
