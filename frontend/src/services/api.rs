use gloo::net::http::Request;
use shared::{CalendarRange, SetVerifiedRequest, SetVerifiedResponse, WaiverRecord};

/// API client for communicating with the booking backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:8000/api/v1".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Get all signed waivers for the admin list
    pub async fn get_waivers(&self) -> Result<Vec<WaiverRecord>, String> {
        let url = format!("{}/bookings/waivers/", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<serde_json::Value>().await {
                Ok(value) => {
                    // The endpoint is expected to return a list; anything else
                    // is a malformed response, not a fatal error.
                    if value.is_array() {
                        serde_json::from_value(value)
                            .map_err(|e| format!("Failed to parse waivers: {}", e))
                    } else {
                        Err("Failed to load waivers: invalid data format".to_string())
                    }
                }
                Err(e) => Err(format!("Failed to parse waivers: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch waivers: {}", e)),
        }
    }

    /// Toggle the arrival/verification flag of one waiver
    pub async fn set_waiver_verified(&self, id: i64, is_verified: bool) -> Result<(), String> {
        let url = format!("{}/bookings/waivers/{}/set_verified/", self.base_url, id);

        match Request::post(&url)
            .json(&SetVerifiedRequest { is_verified })
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<SetVerifiedResponse>().await {
                        Ok(data) if data.success => Ok(()),
                        Ok(data) => Err(data
                            .error
                            .unwrap_or_else(|| "Failed to update status".to_string())),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Get merged session and party bookings for an inclusive date range,
    /// together with the backend-computed summary
    pub async fn get_calendar_range(&self, start: &str, end: &str) -> Result<CalendarRange, String> {
        let url = format!(
            "{}/bookings/calendar/?start_date={}&end_date={}",
            self.base_url, start, end
        );

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<CalendarRange>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse calendar data: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch calendar data: {}", e)),
        }
    }

    /// Fetch the CSV export of all waivers as raw bytes
    pub async fn export_waivers_csv(&self) -> Result<Vec<u8>, String> {
        let url = format!("{}/bookings/waivers/export_csv/", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .binary()
                        .await
                        .map_err(|e| format!("Failed to read export: {}", e))
                } else {
                    Err(format!("Export failed with status {}", response.status()))
                }
            }
            Err(e) => Err(format!("Failed to fetch export: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
