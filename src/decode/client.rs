//! HTTP client for the vehicle decode service.

use super::record::{DecodeResponse, DecodedField};
use crate::vin::Vin;
use thiserror::Error;
use tracing::{debug, info};

/// Public NHTSA vPIC endpoint that decodes a VIN into flat values.
pub const DEFAULT_DECODE_URL: &str = "https://vpic.nhtsa.dot.gov/api/vehicles/DecodeVinValues";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("lookup failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("decode service returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("decode service returned an unreadable response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("no vehicle information found for {0}")]
    NotFound(Vin),
}

/// Looks up vehicle details for a VIN. Failures are returned to the caller
/// as-is; there is no retry.
#[derive(Clone, Debug)]
pub struct VehicleDecoder {
    client: reqwest::Client,
    base_url: String,
}

impl VehicleDecoder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The request URL for `vin`. The VIN is the only data sent.
    pub fn request_url(&self, vin: &Vin) -> String {
        format!(
            "{}/{}?format=json",
            self.base_url.trim_end_matches('/'),
            vin
        )
    }

    pub async fn decode(&self, vin: &Vin) -> Result<Vec<DecodedField>, DecodeError> {
        let url = self.request_url(vin);
        debug!(%url, "requesting decode");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DecodeError::Status(status));
        }

        let body = response.text().await?;
        let fields = parse_decode_body(&body, vin)?;
        info!(%vin, fields = fields.len(), "decoded VIN");
        Ok(fields)
    }
}

impl Default for VehicleDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_DECODE_URL)
    }
}

/// Parse a decode-service body into label/value pairs.
///
/// A body with no record, or a record with nothing to show, is
/// [`DecodeError::NotFound`].
pub fn parse_decode_body(body: &str, vin: &Vin) -> Result<Vec<DecodedField>, DecodeError> {
    let response: DecodeResponse = serde_json::from_str(body)?;
    let fields = response
        .results
        .first()
        .map(|record| record.fields())
        .unwrap_or_default();

    if fields.is_empty() {
        return Err(DecodeError::NotFound(vin.clone()));
    }
    Ok(fields)
}
