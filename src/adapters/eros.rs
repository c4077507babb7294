use crate::domain::model::PartialObjectGroup;
use crate::domain::ports::{ConfigProvider, ObjectGroupFetcher};
use crate::utils::error::{ErosHttpError, LabError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

/// Eros `oeuvres` 端點回傳的內容；兩個數量欄位都有時以 `object_count` 為準
#[derive(Debug, Deserialize)]
struct ErosObjectGroup {
    title: String,
    object_count: Option<u32>,
    nb_obj: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct ErosClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl ErosClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let base_url = Url::parse(config.eros_base_url()).map_err(|e| {
            LabError::InvalidConfigValueError {
                field: "eros.base_url".to_string(),
                value: config.eros_base_url().to_string(),
                reason: format!("Invalid URL format: {}", e),
            }
        })?;
        if base_url.cannot_be_a_base() {
            return Err(LabError::InvalidConfigValueError {
                field: "eros.base_url".to_string(),
                value: config.eros_base_url().to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(ErosHttpError::from)?;

        Ok(Self {
            client,
            base_url,
            token: config.eros_token().map(str::to_string),
        })
    }

    fn object_group_url(&self, c2rmf_id: &str) -> std::result::Result<Url, ErosHttpError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ErosHttpError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["rails", "oeuvres", c2rmf_id]);
        Ok(url)
    }

    fn parse_body(
        c2rmf_id: &str,
        body: serde_json::Value,
    ) -> std::result::Result<Option<PartialObjectGroup>, ErosHttpError> {
        match &body {
            serde_json::Value::Null => return Ok(None),
            serde_json::Value::Object(fields) if fields.is_empty() => return Ok(None),
            _ => {}
        }

        let record: ErosObjectGroup =
            serde_json::from_value(body).map_err(|e| ErosHttpError::Decode(e.to_string()))?;

        let object_count = record
            .object_count
            .or(record.nb_obj)
            .ok_or_else(|| ErosHttpError::Decode("missing field `object_count`".to_string()))?;

        Ok(Some(PartialObjectGroup {
            c2rmf_id: c2rmf_id.to_string(),
            label: record.title,
            object_count,
        }))
    }
}

#[async_trait]
impl ObjectGroupFetcher for ErosClient {
    async fn fetch_partial_object_group(
        &self,
        c2rmf_id: &str,
    ) -> std::result::Result<Option<PartialObjectGroup>, ErosHttpError> {
        let url = self.object_group_url(c2rmf_id)?;
        tracing::debug!("Making Eros request to: {}", url);

        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.query(&[("token", token)]);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Eros response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ErosHttpError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let body: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| ErosHttpError::Decode(e.to_string()))?;

        Self::parse_body(c2rmf_id, body)
    }
}
