use crate::domain::model::PartialObjectGroup;
use crate::utils::error::ErosHttpError;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn eros_base_url(&self) -> &str;
    fn eros_token(&self) -> Option<&str>;
    fn request_timeout(&self) -> Duration;
}

/// 從外部參照系統取得物件群組
///
/// 找不到資料時回傳 `Ok(None)`；傳輸或 HTTP 失敗回傳 `ErosHttpError`。
#[async_trait]
pub trait ObjectGroupFetcher: Send + Sync {
    async fn fetch_partial_object_group(
        &self,
        c2rmf_id: &str,
    ) -> Result<Option<PartialObjectGroup>, ErosHttpError>;
}
