//! Object-group import form backed by the Eros reference system.
//!
//! Field cleaning checks the submitted identifier; [`ObjectGroupImportC2rmfForm::clean`]
//! then fetches the record once and either enriches the cleaned data with its
//! label and object count or reports a form-wide validation error.

use crate::domain::model::{C2rmfId, FormData, ObjectGroupCleanedData};
use crate::domain::ports::ObjectGroupFetcher;
use crate::utils::error::ValidationError;

pub const C2RMF_ID_FIELD: &str = "c2rmf_id";

pub struct ObjectGroupImportC2rmfForm<F: ObjectGroupFetcher> {
    fetcher: F,
}

impl<F: ObjectGroupFetcher> ObjectGroupImportC2rmfForm<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn clean_c2rmf_id(data: &FormData) -> Result<C2rmfId, ValidationError> {
        match data.get(C2RMF_ID_FIELD) {
            Some(value) if !value.trim().is_empty() => C2rmfId::parse(value),
            _ => Err(ValidationError::Required {
                field: C2RMF_ID_FIELD,
            }),
        }
    }

    /// Fetches the object group from Eros and returns an enriched copy of
    /// `cleaned_data`. The input is left untouched whatever the outcome.
    pub async fn clean(
        &self,
        cleaned_data: &ObjectGroupCleanedData,
    ) -> Result<ObjectGroupCleanedData, ValidationError> {
        let c2rmf_id = cleaned_data.c2rmf_id.as_str();

        let fetched = self
            .fetcher
            .fetch_partial_object_group(c2rmf_id)
            .await
            .map_err(|source| {
                tracing::warn!("Eros fetch failed for {}: {}", c2rmf_id, source);
                ValidationError::ErosImportFailed {
                    c2rmf_id: c2rmf_id.to_string(),
                    source,
                }
            })?;

        match fetched {
            Some(partial) => {
                tracing::debug!(
                    "Eros returned '{}' ({} objects) for {}",
                    partial.label,
                    partial.object_count,
                    c2rmf_id
                );
                Ok(cleaned_data.merged_with(partial))
            }
            None => {
                tracing::warn!("No object group found in Eros for {}", c2rmf_id);
                Err(ValidationError::ObjectGroupNotFound {
                    c2rmf_id: c2rmf_id.to_string(),
                })
            }
        }
    }

    pub async fn full_clean(
        &self,
        data: &FormData,
    ) -> Result<ObjectGroupCleanedData, ValidationError> {
        let c2rmf_id = Self::clean_c2rmf_id(data)?;
        self.clean(&ObjectGroupCleanedData::new(c2rmf_id)).await
    }
}
