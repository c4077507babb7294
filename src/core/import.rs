use crate::core::forms::{ObjectGroupImportC2rmfForm, C2RMF_ID_FIELD};
use crate::domain::model::{FormData, ObjectGroup};
use crate::domain::ports::ObjectGroupFetcher;
use crate::utils::error::Result;

pub struct ImportEngine<F: ObjectGroupFetcher> {
    form: ObjectGroupImportC2rmfForm<F>,
}

impl<F: ObjectGroupFetcher> ImportEngine<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            form: ObjectGroupImportC2rmfForm::new(fetcher),
        }
    }

    pub async fn run(&self, c2rmf_id: &str) -> Result<ObjectGroup> {
        tracing::info!("Starting object group import for {}", c2rmf_id);

        let data = FormData::from([(C2RMF_ID_FIELD.to_string(), c2rmf_id.to_string())]);

        // Validate
        let cleaned = self.form.full_clean(&data).await?;
        tracing::info!("Validated {} against Eros", cleaned.c2rmf_id);

        // Build
        let object_group = ObjectGroup::try_from(cleaned)?;
        tracing::info!(
            "Imported '{}' ({} objects)",
            object_group.label,
            object_group.object_count
        );

        Ok(object_group)
    }
}
