use crate::utils::error::{LabError, ValidationError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

// 只接受 ASCII 數字
static C2RMF_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^C2RMF[0-9]{5}$").unwrap());

/// 表單送出的原始欄位值
pub type FormData = HashMap<String, String>;

/// C2RMF/Eros 物件群組識別碼，例如 `C2RMF00000`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct C2rmfId(String);

impl C2rmfId {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if C2RMF_ID_PATTERN.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ValidationError::InvalidC2rmfId {
                value: value.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for C2rmfId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for C2rmfId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<C2rmfId> for String {
    fn from(id: C2rmfId) -> Self {
        id.0
    }
}

/// Eros 回傳的部分物件群組資料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialObjectGroup {
    pub c2rmf_id: String,
    pub label: String,
    pub object_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectGroupCleanedData {
    pub c2rmf_id: C2rmfId,
    pub label: Option<String>,
    pub object_count: Option<u32>,
}

impl ObjectGroupCleanedData {
    pub fn new(c2rmf_id: C2rmfId) -> Self {
        Self {
            c2rmf_id,
            label: None,
            object_count: None,
        }
    }

    pub fn is_enriched(&self) -> bool {
        self.label.is_some() && self.object_count.is_some()
    }

    /// 只合併 label 與 object_count，識別碼保留使用者輸入的值
    pub fn merged_with(&self, partial: PartialObjectGroup) -> Self {
        Self {
            c2rmf_id: self.c2rmf_id.clone(),
            label: Some(partial.label),
            object_count: Some(partial.object_count),
        }
    }
}

/// 實驗室追蹤的一組實體物件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectGroup {
    pub c2rmf_id: Option<C2rmfId>,
    pub label: String,
    pub object_count: u32,
    pub dating: Option<String>,
    pub materials: Vec<String>,
    pub inventory: Option<String>,
    pub collection: Option<String>,
}

impl ObjectGroup {
    /// 手動建立（非 Eros 匯入）的物件群組
    pub fn new(label: impl Into<String>, object_count: u32) -> Result<Self, LabError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(LabError::ProcessingError {
                message: "Object group label cannot be empty".to_string(),
            });
        }
        if object_count == 0 {
            return Err(LabError::ProcessingError {
                message: "Object group must contain at least one object".to_string(),
            });
        }
        Ok(Self {
            c2rmf_id: None,
            label,
            object_count,
            dating: None,
            materials: Vec::new(),
            inventory: None,
            collection: None,
        })
    }

    pub fn is_imported(&self) -> bool {
        self.c2rmf_id.is_some()
    }
}

impl TryFrom<ObjectGroupCleanedData> for ObjectGroup {
    type Error = LabError;

    fn try_from(data: ObjectGroupCleanedData) -> Result<Self, Self::Error> {
        match (data.label, data.object_count) {
            (Some(label), Some(object_count)) => Ok(Self {
                c2rmf_id: Some(data.c2rmf_id),
                label,
                object_count,
                dating: None,
                materials: Vec::new(),
                inventory: None,
                collection: None,
            }),
            _ => Err(LabError::ProcessingError {
                message: format!(
                    "Cleaned data for {} has not been enriched from Eros",
                    data.c2rmf_id
                ),
            }),
        }
    }
}
