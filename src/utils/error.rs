use thiserror::Error;

/// Eros 參照系統呼叫失敗（傳輸層或 HTTP 層）
#[derive(Error, Debug)]
pub enum ErosHttpError {
    #[error("Eros request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Eros responded with HTTP status {status}")]
    Status { status: u16 },

    #[error("Eros response could not be decoded: {0}")]
    Decode(String),

    #[error("Invalid Eros URL: {0}")]
    InvalidUrl(String),
}

/// 表單驗證錯誤，可由使用者修正
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("This field is required.")]
    Required { field: &'static str },

    #[error("Invalid C2RMF identifier \"{value}\": expected C2RMF followed by 5 digits.")]
    InvalidC2rmfId { value: String },

    #[error("No object group matching {c2rmf_id} was found in Eros.")]
    ObjectGroupNotFound { c2rmf_id: String },

    #[error("Import of {c2rmf_id} failed: an error occurred while contacting Eros.")]
    ErosImportFailed {
        c2rmf_id: String,
        #[source]
        source: ErosHttpError,
    },
}

impl ValidationError {
    /// 欄位錯誤回傳欄位名稱；整張表單的錯誤回傳 `None`
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::Required { field } => Some(*field),
            ValidationError::InvalidC2rmfId { .. } => Some("c2rmf_id"),
            ValidationError::ObjectGroupNotFound { .. }
            | ValidationError::ErosImportFailed { .. } => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Required { .. } => "required",
            ValidationError::InvalidC2rmfId { .. } => "invalid",
            ValidationError::ObjectGroupNotFound { .. } => "not_found",
            ValidationError::ErosImportFailed { .. } => "eros_error",
        }
    }
}

#[derive(Error, Debug)]
pub enum LabError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Eros(#[from] ErosHttpError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

impl LabError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            LabError::ConfigValidationError { .. } | LabError::InvalidConfigValueError { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LabError::Validation(ValidationError::Required { .. })
            | LabError::Validation(ValidationError::InvalidC2rmfId { .. }) => {
                "Provide an identifier such as C2RMF00000"
            }
            LabError::Validation(ValidationError::ObjectGroupNotFound { .. }) => {
                "Check the identifier in Eros, or create the object group manually"
            }
            LabError::Validation(ValidationError::ErosImportFailed { .. }) | LabError::Eros(_) => {
                "Eros may be unavailable; check the base URL and token, then try again later"
            }
            LabError::IoError(_) => "Check that the file exists and is readable",
            LabError::ProcessingError { .. } => {
                "Report this problem with the identifier that triggered it"
            }
            _ => "Check the configuration file and command-line flags",
        }
    }

    /// 0 成功；2 使用者可修正的驗證錯誤；1 設定錯誤；3 其他錯誤
    pub fn exit_code(&self) -> i32 {
        match self {
            LabError::Validation(_) => 2,
            e if e.is_config_error() => 1,
            _ => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, LabError>;
