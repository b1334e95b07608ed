/// How a create/update/delete round trip ended, from the operator's
/// point of view.
///
/// Backend validation rejections (4xx) are routine and get a warning
/// toast; transport failures and 5xx get an error toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Success,
    Warn,
    Error,
}

impl WriteOutcome {
    pub fn classify_status(status: u16) -> Self {
        match status {
            200..=299 => Self::Success,
            400..=499 => Self::Warn,
            _ => Self::Error,
        }
    }

    /// Classifies a finished `ehttp` call. A transport error (no response
    /// at all) is always `Error`.
    pub fn classify(result: &ehttp::Result<ehttp::Response>) -> Self {
        match result {
            Ok(response) => Self::classify_status(response.status),
            Err(_) => Self::Error,
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}
