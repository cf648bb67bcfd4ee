/// Lifecycle of one request-backed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl RequestStatus {
    pub fn is_loading(self) -> bool {
        self == RequestStatus::Loading
    }

    /// Whether the last request finished, successfully or not.
    pub fn is_settled(self) -> bool {
        matches!(self, RequestStatus::Succeeded | RequestStatus::Failed)
    }

    pub fn is_succeeded(self) -> bool {
        self == RequestStatus::Succeeded
    }

    pub fn is_failed(self) -> bool {
        self == RequestStatus::Failed
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RequestStatus::Idle => "idle",
            RequestStatus::Loading => "loading",
            RequestStatus::Succeeded => "succeeded",
            RequestStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}
