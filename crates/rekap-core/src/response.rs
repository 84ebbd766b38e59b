use serde::Serialize;

/// `{"data": ...}` envelope used by read endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
