/// Endpoint every submission is posted to.
pub const UPLOAD_URL: &str = "http://localhost:8080/multipart";

/// Field name repeated once per uploaded file.
pub const FILES_FIELD: &str = "files[]";

/// Prefix of the alert raised for a non-2xx response.
pub const ERROR_PREFIX: &str = "Error :";
