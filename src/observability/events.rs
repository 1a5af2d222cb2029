//! Event names emitted by the service

pub const SERVER_START: &str = "SERVER_START";
pub const HTTP_REQUEST: &str = "HTTP_REQUEST";
pub const FILE_CREATED: &str = "FILE_CREATED";
pub const FILE_DELETED: &str = "FILE_DELETED";
pub const FILE_NOT_FOUND: &str = "FILE_NOT_FOUND";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
