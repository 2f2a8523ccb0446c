mod request_id;

pub use request_id::{request_id, REQUEST_ID_HEADER};
