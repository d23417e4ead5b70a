mod backend;

pub use backend::{BackendGateway, EMPTY_ANSWER_FALLBACK};
