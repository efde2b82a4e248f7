pub mod block;
pub mod cardinal;
pub mod language;
pub mod response;
