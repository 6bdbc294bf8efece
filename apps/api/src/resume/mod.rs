// Resume ingestion: document text → fields + stemmed skills → candidate record.
// Everything here except `handlers` is pure and synchronous.

pub mod fields;
pub mod handlers;
pub mod record;
pub mod skills;
pub mod text;
