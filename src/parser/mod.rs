pub mod profile_parser;
pub mod store_parser;

pub use profile_parser::ProfileParser;
pub use store_parser::StoreParser;
