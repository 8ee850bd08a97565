pub mod fetch;
pub mod init;
pub mod parse;
pub mod queries;
