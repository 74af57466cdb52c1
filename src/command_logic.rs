pub mod init;
pub mod posts;
pub mod shell;
