pub mod demo;
pub mod grade;
pub mod init;
pub mod serve;
