pub mod config;
pub mod logging;

pub mod downloader;
pub mod fetch;
pub mod ignore;
pub mod install;
pub mod platform;
pub mod report;
pub mod storage;
pub mod unpack;

#[cfg(test)]
pub(crate) mod test_support;
