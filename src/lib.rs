#![forbid(unsafe_code)]

pub mod cli;
pub mod client;
pub mod form;
pub mod logging;
pub mod options;
pub mod submit;
