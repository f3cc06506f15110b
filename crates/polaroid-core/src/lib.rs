pub mod composer;
pub mod config;
pub mod consts;
pub mod error;
pub mod framer;
pub mod geometry;
pub mod io;
pub mod photo;
pub mod progress;
