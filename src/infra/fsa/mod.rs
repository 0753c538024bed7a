//! Client for the UK Food Standards Agency ratings API.

mod client;

pub use client::FsaClient;
