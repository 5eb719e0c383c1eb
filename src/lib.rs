// src/lib.rs

//! bscout Library

pub mod catalog;
pub mod error;
pub mod forms;
pub mod models;
pub mod preflight;
pub mod search;
pub mod services;
pub mod storage;
