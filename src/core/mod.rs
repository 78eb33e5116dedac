//! Core layer - query contracts and services shared by the action handlers

pub mod queries;
pub mod services;
