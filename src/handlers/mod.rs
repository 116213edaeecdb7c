//! HTTP handlers for employee CRUD.

pub mod employee;
