#[macro_use] extern crate rocket;

pub mod api;
pub mod routes;
