pub mod health;
pub mod reward;
pub mod routes;
