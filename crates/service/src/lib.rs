//! Storage access and the thin services built on top of it.
//! - `repository`: generic find-all / find-by-id / save / delete per entity.
//! - `cliente_service`: pass-through used by the `/clientes` routes.
//! - `matricula_service`: the course/student join table.

pub mod errors;
pub mod repository;
pub mod cliente_service;
pub mod matricula_service;
#[cfg(test)]
pub mod test_support;
