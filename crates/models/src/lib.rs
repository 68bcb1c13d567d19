//! Entity definitions and their table mapping.
//!
//! `cliente` and `produto` are standalone tables. `aluno` and `curso` are linked
//! many-to-many through the `matricula` join entity; neither side stores the
//! other's ids.

pub mod errors;
pub mod db;
pub mod mapping;
pub mod cliente;
pub mod produto;
pub mod aluno;
pub mod curso;
pub mod matricula;

#[cfg(test)]
mod tests;
