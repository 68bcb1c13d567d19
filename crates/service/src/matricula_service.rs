use std::collections::BTreeSet;

use sea_orm::{
    sea_query::OnConflict, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::{info, instrument};

use models::{aluno, curso, matricula};
use crate::{errors::ServiceError, repository::save_entity};

/// Enrollments between courses and students.
///
/// The `matriculas` table is the only record of who takes what. Lookups in
/// either direction are queries against it.
#[derive(Clone)]
pub struct MatriculaService {
    db: DatabaseConnection,
}

fn insert_pairs(
    pairs: impl IntoIterator<Item = (i64, i64)>,
) -> Option<sea_orm::Insert<matricula::ActiveModel>> {
    let rows: Vec<matricula::ActiveModel> = pairs
        .into_iter()
        .map(|(curso_id, aluno_id)| matricula::ActiveModel { curso_id: Set(curso_id), aluno_id: Set(aluno_id) })
        .collect();
    if rows.is_empty() {
        return None;
    }
    Some(
        matricula::Entity::insert_many(rows).on_conflict(
            OnConflict::columns([matricula::Column::CursoId, matricula::Column::AlunoId])
                .do_nothing()
                .to_owned(),
        ),
    )
}

async fn ensure_exists<E, C>(conn: &C, id: i64, what: &str) -> Result<(), ServiceError>
where
    E: EntityTrait,
    E::PrimaryKey: sea_orm::PrimaryKeyTrait<ValueType = i64>,
    C: ConnectionTrait,
{
    E::find_by_id(id)
        .one(conn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .map(|_| ())
        .ok_or_else(|| ServiceError::not_found(what))
}

impl MatriculaService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Enroll one student. Returns `false` when the pair already existed.
    #[instrument(skip(self))]
    pub async fn matricular(&self, curso_id: i64, aluno_id: i64) -> Result<bool, ServiceError> {
        ensure_exists::<curso::Entity, _>(&self.db, curso_id, "curso").await?;
        ensure_exists::<aluno::Entity, _>(&self.db, aluno_id, "aluno").await?;
        let inserted = match insert_pairs([(curso_id, aluno_id)]) {
            Some(insert) => insert
                .exec_without_returning(&self.db)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?,
            None => 0,
        };
        Ok(inserted > 0)
    }

    /// Remove one enrollment. Returns `false` when there was nothing to remove.
    #[instrument(skip(self))]
    pub async fn desmatricular(&self, curso_id: i64, aluno_id: i64) -> Result<bool, ServiceError> {
        let res = matricula::Entity::delete_by_id((curso_id, aluno_id))
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }

    /// Save a course and make `aluno_ids` its exact student set.
    ///
    /// Duplicated ids collapse to one pair. Saving the same set again leaves
    /// the join table untouched.
    #[instrument(skip(self, curso, aluno_ids))]
    pub async fn salvar_curso(
        &self,
        curso: curso::ActiveModel,
        aluno_ids: impl IntoIterator<Item = i64>,
    ) -> Result<curso::Model, ServiceError> {
        let wanted: BTreeSet<i64> = aluno_ids.into_iter().collect();

        let txn = self.db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        let saved = save_entity::<curso::Entity, _>(&txn, curso).await?;

        let current: BTreeSet<i64> = matricula::Entity::find()
            .filter(matricula::Column::CursoId.eq(saved.id))
            .all(&txn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .into_iter()
            .map(|m| m.aluno_id)
            .collect();

        let stale: Vec<i64> = current.difference(&wanted).copied().collect();
        if !stale.is_empty() {
            matricula::Entity::delete_many()
                .filter(matricula::Column::CursoId.eq(saved.id))
                .filter(matricula::Column::AlunoId.is_in(stale.clone()))
                .exec(&txn)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?;
        }

        let missing: Vec<i64> = wanted.difference(&current).copied().collect();
        for aluno_id in &missing {
            ensure_exists::<aluno::Entity, _>(&txn, *aluno_id, "aluno").await?;
        }
        if let Some(insert) = insert_pairs(missing.iter().map(|aluno_id| (saved.id, *aluno_id))) {
            insert
                .exec_without_returning(&txn)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?;
        }

        txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        info!(curso_id = saved.id, added = missing.len(), removed = stale.len(), "curso saved");
        Ok(saved)
    }

    /// Students enrolled in a course, ordered by id.
    pub async fn alunos_do_curso(&self, curso_id: i64) -> Result<Vec<aluno::Model>, ServiceError> {
        aluno::Entity::find()
            .inner_join(matricula::Entity)
            .filter(matricula::Column::CursoId.eq(curso_id))
            .order_by_asc(aluno::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    /// Courses a student is enrolled in, ordered by id.
    pub async fn cursos_do_aluno(&self, aluno_id: i64) -> Result<Vec<curso::Model>, ServiceError> {
        curso::Entity::find()
            .inner_join(matricula::Entity)
            .filter(matricula::Column::AlunoId.eq(aluno_id))
            .order_by_asc(curso::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    /// Raw pairs for one course; used to check the join table directly.
    pub async fn matriculas_do_curso(&self, curso_id: i64) -> Result<Vec<matricula::Model>, ServiceError> {
        matricula::Entity::find()
            .filter(matricula::Column::CursoId.eq(curso_id))
            .order_by_asc(matricula::Column::AlunoId)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::IntoActiveModel;
    use models::{aluno::AlunoInput, curso::CursoInput};
    use crate::{
        repository::{Repository, SeaOrmRepository},
        test_support::get_db,
    };

    async fn seed_alunos(db: &DatabaseConnection, nomes: &[&str]) -> Result<Vec<aluno::Model>, anyhow::Error> {
        let repo = SeaOrmRepository::<aluno::Entity>::new(db.clone());
        let mut out = Vec::new();
        for nome in nomes {
            let input = AlunoInput { nome: Some(nome.to_string()), ..Default::default() };
            out.push(repo.save(input.into_active_model()).await?);
        }
        Ok(out)
    }

    fn novo_curso(nome: &str) -> curso::ActiveModel {
        CursoInput { id: None, nome: Some(nome.to_string()) }.into_active_model()
    }

    #[tokio::test]
    async fn saving_course_with_two_students_writes_two_pairs() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = MatriculaService::new(db.clone());
        let alunos = seed_alunos(&db, &["Ana", "Bruno"]).await?;
        let ids = [alunos[0].id, alunos[1].id];

        let curso = svc.salvar_curso(novo_curso("Rust"), ids).await?;
        assert_eq!(svc.matriculas_do_curso(curso.id).await?.len(), 2);

        // same association again, plus a duplicated id in the input
        let again = CursoInput { id: Some(curso.id), nome: Some("Rust".into()) }.into_active_model();
        let curso2 = svc.salvar_curso(again, [ids[0], ids[1], ids[1]]).await?;
        assert_eq!(curso2.id, curso.id);

        let pairs = svc.matriculas_do_curso(curso.id).await?;
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], matricula::Model { curso_id: curso.id, aluno_id: ids[0] });
        assert_eq!(pairs[1], matricula::Model { curso_id: curso.id, aluno_id: ids[1] });
        Ok(())
    }

    #[tokio::test]
    async fn saving_course_replaces_student_set() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = MatriculaService::new(db.clone());
        let alunos = seed_alunos(&db, &["Ana", "Bruno", "Carla"]).await?;

        let curso = svc.salvar_curso(novo_curso("SQL"), [alunos[0].id, alunos[1].id]).await?;
        let update = CursoInput { id: Some(curso.id), nome: Some("SQL Avancado".into()) }.into_active_model();
        let curso = svc.salvar_curso(update, [alunos[1].id, alunos[2].id]).await?;

        assert_eq!(curso.nome.as_deref(), Some("SQL Avancado"));
        let ids: Vec<i64> = svc.alunos_do_curso(curso.id).await?.into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![alunos[1].id, alunos[2].id]);
        Ok(())
    }

    #[tokio::test]
    async fn lookups_work_in_both_directions() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = MatriculaService::new(db.clone());
        let alunos = seed_alunos(&db, &["Ana", "Bruno"]).await?;

        let rust = svc.salvar_curso(novo_curso("Rust"), [alunos[0].id]).await?;
        let sql = svc.salvar_curso(novo_curso("SQL"), Vec::<i64>::new()).await?;
        assert!(svc.matricular(sql.id, alunos[0].id).await?);
        assert!(!svc.matricular(sql.id, alunos[0].id).await?);
        assert!(svc.matricular(sql.id, alunos[1].id).await?);

        let cursos: Vec<i64> = svc.cursos_do_aluno(alunos[0].id).await?.into_iter().map(|c| c.id).collect();
        assert_eq!(cursos, vec![rust.id, sql.id]);
        let cursos_bruno = svc.cursos_do_aluno(alunos[1].id).await?;
        assert_eq!(cursos_bruno.len(), 1);
        assert_eq!(cursos_bruno[0].id, sql.id);

        assert!(svc.desmatricular(sql.id, alunos[0].id).await?);
        assert!(!svc.desmatricular(sql.id, alunos[0].id).await?);
        let restantes: Vec<i64> = svc.alunos_do_curso(sql.id).await?.into_iter().map(|a| a.id).collect();
        assert_eq!(restantes, vec![alunos[1].id]);
        Ok(())
    }

    #[tokio::test]
    async fn enrolling_unknown_student_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = MatriculaService::new(db.clone());
        let curso = svc.salvar_curso(novo_curso("Rust"), Vec::<i64>::new()).await?;

        let err = svc.matricular(curso.id, 404).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = svc.salvar_curso(novo_curso("Go"), [404]).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }
}
