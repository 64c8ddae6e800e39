use anyhow::Context;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
};
use serde::Serialize;
use serde_json::Value;

use crate::entity::chart_records;

/// A persisted chart together with the input it was computed from.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartRecord {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub birth_info: Value,
    pub chart_data: Value,
}

impl From<chart_records::Model> for ChartRecord {
    fn from(model: chart_records::Model) -> Self {
        ChartRecord {
            id: model.id,
            created_at: model.created_at,
            birth_info: model.birth_payload,
            chart_data: model.chart_data,
        }
    }
}

pub async fn save_chart(
    db: &DatabaseConnection,
    birth_info: Value,
    chart_data: Value,
) -> anyhow::Result<ChartRecord> {
    let row = chart_records::ActiveModel {
        created_at: Set(Utc::now()),
        birth_payload: Set(birth_info),
        chart_data: Set(chart_data),
        ..Default::default()
    };

    let model = row
        .insert(db)
        .await
        .context("failed to insert chart record")?;
    Ok(model.into())
}

pub async fn get_chart(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<ChartRecord>> {
    let model = chart_records::Entity::find_by_id(id)
        .one(db)
        .await
        .context("failed to fetch chart record")?;
    Ok(model.map(ChartRecord::from))
}

/// Most recently saved first.
pub async fn list_charts(
    db: &DatabaseConnection,
    limit: u64,
    offset: u64,
) -> anyhow::Result<Vec<ChartRecord>> {
    let models = chart_records::Entity::find()
        .order_by_desc(chart_records::Column::Id)
        .limit(limit)
        .offset(offset)
        .all(db)
        .await
        .context("failed to list chart records")?;
    Ok(models.into_iter().map(ChartRecord::from).collect())
}

pub async fn delete_chart(db: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = chart_records::Entity::delete_by_id(id)
        .exec(db)
        .await
        .context("failed to delete chart record")?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Database, DbBackend, Schema};
    use serde_json::json;

    async fn test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let schema = Schema::new(DbBackend::Sqlite);
        let stmt = schema.create_table_from_entity(chart_records::Entity);
        db.execute(db.get_database_backend().build(&stmt))
            .await
            .unwrap();
        db
    }

    fn birth_payload() -> Value {
        json!({
            "year": 1990,
            "month": 6,
            "day": 24,
            "hour": 12,
            "is_lunar": false,
            "is_intercalation": false,
            "gender": "M",
        })
    }

    fn chart_payload() -> Value {
        json!({
            "ming_gong": 1,
            "guo_shu": 2,
            "jami_position": 1,
            "summary": "test",
        })
    }

    #[tokio::test]
    async fn save_then_get_round_trips() {
        let db = test_db().await;

        let record = save_chart(&db, birth_payload(), chart_payload())
            .await
            .unwrap();
        let fetched = get_chart(&db, record.id).await.unwrap().unwrap();

        assert_eq!(fetched.birth_info, birth_payload());
        assert_eq!(fetched.chart_data, chart_payload());
        assert_eq!(fetched.id, record.id);
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let db = test_db().await;

        let first = save_chart(&db, birth_payload(), chart_payload())
            .await
            .unwrap();
        let second = save_chart(&db, birth_payload(), chart_payload())
            .await
            .unwrap();
        assert!(second.id > first.id);

        let listed = list_charts(&db, 10, 0).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);

        let paged = list_charts(&db, 1, 1).await.unwrap();
        assert_eq!(paged.len(), 1);
        assert_eq!(paged[0].id, first.id);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let db = test_db().await;

        let record = save_chart(&db, birth_payload(), chart_payload())
            .await
            .unwrap();
        assert!(delete_chart(&db, record.id).await.unwrap());
        assert!(get_chart(&db, record.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_on_absent_id_returns_false() {
        let db = test_db().await;
        assert!(!delete_chart(&db, 12345).await.unwrap());
    }
}
