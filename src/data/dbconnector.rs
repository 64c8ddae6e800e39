use anyhow::anyhow;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, Schema, Statement};
use serde_json::Value;

use crate::entity::chart_records;
use crate::entity::helpers::{self, ChartRecord};

pub(crate) trait ChartDbConnection {
    async fn connect(&mut self) -> Result<(), anyhow::Error>;
    async fn check(&self) -> Result<(), anyhow::Error>;
    async fn is_initialized(&self) -> Result<bool, anyhow::Error>;
    async fn initialize(&self) -> Result<(), anyhow::Error>;
    async fn close(&self) -> Result<(), anyhow::Error>;
}

pub struct SQLConnector {
    path: String,
    database_connection: Option<DatabaseConnection>,
}

impl SQLConnector {
    pub fn new(path: &str) -> Self {
        SQLConnector {
            path: path.to_string(),
            database_connection: None,
        }
    }

    fn db(&self) -> Result<&DatabaseConnection, anyhow::Error> {
        self.database_connection
            .as_ref()
            .ok_or_else(|| anyhow!("database connection is not established"))
    }

    pub async fn save_chart(
        &self,
        birth_info: Value,
        chart_data: Value,
    ) -> Result<ChartRecord, anyhow::Error> {
        helpers::save_chart(self.db()?, birth_info, chart_data).await
    }

    pub async fn get_chart(&self, id: i32) -> Result<Option<ChartRecord>, anyhow::Error> {
        helpers::get_chart(self.db()?, id).await
    }

    pub async fn list_charts(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<ChartRecord>, anyhow::Error> {
        helpers::list_charts(self.db()?, limit, offset).await
    }

    pub async fn delete_chart(&self, id: i32) -> Result<bool, anyhow::Error> {
        helpers::delete_chart(self.db()?, id).await
    }
}

impl ChartDbConnection for SQLConnector {
    async fn connect(&mut self) -> Result<(), anyhow::Error> {
        let db =
            Database::connect(format!("sqlite://{}/db.sqlite?mode=rwc", self.path.clone())).await?;

        self.database_connection = Some(db);
        Ok(())
    }
    async fn check(&self) -> Result<(), anyhow::Error> {
        if let Some(ref db) = self.database_connection {
            db.ping().await?;
        }
        Ok(())
    }
    async fn is_initialized(&self) -> Result<bool, anyhow::Error> {
        let db = self.db()?;
        let row = db
            .query_one(Statement::from_string(
                DbBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'chart_records'",
            ))
            .await?;
        Ok(row.is_some())
    }
    async fn initialize(&self) -> Result<(), anyhow::Error> {
        let db = self.db()?;
        let schema = Schema::new(DbBackend::Sqlite);
        let stmt = schema.create_table_from_entity(chart_records::Entity);
        db.execute(db.get_database_backend().build(&stmt)).await?;
        Ok(())
    }
    async fn close(&self) -> Result<(), anyhow::Error> {
        if let Some(ref db) = self.database_connection {
            let db = db.clone();
            db.close().await?;
        }
        Ok(())
    }
}
