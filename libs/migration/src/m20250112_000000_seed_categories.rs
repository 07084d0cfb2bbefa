use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Categories are managed outside this API; seed a baseline set so
        // product writes have something to reference.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT INTO categories (id, name, minimum_stock)
            VALUES
                (1, 'Elektronik', 5),
                (2, 'Giyim', 10),
                (3, 'Gıda', 20)
            ON CONFLICT (id) DO NOTHING
            "#,
            )
            .await?;

        // Keep the sequence ahead of the explicit ids.
        manager
            .get_connection()
            .execute_unprepared(
                "SELECT setval(pg_get_serial_sequence('categories', 'id'), (SELECT MAX(id) FROM categories))",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM categories WHERE id IN (1, 2, 3)")
            .await?;

        Ok(())
    }
}
