use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AuthCodes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AuthCodes::Email).string().not_null())
                    .col(ColumnDef::new(AuthCodes::Code).string().not_null())
                    .col(
                        ColumnDef::new(AuthCodes::IssuedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for "latest code for this email" verification lookups.
        manager
            .create_index(
                Index::create()
                    .table(AuthCodes::Table)
                    .col(AuthCodes::Email)
                    .name("idx_auth_codes_email")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthCodes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AuthCodes {
    Table,
    Id,
    Email,
    Code,
    IssuedAt,
}
