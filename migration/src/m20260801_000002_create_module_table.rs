use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Module {
    Table,
    Id,
    Title,
    Description,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Account {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Module::Table)
                .col(ColumnDef::new(Module::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Module::Title).string_len(30).not_null())
                .col(ColumnDef::new(Module::Description).text().not_null())
                .col(ColumnDef::new(Module::OwnerId).uuid().not_null())
                .col(ColumnDef::new(Module::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Module::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_module_owner")
                        .from(Module::Table, Module::OwnerId)
                        .to(Account::Table, Account::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_module_owner_id")
                .table(Module::Table)
                .col(Module::OwnerId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_index(Index::drop().name("idx_module_owner_id").table(Module::Table).to_owned()).await?;
        m.drop_table(Table::drop().table(Module::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
