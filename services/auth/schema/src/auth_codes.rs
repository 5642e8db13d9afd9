use sea_orm::entity::prelude::*;

/// One-time numeric login code issued to an email address.
/// Rows are append-only; only the most recently issued code per email is
/// accepted at verification, and expiry (10 minutes) is checked lazily.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auth_codes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub issued_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
