use std::fmt;
use std::str::FromStr;

use sea_orm::{entity::prelude::*, sea_query::Expr, ConnectionTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Status every activity starts with; clients cannot choose it.
pub const DEFAULT_STATUS: &str = "NEW";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub activity_date: DateTimeWithTimeZone,
    #[sea_orm(column_type = "Text")]
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Task,
    Event,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Task, Category::Event];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Task => "TASK",
            Category::Event => "EVENT",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = errors::ModelError;

    /// Exact match only; `task` is not `TASK`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| errors::ModelError::UnknownCategory(s.to_string()))
    }
}

/// Client-settable fields, already checked by whatever validation policy is active.
#[derive(Clone, Debug, PartialEq)]
pub struct NewActivity {
    pub title: String,
    pub category: String,
    pub description: String,
    pub activity_date: DateTimeWithTimeZone,
}

/// Every row, in id order.
pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
    Entity::find().order_by_asc(Column::Id).all(db).await
}

/// Insert with the status forced to [`DEFAULT_STATUS`]; `id` and `created_at` come from the database.
pub async fn insert<C: ConnectionTrait>(db: &C, new: NewActivity) -> Result<Model, DbErr> {
    let am = ActiveModel {
        title: Set(new.title),
        category: Set(new.category),
        description: Set(new.description),
        activity_date: Set(new.activity_date),
        status: Set(DEFAULT_STATUS.to_string()),
        ..Default::default()
    };
    am.insert(db).await
}

/// Overwrite the four client fields of row `id`. Returns the number of rows touched.
pub async fn overwrite<C: ConnectionTrait>(db: &C, id: i32, new: NewActivity) -> Result<u64, DbErr> {
    let res = Entity::update_many()
        .col_expr(Column::Title, Expr::value(new.title))
        .col_expr(Column::Category, Expr::value(new.category))
        .col_expr(Column::Description, Expr::value(new.description))
        .col_expr(Column::ActivityDate, Expr::value(new.activity_date))
        .filter(Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Delete row `id`; zero rows is not an error.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, DbErr> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}
