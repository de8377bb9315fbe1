//! Statement helpers shared by the adapter operations.
//!
//! Entities carry a compile-time table name, but the physical table comes from
//! the model mapping at runtime, so statements are built with sea-query against
//! an [`Alias`] of the mapped name and decoded into the entity models with
//! `FromQueryResult`.

use sea_orm::sea_query::{
    Alias, DeleteStatement, DynIden, Expr, InsertStatement, IntoIden, Query, SelectStatement,
    SimpleExpr, UpdateStatement,
};
use sea_orm::{ColumnTrait, ConnectionTrait, FromQueryResult, StatementBuilder, Value};
use time::OffsetDateTime;

use crate::config::SchemaVariant;
use crate::convert::to_db;
use crate::error::{AdapterError, Result};

/// Columns that hold entity ids. Integers under the legacy variant.
const ID_COLUMNS: [&str; 2] = ["id", "user_id"];

/// Type name used to read legacy integer ids back as text.
const ID_TEXT_TYPE: &str = "TEXT";

pub(crate) fn table(name: &str) -> Alias {
    Alias::new(name)
}

/// Converts an id from the adapter boundary into a bindable value.
///
/// Returns `None` when the id cannot exist under `variant`; such lookups match
/// nothing. Legacy ids must be integers in the form the adapter hands out, so
/// `"+12"` or `"012"` never alias row `12`.
pub(crate) fn id_value(variant: SchemaVariant, id: &str) -> Option<Value> {
    match variant {
        SchemaVariant::Current => Some(Value::from(id.to_owned())),
        SchemaVariant::Legacy => id
            .parse::<i32>()
            .ok()
            .filter(|n| n.to_string() == id)
            .map(Value::from),
    }
}

/// `SELECT` of every column of entity column set `C` from `table_name`.
///
/// Legacy id columns are cast to text so rows decode into the string-keyed
/// entity models under both variants.
pub(crate) fn select<C>(table_name: &str, variant: SchemaVariant) -> SelectStatement
where
    C: ColumnTrait,
{
    let mut stmt = Query::select();
    for column in C::iter() {
        if variant.is_legacy() && ID_COLUMNS.contains(&column.as_str()) {
            stmt.expr_as(Expr::col(column).cast_as(Alias::new(ID_TEXT_TYPE)), column);
        } else {
            stmt.column(column);
        }
    }
    stmt.from(table(table_name));
    stmt
}

/// Condition for rows still active at `now`. A row whose expiry equals `now`
/// is still active, matching the `<` used when collecting expired rows.
pub(crate) fn not_expired<C>(column: C, now: OffsetDateTime) -> SimpleExpr
where
    C: ColumnTrait,
{
    Expr::col(column).gte(to_db(now))
}

/// Wraps a bindable value as an expression.
pub(crate) fn val<V: Into<Value>>(value: V) -> SimpleExpr {
    SimpleExpr::Value(value.into())
}

pub(crate) fn update(table_name: &str) -> UpdateStatement {
    let mut stmt = Query::update();
    stmt.table(table(table_name));
    stmt
}

pub(crate) fn delete(table_name: &str) -> DeleteStatement {
    let mut stmt = Query::delete();
    stmt.from_table(table(table_name));
    stmt
}

/// Column/value pairs of a row about to be inserted.
#[derive(Default)]
pub(crate) struct NewRow {
    columns: Vec<DynIden>,
    values: Vec<SimpleExpr>,
}

impl NewRow {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set<C, V>(mut self, column: C, value: V) -> Self
    where
        C: IntoIden,
        V: Into<Value>,
    {
        self.columns.push(column.into_iden());
        self.values.push(val(value));
        self
    }

    fn into_statement(self, table_name: &str) -> Result<InsertStatement> {
        let mut stmt = Query::insert();
        stmt.into_table(table(table_name))
            .columns(self.columns)
            .values(self.values)?;
        Ok(stmt)
    }
}

/// Inserts `row` into `table_name` and returns the row's id as a string.
///
/// Under [`SchemaVariant::Current`] the adapter generates the id; under
/// [`SchemaVariant::Legacy`] the database assigns it and it is read back with
/// `RETURNING` where the backend supports it, or from the last insert id.
pub(crate) async fn insert<C, I>(
    conn: &C,
    variant: SchemaVariant,
    table_name: &str,
    id_column: I,
    row: NewRow,
) -> Result<String>
where
    C: ConnectionTrait,
    I: ColumnTrait,
{
    let backend = conn.get_database_backend();

    match variant {
        SchemaVariant::Current => {
            let id = crate::id::generate_id();
            let stmt = row.set(id_column, id.clone()).into_statement(table_name)?;
            conn.execute(backend.build(&stmt)).await?;
            Ok(id)
        }
        SchemaVariant::Legacy => {
            let mut stmt = row.into_statement(table_name)?;
            if backend.support_returning() {
                stmt.returning_col(id_column);
                let returned = conn
                    .query_one(backend.build(&stmt))
                    .await?
                    .ok_or_else(|| AdapterError::Backend("insert returned no row".to_string()))?;
                let id: i32 = returned.try_get("", id_column.as_str())?;
                Ok(id.to_string())
            } else {
                let result = conn.execute(backend.build(&stmt)).await?;
                Ok(result.last_insert_id().to_string())
            }
        }
    }
}

/// Runs `stmt` and decodes at most one row into `M`.
pub(crate) async fn fetch_one<M, C>(conn: &C, stmt: &SelectStatement) -> Result<Option<M>>
where
    M: FromQueryResult,
    C: ConnectionTrait,
{
    let backend = conn.get_database_backend();
    let model = M::find_by_statement(backend.build(stmt)).one(conn).await?;
    Ok(model)
}

/// Runs a write statement and returns the number of affected rows.
pub(crate) async fn execute<C, S>(conn: &C, stmt: &S) -> Result<u64>
where
    C: ConnectionTrait,
    S: StatementBuilder,
{
    let backend = conn.get_database_backend();
    let result = conn.execute(backend.build(stmt)).await?;
    Ok(result.rows_affected())
}
