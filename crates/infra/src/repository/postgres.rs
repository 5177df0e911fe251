//! Postgres-backed product repository.
//!
//! ## Error Mapping
//!
//! SQLx errors are mapped to `RepositoryError` as follows:
//!
//! | SQLx Error | PostgreSQL Error Code | RepositoryError | Scenario |
//! |------------|----------------------|-----------------|----------|
//! | Database (unique violation) | `23505` | `Conflict` | Duplicate primary key |
//! | Database (check constraint violation) | `23514` | `Conflict` | Row violates a column check (e.g. `stock >= 0`) |
//! | Database (other) | Any other | `Storage` | Other database errors |
//! | PoolClosed | N/A | `Storage` | Connection pool was closed |
//! | Other | N/A | `Storage` | Network errors, connection failures, etc. |
//!
//! Rows that no longer satisfy the product invariants are reported as `Storage`
//! errors rather than silently skipped.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use tracing::instrument;

use catalog_application::{ProductRepository, RepositoryError, RepositoryResult};
use catalog_products::{Product, ProductId};

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id          BIGSERIAL PRIMARY KEY,
    name        VARCHAR(100) NOT NULL,
    description VARCHAR(500) NOT NULL DEFAULT '',
    price       NUMERIC(18, 2) NOT NULL CHECK (price >= 0),
    stock       INTEGER NOT NULL CHECK (stock >= 0)
)
"#;

/// Product repository over a `products` table.
///
/// The pool is cheap to clone and safe to share across tasks. Each method issues
/// a single statement; there is no optimistic concurrency, so concurrent updates
/// to the same row are last-writer-wins.
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> RepositoryResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        Ok(Self::new(pool))
    }

    /// Create the `products` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> RepositoryResult<()> {
        sqlx::query(CREATE_PRODUCTS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("ensure_schema", e))?;
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    #[instrument(skip(self), fields(product_id = %id), err)]
    async fn get_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, price, stock
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_by_id", e))?;

        row.as_ref().map(product_from_row).transpose()
    }

    #[instrument(skip(self), err)]
    async fn get_all(&self) -> RepositoryResult<Vec<Product>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, price, stock
            FROM products
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_all", e))?;

        rows.iter().map(product_from_row).collect()
    }

    #[instrument(skip(self, product), fields(name = %product.name()), err)]
    async fn add(&self, product: Product) -> RepositoryResult<ProductId> {
        let row = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, stock)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(product.name())
        .bind(product.description())
        .bind(product.price())
        .bind(product.stock())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("add", e))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(format!("failed to read assigned id: {e}")))?;
        Ok(ProductId::from_raw(id))
    }

    #[instrument(skip(self, product), fields(product_id = %product.id_typed()), err)]
    async fn update(&self, product: &Product) -> RepositoryResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2,
                description = $3,
                price = $4,
                stock = $5
            WHERE id = $1
            "#,
        )
        .bind(product.id_typed().get())
        .bind(product.name())
        .bind(product.description())
        .bind(product.price())
        .bind(product.stock())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update", e))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), fields(product_id = %id), err)]
    async fn delete(&self, id: ProductId) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn product_from_row(row: &PgRow) -> RepositoryResult<Product> {
    let read_err = |e: sqlx::Error| RepositoryError::Storage(format!("failed to read product row: {e}"));

    let id: i64 = row.try_get("id").map_err(read_err)?;
    let name: String = row.try_get("name").map_err(read_err)?;
    let description: String = row.try_get("description").map_err(read_err)?;
    let price: Decimal = row.try_get("price").map_err(read_err)?;
    let stock: i32 = row.try_get("stock").map_err(read_err)?;

    Product::with_id(ProductId::from_raw(id), name, description, price, stock)
        .map_err(|e| RepositoryError::Storage(format!("stored product {id} is invalid: {e}")))
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db_err) => {
            let msg = format!("database error in {}: {}", operation, db_err.message());
            match db_err.code().as_deref() {
                Some("23505") | Some("23514") => RepositoryError::Conflict(msg),
                _ => RepositoryError::Storage(msg),
            }
        }
        sqlx::Error::PoolClosed => {
            RepositoryError::Storage(format!("connection pool closed in {operation}"))
        }
        _ => RepositoryError::Storage(format!("sqlx error in {operation}: {err}")),
    }
}
