use rfc2141_urn::{InvalidUrn, ScanError, Urn};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

#[tokio::test]
async fn test_bind_and_read_back() {
    let pool = memory_pool().await;
    let urn = Urn::parse("URN:Foo:AbC").unwrap();

    let back: Urn = sqlx::query_scalar("SELECT ?")
        .bind(urn.clone())
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(back, urn);
}

#[tokio::test]
async fn test_null_reads_as_none() {
    let pool = memory_pool().await;

    let value: Option<Urn> = sqlx::query_scalar("SELECT NULL")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(value, None);

    let value: Option<Urn> = sqlx::query_scalar("SELECT 'urn:ns:x'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(value, Some(Urn::parse("urn:ns:x").unwrap()));
}

#[tokio::test]
async fn test_reserved_nid_fails_with_scan_error() {
    let pool = memory_pool().await;

    let err = sqlx::query_scalar::<_, Urn>("SELECT 'urn:urn:x'")
        .fetch_one(&pool)
        .await
        .unwrap_err();

    match err {
        sqlx::Error::ColumnDecode { source, .. } => {
            let scan = source
                .downcast_ref::<ScanError>()
                .expect("decode failure should carry a ScanError");
            assert_eq!(scan, &ScanError::Invalid(InvalidUrn));
        }
        other => panic!("expected a column decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bound_urn_is_stored_as_canonical_text() {
    let pool = memory_pool().await;
    let urn = Urn::parse("URN:FOO:AbC").unwrap();

    let text: String = sqlx::query_scalar("SELECT ?")
        .bind(urn)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(text, "urn:foo:AbC");

    let absent: Option<String> = sqlx::query_scalar("SELECT ?")
        .bind(None::<Urn>)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(absent, None);
}
