use super::*;

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_flush_fixtures() {
    let mut client = MockNodeClient::new();
    client
        .expect_delete_nodes()
        .withf(|sel| *sel == fixture_label_selector())
        .times(1)
        .returning(|_| Ok(4));

    let deleted = flush_fixtures(&client).await.unwrap();
    assert_eq!(deleted, 4);
    assert!(logs_contain("deleted 4 nodes"));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_flush_fixtures_nothing_to_delete() {
    let mut client = MockNodeClient::new();
    client.expect_delete_nodes().times(1).returning(|_| Ok(0));

    let deleted = flush_fixtures(&client).await.unwrap();
    assert_eq!(deleted, 0);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_flush_fixtures_failed() {
    let mut client = MockNodeClient::new();
    client
        .expect_delete_nodes()
        .times(1)
        .returning(|_| Err(anyhow!("connection refused")));

    let err = flush_fixtures(&client)
        .await
        .unwrap_err()
        .downcast::<FixtureError>()
        .unwrap();

    match err {
        FixtureError::FlushFailed { selector, source } => {
            assert_eq!(selector, "app=kubetest");
            assert_eq!(source.to_string(), "connection refused");
        },
        _ => panic!("unexpected error: {err:?}"),
    }
}
