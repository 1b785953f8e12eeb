use std::sync::{
    Arc,
    Mutex,
};

use assertables::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_create_many(tagged_template: corev1::Node) {
    let seen = Arc::new(Mutex::new(vec![]));
    let seen_inner = seen.clone();

    let mut client = MockNodeClient::new();
    client.expect_create_node().times(3).returning(move |node| {
        seen_inner.lock().unwrap().push(node.clone());
        Ok(node.clone())
    });

    let mut rng = StdRng::seed_from_u64(42);
    let created = create_many(&client, 3, &tagged_template, &mut rng).await.unwrap();
    assert_eq!(created, 3);

    let seen = seen.lock().unwrap();
    let names: Vec<_> = seen.iter().map(|n| n.name_any()).collect();
    assert_len_eq_x!(&names, 3);
    assert_ne!(names[0], names[1]);
    assert_ne!(names[1], names[2]);
    assert_ne!(names[0], names[2]);
    for node in seen.iter() {
        assert_starts_with!(node.name_any(), "kubetest-node-");
        assert_eq!(node.spec, tagged_template.spec);
        assert_eq!(node.labels(), tagged_template.labels());
    }

    // the template itself never gets a name
    assert_none!(tagged_template.metadata.name);

    // one event per fixture, each naming the node it created
    assert!(logs_contain("created node"));
    for name in &names {
        assert!(logs_contain(name));
    }
    assert!(logs_contain("created 3 nodes"));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_create_many_zero(tagged_template: corev1::Node) {
    let mut client = MockNodeClient::new();
    client.expect_create_node().never();

    let mut rng = StdRng::seed_from_u64(42);
    let created = create_many(&client, 0, &tagged_template, &mut rng).await.unwrap();
    assert_eq!(created, 0);
}

#[rstest]
#[case::first(1)]
#[case::middle(3)]
#[case::last(5)]
#[tokio::test]
async fn test_create_many_partial_failure(tagged_template: corev1::Node, #[case] k: usize) {
    const COUNT: usize = 5;
    let mut calls = 0;

    let mut client = MockNodeClient::new();
    client.expect_create_node().times(k).returning(move |node| {
        calls += 1;
        if calls == k { Err(anyhow!("nodes is forbidden")) } else { Ok(node.clone()) }
    });

    let mut rng = StdRng::seed_from_u64(42);
    let err = create_many(&client, COUNT, &tagged_template, &mut rng)
        .await
        .unwrap_err()
        .downcast::<FixtureError>()
        .unwrap();

    assert_eq!(err.created(), k - 1);
    assert!(matches!(
        err,
        FixtureError::CreateFailed { index, count: COUNT, created, .. } if index == k && created == k - 1
    ));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_create_many_failure_logs(tagged_template: corev1::Node) {
    let mut calls = 0;
    let mut client = MockNodeClient::new();
    client.expect_create_node().times(3).returning(move |node| {
        calls += 1;
        if calls == 3 { Err(anyhow!("nodes is forbidden")) } else { Ok(node.clone()) }
    });

    let mut rng = StdRng::seed_from_u64(42);
    let _ = create_many(&client, 5, &tagged_template, &mut rng).await.unwrap_err();

    logs_assert(|lines: &[&str]| match lines.iter().filter(|l| l.contains("created node")).count() {
        2 => Ok(()),
        n => Err(format!("expected 2 created node events, got {n}")),
    });
    assert!(logs_contain("created 2 of 5 nodes before failure"));
    assert!(!logs_contain("created 5 nodes"));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_create_fixtures_source_not_found() {
    let mut client = MockNodeClient::new();
    client.expect_get_node().times(1).returning(|_| Ok(None));
    client.expect_create_node().never();

    let err = create_fixtures(&client, 1, Some(TEST_MISSING_NODE_NAME))
        .await
        .unwrap_err()
        .downcast::<FixtureError>()
        .unwrap();

    assert!(matches!(err, FixtureError::SourceNotFound { .. }));
    assert_eq!(err.created(), 0);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_create_fixtures_from_source(test_node: corev1::Node) {
    let source = test_node.clone();
    let mut client = MockNodeClient::new();
    client
        .expect_get_node()
        .times(1)
        .returning(move |_| Ok(Some(source.clone())));
    client
        .expect_create_node()
        .withf(|node| {
            node.labels().get(FIXTURE_LABEL_KEY).map(String::as_str) == Some(FIXTURE_LABEL_VALUE)
                && node.labels().get(TEST_NODE_LABEL_KEY).is_none()
                && node.metadata.uid.is_none()
                && node.spec.as_ref().is_some_and(|s| s.unschedulable == Some(true))
        })
        .times(2)
        .returning(|node| Ok(node.clone()));

    let created = create_fixtures(&client, 2, Some(TEST_NODE_NAME)).await.unwrap();
    assert_eq!(created, 2);
}
