//! Session lifecycle: isolation, teardown, and stale clients.

#[cfg(test)]
mod tests {
    use mockstack_s3::client::ObjectStorage;
    use mockstack_s3::model::{CreateBucketInput, GetObjectInput, ListObjectsV2Input};
    use mockstack_s3::{MockSession, S3ServiceError, mock_s3};
    use mockstack_tutorial::{TEST_BUCKET, create_test_bucket, upload};

    use crate::start_session;

    #[tokio::test]
    async fn test_should_isolate_concurrent_sessions() {
        let first = start_session();
        let second = start_session();

        create_test_bucket(&first.client()).await.expect("first bucket");
        upload(&first.client(), "one", TEST_BUCKET, "k")
            .await
            .expect("upload into first");

        let err = second
            .client()
            .list_objects_v2(ListObjectsV2Input::new(TEST_BUCKET))
            .await
            .expect_err("second session has no buckets");
        assert!(matches!(err, S3ServiceError::NoSuchBucket { .. }));

        create_test_bucket(&second.client())
            .await
            .expect("same name is free in another session");
    }

    #[tokio::test]
    async fn test_should_discard_state_between_sessions() {
        mock_s3(|client| async move {
            create_test_bucket(&client).await.expect("create");
            upload(&client, "old", TEST_BUCKET, "k").await.expect("upload");
        })
        .await;

        let buckets = mock_s3(|client| async move {
            client.list_buckets().await.expect("list").buckets
        })
        .await;
        assert!(buckets.is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_stale_clients_after_stop() {
        let session = start_session();
        let client = session.client();
        create_test_bucket(&client).await.expect("create");
        assert!(session.is_active());
        session.stop();

        let err = client
            .get_object(GetObjectInput::new(TEST_BUCKET, "k"))
            .await
            .expect_err("session ended");
        assert!(matches!(err, S3ServiceError::SessionClosed));

        let err = client
            .create_bucket(CreateBucketInput::new("another"))
            .await
            .expect_err("session ended");
        assert!(matches!(err, S3ServiceError::SessionClosed));
    }

    #[tokio::test]
    async fn test_should_end_session_on_drop() {
        let client = {
            let session = MockSession::start();
            session.client()
        };
        assert!(matches!(
            client.list_buckets().await,
            Err(S3ServiceError::SessionClosed)
        ));
    }

    #[tokio::test]
    async fn test_should_share_state_across_clients_and_tasks() {
        let session = start_session();
        let writer = session.client();
        create_test_bucket(&writer).await.expect("create");

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let client = session.client();
                tokio::spawn(async move {
                    upload(&client, format!("body-{i}"), TEST_BUCKET, &format!("k{i}")).await
                })
            })
            .collect();
        for handle in handles {
            handle.await.expect("join").expect("upload");
        }

        let out = writer
            .list_objects_v2(ListObjectsV2Input::new(TEST_BUCKET))
            .await
            .expect("list");
        assert_eq!(out.key_count, 8);
    }

    #[tokio::test]
    async fn test_should_work_through_trait_object() {
        let session = start_session();
        let client: Box<dyn ObjectStorage> = Box::new(session.client());

        create_test_bucket(client.as_ref()).await.expect("create");
        upload(client.as_ref(), "dyn", TEST_BUCKET, "k")
            .await
            .expect("upload");
        let body = client
            .get_object(GetObjectInput::new(TEST_BUCKET, "k"))
            .await
            .expect("get")
            .body
            .collect()
            .await;
        assert_eq!(body.as_ref(), b"dyn");
    }
}
