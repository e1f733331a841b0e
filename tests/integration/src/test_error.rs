//! Error surfaces seen by code under test.

#[cfg(test)]
mod tests {
    use mockstack_s3::S3ServiceError;
    use mockstack_s3::client::ObjectStorage;
    use mockstack_s3::model::{CreateBucketInput, GetObjectInput, ListObjectsV2Input};
    use mockstack_tutorial::{ScenarioError, run_scenario, upload};

    use crate::{create_test_bucket, start_session, test_bucket_name};

    #[tokio::test]
    async fn test_should_fail_listing_missing_bucket() {
        let session = start_session();
        let client = session.client();

        let err = client
            .list_objects_v2(ListObjectsV2Input::new(test_bucket_name("missing")))
            .await
            .expect_err("bucket was never created");
        assert!(matches!(err, S3ServiceError::NoSuchBucket { .. }));
        assert_eq!(err.code(), "NoSuchBucket");
    }

    #[tokio::test]
    async fn test_should_fail_fetching_from_missing_bucket() {
        let session = start_session();
        let client = session.client();

        let err = client
            .get_object(GetObjectInput::new(test_bucket_name("missing"), "k"))
            .await
            .expect_err("bucket was never created");
        assert!(matches!(err, S3ServiceError::NoSuchBucket { .. }));
    }

    #[tokio::test]
    async fn test_should_surface_upload_error_untouched() {
        let session = start_session();
        let client = session.client();

        let bucket = test_bucket_name("absent");
        let err = upload(&client, "data", &bucket, "k")
            .await
            .expect_err("upload into a missing bucket");
        assert!(matches!(err, S3ServiceError::NoSuchBucket { bucket: ref b } if *b == bucket));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_bucket() {
        let session = start_session();
        let client = session.client();
        let bucket = create_test_bucket(&client, "dup").await;

        let err = client
            .create_bucket(CreateBucketInput::new(&bucket))
            .await
            .expect_err("second create");
        assert_eq!(err.code(), "BucketAlreadyOwnedByYou");
    }

    #[tokio::test]
    async fn test_should_fail_scenario_when_bucket_preexists() {
        let session = start_session();
        let client = session.client();
        run_scenario(&client).await.expect("first run");

        let err = run_scenario(&client)
            .await
            .expect_err("bucket from the first run is still there");
        assert!(matches!(
            err,
            ScenarioError::Storage(S3ServiceError::BucketAlreadyOwnedByYou { .. })
        ));
    }

    #[tokio::test]
    async fn test_should_reject_unsatisfiable_range() {
        let session = start_session();
        let client = session.client();
        let bucket = create_test_bucket(&client, "range").await;
        upload(&client, "0123456789", &bucket, "digits").await.expect("upload");

        let mut input = GetObjectInput::new(&bucket, "digits");
        input.range = Some((20, 30));
        let err = client.get_object(input).await.expect_err("out of range");
        assert_eq!(err.code(), "InvalidRange");

        let mut input = GetObjectInput::new(&bucket, "digits");
        input.range = Some((2, 5));
        let partial = client.get_object(input).await.expect("ranged get");
        assert_eq!(partial.content_range.as_deref(), Some("bytes 2-5/10"));
        assert_eq!(partial.body.collect().await.as_ref(), b"2345");
    }
}
