//! The storage scenario, end to end.

#[cfg(test)]
mod tests {
    use mockstack_s3::client::ObjectStorage;
    use mockstack_s3::model::GetObjectInput;
    use mockstack_s3::mock_s3;
    use mockstack_tutorial::{
        SCENARIO_CONTENTS, SCENARIO_KEY, TEST_BUCKET, create_test_bucket, run_scenario, upload,
    };

    use crate::start_session;

    #[tokio::test]
    async fn test_should_run_scenario_inside_wrapped_session() {
        let report = mock_s3(|client| async move { run_scenario(&client).await })
            .await
            .expect("scenario");

        assert_eq!(report.bucket, TEST_BUCKET);
        assert_eq!(report.listed_keys, vec![SCENARIO_KEY.to_owned()]);
        assert_eq!(report.retrieved.as_ref(), SCENARIO_CONTENTS);
    }

    #[tokio::test]
    async fn test_should_run_scenario_step_by_step() {
        let session = start_session();
        let client = session.client();

        let bucket = create_test_bucket(&client).await.expect("create bucket");
        upload(
            &client,
            &b"Made up file contents because I have no imagination."[..],
            &bucket,
            "somewhere/something.txt",
        )
        .await
        .expect("upload");

        let listing = client
            .list_objects_v2(mockstack_s3::model::ListObjectsV2Input::new(&bucket))
            .await
            .expect("list");
        assert_eq!(listing.contents.len(), 1);
        assert_eq!(listing.contents[0].key, "somewhere/something.txt");

        let object = client
            .get_object(GetObjectInput::new(&bucket, "somewhere/something.txt"))
            .await
            .expect("get");
        let body = object.body.collect().await;
        assert_eq!(
            body.as_ref(),
            b"Made up file contents because I have no imagination."
        );
    }

    #[tokio::test]
    async fn test_should_rerun_scenario_in_a_new_session() {
        for _ in 0..2 {
            let session = start_session();
            run_scenario(&session.client())
                .await
                .expect("scenario should pass in every fresh session");
        }
    }
}
