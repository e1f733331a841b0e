//! Object round trips and overwrites.

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use futures::StreamExt;
    use mockstack_s3::checksums::compute_etag;
    use mockstack_s3::client::ObjectStorage;
    use mockstack_s3::model::{GetObjectInput, PutObjectInput};
    use mockstack_tutorial::upload;
    use tokio::io::AsyncReadExt;

    use crate::{create_test_bucket, start_session, start_spilling_session};

    async fn fetch(client: &impl ObjectStorage, bucket: &str, key: &str) -> Bytes {
        client
            .get_object(GetObjectInput::new(bucket, key))
            .await
            .expect("get_object")
            .body
            .collect()
            .await
    }

    #[tokio::test]
    async fn test_should_round_trip_varied_bodies() {
        let session = start_session();
        let client = session.client();
        let bucket = create_test_bucket(&client, "roundtrip").await;

        let every_byte: Vec<u8> = (0..=255u8).cycle().take(4096).collect();

        let cases: Vec<(&str, Bytes)> = vec![
            ("empty", Bytes::new()),
            ("text.txt", Bytes::from_static(b"plain text")),
            ("nested/deeper/key.bin", Bytes::from(every_byte)),
            ("unicode/\u{1F980}.txt", Bytes::from("crab")),
        ];

        for (key, body) in cases {
            upload(&client, body.clone(), &bucket, key)
                .await
                .unwrap_or_else(|e| panic!("upload {key}: {e}"));
            assert_eq!(fetch(&client, &bucket, key).await, body, "key {key}");
        }
    }

    #[tokio::test]
    async fn test_should_keep_last_write() {
        let session = start_session();
        let client = session.client();
        let bucket = create_test_bucket(&client, "overwrite").await;

        upload(&client, "C1", &bucket, "k").await.expect("first upload");
        upload(&client, "C2", &bucket, "k").await.expect("second upload");

        assert_eq!(fetch(&client, &bucket, "k").await.as_ref(), b"C2");
        let head = client.head_object(&bucket, "k").await.expect("head");
        assert_eq!(head.e_tag, compute_etag(b"C2"));
    }

    #[tokio::test]
    async fn test_should_round_trip_spilled_body() {
        let session = start_spilling_session(128);
        let client = session.client();
        let bucket = create_test_bucket(&client, "spill").await;

        let body = Bytes::from(vec![0x5A_u8; 200 * 1024]);
        client
            .put_object(PutObjectInput::new(&bucket, "large.bin", body.clone()))
            .await
            .expect("put large");

        let object = client
            .get_object(GetObjectInput::new(&bucket, "large.bin"))
            .await
            .expect("get large");
        assert_eq!(object.content_length, body.len() as u64);

        let mut chunks = object.body.into_stream();
        let mut collected = Vec::new();
        while let Some(chunk) = chunks.next().await {
            collected.extend_from_slice(&chunk);
        }
        assert_eq!(collected, body.to_vec());
    }

    #[tokio::test]
    async fn test_should_read_body_as_async_reader() {
        let session = start_session();
        let client = session.client();
        let bucket = create_test_bucket(&client, "reader").await;
        upload(&client, "streamed", &bucket, "r.txt").await.expect("upload");

        let object = client
            .get_object(GetObjectInput::new(&bucket, "r.txt"))
            .await
            .expect("get");
        let mut text = String::new();
        object
            .body
            .into_reader()
            .read_to_string(&mut text)
            .await
            .expect("read");
        assert_eq!(text, "streamed");
    }

    #[tokio::test]
    async fn test_should_delete_object() {
        let session = start_session();
        let client = session.client();
        let bucket = create_test_bucket(&client, "delete").await;
        upload(&client, "x", &bucket, "gone.txt").await.expect("upload");

        client.delete_object(&bucket, "gone.txt").await.expect("delete");
        let err = client
            .get_object(GetObjectInput::new(&bucket, "gone.txt"))
            .await
            .expect_err("object should be gone");
        assert_eq!(err.code(), "NoSuchKey");
    }
}
