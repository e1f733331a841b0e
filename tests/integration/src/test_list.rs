//! Listing behavior over a populated bucket.

#[cfg(test)]
mod tests {
    use mockstack_s3::client::ObjectStorage;
    use mockstack_s3::model::ListObjectsV2Input;
    use mockstack_tutorial::upload;

    use crate::{create_test_bucket, start_session};

    const KEYS: [&str; 6] = [
        "a.txt",
        "docs/guide.md",
        "docs/intro.md",
        "photos/2024/jan.jpg",
        "photos/2024/feb.jpg",
        "z.txt",
    ];

    #[tokio::test]
    async fn test_should_list_single_upload() {
        let session = start_session();
        let client = session.client();
        let bucket = create_test_bucket(&client, "single").await;
        upload(&client, "x", &bucket, "only/key").await.expect("upload");

        let out = client
            .list_objects_v2(ListObjectsV2Input::new(&bucket))
            .await
            .expect("list");
        assert_eq!(out.key_count, 1);
        assert_eq!(out.contents.len(), 1);
        assert_eq!(out.contents[0].key, "only/key");
        assert_eq!(out.contents[0].size, 1);
        assert!(!out.is_truncated);
    }

    #[tokio::test]
    async fn test_should_group_by_delimiter() {
        let session = start_session();
        let client = session.client();
        let bucket = create_test_bucket(&client, "delim").await;
        for key in KEYS {
            upload(&client, key, &bucket, key).await.expect("upload");
        }

        let mut input = ListObjectsV2Input::new(&bucket);
        input.delimiter = Some("/".to_owned());
        let out = client.list_objects_v2(input).await.expect("list");

        let keys: Vec<_> = out.contents.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["a.txt", "z.txt"]);
        assert_eq!(out.common_prefixes, vec!["docs/", "photos/"]);
    }

    #[tokio::test]
    async fn test_should_filter_by_prefix() {
        let session = start_session();
        let client = session.client();
        let bucket = create_test_bucket(&client, "prefix").await;
        for key in KEYS {
            upload(&client, key, &bucket, key).await.expect("upload");
        }

        let mut input = ListObjectsV2Input::new(&bucket);
        input.prefix = Some("photos/".to_owned());
        let out = client.list_objects_v2(input).await.expect("list");

        let keys: Vec<_> = out.contents.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["photos/2024/feb.jpg", "photos/2024/jan.jpg"]);
    }

    #[tokio::test]
    async fn test_should_paginate_with_continuation_tokens() {
        let session = start_session();
        let client = session.client();
        let bucket = create_test_bucket(&client, "pages").await;
        for key in KEYS {
            upload(&client, key, &bucket, key).await.expect("upload");
        }

        let mut seen = Vec::new();
        let mut token = None;
        let mut pages = 0;
        loop {
            let mut input = ListObjectsV2Input::new(&bucket);
            input.max_keys = Some(4);
            input.continuation_token = token.take();
            let out = client.list_objects_v2(input).await.expect("list page");
            pages += 1;
            seen.extend(out.contents.into_iter().map(|o| o.key));
            if !out.is_truncated {
                break;
            }
            token = out.next_continuation_token;
            assert!(token.is_some(), "truncated page must carry a token");
        }

        let mut expected: Vec<_> = KEYS.iter().map(|k| (*k).to_owned()).collect();
        expected.sort();
        assert_eq!(seen, expected);
        assert_eq!(pages, 2);
    }
}
