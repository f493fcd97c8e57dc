//! S3 scenarios against a stub bucket backend.

use soapcore::CallError;
use soapcore::xmlutil::child_text;
use soaps3::{
    CreateBucket, DeleteObject, ListAllMyBuckets, ListBucket, PutObjectInline, RequestAuth,
    S3Client,
};
use soapstub::{StubRequest, StubResponse, StubSoapServer};
use xmltree::Element;

fn request_operation(request: &StubRequest) -> Element {
    let root = Element::parse(request.body.as_bytes()).expect("malformed request envelope");
    let body = root.get_child("Body").expect("missing Body");
    body.children
        .iter()
        .find_map(|n| n.as_element())
        .expect("empty Body")
        .clone()
}

fn envelope(inner: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
  <s:Body>{inner}</s:Body>
</s:Envelope>"#
    )
}

fn stub_client(server: &StubSoapServer) -> S3Client {
    S3Client::new(Some(&server.url()), false, None)
}

fn auth() -> RequestAuth {
    RequestAuth {
        access_key_id: "AKIDEXAMPLE".to_string(),
        signature: "c2lnbmF0dXJl".to_string(),
        ..Default::default()
    }
}

#[test]
fn create_bucket_returns_the_bucket_name() {
    let server = StubSoapServer::start(|request| {
        let operation = request_operation(&request);
        assert_eq!(operation.name, "CreateBucket");
        let bucket = child_text(&operation, "Bucket").expect("missing Bucket");
        assert_eq!(
            child_text(&operation, "AWSAccessKeyId").as_deref(),
            Some("AKIDEXAMPLE")
        );

        StubResponse::xml(envelope(&format!(
            r#"<m:CreateBucketResponse xmlns:m="http://s3.amazonaws.com/doc/2006-03-01/">
      <CreateBucketReturn>
        <BucketName>{bucket}</BucketName>
      </CreateBucketReturn>
    </m:CreateBucketResponse>"#
        )))
    });

    let client = stub_client(&server);
    let response = client
        .create_bucket(&CreateBucket {
            bucket: "photos".to_string(),
            access_control_list: None,
            auth: auth(),
        })
        .unwrap();

    let result = response.create_bucket_return.expect("missing result");
    assert_eq!(result.bucket_name, "photos");
}

#[test]
fn list_all_my_buckets_sends_its_soap_action() {
    let server = StubSoapServer::start(|request| {
        assert_eq!(
            request.header("soapaction"),
            Some("http://s3.amazonaws.com/doc/2006-03-01/ListAllMyBuckets")
        );

        StubResponse::xml(envelope(
            r#"<m:ListAllMyBucketsResponse xmlns:m="http://s3.amazonaws.com/doc/2006-03-01/">
      <ListAllMyBucketsResponse>
        <Owner>
          <ID>abc123</ID>
          <DisplayName>tester</DisplayName>
        </Owner>
        <Buckets>
          <Bucket>
            <Name>backups</Name>
            <CreationDate>2006-03-01T00:00:00+00:00</CreationDate>
          </Bucket>
          <Bucket>
            <Name>photos</Name>
          </Bucket>
        </Buckets>
      </ListAllMyBucketsResponse>
    </m:ListAllMyBucketsResponse>"#,
        ))
    });

    let client = stub_client(&server);
    let response = client
        .list_all_my_buckets(&ListAllMyBuckets { auth: auth() })
        .unwrap();

    let result = response.list_all_my_buckets_response.expect("missing result");
    assert_eq!(result.owner.unwrap().display_name, "tester");
    let buckets = result.buckets.unwrap().bucket;
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].name, "backups");
    assert!(buckets[0].creation_date.is_some());
    assert_eq!(buckets[1].name, "photos");
    assert!(buckets[1].creation_date.is_none());
}

#[test]
fn list_bucket_decodes_contents_and_prefixes() {
    let server = StubSoapServer::start(|request| {
        assert_eq!(
            request.header("soapaction"),
            Some("http://s3.amazonaws.com/doc/2006-03-01/ListBucket")
        );
        let operation = request_operation(&request);
        assert_eq!(child_text(&operation, "Prefix").as_deref(), Some("img/"));
        assert_eq!(child_text(&operation, "MaxKeys").as_deref(), Some("100"));

        StubResponse::xml(envelope(
            r#"<m:ListBucketResponse xmlns:m="http://s3.amazonaws.com/doc/2006-03-01/">
      <ListBucketResponse>
        <Name>photos</Name>
        <Prefix>img/</Prefix>
        <MaxKeys>100</MaxKeys>
        <IsTruncated>true</IsTruncated>
        <Contents>
          <Key>img/a.jpg</Key>
          <ETag>"d41d8cd9"</ETag>
          <Size>1024</Size>
          <StorageClass>STANDARD</StorageClass>
        </Contents>
        <Contents>
          <Key>img/b.jpg</Key>
          <Size>2048</Size>
        </Contents>
        <CommonPrefixes>
          <Prefix>img/thumbs/</Prefix>
        </CommonPrefixes>
      </ListBucketResponse>
    </m:ListBucketResponse>"#,
        ))
    });

    let client = stub_client(&server);
    let response = client
        .list_bucket(&ListBucket {
            bucket: "photos".to_string(),
            prefix: "img/".to_string(),
            max_keys: 100,
            ..Default::default()
        })
        .unwrap();

    let result = response.list_bucket_response.expect("missing result");
    assert_eq!(result.name, "photos");
    assert!(result.is_truncated);
    assert_eq!(result.contents.len(), 2);
    assert_eq!(result.contents[0].key, "img/a.jpg");
    assert_eq!(result.contents[0].size, 1024);
    assert_eq!(result.contents[1].size, 2048);
    assert_eq!(result.common_prefixes.len(), 1);
    assert_eq!(result.common_prefixes[0].prefix, "img/thumbs/");
}

#[test]
fn put_object_inline_round_trips_data_through_the_stub() {
    let server = StubSoapServer::start(|request| {
        let operation = request_operation(&request);
        assert_eq!(operation.name, "PutObjectInline");
        // "hello world" in base64
        assert_eq!(
            child_text(&operation, "Data").as_deref(),
            Some("aGVsbG8gd29ybGQ=")
        );

        StubResponse::xml(envelope(
            r#"<m:PutObjectInlineResponse xmlns:m="http://s3.amazonaws.com/doc/2006-03-01/">
      <PutObjectInlineResponse>
        <ETag>"5eb63bbb"</ETag>
        <LastModified>2026-08-27T10:00:00+00:00</LastModified>
      </PutObjectInlineResponse>
    </m:PutObjectInlineResponse>"#,
        ))
    });

    let client = stub_client(&server);
    let response = client
        .put_object_inline(&PutObjectInline {
            bucket: "photos".to_string(),
            key: "hello.txt".to_string(),
            data: b"hello world".to_vec(),
            content_length: 11,
            auth: auth(),
            ..Default::default()
        })
        .unwrap();

    let result = response.put_object_inline_response.expect("missing result");
    assert_eq!(result.etag, "\"5eb63bbb\"");
    assert!(result.last_modified.is_some());
}

#[test]
fn access_denied_fault_surfaces_as_remote_error() {
    let server = StubSoapServer::start(|_| {
        let fault = soapcore::SoapFault::new("soap:Client", "Access Denied");
        StubResponse::xml(fault.to_xml().unwrap()).with_status(500)
    });

    let client = stub_client(&server);
    let err = client
        .delete_object(&DeleteObject {
            bucket: "photos".to_string(),
            key: "private.txt".to_string(),
            auth: auth(),
        })
        .unwrap_err();

    match err {
        CallError::Remote(fault) => {
            assert_eq!(fault.code, "soap:Client");
            assert_eq!(fault.fault_string, "Access Denied");
        }
        other => panic!("expected Remote fault, got {other:?}"),
    }
}

#[test]
fn empty_body_yields_the_default_response() {
    let server = StubSoapServer::start(|_| StubResponse::empty());
    let client = stub_client(&server);
    let response = client
        .delete_object(&DeleteObject {
            bucket: "b".to_string(),
            key: "k".to_string(),
            auth: auth(),
        })
        .unwrap();
    assert!(response.delete_object_response.is_none());
}
