//! S3 operation facade.

use soapcore::{BasicAuth, CallError, SoapClient};

use crate::ops::{
    CopyObject, CopyObjectResponse, CreateBucket, CreateBucketResponse, DeleteBucket,
    DeleteBucketResponse, DeleteObject, DeleteObjectResponse, GetBucketAccessControlPolicy,
    GetBucketAccessControlPolicyResponse, GetBucketLoggingStatus, GetBucketLoggingStatusResponse,
    GetObject, GetObjectAccessControlPolicy, GetObjectAccessControlPolicyResponse,
    GetObjectExtended, GetObjectExtendedResponse, GetObjectResponse, ListAllMyBuckets,
    ListAllMyBucketsResponse, ListBucket, ListBucketResponse, PutObject, PutObjectInline,
    PutObjectInlineResponse, PutObjectResponse, SetBucketAccessControlPolicy,
    SetBucketAccessControlPolicyResponse, SetBucketLoggingStatus, SetBucketLoggingStatusResponse,
    SetObjectAccessControlPolicy, SetObjectAccessControlPolicyResponse,
};

/// SOAP endpoint of the live service
pub const DEFAULT_ENDPOINT: &str = "https://s3.amazonaws.com/soap";

const LIST_BUCKET_ACTION: &str = "http://s3.amazonaws.com/doc/2006-03-01/ListBucket";
const LIST_ALL_MY_BUCKETS_ACTION: &str =
    "http://s3.amazonaws.com/doc/2006-03-01/ListAllMyBuckets";

/// One client per service; immutable after construction, reusable across
/// calls and threads.
///
/// Only the two listing operations send a SOAPAction URI; for every other
/// operation the body element identifies the call and the header stays out.
#[derive(Debug, Clone)]
pub struct S3Client {
    client: SoapClient,
}

impl S3Client {
    /// `endpoint = None` targets the live service.
    pub fn new(endpoint: Option<&str>, insecure_tls: bool, auth: Option<BasicAuth>) -> Self {
        let endpoint = endpoint.unwrap_or(DEFAULT_ENDPOINT);
        Self {
            client: SoapClient::new(endpoint, insecure_tls, auth),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    pub fn create_bucket(&self, request: &CreateBucket) -> Result<CreateBucketResponse, CallError> {
        let response = self.client.call("", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn delete_bucket(&self, request: &DeleteBucket) -> Result<DeleteBucketResponse, CallError> {
        let response = self.client.call("", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn get_bucket_logging_status(
        &self,
        request: &GetBucketLoggingStatus,
    ) -> Result<GetBucketLoggingStatusResponse, CallError> {
        let response = self.client.call("", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn set_bucket_logging_status(
        &self,
        request: &SetBucketLoggingStatus,
    ) -> Result<SetBucketLoggingStatusResponse, CallError> {
        let response = self.client.call("", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn get_object_access_control_policy(
        &self,
        request: &GetObjectAccessControlPolicy,
    ) -> Result<GetObjectAccessControlPolicyResponse, CallError> {
        let response = self.client.call("", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn get_bucket_access_control_policy(
        &self,
        request: &GetBucketAccessControlPolicy,
    ) -> Result<GetBucketAccessControlPolicyResponse, CallError> {
        let response = self.client.call("", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn set_object_access_control_policy(
        &self,
        request: &SetObjectAccessControlPolicy,
    ) -> Result<SetObjectAccessControlPolicyResponse, CallError> {
        let response = self.client.call("", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn set_bucket_access_control_policy(
        &self,
        request: &SetBucketAccessControlPolicy,
    ) -> Result<SetBucketAccessControlPolicyResponse, CallError> {
        let response = self.client.call("", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn get_object(&self, request: &GetObject) -> Result<GetObjectResponse, CallError> {
        let response = self.client.call("", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn get_object_extended(
        &self,
        request: &GetObjectExtended,
    ) -> Result<GetObjectExtendedResponse, CallError> {
        let response = self.client.call("", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn put_object(&self, request: &PutObject) -> Result<PutObjectResponse, CallError> {
        let response = self.client.call("", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn put_object_inline(
        &self,
        request: &PutObjectInline,
    ) -> Result<PutObjectInlineResponse, CallError> {
        let response = self.client.call("", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn delete_object(&self, request: &DeleteObject) -> Result<DeleteObjectResponse, CallError> {
        let response = self.client.call("", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn copy_object(&self, request: &CopyObject) -> Result<CopyObjectResponse, CallError> {
        let response = self.client.call("", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn list_bucket(&self, request: &ListBucket) -> Result<ListBucketResponse, CallError> {
        let response = self.client.call(LIST_BUCKET_ACTION, request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn list_all_my_buckets(
        &self,
        request: &ListAllMyBuckets,
    ) -> Result<ListAllMyBucketsResponse, CallError> {
        let response = self.client.call(LIST_ALL_MY_BUCKETS_ACTION, request)?;
        Ok(response.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_used_when_none_given() {
        let client = S3Client::new(None, false, None);
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn explicit_endpoint_overrides_the_default() {
        let client = S3Client::new(Some("http://127.0.0.1:9/soap"), false, None);
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/soap");
    }
}
