//! Operation request/response payloads of the S3 SOAP interface.
//!
//! Every request carries the flattened [`RequestAuth`] signature fields the
//! way the service expects them: direct children of the operation element,
//! after the operation's own arguments.

use chrono::{DateTime, Utc};
use soapcore::{CallError, SoapPayload};
use soapcore::xmlutil::{child, push_child};
use xmltree::Element;

use crate::entities::{
    AccessControlList, AccessControlPolicy, BucketLoggingStatus, CopyObjectResult,
    CreateBucketResult, GetObjectResult, ListAllMyBucketsResult, ListBucketResult,
    ListVersionsResult, MetadataEntry, PutObjectResult, Status,
};
use crate::enums::{MetadataDirective, StorageClass};
use crate::wire::{
    push_bool, push_i32, push_i64, push_string, push_time, read_string, read_time,
};

pub const S3_NS: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

/// AWS signature-v0 authentication fields, flattened into each request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestAuth {
    pub access_key_id: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub signature: String,
    pub credential: String,
}

impl RequestAuth {
    fn write_into(&self, element: &mut Element) {
        push_string(element, "AWSAccessKeyId", &self.access_key_id);
        push_time(element, "Timestamp", self.timestamp.as_ref());
        push_string(element, "Signature", &self.signature);
        push_string(element, "Credential", &self.credential);
    }

    fn read(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            access_key_id: read_string(element, "AWSAccessKeyId"),
            timestamp: read_time(element, "Timestamp")?,
            signature: read_string(element, "Signature"),
            credential: read_string(element, "Credential"),
        })
    }
}

fn read_wrapped<T>(
    element: &Element,
    name: &str,
    reader: impl FnOnce(&Element) -> Result<T, CallError>,
) -> Result<Option<T>, CallError> {
    match child(element, name) {
        Some(inner) => reader(inner).map(Some),
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Bucket operations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateBucket {
    pub bucket: String,
    pub access_control_list: Option<AccessControlList>,
    pub auth: RequestAuth,
}

impl SoapPayload for CreateBucket {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "CreateBucket";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_string(&mut element, "Bucket", &self.bucket);
        if let Some(acl) = &self.access_control_list {
            push_child(&mut element, acl.to_element("AccessControlList"));
        }
        self.auth.write_into(&mut element);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        let access_control_list = read_wrapped(element, "AccessControlList", |e| {
            AccessControlList::from_element(e)
        })?;
        Ok(Self {
            bucket: read_string(element, "Bucket"),
            access_control_list,
            auth: RequestAuth::read(element)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateBucketResponse {
    pub create_bucket_return: Option<CreateBucketResult>,
}

impl SoapPayload for CreateBucketResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "CreateBucketResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        if let Some(result) = &self.create_bucket_return {
            push_child(&mut element, result.to_element("CreateBucketReturn"));
        }
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            create_bucket_return: read_wrapped(element, "CreateBucketReturn", |e| {
                CreateBucketResult::from_element(e)
            })?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteBucket {
    pub bucket: String,
    pub auth: RequestAuth,
}

impl SoapPayload for DeleteBucket {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "DeleteBucket";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_string(&mut element, "Bucket", &self.bucket);
        self.auth.write_into(&mut element);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            bucket: read_string(element, "Bucket"),
            auth: RequestAuth::read(element)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteBucketResponse {
    pub delete_bucket_response: Option<Status>,
}

impl SoapPayload for DeleteBucketResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "DeleteBucketResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        if let Some(status) = &self.delete_bucket_response {
            push_child(&mut element, status.to_element("DeleteBucketResponse"));
        }
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            delete_bucket_response: read_wrapped(element, "DeleteBucketResponse", |e| {
                Status::from_element(e)
            })?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetBucketLoggingStatus {
    pub bucket: String,
    pub auth: RequestAuth,
}

impl SoapPayload for GetBucketLoggingStatus {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "GetBucketLoggingStatus";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_string(&mut element, "Bucket", &self.bucket);
        self.auth.write_into(&mut element);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            bucket: read_string(element, "Bucket"),
            auth: RequestAuth::read(element)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetBucketLoggingStatusResponse {
    pub get_bucket_logging_status_response: Option<BucketLoggingStatus>,
}

impl SoapPayload for GetBucketLoggingStatusResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "GetBucketLoggingStatusResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        if let Some(status) = &self.get_bucket_logging_status_response {
            push_child(
                &mut element,
                status.to_element("GetBucketLoggingStatusResponse"),
            );
        }
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            get_bucket_logging_status_response: read_wrapped(
                element,
                "GetBucketLoggingStatusResponse",
                |e| BucketLoggingStatus::from_element(e),
            )?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetBucketLoggingStatus {
    pub bucket: String,
    pub auth: RequestAuth,
    pub bucket_logging_status: Option<BucketLoggingStatus>,
}

impl SoapPayload for SetBucketLoggingStatus {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "SetBucketLoggingStatus";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_string(&mut element, "Bucket", &self.bucket);
        self.auth.write_into(&mut element);
        if let Some(status) = &self.bucket_logging_status {
            push_child(&mut element, status.to_element("BucketLoggingStatus"));
        }
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            bucket: read_string(element, "Bucket"),
            auth: RequestAuth::read(element)?,
            bucket_logging_status: read_wrapped(element, "BucketLoggingStatus", |e| {
                BucketLoggingStatus::from_element(e)
            })?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetBucketLoggingStatusResponse;

impl SoapPayload for SetBucketLoggingStatusResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "SetBucketLoggingStatusResponse";

    fn to_element(&self) -> Element {
        Element::new(Self::LOCAL_NAME)
    }

    fn from_element(_element: &Element) -> Result<Self, CallError> {
        Ok(Self)
    }
}

// ---------------------------------------------------------------------------
// Access control
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetObjectAccessControlPolicy {
    pub bucket: String,
    pub key: String,
    pub auth: RequestAuth,
}

impl SoapPayload for GetObjectAccessControlPolicy {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "GetObjectAccessControlPolicy";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_string(&mut element, "Bucket", &self.bucket);
        push_string(&mut element, "Key", &self.key);
        self.auth.write_into(&mut element);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            bucket: read_string(element, "Bucket"),
            key: read_string(element, "Key"),
            auth: RequestAuth::read(element)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetObjectAccessControlPolicyResponse {
    pub get_object_access_control_policy_response: Option<AccessControlPolicy>,
}

impl SoapPayload for GetObjectAccessControlPolicyResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "GetObjectAccessControlPolicyResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        if let Some(policy) = &self.get_object_access_control_policy_response {
            push_child(
                &mut element,
                policy.to_element("GetObjectAccessControlPolicyResponse"),
            );
        }
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            get_object_access_control_policy_response: read_wrapped(
                element,
                "GetObjectAccessControlPolicyResponse",
                |e| AccessControlPolicy::from_element(e),
            )?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetBucketAccessControlPolicy {
    pub bucket: String,
    pub auth: RequestAuth,
}

impl SoapPayload for GetBucketAccessControlPolicy {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "GetBucketAccessControlPolicy";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_string(&mut element, "Bucket", &self.bucket);
        self.auth.write_into(&mut element);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            bucket: read_string(element, "Bucket"),
            auth: RequestAuth::read(element)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetBucketAccessControlPolicyResponse {
    pub get_bucket_access_control_policy_response: Option<AccessControlPolicy>,
}

impl SoapPayload for GetBucketAccessControlPolicyResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "GetBucketAccessControlPolicyResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        if let Some(policy) = &self.get_bucket_access_control_policy_response {
            push_child(
                &mut element,
                policy.to_element("GetBucketAccessControlPolicyResponse"),
            );
        }
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            get_bucket_access_control_policy_response: read_wrapped(
                element,
                "GetBucketAccessControlPolicyResponse",
                |e| AccessControlPolicy::from_element(e),
            )?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetObjectAccessControlPolicy {
    pub bucket: String,
    pub key: String,
    pub access_control_list: Option<AccessControlList>,
    pub auth: RequestAuth,
}

impl SoapPayload for SetObjectAccessControlPolicy {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "SetObjectAccessControlPolicy";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_string(&mut element, "Bucket", &self.bucket);
        push_string(&mut element, "Key", &self.key);
        if let Some(acl) = &self.access_control_list {
            push_child(&mut element, acl.to_element("AccessControlList"));
        }
        self.auth.write_into(&mut element);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            bucket: read_string(element, "Bucket"),
            key: read_string(element, "Key"),
            access_control_list: read_wrapped(element, "AccessControlList", |e| {
                AccessControlList::from_element(e)
            })?,
            auth: RequestAuth::read(element)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetObjectAccessControlPolicyResponse;

impl SoapPayload for SetObjectAccessControlPolicyResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "SetObjectAccessControlPolicyResponse";

    fn to_element(&self) -> Element {
        Element::new(Self::LOCAL_NAME)
    }

    fn from_element(_element: &Element) -> Result<Self, CallError> {
        Ok(Self)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetBucketAccessControlPolicy {
    pub bucket: String,
    pub access_control_list: Option<AccessControlList>,
    pub auth: RequestAuth,
}

impl SoapPayload for SetBucketAccessControlPolicy {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "SetBucketAccessControlPolicy";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_string(&mut element, "Bucket", &self.bucket);
        if let Some(acl) = &self.access_control_list {
            push_child(&mut element, acl.to_element("AccessControlList"));
        }
        self.auth.write_into(&mut element);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            bucket: read_string(element, "Bucket"),
            access_control_list: read_wrapped(element, "AccessControlList", |e| {
                AccessControlList::from_element(e)
            })?,
            auth: RequestAuth::read(element)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetBucketAccessControlPolicyResponse;

impl SoapPayload for SetBucketAccessControlPolicyResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "SetBucketAccessControlPolicyResponse";

    fn to_element(&self) -> Element {
        Element::new(Self::LOCAL_NAME)
    }

    fn from_element(_element: &Element) -> Result<Self, CallError> {
        Ok(Self)
    }
}

// ---------------------------------------------------------------------------
// Object operations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetObject {
    pub bucket: String,
    pub key: String,
    pub get_metadata: bool,
    pub get_data: bool,
    pub inline_data: bool,
    pub auth: RequestAuth,
}

impl SoapPayload for GetObject {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "GetObject";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_string(&mut element, "Bucket", &self.bucket);
        push_string(&mut element, "Key", &self.key);
        push_bool(&mut element, "GetMetadata", self.get_metadata);
        push_bool(&mut element, "GetData", self.get_data);
        push_bool(&mut element, "InlineData", self.inline_data);
        self.auth.write_into(&mut element);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        use soapcore::xmlutil::parse_child_or_default;
        Ok(Self {
            bucket: read_string(element, "Bucket"),
            key: read_string(element, "Key"),
            get_metadata: parse_child_or_default(element, "GetMetadata")?,
            get_data: parse_child_or_default(element, "GetData")?,
            inline_data: parse_child_or_default(element, "InlineData")?,
            auth: RequestAuth::read(element)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetObjectResponse {
    pub get_object_response: Option<GetObjectResult>,
}

impl SoapPayload for GetObjectResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "GetObjectResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        if let Some(result) = &self.get_object_response {
            push_child(&mut element, result.to_element("GetObjectResponse"));
        }
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            get_object_response: read_wrapped(element, "GetObjectResponse", |e| {
                GetObjectResult::from_element(e)
            })?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetObjectExtended {
    pub bucket: String,
    pub key: String,
    pub get_metadata: bool,
    pub get_data: bool,
    pub inline_data: bool,
    pub byte_range_start: i64,
    pub byte_range_end: i64,
    pub if_modified_since: Option<DateTime<Utc>>,
    pub if_unmodified_since: Option<DateTime<Utc>>,
    pub if_match: Option<String>,
    pub if_none_match: Option<String>,
    pub return_complete_object_on_condition_failure: bool,
    pub auth: RequestAuth,
}

impl SoapPayload for GetObjectExtended {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "GetObjectExtended";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_string(&mut element, "Bucket", &self.bucket);
        push_string(&mut element, "Key", &self.key);
        push_bool(&mut element, "GetMetadata", self.get_metadata);
        push_bool(&mut element, "GetData", self.get_data);
        push_bool(&mut element, "InlineData", self.inline_data);
        push_i64(&mut element, "ByteRangeStart", self.byte_range_start);
        push_i64(&mut element, "ByteRangeEnd", self.byte_range_end);
        push_time(&mut element, "IfModifiedSince", self.if_modified_since.as_ref());
        push_time(
            &mut element,
            "IfUnmodifiedSince",
            self.if_unmodified_since.as_ref(),
        );
        if let Some(if_match) = &self.if_match {
            push_string(&mut element, "IfMatch", if_match);
        }
        if let Some(if_none_match) = &self.if_none_match {
            push_string(&mut element, "IfNoneMatch", if_none_match);
        }
        push_bool(
            &mut element,
            "ReturnCompleteObjectOnConditionFailure",
            self.return_complete_object_on_condition_failure,
        );
        self.auth.write_into(&mut element);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        use soapcore::xmlutil::parse_child_or_default;
        use crate::wire::read_opt_string;
        Ok(Self {
            bucket: read_string(element, "Bucket"),
            key: read_string(element, "Key"),
            get_metadata: parse_child_or_default(element, "GetMetadata")?,
            get_data: parse_child_or_default(element, "GetData")?,
            inline_data: parse_child_or_default(element, "InlineData")?,
            byte_range_start: parse_child_or_default(element, "ByteRangeStart")?,
            byte_range_end: parse_child_or_default(element, "ByteRangeEnd")?,
            if_modified_since: read_time(element, "IfModifiedSince")?,
            if_unmodified_since: read_time(element, "IfUnmodifiedSince")?,
            if_match: read_opt_string(element, "IfMatch"),
            if_none_match: read_opt_string(element, "IfNoneMatch"),
            return_complete_object_on_condition_failure: parse_child_or_default(
                element,
                "ReturnCompleteObjectOnConditionFailure",
            )?,
            auth: RequestAuth::read(element)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetObjectExtendedResponse {
    pub get_object_response: Option<GetObjectResult>,
}

impl SoapPayload for GetObjectExtendedResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "GetObjectExtendedResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        if let Some(result) = &self.get_object_response {
            push_child(&mut element, result.to_element("GetObjectResponse"));
        }
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            get_object_response: read_wrapped(element, "GetObjectResponse", |e| {
                GetObjectResult::from_element(e)
            })?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PutObject {
    pub bucket: String,
    pub key: String,
    pub metadata: Option<MetadataEntry>,
    pub content_length: i64,
    pub access_control_list: Option<AccessControlList>,
    pub storage_class: Option<StorageClass>,
    pub auth: RequestAuth,
}

impl SoapPayload for PutObject {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "PutObject";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_string(&mut element, "Bucket", &self.bucket);
        push_string(&mut element, "Key", &self.key);
        if let Some(metadata) = &self.metadata {
            push_child(&mut element, metadata.to_element("Metadata"));
        }
        push_i64(&mut element, "ContentLength", self.content_length);
        if let Some(acl) = &self.access_control_list {
            push_child(&mut element, acl.to_element("AccessControlList"));
        }
        if let Some(storage_class) = &self.storage_class {
            push_string(&mut element, "StorageClass", storage_class.as_str());
        }
        self.auth.write_into(&mut element);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        use soapcore::xmlutil::{parse_child, parse_child_or_default};
        Ok(Self {
            bucket: read_string(element, "Bucket"),
            key: read_string(element, "Key"),
            metadata: read_wrapped(element, "Metadata", |e| MetadataEntry::from_element(e))?,
            content_length: parse_child_or_default(element, "ContentLength")?,
            access_control_list: read_wrapped(element, "AccessControlList", |e| {
                AccessControlList::from_element(e)
            })?,
            storage_class: parse_child(element, "StorageClass")?,
            auth: RequestAuth::read(element)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PutObjectResponse {
    pub put_object_response: Option<PutObjectResult>,
}

impl SoapPayload for PutObjectResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "PutObjectResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        if let Some(result) = &self.put_object_response {
            push_child(&mut element, result.to_element("PutObjectResponse"));
        }
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            put_object_response: read_wrapped(element, "PutObjectResponse", |e| {
                PutObjectResult::from_element(e)
            })?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PutObjectInline {
    pub bucket: String,
    pub key: String,
    pub metadata: Option<MetadataEntry>,
    pub data: Vec<u8>,
    pub content_length: i64,
    pub access_control_list: Option<AccessControlList>,
    pub storage_class: Option<StorageClass>,
    pub auth: RequestAuth,
}

impl SoapPayload for PutObjectInline {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "PutObjectInline";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_string(&mut element, "Bucket", &self.bucket);
        push_string(&mut element, "Key", &self.key);
        if let Some(metadata) = &self.metadata {
            push_child(&mut element, metadata.to_element("Metadata"));
        }
        crate::wire::push_bytes(&mut element, "Data", &self.data);
        push_i64(&mut element, "ContentLength", self.content_length);
        if let Some(acl) = &self.access_control_list {
            push_child(&mut element, acl.to_element("AccessControlList"));
        }
        if let Some(storage_class) = &self.storage_class {
            push_string(&mut element, "StorageClass", storage_class.as_str());
        }
        self.auth.write_into(&mut element);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        use soapcore::xmlutil::{parse_child, parse_child_or_default};
        Ok(Self {
            bucket: read_string(element, "Bucket"),
            key: read_string(element, "Key"),
            metadata: read_wrapped(element, "Metadata", |e| MetadataEntry::from_element(e))?,
            data: crate::wire::read_bytes(element, "Data")?.unwrap_or_default(),
            content_length: parse_child_or_default(element, "ContentLength")?,
            access_control_list: read_wrapped(element, "AccessControlList", |e| {
                AccessControlList::from_element(e)
            })?,
            storage_class: parse_child(element, "StorageClass")?,
            auth: RequestAuth::read(element)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PutObjectInlineResponse {
    pub put_object_inline_response: Option<PutObjectResult>,
}

impl SoapPayload for PutObjectInlineResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "PutObjectInlineResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        if let Some(result) = &self.put_object_inline_response {
            push_child(&mut element, result.to_element("PutObjectInlineResponse"));
        }
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            put_object_inline_response: read_wrapped(element, "PutObjectInlineResponse", |e| {
                PutObjectResult::from_element(e)
            })?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteObject {
    pub bucket: String,
    pub key: String,
    pub auth: RequestAuth,
}

impl SoapPayload for DeleteObject {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "DeleteObject";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_string(&mut element, "Bucket", &self.bucket);
        push_string(&mut element, "Key", &self.key);
        self.auth.write_into(&mut element);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            bucket: read_string(element, "Bucket"),
            key: read_string(element, "Key"),
            auth: RequestAuth::read(element)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteObjectResponse {
    pub delete_object_response: Option<Status>,
}

impl SoapPayload for DeleteObjectResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "DeleteObjectResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        if let Some(status) = &self.delete_object_response {
            push_child(&mut element, status.to_element("DeleteObjectResponse"));
        }
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            delete_object_response: read_wrapped(element, "DeleteObjectResponse", |e| {
                Status::from_element(e)
            })?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyObject {
    pub source_bucket: String,
    pub source_key: String,
    pub destination_bucket: String,
    pub destination_key: String,
    pub metadata_directive: Option<MetadataDirective>,
    pub metadata: Option<MetadataEntry>,
    pub access_control_list: Option<AccessControlList>,
    pub copy_source_if_modified_since: Option<DateTime<Utc>>,
    pub copy_source_if_unmodified_since: Option<DateTime<Utc>>,
    pub copy_source_if_match: Option<String>,
    pub copy_source_if_none_match: Option<String>,
    pub storage_class: Option<StorageClass>,
    pub auth: RequestAuth,
}

impl SoapPayload for CopyObject {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "CopyObject";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_string(&mut element, "SourceBucket", &self.source_bucket);
        push_string(&mut element, "SourceKey", &self.source_key);
        push_string(&mut element, "DestinationBucket", &self.destination_bucket);
        push_string(&mut element, "DestinationKey", &self.destination_key);
        if let Some(directive) = &self.metadata_directive {
            push_string(&mut element, "MetadataDirective", directive.as_str());
        }
        if let Some(metadata) = &self.metadata {
            push_child(&mut element, metadata.to_element("Metadata"));
        }
        if let Some(acl) = &self.access_control_list {
            push_child(&mut element, acl.to_element("AccessControlList"));
        }
        push_time(
            &mut element,
            "CopySourceIfModifiedSince",
            self.copy_source_if_modified_since.as_ref(),
        );
        push_time(
            &mut element,
            "CopySourceIfUnmodifiedSince",
            self.copy_source_if_unmodified_since.as_ref(),
        );
        if let Some(if_match) = &self.copy_source_if_match {
            push_string(&mut element, "CopySourceIfMatch", if_match);
        }
        if let Some(if_none_match) = &self.copy_source_if_none_match {
            push_string(&mut element, "CopySourceIfNoneMatch", if_none_match);
        }
        if let Some(storage_class) = &self.storage_class {
            push_string(&mut element, "StorageClass", storage_class.as_str());
        }
        self.auth.write_into(&mut element);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        use soapcore::xmlutil::parse_child;
        use crate::wire::read_opt_string;
        Ok(Self {
            source_bucket: read_string(element, "SourceBucket"),
            source_key: read_string(element, "SourceKey"),
            destination_bucket: read_string(element, "DestinationBucket"),
            destination_key: read_string(element, "DestinationKey"),
            metadata_directive: parse_child(element, "MetadataDirective")?,
            metadata: read_wrapped(element, "Metadata", |e| MetadataEntry::from_element(e))?,
            access_control_list: read_wrapped(element, "AccessControlList", |e| {
                AccessControlList::from_element(e)
            })?,
            copy_source_if_modified_since: read_time(element, "CopySourceIfModifiedSince")?,
            copy_source_if_unmodified_since: read_time(element, "CopySourceIfUnmodifiedSince")?,
            copy_source_if_match: read_opt_string(element, "CopySourceIfMatch"),
            copy_source_if_none_match: read_opt_string(element, "CopySourceIfNoneMatch"),
            storage_class: parse_child(element, "StorageClass")?,
            auth: RequestAuth::read(element)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyObjectResponse {
    pub copy_object_result: Option<CopyObjectResult>,
}

impl SoapPayload for CopyObjectResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "CopyObjectResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        if let Some(result) = &self.copy_object_result {
            push_child(&mut element, result.to_element("CopyObjectResult"));
        }
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            copy_object_result: read_wrapped(element, "CopyObjectResult", |e| {
                CopyObjectResult::from_element(e)
            })?,
        })
    }
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListBucket {
    pub bucket: String,
    pub prefix: String,
    pub marker: String,
    pub max_keys: i32,
    pub delimiter: String,
    pub auth: RequestAuth,
}

impl SoapPayload for ListBucket {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "ListBucket";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_string(&mut element, "Bucket", &self.bucket);
        push_string(&mut element, "Prefix", &self.prefix);
        push_string(&mut element, "Marker", &self.marker);
        push_i32(&mut element, "MaxKeys", self.max_keys);
        push_string(&mut element, "Delimiter", &self.delimiter);
        self.auth.write_into(&mut element);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        use soapcore::xmlutil::parse_child_or_default;
        Ok(Self {
            bucket: read_string(element, "Bucket"),
            prefix: read_string(element, "Prefix"),
            marker: read_string(element, "Marker"),
            max_keys: parse_child_or_default(element, "MaxKeys")?,
            delimiter: read_string(element, "Delimiter"),
            auth: RequestAuth::read(element)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListBucketResponse {
    pub list_bucket_response: Option<ListBucketResult>,
}

impl SoapPayload for ListBucketResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "ListBucketResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        if let Some(result) = &self.list_bucket_response {
            push_child(&mut element, result.to_element("ListBucketResponse"));
        }
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            list_bucket_response: read_wrapped(element, "ListBucketResponse", |e| {
                ListBucketResult::from_element(e)
            })?,
        })
    }
}

/// Response-only payload: version listings arrive over the same channel but
/// the request travels as a REST subresource, not a SOAP operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListVersionsResponse {
    pub list_versions_response: Option<ListVersionsResult>,
}

impl SoapPayload for ListVersionsResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "ListVersionsResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        if let Some(result) = &self.list_versions_response {
            push_child(&mut element, result.to_element("ListVersionsResponse"));
        }
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            list_versions_response: read_wrapped(element, "ListVersionsResponse", |e| {
                ListVersionsResult::from_element(e)
            })?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAllMyBuckets {
    pub auth: RequestAuth,
}

impl SoapPayload for ListAllMyBuckets {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "ListAllMyBuckets";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        self.auth.write_into(&mut element);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            auth: RequestAuth::read(element)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAllMyBucketsResponse {
    pub list_all_my_buckets_response: Option<ListAllMyBucketsResult>,
}

impl SoapPayload for ListAllMyBucketsResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "ListAllMyBucketsResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        if let Some(result) = &self.list_all_my_buckets_response {
            push_child(&mut element, result.to_element("ListAllMyBucketsResponse"));
        }
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            list_all_my_buckets_response: read_wrapped(element, "ListAllMyBucketsResponse", |e| {
                ListAllMyBucketsResult::from_element(e)
            })?,
        })
    }
}

/// Response-only payload produced by browser-based POST uploads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostResponse {
    pub bucket: String,
    pub key: String,
    pub etag: String,
}

impl SoapPayload for PostResponse {
    const NAMESPACE: &'static str = S3_NS;
    const LOCAL_NAME: &'static str = "PostResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_string(&mut element, "Bucket", &self.bucket);
        push_string(&mut element, "Key", &self.key);
        push_string(&mut element, "ETag", &self.etag);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            bucket: read_string(element, "Bucket"),
            key: read_string(element, "Key"),
            etag: read_string(element, "ETag"),
        })
    }
}
