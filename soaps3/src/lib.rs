//! # soaps3 - Amazon S3 SOAP API bindings (2006-03-01)
//!
//! Typed request/response pairs for the legacy S3 SOAP interface plus the
//! [`S3Client`] facade. The schema surface is large but mechanical; all
//! envelope and transport behavior lives in [`soapcore`].
//!
//! Only `ListBucket` and `ListAllMyBuckets` carry a SOAPAction URI; the
//! other operations are dispatched by their body element alone.

mod client;
mod entities;
mod enums;
mod ops;
mod wire;

pub use client::{DEFAULT_ENDPOINT, S3Client};
pub use entities::{
    AccessControlList, AccessControlPolicy, AmazonCustomerByEmail, BucketLoggingStatus,
    CanonicalUser, CopyObjectResult, CreateBucketConfiguration, CreateBucketResult,
    DeleteMarkerEntry, GetObjectResult, Grant, Grantee, Group, ListAllMyBucketsEntry,
    ListAllMyBucketsList, ListAllMyBucketsResult, ListBucketResult, ListEntry, ListVersionsResult,
    LocationConstraint, LoggingSettings, MetadataEntry, NotificationConfiguration, PrefixEntry,
    PutObjectResult, RequestPaymentConfiguration, Status, TopicConfiguration, VersionEntry,
    VersioningConfiguration,
};
pub use enums::{
    MetadataDirective, MfaDeleteStatus, Payer, Permission, StorageClass, VersioningStatus,
};
pub use ops::{
    CopyObject, CopyObjectResponse, CreateBucket, CreateBucketResponse, DeleteBucket,
    DeleteBucketResponse, DeleteObject, DeleteObjectResponse, GetBucketAccessControlPolicy,
    GetBucketAccessControlPolicyResponse, GetBucketLoggingStatus, GetBucketLoggingStatusResponse,
    GetObject, GetObjectAccessControlPolicy, GetObjectAccessControlPolicyResponse,
    GetObjectExtended, GetObjectExtendedResponse, GetObjectResponse, ListAllMyBuckets,
    ListAllMyBucketsResponse, ListBucket, ListBucketResponse, ListVersionsResponse, PostResponse,
    PutObject, PutObjectInline, PutObjectInlineResponse, PutObjectResponse, RequestAuth,
    S3_NS, SetBucketAccessControlPolicy, SetBucketAccessControlPolicyResponse,
    SetBucketLoggingStatus, SetBucketLoggingStatusResponse, SetObjectAccessControlPolicy,
    SetObjectAccessControlPolicyResponse,
};
