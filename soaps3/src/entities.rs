//! Schema entity types shared by the S3 operations.
//!
//! These are plain data shapes; each one knows how to write itself under a
//! caller-chosen element name (the same entity appears as `Owner`,
//! `TargetGrants`, … depending on context) and how to read itself back.

use chrono::{DateTime, Utc};
use soapcore::CallError;
use soapcore::xmlutil::{child, parse_child, parse_child_or_default, push_child, xml_children};
use xmltree::Element;

use crate::enums::{
    MfaDeleteStatus, Payer, Permission, StorageClass, VersioningStatus,
};
use crate::wire::{
    push_bool, push_i32, push_i64, push_string, push_time, read_bytes, read_opt_string,
    read_string, read_time,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataEntry {
    pub name: String,
    pub value: String,
}

impl MetadataEntry {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        push_string(&mut element, "Name", &self.name);
        push_string(&mut element, "Value", &self.value);
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            name: read_string(element, "Name"),
            value: read_string(element, "Value"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub code: i32,
    pub description: String,
}

impl Status {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        push_i32(&mut element, "Code", self.code);
        push_string(&mut element, "Description", &self.description);
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            code: parse_child_or_default(element, "Code")?,
            description: read_string(element, "Description"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBucketResult {
    pub bucket_name: String,
}

impl CreateBucketResult {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        push_string(&mut element, "BucketName", &self.bucket_name);
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            bucket_name: read_string(element, "BucketName"),
        })
    }
}

/// A user identified by canonical ID. Doubles as the `Owner` entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalUser {
    pub id: String,
    pub display_name: String,
}

impl CanonicalUser {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        push_string(&mut element, "ID", &self.id);
        push_string(&mut element, "DisplayName", &self.display_name);
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            id: read_string(element, "ID"),
            display_name: read_string(element, "DisplayName"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmazonCustomerByEmail {
    pub email_address: String,
}

impl AmazonCustomerByEmail {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        push_string(&mut element, "EmailAddress", &self.email_address);
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            email_address: read_string(element, "EmailAddress"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub uri: String,
}

impl Group {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        push_string(&mut element, "URI", &self.uri);
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            uri: read_string(element, "URI"),
        })
    }
}

/// The polymorphic grantee of an ACL grant.
///
/// On the wire the element is always named `Grantee` and the concrete kind
/// travels in `xsi:type`; decoding falls back to the field shape when the
/// attribute is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grantee {
    CanonicalUser(CanonicalUser),
    CustomerByEmail(AmazonCustomerByEmail),
    Group(Group),
}

impl Grantee {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let (mut element, kind) = match self {
            Grantee::CanonicalUser(user) => (user.to_element(name), "CanonicalUser"),
            Grantee::CustomerByEmail(customer) => {
                (customer.to_element(name), "AmazonCustomerByEmail")
            }
            Grantee::Group(group) => (group.to_element(name), "Group"),
        };
        element
            .attributes
            .insert("xsi:type".to_string(), kind.to_string());
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let declared = element
            .attributes
            .get("type")
            .or_else(|| element.attributes.get("xsi:type"))
            .map(|t| t.as_str());

        match declared {
            Some("CanonicalUser") => {
                return Ok(Grantee::CanonicalUser(CanonicalUser::from_element(element)?));
            }
            Some("AmazonCustomerByEmail") => {
                return Ok(Grantee::CustomerByEmail(AmazonCustomerByEmail::from_element(
                    element,
                )?));
            }
            Some("Group") => return Ok(Grantee::Group(Group::from_element(element)?)),
            _ => {}
        }

        if child(element, "EmailAddress").is_some() {
            Ok(Grantee::CustomerByEmail(AmazonCustomerByEmail::from_element(
                element,
            )?))
        } else if child(element, "URI").is_some() {
            Ok(Grantee::Group(Group::from_element(element)?))
        } else if child(element, "ID").is_some() {
            Ok(Grantee::CanonicalUser(CanonicalUser::from_element(element)?))
        } else {
            Err(CallError::Serialization(
                "grantee element carries no recognizable identity".to_string(),
            ))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grant {
    pub grantee: Option<Grantee>,
    pub permission: Option<Permission>,
}

impl Grant {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        if let Some(grantee) = &self.grantee {
            push_child(&mut element, grantee.to_element("Grantee"));
        }
        if let Some(permission) = &self.permission {
            push_string(&mut element, "Permission", permission.as_str());
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let grantee = match child(element, "Grantee") {
            Some(grantee_elem) => Some(Grantee::from_element(grantee_elem)?),
            None => None,
        };
        Ok(Self {
            grantee,
            permission: parse_child(element, "Permission")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessControlList {
    pub grant: Option<Grant>,
}

impl AccessControlList {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        if let Some(grant) = &self.grant {
            push_child(&mut element, grant.to_element("Grant"));
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let grant = match child(element, "Grant") {
            Some(grant_elem) => Some(Grant::from_element(grant_elem)?),
            None => None,
        };
        Ok(Self { grant })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessControlPolicy {
    pub owner: Option<CanonicalUser>,
    pub access_control_list: Option<AccessControlList>,
}

impl AccessControlPolicy {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        if let Some(owner) = &self.owner {
            push_child(&mut element, owner.to_element("Owner"));
        }
        if let Some(acl) = &self.access_control_list {
            push_child(&mut element, acl.to_element("AccessControlList"));
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let owner = match child(element, "Owner") {
            Some(owner_elem) => Some(CanonicalUser::from_element(owner_elem)?),
            None => None,
        };
        let access_control_list = match child(element, "AccessControlList") {
            Some(acl_elem) => Some(AccessControlList::from_element(acl_elem)?),
            None => None,
        };
        Ok(Self {
            owner,
            access_control_list,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingSettings {
    pub target_bucket: String,
    pub target_prefix: String,
    pub target_grants: Option<AccessControlList>,
}

impl LoggingSettings {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        push_string(&mut element, "TargetBucket", &self.target_bucket);
        push_string(&mut element, "TargetPrefix", &self.target_prefix);
        if let Some(grants) = &self.target_grants {
            push_child(&mut element, grants.to_element("TargetGrants"));
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let target_grants = match child(element, "TargetGrants") {
            Some(grants_elem) => Some(AccessControlList::from_element(grants_elem)?),
            None => None,
        };
        Ok(Self {
            target_bucket: read_string(element, "TargetBucket"),
            target_prefix: read_string(element, "TargetPrefix"),
            target_grants,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketLoggingStatus {
    pub logging_enabled: Option<LoggingSettings>,
}

impl BucketLoggingStatus {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        if let Some(settings) = &self.logging_enabled {
            push_child(&mut element, settings.to_element("LoggingEnabled"));
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let logging_enabled = match child(element, "LoggingEnabled") {
            Some(settings_elem) => Some(LoggingSettings::from_element(settings_elem)?),
            None => None,
        };
        Ok(Self { logging_enabled })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectResult {
    pub status: Option<Status>,
    pub metadata: Vec<MetadataEntry>,
    pub data: Option<Vec<u8>>,
    pub last_modified: Option<DateTime<Utc>>,
    pub etag: String,
}

impl GetObjectResult {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        if let Some(status) = &self.status {
            push_child(&mut element, status.to_element("Status"));
        }
        for entry in &self.metadata {
            push_child(&mut element, entry.to_element("Metadata"));
        }
        if let Some(data) = &self.data {
            crate::wire::push_bytes(&mut element, "Data", data);
        }
        push_time(&mut element, "LastModified", self.last_modified.as_ref());
        push_string(&mut element, "ETag", &self.etag);
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let status = match child(element, "Status") {
            Some(status_elem) => Some(Status::from_element(status_elem)?),
            None => None,
        };
        let mut metadata = Vec::new();
        for entry in xml_children(element).filter(|e| e.name == "Metadata") {
            metadata.push(MetadataEntry::from_element(entry)?);
        }
        Ok(Self {
            status,
            metadata,
            data: read_bytes(element, "Data")?,
            last_modified: read_time(element, "LastModified")?,
            etag: read_string(element, "ETag"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectResult {
    pub etag: String,
    pub last_modified: Option<DateTime<Utc>>,
}

impl PutObjectResult {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        push_string(&mut element, "ETag", &self.etag);
        push_time(&mut element, "LastModified", self.last_modified.as_ref());
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            etag: read_string(element, "ETag"),
            last_modified: read_time(element, "LastModified")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEntry {
    pub key: String,
    pub last_modified: Option<DateTime<Utc>>,
    pub etag: String,
    pub size: i64,
    pub owner: Option<CanonicalUser>,
    pub storage_class: Option<StorageClass>,
}

impl ListEntry {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        push_string(&mut element, "Key", &self.key);
        push_time(&mut element, "LastModified", self.last_modified.as_ref());
        push_string(&mut element, "ETag", &self.etag);
        push_i64(&mut element, "Size", self.size);
        if let Some(owner) = &self.owner {
            push_child(&mut element, owner.to_element("Owner"));
        }
        if let Some(storage_class) = &self.storage_class {
            push_string(&mut element, "StorageClass", storage_class.as_str());
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let owner = match child(element, "Owner") {
            Some(owner_elem) => Some(CanonicalUser::from_element(owner_elem)?),
            None => None,
        };
        Ok(Self {
            key: read_string(element, "Key"),
            last_modified: read_time(element, "LastModified")?,
            etag: read_string(element, "ETag"),
            size: parse_child_or_default(element, "Size")?,
            owner,
            storage_class: parse_child(element, "StorageClass")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionEntry {
    pub key: String,
    pub version_id: String,
    pub is_latest: bool,
    pub last_modified: Option<DateTime<Utc>>,
    pub etag: String,
    pub size: i64,
    pub owner: Option<CanonicalUser>,
    pub storage_class: Option<StorageClass>,
}

impl VersionEntry {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        push_string(&mut element, "Key", &self.key);
        push_string(&mut element, "VersionId", &self.version_id);
        push_bool(&mut element, "IsLatest", self.is_latest);
        push_time(&mut element, "LastModified", self.last_modified.as_ref());
        push_string(&mut element, "ETag", &self.etag);
        push_i64(&mut element, "Size", self.size);
        if let Some(owner) = &self.owner {
            push_child(&mut element, owner.to_element("Owner"));
        }
        if let Some(storage_class) = &self.storage_class {
            push_string(&mut element, "StorageClass", storage_class.as_str());
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let owner = match child(element, "Owner") {
            Some(owner_elem) => Some(CanonicalUser::from_element(owner_elem)?),
            None => None,
        };
        Ok(Self {
            key: read_string(element, "Key"),
            version_id: read_string(element, "VersionId"),
            is_latest: parse_child_or_default(element, "IsLatest")?,
            last_modified: read_time(element, "LastModified")?,
            etag: read_string(element, "ETag"),
            size: parse_child_or_default(element, "Size")?,
            owner,
            storage_class: parse_child(element, "StorageClass")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteMarkerEntry {
    pub key: String,
    pub version_id: String,
    pub is_latest: bool,
    pub last_modified: Option<DateTime<Utc>>,
    pub owner: Option<CanonicalUser>,
}

impl DeleteMarkerEntry {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        push_string(&mut element, "Key", &self.key);
        push_string(&mut element, "VersionId", &self.version_id);
        push_bool(&mut element, "IsLatest", self.is_latest);
        push_time(&mut element, "LastModified", self.last_modified.as_ref());
        if let Some(owner) = &self.owner {
            push_child(&mut element, owner.to_element("Owner"));
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let owner = match child(element, "Owner") {
            Some(owner_elem) => Some(CanonicalUser::from_element(owner_elem)?),
            None => None,
        };
        Ok(Self {
            key: read_string(element, "Key"),
            version_id: read_string(element, "VersionId"),
            is_latest: parse_child_or_default(element, "IsLatest")?,
            last_modified: read_time(element, "LastModified")?,
            owner,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixEntry {
    pub prefix: String,
}

impl PrefixEntry {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        push_string(&mut element, "Prefix", &self.prefix);
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            prefix: read_string(element, "Prefix"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListBucketResult {
    pub metadata: Vec<MetadataEntry>,
    pub name: String,
    pub prefix: String,
    pub marker: String,
    pub next_marker: Option<String>,
    pub max_keys: i32,
    pub delimiter: Option<String>,
    pub is_truncated: bool,
    pub contents: Vec<ListEntry>,
    pub common_prefixes: Vec<PrefixEntry>,
}

impl ListBucketResult {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        for entry in &self.metadata {
            push_child(&mut element, entry.to_element("Metadata"));
        }
        push_string(&mut element, "Name", &self.name);
        push_string(&mut element, "Prefix", &self.prefix);
        push_string(&mut element, "Marker", &self.marker);
        if let Some(next_marker) = &self.next_marker {
            push_string(&mut element, "NextMarker", next_marker);
        }
        push_i32(&mut element, "MaxKeys", self.max_keys);
        if let Some(delimiter) = &self.delimiter {
            push_string(&mut element, "Delimiter", delimiter);
        }
        push_bool(&mut element, "IsTruncated", self.is_truncated);
        for entry in &self.contents {
            push_child(&mut element, entry.to_element("Contents"));
        }
        for prefix in &self.common_prefixes {
            push_child(&mut element, prefix.to_element("CommonPrefixes"));
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let mut metadata = Vec::new();
        for entry in xml_children(element).filter(|e| e.name == "Metadata") {
            metadata.push(MetadataEntry::from_element(entry)?);
        }
        let mut contents = Vec::new();
        for entry in xml_children(element).filter(|e| e.name == "Contents") {
            contents.push(ListEntry::from_element(entry)?);
        }
        let mut common_prefixes = Vec::new();
        for entry in xml_children(element).filter(|e| e.name == "CommonPrefixes") {
            common_prefixes.push(PrefixEntry::from_element(entry)?);
        }
        Ok(Self {
            metadata,
            name: read_string(element, "Name"),
            prefix: read_string(element, "Prefix"),
            marker: read_string(element, "Marker"),
            next_marker: read_opt_string(element, "NextMarker"),
            max_keys: parse_child_or_default(element, "MaxKeys")?,
            delimiter: read_opt_string(element, "Delimiter"),
            is_truncated: parse_child_or_default(element, "IsTruncated")?,
            contents,
            common_prefixes,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListVersionsResult {
    pub metadata: Vec<MetadataEntry>,
    pub name: String,
    pub prefix: String,
    pub key_marker: String,
    pub version_id_marker: String,
    pub next_key_marker: Option<String>,
    pub next_version_id_marker: Option<String>,
    pub max_keys: i32,
    pub delimiter: Option<String>,
    pub is_truncated: bool,
    pub common_prefixes: Vec<PrefixEntry>,
    pub version: Option<VersionEntry>,
    pub delete_marker: Option<DeleteMarkerEntry>,
}

impl ListVersionsResult {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        for entry in &self.metadata {
            push_child(&mut element, entry.to_element("Metadata"));
        }
        push_string(&mut element, "Name", &self.name);
        push_string(&mut element, "Prefix", &self.prefix);
        push_string(&mut element, "KeyMarker", &self.key_marker);
        push_string(&mut element, "VersionIdMarker", &self.version_id_marker);
        if let Some(next_key_marker) = &self.next_key_marker {
            push_string(&mut element, "NextKeyMarker", next_key_marker);
        }
        if let Some(next_version_id_marker) = &self.next_version_id_marker {
            push_string(&mut element, "NextVersionIdMarker", next_version_id_marker);
        }
        push_i32(&mut element, "MaxKeys", self.max_keys);
        if let Some(delimiter) = &self.delimiter {
            push_string(&mut element, "Delimiter", delimiter);
        }
        push_bool(&mut element, "IsTruncated", self.is_truncated);
        for prefix in &self.common_prefixes {
            push_child(&mut element, prefix.to_element("CommonPrefixes"));
        }
        if let Some(version) = &self.version {
            push_child(&mut element, version.to_element("Version"));
        }
        if let Some(delete_marker) = &self.delete_marker {
            push_child(&mut element, delete_marker.to_element("DeleteMarker"));
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let mut metadata = Vec::new();
        for entry in xml_children(element).filter(|e| e.name == "Metadata") {
            metadata.push(MetadataEntry::from_element(entry)?);
        }
        let mut common_prefixes = Vec::new();
        for entry in xml_children(element).filter(|e| e.name == "CommonPrefixes") {
            common_prefixes.push(PrefixEntry::from_element(entry)?);
        }
        let version = match child(element, "Version") {
            Some(version_elem) => Some(VersionEntry::from_element(version_elem)?),
            None => None,
        };
        let delete_marker = match child(element, "DeleteMarker") {
            Some(marker_elem) => Some(DeleteMarkerEntry::from_element(marker_elem)?),
            None => None,
        };
        Ok(Self {
            metadata,
            name: read_string(element, "Name"),
            prefix: read_string(element, "Prefix"),
            key_marker: read_string(element, "KeyMarker"),
            version_id_marker: read_string(element, "VersionIdMarker"),
            next_key_marker: read_opt_string(element, "NextKeyMarker"),
            next_version_id_marker: read_opt_string(element, "NextVersionIdMarker"),
            max_keys: parse_child_or_default(element, "MaxKeys")?,
            delimiter: read_opt_string(element, "Delimiter"),
            is_truncated: parse_child_or_default(element, "IsTruncated")?,
            common_prefixes,
            version,
            delete_marker,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAllMyBucketsEntry {
    pub name: String,
    pub creation_date: Option<DateTime<Utc>>,
}

impl ListAllMyBucketsEntry {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        push_string(&mut element, "Name", &self.name);
        push_time(&mut element, "CreationDate", self.creation_date.as_ref());
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            name: read_string(element, "Name"),
            creation_date: read_time(element, "CreationDate")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAllMyBucketsList {
    pub bucket: Vec<ListAllMyBucketsEntry>,
}

impl ListAllMyBucketsList {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        for entry in &self.bucket {
            push_child(&mut element, entry.to_element("Bucket"));
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let mut bucket = Vec::new();
        for entry in xml_children(element).filter(|e| e.name == "Bucket") {
            bucket.push(ListAllMyBucketsEntry::from_element(entry)?);
        }
        Ok(Self { bucket })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAllMyBucketsResult {
    pub owner: Option<CanonicalUser>,
    pub buckets: Option<ListAllMyBucketsList>,
}

impl ListAllMyBucketsResult {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        if let Some(owner) = &self.owner {
            push_child(&mut element, owner.to_element("Owner"));
        }
        if let Some(buckets) = &self.buckets {
            push_child(&mut element, buckets.to_element("Buckets"));
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let owner = match child(element, "Owner") {
            Some(owner_elem) => Some(CanonicalUser::from_element(owner_elem)?),
            None => None,
        };
        let buckets = match child(element, "Buckets") {
            Some(buckets_elem) => Some(ListAllMyBucketsList::from_element(buckets_elem)?),
            None => None,
        };
        Ok(Self { owner, buckets })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyObjectResult {
    pub last_modified: Option<DateTime<Utc>>,
    pub etag: String,
}

impl CopyObjectResult {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        push_time(&mut element, "LastModified", self.last_modified.as_ref());
        push_string(&mut element, "ETag", &self.etag);
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            last_modified: read_time(element, "LastModified")?,
            etag: read_string(element, "ETag"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationConstraint {
    pub value: String,
}

impl LocationConstraint {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        soapcore::xmlutil::text_element(name, &self.value)
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            value: element
                .get_text()
                .map(|t| t.trim().to_string())
                .unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBucketConfiguration {
    pub location_constraint: Option<LocationConstraint>,
}

impl CreateBucketConfiguration {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        if let Some(constraint) = &self.location_constraint {
            push_child(&mut element, constraint.to_element("LocationConstraint"));
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let location_constraint = match child(element, "LocationConstraint") {
            Some(constraint_elem) => Some(LocationConstraint::from_element(constraint_elem)?),
            None => None,
        };
        Ok(Self {
            location_constraint,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestPaymentConfiguration {
    pub payer: Option<Payer>,
}

impl RequestPaymentConfiguration {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        if let Some(payer) = &self.payer {
            push_string(&mut element, "Payer", payer.as_str());
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            payer: parse_child(element, "Payer")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersioningConfiguration {
    pub status: Option<VersioningStatus>,
    pub mfa_delete: Option<MfaDeleteStatus>,
}

impl VersioningConfiguration {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        if let Some(status) = &self.status {
            push_string(&mut element, "Status", status.as_str());
        }
        if let Some(mfa_delete) = &self.mfa_delete {
            push_string(&mut element, "MfaDelete", mfa_delete.as_str());
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            status: parse_child(element, "Status")?,
            mfa_delete: parse_child(element, "MfaDelete")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicConfiguration {
    pub topic: String,
    pub event: Vec<String>,
}

impl TopicConfiguration {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        push_string(&mut element, "Topic", &self.topic);
        for event in &self.event {
            push_string(&mut element, "Event", event);
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let event = xml_children(element)
            .filter(|e| e.name == "Event")
            .filter_map(|e| e.get_text())
            .map(|t| t.trim().to_string())
            .collect();
        Ok(Self {
            topic: read_string(element, "Topic"),
            event,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationConfiguration {
    pub topic_configuration: Vec<TopicConfiguration>,
}

impl NotificationConfiguration {
    pub(crate) fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        for topic in &self.topic_configuration {
            push_child(&mut element, topic.to_element("TopicConfiguration"));
        }
        element
    }

    pub(crate) fn from_element(element: &Element) -> Result<Self, CallError> {
        let mut topic_configuration = Vec::new();
        for topic in xml_children(element).filter(|e| e.name == "TopicConfiguration") {
            topic_configuration.push(TopicConfiguration::from_element(topic)?);
        }
        Ok(Self {
            topic_configuration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn access_control_policy_round_trips() {
        let policy = AccessControlPolicy {
            owner: Some(CanonicalUser {
                id: "abc123".to_string(),
                display_name: "tester".to_string(),
            }),
            access_control_list: Some(AccessControlList {
                grant: Some(Grant {
                    grantee: Some(Grantee::Group(Group {
                        uri: "http://acs.amazonaws.com/groups/global/AllUsers".to_string(),
                    })),
                    permission: Some(Permission::Read),
                }),
            }),
        };

        let element = policy.to_element("AccessControlPolicy");
        let back = AccessControlPolicy::from_element(&element).unwrap();
        assert_eq!(back, policy);
    }

    #[test]
    fn grantee_decodes_by_declared_type() {
        let grantee = Grantee::CanonicalUser(CanonicalUser {
            id: "deadbeef".to_string(),
            display_name: "owner".to_string(),
        });
        let element = grantee.to_element("Grantee");
        assert_eq!(
            element.attributes.get("xsi:type").map(|s| s.as_str()),
            Some("CanonicalUser")
        );

        let back = Grantee::from_element(&element).unwrap();
        assert_eq!(back, grantee);
    }

    #[test]
    fn grantee_falls_back_to_field_shape() {
        let mut element = Element::new("Grantee");
        push_string(&mut element, "EmailAddress", "someone@example.com");

        let back = Grantee::from_element(&element).unwrap();
        assert_eq!(
            back,
            Grantee::CustomerByEmail(AmazonCustomerByEmail {
                email_address: "someone@example.com".to_string(),
            })
        );
    }

    #[test]
    fn empty_grantee_is_rejected() {
        let element = Element::new("Grantee");
        let err = Grantee::from_element(&element).unwrap_err();
        assert!(matches!(err, CallError::Serialization(_)));
    }

    #[test]
    fn list_bucket_result_collects_repeated_children() {
        let result = ListBucketResult {
            name: "photos".to_string(),
            max_keys: 1000,
            is_truncated: true,
            contents: vec![
                ListEntry {
                    key: "a.jpg".to_string(),
                    size: 1024,
                    storage_class: Some(StorageClass::Standard),
                    ..Default::default()
                },
                ListEntry {
                    key: "b.jpg".to_string(),
                    size: 2048,
                    ..Default::default()
                },
            ],
            common_prefixes: vec![PrefixEntry {
                prefix: "thumbs/".to_string(),
            }],
            ..Default::default()
        };

        let element = result.to_element("ListBucketResult");
        let back = ListBucketResult::from_element(&element).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn buckets_list_round_trips_with_dates() {
        let result = ListAllMyBucketsResult {
            owner: Some(CanonicalUser {
                id: "owner-id".to_string(),
                display_name: "owner".to_string(),
            }),
            buckets: Some(ListAllMyBucketsList {
                bucket: vec![ListAllMyBucketsEntry {
                    name: "backups".to_string(),
                    creation_date: Some(Utc.with_ymd_and_hms(2006, 3, 1, 0, 0, 0).unwrap()),
                }],
            }),
        };

        let element = result.to_element("ListAllMyBucketsResult");
        let back = ListAllMyBucketsResult::from_element(&element).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn location_constraint_is_text_content() {
        let constraint = LocationConstraint {
            value: "eu-west-1".to_string(),
        };
        let element = constraint.to_element("LocationConstraint");
        let back = LocationConstraint::from_element(&element).unwrap();
        assert_eq!(back, constraint);
    }
}
