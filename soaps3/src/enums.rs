//! String enumerations of the S3 schema.

use std::fmt;
use std::str::FromStr;

macro_rules! s3_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(format!(
                        concat!("unknown ", stringify!($name), " value '{}'"),
                        other
                    )),
                }
            }
        }
    };
}

s3_enum! {
    /// ACL grant permission
    Permission {
        Read => "READ",
        Write => "WRITE",
        ReadAcp => "READACP",
        WriteAcp => "WRITEACP",
        FullControl => "FULLCONTROL",
    }
}

s3_enum! {
    StorageClass {
        Standard => "STANDARD",
        ReducedRedundancy => "REDUCEDREDUNDANCY",
        Glacier => "GLACIER",
        Unknown => "UNKNOWN",
    }
}

s3_enum! {
    /// Copy behavior for object metadata
    MetadataDirective {
        Copy => "COPY",
        Replace => "REPLACE",
    }
}

s3_enum! {
    Payer {
        BucketOwner => "BucketOwner",
        Requester => "Requester",
    }
}

s3_enum! {
    MfaDeleteStatus {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

s3_enum! {
    VersioningStatus {
        Enabled => "Enabled",
        Suspended => "Suspended",
    }
}
