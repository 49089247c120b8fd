use crate::resource::derive_id;
use crate::serde_helpers::scalar_string;
use serde::{Deserialize, Serialize};

pub const VENDOR_KIND: &str = "Vendor";

/// Publisher of catalog resources, identified by its display name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "VendorDocument", into = "VendorDocument")]
pub struct Vendor {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub website: String,
}

impl Vendor {
    #[must_use]
    pub fn id(&self) -> String {
        derive_id(&self.name)
    }

    /// Vendor lookups are case-normalized like resource lookups.
    #[must_use]
    pub fn matches_id(&self, id: &str) -> bool {
        self.id() == derive_id(id)
    }

    /// Rows synthesized during import for a vendor that has no descriptor.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.description.is_empty()
    }
}

#[derive(Serialize, Deserialize)]
struct VendorDocument {
    #[serde(default, deserialize_with = "scalar_string")]
    id: String,
    #[serde(default, deserialize_with = "scalar_string")]
    kind: String,
    #[serde(default, deserialize_with = "scalar_string")]
    name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    description: String,
    #[serde(default, deserialize_with = "scalar_string")]
    icon: String,
    #[serde(default, deserialize_with = "scalar_string")]
    website: String,
}

impl From<VendorDocument> for Vendor {
    fn from(doc: VendorDocument) -> Self {
        Self {
            name: doc.name,
            description: doc.description,
            icon: doc.icon,
            website: doc.website,
        }
    }
}

impl From<Vendor> for VendorDocument {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.id(),
            kind: VENDOR_KIND.to_string(),
            name: vendor.name,
            description: vendor.description,
            icon: vendor.icon,
            website: vendor.website,
        }
    }
}
