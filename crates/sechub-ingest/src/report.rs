// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ImportEvent {
    VendorImported { name: String },
    VendorSkipped { name: String },
    ResourceImported { id: String, name: String, versions: usize },
    ResourceSkipped { id: String, name: String },
    PlaceholderVendorCreated { name: String },
    AttachedToVendor { name: String },
}

impl Display for ImportEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VendorImported { name } => write!(f, "Importing vendor {name}"),
            Self::VendorSkipped { name } => write!(f, "Vendor {name} already exists, skipping"),
            Self::ResourceImported { name, .. } => write!(f, "Importing resource {name}"),
            Self::ResourceSkipped { name, .. } => {
                write!(f, "Importing resource {name}\nAlready exists, skipping")
            }
            Self::PlaceholderVendorCreated { name } => write!(f, "  New vendor {name}"),
            Self::AttachedToVendor { name } => write!(f, "  Adding to vendor {name}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub events: Vec<ImportEvent>,
}

impl ImportReport {
    pub(crate) fn push(&mut self, event: ImportEvent) {
        self.events.push(event);
    }

    #[must_use]
    pub fn resources_imported(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ImportEvent::ResourceImported { .. }))
            .count()
    }

    #[must_use]
    pub fn vendors_imported(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ImportEvent::VendorImported { .. }))
            .count()
    }

    /// True when the run wrote nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.events.iter().all(|e| {
            matches!(
                e,
                ImportEvent::VendorSkipped { .. } | ImportEvent::ResourceSkipped { .. }
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_render_operator_lines() {
        let skipped = ImportEvent::ResourceSkipped {
            id: "apache".to_string(),
            name: "Apache".to_string(),
        };
        assert_eq!(
            skipped.to_string(),
            "Importing resource Apache\nAlready exists, skipping"
        );
        assert_eq!(
            ImportEvent::PlaceholderVendorCreated {
                name: "Traefik".to_string()
            }
            .to_string(),
            "  New vendor Traefik"
        );
    }

    #[test]
    fn events_serialize_with_snake_case_tag() {
        let json = serde_json::to_value(ImportEvent::VendorImported {
            name: "Apache".to_string(),
        })
        .expect("serialize");
        assert_eq!(json["event"], "vendor_imported");
        assert_eq!(json["name"], "Apache");
    }

    #[test]
    fn report_with_only_skips_is_noop() {
        let mut report = ImportReport::default();
        report.push(ImportEvent::VendorSkipped {
            name: "Apache".to_string(),
        });
        assert!(report.is_noop());
        report.push(ImportEvent::VendorImported {
            name: "Mongo".to_string(),
        });
        assert!(!report.is_noop());
        assert_eq!(report.vendors_imported(), 1);
    }
}
