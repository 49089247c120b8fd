use crate::Resource;
use sechub_core::CatalogError;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for CatalogError {
    fn from(err: ValidationError) -> Self {
        CatalogError::malformed(err.0)
    }
}

pub const MISSING_KIND: &str = "the resource must have a defined Kind";
pub const MISSING_VENDOR: &str = "the resource must be assigned to a vendor";
pub const MISSING_MAINTAINER: &str = "the resource must have at least one maintainer";
pub const MISSING_ICON: &str = "the resource must have a valid icon";
pub const MISSING_VERSION: &str = "the resource must have a version";

impl Resource {
    /// Checks the fields a descriptor needs before it may enter the catalog.
    /// Every violation is reported, joined with commas.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        if self.kind.is_empty() {
            violations.push(MISSING_KIND);
        }
        if self.vendor.is_empty() {
            violations.push(MISSING_VENDOR);
        }
        if self.maintainers.is_empty() {
            violations.push(MISSING_MAINTAINER);
        }
        if self.icon.is_empty() {
            violations.push(MISSING_ICON);
        }
        if self.version.is_empty() {
            violations.push(MISSING_VERSION);
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(violations.join(",")))
        }
    }
}
