//! Data types shared by every extraction stage.

pub mod resource;

pub use resource::{
    CodeKeys, DocResources, ResourceRow, Scope, Source, SupplementalResources, UNKNOWN_TYPE,
};
