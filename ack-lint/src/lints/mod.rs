//! Built-in lints for generator config validation.

mod exception_codes;
mod ignore_entries;
mod ignored_override;
mod list_operation;
mod name_field;
mod owner_account_id;
mod rename_collision;
mod unknown_keys;

pub use exception_codes::ExceptionCodesLint;
pub use ignore_entries::IgnoreEntriesLint;
pub use ignored_override::IgnoredOverrideLint;
pub use list_operation::ListOperationLint;
pub use name_field::NameFieldLint;
pub use owner_account_id::OwnerAccountIdLint;
pub use rename_collision::RenameCollisionLint;
pub use unknown_keys::UnknownKeysLint;

/// Dotted location of a resource sub-config, e.g.
/// `resources.Topic.renames.operations.CreateTopic`.
pub(crate) fn resource_location(resource: &str, segments: &[&str]) -> String {
    let mut location = format!("resources.{}", resource);
    for segment in segments {
        location.push('.');
        location.push_str(segment);
    }
    location
}
