//! Operation registry: the declarative table mapping (resource, operation) pairs to HTTP shapes.
//!
//! `resource` names the API surface, `descriptor` defines how each operation's parameters map
//! onto path, query, and body keys, and `catalog` holds the built-in Clerk table. [`Registry`]
//! indexes descriptors for lookup; [`RegistryBuilder`] validates custom tables before use.

pub mod catalog;
pub mod descriptor;
pub mod resource;

pub use descriptor::*;
pub use resource::*;

// std
use std::collections::HashSet;
// self
use crate::{_prelude::*, error::ConfigError};

/// Errors raised while validating a descriptor table.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum RegistryError {
	/// Two descriptors share the same (resource, operation) pair.
	#[error("Operation `{operation}` is registered twice for resource `{resource}`.")]
	DuplicateOperation {
		/// Resource of the duplicate.
		resource: Resource,
		/// Operation identifier of the duplicate.
		operation: &'static str,
	},
	/// Path templates must be rooted.
	#[error("Operation `{operation}` has a path that does not start with `/`: {path}.")]
	UnrootedPath {
		/// Operation identifier.
		operation: &'static str,
		/// Offending template.
		path: &'static str,
	},
	/// A placeholder has no matching path field.
	#[error("Operation `{operation}` does not bind the `{{{placeholder}}}` placeholder.")]
	UnboundPlaceholder {
		/// Operation identifier.
		operation: &'static str,
		/// Placeholder name.
		placeholder: &'static str,
	},
	/// A path field does not correspond to any placeholder.
	#[error("Operation `{operation}` declares path field `{key}` without a placeholder.")]
	UnusedPathField {
		/// Operation identifier.
		operation: &'static str,
		/// Path field key.
		key: &'static str,
	},
	/// A path field could resolve to nothing, leaving its placeholder empty.
	#[error("Operation `{operation}` declares path field `{key}` without a required value.")]
	OptionalPathField {
		/// Operation identifier.
		operation: &'static str,
		/// Path field key.
		key: &'static str,
	},
}

/// Indexed, immutable set of operation descriptors.
#[derive(Clone, Debug)]
pub struct Registry {
	operations: BTreeMap<Resource, Vec<OperationDescriptor>>,
}
impl Registry {
	/// Creates a builder for a validated custom registry.
	pub fn builder() -> RegistryBuilder {
		RegistryBuilder::default()
	}

	/// Looks up the descriptor for `(resource, operation)`.
	pub fn lookup(
		&self,
		resource: Resource,
		operation: &str,
	) -> Result<&OperationDescriptor, ConfigError> {
		self.operations
			.get(&resource)
			.and_then(|operations| operations.iter().find(|d| d.operation == operation))
			.ok_or_else(|| ConfigError::UnsupportedOperation {
				resource,
				operation: operation.to_owned(),
			})
	}

	/// Lists the operation identifiers registered for `resource`, in registration order.
	pub fn operations(&self, resource: Resource) -> Vec<&'static str> {
		self.operations
			.get(&resource)
			.map(|operations| operations.iter().map(|d| d.operation).collect())
			.unwrap_or_default()
	}

	/// Iterates over every descriptor, grouped by resource.
	pub fn descriptors(&self) -> impl Iterator<Item = &OperationDescriptor> {
		self.operations.values().flatten()
	}

	/// Number of registered descriptors.
	pub fn len(&self) -> usize {
		self.operations.values().map(Vec::len).sum()
	}

	/// Returns true when no descriptor is registered.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn index<I>(descriptors: I) -> Self
	where
		I: IntoIterator<Item = OperationDescriptor>,
	{
		let mut operations = <BTreeMap<Resource, Vec<OperationDescriptor>>>::new();

		for descriptor in descriptors {
			operations.entry(descriptor.resource).or_default().push(descriptor);
		}

		Self { operations }
	}
}
impl Default for Registry {
	/// Built-in Clerk catalog; its validity is covered by the registry tests.
	fn default() -> Self {
		Self::index(catalog::operations())
	}
}

/// Builder for [`Registry`] values.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
	/// Descriptors collected so far.
	pub descriptors: Vec<OperationDescriptor>,
}
impl RegistryBuilder {
	/// Adds one descriptor.
	pub fn register(mut self, descriptor: OperationDescriptor) -> Self {
		self.descriptors.push(descriptor);

		self
	}

	/// Adds several descriptors.
	pub fn register_all<I>(mut self, descriptors: I) -> Self
	where
		I: IntoIterator<Item = OperationDescriptor>,
	{
		self.descriptors.extend(descriptors);

		self
	}

	/// Consumes the builder and validates the resulting registry.
	pub fn build(self) -> Result<Registry, RegistryError> {
		let mut seen = HashSet::new();

		for descriptor in &self.descriptors {
			if !seen.insert((descriptor.resource, descriptor.operation)) {
				return Err(RegistryError::DuplicateOperation {
					resource: descriptor.resource,
					operation: descriptor.operation,
				});
			}

			validate_path(descriptor)?;
		}

		Ok(Registry::index(self.descriptors))
	}
}

fn validate_path(descriptor: &OperationDescriptor) -> Result<(), RegistryError> {
	let operation = descriptor.operation;

	if !descriptor.path.starts_with('/') {
		return Err(RegistryError::UnrootedPath { operation, path: descriptor.path });
	}

	for placeholder in descriptor.placeholders() {
		if !descriptor.path_fields.iter().any(|field| field.key == placeholder) {
			return Err(RegistryError::UnboundPlaceholder { operation, placeholder });
		}
	}
	for field in &descriptor.path_fields {
		if !descriptor.placeholders().any(|placeholder| placeholder == field.key) {
			return Err(RegistryError::UnusedPathField { operation, key: field.key });
		}
		if !field.is_guaranteed() {
			return Err(RegistryError::OptionalPathField { operation, key: field.key });
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn builtin_catalog_passes_validation() {
		let registry = Registry::builder()
			.register_all(catalog::operations())
			.build()
			.expect("Built-in catalog should validate.");

		assert_eq!(registry.len(), 49);
		assert_eq!(Registry::default().len(), registry.len());

		for resource in Resource::ALL {
			assert!(
				!registry.operations(resource).is_empty(),
				"Resource {resource} should expose at least one operation."
			);
		}
	}

	#[test]
	fn builtin_catalog_operation_counts_match_surface() {
		let registry = Registry::default();
		let counts: Vec<usize> =
			Resource::ALL.into_iter().map(|r| registry.operations(r).len()).collect();

		assert_eq!(counts, [10, 12, 5, 4, 4, 3, 3, 3, 5]);
	}

	#[test]
	fn lookup_reports_unsupported_operation() {
		let registry = Registry::default();
		let descriptor = registry
			.lookup(Resource::Users, "banUser")
			.expect("banUser should be registered for users.");

		assert_eq!(descriptor.method, HttpMethod::Post);
		assert_eq!(descriptor.path, "/users/{userId}/ban");

		let err = registry
			.lookup(Resource::Sessions, "banUser")
			.expect_err("banUser must not resolve under sessions.");

		assert!(matches!(
			err,
			ConfigError::UnsupportedOperation { resource: Resource::Sessions, ref operation }
				if operation == "banUser"
		));
	}

	#[test]
	fn builder_rejects_duplicates_and_unbound_placeholders() {
		let get_user = OperationDescriptor::new(
			Resource::Users,
			"getUser",
			HttpMethod::Get,
			"/users/{userId}",
		)
		.path_fields([FieldSpec::path("userId")]);
		let err = Registry::builder()
			.register(get_user.clone())
			.register(get_user)
			.build()
			.expect_err("Duplicate pairs should be rejected.");

		assert_eq!(
			err,
			RegistryError::DuplicateOperation { resource: Resource::Users, operation: "getUser" }
		);

		let unbound = OperationDescriptor::new(
			Resource::Users,
			"getUser",
			HttpMethod::Get,
			"/users/{userId}",
		);
		let err = Registry::builder()
			.register(unbound)
			.build()
			.expect_err("Unbound placeholders should be rejected.");

		assert_eq!(
			err,
			RegistryError::UnboundPlaceholder { operation: "getUser", placeholder: "userId" }
		);
	}

	#[test]
	fn builder_rejects_optional_and_unused_path_fields() {
		let optional = OperationDescriptor::new(
			Resource::Sessions,
			"getSession",
			HttpMethod::Get,
			"/sessions/{sessionId}",
		)
		.path_fields([FieldSpec::text("sessionId", "sessionId")]);

		assert_eq!(
			Registry::builder().register(optional).build().expect_err("Optional path fields fail."),
			RegistryError::OptionalPathField { operation: "getSession", key: "sessionId" }
		);

		let unused = OperationDescriptor::new(
			Resource::Sessions,
			"getSessions",
			HttpMethod::Get,
			"/sessions",
		)
		.path_fields([FieldSpec::path("sessionId")]);

		assert_eq!(
			Registry::builder().register(unused).build().expect_err("Unused path fields fail."),
			RegistryError::UnusedPathField { operation: "getSessions", key: "sessionId" }
		);
	}
}
