use {
	crate::{
		scope::{Element, ElementHook, ElementType, Registration, ScopeTemplate},
		tree::Node,
	},
	::std::rc::Rc,
};

/// `import` element
///
/// makes the elements another document defines available to everything after the import in
/// the same scope. the document is supplied by the [loader](crate::document::DocumentLoader) the
/// importing document was constructed with
///
/// ```text
/// import: recipes
///
/// recipe: pancakes
/// ```
///
/// # title
///
/// the name passed to the loader
///
pub mod import {
	use super::*;

	/// parses the imported document and registers what it defines
	#[derive(Debug, Default)]
	pub struct Import;

	impl ElementHook for Import {
		fn finish(&self, element: &Element, _: &Node) -> Result<Vec<Registration>, String> {
			let Some(title) = element.title() else {
				return Err("nothing to import".to_string());
			};
			let name = title.source_content().trim();

			let scope = element.scope().child(&ScopeTemplate::new());
			let imported = element.document().load(name, Rc::clone(&scope))?;

			let nodes = imported
				.parse()
				.map_err(|error| format!("cannot import `{name}`: {error}"))?;
			for node in &nodes {
				for error in node.errors() {
					::tracing::warn!(
						document = name,
						range = %error.range(),
						error = error.error_message(),
						"error in imported document"
					);
				}
			}

			Ok(scope.registrations())
		}
	}

	/// the element
	#[must_use]
	pub fn element() -> ElementType {
		ElementType::new("import").with_hook(Import)
	}
}

/// the elements of this module
#[must_use]
pub fn elements() -> ScopeTemplate {
	ScopeTemplate::new().with_block(import::element())
}
