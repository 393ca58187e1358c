use {
	crate::{
		parser::basic::is_identifier,
		scope::{Element, ElementHook, ElementType, Registration, Registry, ScopeTemplate},
		tree::Node,
	},
	::std::rc::Rc,
};

/// `define` element
///
/// defines a new block element, usable by everything after the definition in the same scope
///
/// ```text
/// define: recipe
///   param: serves
///
/// recipe: pancakes
///   serves: 4
/// ```
///
/// # title
///
/// the name of the new element, an identifier
///
/// # content
///
/// `param` elements, each title names an element available within the new element
pub mod define {
	use super::*;

	/// registers the defined element
	#[derive(Debug, Default)]
	pub struct Define;

	impl ElementHook for Define {
		fn finish(&self, element: &Element, _: &Node) -> Result<Vec<Registration>, String> {
			let Some(title) = element.title() else {
				return Err("nothing to define".to_string());
			};

			let name = title.source_content().trim();
			if !is_identifier(name) {
				return Err(format!("invalid element name `{name}`"));
			}

			let mut template = ScopeTemplate::new();
			for param in element.body().iter().filter(|node| node.name() == "param") {
				if let Some(title) = param.title() {
					let name = title.source_content().trim();
					if is_identifier(name) {
						template.add_block(Rc::new(ElementType::new(name)));
					}
				}
			}

			Ok(vec![Registration::Element {
				registry: Registry::Block,
				name: name.to_string(),
				element: Rc::new(
					ElementType::new(name)
						.with_template(template)
						.with_definition(element.body().to_vec()),
				),
			}])
		}
	}

	/// the element
	#[must_use]
	pub fn element() -> ElementType {
		ElementType::new("define")
			.with_template(ScopeTemplate::new().with_block(param::element()))
			.with_hook(Define)
	}
}

/// `param` element
///
/// only available within `define`
///
/// # title
///
/// the name of the parameter
pub mod param {
	use super::*;

	/// the element
	#[must_use]
	pub fn element() -> ElementType {
		ElementType::new("param")
	}
}

/// the elements of this module
#[must_use]
pub fn elements() -> ScopeTemplate {
	ScopeTemplate::new().with_block(define::element())
}
