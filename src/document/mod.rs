/// lines and the line table
pub mod line;
/// positions and ranges
pub mod position;

pub use {line::Line, position::{Position, SourceRange}};
use {
	crate::{
		diagnostics::ParseError,
		parser::{
			basic::whole_block,
			cursor::{Block, Cursor},
		},
		scope::Scope,
		tree::Node,
	},
	::core::{
		fmt,
		sync::atomic::{AtomicU32, Ordering},
	},
	::hashbrown::HashMap,
	::std::rc::Rc,
	::tracing::{instrument, Level},
};

/// supplies the source of documents named by `import`
pub trait DocumentLoader: fmt::Debug {
	/// the source text of the document called `name`
	///
	/// # errors
	///
	/// a message if there is no such document
	fn load(&self, name: &str) -> Result<String, String>;
}

impl DocumentLoader for HashMap<String, String> {
	fn load(&self, name: &str) -> Result<String, String> {
		self.get(name)
			.cloned()
			.ok_or_else(|| "no such document".to_string())
	}
}

/// process-unique identity of a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(u32);

impl DocumentId {
	/// a new id, never handed out before
	#[must_use]
	pub fn fresh() -> Self {
		static NEXT: AtomicU32 = AtomicU32::new(0);
		Self(NEXT.fetch_add(1, Ordering::Relaxed))
	}
}

struct DocumentData {
	id: DocumentId,
	name: String,
	source: Rc<str>,
	lines: Vec<Line>,
	global: Rc<Scope>,
	loader: Option<Rc<dyn DocumentLoader>>,
	/// names of the documents importing this one, outermost first
	importers: Vec<String>,
}

/// a source document together with its root scope
///
/// cloning shares the document
#[derive(Clone)]
pub struct Document(Rc<DocumentData>);

impl Document {
	/// construct a document, computing its line table
	///
	/// `global` becomes the root scope of the document and receives the elements the document
	/// defines while it is parsed
	#[must_use]
	pub fn new(name: impl Into<String>, source: impl Into<String>, global: Rc<Scope>) -> Self {
		Self::build(name.into(), source.into(), global, None, Vec::new())
	}

	/// construct a document that can `import` what `loader` supplies
	#[must_use]
	pub fn with_loader(
		name: impl Into<String>,
		source: impl Into<String>,
		global: Rc<Scope>,
		loader: Rc<dyn DocumentLoader>,
	) -> Self {
		Self::build(name.into(), source.into(), global, Some(loader), Vec::new())
	}

	fn build(
		name: String,
		source: String,
		global: Rc<Scope>,
		loader: Option<Rc<dyn DocumentLoader>>,
		importers: Vec<String>,
	) -> Self {
		let id = DocumentId::fresh();
		let source: Rc<str> = source.into();
		let lines = line::line_table(id, &source);

		Self(Rc::new(DocumentData {
			id,
			name,
			source,
			lines,
			global,
			loader,
			importers,
		}))
	}

	/// load the document `name` with this document's loader, parsing into `global`
	///
	/// # errors
	///
	/// if there is no loader, the loader fails or `name` is already being imported
	pub fn load(&self, name: &str, global: Rc<Scope>) -> Result<Self, String> {
		let Some(loader) = &self.0.loader else {
			return Err("documents cannot be imported here".to_string());
		};

		if name == self.0.name || self.0.importers.iter().any(|importer| importer == name) {
			return Err(format!("`{name}` imports itself"));
		}

		let source = loader
			.load(name)
			.map_err(|message| format!("cannot import `{name}`: {message}"))?;

		let mut importers = self.0.importers.clone();
		importers.push(self.0.name.clone());

		::tracing::debug!(name, importer = self.name(), "importing document");

		Ok(Self::build(
			name.to_string(),
			source,
			global,
			Some(Rc::clone(loader)),
			importers,
		))
	}

	/// the document's id
	#[must_use]
	pub fn id(&self) -> DocumentId {
		self.0.id
	}

	/// the document's display name
	#[must_use]
	pub fn name(&self) -> &str {
		&self.0.name
	}

	/// the source text
	#[must_use]
	pub fn source(&self) -> &Rc<str> {
		&self.0.source
	}

	/// all lines of the document
	#[must_use]
	pub fn lines(&self) -> &[Line] {
		&self.0.lines
	}

	/// the root scope
	#[must_use]
	pub fn global(&self) -> &Rc<Scope> {
		&self.0.global
	}

	/// the position a block without lines starts at
	#[must_use]
	pub fn end_position(&self) -> Position {
		Position::new(self.0.id, self.0.source.len(), 0, 0)
	}

	/// a cursor at the start of the whole document, in the root scope
	#[must_use]
	pub fn start(&self) -> Cursor {
		Cursor::new(
			Block::new(self.clone(), self.0.lines.clone()),
			Rc::clone(&self.0.global),
		)
	}

	/// parse the whole document with the root scope's block parser
	///
	/// content errors end up as error nodes in the returned tree
	///
	/// # errors
	///
	/// if a construct that cannot be recovered from (an unclosed fence) reaches the end of its
	/// enclosing block
	#[instrument(skip(self), fields(document = %self.name()), level = Level::INFO)]
	pub fn parse(&self) -> Result<Vec<Node>, ParseError> {
		let cursor = self.start();
		let parser = whole_block("unexpected input", self.global().block_parser().clone());

		match parser.parse(&cursor) {
			Ok((nodes, _)) => Ok(nodes),
			Err(failure) => {
				::tracing::error!(%failure, "document could not be parsed");
				Err(ParseError::from_failure(failure))
			}
		}
	}
}

impl PartialEq for Document {
	fn eq(&self, other: &Self) -> bool {
		self.0.id == other.0.id
	}
}

impl Eq for Document {}

impl fmt::Debug for Document {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Document")
			.field("id", &self.0.id)
			.field("name", &self.0.name)
			.field("lines", &self.0.lines.len())
			.finish_non_exhaustive()
	}
}
