use {
	crate::{
		document::Position,
		parser::{FailureKind, ParseFailure},
		tree::Node,
	},
	::miette::SourceSpan,
};

/// any diagnostic produced while handling a document
#[derive(Debug, ::thiserror::Error, ::miette::Diagnostic)]
pub enum DiagnosticKind {
	/// malformed content, the document was still parsed
	#[error(transparent)]
	#[diagnostic(transparent)]
	Content(ContentDiagnostic),
	/// the document could not be parsed
	#[error(transparent)]
	#[diagnostic(transparent)]
	Parse(ParseError),
}

/// malformed content, found as an error node in the tree
#[derive(Debug, ::thiserror::Error, ::miette::Diagnostic)]
pub enum ContentDiagnostic {
	/// an error node
	#[error("{message}")]
	#[diagnostic(code(gaintext::content::malformed), severity(Warning))]
	Malformed {
		/// what is wrong
		message: String,
		/// the content
		#[label]
		at: SourceSpan,
	},
}

impl ContentDiagnostic {
	/// the diagnostic for an error node, `None` for any other node
	#[must_use]
	pub fn from_node(node: &Node) -> Option<Self> {
		node.error_message().map(|message| Self::Malformed {
			message: message.to_string(),
			at: node.range().span(),
		})
	}
}

/// a failure no alternative could recover from
#[derive(Debug, ::thiserror::Error, ::miette::Diagnostic)]
pub enum ParseError {
	/// a construct ran into the end of its block, such as a fence that is never closed
	#[error("unexpected end of block at {position}")]
	#[diagnostic(code(gaintext::parse::end_of_scope))]
	EndOfScope {
		/// `line:column`
		position: String,
		/// where the block ended
		#[label("block ends here")]
		at: SourceSpan,
	},
	/// nothing matched where something had to
	#[error("nothing matches at {position}")]
	#[diagnostic(code(gaintext::parse::not_found))]
	NotFound {
		/// `line:column`
		position: String,
		/// the input
		#[label]
		at: SourceSpan,
	},
}

impl ParseError {
	/// the error for a failure that reached the document level
	#[must_use]
	pub fn from_failure(failure: ParseFailure) -> Self {
		let position = failure.at.left();
		let at = span_at(failure.at);

		match failure.kind {
			FailureKind::EndOfScope => Self::EndOfScope { position, at },
			FailureKind::NotFound => Self::NotFound { position, at },
		}
	}
}

fn span_at(position: Position) -> SourceSpan {
	(position.index(), 0).into()
}
