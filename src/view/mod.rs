//! # Views
//!
//! View-models handed to the handlebars templates, and the renderer that
//! owns the compiled templates. Templates are compiled into the binary.
//! HTML escaping stays on, so quote text and author names are always
//! rendered as text.

use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

use crate::model::{AuthorSummary, Quote, QuoteMatch};

const LAYOUT: &str = "layout";
const INDEX: &str = "index";
const RESULTS: &str = "results";
const EDIT_QUOTE: &str = "edit_quote";

const TEMPLATES: [(&str, &str); 4] = [
    (LAYOUT, include_str!("templates/layout.hbs")),
    (INDEX, include_str!("templates/index.hbs")),
    (RESULTS, include_str!("templates/results.hbs")),
    (EDIT_QUOTE, include_str!("templates/edit_quote.hbs")),
];

/// Landing page: search forms fed by the author and category lists
#[derive(Debug, Serialize)]
pub struct LandingView {
    pub authors: Vec<AuthorSummary>,
    pub categories: Vec<String>,
}

/// Results page shared by the four search routes
#[derive(Debug, Serialize)]
pub struct ResultsView {
    pub quotes: Vec<QuoteMatch>,
}

/// Edit form fragment loaded into the edit modal.
///
/// `quote` is `None` when the id does not exist; the fragment then says so.
#[derive(Debug, Serialize)]
pub struct EditQuoteView {
    pub quote: Option<Quote>,
    pub authors: Vec<AuthorSummary>,
}

pub struct ViewRenderer {
    registry: Handlebars<'static>,
}

impl ViewRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        for (name, source) in TEMPLATES {
            registry.register_template_string(name, source)?;
        }
        Ok(Self { registry })
    }

    pub fn landing(&self, view: &LandingView) -> Result<String, RenderError> {
        self.registry.render(INDEX, view)
    }

    pub fn results(&self, view: &ResultsView) -> Result<String, RenderError> {
        self.registry.render(RESULTS, view)
    }

    pub fn edit_quote(&self, view: &EditQuoteView) -> Result<String, RenderError> {
        self.registry.render(EDIT_QUOTE, view)
    }
}
