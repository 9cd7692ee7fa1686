//! Status page rendering via `minijinja`.

use crate::adapters::web::error::WebError;
use crate::adapters::web::view::StatusView;
use minijinja::Environment;

const INDEX_TEMPLATE: &str = include_str!("../../../templates/index.html");

/// Template environment with the status page pre-loaded.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, WebError> {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX_TEMPLATE)
            .map_err(|e| WebError::Template(format!("failed to add index template: {e}")))?;
        Ok(Self { env })
    }

    pub fn render_index(&self, view: &StatusView) -> Result<String, WebError> {
        self.env
            .get_template("index.html")
            .map_err(|e| WebError::Template(format!("missing index template: {e}")))?
            .render(view)
            .map_err(|e| WebError::Template(format!("index render failed: {e}")))
    }
}
