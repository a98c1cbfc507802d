use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlButtonElement, HtmlCanvasElement, HtmlSelectElement,
};

use crate::domain::SandboxConfig;
use crate::error::{Result, SandboxError};

/// Page elements the sandbox reads from and writes to
#[derive(Clone)]
pub struct DomBindings {
    pub canvas: HtmlCanvasElement,
    pub selection: HtmlSelectElement,
    pub start: HtmlButtonElement,
    pub stop: HtmlButtonElement,
}

impl DomBindings {
    pub fn new(
        canvas: HtmlCanvasElement,
        selection: HtmlSelectElement,
        start: HtmlButtonElement,
        stop: HtmlButtonElement,
    ) -> Self {
        Self {
            canvas,
            selection,
            start,
            stop,
        }
    }

    /// Bind to the current page: look up the controls by id and append a
    /// fresh canvas to the configured container.
    pub fn from_window(config: &SandboxConfig) -> Result<Self> {
        let window = web_sys::window().ok_or(SandboxError::NoWindow)?;
        let document = window.document().ok_or(SandboxError::NoDocument)?;
        Self::from_document(&document, config)
    }

    pub fn from_document(document: &Document, config: &SandboxConfig) -> Result<Self> {
        let ids = &config.dom;
        let selection = element_by_id::<HtmlSelectElement>(document, &ids.selection, "<select>")?;
        let start = element_by_id::<HtmlButtonElement>(document, &ids.start, "<button>")?;
        let stop = element_by_id::<HtmlButtonElement>(document, &ids.stop, "<button>")?;

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SandboxError::Dom("createElement(canvas) is not a canvas".to_string()))?;
        canvas.set_width(config.canvas_width);
        canvas.set_height(config.canvas_height);

        match &ids.container {
            Some(id) => {
                let parent = document
                    .get_element_by_id(id)
                    .ok_or_else(|| SandboxError::MissingElement(id.clone()))?;
                parent.append_child(&canvas)?;
            }
            None => {
                let body = document.body().ok_or(SandboxError::NoDocument)?;
                body.append_child(&canvas)?;
            }
        }

        Ok(Self::new(canvas, selection, start, stop))
    }

    pub fn context_2d(&self) -> Result<CanvasRenderingContext2d> {
        self.canvas
            .get_context("2d")?
            .ok_or(SandboxError::NoCanvasContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SandboxError::NoCanvasContext)
    }

    /// Mirror the mode into the controls: Start and the selector are usable
    /// only while editing, Stop only while running.
    pub fn sync_mode(&self, running: bool) {
        self.selection.set_disabled(running);
        self.start.set_disabled(running);
        self.stop.set_disabled(!running);
    }
}

fn element_by_id<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SandboxError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| SandboxError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}
