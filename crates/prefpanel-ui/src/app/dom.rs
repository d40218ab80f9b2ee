//! web-sys implementation of the document surface.

use crate::app::storage::js_detail;
use crate::core::error::PrefsError;
use crate::core::surface::{ClassTarget, DocumentSurface};
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

const BODY_ID: &str = "body";

/// Live page the controller mutates.
#[derive(Debug)]
pub(crate) struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub(crate) fn new() -> Self {
        Self {
            document: document(),
        }
    }

    fn element(&self, id: &str) -> Result<Element, PrefsError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PrefsError::MissingElement { id: id.to_string() })
    }

    fn target(&self, target: ClassTarget<'_>) -> Result<Element, PrefsError> {
        match target {
            ClassTarget::Element(id) => self.element(id),
            ClassTarget::Body => self
                .document
                .body()
                .map(Into::into)
                .ok_or_else(|| PrefsError::MissingElement {
                    id: BODY_ID.to_string(),
                }),
        }
    }

    fn root_style(&self) -> Result<CssStyleDeclaration, PrefsError> {
        self.document
            .document_element()
            .and_then(|root| root.dyn_into::<HtmlElement>().ok())
            .map(|root| root.style())
            .ok_or_else(|| PrefsError::Dom {
                operation: "root_style",
                detail: "document element is not an HTML element".to_string(),
            })
    }
}

impl DocumentSurface for DomSurface {
    fn control_value(&self, id: &str) -> Result<String, PrefsError> {
        let element = self.element(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Ok(input.value());
        }
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            return Ok(select.value());
        }
        Ok(element.get_attribute("value").unwrap_or_default())
    }

    fn set_control_value(&mut self, id: &str, value: &str) -> Result<(), PrefsError> {
        let element = self.element(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
            return Ok(());
        }
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
            return Ok(());
        }
        element
            .set_attribute("value", value)
            .map_err(|err| PrefsError::Dom {
                operation: "set_attribute",
                detail: js_detail(&err),
            })
    }

    fn set_class(
        &mut self,
        target: ClassTarget<'_>,
        class: &str,
        enabled: bool,
    ) -> Result<(), PrefsError> {
        self.target(target)?
            .class_list()
            .toggle_with_force(class, enabled)
            .map(|_| ())
            .map_err(|err| PrefsError::Dom {
                operation: "toggle_class",
                detail: js_detail(&err),
            })
    }

    fn has_class(&self, target: ClassTarget<'_>, class: &str) -> Result<bool, PrefsError> {
        Ok(self.target(target)?.class_list().contains(class))
    }

    fn set_style_property(&mut self, name: &str, value: &str) -> Result<(), PrefsError> {
        self.root_style()?
            .set_property(name, value)
            .map_err(|err| PrefsError::Dom {
                operation: "set_property",
                detail: js_detail(&err),
            })
    }
}
