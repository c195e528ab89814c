//! Global modal dialog
//!
//! A single overlay shared by every part of the dashboard. Showing a new
//! modal replaces whatever was open.

use crate::clearance::ClearanceDocument;

/// Body of a modal dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalBody {
    /// Plain paragraphs
    Paragraphs(Vec<String>),
    /// A summary line followed by an error detail
    Error { summary: String, detail: String },
    /// A generated clearance certificate
    Clearance(ClearanceDocument),
    /// A gallery picture, described by its alternative text
    Picture { alt: String },
}

/// An open modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub body: ModalBody,
}

/// Where a click on the modal overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayClick {
    /// Inside the dialog content
    Content,
    /// On the backdrop around the content
    Backdrop,
}

/// Visibility and content of the global modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    current: Option<Modal>,
}

impl ModalState {
    /// Show a modal, replacing any open one
    pub fn show(&mut self, title: impl Into<String>, body: ModalBody) {
        self.current = Some(Modal {
            title: title.into(),
            body,
        });
    }

    /// Show a modal with a single paragraph
    pub fn show_message(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show(title, ModalBody::Paragraphs(vec![message.into()]));
    }

    /// Show a gallery picture titled with its alternative text
    pub fn show_picture(&mut self, alt: impl Into<String>) {
        let alt = alt.into();
        self.show(alt.clone(), ModalBody::Picture { alt });
    }

    /// Close the modal (close control)
    pub fn hide(&mut self) {
        self.current = None;
    }

    /// Handle a click on the overlay; clicks on the backdrop dismiss the modal
    pub fn click(&mut self, target: OverlayClick) {
        if target == OverlayClick::Backdrop {
            self.hide();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Modal> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_by_default() {
        let modal = ModalState::default();
        assert!(!modal.is_visible());
        assert!(modal.current().is_none());
    }

    #[test]
    fn test_show_and_close() {
        let mut modal = ModalState::default();
        modal.show_message("Aviso", "Hola");
        let current = modal.current().expect("modal shown");
        assert_eq!(current.title, "Aviso");
        assert_eq!(current.body, ModalBody::Paragraphs(vec!["Hola".to_string()]));

        modal.hide();
        assert!(!modal.is_visible());
    }

    #[test]
    fn test_show_replaces_open_modal() {
        let mut modal = ModalState::default();
        modal.show_message("Primero", "a");
        modal.show_message("Segundo", "b");
        assert_eq!(modal.current().map(|m| m.title.as_str()), Some("Segundo"));
    }

    #[test]
    fn test_picture_is_titled_with_alt_text() {
        let mut modal = ModalState::default();
        modal.show_picture("Día de la familia");
        let current = modal.current().expect("modal shown");
        assert_eq!(current.title, "Día de la familia");
        assert_eq!(
            current.body,
            ModalBody::Picture {
                alt: "Día de la familia".to_string()
            }
        );
    }

    #[test]
    fn test_backdrop_click_dismisses() {
        let mut modal = ModalState::default();
        modal.show_message("Aviso", "Hola");
        modal.click(OverlayClick::Content);
        assert!(modal.is_visible());
        modal.click(OverlayClick::Backdrop);
        assert!(!modal.is_visible());
    }
}
