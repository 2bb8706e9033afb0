//! Display-state machine for the demo page.
//!
//! # Design
//! Mirrors the page's two independent interactions: each handler runs one
//! request and overwrites its own message slot with the returned message,
//! a fallback when the body carried none, or a fixed error literal. The
//! slots start empty and are only ever replaced, never appended to.
//! Failures are collapsed here and nowhere else; the layers below neither
//! log nor recover.

use crate::api::HelloWorldApi;

/// Fallback shown when a response body carries no `message` field.
pub const NO_MESSAGE: &str = "No message received";
/// Shown when the GET interaction fails for any reason.
pub const GET_ERROR: &str = "Error fetching message";
/// Shown when the POST interaction fails for any reason.
pub const POST_ERROR: &str = "Error sending message";

/// UI state of the demo page: two message slots and the name input buffer.
#[derive(Debug, Clone, Default)]
pub struct Page {
    get_message: String,
    post_message: String,
    name: String,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message slot of the GET interaction. Empty until first triggered.
    pub fn get_message(&self) -> &str {
        &self.get_message
    }

    /// Message slot of the POST interaction. Empty until first triggered.
    pub fn post_message(&self) -> &str {
        &self.post_message
    }

    /// Current contents of the name input.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Overwrite the name input buffer.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// GET trigger: fetch the fixed greeting into the GET slot.
    pub fn fetch_greeting(&mut self, api: &HelloWorldApi) {
        self.get_message = match api.get_hello_world() {
            Ok(greeting) => displayed(greeting.message),
            Err(_) => GET_ERROR.to_string(),
        };
    }

    /// POST trigger: submit the name input and fill the POST slot.
    ///
    /// While the input is empty this is a no-op: no request is issued and
    /// the displayed state is left alone.
    pub fn submit_name(&mut self, api: &HelloWorldApi) {
        if self.name.is_empty() {
            return;
        }
        self.post_message = match api.post_hello_world(&self.name) {
            Ok(greeting) => displayed(greeting.message),
            Err(_) => POST_ERROR.to_string(),
        };
    }
}

/// A missing and an empty `message` both fall back to the same text; a slot
/// that has been triggered is never left blank.
fn displayed(message: Option<String>) -> String {
    match message {
        Some(m) if !m.is_empty() => m,
        _ => NO_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_starts_blank() {
        let page = Page::new();
        assert_eq!(page.get_message(), "");
        assert_eq!(page.post_message(), "");
        assert_eq!(page.name(), "");
    }

    #[test]
    fn set_name_overwrites_the_buffer() {
        let mut page = Page::new();
        page.set_name("Ann");
        page.set_name("Bob");
        assert_eq!(page.name(), "Bob");
    }

    #[test]
    fn submit_with_empty_name_issues_no_request() {
        // The api points at a dead port; if a request were issued, the slot
        // would show the error literal instead of staying empty.
        let api = HelloWorldApi::new("http://127.0.0.1:1");
        let mut page = Page::new();
        page.submit_name(&api);
        assert_eq!(page.post_message(), "");
    }

    #[test]
    fn blank_messages_fall_back() {
        assert_eq!(displayed(None), NO_MESSAGE);
        assert_eq!(displayed(Some(String::new())), NO_MESSAGE);
        assert_eq!(displayed(Some("hi".to_string())), "hi");
    }
}
