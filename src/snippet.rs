//! The host boundary: what an editor host hands to a snippet, and how
//! a snippet reports back.
//!
//! A snippet either rewrites the text buffer in place, or posts a
//! notice and leaves the buffer untouched. There is no partial output.

use crate::sequence;
use crate::to_array::{self, ArrayError, ArrayFormat};
use crate::SequenceError;

/// A message a snippet surfaces to the host's user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// The host's notification channel.
pub trait Notify {
    fn notify(&mut self, notice: Notice);
}

/// Collects notices in order, for hosts that render them after the
/// snippet returns (and for tests).
impl Notify for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// What the host hands to a snippet: the text buffer to transform in
/// place, plus the notification channel.
pub struct TextInput<'a> {
    pub text: &'a mut String,
    notify: &'a mut dyn Notify,
}

impl<'a> TextInput<'a> {
    pub fn new(text: &'a mut String, notify: &'a mut dyn Notify) -> Self {
        Self { text, notify }
    }

    pub fn post_info(&mut self, message: impl Into<String>) {
        self.notify.notify(Notice::Info(message.into()));
    }

    pub fn post_error(&mut self, message: impl Into<String>) {
        self.notify.notify(Notice::Error(message.into()));
    }
}

/// Descriptive header a host can surface in its snippet picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    pub name: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub tags: &'static str,
}

/// A single-function text transform.
pub trait Snippet {
    fn metadata(&self) -> Metadata;
    fn run(&self, input: &mut TextInput<'_>);
}

/// Every snippet this crate ships, in picker order.
pub fn builtin_snippets() -> Vec<Box<dyn Snippet>> {
    vec![Box::new(ReverseComplement), Box::new(ToArray::default())]
}

/// Reverse-complements a DNA sequence, one sequence per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseComplement;

impl Snippet for ReverseComplement {
    fn metadata(&self) -> Metadata {
        Metadata {
            name: "Reverse Complement",
            description: "Reverse complement a DNA sequence",
            author: "Eugenio Mattei",
            tags: "complement,reverse,rc",
        }
    }

    fn run(&self, input: &mut TextInput<'_>) {
        match sequence::reverse_complement(input.text.as_str()) {
            Ok(out) => *input.text = out,
            Err(SequenceError::EmptyInput) => input.post_info("Please provide a DNA sequence."),
            Err(_) => input.post_error("Please provide a valid DNA sequence."),
        }
    }
}

/// Converts lines of text into a Python or R array literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToArray {
    pub default_format: ArrayFormat,
}

impl Snippet for ToArray {
    fn metadata(&self) -> Metadata {
        Metadata {
            name: "To Array",
            description: "Convert lines of text into a Python or R array.",
            author: "Eugenio Mattei",
            tags: "array,convert,list",
        }
    }

    fn run(&self, input: &mut TextInput<'_>) {
        // usage hint is posted unconditionally, even on success
        input.post_info("/python or /R on the first line for output format.");
        match to_array::to_array(input.text.as_str(), self.default_format) {
            Ok(out) => *input.text = out,
            Err(ArrayError::EmptyInput) => input.post_info("Please provide a text."),
            Err(err) => input.post_error(err.to_string()),
        }
    }
}
