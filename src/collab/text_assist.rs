//! Rewriting slide text with an external writing assistant.

use crate::common::{ContentId, Result, SlideId};
use crate::presentation::{ContentUpdate, Outcome, SharedStore, Target};
use async_trait::async_trait;
use tracing::{debug, warn};

/// What the assistant should do with a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistAction {
    Improve,
    Shorten,
    Expand,
    FixGrammar,
    /// Turn prose into bullet points
    Bulletize,
    /// Free-form instruction
    Custom(String),
}

impl AssistAction {
    /// Instruction sent along with the text.
    pub fn instruction(&self) -> &str {
        match self {
            AssistAction::Improve => "Improve the clarity and impact of this slide text.",
            AssistAction::Shorten => "Make this slide text shorter while keeping its meaning.",
            AssistAction::Expand => "Expand this slide text with more detail.",
            AssistAction::FixGrammar => "Fix spelling and grammar in this slide text.",
            AssistAction::Bulletize => "Rewrite this slide text as concise bullet points.",
            AssistAction::Custom(instruction) => instruction,
        }
    }
}

/// A text generation service.
#[async_trait]
pub trait TextAssist: Send + Sync {
    /// Name used in error reports.
    fn name(&self) -> &str;

    /// Produce the rewritten text. Failures should be [`Error::Collaborator`](crate::common::Error::Collaborator).
    async fn rewrite(&self, text: &str, action: &AssistAction) -> Result<String>;
}

/// Rewrite one content item of the current presentation.
///
/// The item is read, the assistant runs without any lock held, and the result
/// is committed with an ordinary content update. If the slide or item went
/// away in the meantime the update resolves to the usual no-op outcome.
pub async fn apply_text_assist(
    store: &SharedStore,
    assist: &dyn TextAssist,
    slide_id: &SlideId,
    content_id: &ContentId,
    action: &AssistAction,
) -> Result<Outcome> {
    let text = {
        let guard = store.read();
        let Some(current) = guard.current() else {
            return Ok(Outcome::NoPresentation);
        };
        let Some(slide) = current.slide(slide_id) else {
            return Ok(Outcome::NotFound(Target::Slide(slide_id.clone())));
        };
        let Some(item) = slide.content(content_id) else {
            return Ok(Outcome::NotFound(Target::Content(content_id.clone())));
        };
        item.value.clone()
    };

    let rewritten = assist.rewrite(&text, action).await.inspect_err(|e| {
        warn!(assistant = assist.name(), content = %content_id, error = %e, "text assist failed");
    })?;

    let outcome = store
        .write()
        .update_content(slide_id, content_id, ContentUpdate::value(rewritten));
    debug!(assistant = assist.name(), content = %content_id, outcome = %outcome, "text assist applied");
    Ok(outcome)
}
