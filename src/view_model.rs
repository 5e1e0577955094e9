//! The [`ViewModel`] trait for the MVVM architecture.

use crate::app::Message;

/// Trait containing methods for `ViewModel` modules in the MVVM architecture.
pub trait ViewModel {
    /// Applies `message` to the model, possibly asking for a follow-up message.
    fn update(&mut self, message: Message) -> Option<Message>;
}
