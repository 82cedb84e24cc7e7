use uuid::Uuid;

use crate::domain::{
    chat::{
        entities::{ChatMessage, sanitize_history},
        ports::{HistoryStore, RecipeGateway},
    },
    recipe::{entities::ModelResponse, value_objects::Language},
};

/// Client-side chat state machine.
///
/// Owns the conversation log and the single-request-in-flight guard. All
/// history mutations go through `push`/`replace`, each an atomic transition
/// that persists a sanitized copy as a best-effort side effect.
pub struct ChatController<G, S>
where
    G: RecipeGateway,
    S: HistoryStore,
{
    gateway: G,
    store: S,
    history: Vec<ChatMessage>,
    language: Language,
    is_loading: bool,
}

impl<G, S> ChatController<G, S>
where
    G: RecipeGateway,
    S: HistoryStore,
{
    /// Loads and sanitizes any persisted history. A missing or corrupt
    /// record falls back to an empty log; construction never fails.
    pub fn new(gateway: G, store: S) -> Self {
        let history = match store.load() {
            Ok(saved) => sanitize_history(&saved),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load chat history, starting empty");
                Vec::new()
            }
        };

        Self {
            gateway,
            store,
            history,
            language: Language::default(),
            is_loading: false,
        }
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Sends one user turn and waits for it to settle. Returns false when
    /// the submission is empty or a request is already in flight; both are
    /// ignored without surfacing an error.
    pub async fn send_message(&mut self, text: &str, image: Option<String>) -> bool {
        let text = text.trim();
        if (text.is_empty() && image.is_none()) || self.is_loading {
            return false;
        }
        self.is_loading = true;

        self.push(ChatMessage::user(text, image.clone()));
        let placeholder = ChatMessage::loading();
        let placeholder_id = placeholder.id;
        self.push(placeholder);

        let prompt = derive_prompt(text, image.is_some());
        let result = self.gateway.fetch_recipe(prompt, image, self.language).await;

        // Whichever way the call settled, the placeholder is replaced and
        // the guard resets; the UI can never be left stuck loading.
        let content = match result {
            Ok(response) => response,
            Err(e) => ModelResponse::Error {
                error: format!("Sorry, something went wrong: {e}"),
            },
        };
        self.replace(placeholder_id, ChatMessage::model(content));
        self.is_loading = false;

        true
    }

    /// Empties the log and removes the persisted record.
    pub fn clear_history(&mut self) {
        self.history.clear();
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear persisted chat history");
        }
    }

    fn push(&mut self, message: ChatMessage) {
        self.history.push(message);
        self.persist();
    }

    /// Swaps the terminal message into the placeholder's slot, keeping its id.
    fn replace(&mut self, id: Uuid, mut message: ChatMessage) {
        match self.history.iter_mut().find(|m| m.id == id) {
            Some(slot) => {
                message.id = id;
                *slot = message;
            }
            None => self.history.push(message),
        }
        self.persist();
    }

    fn persist(&self) {
        let sanitized = sanitize_history(&self.history);
        let result = if sanitized.is_empty() {
            self.store.clear()
        } else {
            self.store.save(&sanitized)
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to persist chat history");
        }
    }
}

/// Turns the raw user input into the instruction sent to the handler.
fn derive_prompt(text: &str, has_image: bool) -> String {
    match (text.is_empty(), has_image) {
        (false, true) => format!(
            "{text}\n\nTreat the text above as the primary request and the attached photo as supporting context. Respond in the language of the request text."
        ),
        (true, true) => "Identify the dish shown in the attached photo and provide its recipe. \
             Respond in the language of any text visible in the photo, or in English if none is visible."
            .to_string(),
        _ => format!("Provide the recipe for: {text}"),
    }
}
